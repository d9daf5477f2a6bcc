use miette::Diagnostic;
use thiserror::Error;

/// Main error type for shades operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShadesError {
    #[error("Invalid colour for '{key}': {reason}")]
    #[diagnostic(
        code(shades::color),
        help("Base colours must be opaque: use #RRGGBB, #RGB, rgb(r, g, b), or a CSS colour keyword")
    )]
    InvalidColor {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Invalid parameter {name}: {value} (expected {expected})")]
    #[diagnostic(code(shades::param))]
    InvalidParameter {
        name: &'static str,
        value: f32,
        expected: &'static str,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(shades::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(shades::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(shades::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ShadesError>;
