//! shades - Colour variant expansion and utility-class generation
//!
//! A library for turning a palette of named base colours into lightened,
//! darkened and translucent variants, and into `.color-*` / `.bg-*` utility
//! class rules for those variants.
//!
//! ```
//! use shades::{emit, expand, BaseColorMap, DerivationParams};
//!
//! let base = BaseColorMap::parse([("primary", "#6ab446")])?;
//! let expanded = expand(&base, &DerivationParams::default())?;
//! let rules = emit(&expanded);
//!
//! assert_eq!(rules[0].selector, ".color-primary-base");
//! assert_eq!(rules[0].value, "#6ab446");
//! # Ok::<(), shades::ShadesError>(())
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod expand;
pub mod stylesheet;
pub mod types;

pub use config::{build, PaletteConfig};
pub use emit::{class_selector, emit, Property, StyleRule};
pub use error::{Result, ShadesError};
pub use expand::{expand, expand_colour, expand_str};
pub use stylesheet::{
    render_stylesheet, to_json, write_palette_json, write_stylesheet, StyleFormat,
};
pub use types::{
    darken, lighten, transparentize, BaseColorMap, Colour, DerivationParams, ExpandedColorMap,
    Lookup, Variant, VariantMap,
};
