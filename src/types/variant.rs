//! The fixed set of derived colour variants.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShadesError};

/// A named derivation of a base colour.
///
/// The declaration order is the output order everywhere: in expanded maps,
/// in emitted rules and in serialised output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    Base,
    Light,
    Lighter,
    Dark,
    Darker,
    Trans,
}

impl Variant {
    /// Every variant, in output order.
    pub const ALL: [Variant; 6] = [
        Variant::Base,
        Variant::Light,
        Variant::Lighter,
        Variant::Dark,
        Variant::Darker,
        Variant::Trans,
    ];

    /// The name used in class selectors and serialised maps.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Base => "base",
            Variant::Light => "light",
            Variant::Lighter => "lighter",
            Variant::Dark => "dark",
            Variant::Darker => "darker",
            Variant::Trans => "trans",
        }
    }

    /// Position within [`Variant::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Variant {
    type Err = ShadesError;

    fn from_str(s: &str) -> Result<Self> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| ShadesError::Parse {
                message: format!("Unknown variant: {}", s),
                help: Some("Variants are base, light, lighter, dark, darker, trans".to_string()),
            })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
