//! Core domain types for shades.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - sRGB colour values with alpha
//! - `BaseColorMap` - Named base colours in order
//! - `ExpandedColorMap` - Base colours with their derived variants
//! - `lighten` / `darken` / `transparentize` - colour adjustments

mod adjust;
mod base;
mod colour;
mod expanded;
mod params;
mod variant;

pub use adjust::{darken, lighten, transparentize};
pub use base::BaseColorMap;
pub(crate) use base::translucent_error;
pub use colour::Colour;
pub use expanded::{ExpandedColorMap, Lookup, VariantMap};
pub use params::DerivationParams;
pub use variant::Variant;
