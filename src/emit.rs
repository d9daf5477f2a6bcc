//! Utility-class rule generation.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::types::{ExpandedColorMap, Variant};

/// CSS property a generated rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    Color,
    BackgroundColor,
}

impl Property {
    /// Properties in emission order for each variant.
    pub const ALL: [Property; 2] = [Property::Color, Property::BackgroundColor];

    /// The CSS property name.
    pub fn as_str(self) -> &'static str {
        match self {
            Property::Color => "color",
            Property::BackgroundColor => "background-color",
        }
    }

    /// Leading segment of the generated class name.
    pub fn class_prefix(self) -> &'static str {
        match self {
            Property::Color => "color",
            Property::BackgroundColor => "bg",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single generated rule: `selector { property: value }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StyleRule {
    pub selector: String,
    pub property: Property,
    pub value: String,
}

impl StyleRule {
    pub fn new(selector: impl Into<String>, property: Property, value: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            property,
            value: value.into(),
        }
    }
}

/// Class selector for a colour variant, e.g. `.bg-primary-light`.
pub fn class_selector(property: Property, name: &str, variant: Variant) -> String {
    format!(".{}-{}-{}", property.class_prefix(), name, variant)
}

/// Generate the rules for an expanded map.
///
/// Order is colour order, then variant order, then `color` before
/// `background-color`. Nothing is sorted, merged or deduplicated.
pub fn emit(expanded: &ExpandedColorMap) -> Vec<StyleRule> {
    let mut rules = Vec::with_capacity(expanded.len() * Variant::ALL.len() * Property::ALL.len());

    for (name, variants) in expanded.iter() {
        for (variant, colour) in variants.iter() {
            let value = colour.to_css();
            for property in Property::ALL {
                rules.push(StyleRule::new(
                    class_selector(property, name, variant),
                    property,
                    value.clone(),
                ));
            }
        }
    }

    debug!(rules = rules.len(), "emitted style rules");
    rules
}
