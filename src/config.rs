//! Palette configuration (YAML) parsing.
//!
//! A palette config lists base colours in order and, optionally, the
//! derivation amounts:
//!
//! ```yaml
//! colors:
//!   primary: "#6ab446"
//!   neutral: "#333333"
//! params:
//!   shade: 10%
//!   shader: 20%
//!   trans: 0.5
//! ```
//!
//! Hex colours must be quoted, since YAML treats `#` as a comment.

use std::fmt;
use std::path::Path;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use tracing::debug;

use crate::emit::{emit, StyleRule};
use crate::error::{Result, ShadesError};
use crate::expand::expand;
use crate::types::{BaseColorMap, DerivationParams, ExpandedColorMap};

/// A palette definition loaded from YAML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Base colours, in file order.
    pub colors: ColourTable,

    /// Derivation amounts. Missing fields use the defaults.
    pub params: ParamsConfig,
}

/// Raw `name: value` colour entries in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColourTable(pub Vec<(String, String)>);

/// Derivation amounts as written in the config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    pub shade: Amount,
    pub shader: Amount,
    pub trans: Amount,
}

/// A number (`10`, `0.5`) or a percentage string (`"10%"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f32),
    Text(String),
}

impl Default for ParamsConfig {
    fn default() -> Self {
        let defaults = DerivationParams::default();
        Self {
            shade: Amount::Number(defaults.shade_amount),
            shader: Amount::Number(defaults.shader_amount),
            trans: Amount::Number(defaults.trans_amount),
        }
    }
}

impl Amount {
    /// Read as percentage points: `10` and `"10%"` are both `10`.
    fn as_percent(&self, name: &str) -> Result<f32> {
        match self {
            Amount::Number(n) => Ok(*n),
            Amount::Text(s) => parse_number(s.trim().trim_end_matches('%'), name, s),
        }
    }

    /// Read as a fraction: `0.5` and `"50%"` are both `0.5`.
    fn as_fraction(&self, name: &str) -> Result<f32> {
        match self {
            Amount::Number(n) => Ok(*n),
            Amount::Text(s) => {
                let trimmed = s.trim();
                match trimmed.strip_suffix('%') {
                    Some(percent) => Ok(parse_number(percent, name, s)? / 100.0),
                    None => parse_number(trimmed, name, s),
                }
            }
        }
    }
}

fn parse_number(number: &str, name: &str, original: &str) -> Result<f32> {
    number.trim().parse::<f32>().map_err(|_| ShadesError::Parse {
        message: format!("Invalid {} amount: {}", name, original),
        help: Some("Use a number or a percentage like 20%".to_string()),
    })
}

impl PaletteConfig {
    /// Load a palette config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ShadesError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read palette config: {}", e),
        })?;

        let config = Self::parse(&content)?;
        debug!(path = %path.display(), colours = config.colors.0.len(), "loaded palette config");
        Ok(config)
    }

    /// Parse a palette config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| ShadesError::Parse {
            message: format!("Invalid palette config: {}", e),
            help: Some("Check the YAML syntax and quote hex colours (\"#6ab446\")".to_string()),
        })
    }

    /// The base colours, validated.
    pub fn base_map(&self) -> Result<BaseColorMap> {
        BaseColorMap::parse(self.colors.0.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// The derivation amounts. Ranges are checked by [`expand`].
    pub fn params(&self) -> Result<DerivationParams> {
        Ok(DerivationParams::new(
            self.params.shade.as_percent("shade")?,
            self.params.shader.as_percent("shader")?,
            self.params.trans.as_fraction("trans")?,
        ))
    }
}

/// Run the whole pipeline for a config: expand, then emit.
pub fn build(config: &PaletteConfig) -> Result<(ExpandedColorMap, Vec<StyleRule>)> {
    let params = config.params()?;
    params.validate()?;
    let base = config.base_map()?;
    let expanded = expand(&base, &params)?;
    let rules = emit(&expanded);
    Ok((expanded, rules))
}

impl<'de> Deserialize<'de> for ColourTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = ColourTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of colour names to colour values")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<ColourTable, A::Error> {
                let mut entries: Vec<(String, String)> = Vec::new();
                while let Some((name, value)) = map.next_entry::<String, Option<String>>()? {
                    if entries.iter().any(|(n, _)| *n == name) {
                        return Err(de::Error::custom(format!("duplicate colour '{}'", name)));
                    }
                    let value = value.ok_or_else(|| {
                        de::Error::custom(format!(
                            "colour '{}' has no value (quote hex colours)",
                            name
                        ))
                    })?;
                    entries.push((name, value));
                }
                Ok(ColourTable(entries))
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
