//! Ordered map of named base colours.

use crate::error::{Result, ShadesError};

use super::Colour;

/// Named base colours in insertion order.
///
/// Names are unique. Insertion order is the order every derived structure
/// (expanded maps, emitted rules) follows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseColorMap {
    entries: Vec<(String, Colour)>,
}

impl BaseColorMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `(name, colour string)` pairs into a map.
    ///
    /// Fails on the first entry whose value is not an opaque colour, naming
    /// that entry. A repeated name replaces the earlier value in place.
    pub fn parse<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut map = Self::new();
        for (key, value) in entries {
            let key = key.into();
            let value = value.as_ref();
            let colour = Colour::parse(value).map_err(|e| ShadesError::InvalidColor {
                key: key.clone(),
                value: value.to_string(),
                reason: e.to_string(),
            })?;
            if !colour.is_opaque() {
                return Err(translucent_error(&key, colour));
            }
            map.insert(key, colour);
        }
        Ok(map)
    }

    /// Insert a colour, returning the previous value for that name.
    ///
    /// An existing name keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, colour: Colour) -> Option<Colour> {
        let name = name.into();
        if let Some(pos) = self.entries.iter().position(|(n, _)| *n == name) {
            return Some(std::mem::replace(&mut self.entries[pos].1, colour));
        }
        self.entries.push((name, colour));
        None
    }

    /// Get a colour by name.
    pub fn get(&self, name: &str) -> Option<Colour> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
    }

    /// Iterate `(name, colour)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Colour)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }

    /// Colour names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Colour)> for BaseColorMap {
    fn from_iter<T: IntoIterator<Item = (K, Colour)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, colour) in iter {
            map.insert(name, colour);
        }
        map
    }
}

/// Error for a colour that parsed but carries transparency.
pub(crate) fn translucent_error(key: &str, colour: Colour) -> ShadesError {
    ShadesError::InvalidColor {
        key: key.to_string(),
        value: colour.to_css(),
        reason: format!("{} is not opaque", colour.to_css()),
    }
}
