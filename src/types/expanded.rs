//! Expanded colour maps: every base colour with its six variants.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{Colour, Variant};

/// The six derived colours of one base colour.
///
/// Always holds exactly one colour per [`Variant`], iterated in
/// [`Variant::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantMap {
    colours: [Colour; 6],
}

impl VariantMap {
    /// Build a map by computing each variant in order.
    pub(crate) fn from_fn(f: impl FnMut(Variant) -> Colour) -> Self {
        Self {
            colours: Variant::ALL.map(f),
        }
    }

    /// Get the colour for a variant.
    pub fn get(&self, variant: Variant) -> Colour {
        self.colours[variant.index()]
    }

    /// The unmodified base colour.
    pub fn base(&self) -> Colour {
        self.get(Variant::Base)
    }

    /// Iterate `(variant, colour)` pairs in variant order.
    pub fn iter(&self) -> impl Iterator<Item = (Variant, Colour)> + '_ {
        Variant::ALL.into_iter().zip(self.colours.iter().copied())
    }
}

impl Serialize for VariantMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.colours.len()))?;
        for (variant, colour) in self.iter() {
            map.serialize_entry(variant.name(), &colour)?;
        }
        map.end()
    }
}

/// Result of a [`ExpandedColorMap::lookup`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// No variant was requested: all variants of the colour.
    Variants(&'a VariantMap),
    /// A single resolved variant.
    Colour(Colour),
}

impl Lookup<'_> {
    /// The single colour, if this lookup resolved one.
    pub fn colour(self) -> Option<Colour> {
        match self {
            Lookup::Colour(c) => Some(c),
            Lookup::Variants(_) => None,
        }
    }
}

/// Named variant maps in the order of the base map they came from.
///
/// Produced once by [`crate::expand`]; there is no way to modify it
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpandedColorMap {
    entries: Vec<(String, VariantMap)>,
}

impl ExpandedColorMap {
    pub(crate) fn from_entries(entries: Vec<(String, VariantMap)>) -> Self {
        Self { entries }
    }

    /// Get the variants of a colour.
    pub fn get(&self, name: &str) -> Option<&VariantMap> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Probe the map without failing.
    ///
    /// With no variant, returns every variant of `name`. With a variant,
    /// returns that colour. Unknown names give `None`.
    pub fn lookup(&self, name: &str, variant: Option<Variant>) -> Option<Lookup<'_>> {
        let variants = self.get(name)?;
        Some(match variant {
            Some(v) => Lookup::Colour(variants.get(v)),
            None => Lookup::Variants(variants),
        })
    }

    /// Like [`lookup`](Self::lookup), with the variant given by name.
    ///
    /// An unrecognised variant name is treated as absent data, not an error.
    pub fn lookup_str(&self, name: &str, variant: Option<&str>) -> Option<Lookup<'_>> {
        match variant {
            Some(v) => {
                let variant = v.parse::<Variant>().ok()?;
                self.lookup(name, Some(variant))
            }
            None => self.lookup(name, None),
        }
    }

    /// Iterate `(name, variants)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantMap)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Colour names in order.
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

impl Serialize for ExpandedColorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, variants) in &self.entries {
            map.serialize_entry(name, variants)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExpandedColorMap {
        let grey = VariantMap::from_fn(|v| Colour::rgb(v.index() as u8, 0, 0));
        ExpandedColorMap::from_entries(vec![("grey".to_string(), grey)])
    }

    #[test]
    fn test_variant_map_order() {
        let map = VariantMap::from_fn(|v| Colour::rgb(v.index() as u8, 0, 0));
        let order: Vec<_> = map.iter().map(|(v, c)| (v, c.r)).collect();
        assert_eq!(
            order,
            vec![
                (Variant::Base, 0),
                (Variant::Light, 1),
                (Variant::Lighter, 2),
                (Variant::Dark, 3),
                (Variant::Darker, 4),
                (Variant::Trans, 5),
            ]
        );
    }

    #[test]
    fn test_lookup_variant() {
        let map = sample();
        let found = map.lookup("grey", Some(Variant::Dark));
        assert_eq!(found, Some(Lookup::Colour(Colour::rgb(3, 0, 0))));
    }

    #[test]
    fn test_lookup_all_variants() {
        let map = sample();
        match map.lookup("grey", None) {
            Some(Lookup::Variants(v)) => assert_eq!(v.base(), Colour::rgb(0, 0, 0)),
            other => panic!("Expected variants, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_missing_is_none() {
        let map = sample();
        assert!(map.lookup("blue", None).is_none());
        assert!(map.lookup("blue", Some(Variant::Base)).is_none());
        assert!(map.lookup_str("grey", Some("lightest")).is_none());
        assert!(map.lookup_str("blue", Some("base")).is_none());
    }

    #[test]
    fn test_lookup_str() {
        let map = sample();
        let found = map.lookup_str("grey", Some("trans")).and_then(Lookup::colour);
        assert_eq!(found, Some(Colour::rgb(5, 0, 0)));
        assert!(matches!(map.lookup_str("grey", None), Some(Lookup::Variants(_))));
    }

    #[test]
    fn test_serialize_keeps_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r##"{"grey":{"base":"#000000","light":"#010000","lighter":"#020000","dark":"#030000","darker":"#040000","trans":"#050000"}}"##
        );
    }
}
