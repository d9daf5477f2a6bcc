//! Variant expansion.
//!
//! Turns every base colour into its six variants in one pass. Either the
//! whole map is produced or an error is returned; there are no partial
//! results.

use tracing::debug;

use crate::error::Result;
use crate::types::{
    darken, lighten, translucent_error, transparentize, BaseColorMap, Colour, DerivationParams,
    ExpandedColorMap, Variant, VariantMap,
};

/// Expand every base colour into its variants.
///
/// Parameters are validated before any colour is touched. A translucent
/// base colour aborts the expansion with an error naming its key.
pub fn expand(base: &BaseColorMap, params: &DerivationParams) -> Result<ExpandedColorMap> {
    params.validate()?;

    let mut entries = Vec::with_capacity(base.len());
    for (name, colour) in base.iter() {
        if !colour.is_opaque() {
            return Err(translucent_error(name, colour));
        }
        entries.push((name.to_string(), expand_colour(colour, params)));
    }

    debug!(colours = entries.len(), "expanded palette");
    Ok(ExpandedColorMap::from_entries(entries))
}

/// Parse `(name, colour string)` pairs and expand them.
pub fn expand_str<I, K, V>(entries: I, params: &DerivationParams) -> Result<ExpandedColorMap>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    params.validate()?;
    let base = BaseColorMap::parse(entries)?;
    expand(&base, params)
}

/// Derive the six variants of a single colour.
pub fn expand_colour(colour: Colour, params: &DerivationParams) -> VariantMap {
    VariantMap::from_fn(|variant| match variant {
        Variant::Base => colour,
        Variant::Light => lighten(colour, params.shade_amount),
        Variant::Lighter => lighten(colour, params.shader_amount),
        Variant::Dark => darken(colour, params.shade_amount),
        Variant::Darker => darken(colour, params.shader_amount),
        Variant::Trans => transparentize(colour, params.trans_amount),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShadesError;

    fn brand() -> BaseColorMap {
        BaseColorMap::parse([
            ("primary", "#6ab446"),
            ("secondary", "#cccccc"),
            ("neutral", "#333333"),
        ])
        .unwrap()
    }

    #[test]
    fn test_keys_preserved_in_order() {
        let expanded = expand(&brand(), &DerivationParams::default()).unwrap();
        let names: Vec<_> = expanded.names().collect();
        assert_eq!(names, vec!["primary", "secondary", "neutral"]);
    }

    #[test]
    fn test_base_variant_is_input() {
        let base = brand();
        let expanded = expand(&base, &DerivationParams::default()).unwrap();
        for (name, colour) in base.iter() {
            assert_eq!(expanded.get(name).unwrap().base(), colour);
        }
    }

    #[test]
    fn test_grey_variants() {
        let base = BaseColorMap::parse([("neutral", "#333333")]).unwrap();
        let expanded = expand(&base, &DerivationParams::new(10.0, 20.0, 0.5)).unwrap();
        let neutral = expanded.get("neutral").unwrap();

        assert_eq!(neutral.get(Variant::Lighter), Colour::rgb(0x66, 0x66, 0x66));
        assert_eq!(neutral.get(Variant::Darker), Colour::BLACK);
        assert_eq!(neutral.get(Variant::Trans), Colour::rgba(0x33, 0x33, 0x33, 0.5));
    }

    #[test]
    fn test_tiers_use_their_amounts() {
        let green = Colour::rgb(0x6a, 0xb4, 0x46);
        let params = DerivationParams::new(10.0, 20.0, 0.25);
        let variants = expand_colour(green, &params);

        assert_eq!(variants.get(Variant::Light), lighten(green, 10.0));
        assert_eq!(variants.get(Variant::Lighter), lighten(green, 20.0));
        assert_eq!(variants.get(Variant::Dark), darken(green, 10.0));
        assert_eq!(variants.get(Variant::Darker), darken(green, 20.0));
        assert_eq!(variants.get(Variant::Trans).alpha, 0.75);
    }

    #[test]
    fn test_white_and_black_clamp() {
        let base = BaseColorMap::parse([("white", "#fff"), ("black", "#000")]).unwrap();
        let expanded = expand(&base, &DerivationParams::new(50.0, 50.0, 0.0)).unwrap();

        let white = expanded.get("white").unwrap();
        assert_eq!(white.get(Variant::Light), Colour::WHITE);
        assert_eq!(white.get(Variant::Lighter), Colour::WHITE);

        let black = expanded.get("black").unwrap();
        assert_eq!(black.get(Variant::Dark), Colour::BLACK);
        assert_eq!(black.get(Variant::Darker), Colour::BLACK);
    }

    #[test]
    fn test_idempotent() {
        let base = brand();
        let params = DerivationParams::default();
        assert_eq!(expand(&base, &params).unwrap(), expand(&base, &params).unwrap());
    }

    #[test]
    fn test_invalid_params_fail_first() {
        let params = DerivationParams::new(10.0, 20.0, 2.0);
        let err = expand_str([("bad", "not-a-color")], &params).unwrap_err();
        assert!(matches!(err, ShadesError::InvalidParameter { name: "trans_amount", .. }));
    }

    #[test]
    fn test_invalid_colour_names_key() {
        let err = expand_str([("bad", "not-a-color")], &DerivationParams::default()).unwrap_err();
        assert!(matches!(err, ShadesError::InvalidColor { ref key, .. } if key == "bad"));
    }

    #[test]
    fn test_translucent_inserted_colour_rejected() {
        let mut base = brand();
        base.insert("glass", Colour::rgba(255, 255, 255, 0.3));
        let err = expand(&base, &DerivationParams::default()).unwrap_err();
        assert!(matches!(err, ShadesError::InvalidColor { ref key, .. } if key == "glass"));
    }

    #[test]
    fn test_empty_map() {
        let expanded = expand(&BaseColorMap::new(), &DerivationParams::default()).unwrap();
        assert!(expanded.is_empty());
    }
}
