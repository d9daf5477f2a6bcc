//! Derivation parameters for variant expansion.

use crate::error::{Result, ShadesError};

/// Amounts used to derive variants from a base colour.
///
/// `light`/`dark` use `shade_amount`, `lighter`/`darker` use
/// `shader_amount` and `trans` uses `trans_amount`. A shader amount at
/// least as large as the shade amount is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivationParams {
    /// Lightness points for the first tier, in `[0, 100]`.
    pub shade_amount: f32,
    /// Lightness points for the second tier, in `[0, 100]`.
    pub shader_amount: f32,
    /// Alpha removed for `trans`, in `[0, 1]`.
    pub trans_amount: f32,
}

impl DerivationParams {
    pub fn new(shade_amount: f32, shader_amount: f32, trans_amount: f32) -> Self {
        Self {
            shade_amount,
            shader_amount,
            trans_amount,
        }
    }

    /// Check every amount is inside its range.
    pub fn validate(&self) -> Result<()> {
        check_range("shade_amount", self.shade_amount, 100.0, "a percentage in [0, 100]")?;
        check_range("shader_amount", self.shader_amount, 100.0, "a percentage in [0, 100]")?;
        check_range("trans_amount", self.trans_amount, 1.0, "a fraction in [0, 1]")?;
        Ok(())
    }
}

impl Default for DerivationParams {
    fn default() -> Self {
        Self::new(10.0, 20.0, 0.5)
    }
}

fn check_range(name: &'static str, value: f32, max: f32, expected: &'static str) -> Result<()> {
    // NaN fails the contains check
    if (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(ShadesError::InvalidParameter {
            name,
            value,
            expected,
        })
    }
}
