//! Tone parameter set and its validation.

use std::fmt;

use thiserror::Error;

/// A tone parameter that is zero, negative or not finite.
///
/// `name` is the user-facing parameter name (`enhance`, `back_gamma`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid tone parameter {name} = {value} (must be a finite number greater than 0)")]
pub struct ToneError {
    /// User-facing parameter name
    pub name: &'static str,
    /// The rejected value
    pub value: f64,
}

/// Which side of the pipeline a [`ToneParameters`] set drives.
///
/// Only used to name parameters in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneRole {
    /// Applied before palette matching (`enhance`, `saturation`, `gamma`)
    Forward,
    /// Applied after blending (`back_enhance`, `back_saturation`, `back_gamma`)
    Restoring,
}

impl ToneRole {
    fn names(self) -> [&'static str; 3] {
        match self {
            ToneRole::Forward => ["enhance", "saturation", "gamma"],
            ToneRole::Restoring => ["back_enhance", "back_saturation", "back_gamma"],
        }
    }
}

impl fmt::Display for ToneRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneRole::Forward => f.write_str("forward"),
            ToneRole::Restoring => f.write_str("restoring"),
        }
    }
}

/// Contrast, saturation and gamma values for one side of the pipeline.
///
/// All three must be finite and greater than zero; 1.0 leaves the image
/// unchanged. For the forward side the values are applied as given. For the
/// restoring side the pipeline applies `1 / contrast`, `saturation` and
/// `1 / gamma`, so passing the same numbers on both sides approximately
/// undoes the forward shaping.
///
/// # Example
///
/// ```
/// use palette_map::{ToneParameters, ToneRole};
///
/// let tone = ToneParameters::new(2.0, 1.5, 1.1);
/// assert!(tone.validate(ToneRole::Forward).is_ok());
///
/// let broken = ToneParameters { gamma: 0.0, ..ToneParameters::neutral() };
/// let err = broken.validate(ToneRole::Restoring).unwrap_err();
/// assert_eq!(err.name, "back_gamma");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParameters {
    /// Contrast factor: blend toward (< 1) or away from (> 1) the image's
    /// mean grey
    pub contrast: f64,
    /// Saturation factor: blend toward (< 1) or away from (> 1) each pixel's
    /// own grey
    pub saturation: f64,
    /// Gamma exponent, applied on the 0–255 scale
    pub gamma: f64,
}

impl ToneParameters {
    /// Create a parameter set. Values are checked by [`validate()`](Self::validate).
    #[inline]
    pub fn new(contrast: f64, saturation: f64, gamma: f64) -> Self {
        Self {
            contrast,
            saturation,
            gamma,
        }
    }

    /// All factors 1.0: no tone change.
    #[inline]
    pub fn neutral() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Whether every factor is exactly 1.0.
    #[inline]
    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }

    /// Check that every value is finite and greater than zero.
    ///
    /// # Errors
    ///
    /// Returns a [`ToneError`] for the first offending value, named after
    /// its role (`enhance` or `back_enhance`, and so on).
    pub fn validate(&self, role: ToneRole) -> Result<(), ToneError> {
        let [contrast, saturation, gamma] = role.names();
        for (name, value) in [
            (contrast, self.contrast),
            (saturation, self.saturation),
            (gamma, self.gamma),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ToneError { name, value });
            }
        }
        Ok(())
    }
}

impl Default for ToneParameters {
    fn default() -> Self {
        Self::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        let tone = ToneParameters::default();
        assert!(tone.is_neutral());
        assert_eq!(tone, ToneParameters::new(1.0, 1.0, 1.0));
        assert!(!ToneParameters::new(2.0, 1.0, 1.0).is_neutral());
    }

    #[test]
    fn test_validate_accepts_positive_values() {
        let tone = ToneParameters::new(0.5, 4.0, 0.7);
        assert_eq!(tone.validate(ToneRole::Forward), Ok(()));
        assert_eq!(tone.validate(ToneRole::Restoring), Ok(()));
    }

    #[test]
    fn test_validate_names_forward_parameters() {
        let err = ToneParameters::new(0.0, 1.0, 1.0)
            .validate(ToneRole::Forward)
            .unwrap_err();
        assert_eq!(err.name, "enhance");
        assert_eq!(err.value, 0.0);

        let err = ToneParameters::new(1.0, -0.5, 1.0)
            .validate(ToneRole::Forward)
            .unwrap_err();
        assert_eq!(err.name, "saturation");
    }

    #[test]
    fn test_validate_names_restoring_parameters() {
        let err = ToneParameters::new(-2.0, 1.0, 1.0)
            .validate(ToneRole::Restoring)
            .unwrap_err();
        assert_eq!(err.name, "back_enhance");

        let err = ToneParameters::new(1.0, 1.0, 0.0)
            .validate(ToneRole::Restoring)
            .unwrap_err();
        assert_eq!(err.name, "back_gamma");
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ToneParameters::new(1.0, bad, 1.0)
                .validate(ToneRole::Restoring)
                .unwrap_err();
            assert_eq!(err.name, "back_saturation");
        }
    }

    #[test]
    fn test_error_message() {
        let err = ToneError {
            name: "back_gamma",
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid tone parameter back_gamma = 0 (must be a finite number greater than 0)"
        );
    }

    #[test]
    fn test_role_display() {
        assert_eq!(ToneRole::Forward.to_string(), "forward");
        assert_eq!(ToneRole::Restoring.to_string(), "restoring");
    }
}
