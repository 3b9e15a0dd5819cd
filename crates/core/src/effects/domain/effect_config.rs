use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::constants::{DEFAULT_INTENSITY, MAX_BLUR_RADIUS, MAX_INTENSITY};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectConfigError {
    #[error("intensity must be between 0 and 100, got {0}")]
    IntensityOutOfRange(u32),
    #[error("unknown effect '{0}', expected one of: blur, pixelate, motion")]
    UnknownKind(String),
}

/// How a region is obscured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    #[default]
    Blur,
    Pixelate,
    Motion,
}

impl EffectKind {
    pub const ALL: &[EffectKind] = &[EffectKind::Blur, EffectKind::Motion, EffectKind::Pixelate];

    pub fn as_str(self) -> &'static str {
        match self {
            EffectKind::Blur => "blur",
            EffectKind::Pixelate => "pixelate",
            EffectKind::Motion => "motion",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectKind {
    type Err = EffectConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blur" | "gaussian" => Ok(EffectKind::Blur),
            "pixelate" => Ok(EffectKind::Pixelate),
            "motion" => Ok(EffectKind::Motion),
            other => Err(EffectConfigError::UnknownKind(other.to_string())),
        }
    }
}

/// Effect strength on a 0–100 scale.
///
/// Each effect maps intensity to its own parameter; see the accessor methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: Intensity = Intensity(0);
    pub const MAX: Intensity = Intensity(MAX_INTENSITY);

    pub fn new(value: u32) -> Result<Self, EffectConfigError> {
        if value > MAX_INTENSITY as u32 {
            return Err(EffectConfigError::IntensityOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// Clamps out-of-range input instead of rejecting it (slider input).
    pub fn saturating(value: u32) -> Self {
        Self(value.min(MAX_INTENSITY as u32) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Gaussian standard deviation in pixels: `(i/100)² × 20`.
    ///
    /// Quadratic so low intensities barely blur.
    pub fn blur_radius(self) -> f64 {
        let t = self.0 as f64 / MAX_INTENSITY as f64;
        t * t * MAX_BLUR_RADIUS
    }

    /// Pixelation block size in source pixels: `i/5 + 2`.
    pub fn pixelate_factor(self) -> f64 {
        self.0 as f64 / 5.0 + 2.0
    }

    /// Number of motion-smear passes: `max(2, floor(i/5))`.
    pub fn motion_steps(self) -> usize {
        (self.0 as usize / 5).max(2)
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(DEFAULT_INTENSITY)
    }
}

impl TryFrom<u32> for Intensity {
    type Error = EffectConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Intensity> for u32 {
    fn from(value: Intensity) -> Self {
        value.0 as u32
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Effect selection: which algorithm, and how strong.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectConfig {
    pub kind: EffectKind,
    pub intensity: Intensity,
}

impl EffectConfig {
    pub fn new(kind: EffectKind, intensity: Intensity) -> Self {
        Self { kind, intensity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn intensity(v: u32) -> Intensity {
        Intensity::new(v).unwrap()
    }

    // ── Blur radius ──────────────────────────────────────────────────

    #[rstest]
    #[case(0, 0.0)]
    #[case(10, 0.2)]
    #[case(50, 5.0)]
    #[case(100, 20.0)]
    fn test_blur_radius(#[case] i: u32, #[case] expected: f64) {
        assert_relative_eq!(intensity(i).blur_radius(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_blur_radius_is_monotonic() {
        let radii: Vec<f64> = (0..=100).map(|i| intensity(i).blur_radius()).collect();
        assert!(radii.windows(2).all(|w| w[0] <= w[1]));
    }

    // ── Pixelate factor ──────────────────────────────────────────────

    #[rstest]
    #[case(0, 2.0)]
    #[case(7, 3.4)]
    #[case(50, 12.0)]
    #[case(100, 22.0)]
    fn test_pixelate_factor(#[case] i: u32, #[case] expected: f64) {
        assert_relative_eq!(intensity(i).pixelate_factor(), expected, epsilon = 1e-9);
    }

    // ── Motion steps ─────────────────────────────────────────────────

    #[rstest]
    #[case(0, 2)]
    #[case(9, 2)]
    #[case(10, 2)]
    #[case(15, 3)]
    #[case(49, 9)]
    #[case(100, 20)]
    fn test_motion_steps(#[case] i: u32, #[case] expected: usize) {
        assert_eq!(intensity(i).motion_steps(), expected);
    }

    #[test]
    fn test_motion_steps_monotonic_and_at_least_two() {
        let steps: Vec<usize> = (0..=100).map(|i| intensity(i).motion_steps()).collect();
        assert!(steps.iter().all(|&s| s >= 2));
        assert!(steps.windows(2).all(|w| w[0] <= w[1]));
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn test_intensity_rejects_above_max() {
        assert_eq!(
            Intensity::new(101),
            Err(EffectConfigError::IntensityOutOfRange(101))
        );
    }

    #[test]
    fn test_intensity_saturating_clamps() {
        assert_eq!(Intensity::saturating(250), Intensity::MAX);
        assert_eq!(Intensity::saturating(42).value(), 42);
    }

    #[test]
    fn test_defaults_match_demo() {
        let config = EffectConfig::default();
        assert_eq!(config.kind, EffectKind::Blur);
        assert_eq!(config.intensity.value(), 10);
    }

    #[rstest]
    #[case("blur", EffectKind::Blur)]
    #[case("gaussian", EffectKind::Blur)]
    #[case("Pixelate", EffectKind::Pixelate)]
    #[case(" motion ", EffectKind::Motion)]
    fn test_kind_from_str(#[case] input: &str, #[case] expected: EffectKind) {
        assert_eq!(input.parse::<EffectKind>().unwrap(), expected);
    }

    #[test]
    fn test_kind_from_str_rejects_unknown() {
        assert!(matches!(
            "sepia".parse::<EffectKind>(),
            Err(EffectConfigError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_config_serde() {
        let config = EffectConfig::new(EffectKind::Motion, intensity(35));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"kind":"motion","intensity":35}"#);
        let back: EffectConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_config_deserialize_rejects_out_of_range_intensity() {
        let result: Result<EffectConfig, _> =
            serde_json::from_str(r#"{"kind":"blur","intensity":300}"#);
        assert!(result.is_err());
    }
}
