//! Fluid typography scale definitions.
//!
//! A type scale is a sequence of font sizes `base * ratio^step`. Each step is
//! rendered as a CSS `clamp()` that grows linearly with the viewport between
//! a minimum and maximum width.

use crate::error::TokenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named modular-scale ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioPreset {
    /// 15:16
    MinorSecond,
    /// 8:9
    MajorSecond,
    /// 5:6
    MinorThird,
    /// 4:5
    MajorThird,
    /// 3:4
    PerfectFourth,
    /// 1:√2
    AugmentedFourth,
    /// 2:3
    PerfectFifth,
    /// 1:φ
    GoldenRatio,
}

impl RatioPreset {
    /// Every preset, smallest ratio first.
    pub const ALL: [Self; 8] = [
        Self::MinorSecond,
        Self::MajorSecond,
        Self::MinorThird,
        Self::MajorThird,
        Self::PerfectFourth,
        Self::AugmentedFourth,
        Self::PerfectFifth,
        Self::GoldenRatio,
    ];

    /// Kebab-case name used on the command line and in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinorSecond => "minor-second",
            Self::MajorSecond => "major-second",
            Self::MinorThird => "minor-third",
            Self::MajorThird => "major-third",
            Self::PerfectFourth => "perfect-fourth",
            Self::AugmentedFourth => "augmented-fourth",
            Self::PerfectFifth => "perfect-fifth",
            Self::GoldenRatio => "golden-ratio",
        }
    }

    /// The multiplier between consecutive steps.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::MinorSecond => 1.067,
            Self::MajorSecond => 1.125,
            Self::MinorThird => 1.2,
            Self::MajorThird => 1.25,
            Self::PerfectFourth => 1.333,
            Self::AugmentedFourth => 1.414,
            Self::PerfectFifth => 1.5,
            Self::GoldenRatio => 1.618,
        }
    }

    /// Finds a preset by its kebab-case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
    }
}

/// Scale ratio: either a named preset or an explicit multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RatioRepr", into = "RatioRepr")]
pub enum Ratio {
    /// A named preset
    Preset(RatioPreset),
    /// An explicit multiplier
    Custom(f64),
}

impl Ratio {
    /// The numeric multiplier.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Preset(preset) => preset.value(),
            Self::Custom(value) => value,
        }
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::Preset(RatioPreset::PerfectFourth)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(preset) => f.write_str(preset.name()),
            Self::Custom(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for Ratio {
    type Err = TokenError;

    /// Parses a preset name, falling back to a decimal multiplier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(preset) = RatioPreset::from_name(s) {
            return Ok(Self::Preset(preset));
        }
        s.trim().parse::<f64>().map(Self::Custom).map_err(|_| {
            TokenError::configuration(format!(
                "unknown ratio '{}' (expected a preset name such as 'perfect-fourth' or a number)",
                s.trim()
            ))
        })
    }
}

/// Config-file form of [`Ratio`]: `ratio = "golden-ratio"` or `ratio = 1.2`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RatioRepr {
    Value(f64),
    Name(String),
}

impl TryFrom<RatioRepr> for Ratio {
    type Error = TokenError;

    fn try_from(repr: RatioRepr) -> Result<Self, Self::Error> {
        match repr {
            RatioRepr::Value(value) => Ok(Self::Custom(value)),
            RatioRepr::Name(name) => name.parse(),
        }
    }
}

impl From<Ratio> for RatioRepr {
    fn from(ratio: Ratio) -> Self {
        match ratio {
            Ratio::Preset(preset) => Self::Name(preset.name().to_string()),
            Ratio::Custom(value) => Self::Value(value),
        }
    }
}

/// Default step indices: two steps below the base, five above.
#[must_use]
pub fn default_steps() -> Vec<i32> {
    (-2..=5).collect()
}

/// Inputs to the type scale generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeScaleOptions {
    /// Font size at step 0 on the widest viewport, in px
    #[serde(default = "default_base_size")]
    pub base_size: f64,
    /// Multiplier between consecutive steps
    #[serde(default)]
    pub ratio: Ratio,
    /// Viewport width where sizes bottom out, in px
    #[serde(default = "default_min_viewport")]
    pub min_viewport: f64,
    /// Viewport width where sizes top out, in px
    #[serde(default = "default_max_viewport")]
    pub max_viewport: f64,
    /// Step indices to generate, in output order
    #[serde(default = "default_steps")]
    pub steps: Vec<i32>,
}

const fn default_base_size() -> f64 {
    16.0
}

const fn default_min_viewport() -> f64 {
    320.0
}

const fn default_max_viewport() -> f64 {
    1280.0
}

impl Default for TypeScaleOptions {
    fn default() -> Self {
        Self {
            base_size: default_base_size(),
            ratio: Ratio::default(),
            min_viewport: default_min_viewport(),
            max_viewport: default_max_viewport(),
            steps: default_steps(),
        }
    }
}

impl TypeScaleOptions {
    /// Checks that the options describe a computable scale.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Configuration`] if the ratio or base size is not
    /// a positive finite number, the viewport range is empty or inverted, no
    /// steps were requested, or a step's size overflows or underflows `f64`.
    pub fn validate(&self) -> Result<(), TokenError> {
        let ratio = self.ratio.value();
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(TokenError::configuration(format!(
                "ratio must be a positive number, got {}",
                self.ratio
            )));
        }
        if !self.base_size.is_finite() || self.base_size <= 0.0 {
            return Err(TokenError::configuration(format!(
                "base size must be a positive number of px, got {}",
                self.base_size
            )));
        }
        if !self.min_viewport.is_finite()
            || !self.max_viewport.is_finite()
            || self.max_viewport <= self.min_viewport
        {
            return Err(TokenError::configuration(format!(
                "max viewport ({}px) must be greater than min viewport ({}px)",
                self.max_viewport, self.min_viewport
            )));
        }
        if self.steps.is_empty() {
            return Err(TokenError::configuration("at least one step is required"));
        }
        for &step in &self.steps {
            let size = self.base_size * ratio.powi(step);
            if !size.is_finite() || size <= 0.0 {
                return Err(TokenError::configuration(format!(
                    "step {step} is out of range for ratio {} and base size {}px",
                    self.ratio, self.base_size
                )));
            }
        }
        Ok(())
    }
}

/// The three components of a CSS `clamp()` font size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClampExpression {
    /// Lower bound, in rem
    pub min_rem: f64,
    /// Constant part of the preferred value, in rem
    pub preferred_rem: f64,
    /// Viewport-relative part of the preferred value, in vw
    pub preferred_vw: f64,
    /// Upper bound, in rem
    pub max_rem: f64,
}

impl fmt::Display for ClampExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "clamp({:.2}rem, {:.2}rem + {:.2}vw, {:.2}rem)",
            unsigned_zero(self.min_rem),
            unsigned_zero(self.preferred_rem),
            unsigned_zero(self.preferred_vw),
            unsigned_zero(self.max_rem)
        )
    }
}

/// Maps values that print as zero at two decimals to `0.0`, so tiny negative
/// intercepts never render as `-0.00`.
fn unsigned_zero(value: f64) -> f64 {
    if value.abs() < 0.005 {
        0.0
    } else {
        value
    }
}

/// One step of a type scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleStep {
    /// Step index (0 = base size)
    pub step: i32,
    /// Size at the minimum viewport, in px
    pub min_size_px: f64,
    /// Size at the maximum viewport, in px
    pub max_size_px: f64,
    /// Fluid size expression
    pub clamp: ClampExpression,
}

impl ScaleStep {
    /// Token name, e.g. `step-0` or `step--2`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("step-{}", self.step)
    }

    /// Minimum size, e.g. `12.80px`.
    #[must_use]
    pub fn min_size_label(&self) -> String {
        format!("{:.2}px", self.min_size_px)
    }

    /// Maximum size, e.g. `16.00px`.
    #[must_use]
    pub fn max_size_label(&self) -> String {
        format!("{:.2}px", self.max_size_px)
    }

    /// Maximum size in rem with three decimals, e.g. `1.000rem`.
    #[must_use]
    pub fn rem_label(&self) -> String {
        format!("{:.3}rem", self.max_size_px / 16.0)
    }
}

/// A generated scale: the options it came from plus one entry per step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeScale {
    /// Options the scale was generated from
    pub options: TypeScaleOptions,
    /// Steps in the order requested
    pub steps: Vec<ScaleStep>,
}

impl TypeScale {
    /// Looks up a step by index.
    #[must_use]
    pub fn step(&self, index: i32) -> Option<&ScaleStep> {
        self.steps.iter().find(|s| s.step == index)
    }

    /// Iterates steps in output order.
    pub fn iter(&self) -> impl Iterator<Item = &ScaleStep> {
        self.steps.iter()
    }
}
