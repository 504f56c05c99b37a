use palette_map::{BlendWeight, MapError, ToneParameters, ToneRole};

/// Recommended bounds for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    const fn new(name: &'static str, min: f64, max: f64) -> Self {
        Self { name, min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const WEIGHT_RANGE: ParamRange = ParamRange::new("weight", 0.0, 1.0);
pub const ENHANCE_RANGE: ParamRange = ParamRange::new("enhance", 0.5, 4.0);
pub const BACK_ENHANCE_RANGE: ParamRange = ParamRange::new("back_enhance", 0.5, 2.0);
pub const SATURATION_RANGE: ParamRange = ParamRange::new("saturation", 0.1, 4.0);
pub const BACK_SATURATION_RANGE: ParamRange = ParamRange::new("back_saturation", 0.2, 2.0);
pub const GAMMA_RANGE: ParamRange = ParamRange::new("gamma", 0.7, 1.3);
pub const BACK_GAMMA_RANGE: ParamRange = ParamRange::new("back_gamma", 0.7, 1.3);

/// A parameter outside its recommended range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutOfRange {
    pub range: ParamRange,
    pub value: f64,
}

/// Optional overrides for [`MapSettings`], as given by a preset or flags.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettingsOverrides {
    pub weight: Option<f64>,
    pub enhance: Option<f64>,
    pub back_enhance: Option<f64>,
    pub saturation: Option<f64>,
    pub back_saturation: Option<f64>,
    pub gamma: Option<f64>,
    pub back_gamma: Option<f64>,
}

/// Weight and tone parameters for one mapping run.
///
/// Values are kept raw until [`validate`](Self::validate) turns them into
/// checked types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSettings {
    pub weight: f64,
    pub tone: ToneParameters,
    pub back_tone: ToneParameters,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            weight: BlendWeight::default().value(),
            tone: ToneParameters::neutral(),
            back_tone: ToneParameters::neutral(),
        }
    }
}

impl MapSettings {
    /// Replace every value the overrides set.
    pub fn apply(mut self, overrides: &SettingsOverrides) -> Self {
        let set = |slot: &mut f64, value: Option<f64>| {
            if let Some(value) = value {
                *slot = value;
            }
        };
        set(&mut self.weight, overrides.weight);
        set(&mut self.tone.contrast, overrides.enhance);
        set(&mut self.back_tone.contrast, overrides.back_enhance);
        set(&mut self.tone.saturation, overrides.saturation);
        set(&mut self.back_tone.saturation, overrides.back_saturation);
        set(&mut self.tone.gamma, overrides.gamma);
        set(&mut self.back_tone.gamma, overrides.back_gamma);
        self
    }

    pub fn blend_weight(&self) -> Result<BlendWeight, MapError> {
        BlendWeight::new(self.weight)
    }

    /// Check every value the way the mapper will, so bad settings are
    /// reported before any file is read.
    pub fn validate(&self) -> Result<BlendWeight, MapError> {
        let weight = self.blend_weight()?;
        self.tone.validate(ToneRole::Forward)?;
        self.back_tone.validate(ToneRole::Restoring)?;
        Ok(weight)
    }

    /// Parameters outside the recommended ranges. These still map, but
    /// rarely give useful results.
    pub fn out_of_range(&self) -> Vec<OutOfRange> {
        [
            (WEIGHT_RANGE, self.weight),
            (ENHANCE_RANGE, self.tone.contrast),
            (BACK_ENHANCE_RANGE, self.back_tone.contrast),
            (SATURATION_RANGE, self.tone.saturation),
            (BACK_SATURATION_RANGE, self.back_tone.saturation),
            (GAMMA_RANGE, self.tone.gamma),
            (BACK_GAMMA_RANGE, self.back_tone.gamma),
        ]
        .into_iter()
        .filter(|(range, value)| !range.contains(*value))
        .map(|(range, value)| OutOfRange { range, value })
        .collect()
    }
}
