//! The six slider parameters and the store holding their current values.
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::ParameterError;

/// Inclusive range a slider can be moved in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// The value at `t` of the way through the range, `t` in `[0, 1]`.
    #[must_use]
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + (self.max - self.min) * t
    }
}

impl fmt::Display for ParameterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Names one field of [`Parameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Parameter {
    #[strum(to_string = "femur-length", serialize = "femur")]
    FemurLength,
    #[strum(to_string = "tibia-length", serialize = "tibia")]
    TibiaLength,
    #[strum(to_string = "torso-length", serialize = "torso")]
    TorsoLength,
    #[strum(to_string = "bar-position", serialize = "bar")]
    BarPosition,
    #[strum(to_string = "ankle-angle", serialize = "ankle")]
    AnkleAngle,
    #[strum(to_string = "hip-angle", serialize = "hip")]
    HipAngle,
}

impl Parameter {
    /// Range of the slider controlling this parameter.
    #[must_use]
    pub const fn range(self) -> ParameterRange {
        match self {
            Parameter::FemurLength | Parameter::TibiaLength => ParameterRange::new(35.0, 55.0),
            Parameter::TorsoLength => ParameterRange::new(40.0, 65.0),
            Parameter::BarPosition => ParameterRange::new(0.3, 1.0),
            Parameter::AnkleAngle => ParameterRange::new(-60.0, 60.0),
            Parameter::HipAngle => ParameterRange::new(0.0, 90.0),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Parameter::FemurLength => "Femur Length (cm)",
            Parameter::TibiaLength => "Tibia Length (cm)",
            Parameter::TorsoLength => "Torso Length (cm)",
            Parameter::BarPosition => "Bar Position (% up torso)",
            Parameter::AnkleAngle => "Ankle Angle (deg)",
            Parameter::HipAngle => "Hip Width Angle (deg)",
        }
    }

    /// Number of decimals shown next to the slider.
    #[must_use]
    pub const fn precision(self) -> usize {
        match self {
            Parameter::BarPosition => 2,
            _ => 1,
        }
    }

    /// Formats `value` the way the slider displays it.
    #[must_use]
    pub fn format_value(self, value: f64) -> String {
        format!("{value:.*}", self.precision())
    }
}

/// Anthropometric and postural inputs of the pose.
///
/// ## Units
/// - lengths: centimeters
/// - `bar_position`: fraction of the hip to shoulder distance, counted from the hip
/// - angles: degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameters {
    pub femur_length: f64,
    pub tibia_length: f64,
    pub torso_length: f64,
    pub bar_position: f64,
    /// Shank angle from vertical.
    pub ankle_angle: f64,
    /// Hip abduction, foreshortens the femur in the viewing plane.
    pub hip_angle: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            femur_length: 50.0,
            tibia_length: 40.0,
            torso_length: 55.0,
            bar_position: 0.85,
            ankle_angle: -20.0,
            hip_angle: 10.0,
        }
    }
}

impl Parameters {
    #[must_use]
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::FemurLength => self.femur_length,
            Parameter::TibiaLength => self.tibia_length,
            Parameter::TorsoLength => self.torso_length,
            Parameter::BarPosition => self.bar_position,
            Parameter::AnkleAngle => self.ankle_angle,
            Parameter::HipAngle => self.hip_angle,
        }
    }

    pub fn set(&mut self, parameter: Parameter, value: f64) {
        let field = match parameter {
            Parameter::FemurLength => &mut self.femur_length,
            Parameter::TibiaLength => &mut self.tibia_length,
            Parameter::TorsoLength => &mut self.torso_length,
            Parameter::BarPosition => &mut self.bar_position,
            Parameter::AnkleAngle => &mut self.ankle_angle,
            Parameter::HipAngle => &mut self.hip_angle,
        };
        *field = value;
    }

    /// Iterate over all parameters with their current value.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        Parameter::iter().map(|parameter| (parameter, self.get(parameter)))
    }

    /// Checks that every value is finite and inside its slider range.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (parameter, value) in self.iter() {
            check_finite(parameter, value)?;

            let range = parameter.range();
            if !range.contains(value) {
                return Err(ParameterError::OutOfRange {
                    parameter,
                    value,
                    range,
                });
            }
        }

        Ok(())
    }
}

fn check_finite(parameter: Parameter, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NotFinite { parameter, value })
    }
}

/// Consistent copy of all parameters, taken at one generation of the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub generation: u64,
    pub parameters: Parameters,
}

/// Holds the current [`Parameters`].
///
/// Every accepted change bumps the generation, reads hand out copies so a solve never sees fields
/// from two different generations.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    defaults: Parameters,
    current: Parameters,
    generation: u64,
}

impl ParameterStore {
    #[must_use]
    pub fn new(defaults: Parameters) -> Self {
        Self {
            defaults,
            current: defaults,
            generation: 0,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            parameters: self.current,
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &Parameters {
        &self.defaults
    }

    /// Replace a single parameter.
    ///
    /// Values outside the slider range are accepted, non-finite values are rejected and leave the
    /// store untouched.
    pub fn set(&mut self, parameter: Parameter, value: f64) -> Result<Snapshot, ParameterError> {
        check_finite(parameter, value)?;

        if !parameter.range().contains(value) {
            tracing::debug!(
                "{parameter} = {value} is outside of the slider range {}",
                parameter.range()
            );
        }

        self.current.set(parameter, value);
        Ok(self.bump())
    }

    /// Replace all parameters at once, as a single generation.
    pub fn replace(&mut self, parameters: Parameters) -> Result<Snapshot, ParameterError> {
        for (parameter, value) in parameters.iter() {
            check_finite(parameter, value)?;
        }

        self.current = parameters;
        Ok(self.bump())
    }

    /// Restore the parameters the store was created with.
    pub fn reset(&mut self) -> Snapshot {
        self.current = self.defaults;
        self.bump()
    }

    fn bump(&mut self) -> Snapshot {
        self.generation += 1;
        tracing::debug!(generation = self.generation, "parameters changed");

        self.snapshot()
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}
