//! Configuration of the simulator, stored in `squat.toml`.
use std::path::Path;

use nalgebra::{Point2, Vector2};
use odal::{Config, ConfigKind, ErrorKind};
use serde::{Deserialize, Serialize};

use crate::{error::Result, params::Parameters};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Position of the ankle on the drawing surface.
    pub anchor: Point2<f64>,
    /// Slider positions at startup.
    pub defaults: Parameters,
    pub scene: SceneConfig,
}

impl Config for SimulatorConfig {
    const PATH: &'static str = "squat.toml";
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            anchor: Point2::new(200.0, 250.0),
            defaults: Parameters::default(),
            scene: SceneConfig::default(),
        }
    }
}

impl SimulatorConfig {
    /// Load the config from `main_dir`, merged with `overlay_dir` if that contains a
    /// `squat.toml` as well.
    ///
    /// The configured defaults have to fit on the sliders.
    pub fn load_from(main_dir: impl AsRef<Path>, overlay_dir: Option<&Path>) -> Result<Self> {
        let main_dir = main_dir.as_ref();

        let config = match overlay_dir {
            None => Self::load(main_dir)?,
            Some(overlay_dir) => match Self::load_with_overlay(main_dir, overlay_dir) {
                Ok(config) => config,
                Err(odal::Error {
                    kind:
                        ErrorKind::Load {
                            path,
                            config_kind: ConfigKind::Overlay,
                            ..
                        },
                    ..
                }) => {
                    tracing::warn!("failed to read overlay from `{path}`, using main config only");
                    Self::load(main_dir)?
                }
                Err(error) => return Err(error.into()),
            },
        };

        config.defaults.validate()?;
        Ok(config)
    }
}

/// Sizes and offsets of everything drawn around the pose, in drawing units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    /// Half the length of the ground line, centered on the ankle.
    pub ground_half_width: f64,
    pub ground_width: f64,
    /// Extent of the dashed plumb line above the ankle.
    pub plumb_above: f64,
    /// Extent of the dashed plumb line below the ankle.
    pub plumb_below: f64,
    pub plumb_dash: [f64; 2],
    pub segment_width: f64,
    pub joint_radius: f64,
    pub bar_radius: f64,
    pub arc_radius: f64,
    /// Horizontal distance of the angle labels to the left of their joint.
    pub label_offset: f64,
    /// Offset of the hip abduction label from the hip.
    pub hip_label_offset: Vector2<f64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ground_half_width: 100.0,
            ground_width: 2.0,
            plumb_above: 150.0,
            plumb_below: 10.0,
            plumb_dash: [2.0, 2.0],
            segment_width: 3.0,
            joint_radius: 5.0,
            bar_radius: 8.0,
            arc_radius: 20.0,
            label_offset: 30.0,
            hip_label_offset: Vector2::new(-5.0, 20.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::error::{Error, ParameterError};
    use crate::params::Parameter;

    const SHIPPED: &str = include_str!("../../../config/squat.toml");

    #[test]
    fn shipped_config_matches_default() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(SimulatorConfig::PATH), SHIPPED).unwrap();

        let config = SimulatorConfig::load_from(temp_dir.path(), None).unwrap();
        assert_eq!(config, SimulatorConfig::default());
    }

    #[test]
    fn overlay_replaces_defaults() {
        let temp_dir = tempdir().unwrap();
        let overlay_dir = temp_dir.path().join("overlay/tall");
        fs::create_dir_all(&overlay_dir).unwrap();
        fs::write(temp_dir.path().join(SimulatorConfig::PATH), SHIPPED).unwrap();
        fs::write(
            overlay_dir.join(SimulatorConfig::PATH),
            "[defaults]\ntorso_length = 62.0\n",
        )
        .unwrap();

        let config = SimulatorConfig::load_from(temp_dir.path(), Some(&overlay_dir)).unwrap();

        assert_eq!(config.defaults.torso_length, 62.0);
        assert_eq!(config.defaults.femur_length, 50.0);
        assert_eq!(config.anchor, Point2::new(200.0, 250.0));
    }

    #[test]
    fn missing_overlay_falls_back_to_main() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(SimulatorConfig::PATH), SHIPPED).unwrap();

        let config =
            SimulatorConfig::load_from(temp_dir.path(), Some(&temp_dir.path().join("missing")))
                .unwrap();
        assert_eq!(config, SimulatorConfig::default());
    }

    #[test]
    fn defaults_outside_the_sliders_are_rejected() {
        let temp_dir = tempdir().unwrap();
        let contents = SHIPPED.replace("hip_angle = 10.0", "hip_angle = 120.0");
        fs::write(temp_dir.path().join(SimulatorConfig::PATH), contents).unwrap();

        let error = SimulatorConfig::load_from(temp_dir.path(), None).unwrap_err();
        assert!(matches!(
            error,
            Error::Parameter(ParameterError::OutOfRange {
                parameter: Parameter::HipAngle,
                ..
            })
        ));
    }

    #[test]
    fn missing_main_config_is_an_error() {
        let temp_dir = tempdir().unwrap();

        let error = SimulatorConfig::load_from(temp_dir.path(), None).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }
}
