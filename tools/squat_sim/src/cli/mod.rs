use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use squat::{Parameter, Parameters, SimulatorConfig};

use crate::error::Result;

pub mod interactive;
pub mod solve;
pub mod sweep;

/// `squat_sim` - Bottom position squat simulator
///
/// Computes the joint positions of a simplified body at the bottom of a squat, with the bar kept
/// directly above the ankle.
///
/// # Solving a single pose
/// ```sh
/// squat_sim solve --torso 60 --hip 25
/// ```
///
/// # Exploring a parameter
/// ```sh
/// squat_sim sweep bar --steps 8
/// ```
///
/// # Moving sliders by hand
/// ```sh
/// squat_sim interactive
/// ```
/// and type lines such as `hip 30`, `reset` or `quit`.
#[derive(Parser)]
#[clap(name = "squat_sim", version)]
pub struct Cli {
    #[clap(subcommand)]
    pub action: Commands,
}

/// All possible commands for the cli, used for clap derive macros.
#[derive(Subcommand)]
pub enum Commands {
    Solve(solve::Solve),
    Sweep(sweep::Sweep),
    Interactive(interactive::Interactive),
}

/// Where to find `squat.toml`.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigArgs {
    /// Directory containing `squat.toml`, built-in defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory with a `squat.toml` overlay, merged over the main config
    #[arg(long, requires = "config")]
    pub overlay: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<SimulatorConfig> {
        let Some(main_dir) = &self.config else {
            tracing::debug!("no config directory given, using built-in defaults");
            return Ok(SimulatorConfig::default());
        };

        Ok(SimulatorConfig::load_from(main_dir, self.overlay.as_deref())?)
    }
}

/// Slider values, anything left out keeps its configured default.
#[derive(Args, Clone, Debug, Default)]
pub struct ParameterArgs {
    /// Femur length in cm
    #[arg(long, allow_negative_numbers = true)]
    pub femur: Option<f64>,

    /// Tibia length in cm
    #[arg(long, allow_negative_numbers = true)]
    pub tibia: Option<f64>,

    /// Torso length in cm
    #[arg(long, allow_negative_numbers = true)]
    pub torso: Option<f64>,

    /// Bar position as a fraction up the torso, from the hip
    #[arg(long, allow_negative_numbers = true)]
    pub bar: Option<f64>,

    /// Ankle angle in degrees from vertical
    #[arg(long, allow_negative_numbers = true)]
    pub ankle: Option<f64>,

    /// Hip opening angle in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub hip: Option<f64>,
}

impl ParameterArgs {
    /// Apply the given values on top of `defaults`.
    #[must_use]
    pub fn apply(&self, defaults: Parameters) -> Parameters {
        let mut parameters = defaults;

        for (parameter, value) in [
            (Parameter::FemurLength, self.femur),
            (Parameter::TibiaLength, self.tibia),
            (Parameter::TorsoLength, self.torso),
            (Parameter::BarPosition, self.bar),
            (Parameter::AnkleAngle, self.ankle),
            (Parameter::HipAngle, self.hip),
        ] {
            if let Some(value) = value {
                parameters.set(parameter, value);
            }
        }

        parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_solve_arguments() {
        let cli = Cli::try_parse_from(["squat_sim", "solve", "--ankle", "-35", "--hip", "20"])
            .unwrap();

        let Commands::Solve(solve) = cli.action else {
            panic!("expected solve command");
        };
        let parameters = solve.parameters.apply(Parameters::default());

        assert_eq!(parameters.ankle_angle, -35.0);
        assert_eq!(parameters.hip_angle, 20.0);
        assert_eq!(parameters.femur_length, 50.0);
    }

    #[test]
    fn parse_sweep_parameter() {
        let cli = Cli::try_parse_from(["squat_sim", "sweep", "bar", "--steps", "4"]).unwrap();

        let Commands::Sweep(sweep) = cli.action else {
            panic!("expected sweep command");
        };
        assert_eq!(sweep.parameter, Parameter::BarPosition);
        assert_eq!(sweep.steps, 4);
    }

    #[test]
    fn overlay_requires_config() {
        let result = Cli::try_parse_from(["squat_sim", "solve", "--overlay", "config/overlay"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_config_uses_defaults() {
        let config = ConfigArgs::default().load().unwrap();
        assert_eq!(config, SimulatorConfig::default());
    }
}
