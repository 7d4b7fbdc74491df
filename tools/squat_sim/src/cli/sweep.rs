use clap::Parser;
use squat::{Parameter, Session};

use crate::{
    cli::{ConfigArgs, ParameterArgs},
    error::{Error, Result},
};

/// Move one slider through a range of values and report the pose at every step
#[derive(Parser, Debug)]
pub struct Sweep {
    /// The parameter to sweep, e.g. `femur`, `bar` or `hip-angle`
    pub parameter: Parameter,

    /// First value, defaults to the lower end of the slider
    #[arg(long, allow_negative_numbers = true)]
    pub from: Option<f64>,

    /// Last value, defaults to the upper end of the slider
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<f64>,

    /// Number of evenly spaced values, including both ends
    #[arg(long, default_value_t = 10)]
    pub steps: usize,

    #[clap(flatten)]
    pub config: ConfigArgs,

    /// Values for the other sliders
    #[clap(flatten)]
    pub parameters: ParameterArgs,
}

impl Sweep {
    pub fn sweep(self) -> Result<()> {
        let values = self.values()?;
        let config = self.config.load()?;
        let start = self.parameters.apply(config.defaults);

        let mut session = Session::new(config);
        session.replace(start)?;

        let parameter = self.parameter;
        println!("{:<10} {:>8} {:>8}  status", parameter.to_string(), "bar y", "torso");
        session.on_frame(move |frame| {
            let value = parameter.format_value(frame.parameters.get(parameter));
            match frame.solution() {
                Some(solution) => println!(
                    "{value:<10} {:>8.1} {:>7.1}°  {}",
                    solution.pose.bar.y,
                    solution.angles.torso,
                    frame.status()
                ),
                None => println!("{value:<10} {:>8} {:>8}  {}", "-", "-", frame.status()),
            }
        });

        for value in values {
            session.set(parameter, value)?;
        }

        Ok(())
    }

    fn values(&self) -> Result<Vec<f64>> {
        if self.steps < 2 {
            return Err(Error::TooFewSteps(self.steps));
        }

        let range = self.parameter.range();
        let from = self.from.unwrap_or(range.min);
        let to = self.to.unwrap_or(range.max);
        let last = (self.steps - 1) as f64;

        Ok((0..self.steps)
            .map(|step| from + (to - from) * step as f64 / last)
            .collect())
    }
}
