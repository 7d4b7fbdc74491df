use clap::Parser;
use squat::Session;

use crate::{
    cli::{ConfigArgs, ParameterArgs},
    error::Result,
    report::{Report, format_frame},
};

/// Solve the pose for one set of parameters
#[derive(Parser, Debug)]
pub struct Solve {
    #[clap(flatten)]
    pub config: ConfigArgs,

    #[clap(flatten)]
    pub parameters: ParameterArgs,

    /// Print the pose, angles, status and draw list as JSON
    #[arg(long)]
    pub json: bool,
}

impl Solve {
    pub fn solve(self) -> Result<()> {
        let config = self.config.load()?;
        let parameters = self.parameters.apply(config.defaults);

        let mut session = Session::new(config);
        let frame = session.replace(parameters)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&Report::from(frame))?);
        } else {
            print!("{}", format_frame(frame));
        }

        Ok(())
    }
}
