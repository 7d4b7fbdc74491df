use std::io::{self, BufRead, Write};

use clap::Parser;
use squat::{Parameter, Session};

use crate::{
    cli::{ConfigArgs, ParameterArgs},
    error::Result,
    report::format_frame,
};

/// Move sliders by typing `<parameter> <value>` lines on stdin
#[derive(Parser, Debug)]
pub struct Interactive {
    #[clap(flatten)]
    pub config: ConfigArgs,

    /// Starting values for the sliders
    #[clap(flatten)]
    pub parameters: ParameterArgs,
}

/// A single line of input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Set(Parameter, f64),
    Show,
    Reset,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let mut words = line.split_whitespace();

        let command = match (words.next(), words.next(), words.next()) {
            (Some("show"), None, None) => Command::Show,
            (Some("reset"), None, None) => Command::Reset,
            (Some("quit" | "exit"), None, None) => Command::Quit,
            (Some(name), Some(value), None) => {
                let parameter = name
                    .parse::<Parameter>()
                    .map_err(|_| format!("unknown parameter `{name}`"))?;
                let value = value
                    .parse::<f64>()
                    .map_err(|_| format!("`{value}` is not a number"))?;

                Command::Set(parameter, value)
            }
            _ => {
                return Err("expected `<parameter> <value>`, `show`, `reset` or `quit`".to_string());
            }
        };

        Ok(command)
    }
}

impl Interactive {
    pub fn interactive(self) -> Result<()> {
        let config = self.config.load()?;
        let start = self.parameters.apply(config.defaults);

        let mut session = Session::new(config);
        session.replace(start)?;
        print!("{}", format_frame(session.frame()));

        session.on_frame(|frame| println!("[{}] {}", frame.generation, frame.status()));

        let stdin = io::stdin();
        prompt()?;
        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                prompt()?;
                continue;
            }

            match Command::parse(&line) {
                Ok(Command::Set(parameter, value)) => {
                    if let Err(error) = session.set(parameter, value) {
                        println!("{error}");
                    }
                }
                Ok(Command::Show) => print!("{}", format_frame(session.frame())),
                Ok(Command::Reset) => {
                    session.reset();
                }
                Ok(Command::Quit) => break,
                Err(message) => println!("{message}"),
            }

            prompt()?;
        }

        Ok(())
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
