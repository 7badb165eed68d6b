use std::io;

use anyhow::{bail, Context, Result};
use clap::Parser;

use ml_tateti::ai::{Agent, RandomAgent};
use ml_tateti::ui::PlaySession;

/// Play ta-te-ti against an agent at the console.
#[derive(Parser)]
#[command(name = "tateti", about = "Play ta-te-ti against an agent")]
struct Cli {
    /// Agent to play against (only 'random' is built in)
    #[arg(long, default_value = "random")]
    agent: String,

    /// Seed the agent's move selection for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut agent: Box<dyn Agent> = match cli.agent.as_str() {
        "random" => match cli.seed {
            Some(seed) => Box::new(RandomAgent::from_seed(seed)),
            None => Box::new(RandomAgent::new()),
        },
        other => bail!("unknown agent '{}' (expected 'random')", other),
    };

    let stdin = io::stdin();
    let mut session = PlaySession::new(stdin.lock(), io::stdout());
    session
        .run(agent.as_mut())
        .context("console session failed")?;
    Ok(())
}
