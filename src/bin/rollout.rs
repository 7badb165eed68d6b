use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use ml_tateti::ai::{Agent, RandomAgent};
use ml_tateti::config::AppConfig;
use ml_tateti::env::TatetiEnv;
use ml_tateti::training::Rollout;

/// Drive the environment headlessly: run episodes, aggregate win/draw
/// metrics, and optionally export the experience stream for a trainer.
#[derive(Parser)]
#[command(name = "rollout", about = "Run ta-te-ti environment rollouts")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of episodes
    #[arg(long)]
    episodes: Option<usize>,

    /// Seed the opponent's and the agent's randomness
    #[arg(long)]
    seed: Option<u64>,

    /// Agent driving the environment (only 'random' is built in)
    #[arg(long, default_value = "random")]
    agent: String,

    /// Write every experience as one JSON object per line to this file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Suppress progress output
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(episodes) = cli.episodes {
        config.rollout.num_episodes = episodes;
    }
    if cli.quiet {
        config.rollout.quiet = true;
    }

    let mut env = match cli.seed {
        Some(seed) => TatetiEnv::from_seed(config.rewards, seed),
        None => TatetiEnv::new(config.rewards),
    };
    let mut agent: Box<dyn Agent> = match cli.agent.as_str() {
        "random" => match cli.seed {
            // Offset so the agent and the opponent never share a stream.
            Some(seed) => Box::new(RandomAgent::from_seed(seed.wrapping_add(1))),
            None => Box::new(RandomAgent::new()),
        },
        other => bail!("unknown agent '{}' (expected 'random')", other),
    };

    let rollout = Rollout::new(config.rollout.clone());
    let metrics = match &cli.export {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating export file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let metrics = rollout.run(&mut env, agent.as_mut(), Some(&mut writer))?;
            writer.flush()?;
            metrics
        }
        None => rollout.run(&mut env, agent.as_mut(), None)?,
    };

    if !config.rollout.quiet {
        let window = config.rollout.num_episodes;
        println!("-------------------------------------------");
        println!(
            "Episodes: {} | win: {:.1}% | loss: {:.1}% | draw: {:.1}% | avg_len: {:.1} | avg_reward: {:.1}",
            metrics.total_episodes(),
            metrics.win_rate(window) * 100.0,
            metrics.loss_rate(window) * 100.0,
            metrics.draw_rate(window) * 100.0,
            metrics.average_game_length(window),
            metrics.average_reward(window),
        );
        if let Some(path) = &cli.export {
            println!("Experience stream written to {}", path.display());
        }
    }

    Ok(())
}
