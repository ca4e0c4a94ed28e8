#![deny(clippy::all, clippy::pedantic)]

mod config;

use std::path::PathBuf;

use anyhow::Result;

use env::{run_agent, Agent, GreedyAgent, RandomAgent, TaxiEnv};

use crate::config::{AgentKind, RunConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            tracing::info!("loading run configuration from {}", path.display());
            RunConfig::from_file(&path)?
        }
        None => {
            tracing::info!("no configuration given, using defaults");
            RunConfig::default()
        }
    };

    tracing::info!(
        grid_size = config.grid.grid_size,
        fuel_limit = config.grid.fuel_limit,
        agent = ?config.agent,
        "starting evaluation"
    );

    let mut env = match config.seed {
        Some(seed) => TaxiEnv::with_seed(config.grid.clone(), seed),
        None => TaxiEnv::new(config.grid.clone()),
    };

    let mut agent: Box<dyn Agent> = match config.agent {
        AgentKind::Random => match config.seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed)),
            None => Box::new(RandomAgent::new()),
        },
        AgentKind::Greedy => Box::new(GreedyAgent::new()),
    };

    let report = run_agent(&mut env, agent.as_mut(), config.render)?;

    tracing::info!(fuel = env.fuel_remaining(), "evaluation complete");
    println!(
        "Agent finished in {} steps, score: {}",
        report.steps, report.score
    );

    Ok(())
}
