//! The evaluation loop: one agent, one episode, one score.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::adapter::TaxiEnv;
use crate::agent::Agent;
use crate::sim::Sim;

/// Outcome of one evaluated episode.
#[derive(Clone, Copy, Debug)]
pub struct EpisodeReport {
    pub steps: u32,
    pub score: f32,
}

/// Delay between rendered frames.
const FRAME_DELAY: Duration = Duration::from_millis(500);

/// Plays one episode of `agent` against `env` and tallies the score.
///
/// Runs until the simulation reports termination; an exhausted fuel budget
/// does not stop the loop. With `render` set, each step prints the grid and
/// pauses briefly so the episode can be watched.
///
/// # Errors
///
/// Propagates simulation errors unchanged.
pub fn run_agent<S: Sim>(
    env: &mut TaxiEnv<S>,
    agent: &mut dyn Agent,
    render: bool,
) -> Result<EpisodeReport> {
    let (mut obs, _info) = env.reset()?;
    let mut score = 0.0_f32;
    let mut steps = 0_u32;

    loop {
        if render {
            println!("step={steps}");
            env.render_env(
                (obs.taxi_row as i64, obs.taxi_col as i64),
                (obs.passenger_row as i64, obs.passenger_col as i64),
                (obs.destination_row as i64, obs.destination_col as i64),
            );
            thread::sleep(FRAME_DELAY);
        }

        let action = agent.act(&obs);
        let (next_obs, reward, terminated, _truncated, _info) = env.step(action)?;
        score += reward;
        steps += 1;
        obs = next_obs;

        if terminated {
            break;
        }
    }

    tracing::info!(steps, score, fuel = env.fuel_remaining(), "episode finished");
    Ok(EpisodeReport { steps, score })
}
