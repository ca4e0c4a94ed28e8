#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_possible_wrap)]
//! # Taxi Environment Wrapper
//!
//! The evaluation-facing layer of this workspace. It wraps the discrete taxi
//! simulation, reshapes what an agent sees and earns, and runs an agent
//! against it:
//!
//! -   **Observations** become a six-field tuple of grid coordinates — taxi,
//!     passenger and destination positions — instead of a single packed
//!     integer, with every coordinate clamped to the configured grid size.
//! -   **Rewards** are remapped to the harness scale: a successful drop-off
//!     pays 50, regular movement costs 0.1, illegal pickup and drop-off
//!     attempts still cost 10.
//! -   **Passenger tracking**: the wrapper remembers where the passenger is
//!     across steps, riding along with the taxi after pickup and staying
//!     where they were dropped.
//!
//! The underlying simulation sits behind the [`Sim`] trait so it can be
//! swapped out (tests drive the wrapper with a scripted stand-in). Agents
//! implement the one-method [`Agent`] trait and are injected by the caller;
//! [`run_agent`] plays a full episode and reports step count and score.

pub mod adapter;
pub mod agent;
pub mod config;
pub mod eval;
pub mod render;
pub mod sim;

pub use adapter::{remap_reward, Observation, TaxiEnv};
pub use agent::{Agent, GreedyAgent, RandomAgent};
pub use config::GridConfig;
pub use eval::{run_agent, EpisodeReport};
pub use render::render_grid;
pub use sim::Sim;
