#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Taxi Simulation
//!
//! A minimal discrete taxi grid-world, the simulation layer underneath the
//! evaluation harness in this workspace.
//!
//! The world is a fixed 5×5 grid with a pickup/drop-off station in each
//! corner. A single passenger waits at one station and wants to be carried to
//! another. The taxi moves one cell at a time and earns a small negative
//! reward per step, a large penalty for illegal pickup or drop-off attempts,
//! and a bonus for delivering the passenger to the destination.
//!
//! ## Key Components
//!
//! -   **State:** The full simulation state is four integers — taxi row, taxi
//!     column, passenger index and destination index — packed into a single
//!     encoded observation. [`DecodedState`] performs the packing and
//!     unpacking.
//! -   **Simulation:** [`TaxiSim`] owns the state, applies [`Action`]s, and
//!     hands back [`Transition`]s. Resets are randomized via a seedable RNG
//!     so episodes are reproducible in tests.
//! -   **Rendering:** when constructed with [`RenderMode::Ansi`] the
//!     simulation can print its native grid as a small textual map.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use taxi::{Action, RenderMode, TaxiSim};
//!
//! let mut sim = TaxiSim::with_seed(RenderMode::Ansi, 7);
//! let (obs, _info) = sim.reset();
//! let transition = sim.step(Action::South)?;
//! ```

pub mod error;
pub mod sim;
pub mod types;

pub use error::TaxiError;
pub use sim::TaxiSim;
pub use types::{
    Action, DecodedState, RenderMode, StepInfo, Transition, NATIVE_GRID_SIZE, PASSENGER_IN_TAXI,
    STATIONS,
};
