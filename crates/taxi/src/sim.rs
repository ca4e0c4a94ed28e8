//! # Taxi Simulation Core
//!
//! This module provides the simulation container and its step logic. The
//! reward scale and the encoding of observations are load-bearing: the
//! wrapper crate in this workspace, and any agent trained against it, assume
//! them exactly as written here.

use crate::error::TaxiError;
use crate::types::{
    Action, DecodedState, RenderMode, StepInfo, Transition, NATIVE_GRID_SIZE, PASSENGER_IN_TAXI,
    STATIONS,
};

/// Reward for every legal movement, pickup, or non-destination drop-off.
const REWARD_STEP: i32 = -1;
/// Reward for an illegal pickup or drop-off attempt.
const REWARD_ILLEGAL: i32 = -10;
/// Reward for delivering the passenger to the destination.
const REWARD_DELIVERED: i32 = 20;

/// Discrete taxi grid-world simulation.
pub struct TaxiSim {
    state: DecodedState,
    done: bool,
    render_mode: RenderMode,
    rng: fastrand::Rng,
}

impl TaxiSim {
    /// Creates a simulation with a randomly seeded RNG.
    #[must_use]
    pub fn new(render_mode: RenderMode) -> Self {
        Self::from_rng(render_mode, fastrand::Rng::new())
    }

    /// Creates a simulation whose resets are reproducible.
    #[must_use]
    pub fn with_seed(render_mode: RenderMode, seed: u64) -> Self {
        Self::from_rng(render_mode, fastrand::Rng::with_seed(seed))
    }

    /// Creates a simulation pinned to the given encoded observation.
    ///
    /// # Errors
    ///
    /// Returns [`TaxiError::InvalidObservation`] if `obs` is out of range.
    pub fn from_obs(render_mode: RenderMode, obs: usize) -> Result<Self, TaxiError> {
        let mut sim = Self::new(render_mode);
        sim.state = DecodedState::decode(obs)?;
        Ok(sim)
    }

    fn from_rng(render_mode: RenderMode, rng: fastrand::Rng) -> Self {
        Self {
            state: DecodedState {
                taxi_row: 0,
                taxi_col: 0,
                passenger_index: 0,
                destination_index: 1,
            },
            done: true,
            render_mode,
            rng,
        }
    }

    /// Starts a fresh episode and returns the encoded initial observation.
    ///
    /// The taxi spawns anywhere on the grid; the passenger waits at a random
    /// station and the destination is a different station.
    pub fn reset(&mut self) -> (usize, StepInfo) {
        let passenger_index = self.rng.usize(0..4);
        let destination_index = loop {
            let candidate = self.rng.usize(0..4);
            if candidate != passenger_index {
                break candidate;
            }
        };
        self.state = DecodedState {
            taxi_row: self.rng.usize(0..NATIVE_GRID_SIZE),
            taxi_col: self.rng.usize(0..NATIVE_GRID_SIZE),
            passenger_index,
            destination_index,
        };
        self.done = false;
        (self.state.encode(), StepInfo::default())
    }

    /// Applies one action.
    ///
    /// # Errors
    ///
    /// Returns [`TaxiError::EpisodeOver`] when called after a successful
    /// drop-off without an intervening [`reset`](Self::reset).
    pub fn step(&mut self, action: Action) -> Result<Transition, TaxiError> {
        if self.done {
            return Err(TaxiError::EpisodeOver);
        }

        let reward = match action {
            Action::South => self.drive(1, 0),
            Action::North => self.drive(-1, 0),
            Action::East => self.drive(0, 1),
            Action::West => self.drive(0, -1),
            Action::Pickup => self.pickup(),
            Action::Dropoff => self.dropoff(),
        };

        Ok(Transition {
            obs: self.state.encode(),
            reward,
            terminated: self.done,
            truncated: false,
            info: StepInfo::default(),
        })
    }

    /// Unpacks an encoded observation.
    ///
    /// # Errors
    ///
    /// Returns [`TaxiError::InvalidObservation`] if `obs` is out of range.
    #[allow(clippy::unused_self)]
    pub fn decode(&self, obs: usize) -> Result<DecodedState, TaxiError> {
        DecodedState::decode(obs)
    }

    /// Current state, for inspection in tests and tooling.
    #[must_use]
    pub const fn state(&self) -> DecodedState {
        self.state
    }

    /// Renders the native grid as text, or `None` when rendering is off.
    ///
    /// Stations are `+`, the waiting passenger `P`, the destination `D`, and
    /// the taxi `T` (drawn last, covering anything underneath).
    #[must_use]
    pub fn render(&self) -> Option<String> {
        if self.render_mode != RenderMode::Ansi {
            return None;
        }
        let mut grid = [['.'; NATIVE_GRID_SIZE]; NATIVE_GRID_SIZE];
        for (row, col) in STATIONS {
            grid[row][col] = '+';
        }
        if self.state.passenger_index < PASSENGER_IN_TAXI {
            let (row, col) = STATIONS[self.state.passenger_index];
            grid[row][col] = 'P';
        }
        let (row, col) = STATIONS[self.state.destination_index];
        grid[row][col] = 'D';
        grid[self.state.taxi_row][self.state.taxi_col] = 'T';

        let mut out = String::new();
        for row in &grid {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push(*cell);
            }
            out.push('\n');
        }
        Some(out)
    }

    fn drive(&mut self, row_delta: isize, col_delta: isize) -> i32 {
        self.state.taxi_row = shift(self.state.taxi_row, row_delta);
        self.state.taxi_col = shift(self.state.taxi_col, col_delta);
        REWARD_STEP
    }

    fn pickup(&mut self) -> i32 {
        let taxi = (self.state.taxi_row, self.state.taxi_col);
        if self.state.passenger_index < PASSENGER_IN_TAXI
            && STATIONS[self.state.passenger_index] == taxi
        {
            self.state.passenger_index = PASSENGER_IN_TAXI;
            REWARD_STEP
        } else {
            tracing::debug!(?taxi, "illegal pickup");
            REWARD_ILLEGAL
        }
    }

    fn dropoff(&mut self) -> i32 {
        let taxi = (self.state.taxi_row, self.state.taxi_col);
        if self.state.passenger_index != PASSENGER_IN_TAXI {
            tracing::debug!(?taxi, "illegal dropoff, passenger not aboard");
            return REWARD_ILLEGAL;
        }
        if taxi == STATIONS[self.state.destination_index] {
            self.state.passenger_index = self.state.destination_index;
            self.done = true;
            return REWARD_DELIVERED;
        }
        if let Some(station) = STATIONS.iter().position(|&s| s == taxi) {
            // Premature drop-off at the wrong station: the passenger waits
            // there and can be picked up again.
            self.state.passenger_index = station;
            return REWARD_STEP;
        }
        tracing::debug!(?taxi, "illegal dropoff, not at a station");
        REWARD_ILLEGAL
    }
}

/// Moves a coordinate by one cell, clamped to the native grid.
fn shift(coord: usize, delta: isize) -> usize {
    match delta {
        1 => (coord + 1).min(NATIVE_GRID_SIZE - 1),
        -1 => coord.saturating_sub(1),
        _ => coord,
    }
}
