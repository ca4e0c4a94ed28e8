//! The environment wrapper: observation reshaping, reward remapping, and
//! passenger tracking on top of the raw simulation.

use taxi::{Action, RenderMode, StepInfo, TaxiError, TaxiSim, PASSENGER_IN_TAXI};

use crate::config::GridConfig;
use crate::render::{clear_terminal, render_grid};
use crate::sim::Sim;

/// What the agent observes each step.
///
/// All coordinates lie in `[0, grid_size - 1]`. While the passenger rides in
/// the taxi, the passenger coordinates equal the taxi coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observation {
    pub taxi_row: usize,
    pub taxi_col: usize,
    pub passenger_row: usize,
    pub passenger_col: usize,
    pub destination_row: usize,
    pub destination_col: usize,
}

/// Maps the simulation's reward scale onto the harness scale.
///
/// Exact by contract: 20 (delivery) becomes 50, -1 (regular movement)
/// becomes -0.1, -10 (illegal pickup/drop-off) stays -10, and anything else
/// passes through unchanged.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn remap_reward(raw: i32) -> f32 {
    match raw {
        20 => 50.0,
        -1 => -0.1,
        -10 => -10.0,
        other => other as f32,
    }
}

/// Environment wrapper around a taxi simulation.
///
/// Owns the per-episode bookkeeping: the remaining fuel budget and where the
/// passenger currently is. One instance serves one evaluation loop.
pub struct TaxiEnv<S> {
    config: GridConfig,
    stations: [(usize, usize); 4],
    sim: S,
    fuel_remaining: i64,
    passenger_loc: (usize, usize),
    passenger_picked_up: bool,
}

impl TaxiEnv<TaxiSim> {
    /// Creates a wrapper over a fresh simulation in ansi render mode.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self::with_sim(config, TaxiSim::new(RenderMode::Ansi))
    }

    /// Creates a wrapper whose episodes are reproducible.
    #[must_use]
    pub fn with_seed(config: GridConfig, seed: u64) -> Self {
        Self::with_sim(config, TaxiSim::with_seed(RenderMode::Ansi, seed))
    }
}

impl<S: Sim> TaxiEnv<S> {
    /// Creates a wrapper over the given simulation.
    ///
    /// # Panics
    ///
    /// Panics if `grid_size` or `fuel_limit` is zero.
    #[must_use]
    pub fn with_sim(config: GridConfig, sim: S) -> Self {
        assert!(config.grid_size > 0, "grid_size must be positive");
        assert!(config.fuel_limit > 0, "fuel_limit must be positive");
        let stations = config.stations();
        Self {
            fuel_remaining: i64::from(config.fuel_limit),
            config,
            stations,
            sim,
            passenger_loc: (0, 0),
            passenger_picked_up: false,
        }
    }

    /// Starts a fresh episode.
    ///
    /// Refuels, delegates to the simulation, and derives the initial
    /// passenger location: at the taxi if the passenger is already aboard,
    /// otherwise at the station the simulation names.
    ///
    /// # Errors
    ///
    /// Propagates simulation errors unchanged.
    pub fn reset(&mut self) -> Result<(Observation, StepInfo), TaxiError> {
        let (obs, info) = self.sim.reset();
        self.fuel_remaining = i64::from(self.config.fuel_limit);

        let state = self.sim.decode(obs)?;
        let taxi = self.clamp(state.taxi_row, state.taxi_col);

        if state.passenger_index == PASSENGER_IN_TAXI {
            self.passenger_loc = taxi;
            self.passenger_picked_up = true;
        } else {
            self.passenger_loc = self.stations[state.passenger_index];
            self.passenger_picked_up = false;
        }

        Ok((self.observe(taxi, state.destination_index), info))
    }

    /// Applies one action and returns
    /// `(observation, reward, terminated, truncated, info)`.
    ///
    /// Fuel is decremented but deliberately never enforced; bounding the
    /// episode is the evaluation loop's concern.
    ///
    /// # Errors
    ///
    /// Propagates simulation errors unchanged.
    pub fn step(
        &mut self,
        action: Action,
    ) -> Result<(Observation, f32, bool, bool, StepInfo), TaxiError> {
        self.fuel_remaining -= 1;
        let transition = self.sim.step(action)?;
        let reward = remap_reward(transition.reward);

        let state = self.sim.decode(transition.obs)?;
        let taxi = self.clamp(state.taxi_row, state.taxi_col);

        if state.passenger_index == PASSENGER_IN_TAXI {
            // Aboard: the passenger rides along with the taxi.
            self.passenger_loc = taxi;
            self.passenger_picked_up = true;
        } else if self.passenger_picked_up {
            // Just left the taxi: dropped at the taxi's current cell, where
            // they stay until the next pickup.
            self.passenger_loc = taxi;
            self.passenger_picked_up = false;
        }

        Ok((
            self.observe(taxi, state.destination_index),
            reward,
            transition.terminated,
            transition.truncated,
            transition.info,
        ))
    }

    /// Clears the terminal and prints the current grid.
    ///
    /// Cosmetic only; evaluation does not depend on it.
    pub fn render_env(
        &self,
        taxi: (i64, i64),
        passenger: (i64, i64),
        destination: (i64, i64),
    ) {
        clear_terminal();
        println!("{}", render_grid(self.config.grid_size, taxi, passenger, destination));
    }

    /// Remaining fuel budget; goes negative once the limit is exceeded.
    #[must_use]
    pub const fn fuel_remaining(&self) -> i64 {
        self.fuel_remaining
    }

    /// Whether the passenger is currently aboard.
    #[must_use]
    pub const fn passenger_picked_up(&self) -> bool {
        self.passenger_picked_up
    }

    /// The corner stations of the configured grid.
    #[must_use]
    pub const fn stations(&self) -> [(usize, usize); 4] {
        self.stations
    }

    fn clamp(&self, row: usize, col: usize) -> (usize, usize) {
        (
            row.min(self.config.grid_size - 1),
            col.min(self.config.grid_size - 1),
        )
    }

    fn observe(&self, taxi: (usize, usize), destination_index: usize) -> Observation {
        let (destination_row, destination_col) = self.stations[destination_index];
        Observation {
            taxi_row: taxi.0,
            taxi_col: taxi.1,
            passenger_row: self.passenger_loc.0,
            passenger_col: self.passenger_loc.1,
            destination_row,
            destination_col,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxi::{DecodedState, Transition};

    /// Stand-in simulation that replays scripted observations.
    struct ScriptedSim {
        resets: Vec<usize>,
        steps: Vec<Transition>,
    }

    impl ScriptedSim {
        fn new(resets: Vec<usize>, steps: Vec<Transition>) -> Self {
            Self { resets, steps }
        }
    }

    impl Sim for ScriptedSim {
        fn reset(&mut self) -> (usize, StepInfo) {
            (self.resets.remove(0), StepInfo::default())
        }

        fn step(&mut self, _action: Action) -> Result<Transition, TaxiError> {
            if self.steps.is_empty() {
                return Err(TaxiError::EpisodeOver);
            }
            Ok(self.steps.remove(0))
        }

        fn decode(&self, obs: usize) -> Result<DecodedState, TaxiError> {
            DecodedState::decode(obs)
        }
    }

    fn enc(taxi_row: usize, taxi_col: usize, passenger_index: usize, destination_index: usize) -> usize {
        DecodedState {
            taxi_row,
            taxi_col,
            passenger_index,
            destination_index,
        }
        .encode()
    }

    fn transition(obs: usize, reward: i32) -> Transition {
        Transition {
            obs,
            reward,
            terminated: false,
            truncated: false,
            info: StepInfo::default(),
        }
    }

    fn grid(grid_size: usize, fuel_limit: u32) -> GridConfig {
        GridConfig {
            grid_size,
            fuel_limit,
        }
    }

    #[test]
    fn reset_reshapes_observation_on_small_grid() {
        let sim = ScriptedSim::new(vec![enc(2, 2, 1, 3)], vec![]);
        let mut env = TaxiEnv::with_sim(grid(3, 10), sim);
        let (obs, _info) = env.reset().unwrap();
        assert_eq!(
            obs,
            Observation {
                taxi_row: 2,
                taxi_col: 2,
                passenger_row: 0,
                passenger_col: 2,
                destination_row: 2,
                destination_col: 2,
            }
        );
        assert!(!env.passenger_picked_up());
    }

    #[test]
    fn reset_with_passenger_already_aboard() {
        let sim = ScriptedSim::new(vec![enc(1, 2, 4, 0)], vec![]);
        let mut env = TaxiEnv::with_sim(grid(5, 10), sim);
        let (obs, _info) = env.reset().unwrap();
        assert_eq!((obs.passenger_row, obs.passenger_col), (1, 2));
        assert!(env.passenger_picked_up());
    }

    #[test]
    fn taxi_coordinates_clamp_to_configured_grid() {
        let sim = ScriptedSim::new(
            vec![enc(0, 0, 0, 3)],
            vec![transition(enc(4, 4, 0, 3), -1)],
        );
        let mut env = TaxiEnv::with_sim(grid(3, 10), sim);
        env.reset().unwrap();
        let (obs, _, _, _, _) = env.step(Action::South).unwrap();
        assert_eq!((obs.taxi_row, obs.taxi_col), (2, 2));
    }

    #[test]
    fn passenger_rides_with_taxi_after_pickup() {
        let sim = ScriptedSim::new(
            vec![enc(0, 0, 0, 3)],
            vec![
                transition(enc(0, 0, 4, 3), -1),
                transition(enc(1, 0, 4, 3), -1),
            ],
        );
        let mut env = TaxiEnv::with_sim(grid(5, 10), sim);
        env.reset().unwrap();

        let (obs, _, _, _, _) = env.step(Action::Pickup).unwrap();
        assert!(env.passenger_picked_up());
        assert_eq!((obs.passenger_row, obs.passenger_col), (0, 0));

        let (obs, _, _, _, _) = env.step(Action::South).unwrap();
        assert_eq!((obs.passenger_row, obs.passenger_col), (1, 0));
        assert_eq!((obs.taxi_row, obs.taxi_col), (1, 0));
    }

    #[test]
    fn dropped_passenger_stays_where_released() {
        let sim = ScriptedSim::new(
            vec![enc(0, 0, 4, 3)],
            vec![
                transition(enc(2, 2, 1, 3), -1),
                transition(enc(3, 2, 1, 3), -1),
            ],
        );
        let mut env = TaxiEnv::with_sim(grid(5, 10), sim);
        env.reset().unwrap();
        assert!(env.passenger_picked_up());

        // Leaves the taxi: recorded at the taxi's cell that step.
        let (obs, _, _, _, _) = env.step(Action::Dropoff).unwrap();
        assert!(!env.passenger_picked_up());
        assert_eq!((obs.passenger_row, obs.passenger_col), (2, 2));

        // And stays frozen there while the taxi drives away.
        let (obs, _, _, _, _) = env.step(Action::South).unwrap();
        assert_eq!((obs.passenger_row, obs.passenger_col), (2, 2));
        assert_eq!((obs.taxi_row, obs.taxi_col), (3, 2));
    }

    #[test]
    fn reward_remap_table_is_exact() {
        assert_eq!(remap_reward(20), 50.0);
        assert_eq!(remap_reward(-1), -0.1);
        assert_eq!(remap_reward(-10), -10.0);
        assert_eq!(remap_reward(7), 7.0);
        assert_eq!(remap_reward(0), 0.0);
    }

    #[test]
    fn delivery_reward_is_remapped_in_step() {
        let mut done = transition(enc(4, 4, 3, 3), 20);
        done.terminated = true;
        let sim = ScriptedSim::new(vec![enc(4, 3, 4, 3)], vec![done]);
        let mut env = TaxiEnv::with_sim(grid(5, 10), sim);
        env.reset().unwrap();
        let (_, reward, terminated, _, _) = env.step(Action::Dropoff).unwrap();
        assert_eq!(reward, 50.0);
        assert!(terminated);
    }

    #[test]
    fn fuel_is_tracked_but_never_enforced() {
        let sim = ScriptedSim::new(
            vec![enc(0, 0, 0, 3)],
            vec![
                transition(enc(1, 0, 0, 3), -1),
                transition(enc(2, 0, 0, 3), -1),
            ],
        );
        let mut env = TaxiEnv::with_sim(grid(5, 1), sim);
        env.reset().unwrap();
        assert_eq!(env.fuel_remaining(), 1);

        let (_, _, terminated, _, _) = env.step(Action::South).unwrap();
        assert!(!terminated);
        assert_eq!(env.fuel_remaining(), 0);

        // Past empty: the episode keeps going and the gauge goes negative.
        let (_, _, terminated, _, _) = env.step(Action::South).unwrap();
        assert!(!terminated);
        assert_eq!(env.fuel_remaining(), -1);
    }

    #[test]
    fn simulation_errors_propagate_unchanged() {
        let sim = ScriptedSim::new(vec![enc(0, 0, 0, 3)], vec![]);
        let mut env = TaxiEnv::with_sim(grid(5, 10), sim);
        env.reset().unwrap();
        assert_eq!(env.step(Action::South), Err(TaxiError::EpisodeOver));
    }
}
