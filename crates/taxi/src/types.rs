use crate::error::TaxiError;

/// Side length of the native grid.
pub const NATIVE_GRID_SIZE: usize = 5;

/// Passenger index meaning "riding in the taxi" rather than waiting.
pub const PASSENGER_IN_TAXI: usize = 4;

/// The four corner stations of the native grid, in index order.
pub const STATIONS: [(usize, usize); 4] = [
    (0, 0),
    (0, NATIVE_GRID_SIZE - 1),
    (NATIVE_GRID_SIZE - 1, 0),
    (NATIVE_GRID_SIZE - 1, NATIVE_GRID_SIZE - 1),
];

const NUM_STATES: usize = NATIVE_GRID_SIZE * NATIVE_GRID_SIZE * 5 * 4;

/// Discrete taxi action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    South,
    North,
    East,
    West,
    Pickup,
    Dropoff,
}

impl Action {
    /// All actions, ordered by their discrete index.
    pub const ALL: [Self; 6] = [
        Self::South,
        Self::North,
        Self::East,
        Self::West,
        Self::Pickup,
        Self::Dropoff,
    ];

    /// The discrete index of this action.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::South => 0,
            Self::North => 1,
            Self::East => 2,
            Self::West => 3,
            Self::Pickup => 4,
            Self::Dropoff => 5,
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = TaxiError;

    fn try_from(index: usize) -> Result<Self, TaxiError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(TaxiError::InvalidAction(index))
    }
}

/// Unpacked simulation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedState {
    pub taxi_row: usize,
    pub taxi_col: usize,
    /// `0..=3` selects a waiting station, [`PASSENGER_IN_TAXI`] means aboard.
    pub passenger_index: usize,
    pub destination_index: usize,
}

impl DecodedState {
    /// Packs the state into a single discrete observation.
    #[must_use]
    pub const fn encode(&self) -> usize {
        ((self.taxi_row * NATIVE_GRID_SIZE + self.taxi_col) * 5 + self.passenger_index) * 4
            + self.destination_index
    }

    /// Unpacks an encoded observation.
    ///
    /// # Errors
    ///
    /// Returns [`TaxiError::InvalidObservation`] if `obs` does not name one of
    /// the discrete states.
    pub const fn decode(obs: usize) -> Result<Self, TaxiError> {
        if obs >= NUM_STATES {
            return Err(TaxiError::InvalidObservation(obs));
        }
        let destination_index = obs % 4;
        let rest = obs / 4;
        let passenger_index = rest % 5;
        let rest = rest / 5;
        let taxi_col = rest % NATIVE_GRID_SIZE;
        let taxi_row = rest / NATIVE_GRID_SIZE;
        Ok(Self {
            taxi_row,
            taxi_col,
            passenger_index,
            destination_index,
        })
    }
}

/// Auxiliary payload returned alongside observations.
///
/// Passed through the wrapper untouched. The simulation is deterministic, so
/// the transition probability is always 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepInfo {
    pub prob: f32,
}

impl Default for StepInfo {
    fn default() -> Self {
        Self { prob: 1.0 }
    }
}

/// Result of one simulation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub obs: usize,
    pub reward: i32,
    pub terminated: bool,
    pub truncated: bool,
    pub info: StepInfo,
}

/// How the simulation renders itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Off,
    Ansi,
}
