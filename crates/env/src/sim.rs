use taxi::{Action, DecodedState, StepInfo, TaxiError, TaxiSim, Transition};

/// Interface the wrapper requires of the underlying simulation.
///
/// Mirrors the three capabilities the wrapper actually uses: starting an
/// episode, applying an action, and unpacking an encoded observation. The
/// bundled [`TaxiSim`] implements it; tests substitute a scripted one.
pub trait Sim {
    /// Starts a fresh episode, returning the encoded initial observation and
    /// an info payload the wrapper passes through untouched.
    fn reset(&mut self) -> (usize, StepInfo);

    /// Applies one action.
    ///
    /// # Errors
    ///
    /// Whatever the simulation raises; the wrapper propagates it unchanged.
    fn step(&mut self, action: Action) -> Result<Transition, TaxiError>;

    /// Unpacks an encoded observation.
    ///
    /// # Errors
    ///
    /// Whatever the simulation raises; the wrapper propagates it unchanged.
    fn decode(&self, obs: usize) -> Result<DecodedState, TaxiError>;
}

impl Sim for TaxiSim {
    fn reset(&mut self) -> (usize, StepInfo) {
        TaxiSim::reset(self)
    }

    fn step(&mut self, action: Action) -> Result<Transition, TaxiError> {
        TaxiSim::step(self, action)
    }

    fn decode(&self, obs: usize) -> Result<DecodedState, TaxiError> {
        TaxiSim::decode(self, obs)
    }
}
