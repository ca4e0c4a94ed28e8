use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxiError {
    #[error("invalid action index: {0}")]
    InvalidAction(usize),
    #[error("encoded observation out of range: {0}")]
    InvalidObservation(usize),
    #[error("episode already terminated, reset before stepping again")]
    EpisodeOver,
}
