//! The agent seam and two bundled reference policies.

use taxi::Action;

use crate::adapter::Observation;

/// A policy under evaluation: observation in, action out.
///
/// This is the whole contract. Agents are constructed by the caller and
/// injected into [`run_agent`](crate::run_agent).
pub trait Agent {
    fn act(&mut self, obs: &Observation) -> Action;
}

/// Picks uniformly random actions.
pub struct RandomAgent {
    rng: fastrand::Rng,
}

impl RandomAgent {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn act(&mut self, _obs: &Observation) -> Action {
        Action::ALL[self.rng.usize(0..Action::ALL.len())]
    }
}

/// Drives straight to the passenger, picks up, drives straight to the
/// destination, drops off. No learning; exists so the harness demonstrably
/// finishes episodes.
///
/// Assumes the observed grid matches the simulation's native grid (the
/// default configuration). One instance per episode.
#[derive(Default)]
pub struct GreedyAgent {
    carrying: bool,
}

impl GreedyAgent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Agent for GreedyAgent {
    fn act(&mut self, obs: &Observation) -> Action {
        let taxi = (obs.taxi_row, obs.taxi_col);
        if self.carrying {
            let destination = (obs.destination_row, obs.destination_col);
            if taxi == destination {
                return Action::Dropoff;
            }
            drive_toward(taxi, destination)
        } else {
            let passenger = (obs.passenger_row, obs.passenger_col);
            if taxi == passenger {
                self.carrying = true;
                return Action::Pickup;
            }
            drive_toward(taxi, passenger)
        }
    }
}

fn drive_toward(from: (usize, usize), to: (usize, usize)) -> Action {
    if from.0 < to.0 {
        Action::South
    } else if from.0 > to.0 {
        Action::North
    } else if from.1 < to.1 {
        Action::East
    } else {
        Action::West
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(taxi: (usize, usize), passenger: (usize, usize), destination: (usize, usize)) -> Observation {
        Observation {
            taxi_row: taxi.0,
            taxi_col: taxi.1,
            passenger_row: passenger.0,
            passenger_col: passenger.1,
            destination_row: destination.0,
            destination_col: destination.1,
        }
    }

    #[test]
    fn greedy_heads_for_the_passenger_first() {
        let mut agent = GreedyAgent::new();
        assert_eq!(agent.act(&obs((0, 0), (2, 0), (4, 4))), Action::South);
        assert_eq!(agent.act(&obs((2, 2), (2, 0), (4, 4))), Action::West);
    }

    #[test]
    fn greedy_picks_up_then_heads_for_the_destination() {
        let mut agent = GreedyAgent::new();
        assert_eq!(agent.act(&obs((2, 0), (2, 0), (4, 4))), Action::Pickup);
        assert_eq!(agent.act(&obs((2, 0), (2, 0), (4, 4))), Action::South);
    }

    #[test]
    fn greedy_drops_off_at_the_destination() {
        let mut agent = GreedyAgent::new();
        agent.act(&obs((0, 0), (0, 0), (4, 4)));
        assert_eq!(agent.act(&obs((4, 4), (4, 4), (4, 4))), Action::Dropoff);
    }

    #[test]
    fn random_agent_is_reproducible_with_a_seed() {
        let o = obs((0, 0), (0, 4), (4, 4));
        let mut a = RandomAgent::with_seed(11);
        let mut b = RandomAgent::with_seed(11);
        for _ in 0..20 {
            assert_eq!(a.act(&o), b.act(&o));
        }
    }
}
