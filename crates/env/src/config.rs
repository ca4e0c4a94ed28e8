use serde::Deserialize;

/// Configuration for the wrapped environment.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GridConfig {
    /// Side length of the grid the agent observes.
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,
    /// Step budget per episode. Tracked by the wrapper, not enforced.
    #[serde(default = "default_fuel_limit")]
    pub fuel_limit: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            fuel_limit: default_fuel_limit(),
        }
    }
}

impl GridConfig {
    /// The four corner stations of the configured grid, in index order.
    #[must_use]
    pub const fn stations(&self) -> [(usize, usize); 4] {
        [
            (0, 0),
            (0, self.grid_size - 1),
            (self.grid_size - 1, 0),
            (self.grid_size - 1, self.grid_size - 1),
        ]
    }
}

const fn default_grid_size() -> usize {
    5
}

const fn default_fuel_limit() -> u32 {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stations_are_the_corners() {
        let config = GridConfig {
            grid_size: 5,
            fuel_limit: 50,
        };
        assert_eq!(config.stations(), [(0, 0), (0, 4), (4, 0), (4, 4)]);
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let config: GridConfig = serde_json::from_str("{\"grid_size\": 3}").unwrap();
        assert_eq!(config.grid_size, 3);
        assert_eq!(config.fuel_limit, 50);
    }
}
