//! Simulation configuration.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Configuration for the physics engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Worker threads for the simulation dispatcher. `0` leaves the pool
    /// size to the runtime (default: 2).
    pub thread_count: usize,
    /// Gravity acceleration vector (default: `(0, -9.81, 0)`).
    pub gravity: Vec3,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            thread_count: 2,
            gravity: Vec3::new(0.0, -9.81, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SimulationConfig::default();
        assert_eq!(config.thread_count, 2);
        assert_eq!(config.gravity, Vec3::new(0.0, -9.81, 0.0));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = SimulationConfig {
            thread_count: 4,
            gravity: Vec3::new(0.0, -25.0, 0.0),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.thread_count, 4);
        assert_eq!(back.gravity, config.gravity);
    }
}
