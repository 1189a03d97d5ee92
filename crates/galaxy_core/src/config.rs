use serde::{Deserialize, Serialize};

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of bodies seeded at startup
    pub body_count: u32,
    /// Random seed for deterministic runs
    pub seed: u64,
    /// Width of the spawn field (world units)
    pub width: f64,
    /// Height of the spawn field (world units)
    pub height: f64,
    /// Upper bound for seeded body mass
    pub max_mass: f64,
    /// Per-axis bound for seeded body velocity
    pub max_speed: f64,
    /// Gravitational constant scaling
    pub gravity_scale: f64,
    /// Flip velocity sign when a bounce folds a coordinate an odd number
    /// of times
    pub reflect_velocity: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            body_count: 256,
            seed: 42,
            width: 800.0,
            height: 600.0,
            max_mass: 500.0,
            max_speed: 0.05,
            gravity_scale: 1.0,
            reflect_velocity: true,
        }
    }
}
