// Simulation constants (world units)
// The engine is unit-agnostic: distances are in world units (the original
// interactive driver mapped them 1:1 to screen pixels), masses are arbitrary,
// and G = 1.0 in these units.

/// Gravitational constant in simulation units
pub const G: f64 = 1.0;

/// Softening distance, added in quadrature to pair distances so coincident
/// bodies produce finite forces instead of NaN/inf
pub const SOFTENING: f64 = 0.01;

/// Number of positions a body's trail holds before overwriting the oldest
pub const TRAIL_CAPACITY: usize = 1024;

/// Minimum per-axis displacement since the last recorded point before a new
/// trail point is recorded
pub const TRAIL_MIN_STEP: f64 = 2.0;

/// Divisor applied to both radii in the collision test: two bodies merge
/// when their distance drops below r1/1.75 + r2/1.75
pub const MERGE_RADIUS_DIVISOR: f64 = 1.75;

/// Mass scale of the radius curve: radius = 1 + ln(e + mass / 250)
pub const RADIUS_MASS_SCALE: f64 = 250.0;

/// Default integration timestep for headless runs (one 60 Hz frame)
pub const DT: f64 = 1.0 / 60.0;
