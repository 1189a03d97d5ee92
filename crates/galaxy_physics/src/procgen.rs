use galaxy_core::{Body, SimConfig, Vec2};
use rand::Rng;

/// Generate the initial body distribution for a fresh galaxy:
/// `config.body_count` bodies scattered uniformly over the spawn field with
/// small random velocities.
pub fn scatter(config: &SimConfig, rng: &mut impl Rng) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(config.body_count as usize);
    for _ in 0..config.body_count {
        bodies.push(scatter_one(config, rng));
    }
    bodies
}

fn scatter_one(config: &SimConfig, rng: &mut impl Rng) -> Body {
    // floor keeps the simulated-implies-positive-mass invariant
    let mass = rng.gen_range(0.0..config.max_mass).max(0.001);
    let position = Vec2::new(
        rng.gen_range(0.0..config.width),
        rng.gen_range(0.0..config.height),
    );
    let velocity = if config.max_speed > 0.0 {
        Vec2::new(
            rng.gen_range(-config.max_speed..config.max_speed),
            rng.gen_range(-config.max_speed..config.max_speed),
        )
    } else {
        Vec2::ZERO
    };
    Body::new(mass, position, velocity)
}
