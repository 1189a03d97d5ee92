//! Headless driver: seed a galaxy, run it for a fixed number of steps, and
//! report the survivors. Everything goes through the public simulation
//! interface; an interactive host consumes the same calls.

use galaxy_core::SimConfig;
use galaxy_core::constants::DT;
use galaxy_physics::procgen;
use galaxy_sim::Galaxy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::init();

    // usage: galaxy [steps] [bodies]
    let mut args = std::env::args().skip(1);
    let steps: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3600);
    let mut config = SimConfig::default();
    if let Some(n) = args.next().and_then(|s| s.parse().ok()) {
        config.body_count = n;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut galaxy = Galaxy::with_bodies(config.clone(), procgen::scatter(&config, &mut rng));

    eprintln!(
        "Simulating {} bodies for {} steps (seed {})...",
        galaxy.alive_count(),
        steps,
        config.seed
    );

    for step in 0..steps {
        galaxy.integrate(DT);
        galaxy.bounce(0.0, 0.0, config.width, config.height);
        if (step + 1) % 600 == 0 {
            eprint!(
                "  step {}/{}: {} bodies left\r",
                step + 1,
                steps,
                galaxy.alive_count()
            );
        }
    }
    eprintln!();

    let mut survivors: Vec<_> = galaxy
        .bodies()
        .iter()
        .enumerate()
        .filter(|(_, b)| b.flags.simulated)
        .collect();
    survivors.sort_by(|a, b| b.1.mass.partial_cmp(&a.1.mass).unwrap());

    println!(
        "{} of {} bodies survive after {} steps",
        survivors.len(),
        config.body_count,
        steps
    );
    for (handle, body) in survivors.iter().take(10) {
        println!(
            "  #{:<4} mass {:>9.1}  at ({:>6.1}, {:>6.1})  vel ({:>6.2}, {:>6.2})  trail {:>4} pts",
            handle,
            body.mass,
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y,
            body.trail_len()
        );
    }
}
