use galaxy_core::constants::{G, MERGE_RADIUS_DIVISOR};
use galaxy_core::{Body, BodyFlags, SimConfig, Vec2};
use galaxy_physics::{boundary, forces};
use log::{debug, info};

use crate::error::GalaxyError;

/// The owning collection of bodies plus the integration, merge and query
/// algorithms.
///
/// Bodies live in a single growable array; a handle is the body's index in
/// that array and stays valid until the body is removed and its slot reused.
/// Freed slots are never compacted away, so handles held across steps remain
/// stable. All calls must be serialized on one logical thread: a merge
/// mutates multiple slots in place during `integrate`, and Rust's ownership
/// rules enforce that no reader observes the scan mid-flight.
pub struct Galaxy {
    bodies: Vec<Body>,
    config: SimConfig,
}

impl Galaxy {
    /// An empty galaxy.
    pub fn new(config: SimConfig) -> Self {
        Self {
            bodies: Vec::new(),
            config,
        }
    }

    /// A galaxy pre-populated from a seeded batch
    /// (see `galaxy_physics::procgen::scatter`).
    pub fn with_bodies(config: SimConfig, bodies: Vec<Body>) -> Self {
        info!("galaxy initialized with {} bodies", bodies.len());
        Self { bodies, config }
    }

    /// Allocate a body slot and return its handle: the lowest-index free
    /// slot if any exists, else a fresh slot appended to the array.
    ///
    /// The slot is allocated but not initialized; the caller must call
    /// [`Body::init`] on it immediately. An allocated-but-uninitialized body
    /// is a transient state that no other operation may observe.
    pub fn add(&mut self) -> usize {
        if let Some(i) = self.bodies.iter().position(|b| !b.flags.allocated) {
            self.bodies[i].flags.allocated = true;
            return i;
        }
        let mut slot = Body::vacant();
        slot.flags.allocated = true;
        self.bodies.push(slot);
        self.bodies.len() - 1
    }

    /// Allocate and initialize in one call.
    pub fn spawn(&mut self, mass: f64, position: Vec2, velocity: Vec2) -> usize {
        let handle = self.add();
        self.bodies[handle].init(mass, position, velocity);
        debug!("spawned body {handle} (mass {mass:.1})");
        handle
    }

    /// Free the slot at `handle`. Removing an already-free or out-of-range
    /// handle is a no-op, so removal is idempotent.
    pub fn remove(&mut self, handle: usize) {
        if let Some(body) = self.bodies.get_mut(handle) {
            if body.flags.allocated {
                debug!("removed body {handle}");
                body.flags = BodyFlags::default();
            }
        }
    }

    /// The body at `handle`, or an invalid-handle error when the slot is
    /// free or out of range.
    pub fn body(&self, handle: usize) -> Result<&Body, GalaxyError> {
        self.bodies
            .get(handle)
            .filter(|b| b.flags.allocated)
            .ok_or(GalaxyError::InvalidHandle(handle))
    }

    /// Mutable access for the host's drag interactions. Contract: a mass
    /// write must be followed by [`Body::recalc`], a position teleport by
    /// [`Body::reset_trail`].
    pub fn body_mut(&mut self, handle: usize) -> Result<&mut Body, GalaxyError> {
        self.bodies
            .get_mut(handle)
            .filter(|b| b.flags.allocated)
            .ok_or(GalaxyError::InvalidHandle(handle))
    }

    /// Find the first allocated body whose disc contains the point, in
    /// index order, so the lowest index wins when bodies overlap. A
    /// bounding-box pre-check short-circuits the common miss before the
    /// exact distance test.
    pub fn find_at(&self, x: f64, y: f64) -> Option<usize> {
        self.bodies.iter().position(|b| {
            if !b.flags.allocated {
                return false;
            }
            let dx = x - b.position.x;
            let dy = y - b.position.y;
            if dx.abs() > b.radius || dy.abs() > b.radius {
                return false;
            }
            dx * dx + dy * dy <= b.radius * b.radius
        })
    }

    /// Advance every simulated body by one step of length `delta`.
    ///
    /// Single O(n²) pass: each body accumulates gravitational acceleration
    /// from every other simulated body, merging any pair that overlaps
    /// (distance under `r_i/1.75 + r_j/1.75`) instead of taking its force
    /// term. A merge deactivates the absorbed slot in place; the
    /// simulated-flag check on both loops is the safety net that keeps a
    /// deactivated slot from being touched again within the same step.
    /// Velocity then position update with semi-implicit Euler, and the new
    /// position is offered to the trail.
    pub fn integrate(&mut self, delta: f64) {
        let g = G * self.config.gravity_scale;
        let n = self.bodies.len();
        for i in 0..n {
            if !self.bodies[i].flags.simulated {
                continue;
            }
            let mut ax = 0.0;
            let mut ay = 0.0;
            for j in 0..n {
                if j == i || !self.bodies[j].flags.simulated {
                    continue;
                }
                // reread i each pass: a merge earlier in this inner loop
                // moves it and grows its radius
                let (pos_i, radius_i) = {
                    let b = &self.bodies[i];
                    (b.position, b.radius)
                };
                let (pos_j, radius_j, mass_j) = {
                    let b = &self.bodies[j];
                    (b.position, b.radius, b.mass)
                };

                let dx = pos_j.x - pos_i.x;
                let dy = pos_j.y - pos_i.y;
                let d = (dx * dx + dy * dy).sqrt();

                if d < radius_i / MERGE_RADIUS_DIVISOR + radius_j / MERGE_RADIUS_DIVISOR {
                    self.merge(i, j);
                    // the absorbed mass now moves with body i; no force term
                    continue;
                }

                let a = forces::gravity_acceleration(pos_i, pos_j, mass_j, g);
                ax += a.x;
                ay += a.y;
            }

            let body = &mut self.bodies[i];
            body.velocity.x += ax * delta;
            body.velocity.y += ay * delta;
            body.position.x += body.velocity.x * delta;
            body.position.y += body.velocity.y * delta;
            body.record_trail();
        }
    }

    /// Merge body `j` into body `i`: conserved quantities fold into `i`,
    /// then `j` is deactivated in place so indices stay stable for the rest
    /// of the step.
    fn merge(&mut self, i: usize, j: usize) {
        let (mass, position, velocity) = {
            let b = &self.bodies[j];
            (b.mass, b.position, b.velocity)
        };
        debug!(
            "body {j} (mass {:.1}) merges into body {i} (mass {:.1})",
            mass, self.bodies[i].mass
        );
        self.bodies[i].absorb(mass, position, velocity);
        self.bodies[j].deactivate();
    }

    /// Reflect every simulated body back into the rectangle
    /// `[x0, x1) × [y0, y1)`. When `reflect_velocity` is configured, the
    /// velocity component flips sign for each coordinate that folded an odd
    /// number of times. Call after `integrate` when a bounded universe is
    /// wanted; held (non-simulated) bodies are left where the host put them.
    pub fn bounce(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        let reflect = self.config.reflect_velocity;
        for body in &mut self.bodies {
            if !body.flags.simulated {
                continue;
            }
            let (px, py) = (body.position.x, body.position.y);
            body.position.x = boundary::fold(px, x0, x1);
            body.position.y = boundary::fold(py, y0, y1);
            if reflect {
                body.velocity.x *= boundary::fold_sign(px, x0, x1);
                body.velocity.y *= boundary::fold_sign(py, y0, y1);
            }
        }
    }

    /// Number of slots, free ones included; `handle < len()` for every
    /// handle ever returned.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of simulated bodies.
    pub fn alive_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.flags.simulated).count()
    }

    /// All slots, index = handle. The rendering collaborator iterates this
    /// and skips slots without the `exists` flag.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
