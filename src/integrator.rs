//! The per-step spring integrator.
//!
//! A step runs in two passes over the grid:
//!
//! 1. **Force pass.** Every free particle (not pinned, not dragged) sums
//!    gravity and the pull of up to four structural springs. It then
//!    updates its velocity, applies friction and the speed limit, and
//!    writes its next position into `staged`. Neighbours are only read
//!    through `pos`, which this pass never writes, so the result does not
//!    depend on visiting order.
//! 2. **Commit pass.** Every particle except the dragged one takes its
//!    staged position. Staged positions of pinned particles are never
//!    touched, so they stay on their anchor. The dragged particle is then
//!    moved to the pointer.

use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::geometry::{floored_distance, spring_angle};
use crate::grid::{ClothGrid, GridIndex};
use crate::interaction::DragController;
use crate::observer::StepObserver;
use crate::vec::Vec2;

/// Advance `grid` by one step of `config.step()` simulated time.
pub fn step<F: Float, O: StepObserver>(
    grid: &mut ClothGrid<F>,
    config: &ClothConfig<F>,
    drag: &DragController<F>,
    observer: &mut O,
) {
    let dragged = drag.dragged().map(|at| grid.index(at));
    let h = config.step();

    let mut updated = 0;
    for i in 0..grid.particle_count() {
        if grid.particles()[i].pinned || dragged == Some(i) {
            continue;
        }
        let Some(at) = grid.grid_index(i) else { continue };
        let Ok(force) = net_force(grid, at, config) else { continue };
        let p = &mut grid.particles_mut()[i];
        p.vel = advance_velocity(p.vel, force, config);
        p.staged = p.pos + p.vel.scale(h);
        updated += 1;
    }
    observer.on_forces(updated);

    for (i, p) in grid.particles_mut().iter_mut().enumerate() {
        if dragged != Some(i) {
            p.commit();
        }
    }
    observer.on_commit();

    if let (Some(i), Some(at)) = (dragged, drag.dragged()) {
        grid.particles_mut()[i].pos = drag.pointer();
        observer.on_drag_override(at);
    }
}

/// Force a linear spring of rest length `config.rest_length()` between
/// `from` and `to` exerts on `from`.
///
/// Pulls `from` towards `to` when stretched and pushes it away when
/// compressed. Separation is floored at
/// [`MIN_SEPARATION`](crate::geometry::MIN_SEPARATION).
pub fn spring_force<F: Float>(from: Vec2<F>, to: Vec2<F>, config: &ClothConfig<F>) -> Vec2<F> {
    let angle = spring_angle(from, to);
    let distance = floored_distance(from, to);
    let displacement = config.rest_length() - distance;
    let k = config.stiffness();
    Vec2::new(-k * displacement * angle.cos(), -k * displacement * angle.sin())
}

/// Gravity plus the spring forces from every existing neighbour of `at`.
pub fn net_force<F: Float>(
    grid: &ClothGrid<F>,
    at: GridIndex,
    config: &ClothConfig<F>,
) -> Result<Vec2<F>, ClothError> {
    let pos = grid.particle(at)?.pos;
    let particles = grid.particles();
    let mut force = Vec2::new(F::zero(), config.gravity() * config.mass());
    for n in grid.neighbors(at) {
        force = force + spring_force(pos, particles[n].pos, config);
    }
    Ok(force)
}

/// Apply `force` for one step, then friction, then the speed limit.
pub fn advance_velocity<F: Float>(vel: Vec2<F>, force: Vec2<F>, config: &ClothConfig<F>) -> Vec2<F> {
    let m = config.mass();
    let friction = config.friction();
    let mut v = Vec2::new(vel.x + force.x / m, vel.y + force.y / m);
    v = Vec2::new(v.x - v.x * friction, v.y - v.y * friction);
    clamp_speed(v, config.speed_limit())
}

/// Rescale `vel` to magnitude `limit` if it is faster, keeping its direction.
pub fn clamp_speed<F: Float>(vel: Vec2<F>, limit: F) -> Vec2<F> {
    if vel.length() > limit {
        let angle = spring_angle(Vec2::zero(), vel);
        Vec2::new(angle.cos(), angle.sin()).scale(limit)
    } else {
        vel
    }
}
