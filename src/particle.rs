//! Cloth particles with explicit velocity and a staged next position.

use crate::float::Float;
use crate::vec::Vec2;

/// A point mass in the cloth grid.
///
/// `staged` holds the position computed during the force pass of a step.
/// It only becomes `pos` in the commit pass, so no particle ever sees a
/// neighbour's half-updated position.
#[derive(Clone, Debug, PartialEq)]
pub struct ClothParticle<F: Float> {
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    pub staged: Vec2<F>,
    pub pinned: bool,
}

impl<F: Float> ClothParticle<F> {
    /// A free particle at rest at `spawn`.
    pub fn new(spawn: Vec2<F>) -> Self {
        ClothParticle {
            pos: spawn,
            vel: Vec2::zero(),
            staged: spawn,
            pinned: false,
        }
    }

    /// A particle that never integrates and stays at `anchor`.
    pub fn pinned(anchor: Vec2<F>) -> Self {
        ClothParticle {
            pinned: true,
            ..ClothParticle::new(anchor)
        }
    }

    pub fn speed(&self) -> F {
        self.vel.length()
    }

    /// Move the staged position into place.
    pub fn commit(&mut self) {
        self.pos = self.staged;
    }
}
