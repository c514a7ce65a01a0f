//! Single-particle mouse drag.

use crate::error::ClothError;
use crate::float::Float;
use crate::geometry::floored_distance;
use crate::grid::{ClothGrid, GridIndex};
use crate::vec::Vec2;

/// Tracks at most one dragged particle and the pointer it follows.
#[derive(Clone, Debug, Default)]
pub struct DragController<F: Float> {
    dragged: Option<GridIndex>,
    pointer: Vec2<F>,
}

impl<F: Float> DragController<F> {
    pub fn new() -> Self {
        DragController { dragged: None, pointer: Vec2::zero() }
    }

    /// Grab the particle nearest to `at` and move the pointer there.
    ///
    /// Distances use [`floored_distance`], so every particle within the
    /// floor ties; the first one in row-major order wins. Any previous drag
    /// is replaced. When `radius` is given and nothing is closer than it,
    /// the current drag is left as it was.
    pub fn pick(
        &mut self,
        grid: &ClothGrid<F>,
        at: Vec2<F>,
        radius: Option<F>,
    ) -> Result<GridIndex, ClothError> {
        if grid.is_empty() {
            return Err(ClothError::InvalidState);
        }

        let mut best: Option<(usize, F)> = None;
        for (i, p) in grid.particles().iter().enumerate() {
            let d = floored_distance(at, p.pos);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }

        let (i, d) = best.ok_or(ClothError::InvalidState)?;
        if let Some(r) = radius {
            if !(d < r) {
                return Err(ClothError::NothingInRange);
            }
        }

        let picked = grid.grid_index(i).ok_or(ClothError::InvalidState)?;
        self.dragged = Some(picked);
        self.pointer = at;
        log::debug!("picked particle ({}, {}) at distance {:?}", picked.row, picked.col, d);
        Ok(picked)
    }

    /// Drop the dragged particle, if any.
    pub fn release(&mut self) {
        if let Some(at) = self.dragged.take() {
            log::debug!("released particle ({}, {})", at.row, at.col);
        }
    }

    /// Where the dragged particle will be placed on the next step.
    pub fn set_pointer(&mut self, at: Vec2<F>) {
        self.pointer = at;
    }

    pub fn pointer(&self) -> Vec2<F> {
        self.pointer
    }

    pub fn dragged(&self) -> Option<GridIndex> {
        self.dragged
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }
}
