//! Rectangular cloth grid laid out over a canvas.

use crate::config::{AttachedSides, ClothConfig};
use crate::error::ClothError;
use crate::float::Float;
use crate::particle::ClothParticle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Fixed (row, column) identity of a particle. Row 0 is the top edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridIndex {
    pub row: usize,
    pub col: usize,
}

impl GridIndex {
    pub fn new(row: usize, col: usize) -> Self {
        GridIndex { row, col }
    }
}

/// Cloth particles stored row-major. Dimensions never change after
/// construction.
#[derive(Clone, Debug)]
pub struct ClothGrid<F: Float> {
    particles: AllocVec<ClothParticle<F>>,
    rows: usize,
    cols: usize,
}

impl<F: Float> ClothGrid<F> {
    /// Lay out a grid on a `width` x `height` canvas.
    ///
    /// Rows run from y = 0 up to (not including) `height - margins.bottom`,
    /// columns from x = `margins.horizontal` up to (not including)
    /// `width - margins.horizontal`, both spaced `spawn_distance` apart.
    /// Particle at (row, col) has index `row * cols + col`.
    ///
    /// A layout that leaves no room, or a spacing that is not a positive
    /// finite number, gives an empty grid.
    pub fn from_canvas(width: F, height: F, config: &ClothConfig<F>) -> Self {
        let spacing = config.spawn_distance();
        let margins = config.margins();

        if !(spacing > F::zero()) || !spacing.is_finite() || !width.is_finite() || !height.is_finite() {
            log::warn!(
                "degenerate cloth layout (canvas {:?}x{:?}, spacing {:?}), grid is empty",
                width, height, spacing,
            );
            return Self::empty();
        }

        let ys = spawn_coords(F::zero(), height - margins.bottom, spacing);
        let xs = spawn_coords(margins.horizontal, width - margins.horizontal, spacing);
        if ys.is_empty() || xs.is_empty() {
            log::warn!("canvas {:?}x{:?} leaves no room for particles, grid is empty", width, height);
            return Self::empty();
        }

        let rows = ys.len();
        let cols = xs.len();
        let sides = config.attached();
        let mut particles = AllocVec::with_capacity(rows * cols);
        for (row, &y) in ys.iter().enumerate() {
            for (col, &x) in xs.iter().enumerate() {
                let spawn = Vec2::new(x, y);
                if edge_pinned(row, col, rows, cols, sides) {
                    particles.push(ClothParticle::pinned(spawn));
                } else {
                    particles.push(ClothParticle::new(spawn));
                }
            }
        }

        ClothGrid { particles, rows, cols }
    }

    fn empty() -> Self {
        ClothGrid { particles: AllocVec::new(), rows: 0, cols: 0 }
    }

    pub fn index(&self, at: GridIndex) -> usize {
        at.row * self.cols + at.col
    }

    pub fn checked_index(&self, at: GridIndex) -> Result<usize, ClothError> {
        if at.row < self.rows && at.col < self.cols {
            Ok(self.index(at))
        } else {
            Err(ClothError::ParticleOutOfBounds {
                row: at.row,
                col: at.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Inverse of [`index`](Self::index). `None` past the last particle.
    pub fn grid_index(&self, index: usize) -> Option<GridIndex> {
        if index >= self.particles.len() {
            return None;
        }
        Some(GridIndex { row: index / self.cols, col: index % self.cols })
    }

    /// Flat indices of the existing neighbours of `at`, in the order
    /// up, left, right, down. Edges have fewer; there is no wraparound.
    pub fn neighbors(&self, at: GridIndex) -> impl Iterator<Item = usize> {
        let GridIndex { row, col } = at;
        let cols = self.cols;
        let up = (row > 0).then(|| (row - 1) * cols + col);
        let left = (col > 0).then(|| row * cols + col - 1);
        let right = (col + 1 < cols).then(|| row * cols + col + 1);
        let down = (row + 1 < self.rows).then(|| (row + 1) * cols + col);
        [up, left, right, down].into_iter().flatten()
    }

    pub fn particle(&self, at: GridIndex) -> Result<&ClothParticle<F>, ClothError> {
        let idx = self.checked_index(at)?;
        Ok(&self.particles[idx])
    }

    pub fn particle_mut(&mut self, at: GridIndex) -> Result<&mut ClothParticle<F>, ClothError> {
        let idx = self.checked_index(at)?;
        Ok(&mut self.particles[idx])
    }

    pub fn particles(&self) -> &[ClothParticle<F>] { &self.particles }
    pub fn particles_mut(&mut self) -> &mut [ClothParticle<F>] { &mut self.particles }

    /// Positions in row-major order.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }
    pub fn pinned_count(&self) -> usize { self.particles.iter().filter(|p| p.pinned).count() }
}

/// Coordinates `start, start + spacing, ...` strictly below `end`, built by
/// repeated addition so they match a host that lays out the same way.
fn spawn_coords<F: Float>(start: F, end: F, spacing: F) -> AllocVec<F> {
    let mut coords = AllocVec::new();
    let mut c = start;
    while c < end {
        coords.push(c);
        let next = c + spacing;
        // spacing lost to rounding at large magnitudes
        if !(next > c) {
            break;
        }
        c = next;
    }
    coords
}

fn edge_pinned(row: usize, col: usize, rows: usize, cols: usize, sides: AttachedSides) -> bool {
    (sides.top && row == 0)
        || (sides.bottom && row + 1 == rows)
        || (sides.left && col == 0)
        || (sides.right && col + 1 == cols)
}
