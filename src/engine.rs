//! The cloth engine: grid, parameters and drag state behind one facade.

use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::grid::{ClothGrid, GridIndex};
use crate::integrator;
use crate::interaction::DragController;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::ClothParticle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A mass-spring cloth driven one step at a time by its host.
///
/// The engine has no clock or event loop of its own. The host calls
/// [`step`](Self::step) once per tick, feeds the pointer with
/// [`set_pointer`](Self::set_pointer) and reads [`positions`](Self::positions)
/// to draw.
///
/// # Threading
/// The engine is single-threaded and every mutating call takes `&mut self`.
/// A host that shares it between threads must put it behind its own lock
/// (e.g. a `Mutex`) so that `step`, `pick`, `release`, `set_pointer` and
/// position reads never overlap.
///
/// ```
/// use springcloth::{ClothConfig, ClothEngine};
///
/// let mut cloth = ClothEngine::build(800.0f64, 300.0, ClothConfig::default());
/// assert_eq!((cloth.rows(), cloth.cols()), (15, 30));
///
/// cloth.pick(400.0, 120.0).unwrap();
/// cloth.set_pointer(420.0, 160.0);
/// cloth.step();
/// cloth.release();
/// ```
#[derive(Clone, Debug)]
pub struct ClothEngine<F: Float> {
    grid: ClothGrid<F>,
    config: ClothConfig<F>,
    drag: DragController<F>,
    steps: u64,
}

impl<F: Float> ClothEngine<F> {
    /// Lay out a cloth on a `width` x `height` canvas.
    pub fn build(width: F, height: F, config: ClothConfig<F>) -> Self {
        let grid = ClothGrid::from_canvas(width, height, &config);
        log::debug!(
            "cloth built: {}x{} particles, {} pinned",
            grid.rows(),
            grid.cols(),
            grid.pinned_count(),
        );
        ClothEngine {
            grid,
            config,
            drag: DragController::new(),
            steps: 0,
        }
    }

    /// Advance by one step of `config().step()` simulated time.
    pub fn step(&mut self) {
        self.step_observed(&mut NoOpStepObserver);
    }

    pub fn step_observed<O: StepObserver>(&mut self, observer: &mut O) {
        integrator::step(&mut self.grid, &self.config, &self.drag, observer);
        self.steps += 1;
        observer.on_step_complete(self.steps);
    }

    /// Start dragging the particle nearest to `(x, y)`.
    ///
    /// Fails with [`ClothError::InvalidState`] on an empty grid, and with
    /// [`ClothError::NothingInRange`] if a pick radius is configured and
    /// missed.
    pub fn pick(&mut self, x: F, y: F) -> Result<GridIndex, ClothError> {
        self.drag.pick(&self.grid, Vec2::new(x, y), self.config.pick_radius())
    }

    /// Stop dragging. Does nothing if no particle is held.
    pub fn release(&mut self) {
        self.drag.release();
    }

    /// Pointer position the dragged particle is moved to on the next step.
    pub fn set_pointer(&mut self, x: F, y: F) {
        self.drag.set_pointer(Vec2::new(x, y));
    }

    /// Particle positions in row-major order.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.grid.positions()
    }

    /// Positions flattened as `[x0, y0, x1, y1, ...]`, row-major.
    pub fn positions_flat(&self) -> AllocVec<F> {
        let mut out = AllocVec::with_capacity(self.grid.particle_count() * 2);
        for p in self.grid.particles() {
            out.push(p.pos.x);
            out.push(p.pos.y);
        }
        out
    }

    pub fn position_at(&self, row: usize, col: usize) -> Result<Vec2<F>, ClothError> {
        Ok(self.grid.particle(GridIndex::new(row, col))?.pos)
    }

    pub fn particle(&self, at: GridIndex) -> Result<&ClothParticle<F>, ClothError> {
        self.grid.particle(at)
    }

    /// Direct access to one particle, e.g. to seed a velocity.
    pub fn particle_mut(&mut self, at: GridIndex) -> Result<&mut ClothParticle<F>, ClothError> {
        self.grid.particle_mut(at)
    }

    pub fn is_pinned(&self, at: GridIndex) -> Result<bool, ClothError> {
        Ok(self.grid.particle(at)?.pinned)
    }

    pub fn dragged(&self) -> Option<GridIndex> { self.drag.dragged() }
    pub fn pointer(&self) -> Vec2<F> { self.drag.pointer() }
    pub fn grid(&self) -> &ClothGrid<F> { &self.grid }
    pub fn config(&self) -> &ClothConfig<F> { &self.config }
    pub fn rows(&self) -> usize { self.grid.rows() }
    pub fn cols(&self) -> usize { self.grid.cols() }
    pub fn particle_count(&self) -> usize { self.grid.particle_count() }
    /// Number of completed steps.
    pub fn step_count(&self) -> u64 { self.steps }
}
