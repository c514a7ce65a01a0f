//! Step observer trait for monitoring cloth simulation progress.

use crate::grid::GridIndex;

/// Trait for observing cloth steps.
///
/// Implement this trait to monitor the integrator (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after the force pass, with the number of particles integrated.
    fn on_forces(&mut self, _updated: usize) {}

    /// Called after staged positions have been committed.
    fn on_commit(&mut self) {}

    /// Called when the dragged particle is moved to the pointer.
    fn on_drag_override(&mut self, _particle: GridIndex) {}

    /// Called when a step is fully complete. `step` counts from 1.
    fn on_step_complete(&mut self, _step: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards every hook to the `log` facade at trace level.
pub struct LogStepObserver;

impl StepObserver for LogStepObserver {
    fn on_forces(&mut self, updated: usize) {
        log::trace!("force pass integrated {} particles", updated);
    }

    fn on_commit(&mut self) {
        log::trace!("staged positions committed");
    }

    fn on_drag_override(&mut self, particle: GridIndex) {
        log::trace!("dragged particle ({}, {}) moved to pointer", particle.row, particle.col);
    }

    fn on_step_complete(&mut self, step: u64) {
        log::trace!("step {} complete", step);
    }
}
