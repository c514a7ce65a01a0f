//! Mass-spring cloth for games and interactive toys.
//!
//! `springcloth` simulates a rectangular grid of point masses joined to their
//! four neighbours by linear springs. The cloth is pulled by gravity, slowed
//! by friction and held under a speed ceiling. Any edge can be pinned, and one
//! particle at a time can be dragged with the mouse.
//!
//! # Features
//!
//! - **Two-phase integration**: forces are computed from a consistent snapshot,
//!   then committed, so update order never matters
//! - **Edge pinning**: attach any combination of top/right/bottom/left
//! - **Mouse drag**: pick the nearest particle and pin it to the pointer
//! - **Deterministic**: no randomness, identical inputs give identical motion
//! - **Observable**: Monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! The crate draws nothing and owns no event loop: the host calls
//! [`ClothEngine::step`] once per tick and renders [`ClothEngine::positions`].

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod geometry;
pub mod config;
pub mod particle;
pub mod grid;
pub mod integrator;
pub mod interaction;
pub mod engine;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use geometry::{floored_distance, spring_angle, MIN_SEPARATION};
pub use config::{AttachedSides, ClothConfig, ClothConfigBuilder, LayoutMargins, Side, SidePatch};
pub use particle::ClothParticle;
pub use grid::{ClothGrid, GridIndex};
pub use interaction::DragController;
pub use engine::ClothEngine;
pub use observer::{StepObserver, NoOpStepObserver, LogStepObserver};
pub use error::ClothError;
