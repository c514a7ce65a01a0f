//! Cloth parameters: a fluent builder and the immutable set it produces.

use crate::float::Float;

/// One edge of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Parse a side from its lowercase name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Side> {
        match name {
            "top" => Some(Side::Top),
            "right" => Some(Side::Right),
            "bottom" => Some(Side::Bottom),
            "left" => Some(Side::Left),
            _ => None,
        }
    }
}

/// Which grid edges are pinned in place.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttachedSides {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl AttachedSides {
    /// Nothing pinned.
    pub const NONE: AttachedSides = AttachedSides { top: false, right: false, bottom: false, left: false };

    pub fn get(&self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    pub fn set(&mut self, side: Side, attached: bool) {
        match side {
            Side::Top => self.top = attached,
            Side::Right => self.right = attached,
            Side::Bottom => self.bottom = attached,
            Side::Left => self.left = attached,
        }
    }

    /// Overwrite the sides present in `patch`, keep the rest.
    pub fn merge(&mut self, patch: SidePatch) {
        if let Some(v) = patch.top { self.top = v; }
        if let Some(v) = patch.right { self.right = v; }
        if let Some(v) = patch.bottom { self.bottom = v; }
        if let Some(v) = patch.left { self.left = v; }
    }

    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

impl Default for AttachedSides {
    /// Top edge pinned, like a curtain hanging from a rail.
    fn default() -> Self {
        AttachedSides { top: true, right: false, bottom: false, left: false }
    }
}

/// A partial update to [`AttachedSides`]. `None` leaves a side unchanged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SidePatch {
    pub top: Option<bool>,
    pub right: Option<bool>,
    pub bottom: Option<bool>,
    pub left: Option<bool>,
}

/// Empty canvas space around the spawned grid.
///
/// Columns start at `horizontal` and stop before `width - horizontal`;
/// rows start at 0 and stop before `height - bottom`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutMargins<F: Float> {
    pub horizontal: F,
    pub bottom: F,
}

impl<F: Float> Default for LayoutMargins<F> {
    fn default() -> Self {
        LayoutMargins {
            horizontal: F::from_f64(250.0),
            bottom: F::from_f64(150.0),
        }
    }
}

/// Immutable parameter set consumed by [`ClothEngine`](crate::ClothEngine).
///
/// Produced by [`ClothConfigBuilder::build`]. Values are not validated:
/// a friction of 1.5 or a negative mass is accepted and simply gives
/// non-physical motion.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClothConfig<F: Float> {
    gravity: F,
    friction: F,
    mass: F,
    stiffness: F,
    step: F,
    spawn_distance: F,
    rest_length: F,
    speed_limit: F,
    attached: AttachedSides,
    margins: LayoutMargins<F>,
    pick_radius: Option<F>,
}

impl<F: Float> ClothConfig<F> {
    /// Start a builder with default values.
    pub fn builder() -> ClothConfigBuilder<F> {
        ClothConfigBuilder::new()
    }

    /// Downward force per unit mass.
    pub fn gravity(&self) -> F { self.gravity }
    /// Fraction of velocity removed each step.
    pub fn friction(&self) -> F { self.friction }
    pub fn mass(&self) -> F { self.mass }
    /// Spring constant `k`.
    pub fn stiffness(&self) -> F { self.stiffness }
    /// Integration time step `h`.
    pub fn step(&self) -> F { self.step }
    /// Spacing between neighbouring particles at spawn.
    pub fn spawn_distance(&self) -> F { self.spawn_distance }
    /// Rest length of every structural spring.
    pub fn rest_length(&self) -> F { self.rest_length }
    /// Maximum velocity magnitude.
    pub fn speed_limit(&self) -> F { self.speed_limit }
    pub fn attached(&self) -> AttachedSides { self.attached }
    pub fn margins(&self) -> LayoutMargins<F> { self.margins }
    /// Maximum distance at which `pick` will grab a particle, if bounded.
    pub fn pick_radius(&self) -> Option<F> { self.pick_radius }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        ClothConfigBuilder::new().build()
    }
}

/// Fluent builder for [`ClothConfig`].
///
/// # Builder Pattern
/// ```
/// use springcloth::config::{ClothConfig, SidePatch};
///
/// let config: ClothConfig<f64> = ClothConfig::builder()
///     .with_gravity(9.0)
///     .with_friction(0.05)
///     .with_attached(SidePatch { left: Some(true), ..Default::default() })
///     .build();
/// assert!(config.attached().top && config.attached().left);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ClothConfigBuilder<F: Float> {
    gravity: F,
    friction: F,
    mass: F,
    stiffness: F,
    step: F,
    spawn_distance: F,
    rest_length: F,
    speed_limit: F,
    attached: AttachedSides,
    margins: LayoutMargins<F>,
    pick_radius: Option<F>,
}

impl<F: Float> ClothConfigBuilder<F> {
    /// Default integration step `h`.
    pub const DEFAULT_STEP: f64 = 0.026;
    /// Default speed limit is this distance per default step: `50 / 0.026`.
    pub const SPEED_LIMIT_PER_STEP: f64 = 50.0;

    /// Create a builder with default values.
    pub fn new() -> Self {
        ClothConfigBuilder {
            gravity: F::from_f64(12.0),
            friction: F::from_f64(0.03),
            mass: F::one(),
            stiffness: F::from_f64(13.0),
            step: F::from_f64(Self::DEFAULT_STEP),
            spawn_distance: F::from_f64(10.0),
            rest_length: F::from_f64(10.0),
            speed_limit: F::from_f64(Self::SPEED_LIMIT_PER_STEP) / F::from_f64(Self::DEFAULT_STEP),
            attached: AttachedSides::default(),
            margins: LayoutMargins::default(),
            pick_radius: None,
        }
    }

    /// Set the downward force per unit mass.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the fraction of velocity removed each step.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    /// Set the mass shared by every particle.
    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    /// Set the spring constant `k`.
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the integration step `h`. The speed limit is not rederived.
    pub fn with_step(mut self, step: F) -> Self {
        self.step = step;
        self
    }

    /// Set the spacing between neighbouring particles at spawn.
    pub fn with_spawn_distance(mut self, spawn_distance: F) -> Self {
        self.spawn_distance = spawn_distance;
        self
    }

    /// Set the rest length of every structural spring.
    pub fn with_rest_length(mut self, rest_length: F) -> Self {
        self.rest_length = rest_length;
        self
    }

    /// Set the maximum velocity magnitude.
    pub fn with_speed_limit(mut self, speed_limit: F) -> Self {
        self.speed_limit = speed_limit;
        self
    }

    /// Merge a partial set of attachment flags into the current ones.
    pub fn with_attached(mut self, patch: SidePatch) -> Self {
        self.attached.merge(patch);
        self
    }

    /// Merge attachment flags by side name. Unknown names are ignored.
    pub fn with_attached_named<'a, I>(mut self, sides: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        for (name, attached) in sides {
            if let Some(side) = Side::from_name(name) {
                self.attached.set(side, attached);
            }
        }
        self
    }

    /// Set the empty canvas space around the grid.
    pub fn with_margins(mut self, margins: LayoutMargins<F>) -> Self {
        self.margins = margins;
        self
    }

    /// Only pick particles closer than `radius` to the pointer.
    pub fn with_pick_radius(mut self, radius: F) -> Self {
        self.pick_radius = Some(radius);
        self
    }

    /// Freeze the parameters into a [`ClothConfig`].
    pub fn build(self) -> ClothConfig<F> {
        ClothConfig {
            gravity: self.gravity,
            friction: self.friction,
            mass: self.mass,
            stiffness: self.stiffness,
            step: self.step,
            spawn_distance: self.spawn_distance,
            rest_length: self.rest_length,
            speed_limit: self.speed_limit,
            attached: self.attached,
            margins: self.margins,
            pick_radius: self.pick_radius,
        }
    }
}

impl<F: Float> Default for ClothConfigBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}
