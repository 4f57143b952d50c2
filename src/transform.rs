//! Lazily-composed 2D affine transforms.
//!
//! A [`Transform`] is a description of an affine map, not the map itself:
//! building one allocates at most a couple of enum nodes, and nothing is
//! multiplied until [`Transform::resolve`] collapses the structure into a
//! concrete [`Matrix`]. Resolution is a pure function of the structure.

use glam::{DAffine2, dvec2};

/// Concrete affine matrix, the result of resolving a [`Transform`].
pub type Matrix = DAffine2;

/// A composable 2D affine transform.
///
/// `Compose { first, second }` means "apply `first`'s effect to a point,
/// then `second`'s effect". Chains built with [`Transform::then`] therefore
/// read left to right in application order.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    Identity,
    ReflectX,
    ReflectY,
    Rotate { radians: f64 },
    Translate { dx: f64, dy: f64 },
    Compose {
        first: Box<Transform>,
        second: Box<Transform>,
    },
}

impl Transform {
    /// The do-nothing transform.
    #[inline]
    pub fn identity() -> Transform {
        Transform::Identity
    }

    /// Flip the horizontal axis (scale by (-1, 1)).
    #[inline]
    pub fn reflect_x() -> Transform {
        Transform::ReflectX
    }

    /// Flip the vertical axis (scale by (1, -1)).
    #[inline]
    pub fn reflect_y() -> Transform {
        Transform::ReflectY
    }

    /// Rotation by `radians`, counter-clockwise in a right-handed frame.
    #[inline]
    pub fn rotate(radians: f64) -> Transform {
        Transform::Rotate { radians }
    }

    /// Translation by `(dx, dy)`.
    #[inline]
    pub fn translate(dx: f64, dy: f64) -> Transform {
        Transform::Translate { dx, dy }
    }

    /// Sequence two transforms: `self` applies first, `next` applies to the
    /// result. `a.then(b).then(c)` applies a, then b, then c.
    pub fn then(self, next: Transform) -> Transform {
        Transform::Compose {
            first: Box::new(self),
            second: Box::new(next),
        }
    }

    /// Collapse the structure into a concrete matrix.
    ///
    /// For `Compose`, glam composes like functions: `m2 * m1` maps a point
    /// through `m1` first, so "first then second" is `second * first`.
    pub fn resolve(&self) -> Matrix {
        match self {
            Transform::Identity => DAffine2::IDENTITY,
            Transform::ReflectX => DAffine2::from_scale(dvec2(-1.0, 1.0)),
            Transform::ReflectY => DAffine2::from_scale(dvec2(1.0, -1.0)),
            Transform::Rotate { radians } => DAffine2::from_angle(*radians),
            Transform::Translate { dx, dy } => DAffine2::from_translation(dvec2(*dx, *dy)),
            Transform::Compose { first, second } => second.resolve() * first.resolve(),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::Identity
    }
}
