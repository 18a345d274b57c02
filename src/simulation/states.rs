//! Core state types for the ball simulation.
//!
//! Defines the ball/system structs plus the arena rectangle:
//! - `Ball`   – position, velocity, radius, using `NVec2`
//! - `System` – the ordered ball collection and the current simulation time `t`
//! - `Bounds` – the axis-aligned rectangle balls are reflected within
//!
//! A ball's identity is its index in `System::balls`; two balls may carry
//! identical fields and remain distinct entities.

use nalgebra::Vector2;

use crate::error::{Error, Result};

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Ball {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub radius: f64, // collision disk radius
}

impl Ball {
    /// Create a ball after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `radius` is non-positive or any component is NaN/inf.
    pub fn new(x: NVec2, v: NVec2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !(x.x.is_finite() && x.y.is_finite()) {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !(v.x.is_finite() && v.y.is_finite()) {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self { x, v, radius })
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub balls: Vec<Ball>, // ordered collection; index order is traversal order
    pub t: f64, // time
}

/// Arena rectangle in world coordinates. `y` grows downward, so `top` is the
/// smaller of the two vertical edges.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ball_ok() -> Result<()> {
        let b = Ball::new(NVec2::new(1.0, 2.0), NVec2::new(-3.0, 0.5), 4.0)?;
        assert_eq!(b.x, NVec2::new(1.0, 2.0));
        assert_eq!(b.v, NVec2::new(-3.0, 0.5));
        assert_eq!(b.radius, 4.0);
        Ok(())
    }

    #[test]
    fn non_positive_radius_rejected() {
        let err = Ball::new(NVec2::zeros(), NVec2::zeros(), 0.0).unwrap_err();
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn non_finite_position_rejected() {
        let err = Ball::new(NVec2::new(f64::NAN, 0.0), NVec2::zeros(), 1.0).unwrap_err();
        assert!(err.to_string().contains("position"));
    }
}
