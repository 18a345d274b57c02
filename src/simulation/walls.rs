//! Wall handling for the rectangular arena
//!
//! Reflects a ball's velocity when its disk crosses an arena edge. The
//! position is left where integration put it: a ball that overshoots a wall
//! keeps the overshoot and only the velocity component flips. Axis checks
//! are independent, so a corner hit flips both components in the same call.

use super::states::{Ball, Bounds};

/// Negate the velocity component on every axis whose wall the ball's disk
/// crosses. Position is never moved.
pub fn reflect(ball: &mut Ball, bounds: &Bounds) {
    if ball.x.x - ball.radius < bounds.left || ball.x.x + ball.radius > bounds.right {
        ball.v.x = -ball.v.x;
    }
    if ball.x.y - ball.radius < bounds.top || ball.x.y + ball.radius > bounds.bottom {
        ball.v.y = -ball.v.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::NVec2;

    fn arena() -> Bounds {
        Bounds {
            left: 0.0,
            top: 0.0,
            right: 800.0,
            bottom: 600.0,
        }
    }

    #[test]
    fn interior_ball_untouched() {
        let mut b = Ball {
            x: NVec2::new(400.0, 300.0),
            v: NVec2::new(50.0, -20.0),
            radius: 10.0,
        };
        reflect(&mut b, &arena());
        assert_eq!(b.v, NVec2::new(50.0, -20.0));
    }

    #[test]
    fn corner_hit_flips_both_components() {
        let mut b = Ball {
            x: NVec2::new(795.0, 595.0),
            v: NVec2::new(100.0, 100.0),
            radius: 10.0,
        };
        reflect(&mut b, &arena());
        assert_eq!(b.v, NVec2::new(-100.0, -100.0));
        // Overshoot stays; reflect never moves the ball.
        assert_eq!(b.x, NVec2::new(795.0, 595.0));
    }
}
