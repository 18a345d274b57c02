//! Fixed-step time integration for a single ball
//!
//! Explicit Euler with drift-then-kick ordering: the position moves by the
//! pre-step velocity, and gravity is applied to the velocity afterwards, so
//! the kick only shows up in the next step's displacement.

use super::states::Ball;

/// Advance one ball by `dt` seconds under constant vertical gravity.
///
/// Updates position and velocity in place. `dt = 0` leaves both unchanged.
pub fn integrate(ball: &mut Ball, dt: f64, gravity: f64) {
    // Drift: x_n+1 = x_n + dt * v_n
    ball.x += dt * ball.v;

    // Kick: v_n+1.y = v_n.y + dt * g
    ball.v.y += gravity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::NVec2;

    #[test]
    fn drift_uses_pre_kick_velocity() {
        let mut b = Ball {
            x: NVec2::new(0.0, 0.0),
            v: NVec2::new(10.0, 0.0),
            radius: 1.0,
        };
        integrate(&mut b, 0.5, 100.0);
        // Displacement comes from v = (10, 0); the kick lands after.
        assert_eq!(b.x, NVec2::new(5.0, 0.0));
        assert_eq!(b.v, NVec2::new(10.0, 50.0));
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut b = Ball {
            x: NVec2::new(3.0, -4.0),
            v: NVec2::new(1.0, 2.0),
            radius: 1.0,
        };
        integrate(&mut b, 0.0, 980.0);
        assert_eq!(b.x, NVec2::new(3.0, -4.0));
        assert_eq!(b.v, NVec2::new(1.0, 2.0));
    }
}
