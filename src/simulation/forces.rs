//! Pairwise repulsion between overlapping balls
//!
//! Direct all-pairs scan, no broad phase. The scan runs once per ball as
//! "self" against every other index, so an overlapping pair is visited from
//! both sides within one step and the later visit sees the velocities the
//! earlier visit wrote. A pair that stays overlapped for the whole step
//! therefore receives the impulse twice.

use super::states::Ball;

/// Separations at or below this are treated as coincident centers; the pair
/// is skipped for the step instead of dividing by zero.
pub const DIST_EPS: f64 = 1e-9;

/// Distance-scaled push-apart impulse between overlapping balls.
#[derive(Debug, Clone)]
pub struct Repulsion {
    pub strength: f64, // force coefficient, scaled by 1/distance
}

impl Repulsion {
    /// Run the repulsion scan with `balls[i]` as self.
    ///
    /// For every other index `j` (ascending) whose disk overlaps ball `i`,
    /// both velocities are kicked apart along the center line with magnitude
    /// `strength / distance`. Identity is by index: two balls with equal
    /// fields still interact.
    pub fn apply(&self, i: usize, balls: &mut [Ball]) {
        for j in 0..balls.len() {
            if j == i {
                continue;
            }

            // d points from self toward the other ball
            let d = balls[j].x - balls[i].x;
            let dist = d.norm();
            let min_dist = balls[i].radius + balls[j].radius;

            if dist >= min_dist {
                continue;
            }
            if dist <= DIST_EPS {
                // Coincident centers have no usable direction; leave the
                // pair untouched rather than emit non-finite velocities.
                continue;
            }

            let dir = d / dist;
            let f = self.strength / dist;

            balls[i].v -= f * dir;
            balls[j].v += f * dir;
        }
    }
}
