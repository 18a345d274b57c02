//! Per-tick driver for the ball system
//!
//! `step` is the single state transition: for each ball in ascending index
//! order it integrates under gravity, reflects at the arena walls, then runs
//! the repulsion scan against the whole collection, all three for one ball
//! before the next ball is touched. Index order is part of the contract:
//! with three or more mutually overlapping balls the outcome depends on it.

use super::forces::Repulsion;
use super::integrator::integrate;
use super::params::Parameters;
use super::states::{Bounds, System};
use super::walls::reflect;
use crate::error::{Error, Result};

/// Advance the system by one tick of `dt` seconds, in place.
///
/// The collection size is constant across the call; no balls are created or
/// destroyed. Wall checks and the repulsion scan still run at `dt = 0`, but
/// an in-bounds, non-overlapping collection comes out bit-for-bit unchanged.
///
/// Errors with `Error::InvalidParam` if `dt` is negative or non-finite.
pub fn step(sys: &mut System, dt: f64, bounds: &Bounds, params: &Parameters) -> Result<()> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(Error::InvalidParam("dt must be finite and >= 0".into()));
    }

    let repulsion = Repulsion {
        strength: params.repulsion,
    };

    for i in 0..sys.balls.len() {
        integrate(&mut sys.balls[i], dt, params.gravity);
        reflect(&mut sys.balls[i], bounds);
        repulsion.apply(i, &mut sys.balls);
    }

    sys.t += dt;
    Ok(())
}

/// Run fixed steps of `params.h0` until `params.t_end` (headless driver).
pub fn run_to_end(sys: &mut System, bounds: &Bounds, params: &Parameters) -> Result<()> {
    while sys.t < params.t_end {
        step(sys, params.h0, bounds, params)?;
    }
    Ok(())
}
