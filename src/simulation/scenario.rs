//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - the arena rectangle (`Bounds`)
//! - system state (`System` with balls at t = 0)
//!
//! Balls come either from an explicit list or from a seeded random spawn
//! block. The scenario is inserted into Bevy as a `Resource` and consumed by
//! the physics and draw systems.

use bevy::prelude::Resource;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::configuration::config::{BallConfig, ScenarioConfig, SpawnConfig};
use crate::error::{Error, Result};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Ball, Bounds, NVec2, System};

/// Bevy resource holding a fully-initialized scenario: parameters, arena,
/// and the ball collection at t = 0.
#[derive(Resource, Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub bounds: Bounds,
    pub system: System,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let p_cfg = cfg.parameters;
        if !p_cfg.h0.is_finite() || p_cfg.h0 <= 0.0 {
            return Err(Error::InvalidParam("h0 must be finite and > 0".into()));
        }

        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            gravity: p_cfg.gravity,
            repulsion: p_cfg.repulsion,
            seed: p_cfg.seed,
        };

        let bounds = Bounds {
            left: cfg.bounds.left,
            top: cfg.bounds.top,
            right: cfg.bounds.right,
            bottom: cfg.bounds.bottom,
        };
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(Error::InvalidParam(
                "bounds must have positive width and height".into(),
            ));
        }

        // Explicit list wins over the random spawn block.
        let balls = match (cfg.balls, cfg.spawn) {
            (Some(list), _) => explicit_balls(&list)?,
            (None, Some(spawn)) => random_balls(&spawn, &bounds, parameters.seed)?,
            (None, None) => {
                return Err(Error::InvalidParam(
                    "scenario needs a `balls` list or a `spawn` block".into(),
                ))
            }
        };

        info!("scenario: {} balls, h0 = {} s", balls.len(), parameters.h0);

        Ok(Self {
            parameters,
            bounds,
            system: System { balls, t: 0.0 },
        })
    }
}

fn explicit_balls(list: &[BallConfig]) -> Result<Vec<Ball>> {
    if list.is_empty() {
        return Err(Error::InvalidParam("`balls` list must not be empty".into()));
    }
    list.iter()
        .map(|bc| {
            Ball::new(
                NVec2::new(bc.x[0], bc.x[1]),
                NVec2::new(bc.v[0], bc.v[1]),
                bc.radius,
            )
        })
        .collect()
}

/// Seeded uniform placement: positions at least `margin` away from every
/// wall, velocity components drawn from ±speed, radii from the given range.
fn random_balls(spawn: &SpawnConfig, bounds: &Bounds, seed: u64) -> Result<Vec<Ball>> {
    if spawn.count == 0 {
        return Err(Error::InvalidParam("spawn count must be > 0".into()));
    }
    if !spawn.radius_min.is_finite() || spawn.radius_min <= 0.0 || spawn.radius_max < spawn.radius_min
    {
        return Err(Error::InvalidParam(
            "spawn radii must satisfy 0 < radius_min <= radius_max".into(),
        ));
    }
    if !spawn.speed.is_finite() || spawn.speed < 0.0 {
        return Err(Error::InvalidParam("spawn speed must be >= 0".into()));
    }
    if !spawn.margin.is_finite() || spawn.margin < 0.0 {
        return Err(Error::InvalidParam("spawn margin must be >= 0".into()));
    }

    let lo_x = bounds.left + spawn.margin;
    let hi_x = bounds.right - spawn.margin;
    let lo_y = bounds.top + spawn.margin;
    let hi_y = bounds.bottom - spawn.margin;
    if lo_x >= hi_x || lo_y >= hi_y {
        return Err(Error::InvalidParam(
            "spawn margin leaves no interior to place balls in".into(),
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut balls = Vec::with_capacity(spawn.count);
    for _ in 0..spawn.count {
        let x = NVec2::new(rng.random_range(lo_x..hi_x), rng.random_range(lo_y..hi_y));
        let v = if spawn.speed > 0.0 {
            NVec2::new(
                rng.random_range(-spawn.speed..spawn.speed),
                rng.random_range(-spawn.speed..spawn.speed),
            )
        } else {
            NVec2::zeros()
        };
        let radius = rng.random_range(spawn.radius_min..=spawn.radius_max);
        balls.push(Ball::new(x, v, radius)?);
    }
    Ok(balls)
}
