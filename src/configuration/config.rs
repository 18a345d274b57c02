//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BoundsConfig`]     – the arena rectangle
//! - [`BallConfig`]       – initial state for each ball (explicit listing)
//! - [`SpawnConfig`]      – seeded random placement (alternative to a list)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   t_end: 60.0             # total simulated time for headless runs
//!   h0: 0.016               # fixed step size (~60 ticks per second)
//!   gravity: 980.0          # downward acceleration
//!   repulsion: 10000.0      # push-apart force coefficient
//!   seed: 42                # deterministic seed for random spawns
//!
//! bounds:
//!   left: 0.0
//!   top: 0.0
//!   right: 800.0
//!   bottom: 600.0
//!
//! # Either list every ball ...
//! balls:
//!   - x: [ 200.0, 150.0 ]
//!     v: [ 80.0, -40.0 ]
//!     radius: 20.0
//!   - x: [ 500.0, 400.0 ]
//!     v: [ -60.0, 30.0 ]
//!     radius: 35.0
//!
//! # ... or ask for a seeded random layout instead:
//! # spawn:
//! #   count: 10
//! #   margin: 50.0
//! #   speed: 100.0
//! #   radius_min: 10.0
//! #   radius_max: 50.0
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,     // total simulated time for headless runs
    pub h0: f64,        // fixed time step size
    pub gravity: f64,   // downward acceleration
    pub repulsion: f64, // push-apart force coefficient
    pub seed: u64,      // deterministic seed to make spawns reproducable
}

/// The arena rectangle balls are reflected within
#[derive(Deserialize, Debug, Clone)]
pub struct BoundsConfig {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Configuration for a single ball's initial state
#[derive(Deserialize, Debug)]
pub struct BallConfig {
    pub x: [f64; 2], // Initial position in simulation units
    pub v: [f64; 2], // Initial velocity in simulation units per time unit
    pub radius: f64, // Disk radius, used for collisions and drawing
}

/// Seeded random placement of `count` balls inside the arena
#[derive(Deserialize, Debug, Clone)]
pub struct SpawnConfig {
    pub count: usize,    // number of balls to place
    pub margin: f64,     // wall clearance for initial positions
    pub speed: f64,      // velocity components drawn from ±speed
    pub radius_min: f64, // smallest radius
    pub radius_max: f64, // largest radius
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bounds: BoundsConfig,         // Arena rectangle
    #[serde(default)]
    pub balls: Option<Vec<BallConfig>>, // Explicit initial state, wins over `spawn`
    #[serde(default)]
    pub spawn: Option<SpawnConfig>, // Seeded random layout
}
