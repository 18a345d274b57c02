pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Ball, System, Bounds, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{Repulsion, DIST_EPS};
pub use simulation::integrator::integrate;
pub use simulation::walls::reflect;
pub use simulation::engine::{step, run_to_end};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, BoundsConfig, BallConfig, SpawnConfig, ScenarioConfig};

pub use error::{Error, Result};

pub use visualization::ballsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_repulsion, bench_step};
