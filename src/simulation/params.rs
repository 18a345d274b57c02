//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size and end time,
//! - gravity and repulsion coefficients,
//! - random seed for scenario spawning

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end for headless runs
    pub h0: f64, // fixed step size
    pub gravity: f64, // downward acceleration
    pub repulsion: f64, // push-apart force coefficient
    pub seed: u64, // deterministic seed
}
