//! Spacecraft kinematics over a single elapsed interval.
//!
//! The workspace crates are re-exported here so front-ends depend on one library:
//! unit conversions, the calculator itself, parameter manifests, and report writers.

pub use kinematics_calculator as kinematics;
pub use kinematics_config as config;
pub use kinematics_core as units;
pub use kinematics_export as export;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
