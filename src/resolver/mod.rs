//! On-demand resolution of the stress tensor, the dynamic viscosity, and the density
//! from whatever physical models and fields are currently available.
//!
//! Resolution happens from scratch on every computation cycle: the active model set
//! can change between cycles, so nothing here is cached.

pub use self::density::{density, density_scale, ResolvedDensity};
pub use self::stress::{
    dev_rho_reff, dynamic_viscosity, stress_source, velocity_gradient_name, viscosity_source,
    StressSource, ViscositySource,
};

mod density;
mod stress;
