//! The external physical models the resolvers draw stress, viscosity, and porous
//! resistance from.

pub use self::porosity::PorosityModel;
pub use self::registry::{ModelRegistry, PorosityHandle};
pub use self::transport::{FluidThermo, TransportModel, TransportProperties};
pub use self::turbulence::{CompressibleTurbulenceModel, IncompressibleTurbulenceModel};

mod porosity;
mod registry;
mod transport;
mod turbulence;
