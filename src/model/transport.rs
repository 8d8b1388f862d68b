//! Thermophysical and laminar transport model interfaces.

use crate::field::{FieldRegistry, ScalarField};
use crate::math::Real;
use crate::mesh::Mesh;

/// A thermophysical model exposing a temperature-dependent dynamic viscosity.
pub trait FluidThermo: Send + Sync {
    /// The dynamic viscosity field.
    fn mu(&self, mesh: &Mesh, fields: &FieldRegistry) -> ScalarField;
}

/// A laminar transport model exposing a kinematic viscosity.
pub trait TransportModel: Send + Sync {
    /// The kinematic viscosity field.
    fn nu(&self, mesh: &Mesh, fields: &FieldRegistry) -> ScalarField;
}

/// Constant transport properties, the last-resort viscosity source.
///
/// This stands in for a raw configuration dictionary holding a constant kinematic
/// viscosity, for simulations that carry no transport model object at all.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransportProperties {
    /// The constant kinematic viscosity.
    pub nu: Real,
}

impl TransportProperties {
    /// Initializes constant transport properties from a kinematic viscosity.
    pub fn new(nu: Real) -> Self {
        Self { nu }
    }
}
