//! Turbulence-closure model interfaces.

use crate::field::{FieldRegistry, TensorField};
use crate::mesh::Mesh;

/// A turbulence closure formulated for compressible flow.
pub trait CompressibleTurbulenceModel: Send + Sync {
    /// The deviatoric effective stress in dynamic units, density-weighted, with
    /// turbulent and molecular contributions already combined.
    ///
    /// The returned tensors must be symmetric.
    fn dev_rho_reff(&self, mesh: &Mesh, fields: &FieldRegistry) -> TensorField;
}

/// A turbulence closure formulated for incompressible flow.
pub trait IncompressibleTurbulenceModel: Send + Sync {
    /// The deviatoric effective stress in kinematic units.
    ///
    /// The force resolver scales this by whatever density source is configured;
    /// whether that density matches the closure's own internal density assumption is
    /// an integration contract of the host solver, not checked here.
    ///
    /// The returned tensors must be symmetric.
    fn dev_reff(&self, mesh: &Mesh, fields: &FieldRegistry) -> TensorField;
}
