//! Fatal error conditions of the force computation.

use thiserror::Error;

/// The reasons a force computation cycle (or the engine construction) can fail.
///
/// Every variant is a fatal configuration or data error: the cycle that hit it left the
/// output force field in its reset state, so a caller never observes a partially
/// computed result. The one recoverable condition (porosity requested with no porosity
/// model registered) is logged as a warning instead of being reported here.
#[derive(Debug, Error)]
pub enum ForcesError {
    /// A required field was not found in the field registry.
    #[error("could not find field `{0}` in the registry")]
    MissingField(String),

    /// No stress provider could be resolved from the model registry.
    #[error("no valid model for viscous stress calculation")]
    NoStressModel,

    /// No viscosity provider could be resolved from the model registry.
    #[error("no valid model for dynamic viscosity calculation")]
    NoViscosityModel,

    /// The pressure field is kinematic but the density source is a spatially varying
    /// field, so no single reference-pressure scale exists.
    #[error("dynamic pressure is expected but kinematic is provided")]
    KinematicPressure,

    /// The configured uniform reference density is not a finite, positive value.
    #[error("the reference density must be finite and positive, got {0}")]
    InvalidReferenceDensity(crate::math::Real),

    /// The patch selection is empty.
    #[error("`patches` must name at least one boundary patch")]
    NoPatches,

    /// A patch name pattern did not match any boundary patch of the mesh.
    #[error("no boundary patch matches the pattern `{0}`")]
    UnmatchedPatchPattern(String),
}
