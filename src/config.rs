//! Typed configuration of the force integration engine.

use crate::error::ForcesError;
use crate::math::Real;

/// Where the density field comes from in pressure/velocity mode.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DensitySource {
    /// Resolve the density from the named field of the registry.
    Field(String),
    /// The simulation carries no density field; use this uniform reference value.
    ///
    /// This is the mode required to integrate forces from a kinematic pressure field.
    UniformReference(Real),
}

/// Configuration of a [`Forces`](crate::Forces) engine.
///
/// Immutable after construction: the engine validates it once and resolves the patch
/// selection once, so an invalid combination fails fast instead of at first use.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForcesConfig {
    /// Name patterns selecting the boundary patches to integrate over.
    ///
    /// Patterns are literal patch names, optionally containing `*` wildcards.
    pub patches: Vec<String>,
    /// Integrate a precomputed force-density field instead of pressure and stress.
    pub direct_force_density: bool,
    /// Name of the force-density field (used only in direct force-density mode).
    pub force_density_name: String,
    /// Name of the pressure field (used only in pressure/velocity mode).
    pub pressure_name: String,
    /// Name of the velocity field (used only in pressure/velocity mode).
    pub velocity_name: String,
    /// The density source (used only in pressure/velocity mode).
    pub density: DensitySource,
    /// Reference pressure subtracted from the pressure field.
    pub p_ref: Real,
    /// Include volumetric contributions from registered porosity models.
    pub porosity: bool,
}

impl ForcesConfig {
    /// Initializes a configuration selecting the given boundary patches, with every
    /// other option at its default.
    ///
    /// Defaults: pressure/velocity mode with fields `"p"`/`"U"`, density from the
    /// field `"rho"`, zero reference pressure, porosity contributions disabled, and
    /// `"fD"` as the force-density name should direct mode be enabled.
    pub fn new(patches: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            patches: patches.into_iter().map(|p| p.into()).collect(),
            direct_force_density: false,
            force_density_name: "fD".to_string(),
            pressure_name: "p".to_string(),
            velocity_name: "U".to_string(),
            density: DensitySource::Field("rho".to_string()),
            p_ref: 0.0,
            porosity: false,
        }
    }

    /// Checks that this configuration is internally consistent.
    ///
    /// This is run by [`Forces::new`](crate::Forces::new); an empty patch selection or
    /// a degenerate uniform reference density is rejected here rather than at the
    /// first computation cycle.
    pub fn validate(&self) -> Result<(), ForcesError> {
        if self.patches.is_empty() {
            return Err(ForcesError::NoPatches);
        }

        if let DensitySource::UniformReference(rho_ref) = self.density {
            if !rho_ref.is_finite() || rho_ref <= 0.0 {
                return Err(ForcesError::InvalidReferenceDensity(rho_ref));
            }
        }

        Ok(())
    }
}
