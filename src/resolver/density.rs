//! Density and reference-pressure-scale resolution.

use crate::config::{DensitySource, ForcesConfig};
use crate::error::ForcesError;
use crate::field::{Dimensions, FieldRegistry, ScalarField};
use crate::math::Real;
use crate::mesh::Mesh;

use std::ops::Deref;

/// A resolved density field: either borrowed from the registry or synthesized as a
/// uniform field at the configured reference value.
pub enum ResolvedDensity<'a> {
    /// The named density field of the registry.
    Borrowed(&'a ScalarField),
    /// A uniform field at the configured reference density.
    Uniform(ScalarField),
}

impl Deref for ResolvedDensity<'_> {
    type Target = ScalarField;

    fn deref(&self) -> &ScalarField {
        match self {
            ResolvedDensity::Borrowed(field) => field,
            ResolvedDensity::Uniform(field) => field,
        }
    }
}

/// Resolves the density field for the current cycle.
///
/// In uniform-reference mode this synthesizes a field equal to the reference density
/// everywhere; otherwise the named field is looked up, fatally if absent.
pub fn density<'a>(
    config: &ForcesConfig,
    mesh: &Mesh,
    fields: &'a FieldRegistry,
) -> Result<ResolvedDensity<'a>, ForcesError> {
    match &config.density {
        DensitySource::UniformReference(rho_ref) => Ok(ResolvedDensity::Uniform(
            ScalarField::uniform(mesh, Dimensions::DENSITY, *rho_ref),
        )),
        DensitySource::Field(name) => Ok(ResolvedDensity::Borrowed(fields.require_scalar(name)?)),
    }
}

/// Resolves the factor converting the pressure field to dynamic-pressure units.
///
/// A pressure field already carrying dynamic dimensions needs no scaling, whatever the
/// configured density source. A kinematic pressure field can only be scaled by a
/// uniform reference density: scaling a spatially varying density against a single
/// reference pressure is physically inconsistent and is rejected.
pub fn density_scale(config: &ForcesConfig, p: &ScalarField) -> Result<Real, ForcesError> {
    if p.dimensions == Dimensions::PRESSURE {
        return Ok(1.0);
    }

    match config.density {
        DensitySource::UniformReference(rho_ref) => Ok(rho_ref),
        DensitySource::Field(_) => Err(ForcesError::KinematicPressure),
    }
}

#[cfg(test)]
mod test {
    use super::{density, density_scale};
    use crate::config::{DensitySource, ForcesConfig};
    use crate::error::ForcesError;
    use crate::field::{Dimensions, FieldRegistry, ScalarField};
    use crate::mesh::Mesh;
    use approx::assert_relative_eq;

    fn empty_mesh() -> Mesh {
        Mesh::new(Vec::new(), Vec::new(), Vec::new())
    }

    #[test]
    fn dynamic_pressure_needs_no_scaling() {
        let mesh = empty_mesh();
        let p = ScalarField::uniform(&mesh, Dimensions::PRESSURE, 101325.0);

        let mut config = ForcesConfig::new(["hull"]);
        config.density = DensitySource::UniformReference(998.0);

        // The configured reference density must not leak into the scale factor.
        assert_relative_eq!(density_scale(&config, &p).unwrap(), 1.0);
    }

    #[test]
    fn kinematic_pressure_scales_by_the_reference_density() {
        let mesh = empty_mesh();
        let p = ScalarField::uniform(&mesh, Dimensions::KINEMATIC_PRESSURE, 5.0);

        let mut config = ForcesConfig::new(["hull"]);
        config.density = DensitySource::UniformReference(1.2);

        assert_relative_eq!(density_scale(&config, &p).unwrap(), 1.2);
    }

    #[test]
    fn kinematic_pressure_with_a_density_field_is_fatal() {
        let mesh = empty_mesh();
        let p = ScalarField::uniform(&mesh, Dimensions::KINEMATIC_PRESSURE, 5.0);
        let config = ForcesConfig::new(["hull"]);

        assert!(matches!(
            density_scale(&config, &p),
            Err(ForcesError::KinematicPressure)
        ));
    }

    #[test]
    fn uniform_reference_density_fills_the_mesh() {
        let mesh = Mesh {
            num_cells: 3,
            cell_centers: Vec::new(),
            patches: Vec::new(),
            cell_zones: Vec::new(),
        };
        let fields = FieldRegistry::new();

        let mut config = ForcesConfig::new(["hull"]);
        config.density = DensitySource::UniformReference(1.2);

        let rho = density(&config, &mesh, &fields).unwrap();
        assert_eq!(rho.dimensions, Dimensions::DENSITY);
        assert_eq!(rho.internal, vec![1.2, 1.2, 1.2]);
    }

    #[test]
    fn missing_density_field_is_fatal() {
        let mesh = empty_mesh();
        let fields = FieldRegistry::new();
        let config = ForcesConfig::new(["hull"]);

        assert!(matches!(
            density(&config, &mesh, &fields),
            Err(ForcesError::MissingField(name)) if name == "rho"
        ));
    }
}
