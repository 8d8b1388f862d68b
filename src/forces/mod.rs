//! The force integration engine.

use crate::config::{DensitySource, ForcesConfig};
use crate::error::ForcesError;
use crate::field::{FieldRegistry, VectorField};
use crate::forces::accumulator::ForceAccumulator;
use crate::math::{Real, Vector};
use crate::mesh::{Mesh, PatchId};
use crate::model::ModelRegistry;

use log::info;

mod accumulator;
mod boundary;
mod porous;

/// The engine computing the force a flowing continuum exerts on a set of boundary
/// patches and inside porous cell zones.
///
/// The engine owns the output force field. One call to [`compute`](Self::compute)
/// runs one synchronous computation cycle: the field is reset, every selected patch
/// contributes its per-face forces exactly once, and every registered porosity model
/// contributes its per-cell forces. Between cycles the field holds exactly the last
/// completed cycle's forces; a failed cycle leaves it reset.
pub struct Forces {
    config: ForcesConfig,
    patches: Vec<PatchId>,
    accumulator: ForceAccumulator,
}

impl Forces {
    /// Initializes a force engine for the given mesh.
    ///
    /// The configuration is validated and its patch name patterns are resolved
    /// against the mesh's boundary definition once, here; the output force field is
    /// created with zero values.
    pub fn new(mesh: &Mesh, config: ForcesConfig) -> Result<Self, ForcesError> {
        config.validate()?;
        let patches = mesh.patch_set(&config.patches)?;

        if config.porosity {
            info!(
                "force integration over {} patches, including porosity effects",
                patches.len()
            );
        } else {
            info!(
                "force integration over {} patches, not including porosity effects",
                patches.len()
            );
        }

        Ok(Self {
            accumulator: ForceAccumulator::new(mesh),
            config,
            patches,
        })
    }

    /// Runs one computation cycle against the current state of the borrowed mesh,
    /// fields, and models.
    ///
    /// All resolution happens from scratch: a model or field swapped in the shared
    /// registries since the previous cycle takes effect here. On error the output
    /// field is left reset, never partially accumulated.
    pub fn compute(
        &mut self,
        mesh: &Mesh,
        fields: &FieldRegistry,
        models: &ModelRegistry,
    ) -> Result<(), ForcesError> {
        let result = self.compute_cycle(mesh, fields, models);
        if result.is_err() {
            self.accumulator.reset();
        }
        result
    }

    fn compute_cycle(
        &mut self,
        mesh: &Mesh,
        fields: &FieldRegistry,
        models: &ModelRegistry,
    ) -> Result<(), ForcesError> {
        self.check_required_fields(fields)?;
        self.accumulator.reset();

        if self.config.direct_force_density {
            boundary::integrate_direct(
                &self.config,
                mesh,
                fields,
                &self.patches,
                &mut self.accumulator,
            )?;
        } else {
            boundary::integrate_pressure(
                &self.config,
                mesh,
                fields,
                models,
                &self.patches,
                &mut self.accumulator,
            )?;
        }

        if self.config.porosity {
            porous::integrate_porous(&self.config, mesh, fields, models, &mut self.accumulator)?;
        }

        Ok(())
    }

    /// Checks that the active mode's source fields are present, fatally otherwise.
    ///
    /// Re-run every cycle: the field registry is shared and may change between cycles.
    fn check_required_fields(&self, fields: &FieldRegistry) -> Result<(), ForcesError> {
        if self.config.direct_force_density {
            let _ = fields.require_vector(&self.config.force_density_name)?;
        } else {
            let _ = fields.require_vector(&self.config.velocity_name)?;
            let _ = fields.require_scalar(&self.config.pressure_name)?;

            if let DensitySource::Field(name) = &self.config.density {
                let _ = fields.require_scalar(name)?;
            }
        }

        Ok(())
    }

    /// The configuration of this engine.
    pub fn config(&self) -> &ForcesConfig {
        &self.config
    }

    /// The resolved ids of the selected patches.
    pub fn patches(&self) -> &[PatchId] {
        &self.patches
    }

    /// The output force field, holding the last completed cycle's forces.
    pub fn force(&self) -> &VectorField {
        self.accumulator.force()
    }

    /// The normal (pressure-driven) force accumulated over the last cycle.
    pub fn normal_force(&self) -> Vector<Real> {
        self.accumulator.normal_force()
    }

    /// The tangential (viscous) force accumulated over the last cycle.
    pub fn tangential_force(&self) -> Vector<Real> {
        self.accumulator.tangential_force()
    }

    /// The porous resistance force accumulated over the last cycle.
    pub fn porous_force(&self) -> Vector<Real> {
        self.accumulator.porous_force()
    }

    /// The net force accumulated over the last cycle.
    pub fn total_force(&self) -> Vector<Real> {
        self.normal_force() + self.tangential_force() + self.porous_force()
    }
}

#[cfg(test)]
mod test {
    use super::Forces;
    use crate::config::{DensitySource, ForcesConfig};
    use crate::field::{Dimensions, FieldRegistry, ScalarField, TensorField, VectorField};
    use crate::math::{Matrix, Real, Vector};
    use crate::mesh::{CellZone, CellZoneId, Mesh, Patch};
    use crate::model::{CompressibleTurbulenceModel, ModelRegistry, PorosityModel};
    use approx::assert_relative_eq;

    struct ZeroStress;

    impl CompressibleTurbulenceModel for ZeroStress {
        fn dev_rho_reff(&self, mesh: &Mesh, _: &FieldRegistry) -> TensorField {
            TensorField::uniform(mesh, Dimensions::PRESSURE, Matrix::zeros())
        }
    }

    struct ZoneResistance {
        zones: Vec<CellZoneId>,
        forces: Vec<Vector<Real>>,
    }

    impl PorosityModel for ZoneResistance {
        fn force(
            &self,
            _: &VectorField,
            _: &ScalarField,
            _: &ScalarField,
        ) -> Vec<Vector<Real>> {
            self.forces.clone()
        }

        fn cell_zone_ids(&self) -> &[CellZoneId] {
            &self.zones
        }
    }

    fn single_patch_mesh(face_area: Vector<Real>) -> Mesh {
        Mesh {
            num_cells: 3,
            cell_centers: Vec::new(),
            patches: vec![Patch::new("hull", vec![face_area])],
            cell_zones: vec![CellZone::new("bed", vec![0, 2])],
        }
    }

    fn pressure_mode_inputs(mesh: &Mesh, p: Real) -> (FieldRegistry, ModelRegistry) {
        let mut fields = FieldRegistry::new();
        fields.insert_scalar("p", ScalarField::uniform(mesh, Dimensions::KINEMATIC_PRESSURE, p));
        fields.insert_vector("U", VectorField::zeros(mesh, Dimensions::VELOCITY));

        let mut models = ModelRegistry::new();
        models.compressible_turbulence = Some(Box::new(ZeroStress));

        (fields, models)
    }

    fn kinematic_config(rho_ref: Real) -> ForcesConfig {
        let mut config = ForcesConfig::new(["hull"]);
        config.density = DensitySource::UniformReference(rho_ref);
        config
    }

    #[test]
    #[cfg(feature = "dim3")]
    fn flat_patch_pressure_force() {
        let mesh = single_patch_mesh(Vector::new(0.0, 2.0, 0.0));
        let (fields, models) = pressure_mode_inputs(&mesh, 5.0);

        let mut forces = Forces::new(&mesh, kinematic_config(1.2)).unwrap();
        forces.compute(&mesh, &fields, &models).unwrap();

        let expected = Vector::new(0.0, 1.2 * 2.0 * 5.0, 0.0);
        assert_relative_eq!(forces.normal_force(), expected);
        assert_relative_eq!(forces.tangential_force(), Vector::zeros());
        assert_relative_eq!(forces.force().boundary_patch(0)[0], expected);
    }

    #[test]
    #[cfg(feature = "dim3")]
    fn direct_mode_decomposes_the_force_density() {
        let mesh = single_patch_mesh(Vector::new(3.0, 0.0, 0.0));

        let mut fields = FieldRegistry::new();
        fields.insert_vector(
            "fD",
            VectorField::uniform(&mesh, Dimensions::FORCE_DENSITY, Vector::new(2.0, 1.0, 0.0)),
        );

        // No models and no pressure/velocity fields at all: direct mode must not
        // invoke the stress or density resolvers.
        let models = ModelRegistry::new();

        let mut config = ForcesConfig::new(["hull"]);
        config.direct_force_density = true;

        let mut forces = Forces::new(&mesh, config).unwrap();
        forces.compute(&mesh, &fields, &models).unwrap();

        assert_relative_eq!(forces.normal_force(), Vector::new(6.0, 0.0, 0.0));
        assert_relative_eq!(forces.tangential_force(), Vector::new(0.0, 3.0, 0.0));

        // The tangential component is orthogonal to the face normal.
        let normal = Vector::new(1.0, 0.0, 0.0);
        assert_relative_eq!(forces.tangential_force().dot(&normal), 0.0, epsilon = 1.0e-12);

        assert_relative_eq!(
            forces.force().boundary_patch(0)[0],
            Vector::new(6.0, 3.0, 0.0)
        );
    }

    #[test]
    #[cfg(feature = "dim2")]
    fn direct_mode_decomposes_the_force_density() {
        let mesh = single_patch_mesh(Vector::new(0.0, 2.0));

        let mut fields = FieldRegistry::new();
        fields.insert_vector(
            "fD",
            VectorField::uniform(&mesh, Dimensions::FORCE_DENSITY, Vector::new(1.0, 1.0)),
        );
        let models = ModelRegistry::new();

        let mut config = ForcesConfig::new(["hull"]);
        config.direct_force_density = true;

        let mut forces = Forces::new(&mesh, config).unwrap();
        forces.compute(&mesh, &fields, &models).unwrap();

        assert_relative_eq!(forces.normal_force(), Vector::new(0.0, 2.0));
        assert_relative_eq!(forces.tangential_force(), Vector::new(2.0, 0.0));
    }

    #[test]
    fn pressure_mode_does_not_read_the_force_density_field() {
        let mesh = single_patch_mesh(Vector::from_fn(|i, _| if i == 0 { 1.0 } else { 0.0 }));
        let (fields, models) = pressure_mode_inputs(&mesh, 1.0);

        // No "fD" field registered anywhere.
        let mut forces = Forces::new(&mesh, kinematic_config(1.0)).unwrap();
        assert_eq!(forces.patches(), &[0]);
        assert!(!forces.config().direct_force_density);
        assert!(forces.compute(&mesh, &fields, &models).is_ok());
    }

    #[test]
    fn porosity_without_models_warns_and_contributes_nothing() {
        let mesh = single_patch_mesh(Vector::from_fn(|i, _| if i == 0 { 2.0 } else { 0.0 }));
        let (fields, mut models) = pressure_mode_inputs(&mesh, 5.0);

        let mut config = kinematic_config(1.2);
        config.porosity = true;

        // The viscosity resolver still runs in the porous pass; give it a constant.
        models.transport_properties = Some(crate::model::TransportProperties::new(1.0e-6));

        let mut forces = Forces::new(&mesh, config).unwrap();
        forces.compute(&mesh, &fields, &models).unwrap();

        assert_relative_eq!(forces.porous_force(), Vector::zeros());
        for f in &forces.force().internal {
            assert_relative_eq!(*f, Vector::zeros());
        }
        // The boundary contribution is whatever the pressure integration produced.
        assert_relative_eq!(forces.normal_force(), forces.total_force());
    }

    #[test]
    fn porous_zone_forces_land_on_the_zone_cells_only() {
        let mesh = single_patch_mesh(Vector::from_fn(|i, _| if i == 0 { 1.0 } else { 0.0 }));
        let (fields, mut models) = pressure_mode_inputs(&mesh, 0.0);
        models.transport_properties = Some(crate::model::TransportProperties::new(1.0e-6));

        let f0 = Vector::from_fn(|i, _| if i == 0 { 1.0 } else { 0.0 });
        let f2 = Vector::from_fn(|i, _| if i == 1 { 2.0 } else { 0.0 });

        // Whole-mesh force field; the entry of cell 1 (outside the zone) is garbage
        // the integrator must ignore.
        let poison = Vector::from_fn(|_, _| 9.0);
        let _ = models.add_porosity_model(ZoneResistance {
            zones: vec![0],
            forces: vec![f0, poison, f2],
        });

        let mut config = kinematic_config(1.2);
        config.porosity = true;

        let mut forces = Forces::new(&mesh, config).unwrap();
        forces.compute(&mesh, &fields, &models).unwrap();

        assert_relative_eq!(forces.force().internal[0], f0);
        assert_relative_eq!(forces.force().internal[1], Vector::zeros());
        assert_relative_eq!(forces.force().internal[2], f2);
        assert_relative_eq!(forces.porous_force(), f0 + f2);
    }

    #[test]
    fn recomputation_reflects_only_the_last_cycle() {
        let mesh = single_patch_mesh(Vector::from_fn(|i, _| if i == 1 { 2.0 } else { 0.0 }));
        let (fields, models) = pressure_mode_inputs(&mesh, 5.0);

        let mut forces = Forces::new(&mesh, kinematic_config(1.2)).unwrap();
        forces.compute(&mesh, &fields, &models).unwrap();
        let first = forces.force().boundary_patch(0)[0];

        // A second cycle over identical inputs must not double-count.
        forces.compute(&mesh, &fields, &models).unwrap();
        assert_relative_eq!(forces.force().boundary_patch(0)[0], first);
    }

    #[test]
    fn failed_cycle_leaves_the_field_reset() {
        let mesh = single_patch_mesh(Vector::from_fn(|i, _| if i == 1 { 2.0 } else { 0.0 }));
        let (fields, models) = pressure_mode_inputs(&mesh, 5.0);

        let mut forces = Forces::new(&mesh, kinematic_config(1.2)).unwrap();
        forces.compute(&mesh, &fields, &models).unwrap();
        assert!(forces.normal_force().norm() > 0.0);

        // Drop the pressure field from the registry: the next cycle must fail and
        // must not leave the previous cycle's forces behind.
        let empty = FieldRegistry::new();
        assert!(forces.compute(&mesh, &empty, &models).is_err());
        assert_relative_eq!(forces.normal_force(), Vector::zeros());
        for f in forces.force().boundary_patch(0) {
            assert_relative_eq!(*f, Vector::zeros());
        }
    }

    #[test]
    fn unknown_patch_pattern_fails_construction() {
        let mesh = single_patch_mesh(Vector::zeros());
        let config = ForcesConfig::new(["keel"]);
        assert!(Forces::new(&mesh, config).is_err());
    }
}
