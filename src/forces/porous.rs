//! Per-cell force integration over porous cell zones.

use crate::config::ForcesConfig;
use crate::error::ForcesError;
use crate::field::FieldRegistry;
use crate::forces::accumulator::ForceAccumulator;
use crate::math::Vector;
use crate::mesh::Mesh;
use crate::model::ModelRegistry;
use crate::resolver;

use log::warn;

/// Integrates the volumetric resistance forces of every registered porosity model.
///
/// Each model reports a whole-mesh force field; only the entries belonging to the
/// model's own cell zones are accumulated, as a pure porous component with zero
/// normal and tangential parts. Zero registered models is a recoverable condition:
/// a warning is emitted and nothing is contributed.
pub(crate) fn integrate_porous(
    config: &ForcesConfig,
    mesh: &Mesh,
    fields: &FieldRegistry,
    models: &ModelRegistry,
    accumulator: &mut ForceAccumulator,
) -> Result<(), ForcesError> {
    let velocity = fields.require_vector(&config.velocity_name)?;
    let density = resolver::density(config, mesh, fields)?;
    let viscosity = resolver::dynamic_viscosity(config, mesh, fields, models)?;

    if models.num_porosity_models() == 0 {
        warn!("porosity effects requested, but no porosity models are registered");
        return Ok(());
    }

    for (_, model) in models.porosity_models() {
        let total = model.force(velocity, &density, &viscosity);
        debug_assert_eq!(total.len(), mesh.num_cells);

        for &zone_id in model.cell_zone_ids() {
            let zone = &mesh.cell_zones[zone_id];

            let porous: Vec<_> = zone.cells.iter().map(|&cell| total[cell]).collect();
            let zeros = vec![Vector::zeros(); porous.len()];

            accumulator.add_cell_forces(&zone.cells, &zeros, &zeros, &porous);
        }
    }

    Ok(())
}
