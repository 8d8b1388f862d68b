//! Per-face force integration over the selected boundary patches.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::ForcesConfig;
use crate::error::ForcesError;
use crate::field::FieldRegistry;
use crate::forces::accumulator::ForceAccumulator;
use crate::math::{Real, Vector};
use crate::mesh::{Mesh, PatchId};
use crate::model::ModelRegistry;
use crate::resolver;

/// Integrates a precomputed force-density field over the selected patches.
///
/// Each face's force density is decomposed into the component aligned with the face
/// normal and the orthogonal remainder, both scaled by the face area. No stress or
/// density resolution happens in this mode, and there is no porous face component.
pub(crate) fn integrate_direct(
    config: &ForcesConfig,
    mesh: &Mesh,
    fields: &FieldRegistry,
    patches: &[PatchId],
    accumulator: &mut ForceAccumulator,
) -> Result<(), ForcesError> {
    let fd = fields.require_vector(&config.force_density_name)?;

    for &patch in patches {
        let sf = &mesh.patches[patch].face_areas;
        let fd_b = fd.boundary_patch(patch);

        let (normal, tangential): (Vec<_>, Vec<_>) = par_iter!(sf)
            .zip(par_iter!(fd_b))
            .map(|(sf, fd): (&Vector<Real>, &Vector<Real>)| {
                let area = sf.norm();
                debug_assert!(area > 0.0, "degenerate boundary face");

                let normal = sf / area * sf.dot(fd);
                let tangential = fd * area - normal;
                (normal, tangential)
            })
            .unzip();

        let porous = vec![Vector::zeros(); normal.len()];
        accumulator.add_patch_forces(patch, &normal, &tangential, &porous);
    }

    Ok(())
}

/// Integrates pressure-driven normal forces and stress-driven tangential forces over
/// the selected patches.
///
/// The reference pressure is scaled once per cycle from the pressure field's
/// dimensional kind, not per face; the stress tensor comes from the stress provider
/// resolver.
pub(crate) fn integrate_pressure(
    config: &ForcesConfig,
    mesh: &Mesh,
    fields: &FieldRegistry,
    models: &ModelRegistry,
    patches: &[PatchId],
    accumulator: &mut ForceAccumulator,
) -> Result<(), ForcesError> {
    let p = fields.require_scalar(&config.pressure_name)?;
    let stress = resolver::dev_rho_reff(config, mesh, fields, models)?;

    let scale = resolver::density_scale(config, p)?;
    let p_ref = config.p_ref / scale;

    for &patch in patches {
        let sf = &mesh.patches[patch].face_areas;
        let p_b = p.boundary_patch(patch);
        let stress_b = stress.boundary_patch(patch);

        let normal: Vec<_> = par_iter!(sf)
            .zip(par_iter!(p_b))
            .map(|(sf, p)| sf * (scale * (p - p_ref)))
            .collect();

        let tangential: Vec<_> = par_iter!(sf)
            .zip(par_iter!(stress_b))
            .map(|(sf, stress)| stress * sf)
            .collect();

        let porous = vec![Vector::zeros(); normal.len()];
        accumulator.add_patch_forces(patch, &normal, &tangential, &porous);
    }

    Ok(())
}
