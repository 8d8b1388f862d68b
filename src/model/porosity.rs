//! Porosity model interface.

use crate::field::{ScalarField, VectorField};
use crate::math::{Real, Vector};
use crate::mesh::CellZoneId;

/// An external model producing a volumetric resistance force over specific cell
/// zones, representing sub-grid flow resistance (packed beds, screens, vegetation).
pub trait PorosityModel: Send + Sync {
    /// The volumetric resistance force over the whole mesh, one vector per cell.
    ///
    /// Cells outside the model's zones are expected to carry a zero force; the
    /// integrator only reads the entries belonging to [`cell_zone_ids`](Self::cell_zone_ids).
    fn force(
        &self,
        velocity: &VectorField,
        density: &ScalarField,
        viscosity: &ScalarField,
    ) -> Vec<Vector<Real>>;

    /// The ids of the cell zones this model applies to.
    fn cell_zone_ids(&self) -> &[CellZoneId];
}
