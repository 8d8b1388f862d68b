//! The accumulator owning the output force field.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::field::{Dimensions, VectorField};
use crate::math::{Real, Vector};
use crate::mesh::{Mesh, PatchId};

use itertools::multizip;

/// Owns the output force field and merges the normal, tangential, and porous force
/// contributions into it.
///
/// The field stores the sum of the three contributions per location; the three are
/// additionally tracked as distinct running totals. Accumulation is elementwise
/// addition, so calls from different integrators may target disjoint or overlapping
/// locations in any order without affecting the final result.
pub(crate) struct ForceAccumulator {
    force: VectorField,
    normal: Vector<Real>,
    tangential: Vector<Real>,
    porous: Vector<Real>,
}

impl ForceAccumulator {
    /// Initializes an accumulator with an all-zero force field sized for the mesh.
    pub fn new(mesh: &Mesh) -> Self {
        Self {
            force: VectorField::zeros(mesh, Dimensions::FORCE),
            normal: Vector::zeros(),
            tangential: Vector::zeros(),
            porous: Vector::zeros(),
        }
    }

    /// Zeroes the three running totals and every value of the output field.
    pub fn reset(&mut self) {
        self.normal = Vector::zeros();
        self.tangential = Vector::zeros();
        self.porous = Vector::zeros();

        par_iter_mut!(self.force.internal).for_each(|f| *f = Vector::zeros());

        for patch in &mut self.force.boundary {
            par_iter_mut!(patch).for_each(|f| *f = Vector::zeros());
        }
    }

    /// Adds per-face contributions into the boundary view of one patch.
    pub fn add_patch_forces(
        &mut self,
        patch: PatchId,
        normal: &[Vector<Real>],
        tangential: &[Vector<Real>],
        porous: &[Vector<Real>],
    ) {
        let faces = &mut self.force.boundary[patch];
        debug_assert_eq!(faces.len(), normal.len());
        debug_assert_eq!(faces.len(), tangential.len());
        debug_assert_eq!(faces.len(), porous.len());

        for (face, n, t, p) in multizip((faces.iter_mut(), normal, tangential, porous)) {
            *face += n + t + p;
            self.normal += n;
            self.tangential += t;
            self.porous += p;
        }
    }

    /// Adds per-cell contributions into the internal view at the given cell indices.
    pub fn add_cell_forces(
        &mut self,
        cells: &[usize],
        normal: &[Vector<Real>],
        tangential: &[Vector<Real>],
        porous: &[Vector<Real>],
    ) {
        debug_assert_eq!(cells.len(), normal.len());
        debug_assert_eq!(cells.len(), tangential.len());
        debug_assert_eq!(cells.len(), porous.len());

        for (&cell, n, t, p) in multizip((cells, normal, tangential, porous)) {
            self.force.internal[cell] += n + t + p;
            self.normal += n;
            self.tangential += t;
            self.porous += p;
        }
    }

    /// The output force field.
    pub fn force(&self) -> &VectorField {
        &self.force
    }

    /// The accumulated normal force.
    pub fn normal_force(&self) -> Vector<Real> {
        self.normal
    }

    /// The accumulated tangential force.
    pub fn tangential_force(&self) -> Vector<Real> {
        self.tangential
    }

    /// The accumulated porous force.
    pub fn porous_force(&self) -> Vector<Real> {
        self.porous
    }
}

#[cfg(test)]
mod test {
    use super::ForceAccumulator;
    use crate::math::Vector;
    use crate::mesh::{Mesh, Patch};
    use approx::assert_relative_eq;

    fn mesh() -> Mesh {
        let patch = Patch::new("wall", vec![Vector::zeros(), Vector::zeros()]);
        Mesh {
            num_cells: 3,
            cell_centers: Vec::new(),
            patches: vec![patch],
            cell_zones: Vec::new(),
        }
    }

    fn filled(value: Vector<f64>, len: usize) -> Vec<Vector<f64>> {
        vec![value; len]
    }

    #[test]
    fn reset_zeroes_everything() {
        let mesh = mesh();
        let mut acc = ForceAccumulator::new(&mesh);

        let unit = Vector::from_fn(|_, _| 1.0);
        acc.add_patch_forces(0, &filled(unit, 2), &filled(unit, 2), &filled(unit, 2));
        acc.add_cell_forces(&[1], &filled(unit, 1), &filled(unit, 1), &filled(unit, 1));

        acc.reset();

        assert_relative_eq!(acc.normal_force(), Vector::zeros());
        assert_relative_eq!(acc.tangential_force(), Vector::zeros());
        assert_relative_eq!(acc.porous_force(), Vector::zeros());
        for f in &acc.force().internal {
            assert_relative_eq!(*f, Vector::zeros());
        }
        for f in acc.force().boundary_patch(0) {
            assert_relative_eq!(*f, Vector::zeros());
        }
    }

    #[test]
    fn accumulation_is_order_independent() {
        let mesh = mesh();
        let unit = Vector::from_fn(|_, _| 1.0);
        let twice = unit * 2.0;
        let zero = Vector::zeros();

        // Two disjoint cell sets accumulated separately...
        let mut separate = ForceAccumulator::new(&mesh);
        separate.add_cell_forces(&[0], &[unit], &[zero], &[zero]);
        separate.add_cell_forces(&[2], &[twice], &[zero], &[zero]);

        // ...equal both cell sets accumulated in one pass, in the other order.
        let mut joint = ForceAccumulator::new(&mesh);
        joint.add_cell_forces(&[2, 0], &[twice, unit], &[zero, zero], &[zero, zero]);

        for (a, b) in separate.force().internal.iter().zip(joint.force().internal.iter()) {
            assert_relative_eq!(*a, *b);
        }
        assert_relative_eq!(separate.normal_force(), joint.normal_force());
    }

    #[test]
    fn overlapping_locations_superpose() {
        let mesh = mesh();
        let unit = Vector::from_fn(|_, _| 1.0);
        let zero = Vector::zeros();

        let mut acc = ForceAccumulator::new(&mesh);
        acc.add_cell_forces(&[1], &[unit], &[zero], &[zero]);
        acc.add_cell_forces(&[1], &[zero], &[zero], &[unit]);

        assert_relative_eq!(acc.force().internal[1], unit * 2.0);
        assert_relative_eq!(acc.normal_force(), unit);
        assert_relative_eq!(acc.porous_force(), unit);
    }
}
