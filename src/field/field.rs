//! Scalar, vector, and tensor fields with an internal and a boundary view.

use crate::field::Dimensions;
use crate::math::{Matrix, Real, Vector};
use crate::mesh::{Mesh, PatchId};

use num::Zero;

/// A field of per-cell values with an additional per-patch boundary view.
///
/// `internal[i]` is the value at cell `i`; `boundary[patch][face]` is the value at the
/// given boundary face of the given patch. Both views are sized from the mesh the
/// field was created for.
pub struct Field<T> {
    /// The physical dimensions of the stored values.
    pub dimensions: Dimensions,
    /// The per-cell values.
    pub internal: Vec<T>,
    /// The per-patch, per-face boundary values.
    pub boundary: Vec<Vec<T>>,
}

/// A scalar field over the mesh.
pub type ScalarField = Field<Real>;
/// A vector field over the mesh.
pub type VectorField = Field<Vector<Real>>;
/// A tensor field over the mesh.
pub type TensorField = Field<Matrix<Real>>;

impl<T: Zero + Clone> Field<T> {
    /// Initializes a field of zeros sized for the given mesh.
    pub fn zeros(mesh: &Mesh, dimensions: Dimensions) -> Self {
        Self::uniform(mesh, dimensions, T::zero())
    }
}

impl<T: Clone> Field<T> {
    /// Initializes a field uniformly equal to `value`, sized for the given mesh.
    pub fn uniform(mesh: &Mesh, dimensions: Dimensions, value: T) -> Self {
        Self {
            dimensions,
            internal: vec![value.clone(); mesh.num_cells],
            boundary: mesh
                .patches
                .iter()
                .map(|patch| vec![value.clone(); patch.num_faces()])
                .collect(),
        }
    }
}

impl<T> Field<T> {
    /// The boundary values of this field on the given patch.
    pub fn boundary_patch(&self, patch: PatchId) -> &[T] {
        &self.boundary[patch]
    }

    /// Applies `f` to every internal and boundary value, producing a new field with
    /// the given dimensions.
    pub fn map<U>(&self, dimensions: Dimensions, f: impl Fn(&T) -> U) -> Field<U> {
        Field {
            dimensions,
            internal: self.internal.iter().map(&f).collect(),
            boundary: self
                .boundary
                .iter()
                .map(|patch| patch.iter().map(&f).collect())
                .collect(),
        }
    }

    /// Combines this field with `other` value-by-value, producing a new field with the
    /// given dimensions.
    ///
    /// Both fields must have been created for the same mesh.
    pub fn zip_map<U, V>(
        &self,
        other: &Field<U>,
        dimensions: Dimensions,
        f: impl Fn(&T, &U) -> V,
    ) -> Field<V> {
        debug_assert_eq!(self.internal.len(), other.internal.len());
        debug_assert_eq!(self.boundary.len(), other.boundary.len());

        Field {
            dimensions,
            internal: self
                .internal
                .iter()
                .zip(other.internal.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
            boundary: self
                .boundary
                .iter()
                .zip(other.boundary.iter())
                .map(|(pa, pb)| pa.iter().zip(pb.iter()).map(|(a, b)| f(a, b)).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Field, ScalarField};
    use crate::field::Dimensions;
    use crate::math::Vector;
    use crate::mesh::{Mesh, Patch};
    use approx::assert_relative_eq;

    fn two_cell_mesh() -> Mesh {
        let patch = Patch::new("wall", vec![Vector::zeros(), Vector::zeros()]);
        Mesh {
            num_cells: 2,
            cell_centers: Vec::new(),
            patches: vec![patch],
            cell_zones: Vec::new(),
        }
    }

    #[test]
    fn uniform_field_is_sized_from_the_mesh() {
        let mesh = two_cell_mesh();
        let f = ScalarField::uniform(&mesh, Dimensions::DENSITY, 1.2);
        assert_eq!(f.internal, vec![1.2, 1.2]);
        assert_eq!(f.boundary_patch(0), &[1.2, 1.2][..]);
    }

    #[test]
    fn zip_map_combines_both_views() {
        let mesh = two_cell_mesh();
        let rho = ScalarField::uniform(&mesh, Dimensions::DENSITY, 2.0);
        let nu: Field<f64> = ScalarField::uniform(&mesh, Dimensions::KINEMATIC_VISCOSITY, 0.5);

        let mu = rho.zip_map(&nu, rho.dimensions * nu.dimensions, |r, n| r * n);
        assert_eq!(mu.dimensions, Dimensions::DYNAMIC_VISCOSITY);
        assert_relative_eq!(mu.internal[0], 1.0);
        assert_relative_eq!(mu.boundary_patch(0)[1], 1.0);
    }
}
