/*!
**Carena** is a 2 and 3-dimensional fluid force integration engine for finite-volume
simulations. It uses [nalgebra](https://nalgebra.org) for vector/matrix math and computes
the net force (pressure, viscous, and porous-resistance contributions) that a flowing
continuum exerts on selected boundary patches and inside porous cell zones.
2D and 3D implementations both share (mostly) the same code!

The engine borrows the mesh, the field registry, and the physical models from the host
solver for the duration of one computation cycle, and owns the resulting force field.

## Why the name Carena?

`Carena` is the Italian word for a ship's hull: the wetted surface where a flowing
fluid deposits its pressure and shear forces.

## Features
- **Pressure/velocity mode:** per-face normal forces from the pressure field and
  tangential forces from a deviatoric stress tensor.
- **Direct force-density mode:** normal/tangential decomposition of a precomputed
  force-per-volume field.
- **Stress provider fallback:** compressible closure, incompressible closure,
  thermophysical transport, laminar transport, or a constant viscosity, probed in
  fixed priority order every cycle.
- **Porous zone contributions** from any number of registered porosity models.
- Optional **parallel** per-face integration through **rayon**.
*/
#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_qualifications)]
#![warn(missing_docs)]
#![deny(unused_results)]
#![allow(type_alias_bounds)]
#![warn(non_camel_case_types)]
#![allow(missing_copy_implementations)]

extern crate nalgebra as na;
extern crate num_traits as num;

macro_rules! par_iter {
    ($t: expr) => {{
        #[cfg(not(feature = "parallel"))]
        let it = $t.iter();

        #[cfg(feature = "parallel")]
        let it = $t.par_iter();
        it
    }};
}

macro_rules! par_iter_mut {
    ($t: expr) => {{
        #[cfg(not(feature = "parallel"))]
        let it = $t.iter_mut();

        #[cfg(feature = "parallel")]
        let it = $t.par_iter_mut();
        it
    }};
}

pub mod config;
pub mod error;
pub mod field;
pub mod forces;
pub mod helper;
pub mod mesh;
pub mod model;
pub mod resolver;

pub use crate::config::{DensitySource, ForcesConfig};
pub use crate::error::ForcesError;
pub use crate::forces::Forces;

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    use na::{Matrix3, Point3, Vector3};

    /// The dimension of the ambient space.
    pub const DIM: usize = 3;

    /// The scalar type.
    pub type Real = f64;

    /// The point type.
    pub type Point<Real> = Point3<Real>;

    /// The vector type.
    pub type Vector<Real> = Vector3<Real>;

    /// Square matrix with dimension `Dim × Dim`.
    pub type Matrix<Real> = Matrix3<Real>;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim2")]
pub mod math {
    use na::{Matrix2, Point2, Vector2};

    /// The dimension of the ambient space.
    pub const DIM: usize = 2;

    /// The scalar type.
    pub type Real = f64;

    /// The point type.
    pub type Point<Real> = Point2<Real>;

    /// The vector type.
    pub type Vector<Real> = Vector2<Real>;

    /// Square matrix with dimension `Dim × Dim`.
    pub type Matrix<Real> = Matrix2<Real>;
}
