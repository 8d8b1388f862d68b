//! Fields defined over the mesh, and the name-keyed field registry.

pub use self::dimensions::Dimensions;
pub use self::field::{Field, ScalarField, TensorField, VectorField};
pub use self::registry::FieldRegistry;

mod dimensions;
mod field;
mod registry;
