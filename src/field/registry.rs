//! Name-keyed lookup of the fields shared by the host solver.

use crate::error::ForcesError;
use crate::field::{ScalarField, TensorField, VectorField};

use fnv::FnvHashMap;

/// The registry of fields the host solver shares with the force engine.
///
/// Lookups come in two flavors: `scalar`/`vector`/`tensor` return `None` when the
/// field is absent, while the `require_*` variants surface the absence as the fatal
/// [`ForcesError::MissingField`] the resolvers propagate.
pub struct FieldRegistry {
    scalars: FnvHashMap<String, ScalarField>,
    vectors: FnvHashMap<String, VectorField>,
    tensors: FnvHashMap<String, TensorField>,
}

impl FieldRegistry {
    /// Initializes an empty field registry.
    pub fn new() -> Self {
        Self {
            scalars: FnvHashMap::default(),
            vectors: FnvHashMap::default(),
            tensors: FnvHashMap::default(),
        }
    }

    /// Stores a scalar field under the given name, replacing any previous entry.
    pub fn insert_scalar(&mut self, name: impl Into<String>, field: ScalarField) {
        let _ = self.scalars.insert(name.into(), field);
    }

    /// Stores a vector field under the given name, replacing any previous entry.
    pub fn insert_vector(&mut self, name: impl Into<String>, field: VectorField) {
        let _ = self.vectors.insert(name.into(), field);
    }

    /// Stores a tensor field under the given name, replacing any previous entry.
    pub fn insert_tensor(&mut self, name: impl Into<String>, field: TensorField) {
        let _ = self.tensors.insert(name.into(), field);
    }

    /// The scalar field registered under the given name, if any.
    pub fn scalar(&self, name: &str) -> Option<&ScalarField> {
        self.scalars.get(name)
    }

    /// The vector field registered under the given name, if any.
    pub fn vector(&self, name: &str) -> Option<&VectorField> {
        self.vectors.get(name)
    }

    /// The tensor field registered under the given name, if any.
    pub fn tensor(&self, name: &str) -> Option<&TensorField> {
        self.tensors.get(name)
    }

    /// Checks whether a scalar field is registered under the given name.
    pub fn contains_scalar(&self, name: &str) -> bool {
        self.scalars.contains_key(name)
    }

    /// Checks whether a vector field is registered under the given name.
    pub fn contains_vector(&self, name: &str) -> bool {
        self.vectors.contains_key(name)
    }

    /// The scalar field registered under the given name, or a fatal error.
    pub fn require_scalar(&self, name: &str) -> Result<&ScalarField, ForcesError> {
        self.scalar(name)
            .ok_or_else(|| ForcesError::MissingField(name.to_string()))
    }

    /// The vector field registered under the given name, or a fatal error.
    pub fn require_vector(&self, name: &str) -> Result<&VectorField, ForcesError> {
        self.vector(name)
            .ok_or_else(|| ForcesError::MissingField(name.to_string()))
    }

    /// The tensor field registered under the given name, or a fatal error.
    pub fn require_tensor(&self, name: &str) -> Result<&TensorField, ForcesError> {
        self.tensor(name)
            .ok_or_else(|| ForcesError::MissingField(name.to_string()))
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}
