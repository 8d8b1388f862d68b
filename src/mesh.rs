//! Mesh data borrowed from the host solver: boundary patches and porous cell zones.

use crate::error::ForcesError;
use crate::math::{Point, Real, Vector};

/// The index of a boundary patch within its mesh.
pub type PatchId = usize;

/// The index of a cell zone within its mesh.
pub type CellZoneId = usize;

/// A named, contiguous subset of boundary faces.
pub struct Patch {
    /// The name of this patch, as declared by the mesh's boundary definition.
    pub name: String,
    /// The per-face area vectors: the outward face normal scaled by the face area.
    pub face_areas: Vec<Vector<Real>>,
}

impl Patch {
    /// Initializes a boundary patch from its name and per-face area vectors.
    pub fn new(name: impl Into<String>, face_areas: Vec<Vector<Real>>) -> Self {
        Self {
            name: name.into(),
            face_areas,
        }
    }

    /// The number of boundary faces of this patch.
    pub fn num_faces(&self) -> usize {
        self.face_areas.len()
    }
}

/// A named subset of interior cells, used to scope a porosity model's effect.
pub struct CellZone {
    /// The name of this cell zone.
    pub name: String,
    /// The indices of the cells belonging to this zone.
    pub cells: Vec<usize>,
}

impl CellZone {
    /// Initializes a cell zone from its name and member cell indices.
    pub fn new(name: impl Into<String>, cells: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// The mesh quantities consumed by the force integration engine.
///
/// The engine never mutates the mesh; the host solver owns it and guarantees it stays
/// unchanged for the duration of one computation cycle.
pub struct Mesh {
    /// The number of interior cells.
    pub num_cells: usize,
    /// The centroid of every interior cell.
    pub cell_centers: Vec<Point<Real>>,
    /// The boundary patches of this mesh.
    pub patches: Vec<Patch>,
    /// The cell zones of this mesh.
    pub cell_zones: Vec<CellZone>,
}

impl Mesh {
    /// Initializes a mesh from its cell centroids, boundary patches, and cell zones.
    pub fn new(
        cell_centers: Vec<Point<Real>>,
        patches: Vec<Patch>,
        cell_zones: Vec<CellZone>,
    ) -> Self {
        Self {
            num_cells: cell_centers.len(),
            cell_centers,
            patches,
            cell_zones,
        }
    }

    /// Resolves a set of patch name patterns to a deduplicated list of patch ids.
    ///
    /// Patterns are literal patch names, optionally containing `*` wildcards. The ids
    /// are returned in order of first match. A pattern matching no patch at all is a
    /// configuration error.
    pub fn patch_set(
        &self,
        patterns: &[impl AsRef<str>],
    ) -> Result<Vec<PatchId>, ForcesError> {
        let mut ids = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let mut matched = false;

            for (id, patch) in self.patches.iter().enumerate() {
                if wildcard_match(pattern, &patch.name) {
                    matched = true;
                    if !ids.contains(&id) {
                        ids.push(id);
                    }
                }
            }

            if !matched {
                return Err(ForcesError::UnmatchedPatchPattern(pattern.to_string()));
            }
        }

        Ok(ids)
    }
}

/// Matches `name` against `pattern`, where `*` matches any (possibly empty) substring.
fn wildcard_match(pattern: &str, name: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let n: Vec<char> = name.chars().collect();

    let mut pi = 0;
    let mut ni = 0;
    let mut star = None;
    let mut mark = 0;

    while ni < n.len() {
        if pi < p.len() && (p[pi] == n[ni]) {
            pi += 1;
            ni += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some(pi);
            mark = ni;
            pi += 1;
        } else if let Some(s) = star {
            // Backtrack: let the last `*` absorb one more character.
            pi = s + 1;
            mark += 1;
            ni = mark;
        } else {
            return false;
        }
    }

    while pi < p.len() && p[pi] == '*' {
        pi += 1;
    }

    pi == p.len()
}
