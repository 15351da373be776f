// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cell and surface ID assignment for imported entities.
//!
//! IDs are either the mesh's native IDs or sequential numbers starting above
//! everything already in the model. Either way, an ID that is already taken
//! is an error: two independently authored geometries sharing an ID is never
//! resolved automatically.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;

use dagmc_lite_topology::{Dimension, MeshModel};

use crate::error::{Error, Result};
use crate::model::Model;
use crate::range::condensed_ranges;

/// Assigns cell and surface IDs for one universe.
#[derive(Debug, Clone, Copy)]
pub struct IdAllocator {
    adjust: bool,
    max_cell: i32,
    max_surface: i32,
}

impl IdAllocator {
    /// Creates an allocator; `adjust` selects renumbering over native IDs.
    pub fn new(model: &Model, adjust: bool) -> Self {
        Self {
            adjust,
            max_cell: model.max_cell_id(),
            max_surface: model.max_surface_id(),
        }
    }

    /// Returns `true` in renumber mode.
    pub fn renumbers(&self) -> bool {
        self.adjust
    }

    /// Computes the ID of every entity of a dimension, in enumeration order.
    pub fn allocate(&self, mesh: &dyn MeshModel, dimension: Dimension) -> Result<Vec<i32>> {
        let count = mesh.num_entities(dimension);
        if self.adjust {
            return match dimension {
                Dimension::Volume => sequential_ids(self.max_cell, count, "cell"),
                Dimension::Surface => sequential_ids(self.max_surface, count, "surface"),
            };
        }

        (0..count)
            .map(|index| {
                mesh.id_by_index(dimension, index).ok_or_else(|| {
                    dagmc_lite_topology::Error::IndexOutOfRange { dimension, index }.into()
                })
            })
            .collect()
    }
}

/// Returns `count` consecutive IDs starting right after `max`.
///
/// Fails with [`Error::IdSpaceExhausted`] if the last one would not fit in an `i32`.
pub fn sequential_ids(max: i32, count: usize, kind: &'static str) -> Result<Vec<i32>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let exhausted = || Error::IdSpaceExhausted { kind };
    let count = i32::try_from(count).map_err(|_| exhausted())?;
    let first = max.checked_add(1).ok_or_else(exhausted)?;
    let last = first.checked_add(count - 1).ok_or_else(exhausted)?;
    Ok((first..=last).collect())
}

/// Fails if any of `ids` is already registered or repeats within `ids`.
///
/// The error carries the condensed listing of all of `ids`, which is also
/// logged as a warning.
pub fn check_collisions(
    model: &Model,
    dimension: Dimension,
    ids: &[i32],
    universe: i32,
) -> Result<()> {
    let registry: &FxHashMap<i32, usize> = match dimension {
        Dimension::Volume => &model.cell_map,
        Dimension::Surface => &model.surface_map,
    };

    let mut seen = FxHashSet::default();
    let Some(&id) = ids
        .iter()
        .find(|&&id| registry.contains_key(&id) || !seen.insert(id))
    else {
        return Ok(());
    };

    let listing = condensed_ranges(ids.iter().copied())?;
    warn!(universe, %dimension, ids = %listing, "ID collision in DAGMC universe");
    Err(match dimension {
        Dimension::Volume => Error::CellIdCollision {
            id,
            universe,
            ids: listing,
        },
        Dimension::Surface => Error::SurfaceIdCollision {
            id,
            universe,
            ids: listing,
        },
    })
}

/// Returns the first material ID above everything in the model.
pub fn next_material_id(model: &Model) -> Result<i32> {
    model
        .max_material_id()
        .checked_add(1)
        .ok_or(Error::IdSpaceExhausted { kind: "material" })
}
