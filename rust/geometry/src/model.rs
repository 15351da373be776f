// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Global registries of cells, surfaces, materials and universes.
//!
//! A [`Model`] is created once per run and is filled by every geometry
//! description that gets loaded, CSG and mesh-based alike. Each collection
//! keeps an ID → index map that is updated as entries are appended.

use rustc_hash::FxHashMap;

use crate::cell::{Cell, Surface};
use crate::config::DagUniverseConfig;
use crate::error::{Error, Result};
use crate::material::Material;
use crate::settings::Settings;
use crate::universe::DagUniverse;

/// A universe built from a CSG description.
#[derive(Debug, Clone, Default)]
pub struct CsgUniverse {
    pub id: i32,
    /// Indices into [`Model::cells`].
    pub cells: Vec<usize>,
}

/// Any universe registered in the model.
#[derive(Debug)]
pub enum Universe {
    Csg(CsgUniverse),
    Dag(Box<DagUniverse>),
}

impl Universe {
    /// Returns the universe ID.
    pub fn id(&self) -> i32 {
        match self {
            Universe::Csg(u) => u.id,
            Universe::Dag(u) => u.id(),
        }
    }
}

/// The global geometry and material registries.
#[derive(Debug, Default)]
pub struct Model {
    pub cells: Vec<Cell>,
    pub cell_map: FxHashMap<i32, usize>,
    pub surfaces: Vec<Surface>,
    pub surface_map: FxHashMap<i32, usize>,
    pub materials: Vec<Material>,
    pub material_map: FxHashMap<i32, usize>,
    pub universes: Vec<Universe>,
    pub universe_map: FxHashMap<i32, usize>,
    /// Per-cell overlap counters, sized to `cells` when overlap checks are on.
    pub overlap_check_count: Vec<u64>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cell and registers its ID.
    pub fn add_cell(&mut self, cell: Cell) -> Result<usize> {
        if self.cell_map.contains_key(&cell.id) {
            return Err(Error::DuplicateCellId { id: cell.id });
        }
        let index = self.cells.len();
        self.cell_map.insert(cell.id, index);
        self.cells.push(cell);
        Ok(index)
    }

    /// Appends a surface and registers its ID.
    pub fn add_surface(&mut self, surface: Surface) -> Result<usize> {
        if self.surface_map.contains_key(&surface.id) {
            return Err(Error::DuplicateSurfaceId { id: surface.id });
        }
        let index = self.surfaces.len();
        self.surface_map.insert(surface.id, index);
        self.surfaces.push(surface);
        Ok(index)
    }

    /// Appends a material and registers its ID.
    pub fn add_material(&mut self, material: Material) -> Result<usize> {
        if self.material_map.contains_key(&material.id) {
            return Err(Error::MaterialIdCollision { id: material.id });
        }
        let index = self.materials.len();
        self.material_map.insert(material.id, index);
        self.materials.push(material);
        Ok(index)
    }

    /// Appends a universe and registers its ID.
    pub fn add_universe(&mut self, universe: Universe) -> Result<usize> {
        let id = universe.id();
        if self.universe_map.contains_key(&id) {
            return Err(Error::UniverseIdCollision { id });
        }
        let index = self.universes.len();
        self.universe_map.insert(id, index);
        self.universes.push(universe);
        Ok(index)
    }

    /// Returns the material with the given ID.
    pub fn material(&self, id: i32) -> Option<&Material> {
        self.material_map.get(&id).map(|&i| &self.materials[i])
    }

    /// Returns the cell with the given ID.
    pub fn cell(&self, id: i32) -> Option<&Cell> {
        self.cell_map.get(&id).map(|&i| &self.cells[i])
    }

    /// Returns the surface with the given ID.
    pub fn surface(&self, id: i32) -> Option<&Surface> {
        self.surface_map.get(&id).map(|&i| &self.surfaces[i])
    }

    /// Highest cell ID so far, or 0 if there are no cells.
    pub fn max_cell_id(&self) -> i32 {
        self.cells.iter().map(|c| c.id).max().unwrap_or(0).max(0)
    }

    /// Highest surface ID so far, or 0 if there are no surfaces.
    pub fn max_surface_id(&self) -> i32 {
        self.surfaces.iter().map(|s| s.id).max().unwrap_or(0).max(0)
    }

    /// Highest material ID so far, or 0 if there are no materials.
    pub fn max_material_id(&self) -> i32 {
        self.materials.iter().map(|m| m.id).max().unwrap_or(0).max(0)
    }

    /// Highest universe ID so far, or 0 if there are no universes.
    pub fn max_universe_id(&self) -> i32 {
        self.universes
            .iter()
            .map(Universe::id)
            .max()
            .unwrap_or(0)
            .max(0)
    }

    /// Loads every configured mesh universe and registers it.
    pub fn read_dagmc_universes(
        &mut self,
        configs: &[DagUniverseConfig],
        settings: &Settings,
    ) -> Result<()> {
        for config in configs {
            let universe = DagUniverse::from_config(config, self, settings)?;
            self.add_universe(Universe::Dag(Box::new(universe)))?;
        }
        Ok(())
    }
}
