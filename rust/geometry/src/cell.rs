// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cell and surface records stored in the global model.

use std::sync::Arc;

use dagmc_lite_topology::MeshModel;

use crate::boundary::BoundaryCondition;
use crate::settings::MATERIAL_VOID;

/// Where a cell's geometry comes from.
#[derive(Debug, Clone)]
pub enum CellGeometry {
    /// Region expression of signed surface IDs.
    Csg { region: Vec<i32> },
    /// A volume of a loaded mesh model.
    Dag {
        /// Enumeration index of the volume in `mesh`.
        dag_index: usize,
        mesh: Arc<dyn MeshModel>,
    },
}

/// A cell of the transport model.
#[derive(Debug, Clone)]
pub struct Cell {
    pub id: i32,
    /// ID of the universe that owns the cell.
    pub universe: i32,
    /// Universe filling the cell, if it is not filled with material.
    pub fill: Option<i32>,
    /// Material IDs; never empty. [`MATERIAL_VOID`] means vacuum.
    pub material: Vec<i32>,
    /// Temperatures stored as `sqrt(k_B * T)`; empty for void cells.
    pub sqrt_kt: Vec<f64>,
    pub geometry: CellGeometry,
}

impl Cell {
    /// Creates a material-filled CSG cell.
    pub fn csg(id: i32, universe: i32, material: i32, region: Vec<i32>) -> Self {
        Self {
            id,
            universe,
            fill: None,
            material: vec![material],
            sqrt_kt: Vec::new(),
            geometry: CellGeometry::Csg { region },
        }
    }

    /// Returns `true` if the cell holds no material.
    pub fn is_void(&self) -> bool {
        self.material.first() == Some(&MATERIAL_VOID)
    }

    /// Returns the mesh enumeration index for mesh-backed cells.
    pub fn dag_index(&self) -> Option<usize> {
        match &self.geometry {
            CellGeometry::Dag { dag_index, .. } => Some(*dag_index),
            CellGeometry::Csg { .. } => None,
        }
    }

    /// Returns the shared mesh model for mesh-backed cells.
    pub fn mesh(&self) -> Option<&Arc<dyn MeshModel>> {
        match &self.geometry {
            CellGeometry::Dag { mesh, .. } => Some(mesh),
            CellGeometry::Csg { .. } => None,
        }
    }
}

/// Where a surface's geometry comes from.
#[derive(Debug, Clone)]
pub enum SurfaceGeometry {
    Csg,
    Dag {
        /// Enumeration index of the surface in `mesh`.
        dag_index: usize,
        mesh: Arc<dyn MeshModel>,
    },
}

/// A surface of the transport model.
#[derive(Debug, Clone)]
pub struct Surface {
    pub id: i32,
    /// `None` means particles pass through.
    pub bc: Option<BoundaryCondition>,
    pub geometry: SurfaceGeometry,
}

impl Surface {
    /// Creates a CSG surface.
    pub fn csg(id: i32, bc: Option<BoundaryCondition>) -> Self {
        Self {
            id,
            bc,
            geometry: SurfaceGeometry::Csg,
        }
    }

    /// Returns `true` if the surface has no boundary condition.
    pub fn is_transmissive(&self) -> bool {
        self.bc.is_none()
    }

    /// Returns the mesh enumeration index for mesh-backed surfaces.
    pub fn dag_index(&self) -> Option<usize> {
        match &self.geometry {
            SurfaceGeometry::Dag { dag_index, .. } => Some(*dag_index),
            SurfaceGeometry::Csg => None,
        }
    }
}
