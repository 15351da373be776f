// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # DAGMC-Lite Geometry
//!
//! Builds particle-transport cells and surfaces from CAD-derived
//! boundary-representation files.
//!
//! Each configured geometry file becomes a [`DagUniverse`]: every mesh volume
//! turns into a [`Cell`] and every mesh surface into a [`Surface`], appended
//! to the global [`Model`] next to anything built earlier from a CSG
//! description. Materials come either from a library bundled with the file
//! or from the materials already in the model.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dagmc_lite_geometry::{DagUniverseConfig, Model, Settings};
//!
//! let settings = Settings::from_env();
//! let mut model = Model::new();
//! let config = DagUniverseConfig {
//!     id: Some(1),
//!     filename: Some("dagmc.json".into()),
//!     ..Default::default()
//! };
//! model.read_dagmc_universes(&[config], &settings)?;
//! println!("{} cells", model.cells.len());
//! ```

pub mod boundary;
pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod library;
pub mod material;
pub mod model;
pub mod range;
pub mod resolver;
pub mod settings;
pub mod universe;

pub use boundary::{classify_boundary, BoundaryCondition};
pub use cell::{Cell, CellGeometry, Surface, SurfaceGeometry};
pub use config::{DagUniverseConfig, UniverseParams};
pub use error::{Error, Result};
pub use ids::{check_collisions, next_material_id, IdAllocator};
pub use library::{LibraryMaterial, MaterialLibrary};
pub use material::Material;
pub use model::{CsgUniverse, Model, Universe};
pub use range::condensed_ranges;
pub use resolver::{resolve_sqrt_kt, MaterialResolver};
pub use settings::{sqrt_kt, Settings, DAGMC_FILENAME, K_BOLTZMANN, MATERIAL_VOID};
pub use universe::{DagUniverse, ImportWarning};

// Re-export the mesh interface for callers that only depend on this crate
pub use dagmc_lite_topology::{Dimension, EntityHandle, MeshArena, MeshModel};
