// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # DAGMC-Lite Topology
//!
//! Mesh-topology model for CAD-derived boundary-representation geometry.
//!
//! Volumes and surfaces are stored in slot maps with a surface → volume
//! adjacency index, so a surface shared by two volumes can report both of
//! them. Named metadata groups (`mat:Steel`, `boundary:vacuum`, `temp:600`)
//! are parsed into per-entity string properties.
//!
//! Importers talk to the model through the [`MeshModel`] trait; the
//! [`MeshArena`] is the in-memory implementation backed by a JSON geometry
//! file.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dagmc_lite_topology::{Dimension, MeshArena, MeshModel, PropertyParser};
//!
//! let mut mesh = MeshArena::new();
//! mesh.load_file(path)?;
//! mesh.accelerate()?;
//! mesh.parse_properties(&PropertyParser::new(["material"], ":/"))?;
//!
//! for i in 0..mesh.num_entities(Dimension::Volume) {
//!     let id = mesh.id_by_index(Dimension::Volume, i);
//! }
//! ```

pub mod arena;
pub mod construction;
pub mod error;
pub mod keys;
pub mod metadata;
pub mod model;
pub mod serialization;
pub mod spatial;

pub use arena::MeshArena;
pub use error::{Error, ErrorCode, Result};
pub use keys::{Dimension, EntityHandle, SurfaceKey, VolumeKey};
pub use metadata::{Group, Properties, PropertyParser, DEFAULT_DELIMITERS};
pub use model::MeshModel;
pub use spatial::BoundingBox;
