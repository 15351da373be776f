// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON geometry file format.
//!
//! A geometry file lists volumes (with the native IDs of their bounding
//! surfaces), surfaces (with optional facets), and named metadata groups.
//! Entities are referenced by native ID throughout; the loader maps them to
//! arena keys. Sections the mesh does not own (such as a bundled material
//! library) are ignored here.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::arena::MeshArena;
use crate::error::{Error, Result};
use crate::keys::{Dimension, EntityHandle, SurfaceKey, VolumeKey};

/// Serializable representation of a geometry file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeometryFile {
    #[serde(default)]
    pub volumes: Vec<VolumeRecord>,
    #[serde(default)]
    pub surfaces: Vec<SurfaceRecord>,
    #[serde(default)]
    pub groups: Vec<GroupRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VolumeRecord {
    pub id: i32,
    #[serde(default)]
    pub surfaces: Vec<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SurfaceRecord {
    pub id: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triangles: Vec<[[f64; 3]; 3]>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GroupRecord {
    pub name: String,
    #[serde(default)]
    pub volumes: Vec<i32>,
    #[serde(default)]
    pub surfaces: Vec<i32>,
}

impl MeshArena {
    /// Reads and parses a geometry file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parses a geometry file from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: GeometryFile =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        Self::from_geometry_file(&file)
    }

    /// Builds an arena from a parsed geometry file.
    fn from_geometry_file(file: &GeometryFile) -> Result<Self> {
        let mut arena = MeshArena::new();

        // Surfaces first so volumes can link to them
        let mut surface_keys: FxHashMap<i32, SurfaceKey> = FxHashMap::default();
        for record in &file.surfaces {
            if surface_keys.contains_key(&record.id) {
                return Err(Error::DuplicateGlobalId {
                    dimension: Dimension::Surface,
                    id: record.id,
                });
            }
            let triangles = record
                .triangles
                .iter()
                .map(|t| t.map(|p| nalgebra::Point3::new(p[0], p[1], p[2])))
                .collect();
            let sk = arena.add_surface_with_triangles(record.id, triangles);
            surface_keys.insert(record.id, sk);
        }

        let mut volume_keys: FxHashMap<i32, VolumeKey> = FxHashMap::default();
        for record in &file.volumes {
            if volume_keys.contains_key(&record.id) {
                return Err(Error::DuplicateGlobalId {
                    dimension: Dimension::Volume,
                    id: record.id,
                });
            }
            let vk = arena.add_volume(record.id);
            for surface_id in &record.surfaces {
                let sk = surface_keys
                    .get(surface_id)
                    .ok_or(Error::UnknownSurfaceReference {
                        volume: record.id,
                        surface: *surface_id,
                    })?;
                arena.link_surface(vk, *sk)?;
            }
            volume_keys.insert(record.id, vk);
        }

        for group in &file.groups {
            let mut members = Vec::with_capacity(group.volumes.len() + group.surfaces.len());
            for id in &group.volumes {
                let vk = volume_keys.get(id).ok_or_else(|| Error::UnknownGroupMember {
                    group: group.name.clone(),
                    dimension: Dimension::Volume,
                    id: *id,
                })?;
                members.push(EntityHandle::Volume(*vk));
            }
            for id in &group.surfaces {
                let sk = surface_keys.get(id).ok_or_else(|| Error::UnknownGroupMember {
                    group: group.name.clone(),
                    dimension: Dimension::Surface,
                    id: *id,
                })?;
                members.push(EntityHandle::Surface(*sk));
            }
            arena.add_group(&group.name, members);
        }

        Ok(arena)
    }
}
