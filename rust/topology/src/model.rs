// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The query interface a geometry importer needs from a mesh model.
//!
//! Loading and acceleration take `&mut self`; every query takes `&self` so a
//! finished model can be shared behind an `Arc` by all cells and surfaces
//! built from it.

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::arena::MeshArena;
use crate::error::{Error, Result};
use crate::keys::{Dimension, EntityHandle};
use crate::metadata::PropertyParser;

/// A loaded boundary-representation model.
///
/// Entity indices are 0-based and follow the model's enumeration order.
pub trait MeshModel: std::fmt::Debug + Send + Sync {
    /// Replaces the model contents with the geometry stored at `path`.
    fn load_file(&mut self, path: &Path) -> Result<()>;

    /// Builds spatial acceleration data. Must be called after loading.
    fn accelerate(&mut self) -> Result<()>;

    /// Converts group metadata into entity properties.
    fn parse_properties(&mut self, parser: &PropertyParser) -> Result<()>;

    /// Returns the number of entities of a dimension.
    fn num_entities(&self, dimension: Dimension) -> usize;

    /// Returns the entity at an enumeration index.
    fn entity_by_index(&self, dimension: Dimension, index: usize) -> Option<EntityHandle>;

    /// Returns the native (CAD metadata) ID of the entity at an enumeration index.
    fn id_by_index(&self, dimension: Dimension, index: usize) -> Option<i32>;

    /// Returns the first value of a property.
    fn property_value(&self, handle: EntityHandle, key: &str) -> Option<String>;

    /// Returns `true` if the entity carries the property.
    fn has_property(&self, handle: EntityHandle, key: &str) -> bool {
        self.property_value(handle, key).is_some()
    }

    /// Returns the volumes a surface bounds.
    fn parent_volumes(&self, surface: EntityHandle) -> Result<FxHashSet<EntityHandle>>;
}

impl MeshModel for MeshArena {
    fn load_file(&mut self, path: &Path) -> Result<()> {
        *self = MeshArena::from_file(path)?;
        Ok(())
    }

    fn accelerate(&mut self) -> Result<()> {
        MeshArena::accelerate(self)
    }

    fn parse_properties(&mut self, parser: &PropertyParser) -> Result<()> {
        self.apply_groups(parser);
        Ok(())
    }

    fn num_entities(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::Volume => self.volume_order.len(),
            Dimension::Surface => self.surface_order.len(),
        }
    }

    fn entity_by_index(&self, dimension: Dimension, index: usize) -> Option<EntityHandle> {
        match dimension {
            Dimension::Volume => self.volume_order.get(index).map(|&k| k.into()),
            Dimension::Surface => self.surface_order.get(index).map(|&k| k.into()),
        }
    }

    fn id_by_index(&self, dimension: Dimension, index: usize) -> Option<i32> {
        self.entity_by_index(dimension, index)
            .and_then(|h| self.global_id(h))
    }

    fn property_value(&self, handle: EntityHandle, key: &str) -> Option<String> {
        self.property(handle, key).map(str::to_string)
    }

    fn parent_volumes(&self, surface: EntityHandle) -> Result<FxHashSet<EntityHandle>> {
        let EntityHandle::Surface(sk) = surface else {
            return Err(Error::NotASurface(surface));
        };
        if !self.surfaces.contains_key(sk) {
            return Err(Error::SurfaceNotFound(sk));
        }
        Ok(self
            .surface_volumes(sk)
            .map(|vols| vols.iter().map(|&vk| EntityHandle::Volume(vk)).collect())
            .unwrap_or_default())
    }
}
