// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based storage for volumes and surfaces.
//!
//! The [`MeshArena`] is the central owner of all mesh data. Volumes and
//! surfaces live in slot maps with stable, generational keys. Each entity
//! keeps the native ID assigned by the CAD metadata, and the arena records
//! enumeration order separately so that index-based access is stable.
//!
//! Surfaces are shared: a surface separating two volumes appears in both
//! volumes' surface lists, and the upward index (`surface → volumes`) answers
//! "which volumes does this surface bound?" in O(1).

use nalgebra::Point3;
use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::SlotMap;

use crate::keys::*;
use crate::metadata::{Group, Properties};
use crate::spatial::BoundingBox;

/// Data stored for a volume.
#[derive(Debug, Clone)]
pub struct VolumeData {
    /// Native ID from the CAD metadata.
    pub global_id: i32,
    /// Bounding surfaces, in the order they were linked.
    pub surfaces: Vec<SurfaceKey>,
}

/// Data stored for a surface.
#[derive(Debug, Clone)]
pub struct SurfaceData {
    /// Native ID from the CAD metadata.
    pub global_id: i32,
    /// Facets of the surface.
    pub triangles: Vec<[Point3<f64>; 3]>,
}

/// The central arena that owns all mesh entities, their metadata, and the
/// acceleration data built by [`MeshArena::accelerate`].
///
/// # Example
///
/// ```
/// use dagmc_lite_topology::MeshArena;
///
/// let mut arena = MeshArena::new();
/// let v = arena.add_volume(1);
/// let s = arena.add_surface(1);
/// arena.link_surface(v, s).unwrap();
///
/// assert_eq!(arena.volume_count(), 1);
/// assert_eq!(arena.surface_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MeshArena {
    // Entity storage
    pub(crate) volumes: SlotMap<VolumeKey, VolumeData>,
    pub(crate) surfaces: SlotMap<SurfaceKey, SurfaceData>,

    // Enumeration order
    pub(crate) volume_order: Vec<VolumeKey>,
    pub(crate) surface_order: Vec<SurfaceKey>,

    // Upward adjacency: surface → volumes it bounds
    pub(crate) surface_to_volumes: FxHashMap<SurfaceKey, FxHashSet<VolumeKey>>,

    // Metadata
    pub(crate) groups: Vec<Group>,
    pub(crate) properties: FxHashMap<EntityHandle, Properties>,

    // Acceleration data
    pub(crate) bounds: FxHashMap<EntityHandle, BoundingBox>,
    pub(crate) accelerated: bool,
}

impl MeshArena {
    /// Creates a new, empty mesh arena.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Volume operations ---

    /// Returns the volume data for the given key, or `None` if not found.
    pub fn volume(&self, key: VolumeKey) -> Option<&VolumeData> {
        self.volumes.get(key)
    }

    /// Returns the number of volumes in the arena.
    pub fn volume_count(&self) -> usize {
        self.volumes.len()
    }

    /// Returns volume keys in enumeration order.
    pub fn volume_keys(&self) -> &[VolumeKey] {
        &self.volume_order
    }

    // --- Surface operations ---

    /// Returns the surface data for the given key, or `None` if not found.
    pub fn surface(&self, key: SurfaceKey) -> Option<&SurfaceData> {
        self.surfaces.get(key)
    }

    /// Returns the number of surfaces in the arena.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Returns surface keys in enumeration order.
    pub fn surface_keys(&self) -> &[SurfaceKey] {
        &self.surface_order
    }

    // --- Lookups ---

    /// Returns the native ID of an entity.
    pub fn global_id(&self, handle: EntityHandle) -> Option<i32> {
        match handle {
            EntityHandle::Volume(k) => self.volumes.get(k).map(|v| v.global_id),
            EntityHandle::Surface(k) => self.surfaces.get(k).map(|s| s.global_id),
        }
    }

    /// Returns `true` if the handle references a live entity.
    pub fn contains(&self, handle: EntityHandle) -> bool {
        match handle {
            EntityHandle::Volume(k) => self.volumes.contains_key(k),
            EntityHandle::Surface(k) => self.surfaces.contains_key(k),
        }
    }

    /// Returns the volumes a surface bounds.
    pub fn surface_volumes(&self, key: SurfaceKey) -> Option<&FxHashSet<VolumeKey>> {
        self.surface_to_volumes.get(&key)
    }

    /// Returns `true` once [`MeshArena::accelerate`] has completed.
    pub fn is_accelerated(&self) -> bool {
        self.accelerated
    }

    // --- Adjacency index helpers ---

    /// Register that a surface bounds a volume (upward adjacency).
    pub(crate) fn link_surface_volume(&mut self, surface: SurfaceKey, volume: VolumeKey) {
        self.surface_to_volumes
            .entry(surface)
            .or_default()
            .insert(volume);
    }
}
