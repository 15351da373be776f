// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity handles for arena-based mesh storage.
//!
//! Volumes and surfaces get type-safe keys from `slotmap::SlotMap`. The
//! [`EntityHandle`] wraps either kind so that property lookups and parent
//! queries can be expressed over one handle type.

use slotmap::new_key_type;

new_key_type! {
    /// Key for a volume (closed region bounded by surfaces).
    pub struct VolumeKey;

    /// Key for a surface (triangulated sheet shared by one or two volumes).
    pub struct SurfaceKey;
}

/// A handle to any mesh entity that carries metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityHandle {
    Volume(VolumeKey),
    Surface(SurfaceKey),
}

impl EntityHandle {
    /// Returns the topological dimension of the referenced entity.
    pub fn dimension(&self) -> Dimension {
        match self {
            EntityHandle::Volume(_) => Dimension::Volume,
            EntityHandle::Surface(_) => Dimension::Surface,
        }
    }
}

/// Topological dimension of an enumerable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Surface = 2,
    Volume = 3,
}

impl Dimension {
    /// Returns the dimension as an integer (2 for surfaces, 3 for volumes).
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// Returns the entity name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Surface => "surface",
            Dimension::Volume => "volume",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<VolumeKey> for EntityHandle {
    fn from(k: VolumeKey) -> Self {
        EntityHandle::Volume(k)
    }
}

impl From<SurfaceKey> for EntityHandle {
    fn from(k: SurfaceKey) -> Self {
        EntityHandle::Surface(k)
    }
}
