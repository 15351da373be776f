// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Construction methods for mesh entities.
//!
//! Entities are created through the arena, which keeps enumeration order and
//! maintains the surface → volume adjacency index.

use nalgebra::Point3;

use crate::arena::*;
use crate::error::{Error, Result};
use crate::keys::*;

impl MeshArena {
    /// Adds a volume with the given native ID.
    pub fn add_volume(&mut self, global_id: i32) -> VolumeKey {
        let key = self.volumes.insert(VolumeData {
            global_id,
            surfaces: Vec::new(),
        });
        self.volume_order.push(key);
        self.accelerated = false;
        key
    }

    /// Adds a surface with the given native ID and no facets.
    pub fn add_surface(&mut self, global_id: i32) -> SurfaceKey {
        self.add_surface_with_triangles(global_id, Vec::new())
    }

    /// Adds a surface with the given native ID and facets.
    pub fn add_surface_with_triangles(
        &mut self,
        global_id: i32,
        triangles: Vec<[Point3<f64>; 3]>,
    ) -> SurfaceKey {
        let key = self.surfaces.insert(SurfaceData {
            global_id,
            triangles,
        });
        self.surface_order.push(key);
        self.accelerated = false;
        key
    }

    /// Records that `surface` bounds `volume`.
    ///
    /// Linking the same pair twice is a no-op.
    pub fn link_surface(&mut self, volume: VolumeKey, surface: SurfaceKey) -> Result<()> {
        if !self.surfaces.contains_key(surface) {
            return Err(Error::SurfaceNotFound(surface));
        }
        let data = self
            .volumes
            .get_mut(volume)
            .ok_or(Error::VolumeNotFound(volume))?;

        if !data.surfaces.contains(&surface) {
            data.surfaces.push(surface);
        }
        self.link_surface_volume(surface, volume);
        self.accelerated = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_registers_both_directions() {
        let mut arena = MeshArena::new();
        let v = arena.add_volume(1);
        let s = arena.add_surface(10);
        arena.link_surface(v, s).unwrap();

        assert_eq!(arena.volume(v).unwrap().surfaces, vec![s]);
        assert!(arena.surface_volumes(s).unwrap().contains(&v));
    }

    #[test]
    fn shared_surface_has_two_parents() {
        let mut arena = MeshArena::new();
        let inner = arena.add_volume(1);
        let outer = arena.add_volume(2);
        let s = arena.add_surface(5);
        arena.link_surface(inner, s).unwrap();
        arena.link_surface(outer, s).unwrap();

        assert_eq!(arena.surface_volumes(s).unwrap().len(), 2);
    }

    #[test]
    fn relinking_is_idempotent() {
        let mut arena = MeshArena::new();
        let v = arena.add_volume(1);
        let s = arena.add_surface(1);
        arena.link_surface(v, s).unwrap();
        arena.link_surface(v, s).unwrap();
        assert_eq!(arena.volume(v).unwrap().surfaces.len(), 1);
    }

    #[test]
    fn link_to_missing_surface_fails() {
        let mut arena = MeshArena::new();
        let v = arena.add_volume(1);
        let mut other = MeshArena::new();
        let _ = other.add_surface(1);
        let stray = other.add_surface(2);

        let err = arena.link_surface(v, stray).unwrap_err();
        assert!(matches!(err, Error::SurfaceNotFound(_)));
    }
}
