// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bounding-box acceleration data for volumes and surfaces.
//!
//! [`MeshArena::accelerate`] computes an axis-aligned box for every surface
//! from its facets and merges them into one box per volume.

use nalgebra::Point3;

use crate::arena::MeshArena;
use crate::error::{Error, Result};
use crate::keys::EntityHandle;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    /// Builds the smallest box containing all points, or `None` if there are none.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bb = BoundingBox {
            min: *first,
            max: *first,
        };
        for p in iter {
            bb.min = bb.min.inf(p);
            bb.max = bb.max.sup(p);
        }
        Some(bb)
    }

    /// Returns the smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }
}

impl MeshArena {
    /// Builds the acceleration data.
    ///
    /// Fails if a surface has non-finite coordinates. Surfaces without facets
    /// get no box; a volume gets a box if at least one of its surfaces has one.
    pub fn accelerate(&mut self) -> Result<()> {
        self.bounds.clear();

        for &sk in &self.surface_order {
            let surface = &self.surfaces[sk];
            let finite = surface
                .triangles
                .iter()
                .flatten()
                .all(|p| p.coords.iter().all(|c| c.is_finite()));
            if !finite {
                return Err(Error::InvalidCoordinates {
                    surface: surface.global_id,
                });
            }
            if let Some(bb) = BoundingBox::from_points(surface.triangles.iter().flatten()) {
                self.bounds.insert(EntityHandle::Surface(sk), bb);
            }
        }

        for &vk in &self.volume_order {
            let merged = self.volumes[vk]
                .surfaces
                .iter()
                .filter_map(|&sk| self.bounds.get(&EntityHandle::Surface(sk)))
                .fold(None, |acc: Option<BoundingBox>, bb| {
                    Some(acc.map_or(*bb, |a| a.union(bb)))
                });
            if let Some(bb) = merged {
                self.bounds.insert(EntityHandle::Volume(vk), bb);
            }
        }

        self.accelerated = true;
        Ok(())
    }

    /// Returns the bounding box of an entity, if one was built.
    pub fn bounding_box(&self, handle: EntityHandle) -> Option<&BoundingBox> {
        self.bounds.get(&handle)
    }
}
