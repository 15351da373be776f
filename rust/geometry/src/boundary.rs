// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary conditions derived from free-text surface tags.

use crate::error::{Error, Result};

/// A non-transmissive boundary condition on a surface.
///
/// Transmission is the default and is represented by the absence of a
/// condition (`Option::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryCondition {
    /// Particles crossing the surface leave the problem.
    Vacuum,
    /// Particles are mirrored back into the problem.
    Reflective,
}

/// Maps a boundary tag to a condition.
///
/// Surfaces bounding the graveyard always get [`BoundaryCondition::Vacuum`],
/// whatever their own (accepted) tag says.
pub fn classify_boundary(
    tag: &str,
    surface: i32,
    bounds_graveyard: bool,
) -> Result<Option<BoundaryCondition>> {
    let condition = match tag.to_lowercase().as_str() {
        "" | "transmit" | "transmission" => None,
        "vacuum" => Some(BoundaryCondition::Vacuum),
        "reflective" | "reflect" | "reflecting" => Some(BoundaryCondition::Reflective),
        "periodic" => return Err(Error::PeriodicBoundaryUnsupported { surface }),
        _ => {
            return Err(Error::UnknownBoundaryCondition {
                value: tag.to_string(),
                surface,
            })
        }
    };

    if bounds_graveyard {
        return Ok(Some(BoundaryCondition::Vacuum));
    }
    Ok(condition)
}
