// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material and temperature assignment for imported volumes.
//!
//! A universe resolves material tags in one of two ways, chosen once when it
//! is initialized:
//!
//! - **Library**: the tag is a key of the material library bundled with the
//!   geometry file, and the cell gets that entry's `mat_number`.
//! - **Legacy**: the tag is matched case-insensitively against the names of
//!   the materials already in the model, falling back to a numeric ID.
//!
//! The tags `void`, `vacuum` and `graveyard` bypass both and give
//! [`MATERIAL_VOID`].

use tracing::debug;

use crate::error::{Error, Result};
use crate::library::MaterialLibrary;
use crate::material::Material;
use crate::settings::{sqrt_kt, MATERIAL_VOID};

/// Tag marking the outer problem boundary volume.
pub const GRAVEYARD_TAG: &str = "graveyard";

const VOID_TAGS: [&str; 3] = ["void", "vacuum", GRAVEYARD_TAG];

/// Returns `true` if a material tag marks the graveyard volume.
pub fn is_graveyard_tag(tag: &str) -> bool {
    tag.eq_ignore_ascii_case(GRAVEYARD_TAG)
}

fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t))
}

/// Material tag resolution strategy for one universe.
#[derive(Debug, Clone, Copy)]
pub enum MaterialResolver<'a> {
    Library(&'a MaterialLibrary),
    Legacy(&'a [Material]),
}

impl<'a> MaterialResolver<'a> {
    /// Picks the library strategy if `library` is present and non-empty.
    pub fn new(library: Option<&'a MaterialLibrary>, materials: &'a [Material]) -> Self {
        match library {
            Some(lib) if !lib.is_empty() => MaterialResolver::Library(lib),
            _ => MaterialResolver::Legacy(materials),
        }
    }

    /// Returns `true` for the library strategy.
    pub fn uses_library(&self) -> bool {
        matches!(self, MaterialResolver::Library(_))
    }

    /// Resolves the material tag of the volume that becomes `cell`.
    pub fn resolve(&self, tag: &str, cell: i32) -> Result<i32> {
        if tag.is_empty() {
            return Err(Error::MissingMaterial { cell });
        }
        if is_void_tag(tag) {
            return Ok(MATERIAL_VOID);
        }

        match self {
            MaterialResolver::Library(lib) => {
                let entry = lib.get(tag).ok_or_else(|| Error::LibraryMaterialNotFound {
                    tag: tag.to_string(),
                })?;
                entry.mat_number().ok_or_else(|| Error::MissingMaterialNumber {
                    name: tag.to_string(),
                })
            }
            MaterialResolver::Legacy(materials) => resolve_legacy(materials, tag, cell),
        }
    }
}

fn resolve_legacy(materials: &[Material], tag: &str, cell: i32) -> Result<i32> {
    let lower = tag.to_lowercase();
    let mut matches = materials
        .iter()
        .filter(|m| m.name.to_lowercase() == lower);

    match (matches.next(), matches.next()) {
        (Some(material), None) => {
            debug!(cell, material = %material.name, id = material.id, "assigned material by name");
            Ok(material.id)
        }
        (Some(_), Some(_)) => Err(Error::AmbiguousMaterialName {
            name: tag.to_string(),
        }),
        (None, _) => {
            let id: i32 = tag.parse().map_err(|_| Error::MaterialNotFound {
                tag: tag.to_string(),
                cell,
            })?;
            debug!(cell, id, "assigned material by ID");
            Ok(id)
        }
    }
}

/// Resolves a cell temperature and returns it as `sqrt(k_B * T)`.
///
/// An explicit `temp` property wins, then the material's own default, then
/// `default_temperature`.
pub fn resolve_sqrt_kt(
    explicit: Option<&str>,
    material: &Material,
    default_temperature: f64,
    cell: i32,
) -> Result<f64> {
    let temperature = match explicit {
        Some(value) => {
            let invalid = || Error::InvalidTemperature {
                value: value.to_string(),
                cell,
            };
            let t: f64 = value.trim().parse().map_err(|_| invalid())?;
            if !t.is_finite() || t < 0.0 {
                return Err(invalid());
            }
            t
        }
        None => material.default_temperature().unwrap_or(default_temperature),
    };
    Ok(sqrt_kt(temperature))
}
