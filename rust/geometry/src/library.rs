// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material library bundled with a geometry file.
//!
//! The library lives in the `material_library` section of the geometry file
//! and maps material names to definitions. Each definition carries a
//! `mat_number` metadata entry holding the material ID used by cells; the
//! importer may rewrite it when material IDs are renumbered.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::material::Material;

/// Metadata key holding the material ID.
pub const MAT_NUMBER_KEY: &str = "mat_number";

/// One material definition in the library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryMaterial {
    /// Display name; the library key is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Density in g/cm3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    /// Nuclide names with atom fractions.
    #[serde(default)]
    pub nuclides: BTreeMap<String, f64>,
    /// Default temperature in K.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl LibraryMaterial {
    /// Returns the material ID stored in the metadata.
    ///
    /// Both JSON numbers and numeric strings are accepted.
    pub fn mat_number(&self) -> Option<i32> {
        match self.metadata.get(MAT_NUMBER_KEY)? {
            serde_json::Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Overwrites the material ID stored in the metadata.
    pub fn set_mat_number(&mut self, id: i32) {
        self.metadata.insert(
            MAT_NUMBER_KEY.to_string(),
            serde_json::Value::String(id.to_string()),
        );
    }
}

#[derive(Deserialize)]
struct LibrarySection {
    #[serde(default)]
    material_library: BTreeMap<String, LibraryMaterial>,
}

/// Name-keyed material definitions, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialLibrary {
    entries: BTreeMap<String, LibraryMaterial>,
}

impl MaterialLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the library section of a geometry file.
    ///
    /// A file without a library section yields an empty library.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| Error::MaterialLibrary {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let section: LibrarySection =
            serde_json::from_str(&json).map_err(|e| Error::MaterialLibrary {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self {
            entries: section.material_library,
        })
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, material: LibraryMaterial) {
        self.entries.insert(key.into(), material);
    }

    /// Returns the entry for a name.
    pub fn get(&self, key: &str) -> Option<&LibraryMaterial> {
        self.entries.get(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the library has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LibraryMaterial)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Assigns sequential material IDs in name order, starting at `first_id`.
    pub fn renumber(&mut self, first_id: i32) -> Result<()> {
        let mut next = Some(first_id);
        for material in self.entries.values_mut() {
            let id = next.ok_or(Error::IdSpaceExhausted { kind: "material" })?;
            material.set_mat_number(id);
            next = id.checked_add(1);
        }
        Ok(())
    }

    /// Converts every entry into a [`Material`].
    pub fn to_materials(&self) -> Result<Vec<Material>> {
        self.iter()
            .map(|(key, entry)| {
                let id = entry.mat_number().ok_or_else(|| Error::MissingMaterialNumber {
                    name: key.to_string(),
                })?;
                Ok(Material {
                    id,
                    name: entry.name.clone().unwrap_or_else(|| key.to_string()),
                    density: entry.density,
                    nuclides: entry
                        .nuclides
                        .iter()
                        .map(|(n, ao)| (n.clone(), *ao))
                        .collect(),
                    temperature: entry.temperature,
                })
            })
            .collect()
    }

    /// Renders the library as a `<materials>` XML document.
    ///
    /// Each entry becomes a `<material>` with its ID and name, an optional
    /// `<density>` and one `<nuclide>` per component given as an atom fraction.
    pub fn to_xml(&self) -> Result<String> {
        let mut out = String::from("<?xml version=\"1.0\"?>\n<materials>\n");
        for material in self.to_materials()? {
            // Writing to a String cannot fail
            let _ = writeln!(
                out,
                "  <material id=\"{}\" name=\"{}\">",
                material.id,
                escape_xml(&material.name)
            );
            if let Some(density) = material.density {
                let _ = writeln!(out, "    <density value=\"{density}\" units=\"g/cm3\" />");
            }
            for (nuclide, ao) in &material.nuclides {
                let _ = writeln!(
                    out,
                    "    <nuclide name=\"{}\" ao=\"{ao}\" />",
                    escape_xml(nuclide)
                );
            }
            out.push_str("  </material>\n");
        }
        out.push_str("</materials>");
        Ok(out)
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> MaterialLibrary {
        let json = r#"{
            "material_library": {
                "water": {
                    "density": 1.0,
                    "nuclides": { "H1": 2.0, "O16": 1.0 },
                    "metadata": { "mat_number": 4 }
                },
                "steel": {
                    "name": "Stainless <304>",
                    "density": 7.9,
                    "nuclides": { "Fe56": 1.0 },
                    "temperature": 600.0,
                    "metadata": { "mat_number": "2" }
                }
            }
        }"#;
        let section: LibrarySection = serde_json::from_str(json).unwrap();
        MaterialLibrary {
            entries: section.material_library,
        }
    }

    #[test]
    fn mat_number_accepts_numbers_and_strings() {
        let lib = library();
        assert_eq!(lib.get("water").unwrap().mat_number(), Some(4));
        assert_eq!(lib.get("steel").unwrap().mat_number(), Some(2));
        assert_eq!(LibraryMaterial::default().mat_number(), None);
    }

    #[test]
    fn renumber_follows_name_order() {
        let mut lib = library();
        lib.renumber(10).unwrap();
        assert_eq!(lib.get("steel").unwrap().mat_number(), Some(10));
        assert_eq!(lib.get("water").unwrap().mat_number(), Some(11));
    }

    #[test]
    fn renumber_stops_at_the_id_limit() {
        let mut lib = library();
        lib.renumber(i32::MAX - 1).unwrap();
        assert_eq!(lib.get("water").unwrap().mat_number(), Some(i32::MAX));

        let err = library().renumber(i32::MAX).unwrap_err();
        assert!(matches!(err, Error::IdSpaceExhausted { kind: "material" }));
    }

    #[test]
    fn converts_to_materials() {
        let materials = library().to_materials().unwrap();
        assert_eq!(materials.len(), 2);

        let steel = &materials[0];
        assert_eq!(steel.id, 2);
        assert_eq!(steel.name, "Stainless <304>");
        assert_eq!(steel.default_temperature(), Some(600.0));

        let water = &materials[1];
        assert_eq!(water.name, "water");
        assert_eq!(water.nuclides.len(), 2);
    }

    #[test]
    fn missing_mat_number_fails() {
        let mut lib = MaterialLibrary::new();
        lib.insert("air", LibraryMaterial::default());
        let err = lib.to_materials().unwrap_err();
        assert!(matches!(err, Error::MissingMaterialNumber { ref name } if name == "air"));
    }

    #[test]
    fn xml_document_layout() {
        let xml = library().to_xml().unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\"?>\n<materials>\n"));
        assert!(xml.ends_with("</materials>"));
        assert!(xml.contains("<material id=\"2\" name=\"Stainless &lt;304&gt;\">"));
        assert!(xml.contains("<nuclide name=\"Fe56\" ao=\"1\" />"));
        assert!(xml.contains("<density value=\"7.9\" units=\"g/cm3\" />"));
        assert_eq!(xml.matches("<material ").count(), 2);
    }

    #[test]
    fn missing_section_is_empty() {
        let section: LibrarySection = serde_json::from_str(r#"{ "volumes": [] }"#).unwrap();
        assert!(section.material_library.is_empty());
    }
}
