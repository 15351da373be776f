// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-universe import parameters as supplied by the configuration parser.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Raw parameters of one `<dagmc>` universe entry.
///
/// All fields are optional at this level; [`DagUniverseConfig::validate`]
/// enforces the required ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DagUniverseConfig {
    pub id: Option<i32>,
    pub filename: Option<PathBuf>,
    pub auto_geom_ids: Option<bool>,
    pub auto_mat_ids: Option<bool>,
}

/// Validated universe parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct UniverseParams {
    pub id: i32,
    pub filename: PathBuf,
    /// Renumber cells and surfaces instead of keeping native IDs.
    pub adjust_geometry_ids: bool,
    /// Renumber material library entries instead of keeping their IDs.
    pub adjust_material_ids: bool,
}

impl DagUniverseConfig {
    /// Checks required fields and applies defaults.
    pub fn validate(&self) -> Result<UniverseParams> {
        let id = self.id.ok_or(Error::MissingUniverseId)?;
        let filename = self.filename.clone().ok_or(Error::MissingFilename)?;
        Ok(UniverseParams {
            id,
            filename,
            adjust_geometry_ids: self.auto_geom_ids.unwrap_or(false),
            adjust_material_ids: self.auto_mat_ids.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_false() {
        let config: DagUniverseConfig =
            serde_json::from_str(r#"{ "id": 3, "filename": "model.json" }"#).unwrap();
        let params = config.validate().unwrap();
        assert_eq!(params.id, 3);
        assert_eq!(params.filename, PathBuf::from("model.json"));
        assert!(!params.adjust_geometry_ids);
        assert!(!params.adjust_material_ids);
    }

    #[test]
    fn material_flag_sets_material_adjustment() {
        let config: DagUniverseConfig = serde_json::from_str(
            r#"{ "id": 1, "filename": "m.json", "auto_mat_ids": true }"#,
        )
        .unwrap();
        let params = config.validate().unwrap();
        assert!(params.adjust_material_ids);
        assert!(!params.adjust_geometry_ids);
    }

    #[test]
    fn missing_id() {
        let config = DagUniverseConfig {
            filename: Some(PathBuf::from("m.json")),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::MissingUniverseId)));
    }

    #[test]
    fn missing_filename() {
        let config = DagUniverseConfig {
            id: Some(1),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::MissingFilename)));
    }
}
