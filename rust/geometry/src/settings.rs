// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run settings and physical constants used during geometry import.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Boltzmann constant in eV/K.
pub const K_BOLTZMANN: f64 = 8.617333262e-5;

/// Material ID meaning "no material" (vacuum).
pub const MATERIAL_VOID: i32 = -1;

/// Name of the geometry file inside the input directory.
pub const DAGMC_FILENAME: &str = "dagmc.json";

/// Run settings consulted by the importer.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the input files.
    pub path_input: PathBuf,
    /// Temperature in K used when neither the volume nor its material sets one.
    pub temperature_default: f64,
    /// Whether per-cell overlap counters are allocated.
    pub check_overlaps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            path_input: PathBuf::new(),
            temperature_default: 293.6,
            check_overlaps: false,
        }
    }
}

impl Settings {
    /// Load settings from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            path_input: std::env::var("DAGMC_LITE_PATH_INPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.path_input),
            temperature_default: std::env::var("DAGMC_LITE_TEMPERATURE_DEFAULT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.temperature_default),
            check_overlaps: std::env::var("DAGMC_LITE_CHECK_OVERLAPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.check_overlaps),
        }
    }

    /// Returns the default geometry file path, checking that it exists.
    pub fn dagmc_file(&self) -> Result<PathBuf> {
        let filename = self.path_input.join(DAGMC_FILENAME);
        if !Path::new(&filename).exists() {
            return Err(Error::GeometryFileMissing(filename));
        }
        Ok(filename)
    }
}

/// Converts a temperature in K to the stored `sqrt(kT)` form.
pub fn sqrt_kt(temperature: f64) -> f64 {
    (K_BOLTZMANN * temperature).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_relative_eq!(settings.temperature_default, 293.6);
        assert!(!settings.check_overlaps);
    }

    #[test]
    fn sqrt_kt_of_room_temperature() {
        assert_relative_eq!(sqrt_kt(293.6), (8.617333262e-5_f64 * 293.6).sqrt());
        assert_relative_eq!(sqrt_kt(0.0), 0.0);
    }

    #[test]
    fn missing_geometry_file() {
        let settings = Settings {
            path_input: PathBuf::from("/nonexistent/input"),
            ..Settings::default()
        };
        let err = settings.dagmc_file().unwrap_err();
        assert!(matches!(err, Error::GeometryFileMissing(_)));
        assert!(err.to_string().contains("dagmc.json"));
    }
}
