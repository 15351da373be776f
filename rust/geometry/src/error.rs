// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for geometry import
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a model from a geometry file.
///
/// Every variant is fatal for the run: the caller is expected to report the
/// message and stop.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Must specify the id of the DAGMC universe")]
    MissingUniverseId,

    #[error("Must specify a file for the DAGMC universe")]
    MissingFilename,

    #[error("Geometry DAGMC file '{}' does not exist!", .0.display())]
    GeometryFileMissing(PathBuf),

    #[error("Mesh library error (code {code}): {source}")]
    Mesh {
        code: i32,
        #[source]
        source: dagmc_lite_topology::Error,
    },

    #[error("Failed to read material library from '{}': {message}", path.display())]
    MaterialLibrary { path: PathBuf, message: String },

    #[error("Material '{name}' in the material library has no valid mat_number")]
    MissingMaterialNumber { name: String },

    #[error("This DAGMC universe does not use a material library")]
    NoMaterialLibrary,

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cell ID {id} exists in both DAGMC Universe {universe} and the CSG geometry. DAGMC cell IDs: {ids}")]
    CellIdCollision { id: i32, universe: i32, ids: String },

    #[error("Surface ID {id} exists in both DAGMC Universe {universe} and the CSG geometry. DAGMC surface IDs: {ids}")]
    SurfaceIdCollision { id: i32, universe: i32, ids: String },

    #[error("Cell ID {id} already exists in the model")]
    DuplicateCellId { id: i32 },

    #[error("Surface ID {id} already exists in the model")]
    DuplicateSurfaceId { id: i32 },

    #[error("Material ID {id} already exists in the model")]
    MaterialIdCollision { id: i32 },

    #[error("Universe ID {id} is defined more than once")]
    UniverseIdCollision { id: i32 },

    #[error("Volume {cell} has no material assignment.")]
    MissingMaterial { cell: i32 },

    #[error("More than one material found with name '{name}'. Please ensure materials have unique names if using this property to assign materials.")]
    AmbiguousMaterialName { name: String },

    #[error("No material '{tag}' found for volume (cell) {cell}")]
    MaterialNotFound { tag: String, cell: i32 },

    #[error("Material with value '{tag}' not found in the material library")]
    LibraryMaterialNotFound { tag: String },

    #[error("Material {id} assigned to cell {cell} does not exist")]
    UnknownMaterialId { id: i32, cell: i32 },

    #[error("Invalid temperature '{value}' on volume (cell) {cell}")]
    InvalidTemperature { value: String, cell: i32 },

    #[error("Periodic boundary condition not supported in DAGMC (surface {surface}).")]
    PeriodicBoundaryUnsupported { surface: i32 },

    #[error("Unknown boundary condition \"{value}\" specified on surface {surface}")]
    UnknownBoundaryCondition { value: String, surface: i32 },

    #[error("Volumes {first} and {second} are both tagged as graveyard")]
    DuplicateGraveyard { first: i32, second: i32 },

    #[error("No {kind} IDs are left above the highest existing one")]
    IdSpaceExhausted { kind: &'static str },

    #[error("Cannot condense an empty ID set")]
    EmptyIdSet,
}

impl From<dagmc_lite_topology::Error> for Error {
    fn from(source: dagmc_lite_topology::Error) -> Self {
        Error::Mesh {
            code: source.code().as_i32(),
            source,
        }
    }
}
