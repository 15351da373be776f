// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for mesh loading and queries.

use std::path::PathBuf;

use crate::keys::{Dimension, EntityHandle, SurfaceKey, VolumeKey};

/// Result type alias for mesh operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Numeric status codes reported alongside mesh errors.
///
/// The values are stable so callers can log or compare them without
/// matching on the full [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    IndexOutOfRange = 1,
    EntityNotFound = 4,
    MultipleEntitiesFound = 5,
    FileDoesNotExist = 7,
    Failure = 16,
}

impl ErrorCode {
    /// Returns the integer value of the code.
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

/// Errors that can occur while loading or querying a mesh model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The geometry file does not exist.
    #[error("geometry file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The geometry file exists but could not be read.
    #[error("failed to read geometry file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The geometry file is not valid.
    #[error("malformed geometry file: {0}")]
    Serialization(String),

    /// Volume key not found in the arena.
    #[error("volume not found: {0:?}")]
    VolumeNotFound(VolumeKey),

    /// Surface key not found in the arena.
    #[error("surface not found: {0:?}")]
    SurfaceNotFound(SurfaceKey),

    /// A surface query was issued with a non-surface handle.
    #[error("entity is not a surface: {0:?}")]
    NotASurface(EntityHandle),

    /// A volume lists a surface ID that the file does not define.
    #[error("volume {volume} references unknown surface {surface}")]
    UnknownSurfaceReference { volume: i32, surface: i32 },

    /// A group lists an entity ID that the file does not define.
    #[error("group '{group}' references unknown {dimension} {id}")]
    UnknownGroupMember {
        group: String,
        dimension: Dimension,
        id: i32,
    },

    /// Two entities of the same dimension share a native ID in one file.
    #[error("{dimension} ID {id} is defined more than once")]
    DuplicateGlobalId { dimension: Dimension, id: i32 },

    /// An enumeration index is past the end of its dimension.
    #[error("{dimension} index {index} is out of range")]
    IndexOutOfRange { dimension: Dimension, index: usize },

    /// A surface triangle has a non-finite coordinate.
    #[error("surface {surface} has non-finite vertex coordinates")]
    InvalidCoordinates { surface: i32 },
}

impl Error {
    /// Returns the numeric status code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::FileNotFound(_) => ErrorCode::FileDoesNotExist,
            Error::Io { .. } | Error::Serialization(_) | Error::InvalidCoordinates { .. } => {
                ErrorCode::Failure
            }
            Error::VolumeNotFound(_)
            | Error::SurfaceNotFound(_)
            | Error::NotASurface(_)
            | Error::UnknownSurfaceReference { .. }
            | Error::UnknownGroupMember { .. } => ErrorCode::EntityNotFound,
            Error::DuplicateGlobalId { .. } => ErrorCode::MultipleEntitiesFound,
            Error::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
        }
    }
}
