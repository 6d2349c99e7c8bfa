//! Repository precondition: the prompt only runs at a repository root.
//!
//! Structure:
//! - Constants: the marker entry we look for
//! - Types: detection states (sum type) and errors
//! - Pure functions: path construction
//! - Effect functions: filesystem detection

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Entry marking a repository root. A directory normally, a file for
/// worktrees and submodules.
pub const GIT_DIR: &str = ".git";

// ============================================================================
// TYPES
// ============================================================================

/// What we found in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoState {
    /// `.git` is present.
    Root {
        /// The directory that was checked.
        root: PathBuf,
        /// Path of the `.git` entry itself.
        git_dir: PathBuf,
    },

    /// No `.git` entry in the directory.
    NotARepository {
        /// Path we expected to find.
        expected: PathBuf,
    },
}

#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("could not determine the current directory: {0}")]
    WorkingDirectory(#[source] io::Error),

    #[error("could not inspect {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

pub fn git_dir_path(dir: &Path) -> PathBuf {
    dir.join(GIT_DIR)
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Detect whether the current working directory is a repository root.
pub fn detect_repository() -> Result<RepoState, DetectionError> {
    let dir = std::env::current_dir().map_err(DetectionError::WorkingDirectory)?;
    detect_repository_at(&dir)
}

/// Detect whether `dir` is a repository root.
///
/// Separated for testability: tests point it at a temporary directory.
pub fn detect_repository_at(dir: &Path) -> Result<RepoState, DetectionError> {
    let git_dir = git_dir_path(dir);
    match std::fs::symlink_metadata(&git_dir) {
        Ok(_) => Ok(RepoState::Root {
            root: dir.to_path_buf(),
            git_dir,
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Ok(RepoState::NotARepository { expected: git_dir })
        }
        Err(source) => Err(DetectionError::Unreadable {
            path: git_dir,
            source,
        }),
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

impl std::fmt::Display for RepoState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepoState::Root { root, .. } => {
                write!(f, "Git repository ({})", root.display())
            }
            RepoState::NotARepository { expected } => {
                write!(f, "not a Git repository (expected: {})", expected.display())
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
