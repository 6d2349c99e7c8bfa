//! Fatal errors. Each one ends the session with a message and exit code 1.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::repo::DetectionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not a Git repository root ({} not found)", expected.display())]
    NotARepository { expected: PathBuf },

    #[error(transparent)]
    Detection(#[from] DetectionError),

    #[error("terminal failure: {0}")]
    Terminal(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
