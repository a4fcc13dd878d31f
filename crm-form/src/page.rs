//! Loading of a [`Page`] description.

use std::{io, path::Path};

use derive_more::{Display, Error, From};
use service::domain::Page;

/// Loads the [`Page`] described by the JSON file at the provided `path`.
///
/// # Errors
///
/// If the file cannot be read or doesn't describe a [`Page`].
pub async fn load(path: impl AsRef<Path>) -> Result<Page, LoadError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Error of [`load`]ing a [`Page`].
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
    /// File cannot be read.
    #[display("Failed to read page: {_0}")]
    Read(io::Error),

    /// File is not a JSON [`Page`].
    #[display("Failed to decode page: {_0}")]
    Decode(serde_json::Error),
}
