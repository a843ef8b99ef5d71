// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The catalog name was never registered.
    UnknownCatalog(String),

    /// The category is not among the catalog's registered categories.
    UnknownCategory { catalog: String, category: String },

    /// A carousel width, item width or gap was negative or not finite.
    InvalidDimensions(String),

    Io(String),
    Config(String),
    Catalog(String),
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::UnknownCatalog(_) => "error-unknown-catalog",
            Error::UnknownCategory { .. } => "error-unknown-category",
            Error::InvalidDimensions(_) => "error-invalid-dimensions",
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Catalog(_) => "error-catalog-file",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCatalog(name) => write!(f, "Unknown catalog: {}", name),
            Error::UnknownCategory { catalog, category } => {
                write!(f, "Unknown category '{}' in catalog '{}'", category, catalog)
            }
            Error::InvalidDimensions(e) => write!(f, "Invalid dimensions: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
