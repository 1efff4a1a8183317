use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("invalid fixture archive: {0}")]
    InvalidArchive(String),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
