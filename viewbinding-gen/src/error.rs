use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while scanning a `.ui` document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed markup at byte {position}: {source}")]
    Xml {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    #[error("invalid attribute at byte {position}: {source}")]
    Attribute {
        position: usize,
        #[source]
        source: quick_xml::events::attributes::AttrError,
    },

    #[error("element <{name}> opened at byte {position} is never closed")]
    Unclosed { name: String, position: usize },

    #[error("document is empty or contains only whitespace")]
    Empty,
}

/// Failures turning one document into a header.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to render header")]
    Render(#[from] std::fmt::Error),
}

/// Invalid command line configuration. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "application-id '{0}' is not valid. It must be in the format com_example_AppName"
    )]
    InvalidApplicationId(String),

    #[error("--directory '{}' is not a valid directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("--output-directory '{}' is not a valid directory", .0.display())]
    OutputNotADirectory(PathBuf),

    #[error("could not create output directory '{}'", .path.display())]
    CreateOutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures processing a single input file. The run carries on after these.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("error reading file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error parsing XML file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("error rendering {}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: std::fmt::Error,
    },

    #[error("error writing to file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    pub(crate) fn from_generate(path: PathBuf, err: Error) -> FileError {
        match err {
            Error::Parse(source) => FileError::Parse { path, source },
            Error::Render(source) => FileError::Render { path, source },
        }
    }
}
