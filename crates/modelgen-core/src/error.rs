use std::error::Error as _;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure category of a [`GenerateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Read,
    Parse,
    TemplateSyntax,
    Render,
    Write,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse schema {origin}: {message}")]
    Parse { origin: String, message: String },
    #[error("template syntax error in '{name}': {detail}")]
    TemplateSyntax {
        name: String,
        detail: String,
        source: tera::Error,
    },
    #[error("failed to render template '{name}': {detail}")]
    Render {
        name: String,
        detail: String,
        source: tera::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl GenerateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::FileNotFound { .. } => ErrorKind::FileNotFound,
            GenerateError::Read { .. } => ErrorKind::Read,
            GenerateError::Parse { .. } => ErrorKind::Parse,
            GenerateError::TemplateSyntax { .. } => ErrorKind::TemplateSyntax,
            GenerateError::Render { .. } => ErrorKind::Render,
            GenerateError::Write { .. } => ErrorKind::Write,
        }
    }

    /// Classify a failed read of an input file.
    pub(crate) fn from_read(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => GenerateError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => GenerateError::Read {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub(crate) fn parse(origin: impl Into<String>, message: impl ToString) -> Self {
        GenerateError::Parse {
            origin: origin.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn template_syntax(name: &str, source: tera::Error) -> Self {
        GenerateError::TemplateSyntax {
            name: name.to_string(),
            detail: describe(&source),
            source,
        }
    }

    pub(crate) fn render(name: &str, source: tera::Error) -> Self {
        GenerateError::Render {
            name: name.to_string(),
            detail: describe(&source),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        GenerateError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Tera keeps the useful part of its message in the source chain
/// ("Failed to render 'x'" wraps "Variable `y` not found ..."), so flatten it.
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        current = cause.source();
    }
    message
}
