use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gdydoc operations
#[derive(Error, Diagnostic, Debug)]
pub enum DocError {
    #[error("IO error: {0}")]
    #[diagnostic(code(gdydoc::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(gdydoc::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(gdydoc::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Cannot have GDY games with the same names: {name}")]
    #[diagnostic(
        code(gdydoc::duplicate_name),
        help("Every Environment.Name must be unique across the games directory")
    )]
    DuplicateName { name: String },

    #[error("Engine error: {message}")]
    #[diagnostic(code(gdydoc::engine))]
    Engine {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(gdydoc::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, DocError>;
