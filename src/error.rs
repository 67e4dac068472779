use miette::Diagnostic;
use thiserror::Error;

/// Main error type for compo operations
#[derive(Error, Diagnostic, Debug)]
pub enum CompoError {
    #[error("IO error: {0}")]
    #[diagnostic(code(compo::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(compo::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(compo::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown character: {name}")]
    #[diagnostic(code(compo::character))]
    UnknownCharacter {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Cyclic composition: {}", .cycle.join(" -> "))]
    #[diagnostic(
        code(compo::cycle),
        help("A composition may not include itself, directly or through other compositions")
    )]
    CyclicComposition { cycle: Vec<String> },

    #[error("Output error: {message}")]
    #[diagnostic(code(compo::output))]
    Output { message: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(compo::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, CompoError>;
