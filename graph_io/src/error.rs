use std::path::PathBuf;

/// Exit code for a missing or unreadable input file.
pub const EXIT_INPUT: i32 = 2;
/// Exit code for input that could not be parsed.
pub const EXIT_MALFORMED: i32 = 3;
/// Exit code for a failed metric computation.
pub const EXIT_COMPUTATION: i32 = 4;
/// Exit code for an output file that could not be written.
pub const EXIT_WRITE: i32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: no such file", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}:{line}: malformed line {content:?} ({reason})", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        content: String,
        reason: &'static str,
    },
    #[error("failed to write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::FileNotFound { .. } | Error::ReadError { .. } => EXIT_INPUT,
            Error::MalformedLine { .. } => EXIT_MALFORMED,
            Error::WriteError { .. } => EXIT_WRITE,
        }
    }
    pub(crate) fn malformed(path: &std::path::Path, line: usize, content: &str, reason: &'static str) -> Self {
        Error::MalformedLine {
            path: path.to_path_buf(),
            line,
            content: content.to_string(),
            reason,
        }
    }
}
