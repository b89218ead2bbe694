use exptree::Error as BuildError;
use std::io;

/// Utility enum to package errors that can occur while processing input.
#[derive(Debug)]
pub enum Error {
    /// Error that occurred while building the expression tree.
    BuildError(BuildError),

    /// Error that occurred while reading input.
    IoError(io::Error),
}

impl Error {
    /// Report this error to stderr.
    ///
    /// Build errors are printed as a report pointing into `input`; other errors are printed as a
    /// single line.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::BuildError(err) => {
                if let Err(io_err) = err.report_to_stderr("input", input) {
                    eprintln!("{}", err);
                    log::warn!("could not write report: {}", io_err);
                }
            },
            Self::IoError(err) => eprintln!("error: {}", err),
        }
    }
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        Self::BuildError(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::IoError(err)
    }
}
