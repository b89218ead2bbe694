//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs a kind with the regions of source it points at.

// lets `#[derive(ErrorKind)]` refer to this crate by name in its own tests
extern crate self as exptree_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::Rgb(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Display + Send + Sync {
    /// Returns the error as a [`dyn Any`](Any), so it can be downcast to its concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the kind of this error as a `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns true if the kind of this error is a `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to the given writer, using `input` as the source code
    /// the spans point into.
    pub fn write_report(&self, src_id: &str, input: &str, writer: impl io::Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), writer)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for Error {}
