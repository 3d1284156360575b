//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that ties an error kind to the expression it came from.
//!
//! Expressions have no source text of their own, so an [`Error`] carries the rendered form of the
//! expression that failed to build (or differentiate), and spans into that rendering.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The source identifier used for the rendered expression in reports.
pub const SRC_ID: &str = "expr";

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error kind as [`Any`], so callers can recover the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'_, (&'a str, Range<usize>)>;
}

/// An error associated with regions of a rendered expression that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The rendered expression that the spans index into.
    pub src: String,

    /// The regions of the rendered expression that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given rendered expression, spans and kind.
    pub fn new(src: impl Into<String>, spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { src: src.into(), spans, kind: Box::new(kind) }
    }

    /// Returns true if the error is of the given kind.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the error kind as `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report(&self) -> Report<'_, (&'static str, Range<usize>)> {
        self.kind.build_report(SRC_ID, &self.spans)
    }

    /// Writes the report for this error to the given writer.
    pub fn write_report<W: io::Write>(&self, writer: W) -> io::Result<()> {
        self.build_report()
            .write((SRC_ID, Source::from(self.src.as_str())), writer)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self) -> io::Result<()> {
        self.build_report()
            .eprint((SRC_ID, Source::from(self.src.as_str())))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in `{}`", self.kind.message(), self.src)
    }
}

impl std::error::Error for Error {}
