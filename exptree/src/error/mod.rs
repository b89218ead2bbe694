//! Errors that can occur while building an expression tree.
//!
//! Every failure is reported as an [`Error`], which pairs the regions of the input that caused
//! it with one of the kinds in [`kind`]. Use [`Error::is`] or [`Error::downcast_ref`] to find out
//! which kind of error occurred.

pub mod kind;

pub use exptree_error::{Error, ErrorKind};
