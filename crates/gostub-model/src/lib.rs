//! Source model for the gostub test-stub generator.
//!
//! This crate is the layer between the Go source parser and the test
//! template renderer: the parser populates one [`SourceInfo`] per analyzed
//! file, and the renderer queries it to decide which functions get a
//! generated test stub and what that stub needs.
//!
//! # Architecture
//!
//! The model is a strict ownership tree, leaves first:
//!
//! - [`TypeExpr`] — a type reference with its declaration-site modifiers
//! - [`Field`] — a named, typed slot in a parameter or result list
//! - [`Function`] — one declared function or method signature
//! - [`SourceInfo`] — the per-file aggregate, plus the selection queries
//!
//! [`SourcePath`] is an independent string utility for deriving the
//! `_test.go` destination path.
//!
//! Everything is an immutable snapshot: the parser builds it once, queries
//! read it. There is no interior mutability, so a `SourceInfo` can be shared
//! across threads freely and independent files processed in parallel with
//! zero coordination.

pub mod error;
pub mod expr;
pub mod field;
pub mod function;
pub mod paths;
pub mod source;

// Re-export the contract surface at the crate root for convenience
pub use error::ModelError;
pub use expr::TypeExpr;
pub use field::{Field, BASIC_TYPES};
pub use function::Function;
pub use paths::{SourcePath, SOURCE_SUFFIX, TEST_SUFFIX};
pub use source::{Header, Import, SourceInfo};
