//! # orb-core
//!
//! Data model for orb schema documents: the parse [`Tree`](types::Tree) of
//! directives and tables, plus the validated names its entities carry.
//!
//! The model is produced by `orb-dsl` and handed to downstream generators.
//! Every type is plain data: once a parse returns, nothing here is mutated
//! or shared behind the caller's back.

pub mod error;
pub mod types;

pub use error::ModelError;
