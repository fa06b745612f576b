//! Shared test utilities for auditdiff integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Builders construct raw records and resolver maps;
//! fixtures hold static corpora of structured and legacy inputs.

#[macro_use]
pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
