//! Core library for the catalog-tools command line application.
//!
//! The library exposes the reconciliation pipelines that power the
//! command-line interface as well as the integration tests. The modules are
//! structured to keep responsibilities narrow and composable: the matching
//! primitives live in [`catalog::tools::key`], [`catalog::tools::sizemap`],
//! and [`catalog::tools::matcher`], spreadsheet adapters under
//! [`catalog::tools::io`], file pairing in [`catalog::tools::discover`], and
//! the batch orchestration under [`catalog::tools::batch`].

pub mod catalog;

pub use catalog::tools::{
    Result, ToolError, batch, discover, error, io, key, matcher, model, sizemap,
};
