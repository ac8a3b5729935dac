//! Runtime: ties the stages into a complete run.
//!
//! This module provides:
//! - The mapping pipeline (dataset → map entries)
//! - JSON document loading and writing

pub mod io;
pub mod pipeline;
