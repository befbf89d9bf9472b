//! Depgraph - build and inspect dependency graphs.
//!
//! This crate provides the `depgraph` CLI and the manifest loading it is built
//! on. The graph itself lives in [`depgraph_core`].

#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
