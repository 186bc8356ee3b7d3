//! Test utilities and helpers for the sift crates.
//!
//! This crate provides:
//! - Data generation for sequences with controlled sortedness and duplicates
//! - Reference ("oracle") implementations to check search results against
//!
//! # Usage
//!
//! This crate is intended for use as a dev-dependency of the sift-* crates.

pub mod data_gen;
pub mod oracle;
