//! Test suites for the sentence synthesis engine.
//!
//! Unit tests live next to the code they cover; this tree holds the
//! cross-module suites: property-based invariants and end-to-end pipeline
//! tests over real vocabulary files.

mod integration;
mod property;
