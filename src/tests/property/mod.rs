//! Property-based tests for the sentence synthesis engine
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Test Modules
//!
//! - `generation_props`: Tests for the generation pipeline
//!   - Resolved templates never contain `[sentence]`
//!   - Disabled recursion degrades every sentence slot to a noun slot
//!   - Assembly without placeholders is capitalization-only
//!   - Word selection covers every placeholder, and only adds entries
//!   - Future conjugation always maps the copula to "will be"
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable.
