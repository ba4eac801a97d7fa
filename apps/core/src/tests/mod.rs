//! Test Module
//!
//! Comprehensive test suite for the Archon advisor.
//!
//! ## Test Categories
//! - `advisor_tests`: classification scenarios and advisor-wide properties
//! - `ingest_tests`: document validation and text extraction

pub mod ingest_tests;
