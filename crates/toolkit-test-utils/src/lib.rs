//! Shared test utilities for the ai-toolkit workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`](project::TestProject) builder: a project
//!   directory with a sibling shared root

pub mod project;

pub use project::TestProject;
