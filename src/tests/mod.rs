//! Internal test modules - whitebox tests with crate access
//!
//! These drive `TuiApp<TestBackend>` through the acceptance harness with
//! the embedded catalog, the same data a user sees with no `--data` flag.

// Harness-based acceptance tests
mod acceptance_categories;
