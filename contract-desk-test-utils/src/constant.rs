//! Shared constants for test fixtures.

/// Plain-text password given to every user inserted by the fixtures.
///
/// Use it when a test needs to log in as a fixture user.
pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// Month key used by royalty fixtures when a test doesn't care about the month.
pub static TEST_MONTH: &str = "2025-01";
