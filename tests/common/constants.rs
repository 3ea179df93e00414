//! Shared constants for end-to-end tests
//!
//! Values describe the sample catalog the server seeds on first run.

#![allow(dead_code)]

/// Timeout for the server to become ready after spawn
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

/// Timeout for each HTTP request made by the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Seeded catalog
// ============================================================================

/// "Midnight City" by M83, the most played song
pub const MIDNIGHT_CITY_ID: u64 = 1;
pub const MIDNIGHT_CITY_PLAYS: u64 = 245;

/// "Levitating" by Dua Lipa
pub const LEVITATING_ID: u64 = 3;
pub const LEVITATING_PLAYS: u64 = 167;

/// "Heat Waves" by Glass Animals
pub const HEAT_WAVES_ID: u64 = 6;
pub const HEAT_WAVES_PLAYS: u64 = 178;

/// An id no seeded song has
pub const UNKNOWN_SONG_ID: u64 = 404;

pub const SEEDED_SONGS_COUNT: u64 = 6;
pub const SEEDED_TOTAL_PLAYS: u64 = 1065;
pub const SEEDED_TOTAL_DURATION: &str = "1:45:20";
