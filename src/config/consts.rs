// src/config/consts.rs

// Persisted document
pub const DEFAULT_DOCUMENT: &str = "EP_Leaderboard.json";
pub const DOCUMENT_ENV: &str = "EP_LEADERBOARD_DOCUMENT";

// Local logs
pub const LOG_FILE: &str = ".store/debug.log";

// Scrape
pub const BADGE_CLASS: &str = "energy-points-badge";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const FETCH_TIMEOUT_SECS: u64 = 10;

// Concurrency
pub const WORKERS: usize = 1; // sequential unless asked otherwise
pub const MAX_WORKERS: usize = 8;
pub const REQUEST_PAUSE_MS: u64 = 0;
pub const JITTER_MS: u64 = 50; // extra 0..50 ms, worker pool only

// Table
pub const HEADERS: [&str; 4] = ["No.", "User", "Energy Points", "Points Behind"];
pub const DEFAULT_EXPORT_FILE: &str = "leaderboard.csv";
