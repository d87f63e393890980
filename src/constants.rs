//! Application constants for the triage engine
//!
//! This module contains the default values and fixed mappings used
//! throughout ingestion and normalization.

// =============================================================================
// Input Classification
// =============================================================================

/// File extensions handled by the delimited-text row reader
pub const DELIMITED_EXTENSIONS: &[&str] = &["csv"];

/// File extensions handled by the spreadsheet row reader
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm"];

// =============================================================================
// Header Handling
// =============================================================================

/// Placeholder assigned to blank column headers before dedupe suffixing
pub const BLANK_HEADER_PLACEHOLDER: &str = "COL";

// =============================================================================
// Timestamp Handling
// =============================================================================

/// IANA zone assumed for timestamps that carry no offset information
pub const DEFAULT_ASSUME_TZ: &str = "America/New_York";
