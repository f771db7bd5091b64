//! Security limits for untrusted settings input

/// Limits applied when ingesting serialized settings values.
///
/// Settings blobs arrive from form posts and option storage and are treated
/// as untrusted input.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum serialized input length in bytes (default: 64 KiB)
    pub max_serialized_len: usize,
    /// Maximum entries per collection level (default: 10,000)
    pub max_entries: usize,
    /// Maximum nesting depth (default: 16)
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_serialized_len: 64 * 1024,
            max_entries: 10_000,
            max_depth: 16,
        }
    }
}
