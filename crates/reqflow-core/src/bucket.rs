//! Five-minute time windows.

/// Width of one aggregation window, in seconds.
pub const BUCKET_SECONDS: i64 = 5 * 60;

/// Round an epoch-second timestamp down to the start of its 5-minute window.
///
/// Uses floor division, so negative timestamps land in the window that
/// starts at or before them. Timestamps within one window of `i64::MIN`
/// have no representable window start; request times derived from reqlogs
/// never come near that range.
pub fn bucket(t: i64) -> i64 {
    t.div_euclid(BUCKET_SECONDS) * BUCKET_SECONDS
}
