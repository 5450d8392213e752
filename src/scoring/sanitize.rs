/// Lenient rating parse: anything that is not a non-negative integer counts as 0.
///
/// Values above the 0-4 scale are kept so an out-of-domain total still lands in
/// the highest band instead of being clipped.
pub fn sanitize_rating(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

/// True when `raw` would be replaced by the lenient default.
pub fn is_malformed_rating(raw: &str) -> bool {
    raw.trim().parse::<u32>().is_err()
}
