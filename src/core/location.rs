/// Coarse textual proximity between two free-text locations (0-100)
///
/// Locations are conventionally `"City, State"`. No geocoding is done:
/// 1. Same string (case-insensitive) = 100
/// 2. Both have a region segment and the last segments agree = 80
/// 3. Any segment shared verbatim = 60
/// 4. Otherwise = 40, since remote sponsorship is still viable
pub fn location_score(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 100.0;
    }

    let a_parts = split_segments(&a);
    let b_parts = split_segments(&b);

    if a_parts.len() >= 2 && b_parts.len() >= 2 && a_parts.last() == b_parts.last() {
        return 80.0;
    }

    if a_parts.iter().any(|part| b_parts.contains(part)) {
        return 60.0;
    }

    40.0
}

#[inline]
fn split_segments(location: &str) -> Vec<&str> {
    location.split(',').map(str::trim).collect()
}
