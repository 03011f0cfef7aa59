/// En dash (U+2013) between title and artist. A plain hyphen does not count.
pub const TRACK_SEPARATOR: char = '–';

/// Keep the lines of a model reply that look like `Title – Artist`, in order.
pub fn extract_candidate_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| line.contains(TRACK_SEPARATOR))
        .map(str::to_string)
        .collect()
}
