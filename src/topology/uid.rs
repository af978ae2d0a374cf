//! Glass labels: `A`..`Z` for the first 26 glasses, then the decimal index.

const LETTERS: usize = 26;

/// Label for the glass created at `index`.
///
/// ```rust
/// use glass_tower::topology::uid::get_id;
/// assert_eq!(get_id(0), "A");
/// assert_eq!(get_id(25), "Z");
/// assert_eq!(get_id(26), "26");
/// ```
pub fn get_id(index: usize) -> String {
    if index < LETTERS {
        char::from(b'A' + index as u8).to_string()
    } else {
        index.to_string()
    }
}

/// Inverse of [`get_id`]; `None` for labels it never produces.
pub fn index_of(label: &str) -> Option<usize> {
    match label.as_bytes() {
        [c @ b'A'..=b'Z'] => Some(usize::from(c - b'A')),
        _ => label
            .parse::<usize>()
            .ok()
            .filter(|&i| i >= LETTERS && label == i.to_string()),
    }
}
