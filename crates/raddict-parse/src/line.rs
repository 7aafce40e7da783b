//! Line preprocessing for dictionary sources.

/// Strip the trailing `#` comment from one raw line and split what is left
/// into whitespace-delimited fields.
///
/// The strip is lexical: everything from the first `#` onward is dropped,
/// with no quoting or escaping rules (the dictionary format has neither).
/// Blank and comment-only lines come back as an empty vector.
pub fn fields(raw: &str) -> Vec<&str> {
    let line = raw.trim();
    let line = match line.find('#') {
        Some(at) => &line[..at],
        None => line,
    };
    line.split_whitespace().collect()
}
