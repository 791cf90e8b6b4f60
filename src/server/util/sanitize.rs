//! Free-text sanitizing applied before persistence.

/// Strips HTML tags and stray angle brackets, then trims surrounding whitespace.
///
/// A tag is anything from `<` to the next `>`. An unterminated `<` is dropped on its
/// own without swallowing the text that follows it.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        match after.find('>') {
            Some(end) => rest = &after[end + 1..],
            None => rest = after,
        }
    }
    out.push_str(rest);

    out.replace('>', "").trim().to_string()
}

/// Sanitizes an optional field, mapping strings that end up empty to `None`.
pub fn sanitize_opt(input: Option<String>) -> Option<String> {
    input.map(|s| sanitize(&s)).filter(|s| !s.is_empty())
}

/// Trims a query-string filter, dropping it when nothing is left.
pub fn non_empty(input: Option<String>) -> Option<String> {
    input
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
