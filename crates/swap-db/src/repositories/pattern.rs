//! Helpers for building SQL `LIKE` patterns

/// `%term%` with `\`, `%` and `_` escaped (Postgres' default LIKE escape is `\`)
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
