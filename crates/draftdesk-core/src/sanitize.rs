//! File-name sanitizing for exported results.

/// Used when the configured name sanitizes down to nothing.
pub const FALLBACK_EXPORT_NAME: &str = "result";

const NAME_MAX: usize = 255;

/// Makes `name` safe as a single path component.
///
/// - Path separators, NUL, control characters and `<>:"|?*` become `_`
/// - Runs of `_` collapse to one
/// - Leading/trailing spaces, dots and underscores are trimmed
/// - Truncated to 255 bytes at a char boundary, minus room for `ext_len`
pub fn sanitize_export_name(name: &str, ext_len: usize) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if c.is_control() || matches!(c, '/' | '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*')
        {
            '_'
        } else {
            c
        };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches(|c: char| c == ' ' || c == '.' || c == '_');
    let limit = NAME_MAX.saturating_sub(ext_len);
    let mut take = trimmed.len().min(limit);
    while take > 0 && !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    let result = &trimmed[..take];
    if result.is_empty() {
        FALLBACK_EXPORT_NAME.to_string()
    } else {
        result.to_string()
    }
}
