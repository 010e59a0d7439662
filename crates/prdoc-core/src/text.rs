use unicode_normalization::UnicodeNormalization;

/// Canonicalize free text before hashing.
///
/// Goals:
/// - Deterministic across platforms (normalize CRLF -> LF)
/// - No fingerprint churn from trailing whitespace left by editors
/// - Composed and decomposed Unicode compare equal (NFC)
///
/// Notes:
/// - Internal whitespace, punctuation, casing and Markdown are untouched.
/// - Leading whitespace is kept (indentation is meaningful in Markdown).
pub fn canonicalize_text(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");

    // Preserve final newline presence as-is, so `lines()` is not usable here.
    let mut out = String::with_capacity(normalized.len());
    for segment in normalized.split_inclusive('\n') {
        if let Some(stripped) = segment.strip_suffix('\n') {
            out.push_str(stripped.trim_end_matches([' ', '\t']));
            out.push('\n');
        } else {
            out.push_str(segment.trim_end_matches([' ', '\t']));
        }
    }

    out.nfc().collect()
}
