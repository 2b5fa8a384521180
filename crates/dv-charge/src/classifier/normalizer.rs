/// Lower-case copy of the incident text. Whitespace and punctuation are left untouched.
pub(crate) fn normalize(raw: &str) -> String {
    raw.to_lowercase()
}
