/// Trimmed value of a required text field, or `None` when it is absent or blank.
pub fn filled(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
