use velo_config::presets;

/// Parse and validate a `--preset` name.
///
/// # Errors
///
/// Returns an error message naming the known presets if `s` is not one.
pub fn parse_preset(s: &str) -> Result<String, String> {
    if presets::by_name(s).is_some() {
        Ok(s.to_string())
    } else {
        Err(format!(
            "Unknown preset '{}' (available: {})",
            s,
            presets::NAMES.join(", ")
        ))
    }
}
