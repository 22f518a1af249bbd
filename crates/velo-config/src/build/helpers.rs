use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_assets_dir() -> String {
    "assets".to_string()
}

pub(crate) fn default_chunk_size_warning_limit() -> u64 {
    500
}

pub(crate) fn default_passes() -> u32 {
    1
}
