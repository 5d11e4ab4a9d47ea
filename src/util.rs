use chrono::{DateTime, Local};
use std::path::Path;

/// Short name of an icon file for text rendering ("icons/Japan.svg" -> "Japan").
pub fn icon_label(icon: &Path) -> String {
    icon.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn format_issued_at(at: &DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}
