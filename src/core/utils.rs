use std::fs;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Ensure directory exists.
pub fn ensure_dir(path: &Path) -> Result<(), String> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| format!("Unable to create directory {}: {}", path.display(), e))?;
    }
    #[cfg(unix)]
    {
        fs::set_permissions(path, fs::Permissions::from_mode(0o700)).ok();
    }
    Ok(())
}

/// Compute the next entry ID from the millisecond clock.
///
/// The clock value is used as-is unless an existing ID already reaches it,
/// in which case the ID is bumped past the largest one so two saves in the
/// same tick still get distinct IDs. Returns `None` once the largest ID is `u64::MAX`.
pub fn next_id(existing: impl IntoIterator<Item = u64>, now_millis: u64) -> Option<u64> {
    match existing.into_iter().max() {
        Some(max) if max >= now_millis => max.checked_add(1),
        _ => Some(now_millis),
    }
}

/// Split a comma-separated tag line into trimmed, non-empty tags.
pub fn parse_tags(line: &str) -> Vec<String> {
    line.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
