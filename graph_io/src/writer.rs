//! Writing metric results.
use crate::{Error, Result};
use std::fs::Permissions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Digits after the decimal point in every result file.
pub const PRECISION: usize = 10;

/// Fixed-point, exactly ten fractional digits, no trailing newline.
pub fn format_value(value: f64) -> String {
    format!("{:.*}", PRECISION, value)
}

pub fn result_path<P: AsRef<Path>>(dir: P, metric_name: &str, id: &str) -> PathBuf {
    dir.as_ref().join(format!("{}_{}.txt", metric_name, id))
}

/// Write `value` to `<dir>/<metric_name>_<id>.txt`, replacing any previous
/// result. Returns the path written.
pub fn write_result<P: AsRef<Path>>(dir: P, metric_name: &str, id: &str, value: f64) -> Result<PathBuf> {
    let path = result_path(dir, metric_name, id);
    write_atomic(&path, format_value(value).as_bytes())?;
    Ok(path)
}

/// Writes into a temporary file next to `path` and renames it into place,
/// so `path` either keeps its old contents or holds all of `contents`.
/// A replaced file keeps its permissions, a new one gets [new_file_permissions].
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let wrap = |source: std::io::Error| Error::WriteError {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(parent).map_err(wrap)?;
    file.write_all(contents).map_err(wrap)?;
    file.flush().map_err(wrap)?;
    let permissions = match std::fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => new_file_permissions(),
    };
    if let Some(permissions) = permissions {
        file.as_file().set_permissions(permissions).map_err(wrap)?;
    }
    file.persist(path).map_err(|e| wrap(e.error))?;
    trace!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Temporary files are created `0600`; results are world-readable `0644`.
#[cfg(unix)]
pub fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
pub fn new_file_permissions() -> Option<Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn fixed_point() {
        assert_eq!(format_value(0.1), "0.1000000000");
        assert_eq!(format_value(-0.00005), "-0.0000500000");
        assert_eq!(format_value(0.0625), "0.0625000000");
        assert_eq!(format_value(2.3456789012), "2.3456789012");
        assert_eq!(format_value(1.0), "1.0000000000");
        assert_eq!(format_value(12345678.0), "12345678.0000000000");
        assert_eq!(format_value(1e-11), "0.0000000000");
    }
    #[test]
    fn never_scientific() {
        let formatted = format_value(1e20);
        assert_eq!(formatted, "100000000000000000000.0000000000");
        assert!(!format_value(3e-7).contains('e'));
    }
    #[test]
    fn result_file_name() {
        assert_eq!(
            result_path("out", "connectedness", "12"),
            PathBuf::from("out/connectedness_12.txt")
        );
    }
}
