//! Service layer for state that outlives a single command.
//!
//! The core engine never touches the file system. These services are the
//! storage collaborator: they keep the currently displayed color set and the
//! saved favorites in JSON files next to the configuration.

pub mod favorites;
pub mod session;

// Re-export commonly used types and functions
pub use favorites::{Favorites, FavoritesService};
pub use session::{Session, SessionService};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes `content` to `path` through a temp file and rename, creating the
/// parent directory if needed. The target is never left half-written.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context(format!(
            "Failed to create directory: {}",
            parent.display()
        ))?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    fs::write(temp_path, content).context(format!(
        "Failed to write temp file: {}",
        temp_path.display()
    ))?;

    fs::rename(temp_path, path).context(format!(
        "Failed to rename temp file to: {}",
        path.display()
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_parent_and_replaces() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("state.json");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!temp_dir.path().join("a/b/state.json.tmp").exists());
    }
}
