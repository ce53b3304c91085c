use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the buddy directory - checks for a local .buddy first, then falls
/// back to the global ~/.buddy
pub fn get_buddy_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_buddy(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".buddy"))
}

/// Find a local .buddy directory by walking up the directory tree
fn find_local_buddy(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let buddy_dir = current.join(".buddy");
        if buddy_dir.exists() && buddy_dir.is_dir() {
            return Some(buddy_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the buddy directory exists
pub fn ensure_buddy_dir() -> Result<PathBuf> {
    let dir = get_buddy_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .buddy directory in the current directory
pub fn init_local_buddy() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let buddy_dir = current_dir.join(".buddy");

    if buddy_dir.exists() {
        anyhow::bail!("Buddy directory already exists: {}", buddy_dir.display());
    }

    fs::create_dir_all(&buddy_dir)
        .with_context(|| format!("Failed to create directory: {}", buddy_dir.display()))?;

    Ok(buddy_dir)
}

/// Get path to the task snapshot file
pub fn snapshot_file() -> Result<PathBuf> {
    Ok(ensure_buddy_dir()?.join("study_tasks.json"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_buddy_dir() {
        let dir = get_buddy_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".buddy"));
    }

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        let content = "Hello, world!";
        atomic_write(&test_file, content).unwrap();

        let read_content = fs::read_to_string(&test_file).unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        atomic_write(&test_file, "first").unwrap();
        atomic_write(&test_file, "second").unwrap();

        let read_content = fs::read_to_string(&test_file).unwrap();
        assert_eq!(read_content, "second");
    }
}
