use crate::domain::Task;
use anyhow::{Context, Result};
use std::path::Path;

/// Load the task snapshot. A missing file means an empty list; the format
/// is an opaque local artifact with no compatibility guarantees.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Vec<Task>> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    let tasks: Vec<Task> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;
    Ok(tasks)
}

/// Save the full task list, overwriting any previous snapshot
pub fn save_snapshot<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_snapshot_is_empty() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("study_tasks.json");

        let tasks = load_snapshot(&path).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("study_tasks.json");

        let mut tasks = vec![
            Task::new("Read ch.1").unwrap(),
            Task::new("Write notes").unwrap(),
        ];
        tasks[0].completed = true;

        save_snapshot(&path, &tasks).unwrap();
        let loaded = load_snapshot(&path).unwrap();

        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("study_tasks.json");

        save_snapshot(&path, &[Task::new("old").unwrap()]).unwrap();
        save_snapshot(&path, &[]).unwrap();

        let loaded = load_snapshot(&path).unwrap();
        assert!(loaded.is_empty());
    }
}
