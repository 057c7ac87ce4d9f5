use crate::domain::storage::Storage;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

impl Storage for FileSystemStore {
    fn save_report(&self, name: &str, lines: &[String]) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;

        let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        fs::write(self.path_for(name), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(dir.path().join("data"));

        let lines = vec!["1   first".to_string(), "2   second".to_string()];
        store.save_report("rankings.txt", &lines).unwrap();

        let written = fs::read_to_string(dir.path().join("data/rankings.txt")).unwrap();
        assert_eq!(written, "1   first\n2   second\n");
    }

    #[test]
    fn overwrites_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());

        store.save_report("out.txt", &["old".to_string()]).unwrap();
        store.save_report("out.txt", &[]).unwrap();

        assert_eq!(fs::read_to_string(store.path_for("out.txt")).unwrap(), "");
    }
}
