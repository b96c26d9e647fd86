use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::model::task::Task;
use crate::repository::traits::TaskStore;

const DEFAULT_FILE_NAME: &str = "tasks.json";

/// Keeps the task list as a flat JSON array on disk. The backing file
/// lives under the given base directory, or `~/.taskpad` by default,
/// and is created with an empty array on first run so a fresh install
/// loads an empty list rather than failing.
#[derive(Clone)]
pub struct FileTaskStore {
    file_path: PathBuf,
}

impl FileTaskStore {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("could not determine home directory"))?;
                home_dir.join(".taskpad")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<Task>::new())?;
            writer.flush()?;
        }

        Ok(FileTaskStore { file_path: path })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl TaskStore for FileTaskStore {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no task file, starting empty");
            return Ok(Vec::new());
        }
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let tasks: Vec<Task> = serde_json::from_reader(reader)?;
        debug!(count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, tasks)?;
        writer.flush()?;
        debug!(count = tasks.len(), "saved tasks");
        Ok(())
    }
}
