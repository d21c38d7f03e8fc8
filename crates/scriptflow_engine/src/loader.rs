//! Batch file loading.
//!
//! A batch file's full text is treated as one container block. Lines are read
//! one at a time and joined without a separator, so a command may continue on
//! the next line and commands are told apart only by the command separator.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use scriptflow_foundation::{Error, Result};

/// Loads the text of a batch file.
pub trait BatchLoader {
    /// Returns the text stored at `path`.
    ///
    /// # Errors
    /// Returns [`ErrorKind::FileNotFound`](scriptflow_foundation::ErrorKind::FileNotFound)
    /// if the text cannot be read.
    fn load(&self, path: &str) -> Result<String>;
}

/// Reads batch files from the file system.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsLoader;

impl BatchLoader for FsLoader {
    fn load(&self, path: &str) -> Result<String> {
        let file =
            File::open(Path::new(path)).map_err(|e| Error::file_not_found(path, e.to_string()))?;

        let mut text = String::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| Error::file_not_found(path, e.to_string()))?;
            text.push_str(&line);
        }
        Ok(text)
    }
}

/// Serves batch files from memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    files: HashMap<String, String>,
}

impl MemoryLoader {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `text` under `path`.
    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }
}

impl BatchLoader for MemoryLoader {
    fn load(&self, path: &str) -> Result<String> {
        self.files
            .get(path)
            .map(|text| text.lines().collect())
            .ok_or_else(|| Error::file_not_found(path, "no such file"))
    }
}
