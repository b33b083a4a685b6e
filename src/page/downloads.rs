use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct CounterFile {
    downloads: u64,
}

/// Display-only count of download-link clicks, persisted to a small JSON
/// file between sessions. A missing or unreadable file starts the count
/// over at zero; no cross-session consistency is promised.
#[derive(Debug)]
pub struct DownloadCounter {
    count: u64,
    path: PathBuf,
}

impl DownloadCounter {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let count = std::fs::read(&path)
            .ok()
            .and_then(|raw| serde_json::from_slice::<CounterFile>(&raw).ok())
            .map(|f| f.downloads)
            .unwrap_or(0);
        Self { count, path }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Bump and write back. The new count is kept even if the write fails.
    pub fn increment(&mut self) -> io::Result<u64> {
        self.count += 1;
        let raw = serde_json::to_vec(&CounterFile {
            downloads: self.count,
        })?;
        std::fs::write(&self.path, raw)?;
        Ok(self.count)
    }

    pub fn label(&self) -> String {
        format!("Download All Code ({})", self.count)
    }
}
