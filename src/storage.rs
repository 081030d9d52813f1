use crate::config::PlanningConfig;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge la configuration depuis un support.
    fn load(&self) -> anyhow::Result<PlanningConfig>;
    /// Sauvegarde de manière atomique.
    fn save(&self, config: &PlanningConfig) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<PlanningConfig> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let config: PlanningConfig = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn save(&self, config: &PlanningConfig) -> anyhow::Result<()> {
        config.validate()?;
        let json = serde_json::to_vec_pretty(config)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
