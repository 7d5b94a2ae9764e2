use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::platform_path::{ConfigTarget, PathError, PathTable};

#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error(transparent)]
    Unsupported(#[from] PathError),
    #[error("directory not found: {0}")]
    MissingParentDirectory(PathBuf),
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse {path} as JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The filesystem operations config generation relies on.
#[async_trait]
pub trait ConfigFs: Send + Sync {
    /// Stat-style check; any error other than success counts as absent.
    async fn dir_exists(&self, path: &Path) -> bool;
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

#[async_trait]
impl ConfigFs for LocalFs {
    async fn dir_exists(&self, path: &Path) -> bool {
        match tokio::fs::metadata(path).await {
            Ok(meta) => meta.is_dir(),
            Err(e) => {
                log::debug!("Could not stat {}: {}", path.display(), e);
                false
            }
        }
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Existing {
    Raw(Vec<u8>),
    Json(Value),
}

/// Reads existing documents and writes generated artifacts to the
/// location a target resolves to on the configured platform.
#[derive(Clone)]
pub struct ConfigFiles {
    fs: Arc<dyn ConfigFs>,
    paths: PathTable,
    platform: String,
}

impl ConfigFiles {
    pub fn new(fs: Arc<dyn ConfigFs>, paths: PathTable, platform: impl Into<String>) -> Self {
        Self {
            fs,
            paths,
            platform: platform.into(),
        }
    }

    pub fn resolve(&self, target: ConfigTarget) -> Result<&Path, PathError> {
        self.paths.resolve(target, &self.platform)
    }

    pub async fn read_existing(
        &self,
        path: &Path,
        parse_json: bool,
    ) -> Result<Existing, ConfigFileError> {
        let raw = self.read_raw(path).await?;
        if parse_json {
            parse(path, &raw).map(Existing::Json)
        } else {
            Ok(Existing::Raw(raw))
        }
    }

    pub async fn read_json(&self, path: &Path) -> Result<Value, ConfigFileError> {
        let raw = self.read_raw(path).await?;
        parse(path, &raw)
    }

    async fn read_raw(&self, path: &Path) -> Result<Vec<u8>, ConfigFileError> {
        log::debug!("Reading {}", path.display());
        self.fs.read(path).await.map_err(|source| {
            log::error!("Could not read {}: {}", path.display(), source);
            ConfigFileError::Read {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Overwrites the file `target` resolves to with `payload`.
    ///
    /// Nothing is written unless the target is mapped on this platform and
    /// its parent directory already exists. The write itself is a plain
    /// overwrite; a crash mid-write can leave a truncated file.
    pub async fn write_config(
        &self,
        target: ConfigTarget,
        payload: impl AsRef<[u8]>,
    ) -> Result<PathBuf, ConfigFileError> {
        let path = self.resolve(target).map_err(|e| {
            log::error!("Cannot write {target}: {e}");
            e
        })?;

        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        if !self.fs.dir_exists(parent).await {
            log::error!(
                "Cannot write {target}: directory not found: {}",
                parent.display()
            );
            return Err(ConfigFileError::MissingParentDirectory(parent.to_path_buf()));
        }

        let payload = payload.as_ref();
        self.fs.write(path, payload).await.map_err(|source| {
            log::error!("Could not write {}: {}", path.display(), source);
            ConfigFileError::Write {
                path: path.to_path_buf(),
                source,
            }
        })?;
        log::info!("Wrote {} ({} bytes) to {}", target, payload.len(), path.display());
        Ok(path.to_path_buf())
    }
}

fn parse(path: &Path, raw: &[u8]) -> Result<Value, ConfigFileError> {
    serde_json::from_slice::<Value>(raw).map_err(|source| {
        log::error!("Could not parse {} as JSON: {}", path.display(), source);
        ConfigFileError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })
}
