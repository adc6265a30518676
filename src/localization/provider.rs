use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::bundle::LanguageBundle;

#[derive(Debug, Error)]
pub enum ResourceLoadError {
    #[error("language resource not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("bundle declares tag {found:?}, requested {requested:?}")]
    TagMismatch { requested: String, found: String },
}

/// Supplies raw language-bundle data for a language tag.
///
/// The load is synchronous and runs before the host accepts interactive use,
/// so blocking on file IO here is acceptable.
pub trait BundleProvider {
    fn load(&self, tag: &str) -> Result<LanguageBundle, ResourceLoadError>;
}

/// Reads `<dir>/<tag>.lang.ron` bundles from a directory.
#[derive(Debug, Clone)]
pub struct DirBundleProvider {
    dir: PathBuf,
}

impl DirBundleProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl BundleProvider for DirBundleProvider {
    fn load(&self, tag: &str) -> Result<LanguageBundle, ResourceLoadError> {
        let path = self.dir.join(format!("{tag}.lang.ron"));
        if !path.exists() {
            return Err(ResourceLoadError::NotFound { path });
        }
        let text = fs::read_to_string(&path)?;
        let bundle: LanguageBundle = ron::de::from_str(&text)?;
        if bundle.tag != tag {
            return Err(ResourceLoadError::TagMismatch {
                requested: tag.to_owned(),
                found: bundle.tag,
            });
        }
        Ok(bundle)
    }
}
