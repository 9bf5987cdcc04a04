//! Input manager for validating uploads and reading their text

use crate::config::InputConfig;
use crate::error::{AtsCheckerError, Result};
use crate::input::file_detector::FileType;
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    max_upload_bytes: u64,
    allowed_extensions: Vec<String>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self::from_config(&InputConfig::default())
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: config.enable_cache,
            max_upload_bytes: config.max_upload_bytes,
            allowed_extensions: config.allowed_extensions.iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read the text of an uploaded file.
    ///
    /// Every accepted format is read as raw text; bytes that are not valid
    /// UTF-8 are replaced rather than rejected.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(AtsCheckerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        self.validate_extension(path)?;

        let size = fs::metadata(path).await?.len();
        if size > self.max_upload_bytes {
            warn!("Rejected {}: {} bytes exceeds upload limit", path.display(), size);
            return Err(AtsCheckerError::FileTooLarge {
                path: path.display().to_string(),
                size,
                limit: self.max_upload_bytes,
            });
        }

        let file_type = FileType::from_path(path);
        if file_type.is_binary_document() {
            warn!(
                "{} is a {:?} document; reading it as plain text without extraction",
                path.display(),
                file_type
            );
        }
        info!("Reading {} ({} bytes)", path.display(), size);

        let bytes = fs::read(path).await?;
        let decoded = String::from_utf8_lossy(&bytes);
        let text = decoded.strip_prefix('\u{FEFF}').unwrap_or(&decoded[..]).to_string();

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn validate_extension(&self, path: &Path) -> Result<()> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                AtsCheckerError::UnsupportedFormat(format!("File has no extension: {}", path.display()))
            })?
            .to_lowercase();

        if self.allowed_extensions.contains(&extension) {
            Ok(())
        } else {
            Err(AtsCheckerError::UnsupportedFormat(format!(
                "Unsupported file extension: .{}. Allowed: {}",
                extension,
                self.allowed_extensions.join(", ")
            )))
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
