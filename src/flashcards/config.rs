use crate::error::{FlashcardError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Session defaults, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FlashcardsConfig {
    /// Card set imported before the first prompt
    #[serde(default)]
    pub import_from: Option<PathBuf>,

    /// Card set written after `exit`
    #[serde(default)]
    pub export_to: Option<PathBuf>,

    /// Fixed RNG seed, for reproducible quizzes
    #[serde(default)]
    pub seed: Option<u64>,
}

impl FlashcardsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FlashcardError::Io)?;
        let config: FlashcardsConfig = serde_json::from_str(&content).map_err(|e| {
            FlashcardError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// Command line values win over the file.
    pub fn merged(
        self,
        import_from: Option<PathBuf>,
        export_to: Option<PathBuf>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            import_from: import_from.or(self.import_from),
            export_to: export_to.or(self.export_to),
            seed: seed.or(self.seed),
        }
    }
}
