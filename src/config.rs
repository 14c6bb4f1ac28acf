// WHY: Deployments ship their own irregular dictionaries; a TOML file says where they live
// and whether they replace or extend the built-in tables

use crate::inflect::{Lexicon, Pluralizer};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Pluralizer configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluralityConfig {
    /// Irregular noun dictionary (`singular plural` per line)
    pub noun_lexicon: Option<PathBuf>,
    /// Irregular verb dictionary (`third-person base` per line)
    pub verb_lexicon: Option<PathBuf>,
    /// Layer loaded entries over the built-in tables instead of replacing them
    pub extend_builtin: bool,
}

impl Default for PluralityConfig {
    fn default() -> Self {
        Self {
            noun_lexicon: None,
            verb_lexicon: None,
            extend_builtin: true,
        }
    }
}

impl PluralityConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid plurality configuration")
    }

    /// Load configuration from a TOML file
    /// Relative lexicon paths are resolved against the config file's directory
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config = Self::from_toml(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.noun_lexicon = config.noun_lexicon.map(|p| base.join(p));
            config.verb_lexicon = config.verb_lexicon.map(|p| base.join(p));
        }

        Ok(config)
    }

    /// Load the configured dictionaries and assemble a pluralizer
    pub async fn build_pluralizer(&self) -> Result<Pluralizer> {
        let nouns = self
            .resolve_lexicon(self.noun_lexicon.as_deref(), Lexicon::builtin_nouns())
            .await?;
        let verbs = self
            .resolve_lexicon(self.verb_lexicon.as_deref(), Lexicon::builtin_verbs())
            .await?;

        info!(
            nouns = nouns.len(),
            verbs = verbs.len(),
            "Pluralizer lexicons ready"
        );
        Ok(Pluralizer::new(nouns, verbs))
    }

    async fn resolve_lexicon(&self, path: Option<&Path>, builtin: &Lexicon) -> Result<Lexicon> {
        let Some(path) = path else {
            return Ok(builtin.clone());
        };

        let loaded = Lexicon::load(path).await?;
        if self.extend_builtin {
            let mut merged = builtin.clone();
            merged.merge(&loaded);
            Ok(merged)
        } else {
            Ok(loaded)
        }
    }
}
