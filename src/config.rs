use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::CommentSyntax;

pub const CONFIG_FILE_NAME: &str = ".cbtogglerc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File extension -> language id, e.g. `{ "lua": "lua" }`.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    /// Language id -> line-comment token, e.g. `{ "lua": "--" }`.
    #[serde(default)]
    pub comment_tokens: BTreeMap<String, String>,
}

fn default_comment_tokens() -> BTreeMap<String, String> {
    [("sql", "--"), ("lua", "--"), ("haskell", "--")]
        .into_iter()
        .map(|(lang, token)| (lang.to_string(), token.to_string()))
        .collect()
}

fn default_languages() -> BTreeMap<String, String> {
    [("sql", "sql"), ("lua", "lua"), ("hs", "haskell")]
        .into_iter()
        .map(|(ext, lang)| (ext.to_string(), lang.to_string()))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            comment_tokens: default_comment_tokens(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Comment tokens must be non-empty and contain no whitespace; extension
    /// and language keys must be non-empty.
    pub fn validate(&self) -> Result<()> {
        for (language, token) in &self.comment_tokens {
            if language.trim().is_empty() {
                bail!("Empty language id in 'commentTokens'");
            }
            if token.is_empty() || token.chars().any(char::is_whitespace) {
                bail!(
                    "Invalid comment token in 'commentTokens' for \"{}\": \"{}\"",
                    language,
                    token
                );
            }
        }

        for (extension, language) in &self.languages {
            if extension.trim_start_matches('.').trim().is_empty() {
                bail!("Empty file extension in 'languages'");
            }
            if language.trim().is_empty() {
                bail!("Empty language id in 'languages' for \"{}\"", extension);
            }
        }

        Ok(())
    }

    /// Build the comment-syntax table with this config's overrides applied.
    pub fn comment_syntax(&self) -> CommentSyntax {
        let syntax = self
            .comment_tokens
            .iter()
            .fold(CommentSyntax::new(), |syntax, (language, token)| {
                syntax.with_token(language.as_str(), token.as_str())
            });

        self.languages
            .iter()
            .fold(syntax, |syntax, (extension, language)| {
                syntax.with_language(extension, language.as_str())
            })
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` if using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
