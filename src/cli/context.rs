//! Shared state for file commands: configuration, comment syntax and file
//! loading.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::CommonArgs;
use crate::{
    config::load_config,
    core::{CommentSyntax, Document, TextDocument},
};

pub struct CommandContext {
    pub syntax: CommentSyntax,
    /// Language forced with `--language`, if any.
    pub language: Option<String>,
    pub verbose: bool,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        let loaded = load_config(&cwd)?;

        if common.verbose {
            match &loaded.path {
                Some(path) => eprintln!("{} using config {}", "note:".bold().cyan(), path.display()),
                None => eprintln!("{} no config file found, using defaults", "note:".bold().cyan()),
            }
        }

        Ok(Self {
            syntax: loaded.config.comment_syntax(),
            language: common.language.clone(),
            verbose: common.verbose,
        })
    }

    /// Language id for a file: `--language` if given, otherwise by extension.
    pub fn language_for(&self, path: &Path) -> String {
        match &self.language {
            Some(language) => language.clone(),
            None => self.syntax.language_for_path(path).to_string(),
        }
    }

    /// Read a file into a document.
    pub fn load(&self, path: &Path) -> Result<SourceFile> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let language = self.language_for(path);

        if self.verbose {
            eprintln!(
                "{} {} as {} (comment token {})",
                "note:".bold().cyan(),
                path.display(),
                language,
                self.syntax.resolve(&language)
            );
        }

        Ok(SourceFile {
            path: path.to_path_buf(),
            document: TextDocument::new(language, text),
        })
    }
}

/// A file read from disk together with its parsed document.
pub struct SourceFile {
    pub path: PathBuf,
    pub document: TextDocument,
}

impl SourceFile {
    /// Path as given on the command line, for display.
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    pub fn comment_token<'a>(&self, syntax: &'a CommentSyntax) -> &'a str {
        syntax.resolve(self.document.language_id())
    }

    pub fn write(&self, text: &str) -> Result<()> {
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))
    }
}
