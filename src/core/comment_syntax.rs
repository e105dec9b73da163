//! Comment-syntax resolution.
//!
//! Maps a language identifier to the line-comment token that introduces
//! checkbox annotations in that language, and maps file extensions to
//! language identifiers for callers that only have a path.

use std::{collections::HashMap, path::Path};

/// Token used when a language is unknown.
pub const DEFAULT_COMMENT_TOKEN: &str = "#";

/// Language identifier reported for files with an unknown extension.
pub const PLAIN_TEXT: &str = "plaintext";

/// Resolve the line-comment token for a language identifier.
///
/// Shell-family, scripting and markup languages use `#`; C-family languages
/// use `//`. Anything unmapped falls back to [`DEFAULT_COMMENT_TOKEN`].
///
/// ```
/// use cbtoggle::core::resolve;
///
/// assert_eq!(resolve("python"), "#");
/// assert_eq!(resolve("cpp"), "//");
/// assert_eq!(resolve("totally-unknown"), "#");
/// ```
pub fn resolve(language_id: &str) -> &'static str {
    match language_id {
        "python" | "ruby" | "perl" | "r" | "yaml" | "bash" | "shell" | "shellscript"
        | "powershell" => "#",
        "javascript" | "typescript" | "java" | "c" | "cpp" | "csharp" | "go" | "rust"
        | "swift" | "kotlin" | "php" | "dart" => "//",
        _ => DEFAULT_COMMENT_TOKEN,
    }
}

/// Guess a language identifier from a file extension.
pub fn language_for_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return PLAIN_TEXT;
    };

    match ext.to_ascii_lowercase().as_str() {
        "py" | "pyw" => "python",
        "rb" => "ruby",
        "pl" | "pm" => "perl",
        "r" => "r",
        "yml" | "yaml" => "yaml",
        "sh" | "bash" => "shellscript",
        "ps1" => "powershell",
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "ts" | "mts" | "cts" | "tsx" => "typescript",
        "java" => "java",
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" => "cpp",
        "cs" => "csharp",
        "go" => "go",
        "rs" => "rust",
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "php" => "php",
        "dart" => "dart",
        _ => PLAIN_TEXT,
    }
}

/// Comment-syntax table with user-configured overrides layered on top of the
/// built-in mappings.
#[derive(Debug, Clone, Default)]
pub struct CommentSyntax {
    /// language id -> comment token
    tokens: HashMap<String, String>,
    /// file extension (without dot, lowercase) -> language id
    languages: HashMap<String, String>,
}

impl CommentSyntax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a comment token for a language, replacing the built-in one.
    pub fn with_token(mut self, language_id: impl Into<String>, token: impl Into<String>) -> Self {
        self.tokens.insert(language_id.into(), token.into());
        self
    }

    /// Register a language for a file extension. A leading `.` is ignored.
    pub fn with_language(mut self, extension: &str, language_id: impl Into<String>) -> Self {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        self.languages.insert(ext, language_id.into());
        self
    }

    /// Resolve the comment token for a language, overrides first.
    pub fn resolve<'a>(&'a self, language_id: &str) -> &'a str {
        match self.tokens.get(language_id) {
            Some(token) => token,
            None => resolve(language_id),
        }
    }

    /// Language identifier for a path, overrides first.
    pub fn language_for_path<'a>(&'a self, path: &Path) -> &'a str {
        let configured = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| self.languages.get(&ext.to_ascii_lowercase()));

        match configured {
            Some(language_id) => language_id,
            None => language_for_path(path),
        }
    }
}
