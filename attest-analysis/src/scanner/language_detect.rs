//! Language detection from file extension.

use serde::{Deserialize, Serialize};

/// Languages the toolchain recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    TypeScript,
    JavaScript,
    Python,
    Java,
    CSharp,
    Go,
    Rust,
    Ruby,
    Php,
    Kotlin,
}

impl Language {
    /// Detect language from a file extension string.
    pub fn from_extension(ext: Option<&str>) -> Option<Language> {
        match ext? {
            "ts" | "tsx" | "mts" | "cts" => Some(Language::TypeScript),
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "py" | "pyi" => Some(Language::Python),
            "java" => Some(Language::Java),
            "cs" => Some(Language::CSharp),
            "go" => Some(Language::Go),
            "rs" => Some(Language::Rust),
            "rb" | "rake" => Some(Language::Ruby),
            "php" => Some(Language::Php),
            "kt" | "kts" => Some(Language::Kotlin),
            _ => None,
        }
    }

    /// Returns the display name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Ruby => "Ruby",
            Language::Php => "PHP",
            Language::Kotlin => "Kotlin",
        }
    }

    /// Branch-introducing tokens counted by the complexity rule.
    /// Substring matches over function bodies; deliberately naive.
    pub fn branch_tokens(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["if ", "elif ", "for ", "while ", "except", " and ", " or "],
            Language::Ruby => &["if ", "elsif ", "unless ", "for ", "while ", "rescue", " && ", " || "],
            _ => &["if ", "if(", "for ", "for(", "while ", "while(", "case ", "catch", "&&", "||"],
        }
    }

    /// Whether the annotation checker has anything to say about this language.
    pub fn supports_annotations(&self) -> bool {
        matches!(self, Language::Python | Language::TypeScript)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
