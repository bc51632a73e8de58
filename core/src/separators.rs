//! Ordered separator lists and the built-in presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SplitError;

/// Separators for prose: paragraph, line, sentence, word, character.
const TEXT: &[&str] = &["\n\n", "\n", ". ", " ", ""];

const MARKDOWN: &[&str] = &[
    "\n# ",
    "\n## ",
    "\n### ",
    "\n#### ",
    "\n##### ",
    "\n###### ",
    "```\n",
    "\n***\n",
    "\n---\n",
    "\n___\n",
    "\n\n",
    "\n",
    " ",
    "",
];

const PYTHON: &[&str] = &["\nclass ", "\ndef ", "\n\tdef ", "\n\n", "\n", " ", ""];

const RUST: &[&str] = &[
    "\nfn ", "\nconst ", "\nlet ", "\nif ", "\nwhile ", "\nfor ", "\nloop ", "\nmatch ", "\n\n",
    "\n", " ", "",
];

const JS: &[&str] = &[
    "\nfunction ",
    "\nconst ",
    "\nlet ",
    "\nvar ",
    "\nclass ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\nswitch ",
    "\ncase ",
    "\ndefault ",
    "\n\n",
    "\n",
    " ",
    "",
];

const TS: &[&str] = &[
    "\nenum ",
    "\ninterface ",
    "\nnamespace ",
    "\ntype ",
    "\nclass ",
    "\nfunction ",
    "\nconst ",
    "\nlet ",
    "\nvar ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\nswitch ",
    "\ncase ",
    "\ndefault ",
    "\n\n",
    "\n",
    " ",
    "",
];

const GO: &[&str] = &[
    "\nfunc ", "\nvar ", "\nconst ", "\ntype ", "\nif ", "\nfor ", "\nswitch ", "\ncase ", "\n\n",
    "\n", " ", "",
];

const JAVA: &[&str] = &[
    "\nclass ",
    "\npublic ",
    "\nprotected ",
    "\nprivate ",
    "\nstatic ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\nswitch ",
    "\ncase ",
    "\n\n",
    "\n",
    " ",
    "",
];

// C and C++ share one list.
const C_FAMILY: &[&str] = &[
    "\nclass ", "\nvoid ", "\nint ", "\nfloat ", "\ndouble ", "\nif ", "\nfor ", "\nwhile ",
    "\nswitch ", "\ncase ", "\n\n", "\n", " ", "",
];

const RUBY: &[&str] = &[
    "\ndef ", "\nclass ", "\nif ", "\nunless ", "\nwhile ", "\nfor ", "\ndo ", "\nbegin ",
    "\nrescue ", "\n\n", "\n", " ", "",
];

/// Ordered, priority-ranked list of boundary strings.
///
/// Earlier entries are preferred. The empty string means "split between any
/// two characters" and must come last for the recursive splitter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeparatorSet(Vec<String>);

impl SeparatorSet {
    /// Builds a set from an explicit list.
    #[must_use]
    pub fn new<I, S>(separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(separators.into_iter().map(Into::into).collect())
    }

    /// Looks up the preset registered for a language tag such as `"markdown"` or `"py"`.
    #[must_use]
    pub fn preset(tag: &str) -> Option<Self> {
        tag.parse::<Language>().ok().map(Language::separators)
    }

    /// The separators in priority order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of separators in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no separators at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the last separator is the empty-string fallback.
    #[must_use]
    pub fn ends_with_fallback(&self) -> bool {
        self.0.last().is_some_and(String::is_empty)
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Language::Text.separators()
    }
}

impl From<Vec<String>> for SeparatorSet {
    fn from(separators: Vec<String>) -> Self {
        Self(separators)
    }
}

impl From<&[&str]> for SeparatorSet {
    fn from(separators: &[&str]) -> Self {
        Self::new(separators.iter().copied())
    }
}

/// Syntaxes with a built-in separator preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Natural-language prose.
    Text,
    /// Markdown documents.
    Markdown,
    /// Python source.
    Python,
    /// Rust source.
    Rust,
    /// JavaScript source.
    Js,
    /// TypeScript source.
    Ts,
    /// Go source.
    Go,
    /// Java source.
    Java,
    /// C source.
    C,
    /// C++ source.
    Cpp,
    /// Ruby source.
    Ruby,
}

impl Language {
    /// Every language with a preset.
    pub const ALL: [Self; 11] = [
        Self::Text,
        Self::Markdown,
        Self::Python,
        Self::Rust,
        Self::Js,
        Self::Ts,
        Self::Go,
        Self::Java,
        Self::C,
        Self::Cpp,
        Self::Ruby,
    ];

    /// The ordered separator list for this language.
    #[must_use]
    pub fn separators(self) -> SeparatorSet {
        SeparatorSet::from(self.raw_separators())
    }

    const fn raw_separators(self) -> &'static [&'static str] {
        match self {
            Self::Text => TEXT,
            Self::Markdown => MARKDOWN,
            Self::Python => PYTHON,
            Self::Rust => RUST,
            Self::Js => JS,
            Self::Ts => TS,
            Self::Go => GO,
            Self::Java => JAVA,
            Self::C | Self::Cpp => C_FAMILY,
            Self::Ruby => RUBY,
        }
    }

    /// Canonical tag of the language.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Js => "js",
            Self::Ts => "ts",
            Self::Go => "go",
            Self::Java => "java",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Ruby => "ruby",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = SplitError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let language = match tag.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" | "plain" => Self::Text,
            "markdown" | "md" => Self::Markdown,
            "python" | "py" => Self::Python,
            "rust" | "rs" => Self::Rust,
            "js" | "javascript" => Self::Js,
            "ts" | "typescript" => Self::Ts,
            "go" | "golang" => Self::Go,
            "java" => Self::Java,
            "c" => Self::C,
            "cpp" | "c++" | "cc" => Self::Cpp,
            "ruby" | "rb" => Self::Ruby,
            _ => return Err(SplitError::UnknownLanguage(tag.to_string())),
        };
        Ok(language)
    }
}
