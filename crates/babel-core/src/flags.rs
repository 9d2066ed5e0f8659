//! Flag emoji → target language lookup.

use std::collections::HashMap;

/// Flags recognised out of the box.
pub const BUILTIN_FLAGS: &[(&str, &str)] = &[
    ("🇺🇸", "English"),
    ("🇬🇧", "English"),
    ("🇪🇸", "Spanish"),
    ("🇫🇷", "French"),
    ("🇩🇪", "German"),
    ("🇮🇹", "Italian"),
    ("🇯🇵", "Japanese"),
    ("🇰🇷", "Korean"),
    ("🇨🇳", "Chinese"),
    ("🇵🇹", "Portuguese"),
    ("🇷🇺", "Russian"),
];

/// Immutable emoji → language table, built once at startup.
#[derive(Debug, Clone)]
pub struct FlagTable {
    entries: HashMap<String, String>,
}

impl FlagTable {
    /// The builtin table.
    pub fn builtin() -> Self {
        Self::with_overrides(&HashMap::new())
    }

    /// The builtin table with `overrides` added on top. Override entries win.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut entries: HashMap<String, String> = BUILTIN_FLAGS
            .iter()
            .map(|(emoji, lang)| (emoji.to_string(), lang.to_string()))
            .collect();
        for (emoji, lang) in overrides {
            let (emoji, lang) = (emoji.trim(), lang.trim());
            if emoji.is_empty() || lang.is_empty() {
                continue;
            }
            entries.insert(emoji.to_string(), lang.to_string());
        }
        Self { entries }
    }

    /// Language for `emoji`, or `None` when the emoji is not a supported flag.
    pub fn language_for(&self, emoji: &str) -> Option<&str> {
        self.entries.get(emoji).map(String::as_str)
    }

    /// Number of supported emoji.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no emoji is supported at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by language, then emoji.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(e, l)| (e.as_str(), l.as_str()))
            .collect();
        out.sort_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(b.0)));
        out
    }
}

impl Default for FlagTable {
    fn default() -> Self {
        Self::builtin()
    }
}
