use super::error::JobBankError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Directory exports land in when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Language of the section titles and field labels in the rendered reports.
///
/// Traditional Chinese matches the site itself and is the default. The JSON export is not
/// affected; its keys are always the record's field names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    TraditionalChinese,
    English,
}

impl Language {
    pub const VARIANTS: &'static [(&'static str, Language)] = &[
        ("zh-TW", Language::TraditionalChinese),
        ("en", Language::English),
    ];

    pub fn as_str(&self) -> &'static str {
        Self::VARIANTS
            .iter()
            .find(|(_, variant)| variant == self)
            .map(|(s, _)| *s)
            .unwrap_or("zh-TW")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a language tag, case-insensitively. `zh`, `zh-tw` and `zh_TW` all select
/// Traditional Chinese; `en` and `en-*` select English.
impl FromStr for Language {
    type Err = JobBankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase().replace('_', "-");
        match tag.as_str() {
            "zh" | "zh-tw" | "zh-hant" => Ok(Language::TraditionalChinese),
            t if t == "en" || t.starts_with("en-") => Ok(Language::English),
            _ => Err(JobBankError::ConfigError(format!(
                "Unsupported language {:?}: expected one of zh-TW, en",
                s
            ))),
        }
    }
}

/// Options for exporting a profile
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory the four report files are written into; created if missing.
    pub output_dir: PathBuf,
    pub language: Language,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            language: Language::default(),
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}
