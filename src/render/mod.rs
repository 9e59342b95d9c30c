//! Multi-format export of a [`CompanyRecord`].
//!
//! A [`Renderer`] writes one record to four sibling files sharing a base path:
//!
//! - `{base}.json` - the record itself, the canonical export
//! - `{base}.csv` - a one-row summary table (feature `csv`)
//! - `{base}.md` - a sectioned Markdown report
//! - `{base}.docx` - the same report as a styled Word document (feature `docx`)
//!
//! Each format is derived from the record alone and written independently. A failure in one
//! format does not stop the others, and files already written are left in place; the outcome
//! of every format is collected in a [`RenderReport`].

mod document;
#[cfg(feature = "docx")]
mod docx;
mod json;
mod labels;
mod markdown;
#[cfg(feature = "csv")]
mod tabular;

pub use document::{Block, ReportDocument};
pub use labels::{LIST_SEPARATOR, Labels};
pub use markdown::to_markdown;
#[cfg(feature = "csv")]
pub use tabular::summary_row;

use crate::company::CompanyRecord;
use crate::error::{JobBankError, Result};
use crate::options::Language;
use crate::sanitize::safe_filename;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Json,
    #[cfg(feature = "csv")]
    Csv,
    Markdown,
    #[cfg(feature = "docx")]
    Docx,
}

impl OutputFormat {
    /// Every enabled format, in the order they are written.
    pub const ALL: &'static [OutputFormat] = &[
        OutputFormat::Json,
        #[cfg(feature = "csv")]
        OutputFormat::Csv,
        OutputFormat::Markdown,
        #[cfg(feature = "docx")]
        OutputFormat::Docx,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            #[cfg(feature = "csv")]
            OutputFormat::Csv => "csv",
            OutputFormat::Markdown => "md",
            #[cfg(feature = "docx")]
            OutputFormat::Docx => "docx",
        }
    }

    /// `{base}.{extension}`. The extension is appended, never substituted, so a stem such as
    /// `Acme Co., Ltd.` keeps its trailing dot.
    pub fn path_for(&self, base: &Path) -> PathBuf {
        let mut path = OsString::from(base.as_os_str());
        path.push(".");
        path.push(self.extension());
        PathBuf::from(path)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Result of writing one format.
#[derive(Debug)]
pub struct RenderOutcome {
    pub format: OutputFormat,
    pub path: PathBuf,
    pub result: Result<()>,
}

/// Per-format results of one render.
#[derive(Debug)]
pub struct RenderReport {
    base_path: PathBuf,
    outcomes: Vec<RenderOutcome>,
}

impl RenderReport {
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn outcomes(&self) -> &[RenderOutcome] {
        &self.outcomes
    }

    /// Path of a successfully written format.
    pub fn path(&self, format: OutputFormat) -> Option<&Path> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.format == format && outcome.result.is_ok())
            .map(|outcome| outcome.path.as_path())
    }

    pub fn written(&self) -> impl Iterator<Item = &Path> + '_ {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_ok())
            .map(|outcome| outcome.path.as_path())
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.result.is_ok())
    }

    /// Collapses the report into the verdict for the whole export.
    ///
    /// Succeeds with the written paths only if every format was written. Otherwise returns the
    /// JSON failure if there is one, since the JSON file is the source of truth, and the first
    /// failure in write order if not.
    pub fn into_result(self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.outcomes.len());
        let mut first_error = None;

        for outcome in self.outcomes {
            match outcome.result {
                Ok(()) => written.push(outcome.path),
                Err(e) if outcome.format == OutputFormat::Json => return Err(e),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(written),
        }
    }
}

/// Writes a record in every enabled [`OutputFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    language: Language,
}

impl Renderer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn labels(&self) -> &'static Labels {
        Labels::for_language(self.language)
    }

    /// `{output_dir}/{safe_filename(record.name)}`, without extension.
    pub fn base_path(record: &CompanyRecord, output_dir: &Path) -> PathBuf {
        output_dir.join(safe_filename(&record.name))
    }

    /// Creates `output_dir` if needed and renders the record into it.
    ///
    /// # Errors
    ///
    /// Only a failure to create the directory is returned as an error; per-format failures
    /// are in the report.
    pub fn export(
        &self,
        record: &CompanyRecord,
        output_dir: impl AsRef<Path>,
    ) -> Result<RenderReport> {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir).map_err(|e| JobBankError::file(output_dir, e))?;
        Ok(self.render(record, &Self::base_path(record, output_dir)))
    }

    /// Writes every format next to `base`. Each format is attempted regardless of earlier
    /// failures.
    pub fn render(&self, record: &CompanyRecord, base: &Path) -> RenderReport {
        let labels = self.labels();
        let document = ReportDocument::from_record(record, labels);

        let outcomes = OutputFormat::ALL
            .iter()
            .map(|&format| {
                let path = format.path_for(base);
                let result = self.render_format(format, record, &document, &path);
                match &result {
                    Ok(()) => tracing::info!(path = %path.display(), "wrote {}", format),
                    Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to write {}", format),
                }
                RenderOutcome {
                    format,
                    path,
                    result,
                }
            })
            .collect();

        RenderReport {
            base_path: base.to_path_buf(),
            outcomes,
        }
    }

    fn render_format(
        &self,
        format: OutputFormat,
        record: &CompanyRecord,
        document: &ReportDocument,
        path: &Path,
    ) -> Result<()> {
        tracing::debug!(path = %path.display(), "rendering {}", format);
        match format {
            OutputFormat::Json => json::write_json(record, path),
            #[cfg(feature = "csv")]
            OutputFormat::Csv => tabular::write_csv(record, self.labels(), path),
            OutputFormat::Markdown => markdown::write_markdown(document, path),
            #[cfg(feature = "docx")]
            OutputFormat::Docx => docx::write_docx(document, path),
        }
    }
}
