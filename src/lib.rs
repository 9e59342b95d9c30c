//! # jobbank - company profiles from the 104 job bank
//!
//! jobbank fetches the public profile of one company from the 104 job bank
//! (www.104.com.tw), normalizes it into a fixed-shape [`CompanyRecord`], and exports that
//! record side by side as JSON, CSV, Markdown and DOCX.
//!
//! ## Features
//!
//! - **Paced HTTP client** - Browser-like headers and one request every two seconds per client
//! - **Lenient extraction** - Missing or oddly typed upstream fields become empty values
//! - **Multi-format export** - JSON, BOM-prefixed CSV (`csv` feature), Markdown, and DOCX
//!   (`docx` feature) written from the same record
//! - **Localized reports** - Traditional Chinese section labels by default, English on request
//!
//! ## Requirements
//!
//! The client is async and needs a runtime; the bundled `jobbank` binary uses
//! [tokio](https://tokio.rs).
//!
//! ## Basic Usage
//!
//! ```ignore
//! use jobbank::{ExportOptions, JobBank, Language, ProfileOperations};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JobBank::new(jobbank::DEFAULT_USER_AGENT)?;
//!
//!     let options = ExportOptions::new()
//!         .with_output_dir("output")
//!         .with_language(Language::TraditionalChinese);
//!
//!     let report = client.export_profile("e6o7g3l", &options).await?;
//!     for path in report.into_result()? {
//!         println!("wrote {}", path.display());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! A record obtained elsewhere can be rendered without touching the network:
//!
//! ```
//! use jobbank::{Renderer, parse_company_content};
//!
//! let record = parse_company_content(r#"{"data": {"custName": "測試公司"}}"#)?;
//! assert_eq!(record.name, "測試公司");
//!
//! # let dir = tempfile::tempdir().unwrap();
//! let report = Renderer::default().export(&record, dir.path())?;
//! assert!(report.is_complete());
//! # Ok::<(), jobbank::JobBankError>(())
//! ```

mod company;
mod config;
mod core;
mod error;
mod options;
pub mod parsing;
pub mod render;
mod sanitize;
mod traits;

// Core client (always available)
pub use config::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, JobBankConfig};
pub use core::JobBank;
pub use error::{ErrorKind, JobBankError, Result};

pub use company::{CompanyRecord, LatestNews, Milestone, parse_company_content};
pub use options::{DEFAULT_OUTPUT_DIR, ExportOptions, Language};
pub use render::{OutputFormat, RenderOutcome, RenderReport, Renderer};
pub use sanitize::{FALLBACK_FILENAME, safe_filename};
pub use traits::ProfileOperations;

/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
