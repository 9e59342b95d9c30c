use super::document::{Block, ReportDocument};
use crate::error::{JobBankError, Result};
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;

/// Serializes a report as Markdown.
///
/// The title is a level-one heading and section headings are one level deeper than their
/// block level, so timeline entries come out as `###`. Paragraph text is copied verbatim.
pub fn to_markdown(document: &ReportDocument) -> String {
    let mut out = String::new();
    for block in document.blocks() {
        // Writing into a String cannot fail.
        let _ = write_block(&mut out, block, document.separator());
    }
    out
}

fn write_block(out: &mut String, block: &Block, separator: &str) -> fmt::Result {
    match block {
        Block::Title(text) => write!(out, "# {}\n\n", text),
        Block::Heading { level, text } => {
            let hashes = "#".repeat(usize::from(*level) + 1);
            writeln!(out, "{} {}", hashes, text)
        }
        Block::Paragraph(text) => write!(out, "{}\n\n", text),
        Block::Fields(fields) => {
            for (label, value) in fields {
                writeln!(out, "- {}{}{}", label, separator, value)?;
            }
            writeln!(out)
        }
        Block::Lines(lines) => {
            for line in lines {
                writeln!(out, "- {}", line)?;
            }
            writeln!(out)
        }
    }
}

pub fn write_markdown(document: &ReportDocument, path: &Path) -> Result<()> {
    fs::write(path, to_markdown(document)).map_err(|e| JobBankError::file(path, e))
}
