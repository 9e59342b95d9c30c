//! Structured report content shared by the Markdown and DOCX renderers.
//!
//! The report is assembled once from a record as an ordered list of [`Block`]s. Each output
//! format then walks the same list and decides how a block looks on its medium: a
//! [`Block::Fields`] list is a bullet list in Markdown and a bordered table in DOCX, for
//! example. This keeps the section order and wording identical across formats.

use super::labels::{LIST_SEPARATOR, Labels};
use crate::company::CompanyRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Document title, emitted once at the top.
    Title(String),
    /// Section heading; level 1 for sections, level 2 for timeline entries.
    Heading { level: u8, text: String },
    Paragraph(String),
    /// Label/value pairs.
    Fields(Vec<(String, String)>),
    /// Short standalone lines, already labeled.
    Lines(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    blocks: Vec<Block>,
    separator: &'static str,
}

impl ReportDocument {
    pub fn new(separator: &'static str) -> Self {
        Self {
            blocks: Vec::new(),
            separator,
        }
    }

    /// Lays out the full company report.
    pub fn from_record(record: &CompanyRecord, labels: &Labels) -> Self {
        let mut document = Self::new(labels.separator);

        document
            .title(labels.title(&record.name))
            .heading(1, labels.basic_info)
            .fields(labels.basic_fields(record));

        for (label, text) in labels.prose_sections(record) {
            document.heading(1, label).paragraph(text);
        }

        document
            .heading(1, labels.tags)
            .paragraph(record.tags.join(LIST_SEPARATOR))
            .heading(1, labels.legal_tags)
            .paragraph(record.legal_tags.join(LIST_SEPARATOR))
            .heading(1, labels.latest_news)
            .lines([
                labels.labeled(labels.news_title, &record.latest_news.title),
                labels.labeled(labels.news_link, &record.latest_news.link),
            ])
            .heading(1, labels.development_history);

        for milestone in &record.development_history {
            document
                .heading(2, labels.milestone(milestone))
                .paragraph(milestone.content.as_str());
        }

        document
    }

    pub fn title(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Title(text.into()));
        self
    }

    pub fn heading(&mut self, level: u8, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Heading {
            level,
            text: text.into(),
        });
        self
    }

    pub fn paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Paragraph(text.into()));
        self
    }

    pub fn fields<L, V>(&mut self, fields: impl IntoIterator<Item = (L, V)>) -> &mut Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        self.blocks.push(Block::Fields(
            fields
                .into_iter()
                .map(|(label, value)| (label.into(), value.into()))
                .collect(),
        ));
        self
    }

    pub fn lines<S: Into<String>>(&mut self, lines: impl IntoIterator<Item = S>) -> &mut Self {
        self.blocks
            .push(Block::Lines(lines.into_iter().map(Into::into).collect()));
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Text placed between a field label and its value.
    pub fn separator(&self) -> &'static str {
        self.separator
    }

    /// Text of the first title block, if any.
    pub fn title_text(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Title(text) => Some(text.as_str()),
            _ => None,
        })
    }
}
