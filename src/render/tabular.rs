use super::labels::{LIST_SEPARATOR, Labels};
use crate::company::CompanyRecord;
use crate::error::{JobBankError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// UTF-8 byte order mark; Excel needs it to pick the right encoding for a CSV file.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Header and value cells of the one-row summary table.
///
/// Columns: company name, the Basic Information fields, tags, legal tags, and the latest news
/// title and link. Prose sections and the development history are left out.
pub fn summary_row(record: &CompanyRecord, labels: &Labels) -> (Vec<&'static str>, Vec<String>) {
    let mut headers = vec![labels.company_name];
    let mut values = vec![record.name.clone()];

    for (label, value) in labels.basic_fields(record) {
        headers.push(label);
        values.push(value.to_string());
    }

    headers.extend([
        labels.tags,
        labels.legal_tags,
        labels.news_title_column,
        labels.news_link_column,
    ]);
    values.extend([
        record.tags.join(LIST_SEPARATOR),
        record.legal_tags.join(LIST_SEPARATOR),
        record.latest_news.title.clone(),
        record.latest_news.link.clone(),
    ]);

    (headers, values)
}

/// Writes the summary table as a BOM-prefixed UTF-8 CSV file with one header row and one
/// data row.
pub fn write_csv(record: &CompanyRecord, labels: &Labels, path: &Path) -> Result<()> {
    let (headers, values) = summary_row(record, labels);

    let mut file = File::create(path).map_err(|e| JobBankError::file(path, e))?;
    file.write_all(UTF8_BOM)
        .map_err(|e| JobBankError::file(path, e))?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(&headers)?;
    writer.write_record(&values)?;
    writer.flush().map_err(|e| JobBankError::file(path, e))
}
