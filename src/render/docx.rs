//! Office Open XML (`.docx`) rendering.
//!
//! A `.docx` file is a ZIP package of XML parts. The report needs only a handful of them: the
//! content types map, the package and document relationships, core properties (title,
//! creation time), a style sheet defining `Title`, `Heading1`, `Heading2` and `TableGrid`, and
//! the document body itself. Everything except the body and the core properties is static.
//!
//! The body is streamed with `quick-xml` from the shared [`ReportDocument`] blocks:
//!
//! ```text
//! Block::Title      -> <w:p> styled Title, centered
//! Block::Heading    -> <w:p> styled Heading1 / Heading2
//! Block::Paragraph  -> <w:p>
//! Block::Fields     -> <w:tbl> styled TableGrid, two columns
//! Block::Lines      -> one <w:p> per line
//! ```

use super::document::{Block, ReportDocument};
use crate::error::{JobBankError, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

// A4 with one-inch margins, in twentieths of a point.
const PAGE_WIDTH: &str = "11906";
const PAGE_HEIGHT: &str = "16838";
const PAGE_MARGIN: &str = "1440";
const LABEL_COLUMN_WIDTH: &str = "2600";
const VALUE_COLUMN_WIDTH: &str = "6426";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:eastAsia="Microsoft JhengHei" w:hAnsi="Calibri" w:cs="Calibri"/><w:sz w:val="22"/><w:szCs w:val="22"/><w:lang w:val="en-US" w:eastAsia="zh-TW" w:bidi="ar-SA"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:spacing w:after="300"/><w:contextualSpacing/></w:pPr><w:rPr><w:b/><w:color w:val="17365D"/><w:sz w:val="52"/><w:szCs w:val="52"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:keepLines/><w:spacing w:before="480" w:after="120"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:color w:val="365F91"/><w:sz w:val="28"/><w:szCs w:val="28"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:keepLines/><w:spacing w:before="200" w:after="80"/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:color w:val="4F81BD"/><w:sz w:val="26"/><w:szCs w:val="26"/></w:rPr></w:style><w:style w:type="table" w:default="1" w:styleId="TableNormal"><w:name w:val="Normal Table"/><w:tblPr><w:tblInd w:w="0" w:type="dxa"/><w:tblCellMar><w:top w:w="0" w:type="dxa"/><w:left w:w="108" w:type="dxa"/><w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar></w:tblPr></w:style><w:style w:type="table" w:styleId="TableGrid"><w:name w:val="Table Grid"/><w:basedOn w:val="TableNormal"/><w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr><w:tblPr><w:tblBorders><w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:left w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:bottom w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:right w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:insideH w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/></w:tblBorders></w:tblPr></w:style></w:styles>"#;

/// Writes the report as a `.docx` package.
pub fn write_docx(document: &ReportDocument, path: &Path) -> Result<()> {
    let title = document.title_text().unwrap_or_default();
    let parts: [(&str, Vec<u8>); 6] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes().to_vec()),
        ("_rels/.rels", PACKAGE_RELS_XML.as_bytes().to_vec()),
        ("docProps/core.xml", core_properties_xml(title)?),
        (
            "word/_rels/document.xml.rels",
            DOCUMENT_RELS_XML.as_bytes().to_vec(),
        ),
        ("word/styles.xml", STYLES_XML.as_bytes().to_vec()),
        ("word/document.xml", document_xml(document)?),
    ];

    let file = File::create(path).map_err(|e| JobBankError::file(path, e))?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, bytes) in parts {
        zip.start_file(name, options)?;
        zip.write_all(&bytes)
            .map_err(|e| JobBankError::file(path, e))?;
    }
    zip.finish()?;
    Ok(())
}

/// Builds `word/document.xml` from the report blocks.
pub fn document_xml(document: &ReportDocument) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start("w:document", &[("xmlns:w", WORDML_NS), ("xmlns:r", RELATIONSHIPS_NS)])?;
    xml.start("w:body", &[])?;

    for block in document.blocks() {
        match block {
            Block::Title(text) => xml.paragraph(Some("Title"), true, text)?,
            Block::Heading { level, text } => {
                let style = if *level <= 1 { "Heading1" } else { "Heading2" };
                xml.paragraph(Some(style), false, text)?
            }
            Block::Paragraph(text) => xml.paragraph(None, false, text)?,
            Block::Fields(fields) => xml.table(fields)?,
            Block::Lines(lines) => {
                for line in lines {
                    xml.paragraph(None, false, line)?;
                }
            }
        }
    }

    xml.start("w:sectPr", &[])?;
    xml.empty("w:pgSz", &[("w:w", PAGE_WIDTH), ("w:h", PAGE_HEIGHT)])?;
    xml.empty(
        "w:pgMar",
        &[
            ("w:top", PAGE_MARGIN),
            ("w:right", PAGE_MARGIN),
            ("w:bottom", PAGE_MARGIN),
            ("w:left", PAGE_MARGIN),
            ("w:header", "851"),
            ("w:footer", "992"),
            ("w:gutter", "0"),
        ],
    )?;
    xml.end("w:sectPr")?;

    xml.end("w:body")?;
    xml.end("w:document")?;
    Ok(xml.into_inner())
}

fn core_properties_xml(title: &str) -> Result<Vec<u8>> {
    let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    let mut xml = XmlWriter::new()?;
    xml.start(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    xml.element("dc:title", &[], title)?;
    xml.element("dc:creator", &[], env!("CARGO_PKG_NAME"))?;
    xml.element("dcterms:created", &[("xsi:type", "dcterms:W3CDTF")], &now)?;
    xml.element("dcterms:modified", &[("xsi:type", "dcterms:W3CDTF")], &now)?;
    xml.end("cp:coreProperties")?;
    Ok(xml.into_inner())
}

/// Drops characters XML 1.0 cannot carry and folds `\r\n` and `\r` into `\n`.
fn xml_safe(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .map(|c| if c == '\r' { '\n' } else { c })
        .filter(|&c| matches!(c, '\t' | '\n') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}'))
        .collect()
}

struct XmlWriter {
    writer: Writer<Vec<u8>>,
}

impl XmlWriter {
    fn new() -> Result<Self> {
        let mut xml = Self {
            writer: Writer::new(Vec::new()),
        };
        xml.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(xml)
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| JobBankError::XmlError(e.to_string()))
    }

    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let tag = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.event(Event::Start(tag))
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let tag = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.event(Event::Empty(tag))
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.event(Event::Text(BytesText::new(text)))
    }

    fn element(&mut self, name: &str, attributes: &[(&str, &str)], text: &str) -> Result<()> {
        self.start(name, attributes)?;
        self.text(&xml_safe(text))?;
        self.end(name)
    }

    fn paragraph(&mut self, style: Option<&str>, centered: bool, text: &str) -> Result<()> {
        self.start("w:p", &[])?;
        if style.is_some() || centered {
            self.start("w:pPr", &[])?;
            if let Some(style) = style {
                self.empty("w:pStyle", &[("w:val", style)])?;
            }
            if centered {
                self.empty("w:jc", &[("w:val", "center")])?;
            }
            self.end("w:pPr")?;
        }
        self.run(text)?;
        self.end("w:p")
    }

    /// Emits one run; newlines become `<w:br/>` and tabs `<w:tab/>`.
    fn run(&mut self, text: &str) -> Result<()> {
        let text = xml_safe(text);
        if text.is_empty() {
            return Ok(());
        }

        self.start("w:r", &[])?;
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.empty("w:br", &[])?;
            }
            for (j, segment) in line.split('\t').enumerate() {
                if j > 0 {
                    self.empty("w:tab", &[])?;
                }
                if !segment.is_empty() {
                    self.start("w:t", &[("xml:space", "preserve")])?;
                    self.text(segment)?;
                    self.end("w:t")?;
                }
            }
        }
        self.end("w:r")
    }

    fn table(&mut self, rows: &[(String, String)]) -> Result<()> {
        self.start("w:tbl", &[])?;
        self.start("w:tblPr", &[])?;
        self.empty("w:tblStyle", &[("w:val", "TableGrid")])?;
        self.empty("w:tblW", &[("w:w", "0"), ("w:type", "auto")])?;
        self.end("w:tblPr")?;

        self.start("w:tblGrid", &[])?;
        self.empty("w:gridCol", &[("w:w", LABEL_COLUMN_WIDTH)])?;
        self.empty("w:gridCol", &[("w:w", VALUE_COLUMN_WIDTH)])?;
        self.end("w:tblGrid")?;

        for (label, value) in rows {
            self.start("w:tr", &[])?;
            self.cell(label, LABEL_COLUMN_WIDTH)?;
            self.cell(value, VALUE_COLUMN_WIDTH)?;
            self.end("w:tr")?;
        }

        self.end("w:tbl")
    }

    fn cell(&mut self, text: &str, width: &str) -> Result<()> {
        self.start("w:tc", &[])?;
        self.start("w:tcPr", &[])?;
        self.empty("w:tcW", &[("w:w", width), ("w:type", "dxa")])?;
        self.end("w:tcPr")?;
        self.paragraph(None, false, text)?;
        self.end("w:tc")
    }

    fn into_inner(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn body(document: &ReportDocument) -> String {
        String::from_utf8(document_xml(document).unwrap()).unwrap()
    }

    #[test]
    fn test_title_is_centered() {
        let mut document = ReportDocument::new("：");
        document.title("測試公司 公司資料");

        let xml = body(&document);
        assert!(xml.contains(
            r#"<w:pPr><w:pStyle w:val="Title"/><w:jc w:val="center"/></w:pPr><w:r><w:t xml:space="preserve">測試公司 公司資料</w:t></w:r>"#
        ));
    }

    #[test]
    fn test_fields_become_table_rows() {
        let mut document = ReportDocument::new("：");
        document.fields([("統一編號", "12345678"), ("聯絡人", "王小姐")]);

        let xml = body(&document);
        assert!(xml.contains(r#"<w:tblStyle w:val="TableGrid"/>"#));
        assert_eq!(xml.matches("<w:tr>").count(), 2);
        assert!(xml.contains(">12345678</w:t>"));
    }

    #[test]
    fn test_text_is_escaped_and_split() {
        let mut document = ReportDocument::new("：");
        document.paragraph("R&D <team>\r\nline two\tcol\u{0}");

        let xml = body(&document);
        assert!(xml.contains("R&amp;D &lt;team&gt;</w:t><w:br/>"));
        assert!(xml.contains("line two</w:t><w:tab/><w:t xml:space=\"preserve\">col</w:t>"));
        assert!(!xml.contains('\u{0}'));
    }

    #[test]
    fn test_heading_levels() {
        let mut document = ReportDocument::new(": ");
        document.heading(1, "Development History").heading(2, "2020-1");

        let xml = body(&document);
        assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/>"#));
        assert!(xml.contains(r#"<w:pStyle w:val="Heading2"/>"#));
    }

    #[test]
    fn test_package_parts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.docx");
        let mut document = ReportDocument::new(": ");
        document.title("Acme Company Profile").paragraph("hello");

        write_docx(&document, &path).unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
            "word/document.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {name}");
        }

        let mut core = String::new();
        archive
            .by_name("docProps/core.xml")
            .unwrap()
            .read_to_string(&mut core)
            .unwrap();
        assert!(core.contains("<dc:title>Acme Company Profile</dc:title>"));
    }
}
