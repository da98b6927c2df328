//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Word-Processor-Document Encoder
//!
//! Writes a DOCX file: a `Title`-styled heading followed by one paragraph per
//! element (`Item i: ` label) or per key (`key: ` label). Labels are bold
//! runs; a scalar payload becomes a single unlabeled paragraph.

use crate::config::ZiExportConfig;
use crate::errors::Result;
use crate::format::ZiExportFormat;
use crate::shape::{scalar_text, ZiPayload};

use super::ooxml::{xml_escape, ZiOoxmlPackage, RELATIONSHIP_OFFICE_DOCUMENT, XML_DECLARATION};
use super::ZiEncoder;

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Encoder for `.docx` artifacts.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiDocumentEncoder;

impl ZiEncoder for ZiDocumentEncoder {
    fn format(&self) -> ZiExportFormat {
        ZiExportFormat::Docx
    }

    fn encode(&self, payload: &ZiPayload<'_>, config: &ZiExportConfig) -> Result<Vec<u8>> {
        let mut body = heading(&config.document_title);

        match payload {
            ZiPayload::SequenceOfMapping(items) | ZiPayload::Sequence(items) => {
                for (idx, item) in items.iter().enumerate() {
                    body.push_str(&paragraph(
                        Some(&format!("Item {}: ", idx + 1)),
                        &scalar_text(item),
                    ));
                }
            }
            ZiPayload::Mapping(map) => {
                for (key, value) in map.iter() {
                    body.push_str(&paragraph(Some(&format!("{}: ", key)), &scalar_text(value)));
                }
            }
            ZiPayload::Scalar(value) => {
                body.push_str(&paragraph(None, &scalar_text(value)));
            }
        }

        let mut package = ZiOoxmlPackage::new();
        package.add_relationships(
            "_rels/.rels",
            &[("rId1", RELATIONSHIP_OFFICE_DOCUMENT, "word/document.xml")],
        );
        package.add_part(
            "word/document.xml",
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"),
            document_xml(&body),
        );
        package.add_relationships(
            "word/_rels/document.xml.rels",
            &[(
                "rId1",
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles",
                "styles.xml",
            )],
        );
        package.add_part(
            "word/styles.xml",
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"),
            styles_xml(),
        );
        package.finish()
    }
}

fn heading(title: &str) -> String {
    format!(
        r#"<w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr>{}</w:p>"#,
        run(title, false)
    )
}

fn paragraph(label: Option<&str>, text: &str) -> String {
    let mut xml = String::from("<w:p>");
    if let Some(label) = label {
        xml.push_str(&run(label, true));
    }
    xml.push_str(&run(text, false));
    xml.push_str("</w:p>");
    xml
}

/// A text run; embedded newlines become `<w:br/>` breaks.
fn run(text: &str, bold: bool) -> String {
    let mut xml = String::from("<w:r>");
    if bold {
        xml.push_str("<w:rPr><w:b/></w:rPr>");
    }
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            xml.push_str("<w:br/>");
        }
        xml.push_str(&format!(
            r#"<w:t xml:space="preserve">{}</w:t>"#,
            xml_escape(line.trim_end_matches('\r'))
        ));
    }
    xml.push_str("</w:r>");
    xml
}

fn document_xml(body: &str) -> String {
    format!(
        concat!(
            "{}",
            r#"<w:document xmlns:w="{}"><w:body>"#,
            "{}",
            r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/>"#,
            r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/>"#,
            "</w:sectPr></w:body></w:document>"
        ),
        XML_DECLARATION, WORD_NS, body
    )
}

fn styles_xml() -> String {
    format!(
        concat!(
            "{}",
            r#"<w:styles xmlns:w="{}">"#,
            r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/>"#,
            r#"<w:pPr><w:spacing w:after="120"/></w:pPr><w:rPr><w:sz w:val="22"/></w:rPr></w:style>"#,
            r#"<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/>"#,
            r#"<w:next w:val="Normal"/><w:qFormat/><w:pPr><w:spacing w:after="240"/></w:pPr>"#,
            r#"<w:rPr><w:b/><w:sz w:val="48"/></w:rPr></w:style>"#,
            "</w:styles>"
        ),
        XML_DECLARATION, WORD_NS
    )
}
