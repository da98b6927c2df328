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

//! # OOXML Package Helpers
//!
//! XLSX and DOCX files are ZIP containers of XML parts plus a
//! `[Content_Types].xml` index. [`ZiOoxmlPackage`] collects the parts and
//! writes the container in one pass; [`xml_escape`] makes arbitrary payload
//! text safe for XML 1.0.

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::errors::Result;

pub const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub const RELATIONSHIP_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

/// In-memory OOXML package under construction.
#[derive(Debug, Default)]
pub struct ZiOoxmlPackage {
    parts: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
}

impl ZiOoxmlPackage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a part; `content_type` registers an `<Override>` for it.
    pub fn add_part(&mut self, path: &str, content_type: Option<&str>, xml: String) {
        if let Some(content_type) = content_type {
            self.overrides
                .push((format!("/{}", path), content_type.to_string()));
        }
        self.parts.push((path.to_string(), xml));
    }

    /// Adds a `.rels` part listing `(id, type, target)` relationships.
    pub fn add_relationships(&mut self, path: &str, relationships: &[(&str, &str, &str)]) {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for (id, kind, target) in relationships {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                id, kind, target
            ));
        }
        xml.push_str("</Relationships>");
        self.parts.push((path.to_string(), xml));
    }

    /// Writes the ZIP container, `[Content_Types].xml` first.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(self.content_types().as_bytes())?;

        for (path, xml) in &self.parts {
            zip.start_file(path.as_str(), options)?;
            zip.write_all(xml.as_bytes())?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    fn content_types(&self) -> String {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        xml.push_str(
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
        );
        xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
        for (part, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                part, content_type
            ));
        }
        xml.push_str("</Types>");
        xml
    }
}

/// Escapes markup characters and drops characters XML 1.0 forbids.
pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if (c as u32) < 0x20 => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}
