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

//! # Paginated-Document Encoder
//!
//! Builds a PDF with `lopdf`: US-Letter pages, the configured title in
//! Helvetica-Bold, then one block per element (`Item i: value`) or per key
//! (`key: value`) with the label in bold. A scalar payload is a single
//! unlabeled block.
//!
//! Layout is deliberately simple: text is wrapped on an estimated average
//! glyph width and a new page starts whenever the next line would cross the
//! bottom margin. The standard Type1 fonts use WinAnsiEncoding, so characters
//! outside that code page are written as `?`.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::config::ZiExportConfig;
use crate::errors::{Result, ZiError};
use crate::format::ZiExportFormat;
use crate::shape::{scalar_text, ZiPayload};

use super::ZiEncoder;

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 72.0;
const TITLE_SIZE: f32 = 18.0;
const TITLE_LEADING: f32 = 22.0;
const BODY_SIZE: f32 = 10.0;
const BODY_LEADING: f32 = 14.0;
const TITLE_SPACING: f32 = 12.0;
const BLOCK_SPACING: f32 = 6.0;
// Average Helvetica advance as a fraction of the font size, rounded up.
const AVG_GLYPH_WIDTH: f32 = 0.55;

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

/// Encoder for `.pdf` artifacts.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiPaginatedEncoder;

impl ZiEncoder for ZiPaginatedEncoder {
    fn format(&self) -> ZiExportFormat {
        ZiExportFormat::Pdf
    }

    fn encode(&self, payload: &ZiPayload<'_>, config: &ZiExportConfig) -> Result<Vec<u8>> {
        let mut layout = ZiPageLayout::new();
        layout.title(&config.document_title);

        match payload {
            ZiPayload::SequenceOfMapping(items) | ZiPayload::Sequence(items) => {
                for (idx, item) in items.iter().enumerate() {
                    layout.block(Some(&format!("Item {}: ", idx + 1)), &scalar_text(item));
                }
            }
            ZiPayload::Mapping(map) => {
                for (key, value) in map.iter() {
                    layout.block(Some(&format!("{}: ", key)), &scalar_text(value));
                }
            }
            ZiPayload::Scalar(value) => layout.block(None, &scalar_text(value)),
        }

        build_document(&config.document_title, layout.finish())
    }
}

/// Accumulates text operations and breaks them into pages.
struct ZiPageLayout {
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    cursor_y: f32,
}

impl ZiPageLayout {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            cursor_y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn title(&mut self, title: &str) {
        for line in wrap_text(title, max_chars(TITLE_SIZE), max_chars(TITLE_SIZE)) {
            self.ensure_room(TITLE_LEADING);
            self.cursor_y -= TITLE_LEADING;
            self.text_line(&[(BOLD_FONT, TITLE_SIZE, line.as_str())]);
        }
        self.cursor_y -= TITLE_SPACING;
    }

    fn block(&mut self, label: Option<&str>, text: &str) {
        let width = max_chars(BODY_SIZE);
        let label_chars = label.map_or(0, |l| l.chars().count());
        let first_width = width.saturating_sub(label_chars).max(width / 4);
        let lines = wrap_text(text, first_width, width);

        for (idx, line) in lines.iter().enumerate() {
            self.ensure_room(BODY_LEADING);
            self.cursor_y -= BODY_LEADING;
            match label {
                Some(label) if idx == 0 => self.text_line(&[
                    (BOLD_FONT, BODY_SIZE, label),
                    (REGULAR_FONT, BODY_SIZE, line.as_str()),
                ]),
                _ => self.text_line(&[(REGULAR_FONT, BODY_SIZE, line.as_str())]),
            }
        }
        self.cursor_y -= BLOCK_SPACING;
    }

    fn ensure_room(&mut self, leading: f32) {
        if self.cursor_y - leading < MARGIN && !self.current.is_empty() {
            let page = std::mem::take(&mut self.current);
            self.pages.push(page);
            self.cursor_y = PAGE_HEIGHT - MARGIN;
        }
    }

    /// One line at the cursor; each segment may switch font.
    fn text_line(&mut self, segments: &[(&str, f32, &str)]) {
        self.current.push(Operation::new("BT", vec![]));
        let mut positioned = false;
        for (font, size, text) in segments {
            self.current.push(Operation::new(
                "Tf",
                vec![Object::Name(font.as_bytes().to_vec()), Object::Real(*size)],
            ));
            if !positioned {
                self.current.push(Operation::new(
                    "Td",
                    vec![Object::Real(MARGIN), Object::Real(self.cursor_y)],
                ));
                positioned = true;
            }
            self.current.push(Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ));
        }
        self.current.push(Operation::new("ET", vec![]));
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

fn max_chars(font_size: f32) -> usize {
    ((PAGE_WIDTH - 2.0 * MARGIN) / (font_size * AVG_GLYPH_WIDTH)) as usize
}

/// Greedy word wrap; explicit newlines are kept and over-long words are split.
pub fn wrap_text(text: &str, first_width: usize, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    let limit = |lines: &Vec<String>| if lines.is_empty() { first_width } else { width };

    for paragraph in text.split('\n') {
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            loop {
                let max = limit(&lines).max(1);
                let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
                if needed <= max {
                    if current_len > 0 {
                        current.push(' ');
                        current_len += 1;
                    }
                    current.extend(word.iter());
                    current_len += word.len();
                    break;
                }
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                    continue;
                }
                let rest = word.split_off(max);
                lines.push(word.iter().collect());
                word = rest;
                if word.is_empty() {
                    break;
                }
            }
        }
        lines.push(std::mem::take(&mut current));
        current_len = 0;
    }

    while lines.len() > 1 && lines.last().map_or(false, String::is_empty) {
        lines.pop();
    }
    lines
}

/// Maps text onto WinAnsiEncoding bytes.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\t' => b' ',
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

fn build_document(title: &str, pages: Vec<Vec<Operation>>) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { REGULAR_FONT => regular_id, BOLD_FONT => bold_id },
    });

    let mut page_ids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        page_ids.push(page_id.into());
    }

    let page_count = page_ids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => page_count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(encode_win_ansi(title), StringFormat::Literal),
        "Producer" => Object::String(b"Zi Export".to_vec(), StringFormat::Literal),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ZiError::Pdf(format!("PDF serialization error: {}", e)))?;
    Ok(buffer)
}
