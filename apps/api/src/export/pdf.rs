//! Minimal PDF 1.4 writer for laid-out documents.
//!
//! Only what a text-only résumé needs: base-14 Type1 fonts with WinAnsiEncoding, one
//! uncompressed content stream per page, and a classic cross-reference table. Output
//! carries no timestamps or random IDs, so identical documents give identical bytes.

use std::io::{self, Write};

use crate::layout::flow::{Document, Page, Rgb};
use crate::layout::font_metrics::{Face, MM_PER_PT};

const HEADER: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";

/// First object number used for fonts; 1 is the catalog and 2 the page tree.
const FIRST_FONT_OBJ: usize = 3;

/// Serializes `doc` into `out`.
pub fn write_pdf<W: Write>(doc: &Document, out: W) -> io::Result<()> {
    let faces = faces_in_use(doc);
    let page_w = doc.config.page_width_mm / MM_PER_PT;
    let page_h = doc.config.page_height_mm / MM_PER_PT;

    let first_page_obj = FIRST_FONT_OBJ + faces.len();
    let page_objs: Vec<usize> = (0..doc.pages.len())
        .map(|i| first_page_obj + 2 * i)
        .collect();

    let mut w = ObjectWriter::new(out);
    w.raw(HEADER)?;

    w.object(1, "<< /Type /Catalog /Pages 2 0 R >>")?;

    let kids: Vec<String> = page_objs.iter().map(|n| format!("{n} 0 R")).collect();
    w.object(
        2,
        &format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_objs.len()
        ),
    )?;

    for (i, face) in faces.iter().enumerate() {
        w.object(
            FIRST_FONT_OBJ + i,
            &format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                face.base_font()
            ),
        )?;
    }

    let font_resources: Vec<String> = (0..faces.len())
        .map(|i| format!("/F{} {} 0 R", i + 1, FIRST_FONT_OBJ + i))
        .collect();
    let font_resources = font_resources.join(" ");

    for (page, &page_obj) in doc.pages.iter().zip(&page_objs) {
        let content_obj = page_obj + 1;
        w.object(
            page_obj,
            &format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {page_w:.2} {page_h:.2}] \
                 /Resources << /Font << {font_resources} >> >> /Contents {content_obj} 0 R >>"
            ),
        )?;
        let content = page_content(page, &faces, page_h);
        w.stream(content_obj, &content)?;
    }

    w.finish(1)
}

/// Distinct faces in first-use order; resource `/F{n}` is `faces[n - 1]`.
fn faces_in_use(doc: &Document) -> Vec<Face> {
    let mut faces: Vec<Face> = Vec::new();
    for block in doc.pages.iter().flat_map(|p| &p.blocks) {
        if !faces.contains(&block.style.face) {
            faces.push(block.style.face);
        }
    }
    faces
}

fn page_content(page: &Page, faces: &[Face], page_h_pt: f32) -> Vec<u8> {
    let mut content = Vec::new();
    for block in &page.blocks {
        let font_index = faces
            .iter()
            .position(|f| *f == block.style.face)
            .map_or(1, |i| i + 1);
        let x = block.x_mm / MM_PER_PT;
        let y = page_h_pt - block.y_mm / MM_PER_PT;
        let Rgb(r, g, b) = block.style.color;

        content.extend_from_slice(
            format!(
                "BT\n/F{font_index} {:.1} Tf\n{} {} {} rg\n{x:.2} {y:.2} Td\n(",
                block.style.size_pt,
                channel(r),
                channel(g),
                channel(b),
            )
            .as_bytes(),
        );
        content.extend(encode_text(&block.text));
        content.extend_from_slice(b") Tj\nET\n");
    }
    content
}

fn channel(c: u8) -> String {
    format!("{:.3}", f32::from(c) / 255.0)
}

/// Encodes `text` as the body of a PDF literal string in WinAnsiEncoding.
///
/// Delimiters and backslashes are escaped; characters WinAnsi cannot express become `?`.
pub(crate) fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(ch as u8);
            }
            _ => out.push(win_ansi_byte(ch)),
        }
    }
    out
}

fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        _ => b'?',
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Object writer
// ────────────────────────────────────────────────────────────────────────────

/// Writes numbered objects while recording their byte offsets for the xref table.
struct ObjectWriter<W: Write> {
    out: W,
    written: usize,
    /// Byte offset of object `n` at index `n - 1`.
    offsets: Vec<usize>,
}

impl<W: Write> ObjectWriter<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            offsets: Vec::new(),
        }
    }

    fn raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }

    fn begin(&mut self, number: usize) -> io::Result<()> {
        if self.offsets.len() < number {
            self.offsets.resize(number, 0);
        }
        self.offsets[number - 1] = self.written;
        self.raw(format!("{number} 0 obj\n").as_bytes())
    }

    fn object(&mut self, number: usize, body: &str) -> io::Result<()> {
        self.begin(number)?;
        self.raw(body.as_bytes())?;
        self.raw(b"\nendobj\n")
    }

    fn stream(&mut self, number: usize, data: &[u8]) -> io::Result<()> {
        self.begin(number)?;
        self.raw(format!("<< /Length {} >>\nstream\n", data.len()).as_bytes())?;
        self.raw(data)?;
        self.raw(b"\nendstream\nendobj\n")
    }

    fn finish(mut self, root: usize) -> io::Result<()> {
        let xref_at = self.written;
        let size = self.offsets.len() + 1;

        let mut table = format!("xref\n0 {size}\n0000000000 65535 f \n");
        for offset in &self.offsets {
            table.push_str(&format!("{offset:010} 00000 n \n"));
        }
        table.push_str(&format!(
            "trailer\n<< /Size {size} /Root {root} 0 R >>\nstartxref\n{xref_at}\n%%EOF\n"
        ));
        self.raw(table.as_bytes())?;
        self.out.flush()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
