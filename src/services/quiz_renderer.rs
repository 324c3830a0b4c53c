use std::{io::Cursor, path::PathBuf, sync::Once};

use printpdf::{
    lopdf::{self, Object, StringFormat},
    BuiltinFont, CustomPdfConformance, IndirectFontRef, Mm, OffsetDateTime, PdfConformance,
    PdfDocument, PdfDocumentReference,
};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuestionRecord, QuizMode},
};

// US letter
const PAGE_WIDTH: Mm = Mm(215.9);
const PAGE_HEIGHT: Mm = Mm(279.4);
const MARGIN_MM: f32 = 20.0;
const PT_TO_MM: f32 = 0.3528;
const LINE_SPACING: f32 = 1.35;
const SPACER_MM: f32 = 12.0 * PT_TO_MM;
const LAYER_NAME: &str = "Quiz";
// stands in for both halves of the trailer ID so identical input gives identical bytes
const DOCUMENT_ID: &str = "voicetutorquizdocument0000000001";

static BUILTIN_FONT_WARNING: Once = Once::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Question,
    Option,
    Answer,
    Explanation,
    Spacer,
}

impl LineStyle {
    fn font_size(self) -> f32 {
        match self {
            LineStyle::Title => 18.0,
            LineStyle::Question => 12.0,
            _ => 11.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutLine {
    pub style: LineStyle,
    pub text: String,
}

impl LayoutLine {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    fn spacer() -> Self {
        Self::new(LineStyle::Spacer, "")
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    builtin: bool,
}

impl Fonts {
    fn for_style(&self, style: LineStyle) -> &IndirectFontRef {
        match style {
            LineStyle::Title | LineStyle::Question | LineStyle::Answer => &self.bold,
            LineStyle::Explanation => &self.italic,
            LineStyle::Option | LineStyle::Spacer => &self.regular,
        }
    }
}

fn render_failure(cause: impl std::fmt::Debug) -> AppError {
    AppError::RenderError(format!("PDF creation failed: {:?}", cause))
}

/// Builds quiz PDFs in memory.
#[derive(Clone, Debug, Default)]
pub struct QuizRenderer {
    font_path: Option<PathBuf>,
}

impl QuizRenderer {
    pub fn new(font_path: Option<PathBuf>) -> Self {
        Self { font_path }
    }

    /// Styled lines of the document, before wrapping and pagination.
    pub fn layout(
        records: &[QuestionRecord],
        mode: QuizMode,
        language_tag: &str,
    ) -> Vec<LayoutLine> {
        let mut lines = vec![
            LayoutLine::new(LineStyle::Title, mode.title(language_tag)),
            LayoutLine::spacer(),
        ];

        for (idx, record) in records.iter().enumerate() {
            lines.push(LayoutLine::new(
                LineStyle::Question,
                format!("Q{}: {}", idx + 1, record.question),
            ));

            // more than 26 options runs past 'Z'
            for (position, option) in record.options.iter().enumerate() {
                let letter = char::from(b'A'.wrapping_add(position as u8));
                lines.push(LayoutLine::new(
                    LineStyle::Option,
                    format!("{}. {}", letter, option),
                ));
            }

            if mode.includes_answers() {
                lines.push(LayoutLine::new(
                    LineStyle::Answer,
                    format!("Answer: {}", record.answer),
                ));
                if record.has_explanation() {
                    lines.push(LayoutLine::new(
                        LineStyle::Explanation,
                        format!("Explanation: {}", record.explanation),
                    ));
                }
            }

            lines.push(LayoutLine::spacer());
        }

        lines
    }

    pub fn render(
        &self,
        records: &[QuestionRecord],
        mode: QuizMode,
        language_tag: &str,
    ) -> AppResult<Vec<u8>> {
        let lines = Self::layout(records, mode, language_tag);
        let (doc, page, layer) =
            PdfDocument::new(mode.title(language_tag), PAGE_WIDTH, PAGE_HEIGHT, LAYER_NAME);
        let doc = doc
            .with_document_id(DOCUMENT_ID.to_string())
            .with_creation_date(OffsetDateTime::UNIX_EPOCH)
            .with_mod_date(OffsetDateTime::UNIX_EPOCH)
            .with_metadata_date(OffsetDateTime::UNIX_EPOCH)
            .with_conformance(PdfConformance::Custom(CustomPdfConformance {
                requires_xmp_metadata: false,
                requires_icc_profile: false,
                allows_default_fonts: true,
                ..Default::default()
            }));
        let fonts = self.load_fonts(&doc)?;

        if fonts.builtin && lines.iter().any(|l| has_non_latin1(&l.text)) {
            BUILTIN_FONT_WARNING.call_once(|| {
                log::warn!(
                    "Quiz text for '{}' needs glyphs the built-in PDF fonts lack; set QUIZ_FONT_PATH to a Unicode TrueType font",
                    language_tag
                );
            });
        }

        let mut current_layer = doc.get_page(page).get_layer(layer);
        let mut y = PAGE_HEIGHT.0 - MARGIN_MM;

        for line in &lines {
            if line.style == LineStyle::Spacer {
                y -= SPACER_MM;
                continue;
            }

            let size = line.style.font_size();
            let height = size * PT_TO_MM * LINE_SPACING;
            let font = fonts.for_style(line.style);

            for chunk in wrap_text(&line.text, max_chars_per_line(size)) {
                if y - height < MARGIN_MM {
                    let (next_page, next_layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, LAYER_NAME);
                    current_layer = doc.get_page(next_page).get_layer(next_layer);
                    y = PAGE_HEIGHT.0 - MARGIN_MM;
                }
                y -= height;

                let text = if fonts.builtin {
                    latin1_only(&chunk)
                } else {
                    chunk
                };
                current_layer.use_text(text, size, Mm(MARGIN_MM), Mm(y), font);
            }
        }

        let bytes = doc.save_to_bytes().map_err(render_failure)?;
        with_stable_trailer_id(&bytes)
    }

    fn load_fonts(&self, doc: &PdfDocumentReference) -> AppResult<Fonts> {
        match &self.font_path {
            Some(path) => {
                let bytes = std::fs::read(path).map_err(|e| {
                    AppError::RenderError(format!(
                        "Failed to read font {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let font = doc
                    .add_external_font(Cursor::new(bytes))
                    .map_err(render_failure)?;
                Ok(Fonts {
                    regular: font.clone(),
                    bold: font.clone(),
                    italic: font,
                    builtin: false,
                })
            }
            None => Ok(Fonts {
                regular: doc
                    .add_builtin_font(BuiltinFont::Helvetica)
                    .map_err(render_failure)?,
                bold: doc
                    .add_builtin_font(BuiltinFont::HelveticaBold)
                    .map_err(render_failure)?,
                italic: doc
                    .add_builtin_font(BuiltinFont::HelveticaOblique)
                    .map_err(render_failure)?,
                builtin: true,
            }),
        }
    }
}

fn max_chars_per_line(font_size: f32) -> usize {
    let usable_width = PAGE_WIDTH.0 - 2.0 * MARGIN_MM;
    // average Helvetica glyph is about half an em wide
    let glyph_width = font_size * PT_TO_MM * 0.5;
    ((usable_width / glyph_width) as usize).max(1)
}

/// Greedy word wrap on character counts. Embedded newlines are kept as
/// breaks and words longer than a line are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > max_chars {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 {
                word.len()
            } else {
                current_len + 1 + word.len()
            };
            if needed > max_chars && current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }

        lines.push(current);
    }

    lines
}

/// printpdf stamps a random instance id into the trailer on every save.
fn with_stable_trailer_id(bytes: &[u8]) -> AppResult<Vec<u8>> {
    let mut pdf = lopdf::Document::load_mem(bytes).map_err(render_failure)?;
    let id = Object::String(DOCUMENT_ID.as_bytes().to_vec(), StringFormat::Literal);
    pdf.trailer.set("ID", Object::Array(vec![id.clone(), id]));

    let mut out = Vec::with_capacity(bytes.len());
    pdf.save_to(&mut out).map_err(render_failure)?;
    Ok(out)
}

fn has_non_latin1(text: &str) -> bool {
    text.chars().any(|c| (c as u32) > 0xFF)
}

/// Built-in PDF fonts only cover Latin-1; anything else becomes `?`.
fn latin1_only(text: &str) -> String {
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { c } else { '?' })
        .collect()
}
