// file: src/loader/pdf.rs
// description: page-by-page text extraction from policy pdfs
// reference: https://docs.rs/lopdf

use crate::error::{ClaimDeskError, Result};
use lopdf::Document;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub content: String,
    pub page_count: usize,
}

pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Joins the text of every non-empty page, each followed by exactly one newline.
    pub fn extract(path: &Path) -> Result<ExtractedText> {
        let doc = Document::load(path).map_err(|e| ClaimDeskError::Pdf(e.to_string()))?;
        Self::extract_document(&doc)
    }

    pub fn extract_document(doc: &Document) -> Result<ExtractedText> {
        let pages = doc.get_pages();
        let page_count = pages.len();
        let mut content = String::new();

        for page_number in pages.keys() {
            let page_text = doc
                .extract_text(&[*page_number])
                .map_err(|e| ClaimDeskError::Pdf(format!("page {}: {}", page_number, e)))?;

            let page_text = page_text.trim_end_matches(['\r', '\n']);

            if page_text.is_empty() {
                debug!("Page {} has no extractable text", page_number);
                continue;
            }

            content.push_str(page_text);
            content.push('\n');
        }

        Ok(ExtractedText {
            content,
            page_count,
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};
    use std::path::Path;

    /// Writes a single-font pdf with one page per entry in `pages`.
    pub fn write_pdf(path: &Path, pages: &[&str]) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let page_total = kids.len() as i64;
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_total,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }
}
