use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag};

use crate::config;

/// A resume picked in the browser, read into memory so the payload can be
/// rebuilt on every retry.
#[derive(Clone, PartialEq)]
pub struct CvFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for CvFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CvFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl CvFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn is_pdf(&self) -> bool {
        accepts_mime(&self.mime_type)
    }

    /// Wraps the bytes in a `Blob` carrying the original MIME type.
    pub fn to_blob(&self) -> Result<Blob, JsValue> {
        let parts = Array::new();
        parts.push(&Uint8Array::from(self.bytes.as_slice()));
        let options = BlobPropertyBag::new();
        options.set_type(&self.mime_type);
        Blob::new_with_u8_array_sequence_and_options(&parts, &options)
    }
}

/// Exact match only. The browser-declared type is all we look at; the
/// content itself is never sniffed.
pub fn accepts_mime(mime_type: &str) -> bool {
    mime_type == config::PDF_MIME_TYPE
}

pub async fn read_file(file: &web_sys::File) -> Result<CvFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(CvFile::new(file.name(), file.type_(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_pdf_mime_is_accepted() {
        assert!(accepts_mime("application/pdf"));
        assert!(!accepts_mime("application/PDF"));
        assert!(!accepts_mime("application/pdf; charset=binary"));
        assert!(!accepts_mime("application/msword"));
        assert!(!accepts_mime(""));
    }

    #[test]
    fn debug_output_omits_file_contents() {
        let file = CvFile::new("cv.pdf", "application/pdf", vec![0x25, 0x50, 0x44, 0x46]);
        let printed = format!("{:?}", file);
        assert!(printed.contains("cv.pdf"));
        assert!(printed.contains("len: 4"));
    }
}
