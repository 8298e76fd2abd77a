/// Extracts the text content of a PDF. An unreadable, scanned or image-only
/// document yields an empty string rather than an error; callers must check
/// before using the result.
pub fn extract_text(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text,
        Err(err) => {
            log::error!("failed to extract text from PDF: {err}");
            String::new()
        }
    }
}
