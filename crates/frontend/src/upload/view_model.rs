//! Upload page - View Model

use leptos::prelude::*;

/// Local state of the upload page.
///
/// `selected_file` lives in local storage because `web_sys::File` is a JS
/// handle; everything else is plain data. `upload_ok` and `animation_done`
/// gate the navigation to the chat route: both must be set before we leave.
#[derive(Clone, Copy)]
pub struct UploadVm {
    pub collection_name: RwSignal<String>,
    pub selected_file: RwSignal<Option<web_sys::File>, LocalStorage>,
    pub drag_active: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub is_processing: RwSignal<bool>,
    pub upload_ok: RwSignal<bool>,
    pub animation_done: RwSignal<bool>,
}

impl UploadVm {
    pub fn new() -> Self {
        Self {
            collection_name: RwSignal::new("pdf_collection".to_string()),
            selected_file: RwSignal::new_local(None),
            drag_active: RwSignal::new(false),
            error: RwSignal::new(None),
            is_processing: RwSignal::new(false),
            upload_ok: RwSignal::new(false),
            animation_done: RwSignal::new(false),
        }
    }

    /// Validate and store a picked or dropped file. Non-PDF files never make it
    /// into `selected_file`; a valid PDF clears any prior error.
    pub fn accept_file(&self, file: web_sys::File) {
        if is_pdf(&file.type_()) {
            self.selected_file.set(Some(file));
            self.error.set(None);
        } else {
            self.error.set(Some("Please upload a PDF file only".to_string()));
        }
    }
}

impl Default for UploadVm {
    fn default() -> Self {
        Self::new()
    }
}

/// Client-side MIME sniffing only; the backend is responsible for real
/// content validation.
pub fn is_pdf(mime: &str) -> bool {
    mime == "application/pdf"
}

/// The upload control is enabled only with a file and a non-blank name.
pub fn can_submit(has_file: bool, collection_name: &str) -> bool {
    has_file && !collection_name.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pdf_mime_is_accepted() {
        assert!(is_pdf("application/pdf"));
        assert!(!is_pdf("application/x-pdf"));
        assert!(!is_pdf("text/plain"));
        assert!(!is_pdf(""));
    }

    #[test]
    fn submit_needs_file_and_name() {
        assert!(can_submit(true, "research"));
        assert!(!can_submit(false, "research"));
        assert!(!can_submit(true, ""));
        assert!(!can_submit(true, "   "));
    }
}
