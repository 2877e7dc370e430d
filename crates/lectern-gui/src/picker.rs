use std::path::PathBuf;

use lectern_core::source::FilePicker;

/// Native file dialog restricted to PDF files.
pub struct RfdPicker;

impl FilePicker for RfdPicker {
    fn pick_pdf(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Open PDF")
            .add_filter("PDF Files", &["pdf"])
            .pick_file()
    }
}
