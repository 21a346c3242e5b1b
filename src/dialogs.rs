//! Native dialogs
//!
//! Dialogs run as async tasks; their results come back as messages so the
//! board state is only ever touched from `update`.

use std::path::PathBuf;

use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};

/// A named file type filter for the save dialog
pub struct FileFilter {
    pub name: String,
    pub extensions: &'static [&'static str],
}

/// Ask the user where to save a file. `None` when dismissed.
pub async fn pick_save_path(
    title: String,
    file_name: String,
    directory: Option<PathBuf>,
    filters: Vec<FileFilter>,
) -> Option<PathBuf> {
    let mut dialog = AsyncFileDialog::new()
        .set_title(title)
        .set_file_name(file_name);
    if let Some(dir) = directory {
        dialog = dialog.set_directory(dir);
    }
    for filter in filters {
        dialog = dialog.add_filter(filter.name, filter.extensions);
    }
    dialog.save_file().await.map(|handle| handle.path().to_path_buf())
}

/// Show an informational notification
pub async fn show_info(title: String, description: String) {
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}

/// Show an error notification
pub async fn show_error(title: String, description: String) {
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
