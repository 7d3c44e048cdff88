//! Native file prompts behind a trait so the window can be driven in tests

use crate::constants::{ALL_FILES_FILTER, XML_FILTER};
use std::path::PathBuf;

/// `None` means the user cancelled the prompt
pub trait FilePicker {
    fn pick_open_file(&mut self) -> Option<PathBuf>;
    fn pick_save_file(&mut self) -> Option<PathBuf>;
    fn pick_folder(&mut self) -> Option<PathBuf>;
}

/// Synchronous native dialogs through rfd
#[derive(Default)]
pub struct RfdFilePicker {
    start_dir: Option<PathBuf>,
}

impl RfdFilePicker {
    pub fn new(start_dir: Option<PathBuf>) -> Self {
        Self { start_dir }
    }

    fn dialog(&self, title: &str) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new().set_title(title);
        match &self.start_dir {
            Some(dir) if dir.is_dir() => dialog.set_directory(dir),
            _ => dialog,
        }
    }

    fn xml_dialog(&self, title: &str) -> rfd::FileDialog {
        self.dialog(title)
            .add_filter(XML_FILTER.0, XML_FILTER.1)
            .add_filter(ALL_FILES_FILTER.0, ALL_FILES_FILTER.1)
    }
}

impl FilePicker for RfdFilePicker {
    fn pick_open_file(&mut self) -> Option<PathBuf> {
        self.xml_dialog("Open Galactic Conquest").pick_file()
    }

    fn pick_save_file(&mut self) -> Option<PathBuf> {
        self.xml_dialog("Save Galactic Conquest").save_file()
    }

    fn pick_folder(&mut self) -> Option<PathBuf> {
        let folder = self.dialog("Select Data folder").pick_folder();
        if let Some(dir) = &folder {
            self.start_dir = Some(dir.clone());
        }
        folder
    }
}
