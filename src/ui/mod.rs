//! UI module - window, tables, plot and dialogs
//!
//! Nothing in here owns game state. The main window forwards input to its
//! presenter and dialogs edit drafts that are written back on accept.

pub mod dialogs;
pub mod file_picker;
pub mod galactic_plot;
pub mod main_window;
pub mod table;
