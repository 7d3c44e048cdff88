//! Application constants and configuration

pub const APP_NAME: &str = "Galactic Conquest Editor";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name under the platform data dir (settings, logs)
pub const DATA_DIR_NAME: &str = "Galactic Conquest Editor";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "galactic-conquest-editor.log";

/// File dialog filters, (label, extensions)
pub const XML_FILTER: (&str, &[&str]) = ("XML Files", &["xml"]);
pub const ALL_FILES_FILTER: (&str, &[&str]) = ("All Files", &["*"]);

pub const PLANETS_HEADER: &str = "Planets";
pub const TRADE_ROUTES_HEADER: &str = "Trade Routes";
