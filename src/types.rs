//! Common types and data structures

/// Sort direction for table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// How a table column takes up horizontal space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSizing {
    /// Fill the remaining width
    Stretch,
    /// Size to the widest cell
    FitToContent,
    /// User-resizable, starts at content width
    Resizable,
}

/// Entries of the main window menu bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Save,
    SetDataFolder,
    Quit,
    CreateTradeRoute,
    CampaignProperties,
    AutoConnectionSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    TradeRouteCreator,
    CampaignProperties,
    AutoConnectionSettings,
}

/// What the shell has to do after a menu action was handled by the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Handled,
    Close,
    OpenDialog(DialogKind),
}
