//! Canonical role and state vocabulary.
//!
//! Every external role representation (ARIA names, HTML elements, platform
//! role ids) is reduced to one of these values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Abstract UI role, independent of the vocabulary it arrived in.
///
/// The set is closed. `Unknown` is the result for anything that cannot be
/// mapped, so normalization is always total.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalRole {
    #[default]
    Unknown,
    Alert,
    Application,
    Article,
    Button,
    Checkbox,
    ComboBox,
    Comment,
    DeletedContent,
    Dialog,
    Document,
    EditableText,
    Figure,
    Form,
    Graphic,
    Grouping,
    Heading,
    InsertedContent,
    Landmark,
    Link,
    List,
    ListItem,
    MarkedContent,
    MenuBar,
    MenuItem,
    Pane,
    PopupMenu,
    ProgressBar,
    PropertyPage,
    RadioButton,
    Region,
    ScrollBar,
    Separator,
    Slider,
    SpinButton,
    StaticText,
    StatusBar,
    Suggestion,
    Tab,
    TabControl,
    Table,
    TableCell,
    TableColumn,
    TableColumnHeader,
    TableRow,
    TableRowHeader,
    TitleBar,
    ToolBar,
    Tooltip,
    TreeView,
    TreeViewItem,
    Window,
}

impl CanonicalRole {
    /// All roles, in declaration order.
    pub const ALL: [CanonicalRole; 52] = [
        CanonicalRole::Unknown,
        CanonicalRole::Alert,
        CanonicalRole::Application,
        CanonicalRole::Article,
        CanonicalRole::Button,
        CanonicalRole::Checkbox,
        CanonicalRole::ComboBox,
        CanonicalRole::Comment,
        CanonicalRole::DeletedContent,
        CanonicalRole::Dialog,
        CanonicalRole::Document,
        CanonicalRole::EditableText,
        CanonicalRole::Figure,
        CanonicalRole::Form,
        CanonicalRole::Graphic,
        CanonicalRole::Grouping,
        CanonicalRole::Heading,
        CanonicalRole::InsertedContent,
        CanonicalRole::Landmark,
        CanonicalRole::Link,
        CanonicalRole::List,
        CanonicalRole::ListItem,
        CanonicalRole::MarkedContent,
        CanonicalRole::MenuBar,
        CanonicalRole::MenuItem,
        CanonicalRole::Pane,
        CanonicalRole::PopupMenu,
        CanonicalRole::ProgressBar,
        CanonicalRole::PropertyPage,
        CanonicalRole::RadioButton,
        CanonicalRole::Region,
        CanonicalRole::ScrollBar,
        CanonicalRole::Separator,
        CanonicalRole::Slider,
        CanonicalRole::SpinButton,
        CanonicalRole::StaticText,
        CanonicalRole::StatusBar,
        CanonicalRole::Suggestion,
        CanonicalRole::Tab,
        CanonicalRole::TabControl,
        CanonicalRole::Table,
        CanonicalRole::TableCell,
        CanonicalRole::TableColumn,
        CanonicalRole::TableColumnHeader,
        CanonicalRole::TableRow,
        CanonicalRole::TableRowHeader,
        CanonicalRole::TitleBar,
        CanonicalRole::ToolBar,
        CanonicalRole::Tooltip,
        CanonicalRole::TreeView,
        CanonicalRole::TreeViewItem,
        CanonicalRole::Window,
    ];

    /// Snake-case identifier, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalRole::Unknown => "unknown",
            CanonicalRole::Alert => "alert",
            CanonicalRole::Application => "application",
            CanonicalRole::Article => "article",
            CanonicalRole::Button => "button",
            CanonicalRole::Checkbox => "checkbox",
            CanonicalRole::ComboBox => "combo_box",
            CanonicalRole::Comment => "comment",
            CanonicalRole::DeletedContent => "deleted_content",
            CanonicalRole::Dialog => "dialog",
            CanonicalRole::Document => "document",
            CanonicalRole::EditableText => "editable_text",
            CanonicalRole::Figure => "figure",
            CanonicalRole::Form => "form",
            CanonicalRole::Graphic => "graphic",
            CanonicalRole::Grouping => "grouping",
            CanonicalRole::Heading => "heading",
            CanonicalRole::InsertedContent => "inserted_content",
            CanonicalRole::Landmark => "landmark",
            CanonicalRole::Link => "link",
            CanonicalRole::List => "list",
            CanonicalRole::ListItem => "list_item",
            CanonicalRole::MarkedContent => "marked_content",
            CanonicalRole::MenuBar => "menu_bar",
            CanonicalRole::MenuItem => "menu_item",
            CanonicalRole::Pane => "pane",
            CanonicalRole::PopupMenu => "popup_menu",
            CanonicalRole::ProgressBar => "progress_bar",
            CanonicalRole::PropertyPage => "property_page",
            CanonicalRole::RadioButton => "radio_button",
            CanonicalRole::Region => "region",
            CanonicalRole::ScrollBar => "scroll_bar",
            CanonicalRole::Separator => "separator",
            CanonicalRole::Slider => "slider",
            CanonicalRole::SpinButton => "spin_button",
            CanonicalRole::StaticText => "static_text",
            CanonicalRole::StatusBar => "status_bar",
            CanonicalRole::Suggestion => "suggestion",
            CanonicalRole::Tab => "tab",
            CanonicalRole::TabControl => "tab_control",
            CanonicalRole::Table => "table",
            CanonicalRole::TableCell => "table_cell",
            CanonicalRole::TableColumn => "table_column",
            CanonicalRole::TableColumnHeader => "table_column_header",
            CanonicalRole::TableRow => "table_row",
            CanonicalRole::TableRowHeader => "table_row_header",
            CanonicalRole::TitleBar => "title_bar",
            CanonicalRole::ToolBar => "tool_bar",
            CanonicalRole::Tooltip => "tooltip",
            CanonicalRole::TreeView => "tree_view",
            CanonicalRole::TreeViewItem => "tree_view_item",
            CanonicalRole::Window => "window",
        }
    }

    /// Inverse of [`CanonicalRole::as_str`].
    pub fn from_name(name: &str) -> Option<CanonicalRole> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }

    pub fn is_unknown(self) -> bool {
        self == CanonicalRole::Unknown
    }
}

impl fmt::Display for CanonicalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical states derived from ARIA attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalState {
    Sorted,
    SortedAscending,
    SortedDescending,
}

impl CanonicalState {
    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalState::Sorted => "sorted",
            CanonicalState::SortedAscending => "sorted_ascending",
            CanonicalState::SortedDescending => "sorted_descending",
        }
    }
}

impl fmt::Display for CanonicalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
