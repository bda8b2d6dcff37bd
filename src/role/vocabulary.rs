//! Static vocabulary tables mapping external role names to canonical values.
//!
//! The ARIA role table and the landmark table are kept separate and merged
//! once into an immutable [`VocabularyTable`]. During the merge an existing
//! entry is never overwritten, so a landmark name that already has a more
//! specific role (`form`, `search`) keeps it.

use super::canonical::{CanonicalRole, CanonicalState};
use std::collections::HashMap;
use std::sync::LazyLock;

/// ARIA role names and the canonical role each one maps to.
pub const ARIA_ROLES: &[(&str, CanonicalRole)] = &[
    // Not part of ARIA 1.1
    ("description", CanonicalRole::StaticText),
    ("alert", CanonicalRole::Alert),
    ("alertdialog", CanonicalRole::Dialog),
    ("article", CanonicalRole::Article),
    ("application", CanonicalRole::Application),
    ("button", CanonicalRole::Button),
    ("checkbox", CanonicalRole::Checkbox),
    ("columnheader", CanonicalRole::TableColumnHeader),
    ("combobox", CanonicalRole::ComboBox),
    ("definition", CanonicalRole::ListItem),
    ("dialog", CanonicalRole::Dialog),
    ("directory", CanonicalRole::List),
    ("document", CanonicalRole::Document),
    ("figure", CanonicalRole::Figure),
    ("form", CanonicalRole::Form),
    ("grid", CanonicalRole::Table),
    ("gridcell", CanonicalRole::TableCell),
    ("group", CanonicalRole::Grouping),
    ("heading", CanonicalRole::Heading),
    ("img", CanonicalRole::Graphic),
    ("link", CanonicalRole::Link),
    ("list", CanonicalRole::List),
    ("listbox", CanonicalRole::List),
    ("listitem", CanonicalRole::ListItem),
    ("mark", CanonicalRole::MarkedContent),
    ("menu", CanonicalRole::PopupMenu),
    ("menubar", CanonicalRole::MenuBar),
    ("menuitem", CanonicalRole::MenuItem),
    ("menuitemcheckbox", CanonicalRole::MenuItem),
    ("menuitemradio", CanonicalRole::MenuItem),
    ("option", CanonicalRole::ListItem),
    ("progressbar", CanonicalRole::ProgressBar),
    ("radio", CanonicalRole::RadioButton),
    ("radiogroup", CanonicalRole::Grouping),
    ("region", CanonicalRole::Region),
    ("row", CanonicalRole::TableRow),
    ("rowgroup", CanonicalRole::Grouping),
    ("rowheader", CanonicalRole::TableRowHeader),
    ("search", CanonicalRole::Landmark),
    ("separator", CanonicalRole::Separator),
    ("scrollbar", CanonicalRole::ScrollBar),
    ("slider", CanonicalRole::Slider),
    ("spinbutton", CanonicalRole::SpinButton),
    ("status", CanonicalRole::StatusBar),
    ("tab", CanonicalRole::Tab),
    ("tablist", CanonicalRole::TabControl),
    ("tabpanel", CanonicalRole::PropertyPage),
    ("textbox", CanonicalRole::EditableText),
    ("toolbar", CanonicalRole::ToolBar),
    ("tooltip", CanonicalRole::Tooltip),
    ("tree", CanonicalRole::TreeView),
    ("treegrid", CanonicalRole::TreeView),
    ("treeitem", CanonicalRole::TreeViewItem),
    ("suggestion", CanonicalRole::Suggestion),
    ("comment", CanonicalRole::Comment),
    ("deletion", CanonicalRole::DeletedContent),
    ("insertion", CanonicalRole::InsertedContent),
];

/// A landmark role name with the label reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmark {
    pub name: &'static str,
    pub label: &'static str,
}

/// ARIA landmark roles, normally found on web pages.
pub const LANDMARKS: &[Landmark] = &[
    Landmark {
        name: "banner",
        label: "banner",
    },
    Landmark {
        name: "complementary",
        label: "complementary",
    },
    Landmark {
        name: "contentinfo",
        label: "content info",
    },
    Landmark {
        name: "main",
        label: "main",
    },
    Landmark {
        name: "navigation",
        label: "navigation",
    },
    Landmark {
        name: "search",
        label: "search",
    },
    Landmark {
        name: "form",
        label: "form",
    },
];

/// `aria-sort` values with a canonical state. `none` is deliberately absent.
pub const ARIA_SORT_STATES: &[(&str, CanonicalState)] = &[
    ("descending", CanonicalState::SortedDescending),
    ("ascending", CanonicalState::SortedAscending),
    ("other", CanonicalState::Sorted),
];

/// HTML elements with an implicit ARIA role.
pub const HTML_ELEMENT_ROLES: &[(&str, &str)] = &[
    ("header", "banner"),
    ("nav", "navigation"),
    ("main", "main"),
    ("footer", "contentinfo"),
    ("article", "article"),
    ("section", "region"),
    ("aside", "complementary"),
    ("dialog", "dialog"),
    ("figure", "figure"),
    ("mark", "mark"),
];

/// Look up the display label for a landmark role name.
pub fn landmark_label(name: &str) -> Option<&'static str> {
    LANDMARKS
        .iter()
        .find(|landmark| landmark.name == name)
        .map(|landmark| landmark.label)
}

/// Look up the implicit ARIA role of an HTML element (case-sensitive).
pub fn html_element_aria_role(element: &str) -> Option<&'static str> {
    HTML_ELEMENT_ROLES
        .iter()
        .find(|(name, _)| *name == element)
        .map(|(_, role)| *role)
}

/// Look up the canonical sort state of an `aria-sort` value.
pub fn aria_sort_state(value: &str) -> Option<CanonicalState> {
    ARIA_SORT_STATES
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, state)| *state)
}

/// Immutable mapping from textual role names to canonical roles.
///
/// Keys are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyTable {
    entries: HashMap<String, CanonicalRole>,
}

impl VocabularyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, role)` pairs. Later duplicates are ignored.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, CanonicalRole)>) -> Self {
        let mut table = Self::new();
        for (name, role) in pairs {
            table.insert_if_absent(name, role);
        }
        table
    }

    /// Merge landmark names into the table as [`CanonicalRole::Landmark`].
    ///
    /// Names that already have an entry keep their original mapping.
    pub fn with_landmarks<'a>(mut self, landmarks: impl IntoIterator<Item = &'a Landmark>) -> Self {
        for landmark in landmarks {
            self.insert_if_absent(landmark.name, CanonicalRole::Landmark);
        }
        self
    }

    fn insert_if_absent(&mut self, name: &str, role: CanonicalRole) {
        self.entries.entry(name.to_string()).or_insert(role);
    }

    pub fn get(&self, name: &str) -> Option<CanonicalRole> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries sorted by name.
    pub fn sorted_entries(&self) -> Vec<(&str, CanonicalRole)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(name, role)| (name.as_str(), *role))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// ARIA roles merged with landmarks, built on first use.
static ARIA_VOCABULARY: LazyLock<VocabularyTable> = LazyLock::new(|| {
    VocabularyTable::from_pairs(ARIA_ROLES.iter().copied()).with_landmarks(LANDMARKS)
});

/// The merged ARIA vocabulary shared by all normalizers.
pub fn aria_vocabulary() -> &'static VocabularyTable {
    &ARIA_VOCABULARY
}
