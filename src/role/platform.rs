//! Platform accessibility role identifiers.
//!
//! The platform table is owned by the accessibility subsystem; the normalizer
//! only consults it through [`PlatformRoleLookup`].

use super::canonical::CanonicalRole;
use std::collections::HashMap;

/// Lookup of numeric platform role ids.
pub trait PlatformRoleLookup: Send + Sync {
    /// Canonical role for a platform role id, or `None` if the id is unmapped.
    fn lookup(&self, id: u32) -> Option<CanonicalRole>;
}

/// HashMap-backed platform role table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformRoleTable {
    roles: HashMap<u32, CanonicalRole>,
}

impl PlatformRoleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u32, role: CanonicalRole) -> Option<CanonicalRole> {
        self.roles.insert(id, role)
    }

    /// Apply `overrides` on top of this table. Override entries win.
    pub fn extend_with(mut self, overrides: impl IntoIterator<Item = (u32, CanonicalRole)>) -> Self {
        self.roles.extend(overrides);
        self
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl FromIterator<(u32, CanonicalRole)> for PlatformRoleTable {
    fn from_iter<T: IntoIterator<Item = (u32, CanonicalRole)>>(iter: T) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}

impl PlatformRoleLookup for PlatformRoleTable {
    fn lookup(&self, id: u32) -> Option<CanonicalRole> {
        self.roles.get(&id).copied()
    }
}

/// MSAA `ROLE_SYSTEM_*` constants with a canonical counterpart.
const MSAA_ROLES: &[(u32, CanonicalRole)] = &[
    (1, CanonicalRole::TitleBar),
    (2, CanonicalRole::MenuBar),
    (3, CanonicalRole::ScrollBar),
    (8, CanonicalRole::Alert),
    (9, CanonicalRole::Window),
    (11, CanonicalRole::PopupMenu),
    (12, CanonicalRole::MenuItem),
    (13, CanonicalRole::Tooltip),
    (14, CanonicalRole::Application),
    (15, CanonicalRole::Document),
    (16, CanonicalRole::Pane),
    (18, CanonicalRole::Dialog),
    (20, CanonicalRole::Grouping),
    (21, CanonicalRole::Separator),
    (22, CanonicalRole::ToolBar),
    (23, CanonicalRole::StatusBar),
    (24, CanonicalRole::Table),
    (25, CanonicalRole::TableColumnHeader),
    (26, CanonicalRole::TableRowHeader),
    (27, CanonicalRole::TableColumn),
    (28, CanonicalRole::TableRow),
    (29, CanonicalRole::TableCell),
    (30, CanonicalRole::Link),
    (33, CanonicalRole::List),
    (34, CanonicalRole::ListItem),
    (35, CanonicalRole::TreeView),
    (36, CanonicalRole::TreeViewItem),
    (37, CanonicalRole::Tab),
    (38, CanonicalRole::PropertyPage),
    (40, CanonicalRole::Graphic),
    (41, CanonicalRole::StaticText),
    (42, CanonicalRole::EditableText),
    (43, CanonicalRole::Button),
    (44, CanonicalRole::Checkbox),
    (45, CanonicalRole::RadioButton),
    (46, CanonicalRole::ComboBox),
    (48, CanonicalRole::ProgressBar),
    (51, CanonicalRole::Slider),
    (52, CanonicalRole::SpinButton),
    (60, CanonicalRole::TabControl),
];

/// Default platform table built from the MSAA role constants.
pub fn msaa_role_table() -> PlatformRoleTable {
    MSAA_ROLES.iter().copied().collect()
}
