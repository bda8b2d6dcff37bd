//! Role normalization.
//!
//! A role can reach us already normalized, as an ARIA role name, as a numeric
//! platform role id in string form, or not at all. [`RoleNormalizer`] reduces
//! all of them to a single [`CanonicalRole`] and never fails.

use super::canonical::{CanonicalRole, CanonicalState};
use super::platform::{PlatformRoleLookup, msaa_role_table};
use super::vocabulary::{VocabularyTable, aria_sort_state, aria_vocabulary, html_element_aria_role};
use crate::events::{DiagnosticEvent, emit_all};
use rayon::prelude::*;
use serde_json::Value;

const LOG_TARGET: &str = "a11y_canon::role";

/// A role value as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleSourceValue {
    /// Already normalized upstream
    Canonical(CanonicalRole),
    /// ARIA role name, or a platform role id when made only of ASCII digits
    Text(String),
    /// No role supplied
    Absent,
    /// A value of a shape the normalizer does not accept, from untyped data
    Unexpected { kind: String, value: String },
}

impl RoleSourceValue {
    /// Classify an untyped JSON value coming from outside the crate.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => RoleSourceValue::Absent,
            Value::String(text) => RoleSourceValue::Text(text.clone()),
            other => RoleSourceValue::Unexpected {
                kind: json_kind(other).to_string(),
                value: other.to_string(),
            },
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<CanonicalRole> for RoleSourceValue {
    fn from(role: CanonicalRole) -> Self {
        RoleSourceValue::Canonical(role)
    }
}

impl From<&str> for RoleSourceValue {
    fn from(text: &str) -> Self {
        RoleSourceValue::Text(text.to_string())
    }
}

impl From<String> for RoleSourceValue {
    fn from(text: String) -> Self {
        RoleSourceValue::Text(text)
    }
}

impl<T: Into<RoleSourceValue>> From<Option<T>> for RoleSourceValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RoleSourceValue::Absent, Into::into)
    }
}

/// Normalized role with the diagnostics produced on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleOutcome {
    pub role: CanonicalRole,
    pub events: Vec<DiagnosticEvent>,
}

impl RoleOutcome {
    fn silent(role: CanonicalRole) -> Self {
        Self {
            role,
            events: Vec::new(),
        }
    }

    fn unknown_with(event: DiagnosticEvent) -> Self {
        Self {
            role: CanonicalRole::Unknown,
            events: vec![event],
        }
    }
}

/// Resolves heterogeneous role values against immutable tables.
pub struct RoleNormalizer<'a> {
    vocabulary: &'a VocabularyTable,
    platform: Box<dyn PlatformRoleLookup + 'a>,
}

impl RoleNormalizer<'static> {
    /// Normalizer over the merged ARIA vocabulary and the MSAA role table.
    pub fn new() -> Self {
        Self::with_tables(aria_vocabulary(), msaa_role_table())
    }
}

impl Default for RoleNormalizer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> RoleNormalizer<'a> {
    pub fn with_tables(
        vocabulary: &'a VocabularyTable,
        platform: impl PlatformRoleLookup + 'a,
    ) -> Self {
        Self {
            vocabulary,
            platform: Box::new(platform),
        }
    }

    pub fn vocabulary(&self) -> &VocabularyTable {
        self.vocabulary
    }

    /// Normalize a role value, forwarding diagnostics to the log.
    pub fn normalize(&self, value: impl Into<RoleSourceValue>) -> CanonicalRole {
        let outcome = self.normalize_with_events(&value.into());
        emit_all(&outcome.events, LOG_TARGET);
        outcome.role
    }

    /// Normalize a role value and return the diagnostics instead of logging them.
    pub fn normalize_with_events(&self, value: &RoleSourceValue) -> RoleOutcome {
        match value {
            RoleSourceValue::Canonical(role) => RoleOutcome::silent(*role),
            RoleSourceValue::Text(text) if is_platform_role_id(text) => self.platform_role(text),
            RoleSourceValue::Text(name) => match self.vocabulary.get(name) {
                Some(role) => RoleOutcome::silent(role),
                None => RoleOutcome::unknown_with(DiagnosticEvent::debug(format!(
                    "Unknown role name: {:?}",
                    name
                ))),
            },
            RoleSourceValue::Absent => RoleOutcome::silent(CanonicalRole::Unknown),
            RoleSourceValue::Unexpected { kind, value } => RoleOutcome::unknown_with(
                DiagnosticEvent::error(format!("Unexpected role type: {}, value {}", kind, value)),
            ),
        }
    }

    /// Normalize many values in parallel. Output order matches input order.
    pub fn normalize_batch(&self, values: &[RoleSourceValue]) -> Vec<CanonicalRole> {
        values
            .par_iter()
            .map(|value| {
                let outcome = self.normalize_with_events(value);
                emit_all(&outcome.events, LOG_TARGET);
                outcome.role
            })
            .collect()
    }

    /// Canonical role implied by an HTML element name.
    ///
    /// Elements without an implicit ARIA role are common and map to
    /// `Unknown` without a diagnostic.
    pub fn role_for_html_element(&self, element: &str) -> CanonicalRole {
        html_element_aria_role(element)
            .and_then(|aria_role| self.vocabulary.get(aria_role))
            .unwrap_or(CanonicalRole::Unknown)
    }

    /// Canonical state for an `aria-sort` value.
    pub fn sort_state(&self, value: &str) -> Option<CanonicalState> {
        aria_sort_state(value)
    }

    fn platform_role(&self, digits: &str) -> RoleOutcome {
        let role = digits.parse::<u32>().ok().and_then(|id| self.platform.lookup(id));
        match role {
            Some(role) => RoleOutcome::silent(role),
            None => RoleOutcome::unknown_with(DiagnosticEvent::debug(format!(
                "Unknown platform role id: {}",
                digits
            ))),
        }
    }
}

/// A non-empty string of ASCII digits
fn is_platform_role_id(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::DiagnosticLevel;
    use crate::role::platform::PlatformRoleTable;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::button("button", CanonicalRole::Button)]
    #[case::grid("grid", CanonicalRole::Table)]
    #[case::tabpanel("tabpanel", CanonicalRole::PropertyPage)]
    #[case::landmark("navigation", CanonicalRole::Landmark)]
    #[case::form("form", CanonicalRole::Form)]
    fn test_normalize_aria_names(#[case] name: &str, #[case] expected: CanonicalRole) {
        let normalizer = RoleNormalizer::new();
        assert_eq!(normalizer.normalize(name), expected);
    }

    #[rstest]
    #[case::push_button("43", CanonicalRole::Button)]
    #[case::cell("29", CanonicalRole::TableCell)]
    #[case::leading_zero("043", CanonicalRole::Button)]
    #[case::unmapped("4", CanonicalRole::Unknown)]
    #[case::overflow("99999999999999999999", CanonicalRole::Unknown)]
    fn test_normalize_platform_ids(#[case] digits: &str, #[case] expected: CanonicalRole) {
        let normalizer = RoleNormalizer::new();
        assert_eq!(normalizer.normalize(digits), expected);
    }

    #[test]
    fn test_digit_strings_use_platform_table_only() {
        let platform: PlatformRoleTable = [(7, CanonicalRole::Heading)].into_iter().collect();
        let vocabulary = VocabularyTable::from_pairs([("7", CanonicalRole::Link)]);
        let normalizer = RoleNormalizer::with_tables(&vocabulary, platform);
        assert_eq!(normalizer.normalize("7"), CanonicalRole::Heading);
    }

    #[test]
    fn test_canonical_value_is_a_fixed_point() {
        let normalizer = RoleNormalizer::new();
        for role in CanonicalRole::ALL {
            let once = normalizer.normalize(role);
            assert_eq!(once, role);
            assert_eq!(normalizer.normalize(once), once);
        }
    }

    #[test]
    fn test_absent_is_unknown_without_diagnostic() {
        let normalizer = RoleNormalizer::new();
        let outcome = normalizer.normalize_with_events(&RoleSourceValue::Absent);
        assert_eq!(outcome.role, CanonicalRole::Unknown);
        assert!(outcome.events.is_empty());
        assert_eq!(normalizer.normalize(None::<&str>), CanonicalRole::Unknown);
    }

    #[test]
    fn test_unknown_name_logs_diagnostic() {
        let normalizer = RoleNormalizer::new();
        let outcome = normalizer.normalize_with_events(&"not-a-role".into());
        assert_eq!(outcome.role, CanonicalRole::Unknown);
        assert_eq!(outcome.events.len(), 1);
        assert!(outcome.events[0].message.contains("not-a-role"));
    }

    #[test]
    fn test_empty_string_is_a_name_not_an_id() {
        let normalizer = RoleNormalizer::new();
        let outcome = normalizer.normalize_with_events(&"".into());
        assert_eq!(outcome.role, CanonicalRole::Unknown);
        assert!(outcome.events[0].message.starts_with("Unknown role name"));
    }

    #[test]
    fn test_unknown_platform_id_logs_diagnostic() {
        let normalizer = RoleNormalizer::new();
        let outcome = normalizer.normalize_with_events(&"4".into());
        assert_eq!(outcome.role, CanonicalRole::Unknown);
        assert_eq!(outcome.events[0].level, DiagnosticLevel::Debug);
        assert!(outcome.events[0].message.contains('4'));
    }

    #[test]
    fn test_known_values_are_silent() {
        let normalizer = RoleNormalizer::new();
        for value in [
            RoleSourceValue::from("heading"),
            RoleSourceValue::from("43"),
            RoleSourceValue::from(CanonicalRole::Alert),
        ] {
            assert!(normalizer.normalize_with_events(&value).events.is_empty());
        }
    }

    #[rstest]
    #[case::number(json!(43), "number")]
    #[case::bool(json!(true), "bool")]
    #[case::array(json!(["button"]), "array")]
    fn test_unexpected_json_shapes_are_errors(#[case] raw: Value, #[case] kind: &str) {
        let normalizer = RoleNormalizer::new();
        let value = RoleSourceValue::from_json(&raw);
        let outcome = normalizer.normalize_with_events(&value);
        assert_eq!(outcome.role, CanonicalRole::Unknown);
        assert_eq!(outcome.events[0].level, DiagnosticLevel::Error);
        assert!(outcome.events[0].message.contains(kind));
        assert!(outcome.events[0].message.contains(&raw.to_string()));
    }

    #[test]
    fn test_from_json_accepts_strings_and_null() {
        assert_eq!(
            RoleSourceValue::from_json(&json!("button")),
            RoleSourceValue::Text("button".to_string())
        );
        assert_eq!(RoleSourceValue::from_json(&Value::Null), RoleSourceValue::Absent);
    }

    #[test]
    fn test_normalize_batch_preserves_order() {
        let normalizer = RoleNormalizer::new();
        let values: Vec<RoleSourceValue> = vec![
            "button".into(),
            RoleSourceValue::Absent,
            "43".into(),
            CanonicalRole::Heading.into(),
            "nope".into(),
        ];
        assert_eq!(
            normalizer.normalize_batch(&values),
            vec![
                CanonicalRole::Button,
                CanonicalRole::Unknown,
                CanonicalRole::Button,
                CanonicalRole::Heading,
                CanonicalRole::Unknown,
            ]
        );
    }

    #[rstest]
    #[case::header("header", CanonicalRole::Landmark)]
    #[case::section("section", CanonicalRole::Region)]
    #[case::article("article", CanonicalRole::Article)]
    #[case::mark("mark", CanonicalRole::MarkedContent)]
    #[case::div("div", CanonicalRole::Unknown)]
    fn test_role_for_html_element(#[case] element: &str, #[case] expected: CanonicalRole) {
        assert_eq!(RoleNormalizer::new().role_for_html_element(element), expected);
    }

    #[rstest]
    #[case::ascending("ascending", Some(CanonicalState::SortedAscending))]
    #[case::descending("descending", Some(CanonicalState::SortedDescending))]
    #[case::other("other", Some(CanonicalState::Sorted))]
    #[case::none("none", None)]
    fn test_sort_state(#[case] value: &str, #[case] expected: Option<CanonicalState>) {
        assert_eq!(RoleNormalizer::new().sort_state(value), expected);
    }
}
