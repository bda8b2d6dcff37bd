// Integration tests for role normalization
use a11y_canon::role::vocabulary::{ARIA_ROLES, LANDMARKS};
use a11y_canon::role::{
    CanonicalRole, PlatformRoleLookup, PlatformRoleTable, RoleNormalizer, RoleSourceValue,
    VocabularyTable, aria_vocabulary, msaa_role_table,
};
use rstest::rstest;
use serde_json::json;

#[test]
fn should_map_every_digit_string_through_platform_table() {
    let normalizer = RoleNormalizer::new();
    let table = msaa_role_table();
    for id in 0..128u32 {
        let expected = table.lookup(id).unwrap_or(CanonicalRole::Unknown);
        assert_eq!(normalizer.normalize(id.to_string()), expected, "id {}", id);
    }
}

#[test]
fn should_map_unknown_names_to_unknown_with_diagnostic() {
    let normalizer = RoleNormalizer::new();
    for name in ["Button", "buttons", "x1", "1x", "-1", " 43"] {
        let outcome = normalizer.normalize_with_events(&RoleSourceValue::from(name));
        assert_eq!(outcome.role, CanonicalRole::Unknown, "{}", name);
        assert_eq!(outcome.events.len(), 1, "{}", name);
    }
}

#[test]
fn should_keep_base_mapping_for_landmarks_already_present() {
    let base = VocabularyTable::from_pairs(ARIA_ROLES.iter().copied());
    let merged = aria_vocabulary();
    for landmark in LANDMARKS {
        let expected = base.get(landmark.name).unwrap_or(CanonicalRole::Landmark);
        assert_eq!(merged.get(landmark.name), Some(expected));
    }
    for (name, role) in ARIA_ROLES {
        assert_eq!(merged.get(name), Some(*role));
    }
}

#[test]
fn should_be_a_fixed_point_on_normalized_output() {
    let normalizer = RoleNormalizer::new();
    let inputs: Vec<RoleSourceValue> = ARIA_ROLES
        .iter()
        .map(|(name, _)| RoleSourceValue::from(*name))
        .chain(["43", "9", "nope"].map(RoleSourceValue::from))
        .chain([RoleSourceValue::Absent])
        .collect();

    for input in inputs {
        let once = normalizer.normalize(input);
        assert_eq!(normalizer.normalize(once), once);
    }
}

#[rstest]
#[case::string(json!("heading"), CanonicalRole::Heading)]
#[case::digits(json!("43"), CanonicalRole::Button)]
#[case::null(json!(null), CanonicalRole::Unknown)]
#[case::number(json!(43), CanonicalRole::Unknown)]
#[case::object(json!({"role": "button"}), CanonicalRole::Unknown)]
fn should_normalize_untyped_boundary_values(
    #[case] raw: serde_json::Value,
    #[case] expected: CanonicalRole,
) {
    let normalizer = RoleNormalizer::new();
    assert_eq!(normalizer.normalize(RoleSourceValue::from_json(&raw)), expected);
}

#[test]
fn should_use_custom_platform_table() {
    let platform: PlatformRoleTable = [(1234, CanonicalRole::Suggestion)].into_iter().collect();
    let normalizer = RoleNormalizer::with_tables(aria_vocabulary(), platform);
    assert_eq!(normalizer.normalize("1234"), CanonicalRole::Suggestion);
    assert_eq!(normalizer.normalize("43"), CanonicalRole::Unknown);
    assert_eq!(normalizer.normalize("button"), CanonicalRole::Button);
}

#[test]
fn should_normalize_large_batches_in_parallel() {
    let normalizer = RoleNormalizer::new();
    let values: Vec<RoleSourceValue> = (0..1000)
        .map(|i| match i % 3 {
            0 => RoleSourceValue::from("link"),
            1 => RoleSourceValue::from("30"),
            _ => RoleSourceValue::Absent,
        })
        .collect();
    let roles = normalizer.normalize_batch(&values);
    for (i, role) in roles.iter().enumerate() {
        let expected = if i % 3 == 2 {
            CanonicalRole::Unknown
        } else {
            CanonicalRole::Link
        };
        assert_eq!(*role, expected);
    }
}
