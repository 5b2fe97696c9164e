//! Property-based tests using proptest
//!
//! These tests generate many random inputs to check the invariants of the SQL
//! fragment builder and the filter parsers for all possible inputs.

use proptest::prelude::*;

use jobly::domain::changes::FieldValue;
use jobly::domain::filters::{parse_filter, CompanyFilterField, JobFilterField};
use jobly::domain::value_objects::{CompanyHandle, Username};
use jobly::infrastructure::persistence::{
    sql_fragment::{
        build_company_filter_predicate, build_job_filter_predicate, build_set_fragment,
        FragmentError,
    },
    QueryBuilder,
};

/// Strategy for public field names, including ones without a translation
fn field_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("numEmployees".to_string()),
        Just("logoUrl".to_string()),
        Just("name".to_string()),
        "[a-z][a-zA-Z0-9_]{0,20}",
    ]
}

/// Strategy for update values of every supported type
fn field_value_strategy() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        proptest::option::of(".{0,40}").prop_map(FieldValue::Text),
        proptest::option::of(any::<i32>()).prop_map(FieldValue::Integer),
        proptest::option::of(0.0f64..=1.0).prop_map(FieldValue::Decimal),
        proptest::option::of(any::<bool>()).prop_map(FieldValue::Boolean),
    ]
}

fn updates_strategy() -> impl Strategy<Value = Vec<(String, FieldValue)>> {
    proptest::collection::vec((field_name_strategy(), field_value_strategy()), 1..12)
}

fn as_refs(updates: &[(String, FieldValue)]) -> Vec<(&str, FieldValue)> {
    updates
        .iter()
        .map(|(field, value)| (field.as_str(), value.clone()))
        .collect()
}

proptest! {
    /// Every assignment gets its own placeholder and value, in input order
    #[test]
    fn set_fragment_placeholders_align_with_values(updates in updates_strategy()) {
        let refs = as_refs(&updates);
        let fragment = build_set_fragment(&refs, &QueryBuilder::COMPANY_FIELDS).unwrap();

        prop_assert_eq!(fragment.assignments.len(), updates.len());
        prop_assert_eq!(fragment.values.len(), updates.len());
        prop_assert_eq!(fragment.next_placeholder(), updates.len() + 1);

        for (idx, (assignment, (_, value))) in
            fragment.assignments.iter().zip(updates.iter()).enumerate()
        {
            let placeholder = format!("=${}", idx + 1);
            prop_assert!(assignment.ends_with(&placeholder));
            prop_assert_eq!(&fragment.values[idx], value);
        }
    }

    /// No update value ever appears in the SQL text
    #[test]
    fn set_fragment_never_inlines_values(
        field in field_name_strategy(),
        text in "[A-Za-z]{12,30}",
    ) {
        let updates = [(field.as_str(), FieldValue::Text(Some(text.clone())))];
        let fragment = build_set_fragment(&updates, &QueryBuilder::COMPANY_FIELDS).unwrap();

        prop_assume!(!field.contains(&text));
        prop_assert!(!fragment.set_clause().contains(&text));
    }

    /// Building twice from the same input yields identical output
    #[test]
    fn set_fragment_is_deterministic(updates in updates_strategy()) {
        let refs = as_refs(&updates);
        let first = build_set_fragment(&refs, &QueryBuilder::USER_FIELDS).unwrap();
        let second = build_set_fragment(&refs, &QueryBuilder::USER_FIELDS).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Employee ranges are accepted exactly when min <= max
    #[test]
    fn company_range_accepted_iff_ordered(min in 0i32..10_000, max in 0i32..10_000) {
        let result = build_company_filter_predicate(&[
            CompanyFilterField::MinEmployees(min),
            CompanyFilterField::MaxEmployees(max),
        ]);

        if min <= max {
            let predicate = result.unwrap();
            prop_assert_eq!(
                predicate.where_clause(),
                "\"num_employees\" >= $1 AND \"num_employees\" <= $2"
            );
            prop_assert_eq!(
                predicate.values,
                vec![FieldValue::Integer(Some(min)), FieldValue::Integer(Some(max))]
            );
        } else {
            let is_inverted = matches!(result, Err(FragmentError::InvertedRange { .. }));
            prop_assert!(is_inverted);
        }
    }

    /// Name filters always bind a pattern that matches the input literally
    #[test]
    fn name_filter_escapes_wildcards(name in "[a-z%_\\\\]{1,20}") {
        let predicate =
            build_company_filter_predicate(&[CompanyFilterField::Name(name.clone())]).unwrap();

        prop_assert_eq!(predicate.where_clause(), "\"name\" ILIKE $1");
        let FieldValue::Text(Some(pattern)) = &predicate.values[0] else {
            return Err(TestCaseError::fail("expected a text value"));
        };

        let inner = &pattern[1..pattern.len() - 1];
        prop_assert!(pattern.starts_with('%') && pattern.ends_with('%'));

        // Un-escaping the interior gives back the original input
        let mut unescaped = String::new();
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                let escaped = chars.next();
                prop_assert!(matches!(escaped, Some('\\' | '%' | '_')));
                unescaped.extend(escaped);
            } else {
                prop_assert!(c != '%' && c != '_');
                unescaped.push(c);
            }
        }
        prop_assert_eq!(unescaped, name);
    }

    /// Job predicates bind one value per bound condition
    #[test]
    fn job_predicate_values_match_placeholders(
        title in proptest::option::of("[a-z ]{1,10}"),
        min_salary in proptest::option::of(0i32..1_000_000),
        has_equity in any::<bool>(),
    ) {
        let mut filter = Vec::new();
        if let Some(title) = title.clone() {
            filter.push(JobFilterField::Title(title));
        }
        if let Some(min) = min_salary {
            filter.push(JobFilterField::MinSalary(min));
        }
        filter.push(JobFilterField::HasEquity(has_equity));

        let result = build_job_filter_predicate(&filter);
        let bound = title.iter().count() + min_salary.iter().count();

        if bound == 0 && !has_equity {
            prop_assert_eq!(result, Err(FragmentError::NoConditions));
        } else {
            let predicate = result.unwrap();
            prop_assert_eq!(predicate.values.len(), bound);
            prop_assert_eq!(predicate.conditions.len(), bound + usize::from(has_equity));
            for n in 1..=bound {
                let placeholder = format!("${}", n);
                prop_assert!(predicate.where_clause().contains(&placeholder));
            }
        }
    }

    /// Keys outside the whitelist are always rejected
    #[test]
    fn unknown_filter_keys_are_rejected(key in "[a-z]{1,12}", value in "[a-z0-9]{1,8}") {
        prop_assume!(!["name", "title"].contains(&key.as_str()));
        let pairs = vec![(key.clone(), value.clone())];

        prop_assert!(parse_filter::<CompanyFilterField>(&pairs).is_err());
        prop_assert!(parse_filter::<JobFilterField>(&pairs).is_err());
    }

    /// Valid identifiers are accepted and preserved exactly
    #[test]
    fn identifiers_round_trip(s in "[a-zA-Z0-9_.-]{1,25}") {
        let username = Username::new(s.clone()).unwrap();
        let handle = CompanyHandle::new(s.clone()).unwrap();
        prop_assert_eq!(username.as_str(), s.as_str());
        prop_assert_eq!(handle.as_str(), s.as_str());
    }

    /// Over-long identifiers are always rejected
    #[test]
    fn long_identifiers_are_rejected(s in "[a-z]{26,60}") {
        prop_assert!(Username::new(s.clone()).is_err());
        prop_assert!(CompanyHandle::new(s).is_err());
    }
}
