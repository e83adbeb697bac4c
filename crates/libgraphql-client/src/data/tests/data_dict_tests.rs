use crate::data::DataDecodeError;
use crate::data::DataDict;
use crate::data::RawValueKind;
use crate::data::Variables;
use crate::selection_set::SelectionSet;
use crate::test::Hero;
use crate::test::data_dict;
use crate::test::json_object;
use serde_json::json;
use std::sync::Arc;

#[test]
fn typename_reads_string_discriminator() {
    let data = data_dict(json!({"__typename": "Human", "name": "Han Solo"}));
    assert_eq!(data.typename(), Some("Human"));
}

#[test]
fn typename_is_absent_when_missing_or_not_a_string() {
    assert_eq!(data_dict(json!({"name": "Han Solo"})).typename(), None);
    assert_eq!(data_dict(json!({"__typename": 7})).typename(), None);
    assert_eq!(data_dict(json!({"__typename": null})).typename(), None);
}

#[test]
fn equality_is_by_raw_fields() {
    let a = data_dict(json!({"__typename": "Human", "friends": [{"name": "Leia"}]}));
    let b = data_dict(json!({"__typename": "Human", "friends": [{"name": "Leia"}]}));
    let c = data_dict(json!({"__typename": "Human", "friends": [{"name": "Luke"}]}));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(!a.shares_storage_with(&b));
}

#[test]
fn equality_ignores_variables() {
    let mut variables = Variables::new();
    variables.insert("episode".to_string(), json!("JEDI"));

    let with_variables = DataDict::new(
        json_object(json!({"__typename": "Droid"})),
        Some(variables),
    );
    let without_variables = data_dict(json!({"__typename": "Droid"}));
    assert_eq!(with_variables, without_variables);
}

#[test]
fn equality_ignores_memoized_state() {
    let read = data_dict(json!({"__typename": "Droid", "name": "R2-D2"}));
    let unread = data_dict(json!({"__typename": "Droid", "name": "R2-D2"}));
    let _: String = read.get("name").unwrap();
    assert!(read.is_cached("name"));
    assert!(!unread.is_cached("name"));
    assert_eq!(read, unread);
}

#[test]
fn clones_share_storage() {
    let data = data_dict(json!({"__typename": "Droid"}));
    let clone = data.clone();
    assert!(data.shares_storage_with(&clone));
}

#[test]
fn from_value_requires_an_object() {
    assert!(DataDict::from_value(json!({"__typename": "Droid"}), None).is_ok());
    assert_eq!(
        DataDict::from_value(json!([1, 2]), None),
        Err(DataDecodeError::NotAnObject { actual: RawValueKind::Array }),
    );
}

#[test]
fn nested_entities_share_variables() {
    let mut variables = Variables::new();
    variables.insert("first".to_string(), json!(3));
    let variables = Arc::new(variables);

    let data = DataDict::with_shared_variables(
        json_object(json!({"friend": {"__typename": "Human"}})),
        Arc::clone(&variables),
    );
    let friend: Hero = data.get("friend").unwrap();

    assert_eq!(friend.data().variables(), &*variables);
    assert_eq!(friend.data().variables().get("first"), Some(&json!(3)));
}

#[test]
fn raw_access_does_not_decode() {
    let data = data_dict(json!({"name": "Han Solo"}));
    assert_eq!(data.raw_value("name"), Some(&json!("Han Solo")));
    assert_eq!(data.raw_value("missing"), None);
    assert_eq!(data.raw_fields().len(), 1);
    assert!(!data.is_cached("name"));
    assert!(data.path().is_root());
}

#[test]
fn failed_reads_are_not_memoized() {
    let data = data_dict(json!({"name": null}));
    let result: Result<String, DataDecodeError> = data.get("name");
    assert!(result.is_err());
    assert!(!data.is_cached("name"));

    let name: Option<String> = data.get("name").unwrap();
    assert_eq!(name, None);
    assert!(data.is_cached("name"));
}

#[test]
fn debug_output_shows_raw_fields() {
    let data = data_dict(json!({"name": "Han Solo"}));
    let debug = format!("{data:?}");
    assert!(debug.contains("DataDict"));
    assert!(debug.contains("Han Solo"));
}
