use crate::selection_set::SelectionSet;
use crate::test::AsHuman;
use crate::test::Hero;
use crate::test::HeroDetails;
use crate::test::data_dict;
use rayon::prelude::*;
use serde_json::json;

#[test]
fn repeated_reads_return_equal_values() {
    let data = data_dict(json!({
        "__typename": "Human",
        "nestedList": [["A", "B"], [], ["C"]],
    }));

    let first: Vec<Vec<String>> = data.get("nestedList").unwrap();
    let second: Vec<Vec<String>> = data.get("nestedList").unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec![vec!["A", "B"], vec![], vec!["C"]]);
}

#[test]
fn nested_entities_are_materialized_once() {
    let data = data_dict(json!({
        "__typename": "Human",
        "friends": [{"__typename": "Droid", "name": "R2-D2"}],
    }));

    let first: Vec<Hero> = data.get("friends").unwrap();
    let second: Vec<Hero> = data.get("friends").unwrap();
    assert!(first[0].data().shares_storage_with(second[0].data()));

    // Memoized state in the nested entity survives across reads of its
    // parent.
    let _ = first[0].name().unwrap();
    assert!(second[0].data().is_cached("name"));
}

#[test]
fn distinct_keys_never_alias_nested_entities() {
    let data = data_dict(json!({
        "__typename": "Human",
        "left": {"__typename": "Droid"},
        "right": {"__typename": "Droid"},
    }));

    let left: Hero = data.get("left").unwrap();
    let right: Hero = data.get("right").unwrap();
    assert_eq!(left, right);
    assert!(!left.data().shares_storage_with(right.data()));
    assert_eq!(left.data().path().to_string(), "left");
    assert_eq!(right.data().path().to_string(), "right");
}

#[test]
fn reading_a_key_with_another_nullability_decodes_separately() {
    let data = data_dict(json!({"name": "Han Solo"}));

    let required: String = data.get("name").unwrap();
    let optional: Option<String> = data.get("name").unwrap();
    assert_eq!(optional.as_deref(), Some(required.as_str()));

    let as_list: Result<Vec<String>, _> = data.get("name");
    assert!(as_list.is_err());

    let again: String = data.get("name").unwrap();
    assert_eq!(again, "Han Solo");
}

#[test]
fn selection_sets_over_the_same_field_share_nested_storage() {
    let data = data_dict(json!({
        "__typename": "Human",
        "friend": {"__typename": "Human", "name": "Leia"},
    }));

    let hero: Hero = data.get("friend").unwrap();
    let details_1: HeroDetails = data.get("friend").unwrap();
    let details_2: HeroDetails = data.get("friend").unwrap();
    let as_human: AsHuman = data.get("friend").unwrap();
    assert!(hero.data().shares_storage_with(details_1.data()));
    assert!(details_1.data().shares_storage_with(details_2.data()));
    assert!(details_1.data().shares_storage_with(as_human.data()));

    // Memoized state in the nested entity is visible through every view.
    assert_eq!(details_1.data().get::<String>("name").unwrap(), "Leia");
    assert!(details_2.data().is_cached("name"));
    assert!(hero.data().is_cached("name"));
}

#[test]
fn entity_lists_are_shared_across_selection_sets() {
    let data = data_dict(json!({
        "__typename": "Human",
        "friends": [null, {"__typename": "Droid", "name": "R2-D2"}],
    }));

    let heroes: Vec<Option<Hero>> = data.get("friends").unwrap();
    let details: Vec<Option<HeroDetails>> = data.get("friends").unwrap();
    assert!(details[0].is_none());
    let (Some(hero), Some(detail)) = (&heroes[1], &details[1]) else {
        panic!("Expected R2-D2 at index 1");
    };
    assert!(hero.data().shares_storage_with(detail.data()));
}

#[test]
fn concurrent_first_reads_converge() {
    let data = data_dict(json!({
        "__typename": "Human",
        "friends": [
            null,
            {"__typename": "Human", "name": "Leia"},
            {"__typename": "Droid", "name": "C-3PO"},
        ],
    }));

    let results: Vec<Vec<Option<Hero>>> = (0..64)
        .into_par_iter()
        .map(|_| data.get::<Vec<Option<Hero>>>("friends").unwrap())
        .collect();

    let memoized: Vec<Option<Hero>> = data.get("friends").unwrap();
    for result in &results {
        assert_eq!(result, &memoized);
    }

    // Once memoized, every reader observes the very same nested storage.
    let after: Vec<Option<Hero>> = data.get("friends").unwrap();
    let (Some(memoized_leia), Some(after_leia)) = (&memoized[1], &after[1]) else {
        panic!("Expected Leia at index 1");
    };
    assert!(memoized_leia.data().shares_storage_with(after_leia.data()));
}
