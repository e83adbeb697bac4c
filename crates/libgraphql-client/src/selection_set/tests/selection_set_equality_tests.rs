use crate::selection_set::SelectionSet;
use crate::test::AsCharacter;
use crate::test::AsHuman;
use crate::test::Hero;
use crate::test::HeroDetails;
use crate::test::data_dict;
use serde_json::json;

#[test]
fn equal_raw_objects_make_equal_selection_sets() {
    let raw = json!({
        "__typename": "Human",
        "name": "Leia",
        "friends": [{"__typename": "Human", "name": "Han"}],
    });
    let a = Hero::from_data(data_dict(raw.clone()));
    let b = Hero::from_data(data_dict(raw));
    assert_eq!(a, b);
}

#[test]
fn equality_is_independent_of_the_reading_selection_set() {
    let raw = json!({"__typename": "Human", "name": "Leia"});
    let hero = Hero::from_data(data_dict(raw.clone()));
    let details = HeroDetails::from_data(data_dict(raw));
    assert_eq!(hero, details);
    assert_eq!(details, hero);

    // A narrowed view compares equal to the view it was narrowed from.
    let as_character: AsCharacter = hero.as_type_case().unwrap();
    assert_eq!(as_character, hero);
    let as_human: AsHuman = hero.as_type_case().unwrap();
    assert_eq!(hero, as_human);
}

#[test]
fn views_over_different_entities_are_unequal() {
    let hero = Hero::from_data(data_dict(json!({"__typename": "Human", "name": "Leia"})));
    let as_human: AsHuman = Hero::from_data(data_dict(json!({"__typename": "Human", "name": "Luke"})))
        .as_type_case()
        .unwrap();
    assert_ne!(hero, as_human);
}

#[test]
fn different_raw_objects_make_different_selection_sets() {
    let a = Hero::from_data(data_dict(json!({"__typename": "Human", "name": "Leia"})));
    let b = Hero::from_data(data_dict(json!({"__typename": "Human", "name": "Luke"})));
    assert_ne!(a, b);
}
