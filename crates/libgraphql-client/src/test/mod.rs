//! Fixtures shared by unit tests: a small Star Wars schema and hand-written
//! selection sets standing in for generated ones.

use crate::data::DataDecodeError;
use crate::data::DataDict;
use crate::data::JSONObject;
use crate::selection_set::SelectionSet;
use crate::types::ObjectType;
use crate::types::ParentType;
use crate::types::SchemaLookup;
use crate::types::SchemaMetadata;
use crate::types::TypeCatalogue;
use crate::types::TypeCatalogueBuilder;
use serde_json::Value;
use std::sync::LazyLock;

pub(crate) const STARWARS_SCHEMA_SDL: &str = r#"
    interface Humanoid {
        name: String
    }

    type Human implements Humanoid {
        name: String
        friends: [Character]
    }

    type Droid {
        name: String
        primaryFunction: String
    }

    type Starship {
        name: String
    }

    union Character = Human | Droid
    union Vehicle = Starship
"#;

pub(crate) static STARWARS_CATALOGUE: LazyLock<TypeCatalogue> = LazyLock::new(|| {
    TypeCatalogueBuilder::new()
        .load_str(None, STARWARS_SCHEMA_SDL)
        .unwrap()
        .build()
        .unwrap()
});

#[derive(Debug)]
pub(crate) struct StarWarsSchema;
impl SchemaMetadata for StarWarsSchema {
    fn object_type_for_typename(typename: &str) -> Option<&'static ObjectType> {
        STARWARS_CATALOGUE.object_type_for_typename(typename)
    }
}

pub(crate) fn starwars_parent_type(name: &str) -> ParentType {
    STARWARS_CATALOGUE.parent_type(name).unwrap()
}

/// Unwrap a `serde_json::json!({...})` literal into a [`JSONObject`].
pub(crate) fn json_object(value: Value) -> JSONObject {
    match value {
        Value::Object(fields) => fields,
        other => panic!("Expected a JSON object literal, found `{other}`"),
    }
}

pub(crate) fn data_dict(value: Value) -> DataDict {
    DataDict::new(json_object(value), None)
}

crate::selection_set! {
    pub(crate) struct Hero: StarWarsSchema = starwars_parent_type("Character");
}
impl Hero {
    pub(crate) fn as_character(&self) -> Option<AsCharacter> {
        self.as_type_case()
    }

    pub(crate) fn as_droid(&self) -> Option<AsDroid> {
        self.as_type_case()
    }

    pub(crate) fn as_human(&self) -> Option<AsHuman> {
        self.as_type_case()
    }

    pub(crate) fn as_humanoid(&self) -> Option<AsHumanoid> {
        self.as_type_case()
    }

    pub(crate) fn as_vehicle(&self) -> Option<AsVehicle> {
        self.as_type_case()
    }

    pub(crate) fn name(&self) -> Result<Option<String>, DataDecodeError> {
        self.field("name")
    }
}

crate::selection_set! {
    pub(crate) struct AsCharacter: StarWarsSchema = starwars_parent_type("Character");
}

crate::selection_set! {
    pub(crate) struct AsDroid: StarWarsSchema = starwars_parent_type("Droid");
}
impl AsDroid {
    pub(crate) fn primary_function(&self) -> Result<String, DataDecodeError> {
        self.field("primaryFunction")
    }
}

crate::selection_set! {
    pub(crate) struct AsHuman: StarWarsSchema = starwars_parent_type("Human");
}
impl AsHuman {
    pub(crate) fn name(&self) -> Result<String, DataDecodeError> {
        self.field("name")
    }
}

crate::selection_set! {
    pub(crate) struct AsHumanoid: StarWarsSchema = starwars_parent_type("Humanoid");
}

crate::selection_set! {
    pub(crate) struct AsVehicle: StarWarsSchema = starwars_parent_type("Vehicle");
}

crate::selection_set! {
    /// A second view type over `Character`, used to check that equality
    /// does not depend on which selection set read the data.
    pub(crate) struct HeroDetails: StarWarsSchema = starwars_parent_type("Character");
}
