use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_client::DataDict;
use libgraphql_client::SelectionSet;
use libgraphql_client::selection_set;
use libgraphql_client::types::ObjectType;
use libgraphql_client::types::SchemaLookup;
use libgraphql_client::types::SchemaMetadata;
use libgraphql_client::types::TypeCatalogue;
use libgraphql_client::types::TypeCatalogueBuilder;
use serde_json::Value;
use serde_json::json;
use std::sync::LazyLock;

static CATALOGUE: LazyLock<TypeCatalogue> = LazyLock::new(|| {
    TypeCatalogueBuilder::new()
        .load_str(None, r#"
            interface Humanoid { name: String }
            type Human implements Humanoid { name: String friends: [Character] }
            type Droid { name: String }
            union Character = Human | Droid
        "#)
        .and_then(|builder| builder.build())
        .unwrap_or_default()
});

struct BenchSchema;
impl SchemaMetadata for BenchSchema {
    fn object_type_for_typename(typename: &str) -> Option<&'static ObjectType> {
        CATALOGUE.object_type_for_typename(typename)
    }
}

selection_set! {
    struct Hero: BenchSchema = CATALOGUE.parent_type("Character")
        .unwrap_or_else(|| libgraphql_client::ParentType::Object(ObjectType::unknown()));
}

selection_set! {
    struct AsHumanoid: BenchSchema = CATALOGUE.parent_type("Humanoid")
        .unwrap_or_else(|| libgraphql_client::ParentType::Object(ObjectType::unknown()));
}

fn response(num_friends: usize) -> Value {
    let friends: Vec<Value> = (0..num_friends)
        .map(|idx| if idx % 5 == 0 {
            Value::Null
        } else {
            json!({
                "__typename": if idx % 2 == 0 { "Human" } else { "Droid" },
                "name": format!("friend-{idx}"),
                "friends": [],
            })
        })
        .collect();
    json!({"__typename": "Human", "name": "Luke", "friends": friends})
}

fn data_dict(value: &Value) -> DataDict {
    DataDict::from_value(value.clone(), None)
        .expect("benchmark responses are objects")
}

fn field_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_access");

    for num_friends in [10, 100, 1_000] {
        let raw = response(num_friends);

        group.bench_with_input(
            BenchmarkId::new("first_read", num_friends),
            &raw,
            |b, raw| b.iter_batched(
                || Hero::from_data(data_dict(raw)),
                |hero| black_box(hero.field::<Vec<Option<Hero>>>("friends")),
                criterion::BatchSize::SmallInput,
            ),
        );

        let hero = Hero::from_data(data_dict(&raw));
        let _ = hero.field::<Vec<Option<Hero>>>("friends");
        group.bench_with_input(
            BenchmarkId::new("memoized_read", num_friends),
            &hero,
            |b, hero| b.iter(|| black_box(hero.field::<Vec<Option<Hero>>>("friends"))),
        );
    }

    group.finish();
}

fn type_case(c: &mut Criterion) {
    let hero = Hero::from_data(data_dict(&response(0)));
    c.bench_function("type_case/interface", |b| {
        b.iter(|| black_box(hero.as_type_case::<AsHumanoid>()))
    });
}

criterion_group!(benches, field_access, type_case);
criterion_main!(benches);
