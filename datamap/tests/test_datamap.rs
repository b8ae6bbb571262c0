use datamap::{dump_datamap, parse_datamap_dump, Datamap, DatamapError, Prefix, Value};

#[test]
fn test_component_prefix_keys() {
    let team = Prefix::component("Team", 7);
    assert_eq!(team.key("_numberUnits"), "Team[7]._numberUnits");
    assert_eq!(
        team.object(2).nested("position").key("x"),
        "Team[7].object[2].position.x"
    );
}

#[test]
fn test_insert_never_overwrites() {
    let mut datamap = Datamap::new();
    datamap.insert("Team[0].numActiveUnits".into(), 3).unwrap();

    let result = datamap.insert("Team[0].numActiveUnits".into(), 5);

    assert_eq!(
        result,
        Err(DatamapError::KeyCollision {
            key: "Team[0].numActiveUnits".into()
        })
    );
    assert_eq!(datamap.get::<i64>("Team[0].numActiveUnits"), Ok(3));
}

#[test]
fn test_get_missing_key() {
    let datamap = Datamap::new();
    assert_eq!(
        datamap.get::<i32>("UnitsGenerator[1]._numEmited"),
        Err(DatamapError::KeyNotFound {
            key: "UnitsGenerator[1]._numEmited".into()
        })
    );
}

#[test]
fn test_get_malformed_value() {
    let mut datamap = Datamap::new();
    datamap.insert("Team[0].object[0].prefabName".into(), "orc").unwrap();

    let result = datamap.get::<f32>("Team[0].object[0].prefabName");

    assert!(matches!(result, Err(DatamapError::Malformed { .. })));
}

#[test]
fn test_integer_reads_as_float() {
    let mut datamap = Datamap::new();
    datamap.insert("Health.value".into(), 10).unwrap();

    assert_eq!(datamap.get::<f32>("Health.value"), Ok(10.0));
    assert_eq!(datamap.get::<usize>("Health.value"), Ok(10));
}

#[test]
fn test_negative_integer_is_not_a_count() {
    let mut datamap = Datamap::new();
    datamap.insert("Team[0]._numberUnits".into(), -1).unwrap();

    assert!(datamap.get::<usize>("Team[0]._numberUnits").is_err());
}

#[test]
fn test_binary_form_restores_store() {
    let mut datamap = Datamap::new();
    datamap.insert("a".into(), 1.5).unwrap();
    datamap.insert("b".into(), true).unwrap();
    datamap.insert("c".into(), "text").unwrap();

    let data = datamap.as_bytes().unwrap();
    let restored = Datamap::from_bytes(&data).unwrap();

    assert_eq!(restored, datamap);
}

#[test]
fn test_json_dump_is_keyed_by_entry() {
    let mut datamap = Datamap::new();
    datamap.insert("Team[0].numActiveUnits".into(), 2).unwrap();

    let dump = dump_datamap(&datamap).unwrap();
    let restored = parse_datamap_dump(&dump).unwrap();

    assert!(dump.contains("\"Team[0].numActiveUnits\""));
    assert_eq!(
        restored.value("Team[0].numActiveUnits"),
        Some(&Value::Integer(2))
    );
}
