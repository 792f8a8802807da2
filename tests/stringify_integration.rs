use anyhow::Result;

use serde::Serialize;
use serde_json::{Value, json};

use csv_stringify_rs::{
    StringifyError,
    stringify::{ColumnSpec, CsvStringifierBuilder},
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Serialize, Debug, Clone)]
struct Name {
    first: String,
    last: String,
}

#[derive(Serialize, Debug, Clone)]
struct Person {
    age: u8,
    name: Name,
}

fn people() -> Vec<Person> {
    vec![
        Person {
            age: 70,
            name: Name {
                first: "Rick".to_string(),
                last: "Sanchez".to_string(),
            },
        },
        Person {
            age: 14,
            name: Name {
                first: "Morty".to_string(),
                last: "Smith".to_string(),
            },
        },
    ]
}

#[test]
fn nested_records_should_stringify_with_derived_headers() -> Result<()> {
    init_logger();

    let stringifier = CsvStringifierBuilder::new()
        .column(ColumnSpec::path(["name", "first"]))
        .column("age")
        .build()?;

    let text = stringifier.stringify_items(&people())?;

    assert_eq!(text, "first,age\r\nRick,70\r\nMorty,14\r\n");

    Ok(())
}

#[test]
fn structural_arrays_should_stringify_without_headers() -> Result<()> {
    let stringifier = CsvStringifierBuilder::new().build()?;

    let text = stringifier.stringify(&[json!(["a", "b,c"])])?;

    // No columns means no header line, and the comma forces quoting.
    assert_eq!(text, "a,\"b,c\"\r\n");

    Ok(())
}

#[test]
fn empty_input_without_columns_should_produce_empty_output() -> Result<()> {
    let stringifier = CsvStringifierBuilder::new().build()?;

    assert_eq!(stringifier.stringify(&[])?, "");

    Ok(())
}

#[test]
fn invalid_separator_should_fail_before_any_record_is_touched() {
    let result = CsvStringifierBuilder::new().separator("a\"b").build();

    assert!(matches!(
        result,
        Err(StringifyError::InvalidSeparator(separator)) if separator == "a\"b"
    ));
}

#[test]
fn object_record_without_columns_should_fail() -> Result<()> {
    let stringifier = CsvStringifierBuilder::new().build()?;

    let result = stringifier.stringify(&[json!(["ok"]), json!({"age": 70})]);

    assert!(matches!(result, Err(StringifyError::NoColumnsForObject(1))));

    Ok(())
}

#[test]
fn key_accessor_into_array_record_should_abort_the_call() -> Result<()> {
    let stringifier = CsvStringifierBuilder::new().column("first").build()?;

    let result = stringifier.stringify(&[json!(["Rick", "Morty"])]);

    assert!(matches!(
        result,
        Err(StringifyError::ArrayIndexedByKey { key, .. }) if key == "first"
    ));

    Ok(())
}

#[test]
fn explicit_headers_should_replace_derived_ones() -> Result<()> {
    let stringifier = CsvStringifierBuilder::new()
        .column(ColumnSpec::path(["name", "last"]).header("Last name"))
        .column(ColumnSpec::new("age").header("Age (years)"))
        .build()?;

    let text = stringifier.stringify_items(&people())?;

    assert_eq!(
        text,
        "Last name,Age (years)\r\nSanchez,70\r\nSmith,14\r\n"
    );

    Ok(())
}

#[test]
fn custom_separator_should_join_fields_and_header() -> Result<()> {
    let stringifier = CsvStringifierBuilder::new()
        .separator(";")
        .columns(["age"])
        .column(ColumnSpec::path(["name", "first"]))
        .build()?;

    let text = stringifier.stringify_items(&people())?;

    assert_eq!(text, "age;first\r\n70;Rick\r\n14;Morty\r\n");

    Ok(())
}

#[test]
fn bom_should_prepend_the_whole_output() -> Result<()> {
    let stringifier = CsvStringifierBuilder::new()
        .bom(true)
        .column("age")
        .build()?;

    let text = stringifier.stringify(&[json!({"age": 70})])?;

    assert!(text.starts_with('\u{feff}'));
    assert_eq!(text, "\u{feff}age\r\n70\r\n");

    Ok(())
}

#[test]
fn traversal_dead_ends_should_render_as_empty_fields() -> Result<()> {
    let stringifier = CsvStringifierBuilder::new()
        .has_headers(false)
        .column(ColumnSpec::path(["name", "middle"]))
        .column(ColumnSpec::path(["age", "unit"]))
        .column("missing")
        .build()?;

    let text = stringifier.stringify(&[json!({"age": 70, "name": {"first": "Rick"}})])?;

    // Missing keys are empty; a scalar dead-end keeps the value reached.
    assert_eq!(text, ",70,\r\n");

    Ok(())
}

#[test]
fn array_records_should_be_addressed_by_index_columns() -> Result<()> {
    let stringifier = CsvStringifierBuilder::new()
        .column(ColumnSpec::new(1usize).header("second"))
        .column(0usize)
        .build()?;

    let text = stringifier.stringify(&[json!(["a", "b"]), json!(["c", "d"])])?;

    assert_eq!(text, "second,0\r\nb,a\r\nd,c\r\n");

    Ok(())
}

#[test]
fn structured_values_should_embed_as_json_fields() -> Result<()> {
    let stringifier = CsvStringifierBuilder::new()
        .has_headers(false)
        .column("name")
        .build()?;

    let text = stringifier.stringify(&[json!({"name": {"first": "Rick"}})])?;

    assert_eq!(text, "\"{\"\"first\"\":\"\"Rick\"\"}\"\r\n");

    Ok(())
}

#[test]
fn scalar_records_should_become_single_field_rows() -> Result<()> {
    let stringifier = CsvStringifierBuilder::new().build()?;

    let records: Vec<Value> = vec![json!("lone"), json!(42), json!(Value::Null)];

    let text = stringifier.stringify(&records)?;

    assert_eq!(text, "lone\r\n42\r\n\r\n");

    Ok(())
}

#[test]
fn field_count_should_follow_the_record_shape_in_structural_mode() -> Result<()> {
    let stringifier = CsvStringifierBuilder::new().build()?;

    let text = stringifier.stringify(&[json!(["a", "b", "c"]), json!(["d"])])?;

    let lines: Vec<&str> = text.split_terminator("\r\n").collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].split(',').count(), 3);
    assert_eq!(lines[1].split(',').count(), 1);

    Ok(())
}

#[test]
fn unserializable_items_should_surface_the_conversion_error() {
    use std::collections::HashMap;

    let stringifier = CsvStringifierBuilder::new().build().unwrap();

    // Sequence-typed map keys have no JSON representation.
    let item: HashMap<Vec<u8>, u8> = HashMap::from([(vec![1], 1)]);

    let result = stringifier.stringify_items(&[item]);

    assert!(matches!(
        result,
        Err(StringifyError::UnserializableItem(_))
    ));
}

#[test]
fn quoted_fields_should_round_trip_their_quotes() -> Result<()> {
    let stringifier = CsvStringifierBuilder::new()
        .has_headers(false)
        .column("quote")
        .build()?;

    let text = stringifier.stringify(&[json!({"quote": "say \"hi\"\nplease"})])?;

    assert!(text.starts_with('"'));
    assert!(text.ends_with("\"\r\n"));
    assert_eq!(text, "\"say \"\"hi\"\"\nplease\"\r\n");

    Ok(())
}
