//! Expression data produced by column definitions.

use oxide_sql_ddl::column::{
    big_integer, binary, blob, boolean, char, date, datetime, decimal, float, integer, text, time,
    timestamp, varbinary, varchar,
};
use oxide_sql_ddl::{Column, ColumnType, Expression, ExpressionSegment, TypeTag};

use TypeTag::{Identifier, Literal, Value};

fn single_segment(column: &Column) -> ExpressionSegment {
    let data = column.expression_data();
    assert_eq!(data.len(), 1, "expected exactly one segment for {column:?}");
    data.into_iter().next().unwrap()
}

fn assert_segment(column: &Column, template: &str, parameters: &[&str], types: &[TypeTag]) {
    let segment = single_segment(column);
    assert_eq!(segment.template(), template);
    assert_eq!(segment.parameters(), parameters);
    assert_eq!(segment.types(), types);
}

// ===================================================================
// Date
// ===================================================================

#[test]
fn date_nullable_without_default() {
    assert_segment(
        &date("dob"),
        "%s DATE %s %s",
        &["dob", "", ""],
        &[Identifier, Literal, Literal],
    );
}

#[test]
fn date_not_null_with_default() {
    assert_segment(
        &date("created").not_null().default_value("2020-01-01"),
        "%s DATE %s %s",
        &["created", "NOT NULL", "2020-01-01"],
        &[Identifier, Literal, Value],
    );
}

#[test]
fn date_nullable_with_default() {
    assert_segment(
        &date("d").default_value("1970-01-01"),
        "%s DATE %s %s",
        &["d", "", "1970-01-01"],
        &[Identifier, Literal, Value],
    );
}

#[test]
fn empty_default_is_still_a_value() {
    assert_segment(
        &date("d").default_value(""),
        "%s DATE %s %s",
        &["d", "", ""],
        &[Identifier, Literal, Value],
    );
}

// ===================================================================
// Recomputation
// ===================================================================

#[test]
fn mutation_is_reflected_on_next_call() {
    let mut column = date("dob");
    let before = column.expression_data();

    column.set_nullable(false);
    column.set_default("2000-01-01");
    column.set_name("birth_date");
    let after = column.expression_data();

    assert_ne!(before, after);
    assert_eq!(after.segments()[0].parameters(), ["birth_date", "NOT NULL", "2000-01-01"]);
    assert_eq!(after.segments()[0].types(), [Identifier, Literal, Value]);

    column.clear_default();
    column.set_nullable(true);
    assert_eq!(column.expression_data(), date("birth_date").expression_data());
}

#[test]
fn repeated_calls_are_deterministic() {
    let column = varchar("email", 255).not_null();
    assert_eq!(column.expression_data(), column.expression_data());
}

// ===================================================================
// Other variants
// ===================================================================

#[test]
fn simple_types() {
    for (column, template) in [
        (big_integer("c"), "%s BIGINT %s %s"),
        (integer("c"), "%s INTEGER %s %s"),
        (boolean("c"), "%s BOOLEAN %s %s"),
        (time("c"), "%s TIME %s %s"),
        (datetime("c"), "%s DATETIME %s %s"),
        (timestamp("c"), "%s TIMESTAMP %s %s"),
        (text("c"), "%s TEXT %s %s"),
        (blob("c", None), "%s BLOB %s %s"),
    ] {
        assert_segment(&column, template, &["c", "", ""], &[Identifier, Literal, Literal]);
    }
}

#[test]
fn sized_types_carry_a_literal_size() {
    for (column, template, size) in [
        (varchar("c", 255), "%s VARCHAR(%s) %s %s", "255"),
        (char("c", 2), "%s CHAR(%s) %s %s", "2"),
        (binary("c", 16), "%s BINARY(%s) %s %s", "16"),
        (varbinary("c", 64), "%s VARBINARY(%s) %s %s", "64"),
        (blob("c", Some(1024)), "%s BLOB(%s) %s %s", "1024"),
        (decimal("c", 10, Some(2)), "%s DECIMAL(%s) %s %s", "10,2"),
        (decimal("c", 8, None), "%s DECIMAL(%s) %s %s", "8"),
        (float("c", 7, 3), "%s FLOAT(%s) %s %s", "7,3"),
    ] {
        assert_segment(
            &column.not_null().default_value("0"),
            template,
            &["c", size, "NOT NULL", "0"],
            &[Identifier, Literal, Literal, Value],
        );
    }
}

#[test]
fn column_new_matches_shorthand() {
    assert_eq!(Column::new("c", ColumnType::Date), date("c"));
    assert_eq!(
        Column::new("c", ColumnType::Varchar { length: 10 }),
        varchar("c", 10)
    );
}

#[test]
fn expression_data_serializes() {
    let json = serde_json::to_value(date("dob").not_null().expression_data()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "template": "%s DATE %s %s",
            "parameters": ["dob", "NOT NULL", ""],
            "types": ["identifier", "literal", "literal"]
        }])
    );
}
