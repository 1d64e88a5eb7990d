use qdm_model::Row;
use qdm_output::{to_csv, to_json};
use serde_json::{Value, json};

fn row(pairs: &[(&str, Value)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

#[test]
fn empty_row_set_renders_empty_string() {
    assert_eq!(to_csv(&[]), "");
}

#[test]
fn header_comes_from_first_row_key_order() {
    let rows = vec![row(&[("a", json!(1)), ("b", json!(2))])];
    assert_eq!(to_csv(&rows), "a,b\n1,2");
}

#[test]
fn comma_value_is_quoted() {
    let rows = vec![row(&[("a", json!("x,y"))])];
    assert_eq!(to_csv(&rows), "a\n\"x,y\"");
}

#[test]
fn quotes_are_doubled_inside_quoted_cells() {
    let rows = vec![row(&[("a", json!("say \"hi\""))])];
    assert_eq!(to_csv(&rows), "a\n\"say \"\"hi\"\"\"");
}

#[test]
fn null_and_missing_values_render_as_empty_cells() {
    let rows = vec![
        row(&[("a", json!("x")), ("b", Value::Null)]),
        row(&[("a", json!("y"))]),
    ];
    assert_eq!(to_csv(&rows), "a,b\nx,\ny,");
}

#[test]
fn non_string_values_use_natural_text() {
    let rows = vec![row(&[("n", json!(5)), ("f", json!(1.5)), ("t", json!(true))])];
    assert_eq!(to_csv(&rows), "n,f,t\n5,1.5,true");
}

#[test]
fn later_rows_follow_first_row_header_shape() {
    let rows = vec![
        row(&[("a", json!(1)), ("b", json!(2))]),
        row(&[("b", json!(4)), ("c", json!("dropped"))]),
    ];
    // "c" is not in the header; missing "a" renders empty.
    assert_eq!(to_csv(&rows), "a,b\n1,2\n,4");
}

#[test]
fn json_renders_with_two_space_indent() {
    let rows = vec![row(&[("Name", json!("Ada"))])];
    let text = to_json(&rows).expect("render json");
    assert_eq!(text, "[\n  {\n    \"Name\": \"Ada\"\n  }\n]");
}

#[test]
fn json_of_empty_rows_is_empty_array() {
    assert_eq!(to_json(&[]).expect("render json"), "[]");
}
