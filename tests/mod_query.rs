use bson::{Bson, doc};
use querylite::{Record, and, filter_in, format, limit, or, query, select, sort_by};

fn friends() -> Vec<Record> {
    vec![
        Record::from(doc! {"name": "Sam", "age": 29, "gender": "male", "city": "NY", "country": "US"}),
        Record::from(doc! {"name": "Sally", "age": 31, "gender": "female", "city": "NY", "country": "US"}),
        Record::from(doc! {"name": "Bill", "age": 25, "gender": "male", "city": "LA", "country": "US"}),
        Record::from(doc! {"name": "Kate", "age": 33, "gender": "female", "city": "London", "country": "UK"}),
        Record::from(doc! {"name": "Pierre", "age": 41, "gender": "male", "city": "Paris", "country": "FR"}),
    ]
}

fn names(records: &[Record]) -> Vec<String> {
    records.iter().map(|r| r.0.get_str("name").unwrap().to_string()).collect()
}

#[test]
fn query_without_ops_returns_independent_copy() {
    let col = friends();
    let mut out = query(&col, vec![]);
    assert_eq!(out, col);
    out[0].set("name", Bson::String("Mallory".into()));
    assert_eq!(col[0].get("name"), Some(&Bson::String("Sam".into())));
}

#[test]
fn select_drops_fields_absent_from_first_record() {
    let col = vec![Record::from(doc! {"a": 1, "b": 2, "c": 3})];
    let out = query(&col, vec![select(["a", "b", "z"])]);
    assert_eq!(out, vec![Record::from(doc! {"a": 1, "b": 2})]);
}

#[test]
fn repeated_select_is_cumulative_and_deduplicating() {
    let out = query(&friends(), vec![select(["name"]), select(["name", "age"]), limit(1)]);
    assert_eq!(out, vec![Record::from(doc! {"name": "Sam", "age": 29})]);
}

#[test]
fn filter_in_keeps_matches_in_original_order() {
    let out = query(&friends(), vec![select(["name"]), filter_in("country", ["US", "UK"])]);
    assert_eq!(names(&out), vec!["Sam", "Sally", "Bill", "Kate"]);
}

#[test]
fn filter_in_with_empty_values_yields_empty_set() {
    let out = query(&friends(), vec![select(["name"]), filter_in("country", Vec::<&str>::new())]);
    assert!(out.is_empty());
}

#[test]
fn sort_desc_reverses_sort_asc() {
    let asc = query(&friends(), vec![select(["name"]), sort_by("age", "asc")]);
    let desc = query(&friends(), vec![select(["name"]), sort_by("age", "asc"), sort_by("age", "desc")]);
    let mut reversed = names(&asc);
    reversed.reverse();
    assert_eq!(names(&desc), reversed);
}

#[test]
fn sorting_an_already_sorted_set_is_a_no_op() {
    let once = query(&friends(), vec![select(["name"]), sort_by("age", "asc")]);
    let twice = query(&friends(), vec![select(["name"]), sort_by("age", "asc"), sort_by("age", "asc")]);
    assert_eq!(once, twice);
}

#[test]
fn format_rewrites_from_the_text_form() {
    let out = query(
        &friends(),
        vec![select(["name", "age"]), format("age", |v| Bson::String(std::format!("{v}!")))],
    );
    for (rec, original) in out.iter().zip(friends()) {
        let expected = std::format!("{}!", original.0.get_i32("age").unwrap());
        assert_eq!(rec.0.get_str("age").unwrap(), expected);
    }
}

#[test]
fn format_does_not_mutate_the_caller_collection() {
    let col = friends();
    let _ = query(&col, vec![select(["age"]), format("age", |_| Bson::Int32(0))]);
    assert_eq!(col[0].get("age"), Some(&Bson::Int32(29)));
}

#[test]
fn limit_applies_at_projection_regardless_of_position() {
    let early = query(
        &friends(),
        vec![limit(2), select(["name"]), filter_in("country", ["US", "UK"]), sort_by("age", "asc")],
    );
    let late = query(
        &friends(),
        vec![select(["name"]), filter_in("country", ["US", "UK"]), sort_by("age", "asc"), limit(2)],
    );
    assert_eq!(early, late);
    assert_eq!(names(&early), vec!["Bill", "Sam"]);
}

#[test]
fn limit_larger_than_working_set_caps_not_pads() {
    let out = query(&friends(), vec![select(["name"]), limit(100)]);
    assert_eq!(out.len(), 5);
}

#[test]
fn or_returns_union_without_duplicates() {
    let out = query(
        &friends(),
        vec![select(["name"]), or(vec![filter_in("gender", ["male"]), filter_in("city", ["NY"])])],
    );
    // male matches first in working-set order, then novel NY matches
    assert_eq!(names(&out), vec!["Sam", "Bill", "Pierre", "Sally"]);
}

#[test]
fn and_matches_independently_computed_intersection() {
    let out = query(
        &friends(),
        vec![select(["name"]), and(vec![filter_in("gender", ["male"]), filter_in("city", ["NY"])])],
    );
    let expected: Vec<String> = friends()
        .iter()
        .filter(|r| {
            r.get("gender") == Some(&Bson::String("male".into()))
                && r.get("city") == Some(&Bson::String("NY".into()))
        })
        .map(|r| r.0.get_str("name").unwrap().to_string())
        .collect();
    assert_eq!(names(&out), expected);
    assert_eq!(names(&out), vec!["Sam"]);
}

#[test]
fn combinators_capability_flag_is_on() {
    assert!(querylite::combinators_enabled());
}

#[test]
fn unknown_feature_flag_is_an_error() {
    assert!(querylite::feature_enable("warp-drive").is_err());
}

#[test]
fn query_on_empty_collection_is_soft() {
    let out = query(&[], vec![select(["name"]), filter_in("country", ["US"]), limit(3)]);
    assert!(out.is_empty());
}
