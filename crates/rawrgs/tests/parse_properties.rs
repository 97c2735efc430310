use rawrgs::{Map, OptionKind, OptionSpec, RawOption, Schema, Value, parse};
use serde_json::json;

fn options(json: serde_json::Value) -> Vec<RawOption> {
    serde_json::from_value(json).expect("invalid option list")
}

fn map(json: serde_json::Value) -> Map {
    serde_json::from_value(json).expect("invalid map")
}

fn parse_json(schema: serde_json::Value, tokens: &[&str]) -> serde_json::Value {
    let parsed = parse(&options(schema), Map::new(), tokens.iter().copied());
    serde_json::to_value(&parsed).expect("failed to serialize result")
}

#[test]
fn collector_accumulates_in_order() {
    assert_eq!(
        parse_json(
            json!([{"label": "inc", "type": "collector"}]),
            &["--inc", "a", "--inc", "b"]
        ),
        json!({"inc": ["a", "b"], "_": []})
    );
}

#[test]
fn object_merges_across_occurrences() {
    assert_eq!(
        parse_json(
            json!([{"label": "cfg", "type": "object"}]),
            &["--cfg", "a.b=1", "--cfg", "a.c=2"]
        ),
        json!({"cfg": {"a": {"b": "1", "c": "2"}}, "_": []})
    );
}

#[test]
fn array_splits_and_coerces() {
    assert_eq!(
        parse_json(
            json!([{"label": "nums", "type": "array"}]),
            &["--nums", "1,2,yes"]
        ),
        json!({"nums": [1, 2, true], "_": []})
    );
}

#[test]
fn separator_ends_scanning_and_is_dropped() {
    assert_eq!(
        parse_json(json!(["verbose"]), &["--verbose", "--", "pos1", "-2"]),
        json!({"verbose": true, "_": ["pos1", "-2"]})
    );
}

#[test]
fn short_inline_value() {
    assert_eq!(
        parse_json(json!([{"label": "x", "aliases": "x"}]), &["-xfoo"]),
        json!({"x": "foo", "_": []})
    );
}

#[test]
fn unknown_flag_and_its_value_vanish() {
    assert_eq!(
        parse_json(json!([]), &["--unknown", "5"]),
        json!({"_": []})
    );
}

#[test]
fn negative_number_is_a_value() {
    assert_eq!(
        parse_json(
            json!([{"label": "count", "type": "number"}]),
            &["--count", "-5"]
        ),
        json!({"count": -5, "_": []})
    );
}

#[test]
fn first_non_flag_starts_positionals() {
    let schema = Schema::new().option(OptionSpec::new("v").kind(OptionKind::Boolean));
    let parsed = schema.parse(Map::new(), ["file.txt", "--v"]);
    assert_eq!(parsed.get("v"), None);
    assert_eq!(parsed.rest(), vec!["file.txt", "--v"]);
}

#[test]
fn inline_and_separate_long_values_agree() {
    let schema = options(json!(["label"]));
    for value in ["text", "42", "2.5", "yes", "FALSE", "-3"] {
        let inline = format!("--label={value}");
        let a = parse(&schema, Map::new(), [inline.as_str()]);
        let b = parse(&schema, Map::new(), ["--label", value]);
        assert_eq!(a.get("label"), b.get("label"), "value {value:?}");
    }
}

#[test]
fn entries_without_label_are_unreachable() {
    let schema = options(json!([{"aliases": ["q"]}, "", null]));
    assert_eq!(Schema::normalize(&schema).options().len(), 0);
    assert_eq!(
        parse_json(json!([{"aliases": ["q"]}]), &["-q", "1", "rest"]),
        json!({"_": ["rest"]})
    );
}

#[test]
fn defaults_are_merged_underneath() {
    let defaults = map(json!({
        "level": 1,
        "cfg": {"a": {"keep": "yes"}, "z": 0},
        "tags": ["default"]
    }));
    let schema = options(json!([
        "level",
        {"label": "cfg", "type": "object"},
        {"label": "tags", "type": "array"}
    ]));
    let parsed = parse(
        &schema,
        defaults,
        ["--cfg", "a.b=2", "--tags", "x,y", "rest"],
    );
    assert_eq!(
        serde_json::to_value(&parsed).unwrap(),
        json!({
            "level": 1,
            "cfg": {"a": {"keep": "yes", "b": "2"}, "z": 0},
            "tags": ["x", "y"],
            "_": ["rest"]
        })
    );
}

#[test]
fn result_key_order_follows_defaults_then_encounter() {
    let defaults = map(json!({"b": 0}));
    let parsed = parse(&options(json!(["a", "b", "c"])), defaults, ["--c", "--a", "--b"]);
    let keys: Vec<&str> = parsed.values().keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["b", "c", "a", "_"]);
}

#[test]
fn caller_tokens_are_left_untouched() {
    let tokens = vec!["--a".to_string(), "1".to_string(), "pos".to_string()];
    let parsed = parse(&options(json!(["a"])), Map::new(), tokens.iter().cloned());
    assert_eq!(parsed.get("a"), Some(&Value::Int(1)));
    assert_eq!(tokens, vec!["--a", "1", "pos"]);
}

#[test]
fn first_matching_entry_wins() {
    assert_eq!(
        parse_json(
            json!([
                {"label": "one", "aliases": ["n"]},
                {"label": "two", "aliases": ["n"], "type": "number"}
            ]),
            &["-n", "7"]
        ),
        json!({"one": 7, "_": []})
    );
}

#[test]
fn boolean_option_consumes_following_word() {
    assert_eq!(
        parse_json(
            json!([{"label": "dry", "type": "boolean"}]),
            &["--dry", "no", "target"]
        ),
        json!({"dry": false, "_": ["target"]})
    );
}
