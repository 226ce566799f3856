use super::query::*;

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn parse_splits_ordered_pairs() {
    assert_eq!(
        parse("tab=active&page=2&sort=name"),
        pairs(&[("tab", "active"), ("page", "2"), ("sort", "name")])
    );
}

#[test]
fn parse_accepts_leading_question_mark() {
    assert_eq!(parse("?page=2"), pairs(&[("page", "2")]));
}

#[test]
fn parse_handles_bare_keys_and_empty_segments() {
    assert_eq!(
        parse("debug&&page=2"),
        pairs(&[("debug", ""), ("page", "2")])
    );
    assert_eq!(parse(""), vec![]);
}

#[test]
fn serialize_round_trips() {
    let query = "tab=active&debug&page=2";
    assert_eq!(serialize(&parse(query)), query);
    assert_eq!(serialize(&[]), "");
}

#[test]
fn get_finds_the_first_value() {
    let parsed = parse("page=2&page=9");
    assert_eq!(get(&parsed, "page"), Some("2"));
    assert_eq!(get(&parsed, "limit"), None);
}

#[test]
fn upsert_replaces_in_place_and_appends_the_rest() {
    let updated = upsert(
        "tab=active&page=2&sort=name",
        &pairs(&[("page", "5"), ("limit", "20")]),
    );
    assert_eq!(updated, "tab=active&page=5&sort=name&limit=20");
}

#[test]
fn upsert_starts_from_an_empty_query() {
    let updated = upsert("", &pairs(&[("page", "1"), ("limit", "10")]));
    assert_eq!(updated, "page=1&limit=10");
}
