use super::*;
use serde::Deserialize;

#[test]
fn from_query_defaults_when_params_absent() {
    assert_eq!(
        PageQuery::from_query(&[], 10),
        PageQuery { page: 1, limit: 10 }
    );
}

#[test]
fn from_query_reads_url_values() {
    let pairs = query::parse("page=3&limit=25");
    assert_eq!(
        PageQuery::from_query(&pairs, 10),
        PageQuery { page: 3, limit: 25 }
    );
}

#[test]
fn from_query_rejects_zero_and_garbage() {
    // Zero is not a page; non-numeric values coerce to the default.
    let pairs = query::parse("page=0&limit=abc");
    assert_eq!(
        PageQuery::from_query(&pairs, 10),
        PageQuery { page: 1, limit: 10 }
    );

    let pairs = query::parse("page=-2&limit=");
    assert_eq!(
        PageQuery::from_query(&pairs, 10),
        PageQuery { page: 1, limit: 10 }
    );
}

#[test]
fn as_params_formats_page_and_limit() {
    let params = PageQuery { page: 5, limit: 20 }.as_params();
    assert_eq!(
        params,
        vec![
            ("page".to_string(), "5".to_string()),
            ("limit".to_string(), "20".to_string()),
        ]
    );
}

#[test]
fn normalized_derives_total_pages() {
    let meta = PageMeta {
        total: 95,
        current_page: 1,
        limit: 10,
        total_pages: None,
    };
    assert_eq!(meta.normalized().total_pages, Some(10));
}

#[test]
fn normalized_keeps_backend_total_pages() {
    let meta = PageMeta {
        total: 95,
        current_page: 1,
        limit: 10,
        total_pages: Some(12),
    };
    assert_eq!(meta.normalized().total_pages, Some(12));
}

#[test]
fn normalized_skips_zero_limit() {
    let meta = PageMeta {
        total: 95,
        current_page: 1,
        limit: 0,
        total_pages: None,
    };
    assert_eq!(meta.normalized().total_pages, None);
}

#[test]
fn next_page_stops_at_the_last_page() {
    let meta = PageMeta {
        total: 30,
        current_page: 3,
        limit: 10,
        total_pages: Some(3),
    };
    assert_eq!(meta.next_page(), None);

    let meta = PageMeta {
        current_page: 2,
        ..meta
    };
    assert_eq!(meta.next_page(), Some(3));
}

#[test]
fn next_page_assumes_more_when_count_unknown() {
    let meta = PageMeta {
        total: 0,
        current_page: 7,
        limit: 0,
        total_pages: None,
    };
    assert_eq!(meta.next_page(), Some(8));
}

#[test]
fn prev_page_stops_at_the_first_page() {
    let meta = PageMeta {
        total: 30,
        current_page: 1,
        limit: 10,
        total_pages: Some(3),
    };
    assert_eq!(meta.prev_page(), None);

    let meta = PageMeta {
        current_page: 2,
        ..meta
    };
    assert_eq!(meta.prev_page(), Some(1));
}

#[test]
fn initial_meta_reflects_the_requested_page() {
    let meta = PageMeta::initial(PageQuery { page: 3, limit: 25 });
    assert_eq!(meta.current_page, 3);
    assert_eq!(meta.limit, 25);
    assert_eq!(meta.total, 0);
    // A single assumed page keeps "next" a no-op until data arrives.
    assert_eq!(meta.next_page(), None);
}

#[test]
fn feed_decodes_camel_case_wire_json() {
    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Item {
        id: u32,
    }

    let feed: PageFeed<Item> = serde_json::from_str(
        r#"{"data":[{"id":1},{"id":2}],"pagination":{"total":95,"currentPage":2,"limit":10}}"#,
    )
    .unwrap();

    assert_eq!(feed.data, vec![Item { id: 1 }, Item { id: 2 }]);
    assert_eq!(feed.pagination.current_page, 2);
    assert_eq!(feed.pagination.total_pages, None);
    assert_eq!(feed.pagination.normalized().total_pages, Some(10));
}

#[test]
fn feed_keeps_explicit_total_pages() {
    #[derive(Debug, Deserialize)]
    struct Item {}

    let feed: PageFeed<Item> = serde_json::from_str(
        r#"{"data":[],"pagination":{"total":95,"currentPage":1,"limit":10,"totalPages":12}}"#,
    )
    .unwrap();

    assert_eq!(feed.pagination.total_pages, Some(12));
}
