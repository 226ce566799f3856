use super::*;
use crate::paging::PageQuery;

#[test]
fn memory_navigator_merges_and_records_pushes() {
    let nav = MemoryNavigator::new("/users", "tab=active");

    sync_query(&nav, PageQuery { page: 5, limit: 20 });
    assert_eq!(nav.search(), "tab=active&page=5&limit=20");
    assert_eq!(nav.pushes(), vec!["/users?tab=active&page=5&limit=20"]);

    sync_query(&nav, PageQuery { page: 6, limit: 20 });
    assert_eq!(nav.search(), "tab=active&page=6&limit=20");
    assert_eq!(nav.pushes().len(), 2);
}

#[test]
fn initial_query_reads_the_current_url() {
    let nav = MemoryNavigator::new("/users", "page=3&limit=25");
    assert_eq!(initial_query(&nav, 10), PageQuery { page: 3, limit: 25 });

    let nav = MemoryNavigator::new("/users", "");
    assert_eq!(initial_query(&nav, 10), PageQuery { page: 1, limit: 10 });
}

#[test]
fn sync_query_writes_page_and_limit_pairs() {
    let mut nav = MockQueryNavigator::new();
    nav.expect_push_query()
        .withf(|params| {
            params
                == [
                    ("page".to_string(), "2".to_string()),
                    ("limit".to_string(), "50".to_string()),
                ]
        })
        .times(1)
        .return_const(());

    sync_query(&nav, PageQuery { page: 2, limit: 50 });
}

#[test]
fn initial_query_only_reads() {
    let mut nav = MockQueryNavigator::new();
    nav.expect_query()
        .times(1)
        .return_const(vec![("page".to_string(), "4".to_string())]);

    // Reading the initial request must not navigate anywhere.
    assert_eq!(initial_query(&nav, 10), PageQuery { page: 4, limit: 10 });
}
