use catalog::{JsonFileProductStore, ProductStore};
use std::sync::Arc;
use std::thread;

use crate::support::with_contents;

const RATINGS_PER_THREAD: usize = 20;

#[test]
fn concurrent_ratings_on_different_ids_all_survive() {
    let fx = with_contents(r#"[{"Id":"a"},{"Id":"b"},{"Id":"c"},{"Id":"d"}]"#);
    let store = Arc::new(JsonFileProductStore::new(&fx.path));

    let mut handles = vec![];
    for id in ["a", "b", "c", "d"] {
        let store = store.clone();
        handles.push(thread::spawn(move || {
            for i in 0..RATINGS_PER_THREAD {
                assert!(store.add_rating(id, (i % 6) as i32).unwrap());
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    for product in store.get_all().unwrap() {
        assert_eq!(product.rating_count(), RATINGS_PER_THREAD, "{}", product.id);
    }
}

#[test]
fn separate_handles_on_one_file_share_the_writer_lock() {
    let fx = with_contents(r#"[{"Id":"a"},{"Id":"b"}]"#);

    let mut handles = vec![];
    for id in ["a", "b", "a", "b"] {
        let path = fx.path.clone();
        handles.push(thread::spawn(move || {
            let store = JsonFileProductStore::new(path);
            for _ in 0..RATINGS_PER_THREAD {
                assert!(store.add_rating(id, 4).unwrap());
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    for product in fx.store.get_all().unwrap() {
        assert_eq!(product.rating_count(), RATINGS_PER_THREAD * 2, "{}", product.id);
    }
}

#[test]
fn concurrent_creates_and_deletes_keep_ids_unique() {
    let fx = with_contents("[]");
    let store = Arc::new(JsonFileProductStore::new(&fx.path));

    let mut handles = vec![];
    for _ in 0..4 {
        let store = store.clone();
        handles.push(thread::spawn(move || {
            let mut kept = Vec::new();
            for i in 0..10 {
                let created = store.create().unwrap();
                if i % 2 == 0 {
                    assert!(store.delete(&created.id).unwrap().is_some());
                } else {
                    kept.push(created.id);
                }
            }
            kept
        }));
    }

    let mut expected: Vec<String> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    let mut actual: Vec<String> = store.get_all().unwrap().into_iter().map(|p| p.id).collect();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);

    actual.dedup();
    assert_eq!(actual.len(), 20);
}

#[test]
fn readers_never_observe_a_partial_file() {
    let fx = with_contents(r#"[{"Id":"a"}]"#);
    let writer_store = Arc::new(JsonFileProductStore::new(&fx.path));
    let reader_store = JsonFileProductStore::new(&fx.path);

    let writer = {
        let store = writer_store.clone();
        thread::spawn(move || {
            for _ in 0..50 {
                assert!(store.add_rating("a", 1).unwrap());
            }
        })
    };

    for _ in 0..50 {
        let products = reader_store.get_all().unwrap();
        assert_eq!(products.len(), 1);
    }
    writer.join().unwrap();
}
