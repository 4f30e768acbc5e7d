use catalog::{Comment, Product, ProductStore, ProductType};
use serde_json::{Map, Value};

use crate::support::{seeded, with_contents};

fn fully_populated() -> Product {
    let mut extra = Map::new();
    extra.insert("Likes".to_string(), Value::from(7));
    Product {
        id: "full".to_string(),
        maker: Some("Workshop".to_string()),
        image: Some("full.png".to_string()),
        url: Some("https://example.com/full".to_string()),
        title: Some("Everything".to_string()),
        director: Some("Dee".to_string()),
        description: Some("All fields set".to_string()),
        ratings: Some(vec![0, 5, 3]),
        cast: Some(vec!["Zed".to_string(), "Amy".to_string()]),
        trailer_url: Some("https://example.com/trailer".to_string()),
        product_type: ProductType::Collectable,
        quantity: Some("12".to_string()),
        price: -1,
        youtube_id: Some("yt123".to_string()),
        genre: Some("Drama".to_string()),
        comments: vec![Comment {
            id: Some("c9".to_string()),
            author: Some("bo".to_string()),
            text: Some("Great".to_string()),
            timestamp: Some("2024-03-01T10:00:00Z".to_string()),
            extra,
        }],
    }
}

#[test]
fn every_field_survives_a_rewrite() {
    let fx = with_contents("[]");
    let created = fx.store.create().unwrap();

    // Write a fully populated record through the file, then force a rewrite
    let products = vec![fully_populated(), created];
    let json = serde_json::to_string_pretty(&products).unwrap();
    std::fs::write(&fx.path, json).unwrap();
    assert!(fx.store.delete("not-there").unwrap().is_none());

    let reloaded = fx.store.get_all().unwrap();
    assert_eq!(reloaded, products);
}

#[test]
fn empty_ratings_stay_distinct_from_absent() {
    let fx = with_contents(r#"[{"Id":"e","Ratings":[],"CommentList":[]},{"Id":"n"}]"#);
    assert!(fx.store.delete("zzz").unwrap().is_none());

    let reloaded = fx.store.get_all().unwrap();
    assert_eq!(reloaded[0].ratings, Some(vec![]));
    assert!(reloaded[0].comments.is_empty());
    assert_eq!(reloaded[1].ratings, None);

    let contents = std::fs::read_to_string(&fx.path).unwrap();
    assert!(contents.contains("\"Ratings\": []"));
    assert!(contents.contains("\"Ratings\": null"));
}

#[test]
fn seeded_collection_round_trips_through_mutation() {
    let fx = seeded();
    let before = fx.store.get_all().unwrap();
    assert!(fx.store.delete("unknown").unwrap().is_none());
    assert_eq!(fx.store.get_all().unwrap(), before);
}

#[test]
fn unknown_category_code_loads_and_survives_a_rewrite() {
    let fx = with_contents(r#"[{"Id":"p1","ProductType":2},{"Id":"p2"}]"#);

    let products = fx.store.get_all().unwrap();
    assert_eq!(products[0].product_type, ProductType::Other(2));
    assert_eq!(products[1].product_type, ProductType::Undefined);
    assert!(fx.store.add_rating("p2", 4).unwrap());

    let p1 = fx.store.get_by_id("p1").unwrap().unwrap();
    assert_eq!(p1.product_type, ProductType::Other(2));
    let contents = std::fs::read_to_string(&fx.path).unwrap();
    assert!(contents.contains("\"ProductType\": 2"));
}
