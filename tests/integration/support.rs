use catalog::JsonFileProductStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Two products in the layout the legacy site writes, including mixed-case keys.
pub const SEED_PRODUCTS: &str = r#"[
  {
    "Id": "p1",
    "Maker": "Mira",
    "img": "https://img.example/quilt.png",
    "Url": "https://example.com/quilt",
    "Title": "Patchwork Quilt",
    "Description": "Hand stitched quilt",
    "Ratings": [5, 4],
    "Cast": null,
    "ProductType": 1,
    "Quantity": "3",
    "Price": 45,
    "CommentList": [
      { "Id": "c1", "Author": "ann", "Text": "Lovely" }
    ]
  },
  {
    "id": "p2",
    "title": "Pocket Watch",
    "director": null,
    "ratings": null,
    "producttype": 5,
    "price": 80
  }
]"#;

pub struct Fixture {
    // Held so the directory outlives the store
    pub _dir: TempDir,
    pub path: PathBuf,
    pub store: JsonFileProductStore,
}

pub fn seeded() -> Fixture {
    with_contents(SEED_PRODUCTS)
}

pub fn with_contents(contents: &str) -> Fixture {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.json");
    std::fs::write(&path, contents).unwrap();
    let store = JsonFileProductStore::new(&path);
    Fixture {
        _dir: dir,
        path,
        store,
    }
}
