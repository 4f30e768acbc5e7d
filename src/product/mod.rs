//! Product record: one catalog entry and its nested comments.

pub mod category;
pub mod comment;
pub mod validation;

pub use category::ProductType;
pub use comment::Comment;

use crate::types::{ProductID, Rating};
use serde::{Deserialize, Deserializer, Serialize};

pub const PLACEHOLDER_TITLE: &str = "Enter Title";
pub const PLACEHOLDER_DESCRIPTION: &str = "Enter Description";
pub const PLACEHOLDER_URL: &str = "Enter URL";

/// Product: one catalog entry as persisted in the data file
///
/// Property names follow the existing data file layout. Reads are case-insensitive (see
/// `store::codec`); writes always use the names below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Id", default)]
    pub id: ProductID,

    #[serde(rename = "Maker", default)]
    pub maker: Option<String>,

    #[serde(rename = "img", default)]
    pub image: Option<String>,

    #[serde(rename = "Url", default)]
    pub url: Option<String>,

    #[serde(rename = "Title", default)]
    pub title: Option<String>,

    #[serde(rename = "Director", default)]
    pub director: Option<String>,

    #[serde(rename = "Description", default)]
    pub description: Option<String>,

    /// `None` (never rated) is distinct from an empty list.
    #[serde(rename = "Ratings", default)]
    pub ratings: Option<Vec<Rating>>,

    #[serde(rename = "Cast", default)]
    pub cast: Option<Vec<String>>,

    #[serde(rename = "TrailerUrl", default)]
    pub trailer_url: Option<String>,

    #[serde(rename = "ProductType", default, deserialize_with = "null_as_default")]
    pub product_type: ProductType,

    #[serde(rename = "Quantity", default)]
    pub quantity: Option<String>,

    #[serde(rename = "Price", default, deserialize_with = "null_as_default")]
    pub price: i32,

    #[serde(rename = "YouTubeID", default)]
    pub youtube_id: Option<String>,

    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,

    #[serde(rename = "CommentList", default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

impl Product {
    /// Persisted property names, used for case-insensitive matching on read.
    pub const FIELD_NAMES: &'static [&'static str] = &[
        "Id",
        "Maker",
        "img",
        "Url",
        "Title",
        "Director",
        "Description",
        "Ratings",
        "Cast",
        "TrailerUrl",
        "ProductType",
        "Quantity",
        "Price",
        "YouTubeID",
        "Genre",
        "CommentList",
    ];

    /// A fresh record with placeholder text, ready for the user to fill in.
    pub fn placeholder(id: ProductID) -> Self {
        Self {
            id,
            title: Some(PLACEHOLDER_TITLE.to_string()),
            description: Some(PLACEHOLDER_DESCRIPTION.to_string()),
            url: Some(PLACEHOLDER_URL.to_string()),
            image: Some(String::new()),
            ..Self::default()
        }
    }

    /// Copy the editable fields from `edited` onto this record.
    ///
    /// Only title, image, description, genre, video id and director are taken. Ratings,
    /// cast, comments, url, maker, trailer, quantity, price and category stay as stored.
    pub fn apply_edits(&mut self, edited: &Product) {
        self.title = edited.title.clone();
        self.image = edited.image.clone();
        self.description = edited.description.as_deref().map(|d| d.trim().to_string());
        self.genre = edited.genre.clone();
        self.youtube_id = edited.youtube_id.clone();
        self.director = edited.director.clone();
    }

    /// Append a rating, creating the list on first use. Bounds are the caller's job.
    pub(crate) fn push_rating(&mut self, rating: Rating) {
        self.ratings.get_or_insert_with(Vec::new).push(rating);
    }

    pub fn rating_count(&self) -> usize {
        self.ratings.as_ref().map_or(0, Vec::len)
    }

    /// Mean of all ratings, or `None` when there are none.
    pub fn average_rating(&self) -> Option<f64> {
        let ratings = self.ratings.as_ref().filter(|r| !r.is_empty())?;
        let total: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
        Some(total as f64 / ratings.len() as f64)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
