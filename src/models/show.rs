use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display, path::Path};

/// Catalog-assigned identifier of a show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(pub i64);

impl Display for ShowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recommendable show
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowItem {
    pub id: ShowId,
    pub title: String,
    pub genre: String,
    pub image_url: String,
    pub rating: String,
    pub description: String,
}

impl ShowItem {
    pub fn new(
        id: i64,
        title: &str,
        genre: &str,
        image_url: &str,
        rating: &str,
        description: &str,
    ) -> Self {
        Self {
            id: ShowId(id),
            title: title.to_string(),
            genre: genre.to_string(),
            image_url: image_url.to_string(),
            rating: rating.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate show id {0} in catalog")]
    DuplicateId(ShowId),

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fixed, ordered list of recommendable shows
///
/// Built once at startup and shared read-only. Keeps an id index next to the
/// ordered list so lookups do not scan.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<ShowItem>,
    index: HashMap<ShowId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids
    pub fn from_items(items: Vec<ShowItem>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id, position).is_some() {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items, index })
    }

    /// Loads a catalog from a JSON array of shows
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let items: Vec<ShowItem> = serde_json::from_str(&raw)?;
        Self::from_items(items)
    }

    pub fn get(&self, id: ShowId) -> Option<&ShowItem> {
        self.index.get(&id).map(|&position| &self.items[position])
    }

    /// Show at a cursor position
    pub fn at(&self, position: usize) -> Option<&ShowItem> {
        self.items.get(position)
    }

    pub fn items(&self) -> &[ShowItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let items = vec![
            ShowItem::new(
                1,
                "Attack on Titan",
                "Anime",
                "/static/attack.jpg",
                "9/10",
                "Humans fight against gigantic creatures known as Titans to protect their city.",
            ),
            ShowItem::new(
                2,
                "Breaking Bad",
                "Drama",
                "/static/breaking.jpg",
                "10/10",
                "A high school chemistry teacher turns to a life of crime after being diagnosed with cancer.",
            ),
            ShowItem::new(
                3,
                "Naruto",
                "Anime",
                "/static/naruto.jpg",
                "8/10",
                "A young ninja with a dream of becoming the strongest and gaining the respect of his peers.",
            ),
            ShowItem::new(
                4,
                "Stranger Things",
                "Science Fiction",
                "/static/stranger.jpg",
                "9/10",
                "A group of kids uncover strange events and supernatural forces in their small town.",
            ),
        ];

        Self::from_items(items).expect("built-in catalog ids are unique")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(id: i64, title: &str) -> ShowItem {
        ShowItem::new(id, title, "Drama", "/static/x.jpg", "7/10", "")
    }

    #[test]
    fn test_default_catalog_order() {
        let catalog = Catalog::default();
        let titles: Vec<&str> = catalog.items().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Attack on Titan", "Breaking Bad", "Naruto", "Stranger Things"]
        );
        assert_eq!(catalog.get(ShowId(3)).unwrap().title, "Naruto");
    }

    #[test]
    fn test_default_catalog_indexes_every_show() {
        let catalog = Catalog::default();
        for (position, item) in catalog.items().iter().enumerate() {
            assert_eq!(catalog.get(item.id), catalog.at(position));
        }
        assert!(Catalog::from_items(catalog.items().to_vec()).is_ok());
    }

    #[test]
    fn test_lookup_missing_id() {
        let catalog = Catalog::default();
        assert!(catalog.get(ShowId(99)).is_none());
        assert!(catalog.at(catalog.len()).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::from_items(vec![show(1, "A"), show(2, "B"), show(1, "C")]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(ShowId(1)))));
    }

    #[test]
    fn test_show_item_json_shape() {
        let json = serde_json::to_value(show(7, "Dark")).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Dark");
        assert_eq!(json["image_url"], "/static/x.jpg");
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"[{"id": 10, "title": "Dark", "genre": "Thriller", "image_url": "/static/dark.jpg", "rating": "9/10", "description": "Time travel."}]"#,
        )
        .unwrap();

        let catalog = Catalog::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(ShowId(10)).unwrap().genre, "Thriller");
    }
}
