/**
 * Catalog Data Structure
 *
 * Defines the CatalogItem struct shown by every routed view, the fixed seed
 * list the catalog store starts from, and the title shortening used on cards.
 */
use serde::{Deserialize, Serialize};

/// Identifier of a catalog item, unique within the collection
pub type FilmId = u32;

/// Poster used for every seed item and for remote items without an image
pub const PLACEHOLDER_POSTER_URL: &str = "https://m.media-amazon.com/images/M/MV5BNjNhZTk0ZmEtNjJhMi00YzFlLWE1MmEtYzM1M2ZmMGMwMTU4XkEyXkFqcGdeQXVyNjU0OTQ0OTY@._V1_.jpg";

/// Titles at or above this many characters are shortened on cards
pub const TITLE_SHORTEN_AT: usize = 70;

/// Characters kept from a shortened title before the ellipsis
const TITLE_KEEP: usize = 67;

/// A single film in the catalog
///
/// Items are created when the store initializes (or when a refresh replaces
/// the list) and are never mutated afterwards.
///
/// # Example
/// ```rust
/// use cinerate::shared::CatalogItem;
///
/// let item = CatalogItem::new(7, "Heat");
/// assert_eq!(item.display_title(), "Heat");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: FilmId,
    pub title: String,
    /// Poster reference; the remote form may send `imageUrl` or omit it
    #[serde(rename = "imageUrl", alias = "image_url", default = "default_image_url")]
    pub image_url: String,
    /// Release year, when the server knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Average rating reported by the server, 0.0 to 5.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

fn default_image_url() -> String {
    PLACEHOLDER_POSTER_URL.to_string()
}

impl CatalogItem {
    /// Create an item with the placeholder poster
    pub fn new(id: FilmId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image_url: default_image_url(),
            year: None,
            rating: None,
        }
    }

    /// Server rating rounded to whole stars, clamped to 0..=5
    pub fn rounded_stars(&self) -> u8 {
        self.rating
            .map(|r| r.clamp(0.0, 5.0).round() as u8)
            .unwrap_or(0)
    }

    /// Title as shown on a card: long titles keep their first 67 characters
    /// followed by `...`
    pub fn display_title(&self) -> String {
        shorten_title(&self.title)
    }
}

/// Shorten a title for card display, counting characters rather than bytes
pub fn shorten_title(title: &str) -> String {
    if title.chars().count() >= TITLE_SHORTEN_AT {
        let kept: String = title.chars().take(TITLE_KEEP).collect();
        format!("{}...", kept)
    } else {
        title.to_string()
    }
}

/// The fixed list every session starts from
pub fn seed_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(0, "Silence of the Lambs"),
        CatalogItem::new(1, "The Shawshank Redemption"),
    ]
}

/// Linear scan for the item with `id`
pub fn find_by_id(items: &[CatalogItem], id: FilmId) -> Option<&CatalogItem> {
    items.iter().find(|item| item.id == id)
}
