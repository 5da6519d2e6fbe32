//! Property-based tests for catalog display rules and routing

use proptest::prelude::*;

use cinerate::egui_app::rating::{StarRating, STAR_COUNT};
use cinerate::egui_app::Route;
use cinerate::shared::catalog::{shorten_title, TITLE_SHORTEN_AT};

proptest! {
    #[test]
    fn test_shortened_titles_fit(title in "\\PC{0,120}") {
        let shown = shorten_title(&title);
        let count = title.chars().count();
        if count >= TITLE_SHORTEN_AT {
            prop_assert_eq!(shown.chars().count(), 70);
            prop_assert!(shown.ends_with("..."));
            let kept: String = title.chars().take(67).collect();
            prop_assert!(shown.starts_with(&kept));
        } else {
            prop_assert_eq!(shown, title);
        }
    }

    #[test]
    fn test_detail_route_keeps_id(id in any::<u32>()) {
        let route = Route::parse(&format!("/films/{}", id));
        prop_assert_eq!(route.film_id(), Some(id));
        prop_assert_eq!(route, Route::film(id));
    }

    #[test]
    fn test_star_value_never_exceeds_count(value in any::<u8>()) {
        let mut rating = StarRating::default();
        rating.set(value);
        prop_assert!(rating.value() <= STAR_COUNT);
        prop_assert_eq!(rating.value(), value.min(STAR_COUNT));
    }
}
