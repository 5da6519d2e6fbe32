//! Star ratings
//!
//! A rating belongs to a rendered card, not to the film: two cards showing the
//! same film keep separate ratings, and every rating is dropped when the route
//! changes and the cards are rebuilt. Nothing here is persisted.

use std::collections::HashMap;

/// Stars per rating widget
pub const STAR_COUNT: u8 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarRating {
    value: u8,
    hover: u8,
}

impl StarRating {
    /// Rating with `value` stars, clamped to `STAR_COUNT`
    pub fn new(value: u8) -> Self {
        Self {
            value: value.min(STAR_COUNT),
            hover: 0,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn set(&mut self, value: u8) {
        self.value = value.min(STAR_COUNT);
    }

    /// Star under the pointer, 0 when none
    pub fn set_hover(&mut self, star: u8) {
        self.hover = star.min(STAR_COUNT);
    }

    /// Whether star `index` (1-based) is drawn filled
    ///
    /// A hovered star previews its rating; otherwise the stored value shows.
    pub fn is_filled(&self, index: u8) -> bool {
        if self.hover > 0 {
            self.hover >= index
        } else {
            self.value >= index
        }
    }
}

/// Where a card sits on the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSlot {
    pub section: &'static str,
    pub index: usize,
}

impl CardSlot {
    pub fn new(section: &'static str, index: usize) -> Self {
        Self { section, index }
    }
}

/// Ratings of the cards on the current page
#[derive(Debug, Clone, Default)]
pub struct CardRatings {
    ratings: HashMap<CardSlot, StarRating>,
}

impl CardRatings {
    pub fn entry(&mut self, slot: CardSlot) -> &mut StarRating {
        self.ratings.entry(slot).or_default()
    }

    pub fn rated_count(&self) -> usize {
        self.ratings.values().filter(|r| r.value() > 0).count()
    }

    /// Drop every rating; called when the page is rebuilt
    pub fn clear(&mut self) {
        self.ratings.clear();
    }
}
