//! Reusable UI Components
//!
//! Widgets shared by the routed views.

pub mod film_card;
pub mod stars;
pub mod poster;
pub mod comments;
