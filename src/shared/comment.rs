//! Film comments
//!
//! Comments are posted from the detail view and live only for the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::catalog::FilmId;

/// Longest comment body accepted, in characters
pub const MAX_COMMENT_CHARS: usize = 1000;

/// A comment left on a film
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub film_id: FilmId,
    pub author: String,
    pub body: String,
    pub posted_at: DateTime<Utc>,
}

/// Reasons a comment draft is refused
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommentError {
    #[error("Comment cannot be empty")]
    Empty,
    #[error("Comment is too long ({0} characters, at most {max})", max = MAX_COMMENT_CHARS)]
    TooLong(usize),
}

impl Comment {
    /// Build a comment from a draft, trimming surrounding whitespace
    pub fn from_draft(film_id: FilmId, author: impl Into<String>, draft: &str) -> Result<Self, CommentError> {
        let body = draft.trim();
        if body.is_empty() {
            return Err(CommentError::Empty);
        }
        let len = body.chars().count();
        if len > MAX_COMMENT_CHARS {
            return Err(CommentError::TooLong(len));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            film_id,
            author: author.into(),
            body: body.to_string(),
            posted_at: Utc::now(),
        })
    }
}
