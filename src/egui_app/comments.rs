//! Comment threads
//!
//! Comments posted during the session, grouped by film, newest first. They
//! are kept in memory only.

use std::collections::HashMap;

use crate::shared::{Comment, CommentError, FilmId};

#[derive(Debug, Clone, Default)]
pub struct CommentThreads {
    threads: HashMap<FilmId, Vec<Comment>>,
}

impl CommentThreads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Comments for `film_id`, newest first
    pub fn for_film(&self, film_id: FilmId) -> &[Comment] {
        self.threads.get(&film_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Validate a draft and add it on top of the film's thread
    pub fn post(&mut self, film_id: FilmId, author: &str, draft: &str) -> Result<&Comment, CommentError> {
        let comment = Comment::from_draft(film_id, author, draft)?;
        tracing::debug!("Comment {} posted on film {}", comment.id, film_id);
        let thread = self.threads.entry(film_id).or_default();
        thread.insert(0, comment);
        Ok(&thread[0])
    }

    pub fn count(&self, film_id: FilmId) -> usize {
        self.for_film(film_id).len()
    }
}
