//! Routing
//!
//! Maps paths to views and keeps the navigation history. A *transition* is a
//! change of path; navigating to the path already shown is not one.
//!
//! | Path             | Route                         |
//! |------------------|-------------------------------|
//! | `/`              | `Route::Login`                |
//! | `/films`         | `Route::Films`                |
//! | `/films/:id`     | `Route::FilmDetail(id)`       |
//! | `/rated-films`   | `Route::AllFilms(Rated)`      |
//! | `/unrated-films` | `Route::AllFilms(Unrated)`    |
//! | anything else    | `Route::NotFound(path)`       |

use std::fmt;

use crate::shared::FilmId;

/// Which half of the catalog a list route is named after
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListFilter {
    Rated,
    Unrated,
}

impl ListFilter {
    pub fn label(self) -> &'static str {
        match self {
            ListFilter::Rated => "Rated films",
            ListFilter::Unrated => "Unrated films",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Films,
    /// Detail page; the segment is kept raw so a non-numeric id still reaches
    /// the detail view's not-found state
    FilmDetail(String),
    AllFilms(ListFilter),
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('/') {
            return Route::NotFound(path.to_string());
        }
        let trimmed = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        match segments.as_slice() {
            [] | [""] => Route::Login,
            ["films"] => Route::Films,
            ["films", id] if !id.is_empty() => Route::FilmDetail(id.to_string()),
            ["rated-films"] => Route::AllFilms(ListFilter::Rated),
            ["unrated-films"] => Route::AllFilms(ListFilter::Unrated),
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn film(id: FilmId) -> Self {
        Route::FilmDetail(id.to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Films => "/films".to_string(),
            Route::FilmDetail(id) => format!("/films/{}", id),
            Route::AllFilms(ListFilter::Rated) => "/rated-films".to_string(),
            Route::AllFilms(ListFilter::Unrated) => "/unrated-films".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Film id of a detail route, if the segment is a number
    pub fn film_id(&self) -> Option<FilmId> {
        match self {
            Route::FilmDetail(id) => id.parse().ok(),
            _ => None,
        }
    }

    /// `/` plus the first path segment, used to highlight header links
    pub fn section(&self) -> String {
        let path = self.path();
        let first = path.split('/').nth(1).unwrap_or_default();
        format!("/{}", first)
    }

    /// Whether the view is wrapped by the header
    pub fn has_header(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Current route plus history
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
    transitions: u64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
            transitions: 0,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Number of route transitions so far
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Go to `route`; returns `true` if that changed the path
    pub fn navigate(&mut self, route: Route) -> bool {
        if route.path() == self.current.path() {
            return false;
        }
        tracing::debug!("Navigate {} -> {}", self.current, route);
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        self.transitions += 1;
        true
    }

    /// Return to the previous route, if any
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                tracing::debug!("Back {} -> {}", self.current, previous);
                self.current = previous;
                self.transitions += 1;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Replace the whole history, e.g. on logout
    pub fn reset(&mut self, route: Route) {
        let changed = route.path() != self.current.path();
        self.current = route;
        self.history.clear();
        if changed {
            self.transitions += 1;
        }
    }
}

/// Fires once per route transition
///
/// Fed the navigator's transition counter every frame; re-renders without a
/// transition never fire.
#[derive(Debug, Clone, Default)]
pub struct ScrollReset {
    seen: u64,
}

impl ScrollReset {
    pub fn should_reset(&mut self, transitions: u64) -> bool {
        if transitions != self.seen {
            self.seen = transitions;
            true
        } else {
            false
        }
    }
}
