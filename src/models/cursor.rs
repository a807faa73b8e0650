use serde::Serialize;

use super::{Catalog, ShowId, ShowItem};

/// Position of a user within the catalog while swiping
///
/// Starts at 0 and only moves forward, one card per accept or reject. Once it
/// reaches the catalog length the stack is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendationCursor {
    position: usize,
}

impl RecommendationCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<&'a ShowItem> {
        catalog.at(self.position)
    }

    pub fn is_exhausted(&self, catalog: &Catalog) -> bool {
        self.position >= catalog.len()
    }

    /// Moves past the current card if it is `show_id`
    ///
    /// A stale id leaves the cursor where it is. Returns whether it moved.
    pub fn advance_past(&mut self, show_id: ShowId, catalog: &Catalog) -> bool {
        match self.current(catalog) {
            Some(show) if show.id == show_id => {
                self.position += 1;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn view(&self, catalog: &Catalog) -> CursorView {
        let show = self.current(catalog).cloned();
        CursorView {
            position: self.position.min(catalog.len()),
            total: catalog.len(),
            exhausted: show.is_none(),
            show,
        }
    }
}

/// Snapshot of the swipe stack returned to clients
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CursorView {
    pub position: usize,
    pub total: usize,
    pub exhausted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<ShowItem>,
}
