use serde::Serialize;
use std::collections::HashSet;

use super::{ShowId, ShowItem};

/// Accepted shows for one user, keyed by id and kept in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Watchlist {
    items: Vec<ShowItem>,
    ids: HashSet<ShowId>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a show unless its id is already present
    ///
    /// Returns `false` and leaves the list untouched on a duplicate.
    pub fn insert(&mut self, show: ShowItem) -> bool {
        if !self.ids.insert(show.id) {
            return false;
        }
        self.items.push(show);
        true
    }

    /// Removes a show by id, returning it if it was present
    pub fn remove(&mut self, id: ShowId) -> Option<ShowItem> {
        if !self.ids.remove(&id) {
            return None;
        }
        let position = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(position))
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

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AcceptStatus {
    Ok,
    AlreadyPresentOrNotFound,
}

/// Result of accepting a show into the watchlist
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AcceptOutcome {
    pub status: AcceptStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub message: String,
}

impl AcceptOutcome {
    pub fn added(title: &str) -> Self {
        Self {
            status: AcceptStatus::Ok,
            title: Some(title.to_string()),
            message: format!("{} added to watchlist.", title),
        }
    }

    pub fn skipped() -> Self {
        Self {
            status: AcceptStatus::AlreadyPresentOrNotFound,
            title: None,
            message: "Show not found or already in watchlist.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RejectStatus {
    Ok,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RejectOutcome {
    pub status: RejectStatus,
}

impl RejectOutcome {
    pub fn ok() -> Self {
        Self {
            status: RejectStatus::Ok,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RemoveStatus {
    Ok,
    NotFound,
}

/// Result of removing a show from the watchlist
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RemoveOutcome {
    pub status: RemoveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub message: String,
}

impl RemoveOutcome {
    pub fn removed(title: &str) -> Self {
        Self {
            status: RemoveStatus::Ok,
            title: Some(title.to_string()),
            message: format!("{} removed from watchlist.", title),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: RemoveStatus::NotFound,
            title: None,
            message: "Show not found in watchlist.".to_string(),
        }
    }
}
