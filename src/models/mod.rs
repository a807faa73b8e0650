mod cursor;
mod show;
mod user;
mod user_preferences;
mod watchlist;

pub use cursor::{CursorView, RecommendationCursor};
pub use show::{Catalog, CatalogError, ShowId, ShowItem};
pub use user::{Session, SessionId, UserId, UserRecord};
pub use user_preferences::{
    PreferencesPatch, PreferencesUpdate, TextSize, UpdateStatus, UserPreferences,
};
pub use watchlist::{
    AcceptOutcome, AcceptStatus, RejectOutcome, RejectStatus, RemoveOutcome, RemoveStatus,
    Watchlist,
};
