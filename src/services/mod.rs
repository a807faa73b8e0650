pub mod auth;
pub mod password;
pub mod preferences;
pub mod sessions;
pub mod user_state;
pub mod watchlist;

pub use auth::AuthService;
pub use preferences::PreferencesService;
pub use sessions::{InMemorySessionStore, SessionStore};
pub use user_state::{UserState, UserStates};
pub use watchlist::WatchlistService;
