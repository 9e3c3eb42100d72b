//! Cache Module
//!
//! Provides an authenticated in-memory cache with TTL expiration and a hard
//! capacity bound. Expired entries are dropped lazily on `get` and by a
//! sweep that runs after every `add`; there is no background timer.

mod auth;
mod clock;
mod entry;
mod facade;
mod status;
mod store;


// Re-export public types
pub use auth::AuthGate;
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use facade::Cache;
pub use status::{CacheStatus, StatusItem};
pub use store::CacheStore;
