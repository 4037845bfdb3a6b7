//! Review records, the page-scoped registry, and snapshot loading.

mod flag_reason;
mod listing;
mod models;
mod registry;

pub use flag_reason::FlagReason;
pub use listing::{ReviewListing, listing_path};
pub use models::{DeletionState, FlagStatus, Rating, Review, ReviewId, Visibility};
pub use registry::ReviewRegistry;
