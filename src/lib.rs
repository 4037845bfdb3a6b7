//! Kudos library crate: the controller behind an app review listing page.
//!
//! The library models a server-rendered listing of reviews and the reader
//! interactions layered on top of it: deleting and flagging reviews, editing
//! a review in an overlay, revealing hidden reviews in batches and toggling
//! the rating breakdown. Mutations are sent to the site through a
//! [`ReviewActionGateway`]; everything else is local state.

pub mod config;
pub mod error;
pub mod files;
pub mod gateway;
pub mod page;
pub mod reviews;
pub mod telemetry;

pub use config::{KudosConfig, PageOperation};
pub use error::PageError;
pub use gateway::{FlagReceipt, HttpGatewayConfig, HttpReviewGateway, ReviewActionGateway};
pub use page::{
    ActionTag, Command, EditDraft, EventDisposition, FlagPhase, OverlayKind, OverlayState,
    PageMsg, PageNotice, RatingSelector, ReviewPage, RevealOutcome,
};
pub use reviews::{
    DeletionState, FlagReason, FlagStatus, Rating, Review, ReviewId, ReviewListing,
    ReviewRegistry, Visibility, listing_path,
};
pub use telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
