//! Remote data access.

pub mod feed;

pub use feed::{FeedClient, FeedSource, StaticFeed, feed_url_from_env};
