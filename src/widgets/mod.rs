//! Sidebar widgets backed by third-party feeds. Both always answer 200,
//! serving a fixed placeholder when the feed is unavailable.

pub mod errors;
pub mod handlers;
pub mod live_scores;
pub mod weather;

pub use errors::WidgetError;
pub use live_scores::{LiveScoresClient, MatchSummary};
pub use weather::{WeatherClient, WeatherReport};
