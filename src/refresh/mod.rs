pub mod auth;
pub mod dtos;
pub mod handlers;
pub mod service;
pub mod trigger;

pub use auth::{AuthError, CronAuthorization};
pub use service::{RefreshOutcome, RefreshService, SkipReason};
pub use trigger::RefreshTrigger;
