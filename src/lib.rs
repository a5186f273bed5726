pub mod app;
pub mod app_state;
pub mod articles;
pub mod config;
pub mod entities;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod news;
pub mod quality;
pub mod refresh;
pub mod repositories;
pub mod scheduler;
pub mod telemetry;
pub mod translate;
pub mod widgets;
