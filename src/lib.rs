pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod migrator;
pub mod telemetry;

pub use app::app;
pub use sea_orm;
