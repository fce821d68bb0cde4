pub mod actions;
pub mod app;
pub mod calendar;
pub mod client;
pub mod config;
pub mod day;
pub mod errors;
pub mod handlers;
pub mod locale;
pub mod models;
pub mod session;
pub mod state;
pub mod stats;
pub mod store;
pub mod ui;

pub use app::router;
pub use client::ApiClient;
pub use config::Config;
pub use session::Session;
pub use state::AppState;
pub use store::HabitStore;
