pub mod app;
pub mod catalog;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod models;
pub mod phrases;
pub mod session;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::{AppData, AppState};
pub use storage::{resolve_data_dir, Storage};
