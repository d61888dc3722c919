pub mod generation_task;
pub mod protocol;
pub mod reply_task;
pub mod rest;
pub mod session;
pub mod state;
pub mod swipe_task;
pub mod views;
pub mod ws_handler;

// Re-export the handlers the router is built from.
pub use rest::{checklist_handler, generate_handler, health_handler, list_candidates_handler};
pub use ws_handler::ws_handler;
