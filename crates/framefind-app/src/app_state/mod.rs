//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the embedded page, the host service and
//! the tokio runtime that carries host calls.

mod bounds;
mod core;
mod event_handler;
mod find_keys;
mod init;
mod polling;
mod shutdown;
mod title;

pub use core::FrameFindApp;
