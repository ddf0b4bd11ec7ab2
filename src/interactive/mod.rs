//! Interactive terminal UI

mod app;
mod rendering;

pub use app::{App, HistoryEntry, InputMode, Message, MessageStyle, Statistics, run_tui};
