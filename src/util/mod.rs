//! Utility helpers shared across site UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability. The theme stack splits
//! into a pure value layer (`theme`), decision logic (`theme_controller`,
//! `toggle_click`), and the web-sys adapter (`browser_theme`, `storage`).

pub mod browser_theme;
pub mod storage;
pub mod theme;
pub mod theme_controller;
pub mod toggle_click;
