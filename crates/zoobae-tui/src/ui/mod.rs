//! Terminal UI module using ratatui.
//!
//! This module provides the TUI rendering and input handling:
//!
//! - `render`: Frame layout, status bar and modal overlays
//! - `input`: Keyboard event handling
//! - `styles`: Color schemes and text styling
//! - `screens`: Per-screen content (welcome, forms, main tabs)

pub mod input;
pub mod render;
pub mod screens;
pub mod styles;
