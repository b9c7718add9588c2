// src/pipeline/sink.rs

//! Where daily words end up.

use std::io::{IsTerminal, Write};

use serde::Serialize;

use crate::models::Feed;

/// One line ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub feed: Feed,
    pub text: String,
    /// Configured colour, passed through unvalidated
    pub color: String,
}

/// Receives notifications from the daily pipeline.
pub trait MessageSink: Send + Sync {
    fn queue(&self, notification: Notification);
}

/// Prints notifications to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    /// Colour output even when stdout is not a terminal
    pub force_color: bool,
}

impl MessageSink for ConsoleSink {
    fn queue(&self, notification: Notification) {
        let use_color = self.force_color || std::io::stdout().is_terminal();
        let line = render(&notification, use_color);
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}") {
            log::warn!("Failed to write notification: {}", e);
        }
    }
}

fn render(notification: &Notification, use_color: bool) -> String {
    match parse_hex_color(&notification.color).filter(|_| use_color) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m{}\x1b[0m", notification.text),
        None => notification.text.clone(),
    }
}

/// `#RRGGBB` to its components; anything else is `None`.
fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
