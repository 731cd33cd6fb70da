//! User interaction helpers for PassForge.
//!
//! This module centralizes all terminal I/O, prompting, and clipboard
//! interactions. No generation logic should live here.

use clipboard::{ClipboardContext, ClipboardProvider};
use std::io::{self, Write};
use std::time::Duration;

/// How long the interactive form keeps showing the "copied" marker.
pub const COPIED_WINDOW_SECS: u64 = 2;

/// How long a copied password stays on the clipboard before it is cleared.
pub const CLIPBOARD_CLEAR_SECS: u64 = 10;

/// Print a prompt and read one trimmed line from stdin.
///
/// Returns `None` once stdin is closed.
pub fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut s = String::new();
    match io::stdin().read_line(&mut s) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(s.trim().to_string()),
    }
}

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| format!("Clipboard init error: {}", e))?;

    ctx.set_contents(text.to_string())
        .map_err(|e| format!("Clipboard set error: {}", e))
}

/// Put `text` on the system clipboard and clear it after `secs` seconds.
///
/// The clear runs on a detached thread and only overwrites the clipboard
/// if it still holds `text`; anything the user copied in the meantime is
/// left alone.
pub fn copy_with_timed_clear(text: &str, secs: u64) -> Result<(), String> {
    copy_to_clipboard(text)?;

    let text = text.to_string();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_secs(secs));

        let ctx_result: Result<ClipboardContext, _> = ClipboardProvider::new();
        if let Ok(mut ctx) = ctx_result {
            let current: Result<String, _> = ctx.get_contents();
            if current.ok().as_deref() == Some(&text) {
                let _ = ctx.set_contents(String::new());
            }
        }
    });

    Ok(())
}
