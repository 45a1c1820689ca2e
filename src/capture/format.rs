//! Modifier ordering and platform-aware display formatting.
//!
//! Canonical order is fixed: keyboard modifiers first (Control, Alt, Shift,
//! Meta), then mouse buttons. Platforms differ in labels, not ranks, so a
//! stored set never reorders when the display platform changes.

use super::types::{Modifier, ModifierSet, Platform};

/// Priority rank used for canonical ordering. Lower sorts first.
pub fn canonical_rank(modifier: Modifier) -> u8 {
    match modifier {
        Modifier::Control => 0,
        Modifier::Alt => 1,
        Modifier::Shift => 2,
        Modifier::Meta => 3,
        Modifier::LeftButton => 4,
        Modifier::RightButton => 5,
        Modifier::MiddleButton => 6,
        Modifier::BackButton => 7,
        Modifier::ForwardButton => 8,
    }
}

/// Display label for one modifier on the given platform.
pub fn modifier_label(modifier: Modifier, platform: Platform) -> &'static str {
    match platform {
        Platform::MacOS => match modifier {
            Modifier::Control => "⌃",
            Modifier::Alt => "⌥",
            Modifier::Shift => "⇧",
            Modifier::Meta => "⌘",
            Modifier::LeftButton => "Click",
            Modifier::RightButton => "Right Click",
            Modifier::MiddleButton => "Middle Click",
            Modifier::BackButton => "Button 4",
            Modifier::ForwardButton => "Button 5",
        },
        Platform::Windows | Platform::Linux => match modifier {
            Modifier::Control => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::Meta => "Super",
            Modifier::LeftButton => "Click",
            Modifier::RightButton => "Right Click",
            Modifier::MiddleButton => "Middle Click",
            Modifier::BackButton => "Button 4",
            Modifier::ForwardButton => "Button 5",
        },
    }
}

/// Human-readable form of a raw key code.
///
/// `"KeyA"` becomes `"A"`, `"Digit5"` becomes `"5"`, navigation keys get
/// glyphs on macOS and names elsewhere. Unknown codes pass through as-is.
pub fn key_label(code: &str, platform: Platform) -> String {
    if let Some(letter) = code.strip_prefix("Key") {
        if letter.len() == 1 && letter.chars().all(|c| c.is_ascii_alphabetic()) {
            return letter.to_uppercase();
        }
    }
    if let Some(digit) = code.strip_prefix("Digit") {
        if digit.len() == 1 && digit.chars().all(|c| c.is_ascii_digit()) {
            return digit.to_string();
        }
    }

    match platform {
        Platform::MacOS => key_label_macos(code),
        Platform::Windows | Platform::Linux => key_label_text(code),
    }
}

fn key_label_macos(code: &str) -> String {
    match code {
        "Enter" => "↵",
        "Escape" => "⎋",
        "Tab" => "⇥",
        "Space" => "␣",
        "Backspace" => "⌫",
        "Delete" => "⌦",
        "ArrowUp" => "↑",
        "ArrowDown" => "↓",
        "ArrowLeft" => "←",
        "ArrowRight" => "→",
        "Home" => "↖",
        "End" => "↘",
        "PageUp" => "⇞",
        "PageDown" => "⇟",
        other => return other.to_string(),
    }
    .to_string()
}

fn key_label_text(code: &str) -> String {
    match code {
        "Enter" => "Enter",
        "Escape" => "Esc",
        "Tab" => "Tab",
        "Space" => "Space",
        "Backspace" => "Backspace",
        "Delete" => "Delete",
        "ArrowUp" => "Up",
        "ArrowDown" => "Down",
        "ArrowLeft" => "Left",
        "ArrowRight" => "Right",
        "PageUp" => "PageUp",
        "PageDown" => "PageDown",
        other => return other.to_string(),
    }
    .to_string()
}

/// Display string for a combination.
///
/// macOS concatenates the modifier symbols directly (`⌃⇧A`); other platforms
/// join with `+` (`Ctrl+Shift+A`). A combination containing a mouse-button
/// pseudo-modifier uses `+` joins on every platform, since button labels are
/// words rather than symbols.
pub fn display_string(key: Option<&str>, modifiers: &ModifierSet, platform: Platform) -> String {
    let mut parts: Vec<String> = modifiers
        .iter()
        .map(|m| modifier_label(m, platform).to_string())
        .collect();
    if let Some(code) = key {
        parts.push(key_label(code, platform));
    }

    let has_button = modifiers.iter().any(|m| m.is_mouse_button());
    match platform {
        Platform::MacOS if !has_button => parts.concat(),
        _ => parts.join("+"),
    }
}
