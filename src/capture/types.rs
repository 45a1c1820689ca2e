//! Core capture value types with platform-aware display.
//!
//! This module provides:
//! - `Modifier` - A hotkey qualifier (keyboard modifier or mouse button)
//! - `ModifierSet` - Deduplicated modifier sequence in canonical order
//! - `CaptureState` - The captured combination (optional key + modifiers)
//! - `HotkeyParseError` - Detailed parse errors for user feedback
//! - Platform-aware display (⌃⇧A on macOS, Ctrl+Shift+A on Windows/Linux)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

use super::format;

/// Errors that can occur when parsing a hotkey string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HotkeyParseError {
    #[error("hotkey string is empty")]
    Empty,
    #[error("unexpected token '{0}' after the primary key")]
    UnknownToken(String),
}

/// A hotkey qualifier: a non-primary key or a mouse button.
///
/// Mouse buttons participate as pseudo-modifiers so that combinations like
/// Ctrl+RightButton can be captured through the same field as plain keyboard
/// shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Control,
    Alt,
    Shift,
    Meta,
    LeftButton,
    RightButton,
    MiddleButton,
    BackButton,
    ForwardButton,
}

impl Modifier {
    /// Canonical config-string token; [`CaptureState::parse`] accepts it back.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Control => "control",
            Self::Alt => "alt",
            Self::Shift => "shift",
            Self::Meta => "meta",
            Self::LeftButton => "leftbutton",
            Self::RightButton => "rightbutton",
            Self::MiddleButton => "middlebutton",
            Self::BackButton => "backbutton",
            Self::ForwardButton => "forwardbutton",
        }
    }

    /// Whether this qualifier is a mouse-button pseudo-modifier.
    pub fn is_mouse_button(&self) -> bool {
        matches!(
            self,
            Self::LeftButton
                | Self::RightButton
                | Self::MiddleButton
                | Self::BackButton
                | Self::ForwardButton
        )
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Deduplicated modifier sequence held in canonical priority order.
///
/// The order is a pure function of content (see [`format::canonical_rank`]),
/// never of arrival order. Real combinations hold at most a handful of
/// entries, so the storage is inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModifierSet(SmallVec<[Modifier; 4]>);

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from any modifier sequence, canonicalizing as it goes.
    pub fn from_modifiers(modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        let mut inner: SmallVec<[Modifier; 4]> = modifiers.into_iter().collect();
        inner.sort_by_key(|m| format::canonical_rank(*m));
        inner.dedup();
        Self(inner)
    }

    /// Insert one modifier, preserving canonical order. No-op if present.
    pub fn insert(&mut self, modifier: Modifier) {
        let rank = format::canonical_rank(modifier);
        match self.0.binary_search_by_key(&rank, |m| format::canonical_rank(*m)) {
            Ok(_) => {}
            Err(index) => self.0.insert(index, modifier),
        }
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Modifier] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<Modifier> {
        self.0.to_vec()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for modifier in self.iter() {
            if !first {
                f.write_str("+")?;
            }
            f.write_str(modifier.token())?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for ModifierSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

// Deserialization re-canonicalizes, so stored sets from older versions or
// hand-edited settings never violate the ordering invariant.
impl<'de> Deserialize<'de> for ModifierSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let modifiers = Vec::<Modifier>::deserialize(deserializer)?;
        Ok(Self::from_modifiers(modifiers))
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        Self::from_modifiers(iter)
    }
}

/// Platform enum for display formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacOS
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(target_os = "linux")]
        {
            Platform::Linux
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            Platform::Linux
        }
    }
}

/// The field's current captured combination.
///
/// `key` is an opaque platform key code (`"KeyA"`, `"F12"`); unrecognized
/// codes are carried through untouched, never rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureState {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub modifiers: ModifierSet,
}

impl CaptureState {
    pub fn new(key: Option<&str>, modifiers: &[Modifier]) -> Self {
        Self {
            key: key.map(str::to_owned),
            modifiers: ModifierSet::from_modifiers(modifiers.iter().copied()),
        }
    }

    /// True when no key and no modifiers are captured.
    pub fn is_empty(&self) -> bool {
        self.key.is_none() && self.modifiers.is_empty()
    }

    /// Parse a config-string form such as `"control+shift+KeyA"`.
    ///
    /// Tokens are separated by `+` or whitespace. Modifier tokens accept the
    /// usual aliases (`ctrl`, `cmd`, `opt`, ...); the first non-modifier
    /// token becomes the key, case preserved. A second non-modifier token is
    /// an error. A modifiers-only string is valid (no primary key yet).
    pub fn parse(s: &str) -> Result<Self, HotkeyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(HotkeyParseError::Empty);
        }

        let normalized = s.replace('+', " ");
        let mut modifiers = ModifierSet::new();
        let mut key: Option<String> = None;

        for part in normalized.split_whitespace() {
            match modifier_from_token(part) {
                Some(modifier) => modifiers.insert(modifier),
                None => {
                    if key.is_some() {
                        return Err(HotkeyParseError::UnknownToken(part.to_string()));
                    }
                    key = Some(part.to_string());
                }
            }
        }

        Ok(Self { key, modifiers })
    }

    /// Canonical config-string form, the inverse of [`CaptureState::parse`].
    pub fn to_canonical_string(&self) -> String {
        let mut parts: Vec<&str> = self.modifiers.as_slice().iter().map(|m| m.token()).collect();
        if let Some(ref key) = self.key {
            parts.push(key.as_str());
        }
        parts.join("+")
    }

    /// Human-readable form for the given platform.
    pub fn display(&self, platform: Platform) -> String {
        format::display_string(self.key.as_deref(), &self.modifiers, platform)
    }
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(Platform::current()))
    }
}

fn modifier_from_token(token: &str) -> Option<Modifier> {
    let token_lower = token.to_lowercase();
    let modifier = match token_lower.as_str() {
        "control" | "ctrl" | "ctl" | "^" => Modifier::Control,
        "alt" | "opt" | "option" | "⌥" => Modifier::Alt,
        "shift" | "shft" | "⇧" => Modifier::Shift,
        "meta" | "cmd" | "command" | "super" | "win" | "⌘" => Modifier::Meta,
        "leftbutton" | "mouse1" => Modifier::LeftButton,
        "rightbutton" | "mouse2" => Modifier::RightButton,
        "middlebutton" | "mouse3" => Modifier::MiddleButton,
        "backbutton" | "mouse4" => Modifier::BackButton,
        "forwardbutton" | "mouse5" => Modifier::ForwardButton,
        _ => return None,
    };
    Some(modifier)
}
