//! Unit tests for capture value types: parsing, canonical ordering, and
//! display formatting.

use super::*;

// --- Parsing ---

#[test]
fn test_parse_basic_combo() {
    let state = CaptureState::parse("control+shift+KeyA").unwrap();
    assert_eq!(state.key.as_deref(), Some("KeyA"));
    assert_eq!(
        state.modifiers.as_slice(),
        &[Modifier::Control, Modifier::Shift]
    );
}

#[test]
fn test_parse_accepts_aliases_and_whitespace() {
    let state = CaptureState::parse("cmd shift KeyK").unwrap();
    assert!(state.modifiers.contains(Modifier::Meta));
    assert!(state.modifiers.contains(Modifier::Shift));
    assert_eq!(state.key.as_deref(), Some("KeyK"));

    let state = CaptureState::parse("ctrl+opt+F5").unwrap();
    assert_eq!(
        state.modifiers.as_slice(),
        &[Modifier::Control, Modifier::Alt]
    );
    assert_eq!(state.key.as_deref(), Some("F5"));
}

#[test]
fn test_parse_modifiers_only_is_valid() {
    let state = CaptureState::parse("control+rightbutton").unwrap();
    assert_eq!(state.key, None);
    assert_eq!(
        state.modifiers.as_slice(),
        &[Modifier::Control, Modifier::RightButton]
    );
}

#[test]
fn test_parse_preserves_key_case() {
    // Key codes are opaque tokens; parsing must not normalize their case.
    let state = CaptureState::parse("shift+KeyZ").unwrap();
    assert_eq!(state.key.as_deref(), Some("KeyZ"));
}

#[test]
fn test_parse_empty_is_error() {
    assert_eq!(CaptureState::parse(""), Err(HotkeyParseError::Empty));
    assert_eq!(CaptureState::parse("   "), Err(HotkeyParseError::Empty));
}

#[test]
fn test_parse_second_key_is_error() {
    assert_eq!(
        CaptureState::parse("control+KeyA+KeyB"),
        Err(HotkeyParseError::UnknownToken("KeyB".to_string()))
    );
}

#[test]
fn test_parse_canonicalizes_arrival_order() {
    let a = CaptureState::parse("shift+control+KeyA").unwrap();
    let b = CaptureState::parse("control+shift+KeyA").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_canonical_string(), "control+shift+KeyA");
}

#[test]
fn test_canonical_string_round_trip() {
    let state = CaptureState::new(
        Some("KeyP"),
        &[Modifier::Meta, Modifier::Alt, Modifier::RightButton],
    );
    let reparsed = CaptureState::parse(&state.to_canonical_string()).unwrap();
    assert_eq!(reparsed, state);
}

// --- ModifierSet invariants ---

#[test]
fn test_modifier_set_order_is_content_function() {
    let permutations: [&[Modifier]; 3] = [
        &[Modifier::Meta, Modifier::Control, Modifier::Shift],
        &[Modifier::Shift, Modifier::Meta, Modifier::Control],
        &[Modifier::Control, Modifier::Shift, Modifier::Meta],
    ];
    for permutation in permutations {
        let set = ModifierSet::from_modifiers(permutation.iter().copied());
        assert_eq!(
            set.as_slice(),
            &[Modifier::Control, Modifier::Shift, Modifier::Meta]
        );
    }
}

#[test]
fn test_modifier_set_deduplicates() {
    let set = ModifierSet::from_modifiers([
        Modifier::Control,
        Modifier::Control,
        Modifier::Alt,
        Modifier::Control,
    ]);
    assert_eq!(set.as_slice(), &[Modifier::Control, Modifier::Alt]);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_modifier_set_insert_keeps_canonical_position() {
    let mut set = ModifierSet::from_modifiers([Modifier::Control, Modifier::Meta]);
    set.insert(Modifier::Alt);
    assert_eq!(
        set.as_slice(),
        &[Modifier::Control, Modifier::Alt, Modifier::Meta]
    );
    // Inserting an existing member is a no-op
    set.insert(Modifier::Alt);
    assert_eq!(set.len(), 3);
}

#[test]
fn test_modifier_set_display_uses_tokens() {
    let set = ModifierSet::from_modifiers([Modifier::Shift, Modifier::Control]);
    assert_eq!(set.to_string(), "control+shift");
    assert_eq!(ModifierSet::new().to_string(), "");
}

// --- CaptureState ---

#[test]
fn test_capture_state_is_empty() {
    assert!(CaptureState::default().is_empty());
    assert!(!CaptureState::new(Some("KeyA"), &[]).is_empty());
    assert!(!CaptureState::new(None, &[Modifier::Shift]).is_empty());
}

#[test]
fn test_capture_state_display_per_platform() {
    let state = CaptureState::new(Some("KeyK"), &[Modifier::Control, Modifier::Shift]);
    assert_eq!(state.display(Platform::MacOS), "⌃⇧K");
    assert_eq!(state.display(Platform::Linux), "Ctrl+Shift+K");
}

// --- Serde ---

#[test]
fn test_modifier_serializes_as_lowercase_token() {
    assert_eq!(
        serde_json::to_value(Modifier::LeftButton).unwrap(),
        serde_json::json!("leftbutton")
    );
    assert_eq!(
        serde_json::to_value(Modifier::Control).unwrap(),
        serde_json::json!("control")
    );
}

#[test]
fn test_modifier_set_deserialization_recanonicalizes() {
    // Hand-edited settings may hold duplicates in arbitrary order
    let set: ModifierSet = serde_json::from_str(r#"["meta","control","control"]"#).unwrap();
    assert_eq!(set.as_slice(), &[Modifier::Control, Modifier::Meta]);
}
