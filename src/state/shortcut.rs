use crate::config::ZoomConfig;
use crate::model::KeyInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyIntent {
    Escape,
    Shortcut,
    Ignore,
}

/// Escape wins regardless of modifiers or prior handling; the shortcut is
/// Shift + the configured letter with no other modifier, skipped if already
/// handled upstream.
pub fn classify_key(input: &KeyInput, config: &ZoomConfig) -> KeyIntent {
    if input.key == "Escape" {
        return KeyIntent::Escape;
    }
    if input.default_prevented {
        return KeyIntent::Ignore;
    }
    if !input.shift || input.ctrl || input.alt || input.meta {
        return KeyIntent::Ignore;
    }
    let letter = config.shortcut_key;
    let mut key = input.key.chars();
    let key_matches =
        matches!((key.next(), key.next()), (Some(c), None) if c.eq_ignore_ascii_case(&letter));
    if input.code == config.shortcut_code() || key_matches {
        KeyIntent::Shortcut
    } else {
        KeyIntent::Ignore
    }
}
