use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ---------------------------------------------------------------------------
// Kitty keyboard protocol normalizer

/// Map a base key to its US-layout shifted symbol.
/// Returns None if the key is not a shiftable symbol (or is already shifted).
pub(super) fn shift_symbol(c: char) -> Option<char> {
    match c {
        '`' => Some('~'),
        '1' => Some('!'),
        '2' => Some('@'),
        '3' => Some('#'),
        '4' => Some('$'),
        '5' => Some('%'),
        '6' => Some('^'),
        '7' => Some('&'),
        '8' => Some('*'),
        '9' => Some('('),
        '0' => Some(')'),
        '-' => Some('_'),
        '=' => Some('+'),
        '[' => Some('{'),
        ']' => Some('}'),
        '\\' => Some('|'),
        ';' => Some(':'),
        '\'' => Some('"'),
        ',' => Some('<'),
        '.' => Some('>'),
        '/' => Some('?'),
        _ => None,
    }
}

/// Normalize key events from terminals using the kitty keyboard protocol.
///
/// Kitty sends `Char(lowercase) + SHIFT` instead of `Char(UPPERCASE) + SHIFT`,
/// and `Char(base_symbol) + SHIFT` instead of `Char(shifted_symbol)`.
/// Traditional terminals already send the shifted character, so this is a no-op there.
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
    {
        if c.is_ascii_lowercase() {
            key.code = KeyCode::Char(c.to_ascii_uppercase());
        } else if let Some(shifted) = shift_symbol(c) {
            key.code = KeyCode::Char(shifted);
            key.modifiers.remove(KeyModifiers::SHIFT);
        }
    }
    key
}

/// Plain character typed without Ctrl or Alt
pub(super) fn plain_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}
