//! Pure key-to-string translation
//!
//! Maps a key code plus the modifier state sampled at press time to the
//! text it should contribute to the output stream. Stateless and
//! non-blocking, so it is safe on a latency-sensitive hook callback path.

use crate::keys::KeyCode;

/// Shifted digit-row symbols indexed by digit value, so `D0` maps to `)`
/// and `D9` to `(`.
const SHIFTED_DIGIT_ROW: &[u8; 10] = b")!@#$%^&*(";

/// Translate a newly pressed key into its output text.
///
/// `None` means the key produces no output (bare modifiers and lock
/// keys). Non-printable keys yield bracketed tokens such as
/// `[BACKSPACE]`; anything without an explicit mapping falls back to a
/// token built from the key's symbolic name, e.g. `[F5]`.
///
/// Classification runs in priority order: modifier/lock suppression,
/// named tokens, numpad, letters, the digit row, punctuation pairs, then
/// the fallback token.
pub fn translate(code: KeyCode, shift: bool, caps_lock: bool) -> Option<String> {
    if code.is_modifier() || code.is_lock() {
        return None;
    }

    // Caps lock and shift each invert letter case; both at once cancel
    // back to lowercase. Applies to letters only.
    let upper = caps_lock ^ shift;

    if let Some(token) = named_token(code) {
        return Some(token.to_string());
    }

    if let Some(glyph) = numpad_glyph(code) {
        return Some(glyph.to_string());
    }

    if let Some(letter) = letter(code) {
        let glyph = if upper {
            letter.to_ascii_uppercase()
        } else {
            letter
        };
        return Some(glyph.to_string());
    }

    if let Some(digit) = digit_row_value(code) {
        // The digit row follows shift alone; caps lock never affects it.
        let glyph = if shift {
            SHIFTED_DIGIT_ROW[digit as usize] as char
        } else {
            (b'0' + digit) as char
        };
        return Some(glyph.to_string());
    }

    if let Some((plain, shifted)) = punctuation_pair(code) {
        let glyph = if shift { shifted } else { plain };
        return Some(glyph.to_string());
    }

    Some(format!("[{code:?}]"))
}

/// Fixed tokens for named non-printable keys. Enter carries a trailing
/// newline so it also terminates the logical line in the output stream.
fn named_token(code: KeyCode) -> Option<&'static str> {
    let token = match code {
        KeyCode::Enter => "[ENTER]\n",
        KeyCode::Space => " ",
        KeyCode::Backspace => "[BACKSPACE]",
        KeyCode::Tab => "[TAB]",
        KeyCode::Escape => "[ESC]",
        KeyCode::Delete => "[DELETE]",
        KeyCode::Insert => "[INSERT]",
        KeyCode::Home => "[HOME]",
        KeyCode::End => "[END]",
        KeyCode::PageUp => "[PAGEUP]",
        KeyCode::PageDown => "[PAGEDOWN]",
        KeyCode::Left => "[LEFT]",
        KeyCode::Right => "[RIGHT]",
        KeyCode::Up => "[UP]",
        KeyCode::Down => "[DOWN]",
        _ => return None,
    };
    Some(token)
}

/// Numpad keys emit the same glyph under every modifier state.
fn numpad_glyph(code: KeyCode) -> Option<char> {
    let glyph = match code {
        KeyCode::Numpad0 => '0',
        KeyCode::Numpad1 => '1',
        KeyCode::Numpad2 => '2',
        KeyCode::Numpad3 => '3',
        KeyCode::Numpad4 => '4',
        KeyCode::Numpad5 => '5',
        KeyCode::Numpad6 => '6',
        KeyCode::Numpad7 => '7',
        KeyCode::Numpad8 => '8',
        KeyCode::Numpad9 => '9',
        KeyCode::NumpadMultiply => '*',
        KeyCode::NumpadAdd => '+',
        KeyCode::NumpadSubtract => '-',
        KeyCode::NumpadDecimal => '.',
        KeyCode::NumpadDivide => '/',
        _ => return None,
    };
    Some(glyph)
}

/// Lowercase base glyph for letter keys.
fn letter(code: KeyCode) -> Option<char> {
    let glyph = match code {
        KeyCode::A => 'a',
        KeyCode::B => 'b',
        KeyCode::C => 'c',
        KeyCode::D => 'd',
        KeyCode::E => 'e',
        KeyCode::F => 'f',
        KeyCode::G => 'g',
        KeyCode::H => 'h',
        KeyCode::I => 'i',
        KeyCode::J => 'j',
        KeyCode::K => 'k',
        KeyCode::L => 'l',
        KeyCode::M => 'm',
        KeyCode::N => 'n',
        KeyCode::O => 'o',
        KeyCode::P => 'p',
        KeyCode::Q => 'q',
        KeyCode::R => 'r',
        KeyCode::S => 's',
        KeyCode::T => 't',
        KeyCode::U => 'u',
        KeyCode::V => 'v',
        KeyCode::W => 'w',
        KeyCode::X => 'x',
        KeyCode::Y => 'y',
        KeyCode::Z => 'z',
        _ => return None,
    };
    Some(glyph)
}

/// Numeric value of a top-row digit key.
fn digit_row_value(code: KeyCode) -> Option<u8> {
    let value = match code {
        KeyCode::D0 => 0,
        KeyCode::D1 => 1,
        KeyCode::D2 => 2,
        KeyCode::D3 => 3,
        KeyCode::D4 => 4,
        KeyCode::D5 => 5,
        KeyCode::D6 => 6,
        KeyCode::D7 => 7,
        KeyCode::D8 => 8,
        KeyCode::D9 => 9,
        _ => return None,
    };
    Some(value)
}

/// (unshifted, shifted) glyph pairs for punctuation keys. Selected by
/// shift alone, never the caps-lock XOR.
fn punctuation_pair(code: KeyCode) -> Option<(char, char)> {
    let pair = match code {
        KeyCode::OemComma => (',', '<'),
        KeyCode::OemPeriod => ('.', '>'),
        KeyCode::OemQuestion => ('/', '?'),
        KeyCode::OemSemicolon => (';', ':'),
        KeyCode::OemQuotes => ('\'', '"'),
        KeyCode::OemOpenBrackets => ('[', '{'),
        KeyCode::OemCloseBrackets => (']', '}'),
        KeyCode::OemPipe => ('\\', '|'),
        KeyCode::OemMinus => ('-', '_'),
        KeyCode::OemPlus => ('=', '+'),
        KeyCode::OemTilde => ('`', '~'),
        _ => return None,
    };
    Some(pair)
}
