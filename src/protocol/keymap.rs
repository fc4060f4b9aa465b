//! Key code to character decoding
//!
//! A fixed US-layout table over the evdev key codes the X.Org server reports.
//! We never fetch the server's keyboard mapping; the table is the mapping.

use super::types::{modifier_mask, Keycode};

/// Key code of the BackSpace key
pub const BACKSPACE: Keycode = Keycode(22);

/// `(keycode, plain, shifted)`
const KEY_TABLE: &[(u8, u8, u8)] = &[
    (10, b'1', b'!'),
    (11, b'2', b'@'),
    (12, b'3', b'#'),
    (13, b'4', b'$'),
    (14, b'5', b'%'),
    (15, b'6', b'^'),
    (16, b'7', b'&'),
    (17, b'8', b'*'),
    (18, b'9', b'('),
    (19, b'0', b')'),
    (20, b'-', b'_'),
    (21, b'=', b'+'),
    (24, b'q', b'Q'),
    (25, b'w', b'W'),
    (26, b'e', b'E'),
    (27, b'r', b'R'),
    (28, b't', b'T'),
    (29, b'y', b'Y'),
    (30, b'u', b'U'),
    (31, b'i', b'I'),
    (32, b'o', b'O'),
    (33, b'p', b'P'),
    (34, b'[', b'{'),
    (35, b']', b'}'),
    (38, b'a', b'A'),
    (39, b's', b'S'),
    (40, b'd', b'D'),
    (41, b'f', b'F'),
    (42, b'g', b'G'),
    (43, b'h', b'H'),
    (44, b'j', b'J'),
    (45, b'k', b'K'),
    (46, b'l', b'L'),
    (47, b';', b':'),
    (48, b'\'', b'"'),
    (49, b'`', b'~'),
    (51, b'\\', b'|'),
    (52, b'z', b'Z'),
    (53, b'x', b'X'),
    (54, b'c', b'C'),
    (55, b'v', b'V'),
    (56, b'b', b'B'),
    (57, b'n', b'N'),
    (58, b'm', b'M'),
    (59, b',', b'<'),
    (60, b'.', b'>'),
    (61, b'/', b'?'),
    (65, b' ', b' '),
];

/// Map a key code and modifier state to a printable ASCII character.
///
/// Only the bare key and Shift are defined; any other modifier state
/// (Control, Lock, NumLock, ...) yields `None`.
pub fn key_to_char(keycode: Keycode, state: u16) -> Option<u8> {
    let shifted = match state {
        0 => false,
        modifier_mask::SHIFT => true,
        _ => return None,
    };

    KEY_TABLE
        .iter()
        .find(|(code, _, _)| *code == keycode.get())
        .map(|&(_, plain, upper)| if shifted { upper } else { plain })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_shifted_letters() {
        assert_eq!(key_to_char(Keycode::new(38), 0), Some(b'a'));
        assert_eq!(key_to_char(Keycode::new(38), modifier_mask::SHIFT), Some(b'A'));
        assert_eq!(key_to_char(Keycode::new(10), modifier_mask::SHIFT), Some(b'!'));
        assert_eq!(key_to_char(Keycode::new(65), 0), Some(b' '));
    }

    #[test]
    fn test_other_modifiers_yield_nothing() {
        assert_eq!(key_to_char(Keycode::new(38), modifier_mask::CONTROL), None);
        assert_eq!(key_to_char(Keycode::new(38), modifier_mask::LOCK), None);
        assert_eq!(
            key_to_char(Keycode::new(38), modifier_mask::SHIFT | modifier_mask::MOD2),
            None
        );
    }

    #[test]
    fn test_unmapped_codes() {
        assert_eq!(key_to_char(BACKSPACE, 0), None);
        assert_eq!(key_to_char(Keycode::new(9), 0), None); // Escape
        assert_eq!(key_to_char(Keycode::new(200), 0), None);
    }

    #[test]
    fn test_table_is_printable_ascii() {
        for &(_, plain, upper) in KEY_TABLE {
            assert!((0x20..0x7f).contains(&plain));
            assert!((0x20..0x7f).contains(&upper));
        }
    }
}
