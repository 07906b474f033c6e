//! Character classes of the [RFC3986] grammar.
//!
//! [RFC3986]: <https://datatracker.ietf.org/doc/html/rfc3986#appendix-A>

/// Generate a `const fn(u8) -> bool` backed by a 256 entries lookup table.
///
/// The table is computed at compile time by evaluating the given expression for every byte.
macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

// ===== Blocks =====

/// ALPHA = %x41-5A / %x61-7A
#[inline(always)]
pub const fn is_alpha(byte: u8) -> bool {
    matches!(byte, b'a'..=b'z' | b'A'..=b'Z')
}

/// DIGIT = %x30-39
#[inline(always)]
pub const fn is_digit(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9')
}

/// HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"
///
/// Lowercase is accepted here, it is used for the IPvFuture version which is not decoded.
#[inline(always)]
pub const fn is_hexdig(byte: u8) -> bool {
    is_digit(byte) || matches!(byte, b'a'..=b'f' | b'A'..=b'F')
}

/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
#[inline(always)]
const fn unreserved(byte: u8) -> bool {
    is_alpha(byte) || is_digit(byte) || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///            / "*" / "+" / "," / ";" / "="
#[inline(always)]
const fn sub_delims(byte: u8) -> bool {
    matches!(
        byte,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// Value of an escape digit.
///
/// Only uppercase hex is a valid escape digit.
#[inline]
pub const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

// ===== lookup table =====

byte_map! {
    /// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
    ///
    /// Matches the characters after the first one.
    #[inline(always)]
    pub const fn is_scheme(byte: u8) {
        is_alpha(byte) || is_digit(byte) || matches!(byte, b'+' | b'-' | b'.')
    }
}

byte_map! {
    /// userinfo = *( unreserved / pct-encoded / sub-delims / ":" )
    #[inline(always)]
    pub const fn is_userinfo(byte: u8) {
        unreserved(byte) || sub_delims(byte) || matches!(byte, b':')
    }
}

byte_map! {
    /// reg-name = *( unreserved / pct-encoded / sub-delims )
    ///
    /// ":" is not part of it, in a host it always starts the port.
    #[inline(always)]
    pub const fn is_regname(byte: u8) {
        unreserved(byte) || sub_delims(byte)
    }
}

byte_map! {
    /// IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )
    ///
    /// Matches the characters after the ".".
    #[inline(always)]
    pub const fn is_ipvfuture(byte: u8) {
        unreserved(byte) || sub_delims(byte) || matches!(byte, b':')
    }
}

byte_map! {
    /// segment = *pchar
    /// pchar   = unreserved / pct-encoded / sub-delims / ":" / "@"
    #[inline(always)]
    pub const fn is_pchar(byte: u8) {
        unreserved(byte) || sub_delims(byte) || matches!(byte, b':' | b'@')
    }
}

byte_map! {
    /// query    = *( pchar / "/" / "?" )
    /// fragment = *( pchar / "/" / "?" )
    #[inline(always)]
    pub const fn is_query(byte: u8) {
        is_pchar(byte) || matches!(byte, b'/' | b'?')
    }
}

/// Named set of characters allowed unescaped in a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    UserInfo,
    RegName,
    Segment,
    Query,
}

impl CharClass {
    /// Returns `true` if `byte` is a member of the class.
    #[inline]
    pub const fn contains(self, byte: u8) -> bool {
        match self {
            Self::UserInfo => is_userinfo(byte),
            Self::RegName => is_regname(byte),
            Self::Segment => is_pchar(byte),
            Self::Query => is_query(byte),
        }
    }
}

#[test]
fn test_char_class() {
    for byte in b'0'..=b'9' {
        assert!(CharClass::RegName.contains(byte));
    }
    assert!(CharClass::RegName.contains(b'~'));
    assert!(CharClass::RegName.contains(b'='));
    assert!(!CharClass::RegName.contains(b':'));
    assert!(!CharClass::RegName.contains(b'@'));

    assert!(CharClass::UserInfo.contains(b':'));
    assert!(!CharClass::UserInfo.contains(b'@'));

    assert!(CharClass::Segment.contains(b':'));
    assert!(CharClass::Segment.contains(b'@'));
    assert!(!CharClass::Segment.contains(b'/'));
    assert!(!CharClass::Segment.contains(b'?'));

    assert!(CharClass::Query.contains(b'/'));
    assert!(CharClass::Query.contains(b'?'));
    assert!(!CharClass::Query.contains(b'#'));

    for class in [CharClass::UserInfo, CharClass::RegName, CharClass::Segment, CharClass::Query] {
        for byte in [b'%', b'[', b']', b' ', b'"', b'<', b'>', b'\\', b'^', b'`', b'{', b'|', b'}'] {
            assert!(!class.contains(byte), "{class:?} contains {:?}", byte as char);
        }
        for byte in 128..=255 {
            assert!(!class.contains(byte));
        }
    }
}

#[test]
fn test_hex_value() {
    assert_eq!(hex_value(b'0'), Some(0));
    assert_eq!(hex_value(b'9'), Some(9));
    assert_eq!(hex_value(b'A'), Some(10));
    assert_eq!(hex_value(b'F'), Some(15));
    assert_eq!(hex_value(b'a'), None);
    assert_eq!(hex_value(b'G'), None);
    assert_eq!(hex_value(b'%'), None);
}
