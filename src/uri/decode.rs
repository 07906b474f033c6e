use bytes::{BufMut, Bytes, BytesMut};

use super::pct::PercentDecoder;
use crate::{ByteStr, matches::CharClass};

enum Mode {
    Literal,
    Escaping(PercentDecoder),
}

/// Percent-decode a raw component, rejecting any literal character outside `class`.
///
/// If `raw` contains no escape, the returned value shares its buffer.
///
/// Returns [`None`] on illegal character, invalid or truncated escape, or if the decoded octets
/// are not valid UTF-8.
pub(crate) fn decode(raw: Bytes, class: CharClass) -> Option<ByteStr> {
    // allocated on the first escape
    let mut decoded: Option<BytesMut> = None;
    let mut mode = Mode::Literal;

    for (i, &byte) in raw.iter().enumerate() {
        mode = match mode {
            Mode::Literal if byte == b'%' => {
                if decoded.is_none() {
                    let mut buf = BytesMut::with_capacity(raw.len());
                    buf.put_slice(&raw[..i]);
                    decoded = Some(buf);
                }
                Mode::Escaping(PercentDecoder::new())
            }
            Mode::Literal if class.contains(byte) => {
                if let Some(buf) = &mut decoded {
                    buf.put_u8(byte);
                }
                Mode::Literal
            }
            Mode::Literal => return None,
            Mode::Escaping(mut pct) => {
                pct.feed(byte).ok()?;
                match pct.decoded() {
                    Some(octet) => {
                        if let Some(buf) = &mut decoded {
                            buf.put_u8(octet);
                        }
                        Mode::Literal
                    }
                    None => Mode::Escaping(pct),
                }
            }
        };
    }

    if let Mode::Escaping(_) = mode {
        return None;
    }

    match decoded {
        Some(buf) => ByteStr::from_bytes(buf.freeze()).ok(),
        // SAFETY: every literal character class is ASCII
        None => Some(unsafe { ByteStr::from_utf8_unchecked(raw) }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn decode_str(raw: &'static str, class: CharClass) -> Option<ByteStr> {
        decode(Bytes::from_static(raw.as_bytes()), class)
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode_str("", CharClass::Segment).unwrap(), "");
        assert_eq!(decode_str("over", CharClass::Segment).unwrap(), "over");
        assert_eq!(decode_str("hello,%20w%6Frld", CharClass::Segment).unwrap(), "hello, world");
        assert_eq!(decode_str("%41%42%43", CharClass::Segment).unwrap(), "ABC");
        assert_eq!(decode_str("a%2Fb", CharClass::Segment).unwrap(), "a/b");
        assert_eq!(decode_str("%C3%A9t%C3%A9", CharClass::Query).unwrap(), "été");

        // punctuation allowed per component
        assert!(decode_str("user:pass", CharClass::UserInfo).is_some());
        assert!(decode_str("user@host", CharClass::UserInfo).is_none());
        assert!(decode_str("a:b@c", CharClass::Segment).is_some());
        assert!(decode_str("a/b", CharClass::Segment).is_none());
        assert!(decode_str("a/b?c", CharClass::Query).is_some());
        assert!(decode_str("a#b", CharClass::Query).is_none());
        assert!(decode_str("host:80", CharClass::RegName).is_none());

        // brackets are never literal
        assert!(decode_str("[", CharClass::Segment).is_none());
        assert!(decode_str("a]", CharClass::Query).is_none());

        // invalid escape
        assert!(decode_str("%X", CharClass::Segment).is_none());
        assert!(decode_str("%6f", CharClass::Segment).is_none());
        assert!(decode_str("%", CharClass::Segment).is_none());
        assert!(decode_str("a%4", CharClass::Query).is_none());

        // decoded octets must form UTF-8
        assert!(decode_str("%FF", CharClass::Query).is_none());
    }

    #[test]
    fn test_decode_shares_buffer() {
        let raw = Bytes::from_static(b"segment");
        let ptr = raw.as_ptr();
        let decoded = decode(raw, CharClass::Segment).unwrap();
        assert_eq!(decoded.as_ptr(), ptr);
    }
}
