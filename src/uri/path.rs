use bytes::Bytes;

use super::{Component, MalformedUri, decode::decode};
use crate::{ByteStr, matches::CharClass};

/// Split path into decoded segments.
///
/// - empty path have no segment
/// - `/` have a single empty segment, it is an absolute empty path
/// - otherwise, each `/` separate two segments, which may be empty
pub(crate) fn parse(raw: Bytes) -> Result<Vec<ByteStr>, MalformedUri> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    if raw.as_ref() == b"/" {
        return Ok(vec![ByteStr::new()]);
    }

    let mut segments = Vec::with_capacity(raw.iter().filter(|&&byte| byte == b'/').count() + 1);
    let mut rest = raw;

    while let Some(slash) = rest.iter().position(|&byte| byte == b'/') {
        segments.push(segment(rest.slice(..slash))?);
        rest = rest.slice(slash + 1..);
    }
    segments.push(segment(rest)?);

    Ok(segments)
}

#[inline]
fn segment(raw: Bytes) -> Result<ByteStr, MalformedUri> {
    decode(raw, CharClass::Segment).ok_or(Component::Path.into())
}

#[cfg(test)]
mod test {
    use super::*;

    fn path(raw: &'static str) -> Result<Vec<ByteStr>, MalformedUri> {
        parse(Bytes::from_static(raw.as_bytes()))
    }

    #[test]
    fn test_path() {
        assert!(path("").unwrap().is_empty());
        assert_eq!(path("/").unwrap(), [""]);
        assert_eq!(path("/foo").unwrap(), ["", "foo"]);
        assert_eq!(path("foo/").unwrap(), ["foo", ""]);
        assert_eq!(path("foo/bar").unwrap(), ["foo", "bar"]);
        assert_eq!(path("/foo/bar/").unwrap(), ["", "foo", "bar", ""]);
        assert_eq!(path("//").unwrap(), ["", "", ""]);
        assert_eq!(path("a//b").unwrap(), ["a", "", "b"]);
        assert_eq!(path("book:fantasy:Hobbit").unwrap(), ["book:fantasy:Hobbit"]);
        assert_eq!(path("John.Doe@example.com").unwrap(), ["John.Doe@example.com"]);
        assert_eq!(path("/a%2Fb/c%20d").unwrap(), ["", "a/b", "c d"]);
    }

    #[test]
    fn test_path_error() {
        for raw in ["/[", "/a/]", "/a b", "/%X", "/%4", "/%", "/%2f", "a\"b", "a<b>", "/a/\u{e9}"] {
            let err = path(raw).unwrap_err();
            assert_eq!(err.component(), Component::Path, "{raw:?}");
        }
    }
}
