use std::str::FromStr;

use bytes::Bytes;

use super::{Component, MalformedUri, Uri, authority::{self, Authority}, decode::decode, path, scheme};
use crate::{ByteStr, log::{debug, trace}, matches::CharClass};

/// Parse URI from `str`.
///
/// # Errors
///
/// Returns [`Err`] if the input is not a valid URI.
///
/// # Examples
///
/// ```
/// let uri = generic_uri::parse("urn:hello,%20w%6Frld").unwrap();
/// assert_eq!(uri.scheme(), "urn");
/// assert_eq!(uri.path(), ["hello, world"]);
///
/// assert!(generic_uri::parse("http://example.com:65536/").is_err());
/// ```
#[inline]
pub fn parse(input: &str) -> Result<Uri, MalformedUri> {
    Uri::parse(input)
}

impl Uri {
    /// Parse URI by copying from slice.
    ///
    /// If the input is owned [`Bytes`], consider using [`Uri::parse_from`].
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not a valid URI.
    #[inline]
    pub fn parse<A: AsRef<[u8]>>(bytes: A) -> Result<Self, MalformedUri> {
        parse_uri(Bytes::copy_from_slice(bytes.as_ref()))
    }

    /// Parse URI from [`Bytes`].
    ///
    /// Components that contain no percent escape share the input buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not a valid URI.
    #[inline]
    pub fn parse_from<B: Into<Bytes>>(bytes: B) -> Result<Self, MalformedUri> {
        parse_uri(bytes.into())
    }

    /// Parse URI into existing value.
    ///
    /// On success, every component is replaced, including the one absent in the new input. On
    /// error, `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not a valid URI.
    pub fn reparse<A: AsRef<[u8]>>(&mut self, bytes: A) -> Result<(), MalformedUri> {
        *self = Self::parse(bytes)?;
        Ok(())
    }
}

impl FromStr for Uri {
    type Err = MalformedUri;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = MalformedUri;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uri::parse(value)
    }
}

impl TryFrom<Bytes> for Uri {
    type Error = MalformedUri;

    #[inline]
    fn try_from(value: Bytes) -> Result<Self, Self::Error> {
        Uri::parse_from(value)
    }
}

// ===== Logic =====

fn parse_uri(value: Bytes) -> Result<Uri, MalformedUri> {
    match split(&value) {
        Ok(uri) => {
            trace!("parsed {value:?} as {uri:?}");
            Ok(uri)
        }
        Err(err) => {
            debug!("rejected {value:?}: {err}");
            Err(err)
        }
    }
}

#[inline]
fn find(bytes: &[u8], delim: u8) -> Option<usize> {
    bytes.iter().position(|&byte| byte == delim)
}

/// Split and decode all components.
///
/// ```not_rust
/// URI-reference = [ scheme ":" ] [ "//" authority ] path [ "?" query ] [ "#" fragment ]
/// ```
fn split(value: &Bytes) -> Result<Uri, MalformedUri> {
    let bytes = value.as_ref();
    let len = bytes.len();

    // a ':' after the first '/' is in the authority or the path
    let bound = find(bytes, b'/').unwrap_or(len);

    let (scheme, rest) = match find(&bytes[..bound], b':') {
        Some(colon) => {
            if !scheme::is_legal(&bytes[..colon]) {
                return Err(Component::Scheme.into());
            }
            // SAFETY: legal scheme is ASCII
            let scheme = unsafe { ByteStr::from_utf8_unchecked(value.slice(..colon)) };
            (scheme, colon + 1)
        }
        None => (ByteStr::new(), 0),
    };

    // query and fragment delimiter are located before any decoding
    let delim = match bytes[rest..].iter().position(|byte| matches!(byte, b'?' | b'#')) {
        Some(at) => rest + at,
        None => len,
    };

    let mut path_start = rest;

    let Authority { userinfo, host, port } = match &bytes[rest..delim] {
        [b'/', b'/', ..] => {
            let start = rest + 2;
            let end = match find(&bytes[start..delim], b'/') {
                Some(at) => start + at,
                None => delim,
            };
            path_start = end;
            authority::parse(value.slice(start..end))?
        }
        _ => Authority::default(),
    };

    let path = path::parse(value.slice(path_start..delim))?;

    let (query_end, fragment_start) = match find(&bytes[delim..], b'#') {
        Some(at) => (delim + at, delim + at + 1),
        None => (len, len),
    };

    let query_start = match &bytes[delim..query_end] {
        [b'?', ..] => delim + 1,
        _ => delim,
    };

    let query = decode(value.slice(query_start..query_end), CharClass::Query)
        .ok_or(Component::Query)?;
    let fragment = decode(value.slice(fragment_start..len), CharClass::Query)
        .ok_or(Component::Fragment)?;

    Ok(Uri {
        scheme,
        userinfo,
        host,
        port,
        path,
        query,
        fragment,
    })
}
