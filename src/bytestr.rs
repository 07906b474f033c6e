use std::{ops::Deref, str::Utf8Error};

use bytes::Bytes;

/// str based on [`Bytes`].
///
/// Cloning and slicing share the underlying buffer.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteStr(Bytes);

impl ByteStr {
    /// Create new empty `ByteStr`.
    #[inline]
    pub const fn new() -> Self {
        Self(Bytes::new())
    }

    /// Create `ByteStr` from static str.
    #[inline]
    pub const fn from_static(string: &'static str) -> Self {
        Self(Bytes::from_static(string.as_bytes()))
    }

    /// Create `ByteStr` from [`Bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if `bytes` is not valid UTF-8.
    pub fn from_bytes(bytes: Bytes) -> Result<ByteStr, Utf8Error> {
        std::str::from_utf8(bytes.as_ref())?;
        Ok(Self(bytes))
    }

    /// Create `ByteStr` from [`Bytes`] without checking its content.
    ///
    /// # Safety
    ///
    /// `bytes` must be valid UTF-8.
    #[inline]
    pub(crate) const unsafe fn from_utf8_unchecked(bytes: Bytes) -> ByteStr {
        Self(bytes)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: checked on construction and immutable
        unsafe { std::str::from_utf8_unchecked(self.0.as_ref()) }
    }

    /// Returns the underlying [`Bytes`].
    #[inline]
    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl Deref for ByteStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for ByteStr {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for ByteStr {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for ByteStr {
    #[inline]
    fn from(value: String) -> Self {
        Self(Bytes::from(value))
    }
}

impl PartialEq<str> for ByteStr {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteStr {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == other.as_bytes()
    }
}

impl PartialEq<ByteStr> for str {
    fn eq(&self, other: &ByteStr) -> bool {
        self.as_bytes() == other.0.as_ref()
    }
}

impl PartialEq<ByteStr> for &str {
    fn eq(&self, other: &ByteStr) -> bool {
        self.as_bytes() == other.0.as_ref()
    }
}

// ===== Formatting =====

impl std::fmt::Display for ByteStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for ByteStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

#[test]
fn test_bytestr() {
    assert!(ByteStr::from_bytes(Bytes::from_static(b"hello, world")).is_ok());
    assert!(ByteStr::from_bytes(Bytes::from_static(b"\xFF")).is_err());

    let s = ByteStr::from_static("path");
    assert_eq!(s, "path");
    assert_eq!("path", s);
    assert_eq!(s.len(), 4);
    assert_eq!(format!("{s}"), "path");
    assert_eq!(format!("{s:?}"), "\"path\"");
    assert_eq!(ByteStr::new(), "");
    assert_eq!(ByteStr::from(String::from("owned")), ByteStr::from("owned"));
}
