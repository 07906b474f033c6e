use super::Uri;
use crate::ByteStr;

impl Uri {
    /// Returns the scheme as `str`, e.g: `http`.
    ///
    /// Scheme is empty for relative reference, it is never percent-decoded.
    #[inline]
    pub fn scheme(&self) -> &str {
        self.scheme.as_str()
    }

    /// Returns the decoded userinfo, e.g: `user:pass`.
    #[inline]
    pub fn userinfo(&self) -> &str {
        self.userinfo.as_str()
    }

    /// Returns the decoded host, e.g: `example.com`.
    ///
    /// For IP-literal, the host is the content between the brackets, e.g: `2001:db8::7`.
    ///
    /// Host is empty if there is no authority.
    #[inline]
    pub fn host(&self) -> &str {
        self.host.as_str()
    }

    #[inline]
    pub const fn has_port(&self) -> bool {
        self.port.is_some()
    }

    /// Returns the port, e.g: `8080`.
    #[inline]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the decoded path segments.
    ///
    /// Empty slice means there is no path, while a single empty segment means the path is `/`.
    #[inline]
    pub fn path(&self) -> &[ByteStr] {
        &self.path
    }

    /// Returns iterator over decoded path segments as `str`.
    #[inline]
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.path.iter().map(ByteStr::as_str)
    }

    /// Returns the decoded query, without the leading `?`.
    #[inline]
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Returns the decoded fragment, without the leading `#`.
    #[inline]
    pub fn fragment(&self) -> &str {
        self.fragment.as_str()
    }

    /// Returns `true` if there is no scheme.
    #[inline]
    pub fn is_relative_reference(&self) -> bool {
        self.scheme.is_empty()
    }

    /// Returns `true` if the path does not start with `/`.
    #[inline]
    pub fn has_relative_path(&self) -> bool {
        match self.path.first() {
            Some(first) => !first.is_empty(),
            None => true,
        }
    }
}
