//! Generic Uniform Resource Identifier parser ([RFC3986])
//!
//! [RFC3986]: <https://datatracker.ietf.org/doc/html/rfc3986>
//!
//! Split a URI string into scheme, authority (userinfo, host, port), path segments, query and
//! fragment. Every component except the scheme is percent-decoded.
//!
//! ```
//! let uri = generic_uri::parse("http://manu@www.example.com:8080/foo%20bar?q#top").unwrap();
//! assert_eq!(uri.scheme(), "http");
//! assert_eq!(uri.userinfo(), "manu");
//! assert_eq!(uri.host(), "www.example.com");
//! assert_eq!(uri.port(), Some(8080));
//! assert_eq!(uri.segments().collect::<Vec<_>>(), ["", "foo bar"]);
//! assert_eq!(uri.query(), "q");
//! assert_eq!(uri.fragment(), "top");
//! ```
#![warn(missing_debug_implementations)]

mod log;
mod matches;
mod bytestr;
pub mod uri;

pub use bytestr::ByteStr;
pub use uri::{parse, Uri, MalformedUri, Component};
