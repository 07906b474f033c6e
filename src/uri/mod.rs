//! Uniform Resource Identifier ([RFC3986])
//!
//! [RFC3986]: <https://datatracker.ietf.org/doc/html/rfc3986>
//!
//! # Generic Syntax
//!
//! [`Uri`] represent a scheme independent URI, split into its components.
//!
//! # Percent Encoding
//!
//! Every component except the scheme is percent-decoded while parsing. Escapes must use
//! uppercase hex digits, e.g: `%2F`, `%6F`.
use crate::ByteStr;

mod pct;
mod decode;
mod scheme;
mod authority;
mod path;
mod parser;
mod impls;
mod error;

pub use parser::parse;
pub use error::{MalformedUri, Component};

/// URI Generic Syntax ([RFC3986])
///
/// [RFC3986]: <https://datatracker.ietf.org/doc/html/rfc3986>
///
/// # Syntax Component
///
/// The following are two example URIs and their component parts:
///
/// ```not_rust
///   foo://example.com:8042/over/there?name=ferret#nose
///   \_/   \______________/\_________/ \_________/ \__/
///    |           |            |            |        |
/// scheme     authority       path        query   fragment
///    |   _____________________|__
///   / \ /                        \
///   urn:example:animal:ferret:nose
/// ```
///
/// Empty component and absent component are not distinguished, e.g: `http://h/?` and `http://h/`
/// both have an empty query.
///
/// The path is stored as decoded segments, a path starting with `/` begin with an empty segment:
///
/// | path       | segments            |
/// |------------|---------------------|
/// | (empty)    | `[]`                |
/// | `/`        | `[""]`              |
/// | `/foo`     | `["", "foo"]`       |
/// | `foo/`     | `["foo", ""]`       |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Uri {
    scheme: ByteStr,
    userinfo: ByteStr,
    host: ByteStr,
    port: Option<u16>,
    path: Vec<ByteStr>,
    query: ByteStr,
    fragment: ByteStr,
}
