
/// A URI component, used as a hint of where parsing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Scheme,
    UserInfo,
    Host,
    Port,
    Path,
    Query,
    Fragment,
}

/// Error returned when the input is not a valid URI.
///
/// Any failure, an illegal character, a truncated or non hex percent escape, an out of range
/// port or a malformed bracketed host, is terminal for the parse call.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MalformedUri {
    component: Component,
}

impl MalformedUri {
    /// Returns the component which failed to parse.
    #[inline]
    pub const fn component(&self) -> Component {
        self.component
    }
}

impl From<Component> for MalformedUri {
    #[inline]
    fn from(component: Component) -> Self {
        Self { component }
    }
}

// ===== Error =====

macro_rules! gen_error {
    ($($variant:pat => $msg:literal),* $(,)?) => {
        impl Component {
            /// Returns the component name as `str`.
            pub const fn as_str(&self) -> &'static str {
                use Component::*;
                match self {
                    $($variant => $msg,)*
                }
            }
        }
    };
}

gen_error! {
    Scheme => "scheme",
    UserInfo => "userinfo",
    Host => "host",
    Port => "port",
    Path => "path",
    Query => "query",
    Fragment => "fragment",
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for MalformedUri { }

impl std::fmt::Display for MalformedUri {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "malformed URI: invalid {}", self.component)
    }
}

impl std::fmt::Debug for MalformedUri {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
