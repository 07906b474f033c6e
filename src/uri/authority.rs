use bytes::{BufMut, Bytes, BytesMut};

use super::{Component, MalformedUri, decode::decode, pct::PercentDecoder};
use crate::{ByteStr, matches::{self, CharClass}};

/// Decoded authority components.
///
/// ```not_rust
/// authority = [ userinfo "@" ] host [ ":" port ]
/// ```
#[derive(Debug, Default)]
pub(crate) struct Authority {
    pub userinfo: ByteStr,
    pub host: ByteStr,
    pub port: Option<u16>,
}

/// Host scanner state.
#[derive(Debug, Clone, Copy)]
enum HostState {
    Start,
    RegName,
    Percent(PercentDecoder),
    IpLiteralStart,
    Ipv6,
    IpvFutureVersion { digits: bool },
    IpvFutureBody { chars: bool },
    PostBracket,
    Port,
}

/// Parse authority, without the leading `//`.
pub(crate) fn parse(raw: Bytes) -> Result<Authority, MalformedUri> {
    let (userinfo, host_port) = match raw.iter().position(|&byte| byte == b'@') {
        Some(at) => {
            let userinfo = decode(raw.slice(..at), CharClass::UserInfo).ok_or(Component::UserInfo)?;
            (userinfo, raw.slice(at + 1..))
        }
        None => (ByteStr::new(), raw),
    };

    let (host, port) = parse_host(&host_port)?;

    let port = match port {
        [] => None,
        port => Some(parse_port(port).ok_or(Component::Port)?),
    };

    Ok(Authority {
        userinfo,
        host,
        port,
    })
}

/// Scan the host, returning the decoded host and the raw port.
///
/// ```not_rust
/// host       = IP-literal / IPv4address / reg-name
/// IP-literal = "[" ( IPv6address / IPvFuture  ) "]"
/// IPvFuture  = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )
/// ```
///
/// IPv6 address is not validated, the bracket content is taken as is.
fn parse_host(bytes: &[u8]) -> Result<(ByteStr, &[u8]), MalformedUri> {
    let mut host = BytesMut::with_capacity(bytes.len());
    let mut port_start = None;
    let mut state = HostState::Start;

    for (i, &byte) in bytes.iter().enumerate() {
        let next = match state {
            HostState::Start => match byte {
                b'[' => HostState::IpLiteralStart,
                _ => reg_name(byte, &mut host)?,
            },
            HostState::RegName => reg_name(byte, &mut host)?,
            HostState::Percent(mut pct) => {
                pct.feed(byte).map_err(|_| Component::Host)?;
                if pct.is_complete() {
                    host.extend(pct.decoded());
                    HostState::RegName
                } else {
                    HostState::Percent(pct)
                }
            }
            HostState::IpLiteralStart => match byte {
                b']' => return Err(Component::Host.into()),
                b'v' | b'V' => {
                    host.put_u8(byte);
                    HostState::IpvFutureVersion { digits: false }
                }
                _ => {
                    host.put_u8(byte);
                    HostState::Ipv6
                }
            },
            HostState::Ipv6 => match byte {
                b']' => HostState::PostBracket,
                _ => {
                    host.put_u8(byte);
                    HostState::Ipv6
                }
            },
            HostState::IpvFutureVersion { digits } => match byte {
                b'.' if digits => {
                    host.put_u8(byte);
                    HostState::IpvFutureBody { chars: false }
                }
                _ if matches::is_hexdig(byte) => {
                    host.put_u8(byte);
                    HostState::IpvFutureVersion { digits: true }
                }
                _ => return Err(Component::Host.into()),
            },
            HostState::IpvFutureBody { chars } => match byte {
                b']' if chars => HostState::PostBracket,
                _ if matches::is_ipvfuture(byte) => {
                    host.put_u8(byte);
                    HostState::IpvFutureBody { chars: true }
                }
                _ => return Err(Component::Host.into()),
            },
            HostState::PostBracket => match byte {
                b':' => HostState::Port,
                _ => return Err(Component::Host.into()),
            },
            // the rest is port, validated as a whole
            HostState::Port => HostState::Port,
        };

        if let (HostState::Port, None) = (next, port_start) {
            port_start = Some(i + 1);
        }
        state = next;
    }

    match state {
        HostState::Start | HostState::RegName | HostState::PostBracket | HostState::Port => {}
        HostState::Percent(_)
        | HostState::IpLiteralStart
        | HostState::Ipv6
        | HostState::IpvFutureVersion { .. }
        | HostState::IpvFutureBody { .. } => return Err(Component::Host.into()),
    }

    let port: &[u8] = match port_start {
        Some(start) => &bytes[start..],
        None => &[],
    };
    let host = ByteStr::from_bytes(host.freeze()).map_err(|_| Component::Host)?;
    Ok((host, port))
}

fn reg_name(byte: u8, host: &mut BytesMut) -> Result<HostState, Component> {
    match byte {
        b'%' => Ok(HostState::Percent(PercentDecoder::new())),
        b':' => Ok(HostState::Port),
        _ if matches::is_regname(byte) => {
            host.put_u8(byte);
            Ok(HostState::RegName)
        }
        _ => Err(Component::Host),
    }
}

/// Parse decimal port, rejecting sign, whitespace, and any value above [`u16::MAX`].
const fn parse_port(mut bytes: &[u8]) -> Option<u16> {
    let mut port: u32 = 0;
    while let [byte, rest @ ..] = bytes {
        if !matches::is_digit(*byte) {
            return None;
        }
        port = port * 10 + (*byte - b'0') as u32;
        if port > u16::MAX as u32 {
            return None;
        }
        bytes = rest;
    }
    Some(port as u16)
}

#[cfg(test)]
mod test {
    use super::*;

    fn authority(raw: &'static str) -> Result<Authority, MalformedUri> {
        parse(Bytes::from_static(raw.as_bytes()))
    }

    macro_rules! assert_authority {
        (#[error($component:ident)] $raw:literal) => {
            match authority($raw) {
                Ok(ok) => panic!("{:?} parsed as {ok:?}", $raw),
                Err(err) => assert_eq!(err.component(), Component::$component, "{:?}", $raw),
            }
        };
        ($raw:literal; $userinfo:literal, $host:literal, $port:expr) => {
            let auth = authority($raw).unwrap();
            assert_eq!(auth.userinfo, $userinfo, "userinfo of {:?}", $raw);
            assert_eq!(auth.host, $host, "host of {:?}", $raw);
            assert_eq!(auth.port, $port, "port of {:?}", $raw);
        };
    }

    #[test]
    fn test_authority() {
        assert_authority!(""; "", "", None);
        assert_authority!("example.com"; "", "example.com", None);
        assert_authority!("user:pass@example.com"; "user:pass", "example.com", None);
        assert_authority!("example.com:443"; "", "example.com", Some(443));
        assert_authority!("user:pass@example.com:443"; "user:pass", "example.com", Some(443));
        assert_authority!("192.0.2.16:80"; "", "192.0.2.16", Some(80));
        assert_authority!("@example.com"; "", "example.com", None);
        assert_authority!("example.com:"; "", "example.com", None);
        assert_authority!(":8080"; "", "", Some(8080));
        assert_authority!("h:0"; "", "h", Some(0));
        assert_authority!("h:65535"; "", "h", Some(65535));
        assert_authority!("h:00080"; "", "h", Some(80));
    }

    #[test]
    fn test_authority_decode() {
        assert_authority!("b%40b@ex%41mple.com"; "b@b", "exAmple.com", None);
        assert_authority!("%6D%61nu@host"; "manu", "host", None);
        assert_authority!(#[error(UserInfo)] "b%4@host");
        assert_authority!(#[error(Host)] "ex%4mple.com");
        assert_authority!(#[error(Host)] "example%2");
        assert_authority!(#[error(Host)] "example%");
        assert_authority!(#[error(Host)] "ex%6dple.com");
    }

    #[test]
    fn test_authority_ip_literal() {
        // note that the exact syntax of ipv6 is not validated
        assert_authority!("[a2f::1]"; "", "a2f::1", None);
        assert_authority!("user:pass@[a2f::1]"; "user:pass", "a2f::1", None);
        assert_authority!("[a2f::1]:443"; "", "a2f::1", Some(443));
        assert_authority!("user:pass@[a2f::1]:443"; "user:pass", "a2f::1", Some(443));
        assert_authority!("[::ffff:1.2.3.4]"; "", "::ffff:1.2.3.4", None);
        assert_authority!("[fe80::1%25eth0]:22"; "", "fe80::1%25eth0", Some(22));

        assert_authority!("[v7.aB]"; "", "v7.aB", None);
        assert_authority!("[VF1.x:y]:80"; "", "VF1.x:y", Some(80));

        assert_authority!(#[error(Host)] "[");
        assert_authority!(#[error(Host)] "[]");
        assert_authority!(#[error(Host)] "[::1");
        assert_authority!(#[error(Host)] "[::1]x");
        assert_authority!(#[error(Host)] "[::1]]");
        assert_authority!(#[error(Host)] "[v]");
        assert_authority!(#[error(Host)] "[v.x]");
        assert_authority!(#[error(Host)] "[v7]");
        assert_authority!(#[error(Host)] "[v7.]");
        assert_authority!(#[error(Host)] "[vG.x]");
        assert_authority!(#[error(Host)] "[v7.x/y]");
        assert_authority!(#[error(Port)] "[::1]:http");
    }

    #[test]
    fn test_authority_error() {
        assert_authority!(#[error(Port)] "example.com:spam");
        assert_authority!(#[error(Port)] "example.com:8080spam");
        assert_authority!(#[error(Port)] "example.com:65536");
        assert_authority!(#[error(Port)] "example.com:99999999999");
        assert_authority!(#[error(Port)] "example.com:-1");
        assert_authority!(#[error(Port)] "example.com:+80");
        assert_authority!(#[error(Port)] "example.com: 80");
        assert_authority!(#[error(Port)] "example.com:80:80");
        assert_authority!(#[error(Host)] "exa mple.com");
        assert_authority!(#[error(Host)] "a@b@c");
        assert_authority!(#[error(Host)] "exa[mple.com");
        assert_authority!(#[error(UserInfo)] "us er@example.com");
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(b"0"), Some(0));
        assert_eq!(parse_port(b"8080"), Some(8080));
        assert_eq!(parse_port(b"65535"), Some(65535));
        assert_eq!(parse_port(b"65536"), None);
        assert_eq!(parse_port(b"1a"), None);
        assert_eq!(parse_port(b" 1"), None);
    }
}
