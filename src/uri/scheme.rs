use crate::matches;

/// State of a scheme scan.
#[derive(Debug, Default)]
struct SchemeScan {
    saw_first_character: bool,
}

/// Returns `true` if `byte` may continue a scheme in the given scan state.
///
/// ```not_rust
/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
/// ```
fn scan(state: &mut SchemeScan, byte: u8) -> bool {
    if state.saw_first_character {
        matches::is_scheme(byte)
    } else {
        state.saw_first_character = true;
        matches::is_alpha(byte)
    }
}

/// Returns `true` if `scheme` is a legal, non-empty scheme.
pub(crate) fn is_legal(scheme: &[u8]) -> bool {
    let mut state = SchemeScan::default();
    !scheme.is_empty() && scheme.iter().all(|&byte| scan(&mut state, byte))
}

#[test]
fn test_scheme() {
    assert!(is_legal(b"http"));
    assert!(is_legal(b"ftp"));
    assert!(is_legal(b"postgresql"));
    assert!(is_legal(b"svn+ssh"));
    assert!(is_legal(b"x-my.scheme"));
    assert!(is_legal(b"h2"));
    assert!(is_legal(b"H"));

    assert!(!is_legal(b""));
    assert!(!is_legal(b"2http"));
    assert!(!is_legal(b"+http"));
    assert!(!is_legal(b"http:"));
    assert!(!is_legal(b"ht tp"));
    assert!(!is_legal(b"p\0ostgresql"));
    assert!(!is_legal(b"postgresql\0"));
    assert!(!is_legal(b"www.example.com?q"));
}
