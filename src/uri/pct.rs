use crate::matches;

/// Percent escape digit was not an uppercase hex digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InvalidEscape;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum DecoderState {
    #[default]
    AwaitingFirstDigit,
    AwaitingSecondDigit,
    Complete,
}

/// Decoder of a single `pct-encoded` octet.
///
/// Created after the `%` is consumed, then fed the two hex digits.
///
/// ```not_rust
/// pct-encoded = "%" HEXDIG HEXDIG
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PercentDecoder {
    state: DecoderState,
    value: u8,
}

impl PercentDecoder {
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: DecoderState::AwaitingFirstDigit,
            value: 0,
        }
    }

    /// Feed the next escape digit.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if `byte` is not a hex digit or the escape is already complete.
    pub fn feed(&mut self, byte: u8) -> Result<(), InvalidEscape> {
        let Some(digit) = matches::hex_value(byte) else {
            return Err(InvalidEscape);
        };
        self.state = match self.state {
            DecoderState::AwaitingFirstDigit => DecoderState::AwaitingSecondDigit,
            DecoderState::AwaitingSecondDigit => DecoderState::Complete,
            DecoderState::Complete => return Err(InvalidEscape),
        };
        self.value = (self.value << 4) | digit;
        Ok(())
    }

    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self.state, DecoderState::Complete)
    }

    /// Returns the decoded octet, or [`None`] if both digits are not yet fed.
    #[inline]
    pub const fn decoded(&self) -> Option<u8> {
        match self.state {
            DecoderState::Complete => Some(self.value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn decode(digits: &[u8]) -> Result<Option<u8>, InvalidEscape> {
        let mut pct = PercentDecoder::new();
        for &byte in digits {
            pct.feed(byte)?;
        }
        Ok(pct.decoded())
    }

    #[test]
    fn test_percent_decoder() {
        assert_eq!(decode(b"20"), Ok(Some(b' ')));
        assert_eq!(decode(b"6F"), Ok(Some(b'o')));
        assert_eq!(decode(b"00"), Ok(Some(0)));
        assert_eq!(decode(b"FF"), Ok(Some(0xFF)));
        assert_eq!(decode(b"2F"), Ok(Some(b'/')));

        // incomplete
        assert_eq!(decode(b""), Ok(None));
        assert_eq!(decode(b"4"), Ok(None));

        // lowercase hex is not an escape digit
        assert_eq!(decode(b"6f"), Err(InvalidEscape));
        assert_eq!(decode(b"X"), Err(InvalidEscape));
        assert_eq!(decode(b"4G"), Err(InvalidEscape));

        // exactly two digits
        assert_eq!(decode(b"414"), Err(InvalidEscape));
    }

    #[test]
    fn test_percent_decoder_state() {
        let mut pct = PercentDecoder::new();
        assert!(!pct.is_complete());
        pct.feed(b'4').unwrap();
        assert!(!pct.is_complete());
        assert_eq!(pct.decoded(), None);
        pct.feed(b'1').unwrap();
        assert!(pct.is_complete());
        assert_eq!(pct.decoded(), Some(b'A'));
    }
}
