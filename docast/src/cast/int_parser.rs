//! Integer literal parsing with base detection.
//!
//! Accepts an optional sign, a `0b`/`0o`/`0x` prefix or a bare leading `0`
//! for octal, and `_` between digits. Width overflow is reported separately
//! from malformed input so callers can tell the two apart.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntErrorKind {
    Syntax,
    Range,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IntParseError {
    input: String,
    kind: IntErrorKind,
}

impl IntParseError {
    fn syntax(input: &str) -> Self {
        IntParseError {
            input: input.to_string(),
            kind: IntErrorKind::Syntax,
        }
    }

    fn range(input: &str) -> Self {
        IntParseError {
            input: input.to_string(),
            kind: IntErrorKind::Range,
        }
    }

    pub(crate) fn kind(&self) -> IntErrorKind {
        self.kind
    }
}

impl Display for IntParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            IntErrorKind::Syntax => write!(f, "parsing {:?}: invalid syntax", self.input),
            IntErrorKind::Range => write!(f, "parsing {:?}: value out of range", self.input),
        }
    }
}

/// Parses an unsigned literal that must fit in `bit_size` bits. No sign is accepted.
pub(crate) fn parse_uint(input: &str, bit_size: u32) -> Result<u64, IntParseError> {
    let bytes = input.as_bytes();
    if bytes.is_empty() {
        return Err(IntParseError::syntax(input));
    }

    let (base, digits): (u64, &[u8]) = if bytes[0] == b'0' {
        match bytes.get(1).map(u8::to_ascii_lowercase) {
            Some(b'b') if bytes.len() >= 3 => (2, &bytes[2..]),
            Some(b'o') if bytes.len() >= 3 => (8, &bytes[2..]),
            Some(b'x') if bytes.len() >= 3 => (16, &bytes[2..]),
            _ => (8, &bytes[1..]),
        }
    } else {
        (10, bytes)
    };

    let max_value: u64 = if bit_size >= 64 {
        u64::MAX
    } else {
        (1u64 << bit_size) - 1
    };

    let mut underscores = false;
    let mut n: u64 = 0;
    for &c in digits {
        if c == b'_' {
            underscores = true;
            continue;
        }
        let digit = match c {
            b'0'..=b'9' => (c - b'0') as u64,
            b'a'..=b'z' => (c - b'a' + 10) as u64,
            b'A'..=b'Z' => (c - b'A' + 10) as u64,
            _ => return Err(IntParseError::syntax(input)),
        };
        if digit >= base {
            return Err(IntParseError::syntax(input));
        }

        n = match n.checked_mul(base).and_then(|n| n.checked_add(digit)) {
            Some(next) if next <= max_value => next,
            _ => return Err(IntParseError::range(input)),
        };
    }

    if underscores && !underscores_ok(input) {
        return Err(IntParseError::syntax(input));
    }

    Ok(n)
}

/// Parses a signed 64-bit literal.
pub(crate) fn parse_int(input: &str) -> Result<i64, IntParseError> {
    let (negative, magnitude) = match input.as_bytes().first() {
        None => return Err(IntParseError::syntax(input)),
        Some(b'+') => (false, &input[1..]),
        Some(b'-') => (true, &input[1..]),
        Some(_) => (false, input),
    };

    let unsigned = match parse_uint(magnitude, 64) {
        Ok(n) => n,
        Err(err) if err.kind() == IntErrorKind::Range => {
            return Err(IntParseError::range(input))
        }
        Err(_) => return Err(IntParseError::syntax(input)),
    };

    const CUTOFF: u64 = 1 << 63;
    if negative {
        if unsigned > CUTOFF {
            return Err(IntParseError::range(input));
        }
        Ok((unsigned as i64).wrapping_neg())
    } else {
        if unsigned >= CUTOFF {
            return Err(IntParseError::range(input));
        }
        Ok(unsigned as i64)
    }
}

// '_' may only sit between digits, or right after a base prefix
fn underscores_ok(input: &str) -> bool {
    let mut bytes = input.as_bytes();
    if let Some(b'+' | b'-') = bytes.first() {
        bytes = &bytes[1..];
    }

    // saw: b'^' start, b'0' digit or prefix, b'_' underscore, b'!' anything else
    let mut saw = b'^';
    let mut hex = false;
    let mut i = 0;
    if bytes.len() >= 2
        && bytes[0] == b'0'
        && matches!(bytes[1].to_ascii_lowercase(), b'b' | b'o' | b'x')
    {
        i = 2;
        saw = b'0';
        hex = bytes[1].to_ascii_lowercase() == b'x';
    }

    while i < bytes.len() {
        let c = bytes[i];
        i += 1;
        if c.is_ascii_digit() || (hex && c.to_ascii_lowercase().is_ascii_hexdigit()) {
            saw = b'0';
            continue;
        }
        if c == b'_' {
            if saw != b'0' {
                return false;
            }
            saw = b'_';
            continue;
        }
        if saw == b'_' {
            return false;
        }
        saw = b'!';
    }
    saw != b'_'
}
