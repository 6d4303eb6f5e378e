//! Canonical string form
//!
//! Fixed 34 ASCII characters, lowercase hex:
//! - Chars 0-11: low 48 bits of the timestamp, most-significant first
//! - Char 12: '-'
//! - Chars 13-20: sequence, big-endian
//! - Char 21: '-'
//! - Chars 22-33: discriminator bytes in stored order
//!
//! The parser is strict about structure (three hex-only fields) but accepts
//! upper-case digits.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::{Discriminator, SeqstampError, SeqstampResult, UniqueTimestamp, DISCRIMINATOR_LEN};

/// Length of the canonical string form
pub const ENCODED_LEN: usize = 34;

/// Field separator
pub const SEPARATOR: char = '-';

const TIMESTAMP_HEX_LEN: usize = 12;
const SEQUENCE_HEX_LEN: usize = 8;
const DISCRIMINATOR_HEX_LEN: usize = DISCRIMINATOR_LEN * 2;

const SEQUENCE_OFFSET: usize = TIMESTAMP_HEX_LEN + 1;
const DISCRIMINATOR_OFFSET: usize = SEQUENCE_OFFSET + SEQUENCE_HEX_LEN + 1;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

#[inline]
fn put_byte(buf: &mut [u8], at: usize, b: u8) {
    buf[at] = HEX_DIGITS[(b >> 4) as usize];
    buf[at + 1] = HEX_DIGITS[(b & 0x0F) as usize];
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl UniqueTimestamp {
    /// Write the canonical form into `buf` without allocating
    pub fn encode_into(&self, buf: &mut [u8; ENCODED_LEN]) {
        let ts = self.encoded_timestamp().to_be_bytes();
        // u64 big-endian: the first two bytes are the dropped high bits
        for (i, b) in ts[2..].iter().enumerate() {
            put_byte(buf, 2 * i, *b);
        }
        buf[TIMESTAMP_HEX_LEN] = SEPARATOR as u8;

        for (i, b) in self.sequence().to_be_bytes().iter().enumerate() {
            put_byte(buf, SEQUENCE_OFFSET + 2 * i, *b);
        }
        buf[DISCRIMINATOR_OFFSET - 1] = SEPARATOR as u8;

        for (i, b) in self.discriminator().as_bytes().iter().enumerate() {
            put_byte(buf, DISCRIMINATOR_OFFSET + 2 * i, *b);
        }
    }

    /// Canonical form as ASCII bytes
    pub fn encode(&self) -> [u8; ENCODED_LEN] {
        let mut buf = [0u8; ENCODED_LEN];
        self.encode_into(&mut buf);
        buf
    }

    /// Parse the canonical form. Same as `str::parse`.
    pub fn parse(s: &str) -> SeqstampResult<Self> {
        let mut parts = s.split(SEPARATOR);
        let (ts_part, seq_part, disc_part) =
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(ts), Some(seq), Some(disc), None) => (ts, seq, disc),
                _ => {
                    return Err(SeqstampError::format(format!(
                        "expected 2 '{}' separators, found {}",
                        SEPARATOR,
                        s.matches(SEPARATOR).count()
                    )));
                }
            };

        let timestamp = parse_hex_field(ts_part, "timestamp", |p| i64::from_str_radix(p, 16))?;
        let sequence = parse_hex_field(seq_part, "sequence", |p| u32::from_str_radix(p, 16))?;
        let discriminator = Discriminator::from_hex(disc_part)?;

        Ok(UniqueTimestamp::from_parts(timestamp, sequence, discriminator))
    }
}

fn parse_hex_field<T>(
    part: &str,
    name: &str,
    parse: impl FnOnce(&str) -> Result<T, std::num::ParseIntError>,
) -> SeqstampResult<T> {
    if part.is_empty() {
        return Err(SeqstampError::format(format!("{} part is empty", name)));
    }
    // from_str_radix alone would let a leading '+' through
    if let Some(pos) = part.bytes().position(|c| nibble(c).is_none()) {
        return Err(SeqstampError::format(format!(
            "could not parse {} part: non-hex character at index {}",
            name, pos
        )));
    }
    parse(part).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            SeqstampError::format(format!("could not parse {} part: {:?} overflows", name, part))
        }
        _ => SeqstampError::format(format!("could not parse {} part: {}", name, e)),
    })
}

impl Discriminator {
    /// Parse exactly 12 hex characters
    pub fn from_hex(s: &str) -> SeqstampResult<Self> {
        let raw = s.as_bytes();
        if raw.len() != DISCRIMINATOR_HEX_LEN {
            return Err(SeqstampError::format(format!(
                "discriminator part must be {} hex characters, got {}",
                DISCRIMINATOR_HEX_LEN,
                raw.len()
            )));
        }

        let mut bytes = [0u8; DISCRIMINATOR_LEN];
        for (i, pair) in raw.chunks_exact(2).enumerate() {
            match (nibble(pair[0]), nibble(pair[1])) {
                (Some(hi), Some(lo)) => bytes[i] = (hi << 4) | lo,
                _ => {
                    return Err(SeqstampError::format(format!(
                        "could not parse discriminator part at index {}",
                        2 * i
                    )));
                }
            }
        }
        Ok(Discriminator(bytes))
    }
}

impl fmt::Display for UniqueTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.encode();
        let s = std::str::from_utf8(&buf).map_err(|_| fmt::Error)?;
        f.write_str(s)
    }
}

impl FromStr for UniqueTimestamp {
    type Err = SeqstampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UniqueTimestamp::parse(s)
    }
}

impl TryFrom<&str> for UniqueTimestamp {
    type Error = SeqstampError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        UniqueTimestamp::parse(s)
    }
}

impl From<UniqueTimestamp> for String {
    fn from(id: UniqueTimestamp) -> Self {
        id.to_string()
    }
}
