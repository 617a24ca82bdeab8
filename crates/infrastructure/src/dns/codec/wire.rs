//! DNS wire-format constants and the fixed 12-byte header (RFC 1035 §4.1.1).

use super::cursor::WireCursor;
use wirelookup_domain::ErrorKind;

pub const HEADER_LEN: usize = 12;

/// Root-only QNAME (1) + QTYPE (2) + QCLASS (2).
pub const MIN_QUESTION_LEN: usize = 5;

pub const DEFAULT_TRANSACTION_ID: u16 = 0x1a2b;

/// Standard query, recursion desired, everything else zero.
pub const FLAGS_RECURSION_DESIRED: u16 = 0x0100;

pub const TYPE_A: u16 = 1;
pub const CLASS_IN: u16 = 1;

pub const RCODE_MASK: u16 = 0x000F;
pub const RCODE_NO_ERROR: u8 = 0;

pub const IPV4_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireHeader {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl WireHeader {
    /// Header of a single-question recursive query.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: FLAGS_RECURSION_DESIRED,
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }

    pub fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ErrorKind> {
        Ok(Self {
            id: cursor.read_u16()?,
            flags: cursor.read_u16()?,
            qdcount: cursor.read_u16()?,
            ancount: cursor.read_u16()?,
            nscount: cursor.read_u16()?,
            arcount: cursor.read_u16()?,
        })
    }

    pub fn write(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&self.qdcount.to_be_bytes());
        buf.extend_from_slice(&self.ancount.to_be_bytes());
        buf.extend_from_slice(&self.nscount.to_be_bytes());
        buf.extend_from_slice(&self.arcount.to_be_bytes());
    }

    /// Low nibble of header byte 3.
    pub fn rcode(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }
}
