//! DNS Query Encoder
//!
//! Builds an A/IN query datagram by hand:
//! header | (len|label)* | 0x00 | QTYPE | QCLASS

use super::wire::{WireHeader, CLASS_IN, DEFAULT_TRANSACTION_ID, HEADER_LEN, TYPE_A};
use wirelookup_domain::DomainName;

pub struct QueryEncoder;

impl QueryEncoder {
    /// Encode an A-record query for a dotted host name using the default
    /// transaction id `0x1a2b`.
    ///
    /// Degenerate input is encoded literally: `""` becomes one zero-length
    /// label and `"a..b"` carries a zero-length label in the middle.
    pub fn encode_query(host_name: &str) -> Vec<u8> {
        Self::encode_query_with_id(host_name, DEFAULT_TRANSACTION_ID)
    }

    pub fn encode_query_with_id(host_name: &str, id: u16) -> Vec<u8> {
        Self::encode_name(&DomainName::from_host_name(host_name), id)
    }

    pub fn encode_name(name: &DomainName, id: u16) -> Vec<u8> {
        let qname_len: usize = name.labels().iter().map(|l| l.len() + 1).sum::<usize>() + 1;
        let mut buf = Vec::with_capacity(HEADER_LEN + qname_len + 4);

        WireHeader::query(id).write(&mut buf);

        for label in name.labels() {
            // Only the low byte survives for labels over 255 bytes.
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0x00);

        buf.extend_from_slice(&TYPE_A.to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());
        buf
    }
}
