//! DNS Response Decoder
//!
//! Reads a reply datagram for a single A/IN question. The echoed QNAME is
//! walked label by label for the number of labels the caller queried; name
//! compression is not followed. On success the address is taken from the
//! last four octets of the datagram, which holds for a reply carrying exactly
//! one A answer and no authority or additional records.

use super::cursor::WireCursor;
use super::wire::{WireHeader, HEADER_LEN, IPV4_LEN, MIN_QUESTION_LEN, RCODE_NO_ERROR};
use std::net::Ipv4Addr;
use tracing::debug;
use wirelookup_domain::{DomainName, ErrorKind, ResolutionResult};

pub struct ResponseDecoder;

impl ResponseDecoder {
    pub fn decode_response(raw: &[u8], expected_label_count: usize) -> ResolutionResult {
        let result = Self::try_decode(raw, expected_label_count)
            .unwrap_or_else(ResolutionResult::failed);

        debug!(
            bytes = raw.len(),
            expected_labels = expected_label_count,
            status = result.status(),
            "DNS response decoded"
        );

        result
    }

    /// Re-reads the question name out of any message, query or reply.
    pub fn decode_question_labels(
        raw: &[u8],
        expected_label_count: usize,
    ) -> Result<Vec<String>, ErrorKind> {
        let mut cursor = WireCursor::new(raw);
        WireHeader::parse(&mut cursor)?;
        Self::read_labels(&mut cursor, expected_label_count)
    }

    fn try_decode(raw: &[u8], expected_label_count: usize) -> Result<ResolutionResult, ErrorKind> {
        if raw.len() < HEADER_LEN + MIN_QUESTION_LEN {
            return Err(ErrorKind::Truncated);
        }

        let mut cursor = WireCursor::new(raw);
        let header = WireHeader::parse(&mut cursor)?;

        let rcode = header.rcode();
        if rcode != RCODE_NO_ERROR {
            return Ok(ResolutionResult::failed(ErrorKind::from_rcode(rcode)));
        }

        let labels = Self::read_labels(&mut cursor, expected_label_count)?;

        let octets = cursor.tail(IPV4_LEN)?;
        let address = Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]);

        Ok(ResolutionResult::Resolved {
            name: DomainName::new(labels),
            address,
        })
    }

    /// Reads exactly `count` length-prefixed labels.
    ///
    /// A zero length octet yields an empty label and the walk goes on, so
    /// `a..b` reads back as three labels. Each iteration consumes at least one
    /// byte, so the walk is bounded by both `count` and the buffer length.
    fn read_labels(cursor: &mut WireCursor<'_>, count: usize) -> Result<Vec<String>, ErrorKind> {
        let mut labels = Vec::with_capacity(count.min(cursor.remaining()));

        for _ in 0..count {
            let len = cursor.read_u8()? as usize;
            let bytes = cursor.read_bytes(len)?;
            labels.push(String::from_utf8_lossy(bytes).into_owned());
        }

        Ok(labels)
    }
}
