use super::DomainName;
use std::fmt;
use std::net::Ipv4Addr;

/// Why a lookup did not produce an address.
///
/// Every variant except `Truncated` mirrors a DNS RCODE value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The reply was too short to decode.
    Truncated,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Unknown(u8),
}

impl ErrorKind {
    /// Maps a non-zero RCODE to its failure class.
    pub fn from_rcode(rcode: u8) -> Self {
        match rcode {
            1 => ErrorKind::FormatError,
            2 => ErrorKind::ServerFailure,
            3 => ErrorKind::NameError,
            4 => ErrorKind::NotImplemented,
            5 => ErrorKind::Refused,
            other => ErrorKind::Unknown(other),
        }
    }

    /// Short status label, e.g. for structured log fields.
    pub fn status(&self) -> &'static str {
        match self {
            ErrorKind::Truncated => "TRUNCATED",
            ErrorKind::FormatError => "FORMERR",
            ErrorKind::ServerFailure => "SERVFAIL",
            ErrorKind::NameError => "NXDOMAIN",
            ErrorKind::NotImplemented => "NOTIMP",
            ErrorKind::Refused => "REFUSED",
            ErrorKind::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Truncated => write!(f, "Truncated response. Reply too short to decode."),
            ErrorKind::FormatError => write!(f, "Format error. Unable to interpret query."),
            ErrorKind::ServerFailure => write!(f, "Server failure. Unable to process query."),
            ErrorKind::NameError => write!(f, "Name error. Domain name does not exist."),
            ErrorKind::NotImplemented => write!(f, "Query request type not supported."),
            ErrorKind::Refused => write!(f, "Server refused query."),
            ErrorKind::Unknown(code) => write!(f, "Unknown response code {}.", code),
        }
    }
}

/// Outcome of decoding one reply datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    Resolved { name: DomainName, address: Ipv4Addr },
    Failed { reason: ErrorKind },
}

impl ResolutionResult {
    pub fn failed(reason: ErrorKind) -> Self {
        ResolutionResult::Failed { reason }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionResult::Resolved { .. })
    }

    pub fn address(&self) -> Option<Ipv4Addr> {
        match self {
            ResolutionResult::Resolved { address, .. } => Some(*address),
            ResolutionResult::Failed { .. } => None,
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            ResolutionResult::Resolved { .. } => "NOERROR",
            ResolutionResult::Failed { reason } => reason.status(),
        }
    }
}
