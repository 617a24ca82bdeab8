use wirelookup_domain::ErrorKind;

/// Forward-only reader over an untrusted datagram.
///
/// Every read is bounds-checked; running past the end yields
/// `ErrorKind::Truncated` and leaves the position unchanged.
#[derive(Debug, Clone)]
pub struct WireCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn read_u8(&mut self) -> Result<u8, ErrorKind> {
        let byte = *self.buf.get(self.pos).ok_or(ErrorKind::Truncated)?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, ErrorKind> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], ErrorKind> {
        let end = self.pos.checked_add(len).ok_or(ErrorKind::Truncated)?;
        let bytes = self.buf.get(self.pos..end).ok_or(ErrorKind::Truncated)?;
        self.pos = end;
        Ok(bytes)
    }

    /// The final `len` bytes of the whole buffer, independent of position.
    pub fn tail(&self, len: usize) -> Result<&'a [u8], ErrorKind> {
        let start = self.buf.len().checked_sub(len).ok_or(ErrorKind::Truncated)?;
        Ok(&self.buf[start..])
    }
}
