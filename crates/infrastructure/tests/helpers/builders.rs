#![allow(dead_code)]

/// Builds synthetic reply datagrams byte by byte.
pub struct ReplyBuilder {
    id: u16,
    rcode: u8,
    labels: Vec<Vec<u8>>,
    answer: Option<[u8; 4]>,
    trailer: Vec<u8>,
}

impl ReplyBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1a2b,
            rcode: 0,
            labels: Vec::new(),
            answer: None,
            trailer: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn name(mut self, host_name: &str) -> Self {
        self.labels = host_name
            .split('.')
            .map(|l| l.as_bytes().to_vec())
            .collect();
        self
    }

    pub fn raw_label(mut self, label: &[u8]) -> Self {
        self.labels.push(label.to_vec());
        self
    }

    pub fn answer(mut self, address: [u8; 4]) -> Self {
        self.answer = Some(address);
        self
    }

    /// Bytes appended after the answer, e.g. an EDNS OPT record.
    pub fn trailer(mut self, bytes: &[u8]) -> Self {
        self.trailer = bytes.to_vec();
        self
    }

    pub fn build(self) -> Vec<u8> {
        let ancount: u16 = if self.answer.is_some() { 1 } else { 0 };
        let mut buf = Vec::with_capacity(64);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.push(0x81);
        buf.push(0x80 | (self.rcode & 0x0F));
        buf.extend_from_slice(&[0x00, 0x01]);
        buf.extend_from_slice(&ancount.to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        for label in &self.labels {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label);
        }
        buf.push(0x00);
        buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);

        if let Some(address) = self.answer {
            buf.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01]);
            buf.extend_from_slice(&300u32.to_be_bytes());
            buf.extend_from_slice(&[0x00, 0x04]);
            buf.extend_from_slice(&address);
        }

        buf.extend_from_slice(&self.trailer);
        buf
    }
}
