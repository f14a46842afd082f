//! Stream decoder
//!
//! Reassembles `;`-terminated packets from arbitrary byte chunks. A bad packet
//! is reported and dropped; decoding resumes after its terminator.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use heapless::Vec;

use crate::command::{
    Command, FIELD_SEPARATOR, MAX_BODY_LEN, MAX_PARAMS, PACKET_TERMINATOR, expected_params,
};
use crate::config::DEFAULT_CUSTOM_CAPACITY;
use crate::error::ProtocolError;
use crate::header::PacketHeader;

/// Outcome of one completed packet
pub type Decoded = Result<Command, ProtocolError>;

#[derive(Debug, Clone)]
pub struct PacketDecoder {
    buffer: Vec<u8, MAX_BODY_LEN>,
    capacity: usize,
    /// Set after an overlong packet until its terminator is seen
    discarding: bool,
}

impl PacketDecoder {
    /// Create a decoder that accepts custom color indices below `capacity`
    pub const fn new(capacity: usize) -> Self {
        Self {
            buffer: Vec::new(),
            capacity,
            discarding: false,
        }
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    /// Bytes of the unterminated packet carried over to the next call
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Drop any partial packet, e.g. after the transport reconnected
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.discarding = false;
    }

    /// Feed raw bytes from the transport.
    ///
    /// `on_packet` is called once per completed packet, in stream order.
    /// Returns the number of packets reported.
    pub fn feed<F>(&mut self, bytes: &[u8], mut on_packet: F) -> usize
    where
        F: FnMut(Decoded),
    {
        let mut reported = 0;
        for &byte in bytes {
            if byte == PACKET_TERMINATOR as u8 {
                if self.discarding {
                    self.discarding = false;
                } else if let Some(decoded) = decode_packet(&self.buffer, self.capacity) {
                    report(&mut on_packet, decoded);
                    reported += 1;
                }
                self.buffer.clear();
                continue;
            }
            if self.discarding {
                continue;
            }
            if self.buffer.push(byte).is_err() {
                self.buffer.clear();
                self.discarding = true;
                report(&mut on_packet, Err(ProtocolError::PacketTooLong));
                reported += 1;
            }
        }
        reported
    }
}

impl Default for PacketDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_CUSTOM_CAPACITY)
    }
}

fn report<F: FnMut(Decoded)>(on_packet: &mut F, decoded: Decoded) {
    #[cfg(feature = "esp32-log")]
    if let Err(error) = decoded {
        println!("[decoder] dropped packet: {}", error);
    }
    on_packet(decoded);
}

/// Decode the body of one packet, without its terminator.
///
/// Returns `None` for a blank packet.
pub fn decode_packet(packet: &[u8], capacity: usize) -> Option<Decoded> {
    let Ok(text) = core::str::from_utf8(packet) else {
        return Some(Err(ProtocolError::MalformedField));
    };
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(parse_fields(text, capacity))
}

fn parse_fields(text: &str, capacity: usize) -> Decoded {
    let mut fields = text.split(FIELD_SEPARATOR).map(parse_field);
    let header_id = fields.next().ok_or(ProtocolError::MalformedField)??;
    let header = PacketHeader::from_id(header_id)?;

    let mut params: Vec<i64, MAX_PARAMS> = Vec::new();
    let mut found = 0;
    for field in fields {
        let value = field?;
        found += 1;
        // Overflow is reported as an arity mismatch below
        let _ = params.push(value);
    }
    if found > params.len() {
        return Err(ProtocolError::ArityMismatch {
            header,
            expected: expected_params(header, &params)?,
            found,
        });
    }
    Command::from_fields(header, &params, capacity)
}

fn parse_field(field: &str) -> Result<i64, ProtocolError> {
    field
        .trim()
        .parse::<i64>()
        .map_err(|_| ProtocolError::MalformedField)
}
