#![no_std]

pub mod channel;
pub mod color;
pub mod command;
pub mod config;
pub mod custom_colors;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod header;
pub mod idle;
pub mod palette;
pub mod routine;
pub mod session;
pub mod state;

pub use channel::{Chunk, ChunkChannel, ChunkReceiver, ChunkSender};
pub use command::{Command, MAX_BODY_LEN, MAX_PACKET_LEN, Packet};
pub use config::DeviceConfig;
pub use custom_colors::CustomColors;
pub use decoder::{Decoded, PacketDecoder, decode_packet};
pub use encoder::{PacketEncoder, SendError};
pub use error::{Parameter, ProtocolError, RejectedReason};
pub use header::PacketHeader;
pub use idle::IdleTimer;
pub use palette::{PALETTE_MAX, Palette};
pub use routine::{Mode, Routine, RoutineFamily};
pub use session::{Session, SessionEvent};
pub use state::DeviceState;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Outgoing side of a transport (serial, UDP, HTTP)
///
/// Implement this trait to ship encoded packets to a device.
pub trait Transport {
    type Error;

    /// Send raw packet bytes
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}
