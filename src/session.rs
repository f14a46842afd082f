//! Device session
//!
//! Owns one decoder and one state mirror. Decoded commands are applied in the
//! order their terminators arrive; nothing is reordered or coalesced.

use embassy_time::Instant;
#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::ChunkReceiver;
use crate::command::Command;
use crate::config::{DEFAULT_CUSTOM_CAPACITY, DeviceConfig};
use crate::decoder::PacketDecoder;
use crate::error::{ProtocolError, RejectedReason};
use crate::idle::IdleTimer;
use crate::routine::Mode;
use crate::state::DeviceState;

/// What happened to one packet fed into a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Command was applied to the state mirror
    Applied(Command),
    /// Command was well-formed but inconsistent with the current state
    Rejected(Command, RejectedReason),
    /// Packet could not be decoded and was dropped
    Malformed(ProtocolError),
    /// Remote asked for a state report
    StateRequested,
}

pub struct Session<const MAX_CUSTOM_COLORS: usize = DEFAULT_CUSTOM_CAPACITY> {
    decoder: PacketDecoder,
    state: DeviceState<MAX_CUSTOM_COLORS>,
    idle: IdleTimer,
}

impl<const MAX_CUSTOM_COLORS: usize> Session<MAX_CUSTOM_COLORS> {
    /// Create a session at its default state.
    ///
    /// The decoder only enforces the storage bound on custom color indices,
    /// the runtime capacity is checked by the state mirror.
    pub fn new(config: DeviceConfig, now: Instant) -> Result<Self, RejectedReason> {
        Ok(Self {
            decoder: PacketDecoder::new(MAX_CUSTOM_COLORS),
            state: DeviceState::new(config)?,
            idle: IdleTimer::new(now),
        })
    }

    pub const fn state(&self) -> &DeviceState<MAX_CUSTOM_COLORS> {
        &self.state
    }

    /// Apply a locally originated command
    pub fn apply(&mut self, command: &Command, now: Instant) -> Result<(), RejectedReason> {
        self.state.apply(command)?;
        self.idle.touch(now);
        Ok(())
    }

    /// Reconfigure the custom color capacity
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), RejectedReason> {
        self.state.set_capacity(capacity)
    }

    /// Feed transport bytes, applying every completed packet.
    ///
    /// Returns the number of events reported.
    pub fn feed<F>(&mut self, bytes: &[u8], now: Instant, mut on_event: F) -> usize
    where
        F: FnMut(SessionEvent),
    {
        let Self { decoder, state, idle } = self;
        decoder.feed(bytes, |decoded| {
            let event = match decoded {
                Ok(command) => Self::apply_decoded(state, idle, command, now),
                Err(error) => SessionEvent::Malformed(error),
            };
            on_event(event);
        })
    }

    /// Drain every queued chunk (non-blocking)
    pub fn process_pending<const SIZE: usize, F>(
        &mut self,
        chunks: &ChunkReceiver<'_, SIZE>,
        now: Instant,
        mut on_event: F,
    ) -> usize
    where
        F: FnMut(SessionEvent),
    {
        let mut reported = 0;
        while let Ok(chunk) = chunks.try_receive() {
            reported += self.feed(&chunk, now, &mut on_event);
        }
        reported
    }

    /// Switch off once the idle timeout has elapsed.
    ///
    /// Returns true if the lights were switched off by this call.
    pub fn check_idle(&mut self, now: Instant) -> bool {
        if self.state.mode().is_off() || !self.idle.is_expired(now, self.state.idle_timeout()) {
            return false;
        }
        #[cfg(feature = "esp32-log")]
        println!("[session] idle timeout of {} min elapsed", self.state.idle_timeout());
        self.state.apply(&Command::ModeChange(Mode::Off)).is_ok()
    }

    fn apply_decoded(
        state: &mut DeviceState<MAX_CUSTOM_COLORS>,
        idle: &mut IdleTimer,
        command: Command,
        now: Instant,
    ) -> SessionEvent {
        match state.apply(&command) {
            Ok(()) => {
                idle.touch(now);
                if command == Command::StateUpdateRequest {
                    SessionEvent::StateRequested
                } else {
                    SessionEvent::Applied(command)
                }
            }
            Err(reason) => {
                #[cfg(feature = "esp32-log")]
                println!("[session] rejected {}: {}", command.header().as_str(), reason);
                SessionEvent::Rejected(command, reason)
            }
        }
    }
}
