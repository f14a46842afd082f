//! Packet encoder
//!
//! Turns validated intents into wire packets. Encoding is pure: the caller
//! applies the same change to its own state mirror.

use crate::color::{Rgb, clamp_channel};
use crate::command::{Command, Packet};
use crate::config::DEFAULT_CUSTOM_CAPACITY;
use crate::error::{Parameter, ProtocolError};
use crate::routine::{Mode, Routine};
use crate::state::DeviceState;
use crate::Transport;

/// Failure to encode or ship a packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendError<E> {
    Protocol(ProtocolError),
    Transport(E),
}

/// Encodes commands for a device with a known custom color capacity
#[derive(Debug, Clone, Copy)]
pub struct PacketEncoder {
    capacity: usize,
}

impl PacketEncoder {
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Update the capacity after the remote was reconfigured
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    /// Validate and encode any command
    pub fn encode(&self, command: &Command) -> Result<Packet, ProtocolError> {
        command.validate(self.capacity)?;
        command.to_packet()
    }

    /// Switch routine. Multi-color routines need a palette, others forbid one.
    pub fn encode_routine_change(
        &self,
        routine: Routine,
        palette: Option<i32>,
    ) -> Result<Packet, ProtocolError> {
        let mode = Mode::from_raw(routine, palette)?;
        self.encode(&Command::ModeChange(mode))
    }

    /// Set the main color, channels are clamped to `0..=255`
    pub fn encode_main_color_change(&self, r: i32, g: i32, b: i32) -> Result<Packet, ProtocolError> {
        self.encode(&Command::MainColorChange(clamped_rgb(r, g, b)))
    }

    /// Set one custom color, channels are clamped to `0..=255`
    pub fn encode_custom_color_change(
        &self,
        index: i32,
        r: i32,
        g: i32,
        b: i32,
    ) -> Result<Packet, ProtocolError> {
        let index = usize::try_from(index)
            .ok()
            .filter(|&index| index < self.capacity)
            .ok_or(ProtocolError::IndexOutOfRange {
                index,
                capacity: self.capacity,
            })?;
        self.encode(&Command::CustomArrayColorChange {
            index,
            color: clamped_rgb(r, g, b),
        })
    }

    pub fn encode_brightness_change(&self, value: i32) -> Result<Packet, ProtocolError> {
        let value = u8::try_from(value)
            .map_err(|_| ProtocolError::InvalidParameter(Parameter::Brightness))?;
        self.encode(&Command::BrightnessChange(value))
    }

    pub fn encode_custom_color_count_change(&self, count: i32) -> Result<Packet, ProtocolError> {
        let count = usize::try_from(count)
            .map_err(|_| ProtocolError::InvalidParameter(Parameter::ColorCount))?;
        self.encode(&Command::CustomColorCountChange(count))
    }

    /// Set update speed as desired FPS times 100
    pub fn encode_speed_change(&self, fps_times_hundred: i32) -> Result<Packet, ProtocolError> {
        let value = u32::try_from(fps_times_hundred)
            .map_err(|_| ProtocolError::InvalidParameter(Parameter::Speed))?;
        self.encode(&Command::SpeedChange(value))
    }

    /// Set idle timeout in minutes, `0` disables the timeout
    pub fn encode_idle_timeout_change(&self, minutes: i32) -> Result<Packet, ProtocolError> {
        let minutes = u32::try_from(minutes)
            .map_err(|_| ProtocolError::InvalidParameter(Parameter::IdleTimeout))?;
        self.encode(&Command::IdleTimeoutChange(minutes))
    }

    pub fn encode_reset(&self) -> Result<Packet, ProtocolError> {
        self.encode(&Command::ResetSettingsToDefaults)
    }

    pub fn encode_state_update_request(&self) -> Result<Packet, ProtocolError> {
        self.encode(&Command::StateUpdateRequest)
    }

    /// Encode the full state as a burst of setter packets.
    ///
    /// The burst is cut to the capacity of this encoder, which is the
    /// capacity of the requesting mirror. Feeding it into that mirror
    /// reproduces `state` up to the custom colors it cannot hold.
    pub fn encode_state_report<const MAX_CUSTOM_COLORS: usize, F>(
        &self,
        state: &DeviceState<MAX_CUSTOM_COLORS>,
        mut sink: F,
    ) -> Result<(), ProtocolError>
    where
        F: FnMut(Packet),
    {
        let mut result = Ok(());
        state.for_each_report_command(self.capacity, |command| {
            if result.is_ok() {
                result = self.encode(&command).map(&mut sink);
            }
        });
        result
    }
}

impl PacketEncoder {
    /// Validate, encode and ship a command
    pub fn send<T: Transport>(
        &self,
        transport: &mut T,
        command: &Command,
    ) -> Result<(), SendError<T::Error>> {
        let packet = self.encode(command).map_err(SendError::Protocol)?;
        transport
            .send(packet.as_bytes())
            .map_err(SendError::Transport)
    }

    /// Ship a full state report, one packet per send
    pub fn send_state_report<T: Transport, const MAX_CUSTOM_COLORS: usize>(
        &self,
        transport: &mut T,
        state: &DeviceState<MAX_CUSTOM_COLORS>,
    ) -> Result<(), SendError<T::Error>> {
        let mut result = Ok(());
        self.encode_state_report(state, |packet| {
            if result.is_ok() {
                result = transport
                    .send(packet.as_bytes())
                    .map_err(SendError::Transport);
            }
        })
        .map_err(SendError::Protocol)?;
        result
    }
}

impl Default for PacketEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_CUSTOM_CAPACITY)
    }
}

const fn clamped_rgb(r: i32, g: i32, b: i32) -> Rgb {
    Rgb {
        r: clamp_channel(r),
        g: clamp_channel(g),
        b: clamp_channel(b),
    }
}
