//! Typed commands and their wire representation
//!
//! A packet is `header[,param]*;` in decimal ASCII. Each command knows how to
//! write itself and how to rebuild itself from parsed fields.

use core::fmt::{self, Write};

use heapless::String;

use crate::color::Rgb;
use crate::error::{Parameter, ProtocolError};
use crate::header::PacketHeader;
use crate::routine::{Mode, Routine};

/// Maximum length of a single packet, terminator included
pub const MAX_PACKET_LEN: usize = 64;

/// Maximum length of a packet body, the bytes before its terminator
pub const MAX_BODY_LEN: usize = MAX_PACKET_LEN - 1;

/// Maximum number of parameters after the header
pub const MAX_PARAMS: usize = 4;

/// Maximum brightness value
pub const MAX_BRIGHTNESS: u8 = 100;

pub const FIELD_SEPARATOR: char = ',';
pub const PACKET_TERMINATOR: char = ';';

/// One encoded packet
pub type Packet = String<MAX_PACKET_LEN>;

/// Command carried by a single packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch routine and, for multi-color routines, palette
    ModeChange(Mode),
    /// Set the color used by single-color routines
    MainColorChange(Rgb),
    /// Set one entry of the custom color array
    CustomArrayColorChange { index: usize, color: Rgb },
    /// Set brightness, 0 to 100
    BrightnessChange(u8),
    /// Set update speed as desired FPS times 100
    SpeedChange(u32),
    /// Set how many custom colors participate in rendering
    CustomColorCountChange(usize),
    /// Set idle timeout in minutes, 0 disables it
    IdleTimeoutChange(u32),
    /// Restore compiled-in defaults
    ResetSettingsToDefaults,
    /// Ask the remote to report its state
    StateUpdateRequest,
}

impl Command {
    pub const fn header(&self) -> PacketHeader {
        match self {
            Self::ModeChange(_) => PacketHeader::ModeChange,
            Self::MainColorChange(_) => PacketHeader::MainColorChange,
            Self::CustomArrayColorChange { .. } => PacketHeader::CustomArrayColorChange,
            Self::BrightnessChange(_) => PacketHeader::BrightnessChange,
            Self::SpeedChange(_) => PacketHeader::SpeedChange,
            Self::CustomColorCountChange(_) => PacketHeader::CustomColorCountChange,
            Self::IdleTimeoutChange(_) => PacketHeader::IdleTimeoutChange,
            Self::ResetSettingsToDefaults => PacketHeader::ResetSettingsToDefaults,
            Self::StateUpdateRequest => PacketHeader::StateUpdateRequest,
        }
    }

    /// Check static parameter bounds against a custom color capacity
    pub fn validate(&self, capacity: usize) -> Result<(), ProtocolError> {
        match *self {
            Self::ModeChange(mode) => Mode::new(mode.routine(), mode.palette()).map(|_| ()),
            Self::CustomArrayColorChange { index, .. } if index >= capacity => {
                Err(ProtocolError::IndexOutOfRange {
                    index: i32::try_from(index).unwrap_or(i32::MAX),
                    capacity,
                })
            }
            Self::BrightnessChange(value) if value > MAX_BRIGHTNESS => {
                Err(ProtocolError::InvalidParameter(Parameter::Brightness))
            }
            Self::SpeedChange(0) => Err(ProtocolError::InvalidParameter(Parameter::Speed)),
            Self::CustomColorCountChange(count) if count > capacity => {
                Err(ProtocolError::InvalidParameter(Parameter::ColorCount))
            }
            _ => Ok(()),
        }
    }

    /// Write the packet, terminator included
    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}", self.header().as_raw())?;
        match *self {
            Self::ModeChange(mode) => {
                write!(out, ",{}", mode.routine().as_raw())?;
                if let Some(palette) = mode.palette() {
                    write!(out, ",{}", palette.as_raw())?;
                }
            }
            Self::MainColorChange(color) => {
                write!(out, ",{},{},{}", color.r, color.g, color.b)?;
            }
            Self::CustomArrayColorChange { index, color } => {
                write!(out, ",{index},{},{},{}", color.r, color.g, color.b)?;
            }
            Self::BrightnessChange(value) => write!(out, ",{value}")?,
            Self::SpeedChange(value) => write!(out, ",{value}")?,
            Self::CustomColorCountChange(count) => write!(out, ",{count}")?,
            Self::IdleTimeoutChange(minutes) => write!(out, ",{minutes}")?,
            Self::ResetSettingsToDefaults | Self::StateUpdateRequest => {}
        }
        out.write_char(PACKET_TERMINATOR)
    }

    /// Encode into a standalone packet without range checks
    pub fn to_packet(&self) -> Result<Packet, ProtocolError> {
        let mut packet = Packet::new();
        self.write_to(&mut packet)
            .map_err(|_| ProtocolError::PacketTooLong)?;
        Ok(packet)
    }

    /// Rebuild a command from the parameters following its header.
    ///
    /// `capacity` bounds custom color indices and counts.
    pub fn from_fields(
        header: PacketHeader,
        params: &[i64],
        capacity: usize,
    ) -> Result<Self, ProtocolError> {
        let expected = expected_params(header, params)?;
        if params.len() != expected {
            return Err(ProtocolError::ArityMismatch {
                header,
                expected,
                found: params.len(),
            });
        }
        let command = match header {
            PacketHeader::ModeChange => {
                let routine = routine_from_field(params[0])?;
                let palette = match params.get(1) {
                    Some(&raw) => Some(
                        i32::try_from(raw)
                            .map_err(|_| ProtocolError::InvalidParameter(Parameter::Palette))?,
                    ),
                    None => None,
                };
                Self::ModeChange(Mode::from_raw(routine, palette)?)
            }
            PacketHeader::MainColorChange => {
                Self::MainColorChange(color_from_fields(&params[0..3])?)
            }
            PacketHeader::CustomArrayColorChange => {
                let index = usize::try_from(params[0])
                    .ok()
                    .filter(|&index| index < capacity)
                    .ok_or(ProtocolError::IndexOutOfRange {
                        index: saturate(params[0]),
                        capacity,
                    })?;
                Self::CustomArrayColorChange {
                    index,
                    color: color_from_fields(&params[1..4])?,
                }
            }
            PacketHeader::BrightnessChange => {
                let value = u8::try_from(params[0])
                    .map_err(|_| ProtocolError::InvalidParameter(Parameter::Brightness))?;
                Self::BrightnessChange(value)
            }
            PacketHeader::SpeedChange => {
                let value = u32::try_from(params[0])
                    .map_err(|_| ProtocolError::InvalidParameter(Parameter::Speed))?;
                Self::SpeedChange(value)
            }
            PacketHeader::CustomColorCountChange => {
                let count = usize::try_from(params[0])
                    .map_err(|_| ProtocolError::InvalidParameter(Parameter::ColorCount))?;
                Self::CustomColorCountChange(count)
            }
            PacketHeader::IdleTimeoutChange => {
                let minutes = u32::try_from(params[0])
                    .map_err(|_| ProtocolError::InvalidParameter(Parameter::IdleTimeout))?;
                Self::IdleTimeoutChange(minutes)
            }
            PacketHeader::ResetSettingsToDefaults => Self::ResetSettingsToDefaults,
            PacketHeader::StateUpdateRequest => Self::StateUpdateRequest,
        };
        command.validate(capacity)?;
        Ok(command)
    }
}

/// Parameter count a packet must carry, judged from its leading parameters.
///
/// Only `ModeChange` depends on its content: multi-color routines take a
/// palette, every other routine takes none.
pub fn expected_params(header: PacketHeader, params: &[i64]) -> Result<usize, ProtocolError> {
    match (header, params.first()) {
        (PacketHeader::ModeChange, Some(&raw_routine)) => {
            let routine = routine_from_field(raw_routine)?;
            Ok(if routine.requires_palette() { 2 } else { 1 })
        }
        (PacketHeader::ModeChange, None) => Ok(1),
        _ => Ok(header.max_params()),
    }
}

fn routine_from_field(value: i64) -> Result<Routine, ProtocolError> {
    u8::try_from(value)
        .ok()
        .and_then(Routine::from_raw)
        .ok_or(ProtocolError::InvalidParameter(Parameter::Routine))
}

fn color_from_fields(fields: &[i64]) -> Result<Rgb, ProtocolError> {
    let channel = |value: i64| {
        u8::try_from(value).map_err(|_| ProtocolError::InvalidParameter(Parameter::ColorChannel))
    };
    Ok(Rgb {
        r: channel(fields[0])?,
        g: channel(fields[1])?,
        b: channel(fields[2])?,
    })
}

#[allow(clippy::cast_possible_truncation)]
fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
