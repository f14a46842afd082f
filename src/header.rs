//! Packet header ids
//!
//! The header id is the first field of every packet. Ids are shared by
//! the controller firmware and every client, so they only ever grow.

use crate::error::ProtocolError;

const HEADER_NAME_MODE_CHANGE: &str = "mode_change";
const HEADER_NAME_MAIN_COLOR_CHANGE: &str = "main_color_change";
const HEADER_NAME_CUSTOM_ARRAY_COLOR_CHANGE: &str = "custom_array_color_change";
const HEADER_NAME_BRIGHTNESS_CHANGE: &str = "brightness_change";
const HEADER_NAME_SPEED_CHANGE: &str = "speed_change";
const HEADER_NAME_CUSTOM_COLOR_COUNT_CHANGE: &str = "custom_color_count_change";
const HEADER_NAME_IDLE_TIMEOUT_CHANGE: &str = "idle_timeout_change";
const HEADER_NAME_RESET_SETTINGS_TO_DEFAULTS: &str = "reset_settings_to_defaults";
const HEADER_NAME_STATE_UPDATE_REQUEST: &str = "state_update_request";

/// Number of known headers, the exclusive upper bound of a header id
pub const HEADER_MAX: u8 = 9;

const HEADER_ID_MODE_CHANGE: u8 = 0;
const HEADER_ID_MAIN_COLOR_CHANGE: u8 = 1;
const HEADER_ID_CUSTOM_ARRAY_COLOR_CHANGE: u8 = 2;
const HEADER_ID_BRIGHTNESS_CHANGE: u8 = 3;
const HEADER_ID_SPEED_CHANGE: u8 = 4;
const HEADER_ID_CUSTOM_COLOR_COUNT_CHANGE: u8 = 5;
const HEADER_ID_IDLE_TIMEOUT_CHANGE: u8 = 6;
const HEADER_ID_RESET_SETTINGS_TO_DEFAULTS: u8 = 7;
const HEADER_ID_STATE_UPDATE_REQUEST: u8 = 8;

/// Kind of packet, the first field on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PacketHeader {
    /// `routine[,palette]`
    ModeChange = HEADER_ID_MODE_CHANGE,
    /// `r,g,b`
    MainColorChange = HEADER_ID_MAIN_COLOR_CHANGE,
    /// `index,r,g,b`
    CustomArrayColorChange = HEADER_ID_CUSTOM_ARRAY_COLOR_CHANGE,
    /// `value`
    BrightnessChange = HEADER_ID_BRIGHTNESS_CHANGE,
    /// `fps * 100`
    SpeedChange = HEADER_ID_SPEED_CHANGE,
    /// `count`
    CustomColorCountChange = HEADER_ID_CUSTOM_COLOR_COUNT_CHANGE,
    /// `minutes`
    IdleTimeoutChange = HEADER_ID_IDLE_TIMEOUT_CHANGE,
    ResetSettingsToDefaults = HEADER_ID_RESET_SETTINGS_TO_DEFAULTS,
    /// Ask the remote to report its state
    StateUpdateRequest = HEADER_ID_STATE_UPDATE_REQUEST,
}

impl PacketHeader {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            HEADER_ID_MODE_CHANGE => Self::ModeChange,
            HEADER_ID_MAIN_COLOR_CHANGE => Self::MainColorChange,
            HEADER_ID_CUSTOM_ARRAY_COLOR_CHANGE => Self::CustomArrayColorChange,
            HEADER_ID_BRIGHTNESS_CHANGE => Self::BrightnessChange,
            HEADER_ID_SPEED_CHANGE => Self::SpeedChange,
            HEADER_ID_CUSTOM_COLOR_COUNT_CHANGE => Self::CustomColorCountChange,
            HEADER_ID_IDLE_TIMEOUT_CHANGE => Self::IdleTimeoutChange,
            HEADER_ID_RESET_SETTINGS_TO_DEFAULTS => Self::ResetSettingsToDefaults,
            HEADER_ID_STATE_UPDATE_REQUEST => Self::StateUpdateRequest,
            _ => return None,
        })
    }

    /// Resolve a header id as parsed from the wire
    pub fn from_id(id: i64) -> Result<Self, ProtocolError> {
        u8::try_from(id)
            .ok()
            .and_then(Self::from_raw)
            .ok_or(ProtocolError::UnknownHeader(saturate_id(id)))
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Largest parameter count any packet of this kind carries
    pub const fn max_params(self) -> usize {
        match self {
            Self::ModeChange => 2,
            Self::MainColorChange => 3,
            Self::CustomArrayColorChange => 4,
            Self::BrightnessChange
            | Self::SpeedChange
            | Self::CustomColorCountChange
            | Self::IdleTimeoutChange => 1,
            Self::ResetSettingsToDefaults | Self::StateUpdateRequest => 0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModeChange => HEADER_NAME_MODE_CHANGE,
            Self::MainColorChange => HEADER_NAME_MAIN_COLOR_CHANGE,
            Self::CustomArrayColorChange => HEADER_NAME_CUSTOM_ARRAY_COLOR_CHANGE,
            Self::BrightnessChange => HEADER_NAME_BRIGHTNESS_CHANGE,
            Self::SpeedChange => HEADER_NAME_SPEED_CHANGE,
            Self::CustomColorCountChange => HEADER_NAME_CUSTOM_COLOR_COUNT_CHANGE,
            Self::IdleTimeoutChange => HEADER_NAME_IDLE_TIMEOUT_CHANGE,
            Self::ResetSettingsToDefaults => HEADER_NAME_RESET_SETTINGS_TO_DEFAULTS,
            Self::StateUpdateRequest => HEADER_NAME_STATE_UPDATE_REQUEST,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        (0..HEADER_MAX)
            .filter_map(Self::from_raw)
            .find(|header| header.as_str() == s)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn saturate_id(id: i64) -> i32 {
    id.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
