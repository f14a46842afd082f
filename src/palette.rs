//! Palette selectors and preset color tables
//!
//! Palette indices are part of the wire format. `Custom` refers to the
//! user-editable array held by the device state, every other palette
//! is compiled in.

use crate::color::{Rgb, rgb_from_u32};
use crate::error::{Parameter, ProtocolError};

/// Number of known palettes, the exclusive upper bound of a palette index
pub const PALETTE_MAX: u8 = 17;

const PALETTE_ID_CUSTOM: u8 = 0;
const PALETTE_ID_WATER: u8 = 1;
const PALETTE_ID_FROZEN: u8 = 2;
const PALETTE_ID_SNOW: u8 = 3;
const PALETTE_ID_COOL: u8 = 4;
const PALETTE_ID_WARM: u8 = 5;
const PALETTE_ID_FIRE: u8 = 6;
const PALETTE_ID_EVIL: u8 = 7;
const PALETTE_ID_CORROSIVE: u8 = 8;
const PALETTE_ID_POISON: u8 = 9;
const PALETTE_ID_ROSE: u8 = 10;
const PALETTE_ID_PINK_GREEN: u8 = 11;
const PALETTE_ID_RED_WHITE_BLUE: u8 = 12;
const PALETTE_ID_RGB: u8 = 13;
const PALETTE_ID_CMY: u8 = 14;
const PALETTE_ID_SEVEN_COLOR: u8 = 15;
const PALETTE_ID_ALL: u8 = 16;

const WATER: [Rgb; 5] = [
    rgb_from_u32(0x00_00_FF),
    rgb_from_u32(0x00_19_FF),
    rgb_from_u32(0x00_64_FF),
    rgb_from_u32(0x00_96_E6),
    rgb_from_u32(0x00_3C_C8),
];

const FROZEN: [Rgb; 5] = [
    rgb_from_u32(0x00_7F_FF),
    rgb_from_u32(0x00_5A_FF),
    rgb_from_u32(0x5A_00_FF),
    rgb_from_u32(0x78_78_FF),
    rgb_from_u32(0x00_C8_FF),
];

const SNOW: [Rgb; 4] = [
    rgb_from_u32(0xFF_FF_FF),
    rgb_from_u32(0xDC_DC_FF),
    rgb_from_u32(0xB4_B4_FF),
    rgb_from_u32(0x00_00_FF),
];

const COOL: [Rgb; 5] = [
    rgb_from_u32(0x00_FF_00),
    rgb_from_u32(0x7D_00_FF),
    rgb_from_u32(0x00_00_FF),
    rgb_from_u32(0x28_7F_28),
    rgb_from_u32(0x3C_00_A0),
];

const WARM: [Rgb; 5] = [
    rgb_from_u32(0xFF_FF_00),
    rgb_from_u32(0xFF_00_00),
    rgb_from_u32(0xC8_1E_00),
    rgb_from_u32(0xC8_3C_00),
    rgb_from_u32(0xFF_50_00),
];

const FIRE: [Rgb; 6] = [
    rgb_from_u32(0xFF_0A_00),
    rgb_from_u32(0xFF_14_00),
    rgb_from_u32(0xFF_1E_00),
    rgb_from_u32(0xFF_28_00),
    rgb_from_u32(0xFF_32_00),
    rgb_from_u32(0x50_05_00),
];

const EVIL: [Rgb; 6] = [
    rgb_from_u32(0xFF_00_00),
    rgb_from_u32(0xC8_00_00),
    rgb_from_u32(0x14_00_00),
    rgb_from_u32(0xC8_0A_00),
    rgb_from_u32(0xFF_32_00),
    rgb_from_u32(0x50_00_00),
];

const CORROSIVE: [Rgb; 5] = [
    rgb_from_u32(0x00_FF_00),
    rgb_from_u32(0x00_C8_00),
    rgb_from_u32(0x3C_FF_3C),
    rgb_from_u32(0x00_28_00),
    rgb_from_u32(0x96_FF_00),
];

const POISON: [Rgb; 6] = [
    rgb_from_u32(0xA0_00_FF),
    rgb_from_u32(0x64_00_A0),
    rgb_from_u32(0x00_C8_00),
    rgb_from_u32(0x32_00_32),
    rgb_from_u32(0x00_FF_00),
    rgb_from_u32(0x00_32_00),
];

const ROSE: [Rgb; 5] = [
    rgb_from_u32(0xFF_00_3C),
    rgb_from_u32(0xFF_1E_64),
    rgb_from_u32(0xFF_00_96),
    rgb_from_u32(0xC8_00_50),
    rgb_from_u32(0xFF_82_B4),
];

const PINK_GREEN: [Rgb; 4] = [
    rgb_from_u32(0xFF_00_96),
    rgb_from_u32(0x00_FF_00),
    rgb_from_u32(0xFF_50_B4),
    rgb_from_u32(0x00_A0_32),
];

const RED_WHITE_BLUE: [Rgb; 3] = [
    rgb_from_u32(0xFF_00_00),
    rgb_from_u32(0xFF_FF_FF),
    rgb_from_u32(0x00_00_FF),
];

const RGB: [Rgb; 3] = [
    rgb_from_u32(0xFF_00_00),
    rgb_from_u32(0x00_FF_00),
    rgb_from_u32(0x00_00_FF),
];

const CMY: [Rgb; 3] = [
    rgb_from_u32(0x00_FF_FF),
    rgb_from_u32(0xFF_00_FF),
    rgb_from_u32(0xFF_FF_00),
];

const SEVEN_COLOR: [Rgb; 7] = [
    rgb_from_u32(0xFF_00_00),
    rgb_from_u32(0xFF_7F_00),
    rgb_from_u32(0xFF_FF_00),
    rgb_from_u32(0x00_FF_00),
    rgb_from_u32(0x00_00_FF),
    rgb_from_u32(0x4B_00_82),
    rgb_from_u32(0x8F_00_FF),
];

/// Twelve evenly spaced fully saturated hues
const ALL: [Rgb; 12] = [
    rgb_from_u32(0xFF_00_00),
    rgb_from_u32(0xFF_7F_00),
    rgb_from_u32(0xFF_FF_00),
    rgb_from_u32(0x7F_FF_00),
    rgb_from_u32(0x00_FF_00),
    rgb_from_u32(0x00_FF_7F),
    rgb_from_u32(0x00_FF_FF),
    rgb_from_u32(0x00_7F_FF),
    rgb_from_u32(0x00_00_FF),
    rgb_from_u32(0x7F_00_FF),
    rgb_from_u32(0xFF_00_FF),
    rgb_from_u32(0xFF_00_7F),
];

/// Palette selector used by multi-color routines
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Palette {
    Custom = PALETTE_ID_CUSTOM,
    Water = PALETTE_ID_WATER,
    Frozen = PALETTE_ID_FROZEN,
    Snow = PALETTE_ID_SNOW,
    Cool = PALETTE_ID_COOL,
    Warm = PALETTE_ID_WARM,
    Fire = PALETTE_ID_FIRE,
    Evil = PALETTE_ID_EVIL,
    Corrosive = PALETTE_ID_CORROSIVE,
    Poison = PALETTE_ID_POISON,
    Rose = PALETTE_ID_ROSE,
    PinkGreen = PALETTE_ID_PINK_GREEN,
    RedWhiteBlue = PALETTE_ID_RED_WHITE_BLUE,
    Rgb = PALETTE_ID_RGB,
    Cmy = PALETTE_ID_CMY,
    SevenColor = PALETTE_ID_SEVEN_COLOR,
    All = PALETTE_ID_ALL,
}

impl Palette {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PALETTE_ID_CUSTOM => Self::Custom,
            PALETTE_ID_WATER => Self::Water,
            PALETTE_ID_FROZEN => Self::Frozen,
            PALETTE_ID_SNOW => Self::Snow,
            PALETTE_ID_COOL => Self::Cool,
            PALETTE_ID_WARM => Self::Warm,
            PALETTE_ID_FIRE => Self::Fire,
            PALETTE_ID_EVIL => Self::Evil,
            PALETTE_ID_CORROSIVE => Self::Corrosive,
            PALETTE_ID_POISON => Self::Poison,
            PALETTE_ID_ROSE => Self::Rose,
            PALETTE_ID_PINK_GREEN => Self::PinkGreen,
            PALETTE_ID_RED_WHITE_BLUE => Self::RedWhiteBlue,
            PALETTE_ID_RGB => Self::Rgb,
            PALETTE_ID_CMY => Self::Cmy,
            PALETTE_ID_SEVEN_COLOR => Self::SevenColor,
            PALETTE_ID_ALL => Self::All,
            _ => return None,
        })
    }

    /// Resolve a palette index as it appears on the wire
    pub fn from_index(index: i32) -> Result<Self, ProtocolError> {
        u8::try_from(index)
            .ok()
            .and_then(Self::from_raw)
            .ok_or(ProtocolError::InvalidParameter(Parameter::Palette))
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Compiled-in colors of a preset palette.
    ///
    /// Returns `None` for `Custom`, whose colors live in the device state.
    pub const fn preset_colors(self) -> Option<&'static [Rgb]> {
        let colors: &'static [Rgb] = match self {
            Self::Custom => return None,
            Self::Water => &WATER,
            Self::Frozen => &FROZEN,
            Self::Snow => &SNOW,
            Self::Cool => &COOL,
            Self::Warm => &WARM,
            Self::Fire => &FIRE,
            Self::Evil => &EVIL,
            Self::Corrosive => &CORROSIVE,
            Self::Poison => &POISON,
            Self::Rose => &ROSE,
            Self::PinkGreen => &PINK_GREEN,
            Self::RedWhiteBlue => &RED_WHITE_BLUE,
            Self::Rgb => &RGB,
            Self::Cmy => &CMY,
            Self::SevenColor => &SEVEN_COLOR,
            Self::All => &ALL,
        };
        Some(colors)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Water => "water",
            Self::Frozen => "frozen",
            Self::Snow => "snow",
            Self::Cool => "cool",
            Self::Warm => "warm",
            Self::Fire => "fire",
            Self::Evil => "evil",
            Self::Corrosive => "corrosive",
            Self::Poison => "poison",
            Self::Rose => "rose",
            Self::PinkGreen => "pink_green",
            Self::RedWhiteBlue => "red_white_blue",
            Self::Rgb => "rgb",
            Self::Cmy => "cmy",
            Self::SevenColor => "seven_color",
            Self::All => "all",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        (0..PALETTE_MAX)
            .filter_map(Self::from_raw)
            .find(|palette| palette.as_str() == s)
    }
}
