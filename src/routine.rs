//! Lighting routines and the routine/palette coupling
//!
//! Routine ids are part of the wire format. New routines must be appended,
//! existing ids never change.

use crate::error::{Parameter, ProtocolError};
use crate::palette::Palette;

const ROUTINE_NAME_OFF: &str = "off";
const ROUTINE_NAME_SINGLE_SOLID: &str = "single_solid";
const ROUTINE_NAME_SINGLE_BLINK: &str = "single_blink";
const ROUTINE_NAME_SINGLE_WAVE: &str = "single_wave";
const ROUTINE_NAME_SINGLE_GLIMMER: &str = "single_glimmer";
const ROUTINE_NAME_SINGLE_LINEAR_FADE: &str = "single_linear_fade";
const ROUTINE_NAME_SINGLE_SINE_FADE: &str = "single_sine_fade";
const ROUTINE_NAME_SINGLE_SAWTOOTH_FADE_IN: &str = "single_sawtooth_fade_in";
const ROUTINE_NAME_SINGLE_SAWTOOTH_FADE_OUT: &str = "single_sawtooth_fade_out";
const ROUTINE_NAME_MULTI_GLIMMER: &str = "multi_glimmer";
const ROUTINE_NAME_MULTI_FADE: &str = "multi_fade";
const ROUTINE_NAME_MULTI_RANDOM_SOLID: &str = "multi_random_solid";
const ROUTINE_NAME_MULTI_RANDOM_INDIVIDUAL: &str = "multi_random_individual";
const ROUTINE_NAME_MULTI_BARS_SOLID: &str = "multi_bars_solid";
const ROUTINE_NAME_MULTI_BARS_MOVING: &str = "multi_bars_moving";

const ROUTINE_ID_OFF: u8 = 0;
const ROUTINE_ID_SINGLE_SOLID: u8 = 1;
const ROUTINE_ID_SINGLE_BLINK: u8 = 2;
const ROUTINE_ID_SINGLE_WAVE: u8 = 3;
const ROUTINE_ID_SINGLE_GLIMMER: u8 = 4;
const ROUTINE_ID_SINGLE_LINEAR_FADE: u8 = 5;
const ROUTINE_ID_SINGLE_SINE_FADE: u8 = 6;
const ROUTINE_ID_SINGLE_SAWTOOTH_FADE_IN: u8 = 7;
const ROUTINE_ID_SINGLE_SAWTOOTH_FADE_OUT: u8 = 8;
const ROUTINE_ID_MULTI_GLIMMER: u8 = 9;
const ROUTINE_ID_MULTI_FADE: u8 = 10;
const ROUTINE_ID_MULTI_RANDOM_SOLID: u8 = 11;
const ROUTINE_ID_MULTI_RANDOM_INDIVIDUAL: u8 = 12;
const ROUTINE_ID_MULTI_BARS_SOLID: u8 = 13;
const ROUTINE_ID_MULTI_BARS_MOVING: u8 = 14;

/// Number of known routines
pub const ROUTINE_MAX: u8 = 15;

/// Which kind of color source a routine consumes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutineFamily {
    /// Lights are off, no color source
    Off,
    /// Operates on the main color
    SingleColor,
    /// Operates on a palette
    MultiColor,
}

/// Known routine ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Routine {
    Off = ROUTINE_ID_OFF,
    SingleSolid = ROUTINE_ID_SINGLE_SOLID,
    SingleBlink = ROUTINE_ID_SINGLE_BLINK,
    SingleWave = ROUTINE_ID_SINGLE_WAVE,
    SingleGlimmer = ROUTINE_ID_SINGLE_GLIMMER,
    SingleLinearFade = ROUTINE_ID_SINGLE_LINEAR_FADE,
    SingleSineFade = ROUTINE_ID_SINGLE_SINE_FADE,
    SingleSawtoothFadeIn = ROUTINE_ID_SINGLE_SAWTOOTH_FADE_IN,
    SingleSawtoothFadeOut = ROUTINE_ID_SINGLE_SAWTOOTH_FADE_OUT,
    MultiGlimmer = ROUTINE_ID_MULTI_GLIMMER,
    MultiFade = ROUTINE_ID_MULTI_FADE,
    MultiRandomSolid = ROUTINE_ID_MULTI_RANDOM_SOLID,
    MultiRandomIndividual = ROUTINE_ID_MULTI_RANDOM_INDIVIDUAL,
    MultiBarsSolid = ROUTINE_ID_MULTI_BARS_SOLID,
    MultiBarsMoving = ROUTINE_ID_MULTI_BARS_MOVING,
}

impl Routine {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ROUTINE_ID_OFF => Self::Off,
            ROUTINE_ID_SINGLE_SOLID => Self::SingleSolid,
            ROUTINE_ID_SINGLE_BLINK => Self::SingleBlink,
            ROUTINE_ID_SINGLE_WAVE => Self::SingleWave,
            ROUTINE_ID_SINGLE_GLIMMER => Self::SingleGlimmer,
            ROUTINE_ID_SINGLE_LINEAR_FADE => Self::SingleLinearFade,
            ROUTINE_ID_SINGLE_SINE_FADE => Self::SingleSineFade,
            ROUTINE_ID_SINGLE_SAWTOOTH_FADE_IN => Self::SingleSawtoothFadeIn,
            ROUTINE_ID_SINGLE_SAWTOOTH_FADE_OUT => Self::SingleSawtoothFadeOut,
            ROUTINE_ID_MULTI_GLIMMER => Self::MultiGlimmer,
            ROUTINE_ID_MULTI_FADE => Self::MultiFade,
            ROUTINE_ID_MULTI_RANDOM_SOLID => Self::MultiRandomSolid,
            ROUTINE_ID_MULTI_RANDOM_INDIVIDUAL => Self::MultiRandomIndividual,
            ROUTINE_ID_MULTI_BARS_SOLID => Self::MultiBarsSolid,
            ROUTINE_ID_MULTI_BARS_MOVING => Self::MultiBarsMoving,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn family(self) -> RoutineFamily {
        match self {
            Self::Off => RoutineFamily::Off,
            Self::SingleSolid
            | Self::SingleBlink
            | Self::SingleWave
            | Self::SingleGlimmer
            | Self::SingleLinearFade
            | Self::SingleSineFade
            | Self::SingleSawtoothFadeIn
            | Self::SingleSawtoothFadeOut => RoutineFamily::SingleColor,
            Self::MultiGlimmer
            | Self::MultiFade
            | Self::MultiRandomSolid
            | Self::MultiRandomIndividual
            | Self::MultiBarsSolid
            | Self::MultiBarsMoving => RoutineFamily::MultiColor,
        }
    }

    /// Returns true if the routine must be paired with a palette
    pub const fn requires_palette(self) -> bool {
        matches!(self.family(), RoutineFamily::MultiColor)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => ROUTINE_NAME_OFF,
            Self::SingleSolid => ROUTINE_NAME_SINGLE_SOLID,
            Self::SingleBlink => ROUTINE_NAME_SINGLE_BLINK,
            Self::SingleWave => ROUTINE_NAME_SINGLE_WAVE,
            Self::SingleGlimmer => ROUTINE_NAME_SINGLE_GLIMMER,
            Self::SingleLinearFade => ROUTINE_NAME_SINGLE_LINEAR_FADE,
            Self::SingleSineFade => ROUTINE_NAME_SINGLE_SINE_FADE,
            Self::SingleSawtoothFadeIn => ROUTINE_NAME_SINGLE_SAWTOOTH_FADE_IN,
            Self::SingleSawtoothFadeOut => ROUTINE_NAME_SINGLE_SAWTOOTH_FADE_OUT,
            Self::MultiGlimmer => ROUTINE_NAME_MULTI_GLIMMER,
            Self::MultiFade => ROUTINE_NAME_MULTI_FADE,
            Self::MultiRandomSolid => ROUTINE_NAME_MULTI_RANDOM_SOLID,
            Self::MultiRandomIndividual => ROUTINE_NAME_MULTI_RANDOM_INDIVIDUAL,
            Self::MultiBarsSolid => ROUTINE_NAME_MULTI_BARS_SOLID,
            Self::MultiBarsMoving => ROUTINE_NAME_MULTI_BARS_MOVING,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        (0..ROUTINE_MAX)
            .filter_map(Self::from_raw)
            .find(|routine| routine.as_str() == s)
    }
}

/// Current routine together with its color source.
///
/// A multi-color routine always carries a palette, the others never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Off,
    Single(Routine),
    Multi(Routine, Palette),
}

impl Mode {
    /// Pair a routine with an optional palette
    pub fn new(routine: Routine, palette: Option<Palette>) -> Result<Self, ProtocolError> {
        match (routine.family(), palette) {
            (RoutineFamily::Off, None) => Ok(Self::Off),
            (RoutineFamily::SingleColor, None) => Ok(Self::Single(routine)),
            (RoutineFamily::MultiColor, Some(palette)) => Ok(Self::Multi(routine, palette)),
            (RoutineFamily::MultiColor, None) => {
                Err(ProtocolError::InvalidParameter(Parameter::MissingPalette))
            }
            (RoutineFamily::Off | RoutineFamily::SingleColor, Some(_)) => {
                Err(ProtocolError::InvalidParameter(Parameter::UnexpectedPalette))
            }
        }
    }

    /// Pair a routine with an optional raw palette index
    pub fn from_raw(routine: Routine, palette: Option<i32>) -> Result<Self, ProtocolError> {
        let palette = match palette {
            Some(raw) => Some(Palette::from_index(raw)?),
            None => None,
        };
        Self::new(routine, palette)
    }

    pub const fn routine(self) -> Routine {
        match self {
            Self::Off => Routine::Off,
            Self::Single(routine) | Self::Multi(routine, _) => routine,
        }
    }

    pub const fn palette(self) -> Option<Palette> {
        match self {
            Self::Multi(_, palette) => Some(palette),
            Self::Off | Self::Single(_) => None,
        }
    }

    pub const fn is_off(self) -> bool {
        matches!(self, Self::Off)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Single(Routine::SingleSolid)
    }
}
