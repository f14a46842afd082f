//! Device state mirror
//!
//! Single record of the current lighting configuration. Every change goes
//! through [`DeviceState::apply`], which validates before it mutates, so a
//! rejected command leaves the state untouched.

use crate::color::{Rgb, average_color};
use crate::command::{Command, MAX_BRIGHTNESS};
use crate::config::{DEFAULT_CUSTOM_CAPACITY, DeviceConfig};
use crate::custom_colors::CustomColors;
use crate::error::{Parameter, ProtocolError, RejectedReason};
use crate::palette::Palette;
use crate::routine::{Mode, Routine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState<const MAX_CUSTOM_COLORS: usize = DEFAULT_CUSTOM_CAPACITY> {
    config: DeviceConfig,
    mode: Mode,
    main_color: Rgb,
    brightness: u8,
    speed: u32,
    idle_timeout: u32,
    custom: CustomColors<MAX_CUSTOM_COLORS>,
}

impl<const MAX_CUSTOM_COLORS: usize> DeviceState<MAX_CUSTOM_COLORS> {
    /// Create a state from the given defaults
    pub fn new(config: DeviceConfig) -> Result<Self, RejectedReason> {
        check_config(&config)?;
        Ok(Self {
            config,
            mode: config.mode,
            main_color: config.main_color,
            brightness: config.brightness,
            speed: config.speed,
            idle_timeout: config.idle_timeout,
            custom: CustomColors::new(config.custom_capacity)?,
        })
    }

    /// Restore the defaults the state was created with
    pub fn reset(&mut self) {
        self.mode = self.config.mode;
        self.main_color = self.config.main_color;
        self.brightness = self.config.brightness;
        self.speed = self.config.speed;
        self.idle_timeout = self.config.idle_timeout;
        self.custom.reset();
    }

    /// Apply a command, checking it against the current configuration
    pub fn apply(&mut self, command: &Command) -> Result<(), RejectedReason> {
        match *command {
            Command::ModeChange(mode) => {
                self.mode = Mode::new(mode.routine(), mode.palette())
                    .map_err(RejectedReason::Invalid)?;
            }
            Command::MainColorChange(color) => self.main_color = color,
            Command::CustomArrayColorChange { index, color } => self.custom.set(index, color)?,
            Command::BrightnessChange(value) => {
                if value > MAX_BRIGHTNESS {
                    return Err(invalid(Parameter::Brightness));
                }
                self.brightness = value;
            }
            Command::SpeedChange(value) => {
                if value == 0 {
                    return Err(invalid(Parameter::Speed));
                }
                self.speed = value;
            }
            Command::CustomColorCountChange(count) => self.custom.set_used(count)?,
            Command::IdleTimeoutChange(minutes) => self.idle_timeout = minutes,
            Command::ResetSettingsToDefaults => self.reset(),
            Command::StateUpdateRequest => {}
        }
        Ok(())
    }

    /// Reconfigure the custom color capacity
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), RejectedReason> {
        self.custom.set_capacity(capacity)
    }

    /// Mean of the active colors of a palette.
    ///
    /// Fails with [`RejectedReason::EmptyPalette`] when no color is active.
    pub fn average_color(&self, palette: Palette) -> Result<Rgb, RejectedReason> {
        let colors = palette.preset_colors().unwrap_or(self.custom.active());
        average_color(colors).ok_or(RejectedReason::EmptyPalette)
    }

    /// Visit the commands that rebuild this state on a remote mirror holding
    /// `capacity` custom colors.
    ///
    /// Custom entries at or above `capacity` are left out and the used count
    /// is clamped to it, so every command fits the remote.
    pub fn for_each_report_command<F: FnMut(Command)>(&self, capacity: usize, mut visit: F) {
        visit(Command::ModeChange(self.mode));
        visit(Command::MainColorChange(self.main_color));
        visit(Command::BrightnessChange(self.brightness));
        visit(Command::SpeedChange(self.speed));
        visit(Command::IdleTimeoutChange(self.idle_timeout));
        for (index, &color) in self.custom.all().iter().take(capacity).enumerate() {
            visit(Command::CustomArrayColorChange { index, color });
        }
        visit(Command::CustomColorCountChange(self.custom.used().min(capacity)));
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn routine(&self) -> Routine {
        self.mode.routine()
    }

    pub const fn palette(&self) -> Option<Palette> {
        self.mode.palette()
    }

    pub const fn main_color(&self) -> Rgb {
        self.main_color
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn speed(&self) -> u32 {
        self.speed
    }

    pub const fn idle_timeout(&self) -> u32 {
        self.idle_timeout
    }

    pub const fn custom_colors(&self) -> &CustomColors<MAX_CUSTOM_COLORS> {
        &self.custom
    }

    pub const fn custom_capacity(&self) -> usize {
        self.custom.capacity()
    }

    pub const fn custom_used(&self) -> usize {
        self.custom.used()
    }
}

fn check_config(config: &DeviceConfig) -> Result<(), RejectedReason> {
    if config.brightness > MAX_BRIGHTNESS {
        return Err(invalid(Parameter::Brightness));
    }
    if config.speed == 0 {
        return Err(invalid(Parameter::Speed));
    }
    Mode::new(config.mode.routine(), config.mode.palette()).map_err(RejectedReason::Invalid)?;
    Ok(())
}

const fn invalid(parameter: Parameter) -> RejectedReason {
    RejectedReason::Invalid(ProtocolError::InvalidParameter(parameter))
}
