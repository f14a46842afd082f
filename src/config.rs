use crate::color::{GREEN, Rgb};
use crate::routine::Mode;

/// Default storage for the custom color array
pub const DEFAULT_CUSTOM_CAPACITY: usize = 10;

pub const DEFAULT_BRIGHTNESS: u8 = 50;

/// 3 FPS
pub const DEFAULT_SPEED: u32 = 300;

/// Minutes
pub const DEFAULT_IDLE_TIMEOUT: u32 = 120;

pub const DEFAULT_MAIN_COLOR: Rgb = GREEN;

/// Values a device state starts from and returns to on reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Runtime capacity of the custom color array
    pub custom_capacity: usize,
    pub brightness: u8,
    /// Desired FPS times 100
    pub speed: u32,
    /// Minutes of inactivity before switching off, 0 disables
    pub idle_timeout: u32,
    pub mode: Mode,
    pub main_color: Rgb,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            custom_capacity: DEFAULT_CUSTOM_CAPACITY,
            brightness: DEFAULT_BRIGHTNESS,
            speed: DEFAULT_SPEED,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            mode: Mode::default(),
            main_color: DEFAULT_MAIN_COLOR,
        }
    }
}
