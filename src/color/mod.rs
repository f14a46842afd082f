mod utils;

use smart_leds::RGB8;
pub use utils::{average_color, clamp_channel, rgb_from_u32};

pub type Rgb = RGB8;

pub const GREEN: Rgb = rgb_from_u32(0x00_FF_00);
