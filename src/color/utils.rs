use crate::color::Rgb;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Clamp an arbitrary integer into a color channel
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn clamp_channel(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// Arithmetic mean of a set of colors, per channel.
///
/// Returns `None` for an empty set.
#[allow(clippy::cast_possible_truncation)]
pub fn average_color(colors: &[Rgb]) -> Option<Rgb> {
    if colors.is_empty() {
        return None;
    }
    let (r, g, b) = colors.iter().fold((0u32, 0u32, 0u32), |(r, g, b), c| {
        (r + u32::from(c.r), g + u32::from(c.g), b + u32::from(c.b))
    });
    let count = colors.len() as u32;
    Some(Rgb {
        r: (r / count) as u8,
        g: (g / count) as u8,
        b: (b / count) as u8,
    })
}
