//! User-editable custom color array
//!
//! Storage is fixed at compile time; the runtime capacity and the number of
//! colors in use are both bounded by it. Entries past the used count keep
//! their values so raising the count restores them.

use crate::color::{Rgb, rgb_from_u32};
use crate::error::RejectedReason;

/// Repeating pattern the array is filled with on reset
pub const DEFAULT_PATTERN: [Rgb; 5] = [
    // green
    rgb_from_u32(0x00_FF_00),
    // violet
    rgb_from_u32(0x7D_00_FF),
    // blue
    rgb_from_u32(0x00_00_FF),
    // dark green
    rgb_from_u32(0x28_7F_28),
    // purple
    rgb_from_u32(0x3C_00_A0),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomColors<const N: usize> {
    colors: [Rgb; N],
    capacity: usize,
    default_capacity: usize,
    used: usize,
}

impl<const N: usize> CustomColors<N> {
    /// Create an array filled with the default pattern, all entries in use
    pub fn new(capacity: usize) -> Result<Self, RejectedReason> {
        check_capacity::<N>(capacity)?;
        let mut colors = Self {
            colors: [Rgb::default(); N],
            capacity,
            default_capacity: capacity,
            used: capacity,
        };
        colors.fill_default_pattern();
        Ok(colors)
    }

    /// Restore the initial capacity, tile the default pattern over the whole
    /// storage and use every entry
    pub fn reset(&mut self) {
        self.fill_default_pattern();
        self.capacity = self.default_capacity;
        self.used = self.capacity;
    }

    fn fill_default_pattern(&mut self) {
        for (slot, color) in self.colors.iter_mut().zip(DEFAULT_PATTERN.iter().cycle()) {
            *slot = *color;
        }
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub const fn used(&self) -> usize {
        self.used
    }

    /// Colors that participate in rendering
    pub fn active(&self) -> &[Rgb] {
        &self.colors[..self.used]
    }

    /// Every entry up to the capacity, used or not
    pub fn all(&self) -> &[Rgb] {
        &self.colors[..self.capacity]
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.all().get(index).copied()
    }

    pub fn set(&mut self, index: usize, color: Rgb) -> Result<(), RejectedReason> {
        if index >= self.capacity {
            return Err(RejectedReason::IndexAboveCapacity {
                index,
                capacity: self.capacity,
            });
        }
        self.colors[index] = color;
        Ok(())
    }

    pub fn set_used(&mut self, count: usize) -> Result<(), RejectedReason> {
        if count > self.capacity {
            return Err(RejectedReason::CountAboveCapacity {
                count,
                capacity: self.capacity,
            });
        }
        self.used = count;
        Ok(())
    }

    /// Reconfigure the runtime capacity.
    ///
    /// Shrinking below the used count lowers the used count with it.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), RejectedReason> {
        check_capacity::<N>(capacity)?;
        self.capacity = capacity;
        self.used = self.used.min(capacity);
        Ok(())
    }
}

const fn check_capacity<const N: usize>(capacity: usize) -> Result<(), RejectedReason> {
    if capacity == 0 || capacity > N {
        return Err(RejectedReason::CapacityOutOfRange { capacity, max: N });
    }
    Ok(())
}
