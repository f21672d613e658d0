use crate::constants::{COLOR_FALLBACK, COLOR_FAR, COLOR_MID, COLOR_NEAR, MAX_DRAG_DISTANCE};
use std::fmt;

/// Linear-light RGB color with components in `0..=1`.
///
/// Hex input and output are sRGB-encoded; blending happens in linear space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

impl Rgb {
    /// From an sRGB `0xRRGGBB` value.
    pub fn from_u32(hex: u32) -> Self {
        let ch = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
        Self {
            r: ch(16),
            g: ch(8),
            b: ch(0),
        }
    }

    /// Parse `#rrggbb`, `rrggbb` or `0xrrggbb`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .unwrap_or(s);
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_u32)
    }

    #[inline]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// sRGB `0xRRGGBB`.
    pub fn to_u32(self) -> u32 {
        let q = |c: f32| ((linear_to_srgb(c.clamp(0.0, 1.0)) * 255.0).round() as u32) & 0xff;
        (q(self.r) << 16) | (q(self.g) << 8) | q(self.b)
    }

    /// Lowercase sRGB `#rrggbb`.
    pub fn to_hex_string(self) -> String {
        self.to_string()
    }

    #[inline]
    pub fn to_array(self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_u32())
    }
}

/// Gradient stops for the drag line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub near: Rgb,
    pub mid: Rgb,
    pub far: Rgb,
    pub max_distance: f32,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            near: Rgb::from_u32(COLOR_NEAR),
            mid: Rgb::from_u32(COLOR_MID),
            far: Rgb::from_u32(COLOR_FAR),
            max_distance: MAX_DRAG_DISTANCE,
        }
    }
}

impl Gradient {
    /// Stops as sRGB hex strings; `None` if any fails to parse or the
    /// distance is not a positive finite number.
    pub fn from_hex(near: &str, mid: &str, far: &str, max_distance: f32) -> Option<Self> {
        if !(max_distance.is_finite() && max_distance > 0.0) {
            return None;
        }
        Some(Self {
            near: Rgb::from_hex(near)?,
            mid: Rgb::from_hex(mid)?,
            far: Rgb::from_hex(far)?,
            max_distance,
        })
    }

    /// Map a drag distance to a color: near→mid over the first half of
    /// `max_distance`, mid→far over the second half, saturating at far.
    pub fn sample(&self, distance: f32) -> Rgb {
        let half = self.max_distance * 0.5;
        if half <= 0.0 {
            return self.far;
        }
        // NaN and negatives collapse to the near stop
        let d = if distance.is_nan() {
            0.0
        } else {
            distance.clamp(0.0, self.max_distance)
        };
        if d <= half {
            self.near.lerp(self.mid, d / half)
        } else {
            self.mid.lerp(self.far, (d - half) / half)
        }
    }
}

#[inline]
pub fn fallback_color() -> Rgb {
    Rgb::from_u32(COLOR_FALLBACK)
}
