//! Paint colors used while compositing textures.

/// An opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Construct from individual channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Construct from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Attach an alpha value to make a paint.
    pub const fn with_alpha(self, alpha: f32) -> Paint {
        Paint { rgb: self, alpha }
    }
}

/// A color with straight (non-premultiplied) fractional alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Paint {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        rgb: Rgb::new(0, 0, 0),
        alpha: 0.0,
    };

    /// Linear interpolation between two paints, `t` in `[0, 1]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Self {
            rgb: Rgb::new(
                mix(self.rgb.r, other.rgb.r),
                mix(self.rgb.g, other.rgb.g),
                mix(self.rgb.b, other.rgb.b),
            ),
            alpha: self.alpha + (other.alpha - self.alpha) * t,
        }
    }
}

impl From<Rgb> for Paint {
    fn from(rgb: Rgb) -> Self {
        rgb.with_alpha(1.0)
    }
}

/// Clamp an accumulated channel value into the displayable byte range.
#[inline]
pub fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
