use crate::{Scalar, utils::clamp};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Color in hue, saturation, brightness form, all components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsb {
    pub hue: Scalar,
    pub saturation: Scalar,
    pub brightness: Scalar,
}

impl Hsb {
    pub fn new(hue: Scalar, saturation: Scalar, brightness: Scalar) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Linear interpolation between self and other colors
    pub fn lerp(self, other: Self, t: Scalar) -> Self {
        let t = clamp(t, 0.0, 1.0);
        Self {
            hue: self.hue * (1.0 - t) + other.hue * t,
            saturation: self.saturation * (1.0 - t) + other.saturation * t,
            brightness: self.brightness * (1.0 - t) + other.brightness * t,
        }
    }
}

/// ABGR color packed as u32 value
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RGBA(u32);

impl RGBA {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32))
    }

    pub const fn alpha(self) -> u8 {
        ((self.0 >> 24) & 0xff) as u8
    }

    pub const fn blue(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    pub fn to_rgba(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl From<Hsb> for RGBA {
    fn from(color: Hsb) -> Self {
        let hue = color.hue.rem_euclid(1.0) * 6.0;
        let s = clamp(color.saturation, 0.0, 1.0);
        let v = clamp(color.brightness, 0.0, 1.0);
        let sector = hue.floor();
        let f = hue - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        let byte = |value: Scalar| (value * 255.0 + 0.5) as u8;
        RGBA::new(byte(r), byte(g), byte(b), 255)
    }
}

impl fmt::Debug for RGBA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA({})", self)
    }
}

impl fmt::Display for RGBA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)?;
        if a != 255 {
            write!(f, "{:02x}", a)?;
        }
        Ok(())
    }
}

impl FromStr for RGBA {
    type Err = ColorError;

    fn from_str(color: &str) -> Result<Self, Self::Err> {
        let digits = match color.strip_prefix('#') {
            Some(digits) if digits.len() == 6 || digits.len() == 8 => digits.as_bytes(),
            _ => return Err(ColorError::HexExpected),
        };
        let digit = |byte: u8| match byte {
            b'A'..=b'F' => Ok(byte - b'A' + 10),
            b'a'..=b'f' => Ok(byte - b'a' + 10),
            b'0'..=b'9' => Ok(byte - b'0'),
            _ => Err(ColorError::HexExpected),
        };
        let mut channels = [255u8; 4];
        for (channel, pair) in channels.iter_mut().zip(digits.chunks(2)) {
            *channel = (digit(pair[0])? << 4) | digit(pair[1])?;
        }
        let [r, g, b, a] = channels;
        Ok(RGBA::new(r, g, b, a))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    HexExpected,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::HexExpected => {
                write!(f, "Color expected to be #RRGGBB(AA) in hexadecimal format")
            }
        }
    }
}

impl std::error::Error for ColorError {}
