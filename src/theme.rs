//! Vibe palettes - cosmetic style bundles selected by [`ThemeKey`]
//!
//! Colors are plain sRGB so the library stays independent of any renderer;
//! the terminal front end maps them onto its own color type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;

/// 8-bit sRGB color
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::hex(0x000000);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    /// Linear blend toward `other`; `t` is clamped to 0.0..=1.0
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Color with straight alpha, used for the soft glow behind the preview
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
            alpha,
        }
    }

    /// Composite over an opaque background
    pub fn over(self, background: Rgb) -> Rgb {
        background.lerp(self.rgb, self.alpha)
    }
}

/// Three-stop gradient (from, via, to)
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Rgb,
    pub via: Rgb,
    pub to: Rgb,
}

impl Gradient {
    pub const fn new(from: Rgb, via: Rgb, to: Rgb) -> Self {
        Self { from, via, to }
    }

    /// Sample at position `t` in 0.0..=1.0
    pub fn sample(&self, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.5 {
            self.from.lerp(self.via, t * 2.0)
        } else {
            self.via.lerp(self.to, (t - 0.5) * 2.0)
        }
    }

    /// Evenly spaced colors across `count` cells, e.g. one per character
    pub fn spread(&self, count: usize) -> Vec<Rgb> {
        match count {
            0 => Vec::new(),
            1 => vec![self.from],
            n => (0..n)
                .map(|i| self.sample(i as f32 / (n - 1) as f32))
                .collect(),
        }
    }
}

/// Style bundle for one palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeStyle {
    pub label: &'static str,
    /// Chant text gradient
    pub accent: Gradient,
    /// Soft halo behind the preview card
    pub glow: Rgba,
    /// Highlight ring around the selected cadence
    pub ring: Rgb,
    /// Page background
    pub backdrop: Gradient,
}

// Tailwind palette values
const SLATE_900: Rgb = Rgb::hex(0x0f172a);
const SLATE_950: Rgb = Rgb::hex(0x020617);
const SKY_400: Rgb = Rgb::hex(0x38bdf8);
const PURPLE_400: Rgb = Rgb::hex(0xc084fc);

const AURORA: ThemeStyle = ThemeStyle {
    label: "Aurora",
    accent: Gradient::new(Rgb::hex(0x6ee7b7), SKY_400, Rgb::hex(0x6366f1)),
    glow: Rgba::new(56, 189, 248, 0.3),
    ring: SKY_400,
    backdrop: Gradient::new(SLATE_900, SLATE_950, Rgb::BLACK),
};

const SUNRISE: ThemeStyle = ThemeStyle {
    label: "Sunrise",
    accent: Gradient::new(Rgb::hex(0xfde68a), Rgb::hex(0xfda4af), PURPLE_400),
    glow: Rgba::new(251, 191, 36, 0.35),
    ring: Rgb::hex(0xfcd34d),
    backdrop: Gradient::new(Rgb::hex(0x881337), Rgb::hex(0x581c87), SLATE_900),
};

const MIDNIGHT: ThemeStyle = ThemeStyle {
    label: "Midnight",
    accent: Gradient::new(Rgb::hex(0xc4b5fd), Rgb::hex(0xa855f7), Rgb::hex(0x60a5fa)),
    glow: Rgba::new(139, 92, 246, 0.32),
    ring: PURPLE_400,
    backdrop: Gradient::new(SLATE_950, SLATE_900, Rgb::hex(0x1e1b4b)),
};

/// Named palette
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeKey {
    #[default]
    Aurora,
    Sunrise,
    Midnight,
}

impl ThemeKey {
    pub const ALL: [ThemeKey; 3] = [ThemeKey::Aurora, ThemeKey::Sunrise, ThemeKey::Midnight];

    const NAMES: &'static [&'static str] = &["aurora", "sunrise", "midnight"];

    pub fn style(self) -> &'static ThemeStyle {
        match self {
            ThemeKey::Aurora => &AURORA,
            ThemeKey::Sunrise => &SUNRISE,
            ThemeKey::Midnight => &MIDNIGHT,
        }
    }

    pub fn label(self) -> &'static str {
        self.style().label
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeKey::Aurora => "aurora",
            ThemeKey::Sunrise => "sunrise",
            ThemeKey::Midnight => "midnight",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ThemeKey::Aurora => ThemeKey::Sunrise,
            ThemeKey::Sunrise => ThemeKey::Midnight,
            ThemeKey::Midnight => ThemeKey::Aurora,
        }
    }
}

impl std::fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ThemeKey {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aurora" => Ok(ThemeKey::Aurora),
            "sunrise" => Ok(ThemeKey::Sunrise),
            "midnight" => Ok(ThemeKey::Midnight),
            _ => Err(ParseNameError::Unknown {
                kind: "theme",
                input: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_unpacks_channels() {
        assert_eq!(Rgb::hex(0x38bdf8), Rgb::new(0x38, 0xbd, 0xf8));
    }

    #[test]
    fn test_gradient_endpoints_and_midpoint() {
        let g = ThemeKey::Aurora.style().accent;
        assert_eq!(g.sample(0.0), g.from);
        assert_eq!(g.sample(0.5), g.via);
        assert_eq!(g.sample(1.0), g.to);
        assert_eq!(g.sample(7.0), g.to);
    }

    #[test]
    fn test_spread_counts() {
        let g = ThemeKey::Sunrise.style().accent;
        assert!(g.spread(0).is_empty());
        assert_eq!(g.spread(1), vec![g.from]);
        let cells = g.spread(5);
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0], g.from);
        assert_eq!(cells[2], g.via);
        assert_eq!(cells[4], g.to);
    }

    #[test]
    fn test_glow_over_black_is_dimmed() {
        let glow = ThemeKey::Midnight.style().glow;
        let composite = glow.over(Rgb::BLACK);
        assert!(composite.r < glow.rgb.r);
        assert!(composite.b < glow.rgb.b);
    }

    #[test]
    fn test_each_theme_has_distinct_style() {
        let labels: Vec<&str> = ThemeKey::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels, vec!["Aurora", "Sunrise", "Midnight"]);
        assert_ne!(ThemeKey::Aurora.style(), ThemeKey::Sunrise.style());
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("Midnight".parse::<ThemeKey>(), Ok(ThemeKey::Midnight));
        assert!("dusk".parse::<ThemeKey>().is_err());
        assert_eq!(ThemeKey::Midnight.next(), ThemeKey::Aurora);
    }
}
