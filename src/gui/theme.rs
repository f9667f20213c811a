// src/gui/theme.rs
use eframe::egui::Color32;

use crate::render::Tone;

// Tailwind-ish shades
pub const GREEN_50: Color32 = Color32::from_rgb(240, 253, 244);
pub const GREEN_200: Color32 = Color32::from_rgb(187, 247, 208);
pub const GREEN_500: Color32 = Color32::from_rgb(34, 197, 94);
pub const GREEN_600: Color32 = Color32::from_rgb(22, 163, 74);

pub const RED_50: Color32 = Color32::from_rgb(254, 242, 242);
pub const RED_200: Color32 = Color32::from_rgb(254, 202, 202);
pub const RED_500: Color32 = Color32::from_rgb(239, 68, 68);
pub const RED_600: Color32 = Color32::from_rgb(220, 38, 38);
pub const RED_700: Color32 = Color32::from_rgb(185, 28, 28);

pub const BLUE_100: Color32 = Color32::from_rgb(219, 234, 254);
pub const BLUE_600: Color32 = Color32::from_rgb(37, 99, 235);

pub const GRAY_300: Color32 = Color32::from_rgb(209, 213, 219);
pub const GRAY_400: Color32 = Color32::from_rgb(156, 163, 175);
pub const GRAY_500: Color32 = Color32::from_rgb(107, 114, 128);
pub const GRAY_600: Color32 = Color32::from_rgb(75, 85, 99);
pub const GRAY_800: Color32 = Color32::from_rgb(31, 41, 55);

/// Colours for one verdict card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub text: Color32,
    pub fill: Color32,
    pub border: Color32,
    pub bar: Color32,
}

pub fn palette(tone: Tone) -> Palette {
    match tone {
        Tone::Affirmative => Palette { text: GREEN_600, fill: GREEN_50, border: GREEN_200, bar: GREEN_500 },
        Tone::Negative => Palette { text: RED_600, fill: RED_50, border: RED_200, bar: RED_500 },
    }
}
