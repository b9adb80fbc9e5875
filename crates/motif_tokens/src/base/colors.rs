//! Base color palette
//!
//! Raw color values with no usage meaning attached. The constants are the
//! single source of truth; [`BaseColors::STANDARD`] groups them for the
//! semantic composer.

use serde::Serialize;

pub const BLACK: &str = "#000000";
pub const WHITE: &str = "#FFFFFF";

/// Neutral gray ramp
pub mod gray {
    pub const GRAY_50: &str = "#F9FAFB";
    pub const GRAY_100: &str = "#F3F4F6";
    pub const GRAY_200: &str = "#E5E7EB";
    pub const GRAY_300: &str = "#D1D5DB";
    pub const GRAY_400: &str = "#9CA3AF";
    pub const GRAY_500: &str = "#6B7280";
    pub const GRAY_600: &str = "#4B5563";
    pub const GRAY_700: &str = "#374151";
    pub const GRAY_800: &str = "#1F2937";
    pub const GRAY_900: &str = "#111827";
}

/// Brand colors
pub mod brand {
    pub const PRIMARY: &str = "#000000";
    pub const SECONDARY: &str = "#FFFFFF";
    pub const ACCENT: &str = "#6366F1";
}

/// Status colors
pub mod status {
    pub const SUCCESS: &str = "#10B981";
    pub const WARNING: &str = "#F59E0B";
    pub const ERROR: &str = "#EF4444";
    pub const INFO: &str = "#3B82F6";
}

/// Zone accent pairs
pub mod zones {
    pub const PROBLEM_PRIMARY: &str = "#FF6B6B";
    pub const PROBLEM_SECONDARY: &str = "#845EC2";
    pub const PROJECT_PRIMARY: &str = "#4D8076";
    pub const PROJECT_SECONDARY: &str = "#2C73D2";
    pub const LAUNCH_PRIMARY: &str = "#008F7A";
    pub const LAUNCH_SECONDARY: &str = "#0081CF";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GrayScale {
    #[serde(rename = "50")]
    pub gray_50: &'static str,
    #[serde(rename = "100")]
    pub gray_100: &'static str,
    #[serde(rename = "200")]
    pub gray_200: &'static str,
    #[serde(rename = "300")]
    pub gray_300: &'static str,
    #[serde(rename = "400")]
    pub gray_400: &'static str,
    #[serde(rename = "500")]
    pub gray_500: &'static str,
    #[serde(rename = "600")]
    pub gray_600: &'static str,
    #[serde(rename = "700")]
    pub gray_700: &'static str,
    #[serde(rename = "800")]
    pub gray_800: &'static str,
    #[serde(rename = "900")]
    pub gray_900: &'static str,
}

impl GrayScale {
    /// Look up a shade by its numeric step (50, 100, ..., 900)
    pub fn shade(&self, step: u16) -> Option<&'static str> {
        match step {
            50 => Some(self.gray_50),
            100 => Some(self.gray_100),
            200 => Some(self.gray_200),
            300 => Some(self.gray_300),
            400 => Some(self.gray_400),
            500 => Some(self.gray_500),
            600 => Some(self.gray_600),
            700 => Some(self.gray_700),
            800 => Some(self.gray_800),
            900 => Some(self.gray_900),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BrandColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusPalette {
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub info: &'static str,
}

/// Alpha levels applied on top of palette colors
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OpacityLevels {
    pub light: f32,
    pub medium: f32,
    pub heavy: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ZonePair {
    pub primary: &'static str,
    pub secondary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ZonePalette {
    pub problem: ZonePair,
    pub project: ZonePair,
    pub launch: ZonePair,
}

impl ZonePalette {
    /// Zone pair by key (`"problem"`, `"project"`, `"launch"`)
    pub fn get(&self, key: &str) -> Option<&ZonePair> {
        match key {
            "problem" => Some(&self.problem),
            "project" => Some(&self.project),
            "launch" => Some(&self.launch),
            _ => None,
        }
    }
}

/// The complete base color table
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BaseColors {
    pub black: &'static str,
    pub white: &'static str,
    pub gray: GrayScale,
    pub brand: BrandColors,
    pub status: StatusPalette,
    pub opacity: OpacityLevels,
    pub zones: ZonePalette,
}

impl BaseColors {
    pub const STANDARD: BaseColors = BaseColors {
        black: BLACK,
        white: WHITE,
        gray: GrayScale {
            gray_50: gray::GRAY_50,
            gray_100: gray::GRAY_100,
            gray_200: gray::GRAY_200,
            gray_300: gray::GRAY_300,
            gray_400: gray::GRAY_400,
            gray_500: gray::GRAY_500,
            gray_600: gray::GRAY_600,
            gray_700: gray::GRAY_700,
            gray_800: gray::GRAY_800,
            gray_900: gray::GRAY_900,
        },
        brand: BrandColors {
            primary: brand::PRIMARY,
            secondary: brand::SECONDARY,
            accent: brand::ACCENT,
        },
        status: StatusPalette {
            success: status::SUCCESS,
            warning: status::WARNING,
            error: status::ERROR,
            info: status::INFO,
        },
        opacity: OpacityLevels {
            light: 0.1,
            medium: 0.4,
            heavy: 0.7,
        },
        zones: ZonePalette {
            problem: ZonePair {
                primary: zones::PROBLEM_PRIMARY,
                secondary: zones::PROBLEM_SECONDARY,
            },
            project: ZonePair {
                primary: zones::PROJECT_PRIMARY,
                secondary: zones::PROJECT_SECONDARY,
            },
            launch: ZonePair {
                primary: zones::LAUNCH_PRIMARY,
                secondary: zones::LAUNCH_SECONDARY,
            },
        },
    };
}

impl Default for BaseColors {
    fn default() -> Self {
        Self::STANDARD
    }
}
