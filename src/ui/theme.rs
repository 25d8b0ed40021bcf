use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,

    // Footer mode colors
    pub footer_input: ColorSpec,
    pub footer_edit: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Theme {
    /// Get the default theme (Tokyo Night).
    ///
    pub fn default() -> Self {
        Self::tokyo_night()
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Blue
            secondary: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            text: ColorSpec {
                r: 169,
                g: 177,
                b: 214,
            }, // Foreground
            text_muted: ColorSpec {
                r: 117,
                g: 121,
                b: 148,
            }, // Comment
            success: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            warning: ColorSpec {
                r: 255,
                g: 202,
                b: 40,
            }, // Yellow
            error: ColorSpec {
                r: 247,
                g: 118,
                b: 142,
            }, // Red
            info: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Blue
            border_active: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Blue
            border_normal: ColorSpec {
                r: 117,
                g: 121,
                b: 148,
            }, // Comment
            footer_input: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Blue
            footer_edit: ColorSpec {
                r: 255,
                g: 202,
                b: 40,
            }, // Yellow
            footer_normal: ColorSpec { r: 0, g: 0, b: 0 }, // Black
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: ColorSpec {
                r: 196,
                g: 167,
                b: 231,
            }, // Purple
            secondary: ColorSpec {
                r: 49,
                g: 116,
                b: 143,
            }, // Pine
            text: ColorSpec {
                r: 224,
                g: 222,
                b: 244,
            }, // Text
            text_muted: ColorSpec {
                r: 86,
                g: 82,
                b: 100,
            }, // Muted
            success: ColorSpec {
                r: 49,
                g: 116,
                b: 143,
            }, // Pine
            warning: ColorSpec {
                r: 246,
                g: 193,
                b: 119,
            }, // Gold
            error: ColorSpec {
                r: 235,
                g: 111,
                b: 146,
            }, // Love
            info: ColorSpec {
                r: 156,
                g: 207,
                b: 216,
            }, // Foam
            border_active: ColorSpec {
                r: 196,
                g: 167,
                b: 231,
            }, // Purple
            border_normal: ColorSpec {
                r: 144,
                g: 140,
                b: 170,
            }, // Subtext
            footer_input: ColorSpec {
                r: 156,
                g: 207,
                b: 216,
            }, // Foam
            footer_edit: ColorSpec {
                r: 246,
                g: 193,
                b: 119,
            }, // Gold
            footer_normal: ColorSpec { r: 0, g: 0, b: 0 }, // Black
        }
    }

    /// Catppuccin Mocha theme.
    ///
    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha".to_string(),
            primary: ColorSpec {
                r: 203,
                g: 166,
                b: 247,
            }, // Mauve
            secondary: ColorSpec {
                r: 166,
                g: 227,
                b: 161,
            }, // Green
            text: ColorSpec {
                r: 205,
                g: 214,
                b: 244,
            }, // Text
            text_muted: ColorSpec {
                r: 166,
                g: 173,
                b: 200,
            }, // Subtext0
            success: ColorSpec {
                r: 166,
                g: 227,
                b: 161,
            }, // Green
            warning: ColorSpec {
                r: 249,
                g: 226,
                b: 175,
            }, // Yellow
            error: ColorSpec {
                r: 243,
                g: 139,
                b: 168,
            }, // Red
            info: ColorSpec {
                r: 137,
                g: 180,
                b: 250,
            }, // Blue
            border_active: ColorSpec {
                r: 203,
                g: 166,
                b: 247,
            }, // Mauve
            border_normal: ColorSpec {
                r: 166,
                g: 173,
                b: 200,
            }, // Subtext0
            footer_input: ColorSpec {
                r: 137,
                g: 180,
                b: 250,
            }, // Blue
            footer_edit: ColorSpec {
                r: 249,
                g: 226,
                b: 175,
            }, // Yellow
            footer_normal: ColorSpec { r: 0, g: 0, b: 0 }, // Black
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec {
                r: 189,
                g: 147,
                b: 249,
            }, // Purple
            secondary: ColorSpec {
                r: 139,
                g: 233,
                b: 253,
            }, // Cyan
            text: ColorSpec {
                r: 248,
                g: 248,
                b: 242,
            }, // Foreground
            text_muted: ColorSpec {
                r: 98,
                g: 114,
                b: 164,
            }, // Comment
            success: ColorSpec {
                r: 80,
                g: 250,
                b: 123,
            }, // Green
            warning: ColorSpec {
                r: 255,
                g: 184,
                b: 108,
            }, // Orange
            error: ColorSpec {
                r: 255,
                g: 85,
                b: 85,
            }, // Red
            info: ColorSpec {
                r: 139,
                g: 233,
                b: 253,
            }, // Cyan
            border_active: ColorSpec {
                r: 189,
                g: 147,
                b: 249,
            }, // Purple
            border_normal: ColorSpec {
                r: 98,
                g: 114,
                b: 164,
            }, // Comment
            footer_input: ColorSpec {
                r: 139,
                g: 233,
                b: 253,
            }, // Cyan
            footer_edit: ColorSpec {
                r: 255,
                g: 184,
                b: 108,
            }, // Orange
            footer_normal: ColorSpec { r: 0, g: 0, b: 0 }, // Black
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine" => Some(Self::rose_pine()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine".to_string(),
            "catppuccin-mocha".to_string(),
            "dracula".to_string(),
        ]
    }
}
