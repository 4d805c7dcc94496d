//! Text-flow direction.
//!
//! Directionality only affects how the horizontal arrow keys map onto
//! "next column" and "previous column". Vertical movement never mirrors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Text direction of the grid's host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right (e.g., English, French, German)
    #[default]
    Ltr,
    /// Right-to-left (e.g., Arabic, Hebrew)
    Rtl,
}

impl Direction {
    /// Returns `true` for [`Direction::Rtl`].
    #[inline]
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }

    /// Returns the lowercase name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    /// Detect the base direction of a string.
    ///
    /// Uses the bidi class of the first strong directional character; text
    /// without one is treated as LTR.
    ///
    /// ```
    /// use gridkeys::Direction;
    ///
    /// assert_eq!(Direction::detect("Hello"), Direction::Ltr);
    /// assert_eq!(Direction::detect("مرحبا"), Direction::Rtl);
    /// ```
    pub fn detect(text: &str) -> Self {
        use unicode_bidi::{bidi_class, BidiClass};

        for ch in text.chars() {
            match bidi_class(ch) {
                BidiClass::L => return Direction::Ltr,
                BidiClass::R | BidiClass::AL => return Direction::Rtl,
                _ => continue,
            }
        }

        Direction::Ltr
    }

    /// Direction typically used by a locale such as `"he-IL"` or `"ar_EG"`.
    pub fn for_locale(locale: &str) -> Self {
        let lang = locale.split(['-', '_']).next().unwrap_or(locale);

        match lang.to_lowercase().as_str() {
            "ar" | "he" | "fa" | "ur" | "yi" | "ps" | "sd" | "ug" | "ku" | "ckb" | "dv" | "arc"
            | "syr" => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }

    /// Direction of the operating system's current locale.
    ///
    /// Falls back to `en-US` (and so LTR) when the locale can't be read.
    pub fn system() -> Self {
        let locale = sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string());
        Self::for_locale(&locale)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ltr" => Ok(Direction::Ltr),
            "rtl" => Ok(Direction::Rtl),
            _ => Err(GridError::UnknownDirection(s.to_string())),
        }
    }
}
