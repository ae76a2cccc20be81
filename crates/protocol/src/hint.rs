use serde::{Deserialize, Serialize};

/// Hint display mode selected by the hint control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HintMode {
    #[default]
    Off,
    On,
    Smart,
    Manual,
}

impl HintMode {
    /// Lenient parse of a control value. Unknown text means `Off`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "ON" => Self::On,
            "SMART" => Self::Smart,
            "MANUAL" => Self::Manual,
            _ => Self::Off,
        }
    }

    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Off)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
            Self::Smart => "SMART",
            Self::Manual => "MANUAL",
        }
    }
}

impl std::fmt::Display for HintMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
