//! Core Types für die Board-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Board-Kommando für den Board-Task
///
/// Wird von anderen Tasks an den Task gesendet, der den Controller besitzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoardCommand {
    /// Relais auf festen Zustand setzen
    SetRelay { on: bool },
    /// Relais umschalten
    ToggleRelay,
    /// Status-Leuchte direkt setzen (Kanäle binär)
    SetStatusLight { color: RGB8 },
}

impl core::convert::TryFrom<&str> for BoardCommand {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "on" => Ok(Self::SetRelay { on: true }),
            "off" => Ok(Self::SetRelay { on: false }),
            "toggle" => Ok(Self::ToggleRelay),
            _ => Err(()),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for BoardCommand {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            BoardCommand::SetRelay { on } => {
                defmt::write!(fmt, "SetRelay {{ on: {} }}", on)
            }
            BoardCommand::ToggleRelay => defmt::write!(fmt, "ToggleRelay"),
            BoardCommand::SetStatusLight { color } => {
                defmt::write!(
                    fmt,
                    "SetStatusLight {{ rgb: ({}, {}, {}) }}",
                    color.r,
                    color.g,
                    color.b
                )
            }
        }
    }
}
