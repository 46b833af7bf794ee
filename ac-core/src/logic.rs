//! Pure Business Logic Functions
//!
//! Funktionen über dem `IoExpander`-Trait (mit Mock testbar!)

use rgb::RGB8;

use crate::controller::StamPlcAc;
use crate::traits::IoExpander;
use crate::types::BoardCommand;

/// Anzeige-Farbe für den Relais-Zustand: an = Grün, aus = Rot
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use ac_core::status_color;
/// assert_eq!(status_color(true), RGB8 { r: 0, g: 255, b: 0 });
/// assert_eq!(status_color(false), RGB8 { r: 255, g: 0, b: 0 });
/// ```
pub fn status_color(relay_on: bool) -> RGB8 {
    if relay_on {
        RGB8 { r: 0, g: 255, b: 0 }
    } else {
        RGB8 { r: 255, g: 0, b: 0 }
    }
}

/// Führt ein Board-Kommando aus und gibt den Relais-Zustand danach zurück
///
/// Relais-Kommandos spiegeln den neuen Zustand auf der Status-Leuchte.
/// Ohne initialisierten Expander bleibt alles ein No-Op (Ergebnis `false`).
pub fn apply_command<E: IoExpander>(ac: &mut StamPlcAc<E>, command: BoardCommand) -> bool {
    match command {
        BoardCommand::SetRelay { on } => {
            ac.write_relay(on);
            ac.set_status_color(status_color(on));
        }
        BoardCommand::ToggleRelay => {
            let on = !ac.read_relay();
            ac.write_relay(on);
            ac.set_status_color(status_color(on));
        }
        BoardCommand::SetStatusLight { color } => {
            ac.set_status_color(color);
        }
    }
    ac.read_relay()
}
