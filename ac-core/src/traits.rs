//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstelle zum I/O-Expander
//! ohne konkrete Implementierung.

use core::fmt;

use embedded_hal::i2c::ErrorKind;

/// Fehler-Typ für Expander-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpanderError {
    /// I2C-Transaktion fehlgeschlagen
    Bus(ErrorKind),
    /// Hersteller-Kennung im ID-Register passt nicht (gelesener Registerwert)
    DeviceIdMismatch(u8),
    /// Pin-Index außerhalb von 0..8
    InvalidPin(u8),
}

impl fmt::Display for ExpanderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpanderError::Bus(kind) => write!(f, "bus error: {}", kind),
            ExpanderError::DeviceIdMismatch(id) => {
                write!(f, "device id mismatch ({:#x})", id)
            }
            ExpanderError::InvalidPin(pin) => write!(f, "invalid pin {}", pin),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ExpanderError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ExpanderError::Bus(kind) => {
                // ErrorKind hat ohne embedded-hal/defmt-03 kein Format
                let name = match kind {
                    ErrorKind::Bus => "Bus",
                    ErrorKind::ArbitrationLoss => "ArbitrationLoss",
                    ErrorKind::NoAcknowledge(_) => "NoAcknowledge",
                    ErrorKind::Overrun => "Overrun",
                    _ => "Other",
                };
                defmt::write!(fmt, "bus error: {}", name)
            }
            ExpanderError::DeviceIdMismatch(id) => {
                defmt::write!(fmt, "device id mismatch ({:#x})", id)
            }
            ExpanderError::InvalidPin(pin) => defmt::write!(fmt, "invalid pin {}", pin),
        }
    }
}

/// Richtung eines Expander-Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    Input,
    Output,
}

/// Interner Pull-Widerstand eines Expander-Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PullMode {
    Disabled,
    PullUp,
    PullDown,
}

/// Trait für 8-Pin I/O-Expander am I2C-Bus
///
/// Der Expander wird erst in `StamPlcAc::begin()` aus dem Bus erzeugt
/// (`attach`) und bei fehlgeschlagener Initialisierung wieder in den Bus
/// zurückverwandelt (`release`).
///
/// # Implementierungen
/// - **Production:** `Pi4ioe5v6408` (embedded-hal I2C)
/// - **Testing:** MockExpander (in-memory Mock)
pub trait IoExpander: Sized {
    /// Bus-Ressource, aus der der Expander erzeugt wird
    type Bus;

    /// Bindet den Expander an den Bus (feste Adresse)
    fn attach(bus: Self::Bus) -> Self;

    /// Gibt den Bus wieder frei
    fn release(self) -> Self::Bus;

    /// Low-Level Initialisierung des Chips
    ///
    /// # Fehlerbehandlung
    /// Gibt einen `ExpanderError` zurück wenn der Chip nicht antwortet
    /// oder eine falsche Kennung meldet
    fn begin(&mut self) -> Result<(), ExpanderError>;

    fn set_direction(&mut self, pin: u8, direction: PinDirection) -> Result<(), ExpanderError>;

    fn set_pull_mode(&mut self, pin: u8, mode: PullMode) -> Result<(), ExpanderError>;

    /// `true` schaltet den Ausgang hochohmig
    fn set_high_impedance(&mut self, pin: u8, enable: bool) -> Result<(), ExpanderError>;

    fn digital_write(&mut self, pin: u8, level: bool) -> Result<(), ExpanderError>;

    /// Zuletzt geschriebener Ausgangspegel (Output-Register, kein Eingangswert)
    fn get_write_value(&mut self, pin: u8) -> Result<bool, ExpanderError>;
}
