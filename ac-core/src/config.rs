//! Feste Board-Konfiguration des StamPLC AC Moduls
//!
//! Alle Werte sind zur Compile-Zeit fest und zur Laufzeit nicht änderbar.

/// I2C-Adresse des PI4IOE5V6408 I/O-Expanders (7-bit)
pub const IOE_ADDRESS: u8 = 0x44;

/// I2C-Taktfrequenz für den Expander-Bus in Hz (Fast Mode)
pub const IOE_BUS_FREQUENCY_HZ: u32 = 400_000;

/// Expander-Pin für das AC-Relais
pub const PIN_RELAY: u8 = 2;

/// Expander-Pins der Status-Leuchte (active-low)
pub const PIN_STATUS_LIGHT_R: u8 = 5;
pub const PIN_STATUS_LIGHT_G: u8 = 6;
pub const PIN_STATUS_LIGHT_B: u8 = 7;

/// Komponenten-Tag für Log-Ausgaben
pub const LOG_TAG: &str = "StamPLC_AC";
