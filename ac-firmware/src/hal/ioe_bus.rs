// I2C-Bus zum PI4IOE5V6408 I/O-Expander
//
// Blocking I2C-Master von esp-hal mit festem Bus-Takt aus ac-core.
// Implementiert embedded_hal::i2c::I2c und kann direkt an den
// Pi4ioe5v6408-Treiber übergeben werden.

use ac_core::config::IOE_BUS_FREQUENCY_HZ;
use ac_core::{Pi4ioe5v6408, StamPlcAc};
use esp_hal::Blocking;
use esp_hal::i2c::master::{Config, ConfigError, I2c};
use esp_hal::time::Rate;

/// I2C-Bus zum Expander
pub type IoeBus = I2c<'static, Blocking>;

/// Controller mit echtem Expander am ESP32-I2C
pub type BoardController = StamPlcAc<Pi4ioe5v6408<IoeBus>>;

/// Erstellt den I2C-Bus zum Expander
///
/// # Parameter
/// - `i2c0`: I2C0 Peripheral
/// - `sda`: GPIO13 (interner Bus des StamPLC)
/// - `scl`: GPIO15 (interner Bus des StamPLC)
///
/// # Fehlerbehandlung
/// Gibt `ConfigError` zurück wenn der Bus-Takt nicht einstellbar ist
pub fn init_ioe_bus(
    i2c0: esp_hal::peripherals::I2C0<'static>,
    sda: esp_hal::peripherals::GPIO13<'static>,
    scl: esp_hal::peripherals::GPIO15<'static>,
) -> Result<IoeBus, ConfigError> {
    let config = Config::default().with_frequency(Rate::from_hz(IOE_BUS_FREQUENCY_HZ));
    let bus = I2c::new(i2c0, config)?.with_sda(sda).with_scl(scl);
    Ok(bus)
}
