// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Expander-Adresse, Bus-Takt und Pin-Belegung des Expanders liegen in
// ac_core::config, hier nur die ESP32-seitige Zuordnung.

// ============================================================================
// I2C Konfiguration (interner Bus des StamPLC)
// ============================================================================

/// GPIO für I2C SDA (interner Bus zum I/O-Expander)
pub const IOE_SDA_GPIO: u8 = 13;

/// GPIO für I2C SCL (interner Bus zum I/O-Expander)
pub const IOE_SCL_GPIO: u8 = 15;

/// Wartezeit in Sekunden bis zum nächsten begin()-Versuch
pub const IOE_RETRY_DELAY_SECS: u64 = 5;

// ============================================================================
// Board-Task Konfiguration
// ============================================================================

/// Kapazität des Board-Command-Channels
pub const BOARD_COMMAND_QUEUE_SIZE: usize = 4;

/// Dauer pro Farbe beim Lampentest nach dem Start (Millisekunden)
pub const LAMP_TEST_STEP_MS: u64 = 300;

/// Default für das Relais-Umschalt-Intervall (0 = aus)
pub const DEFAULT_RELAY_CYCLE_SECS: u64 = 0;

/// Relais-Umschalt-Intervall in Sekunden
/// Wird zur Build-Zeit aus der Environment Variable RELAY_CYCLE_SECS geladen
/// (optional, siehe .env.example)
pub fn relay_cycle_secs() -> u64 {
    option_env!("RELAY_CYCLE_SECS")
        .and_then(|secs| secs.trim().parse().ok())
        .unwrap_or(DEFAULT_RELAY_CYCLE_SECS)
}

// ============================================================================
// Speicher
// ============================================================================

/// Heap-Größe für esp-rtos (Bytes)
pub const HEAP_SIZE: usize = 16384; // 16 KB
