//! Integration Tests für die Log-Ausgaben des Controllers
//!
//! Eigenes Test-Binary: der Logger ist global und wird nur einmal gesetzt.

use std::sync::Mutex;

use ac_core::config::LOG_TAG;
use ac_core::{ExpanderError, IoExpander, PinDirection, PullMode, StamPlcAc};
use log::{Level, LevelFilter, Log, Metadata, Record};

// ============================================================================
// Capture Logger
// ============================================================================

struct CaptureLogger {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn take_records() -> Vec<(Level, String, String)> {
    std::mem::take(&mut *LOGGER.records.lock().unwrap())
}

// ============================================================================
// Expander ohne Chip
// ============================================================================

/// `Bus = bool`: ist ein Chip vorhanden?
struct FakeExpander(bool);

impl IoExpander for FakeExpander {
    type Bus = bool;

    fn attach(present: bool) -> Self {
        Self(present)
    }

    fn release(self) -> bool {
        self.0
    }

    fn begin(&mut self) -> Result<(), ExpanderError> {
        if self.0 {
            Ok(())
        } else {
            Err(ExpanderError::DeviceIdMismatch(0x42))
        }
    }

    fn set_direction(&mut self, _pin: u8, _direction: PinDirection) -> Result<(), ExpanderError> {
        Ok(())
    }

    fn set_pull_mode(&mut self, _pin: u8, _mode: PullMode) -> Result<(), ExpanderError> {
        Ok(())
    }

    fn set_high_impedance(&mut self, _pin: u8, _enable: bool) -> Result<(), ExpanderError> {
        Ok(())
    }

    fn digital_write(&mut self, _pin: u8, _level: bool) -> Result<(), ExpanderError> {
        Ok(())
    }

    fn get_write_value(&mut self, pin: u8) -> Result<bool, ExpanderError> {
        Err(ExpanderError::InvalidPin(pin))
    }
}

#[test]
fn test_log_output_on_error_paths() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    // Nicht initialisiert: Fehler pro Operation
    let mut ac = StamPlcAc::<FakeExpander>::new(false);
    assert!(!ac.read_relay());
    ac.write_relay(true);
    ac.set_status_light(1, 2, 3);
    let records = take_records();
    assert_eq!(records.len(), 3);
    for (level, target, message) in &records {
        assert_eq!(*level, Level::Error);
        assert_eq!(target, LOG_TAG);
        assert_eq!(message, "IOExpander not initialized");
    }

    // Initialisierung schlägt fehl
    assert!(!ac.begin());
    let records = take_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Error);
    assert_eq!(
        records[0].2,
        "IOExpander initialization failed: device id mismatch (0x42)"
    );

    // Zweites begin() nach Erfolg: Warnung
    let mut ac = StamPlcAc::<FakeExpander>::new(true);
    assert!(ac.begin());
    take_records();
    assert!(ac.begin());
    let records = take_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Warn);
    assert_eq!(records[0].2, "IOExpander already initialized");

    // Treiberfehler beim Lesen: false + Fehler-Log
    assert!(!ac.read_relay());
    let records = take_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].2, "Failed to read relay: invalid pin 2");
}
