//! StamPLC AC Controller: Relais + Status-Leuchte am I/O-Expander
//!
//! Der Controller besitzt den Expander exklusiv. Bis zum ersten
//! erfolgreichen `begin()` hält er nur den rohen Bus; alle anderen
//! Operationen sind bis dahin No-Ops mit Fehler-Log.
//!
//! Die Status-Leuchte ist active-low verdrahtet: ein hochohmiger Pin lässt
//! den Pull-Up die Leitung hochziehen (Kanal aus), ein aktiv auf Low
//! getriebener Pin schaltet den Kanal ein.

use rgb::RGB8;

use crate::config::{PIN_RELAY, PIN_STATUS_LIGHT_B, PIN_STATUS_LIGHT_G, PIN_STATUS_LIGHT_R};
use crate::logging::{ac_debug, ac_error, ac_warn};
use crate::traits::{ExpanderError, IoExpander, PinDirection, PullMode};

const STATUS_LIGHT_PINS: [u8; 3] = [PIN_STATUS_LIGHT_R, PIN_STATUS_LIGHT_G, PIN_STATUS_LIGHT_B];

/// Relais- und Status-Leuchten-Controller des StamPLC AC Moduls
///
/// # Zustände
/// - **Uninitialized:** nur `bus` belegt, kein Bus-Zugriff außer in `begin()`
/// - **Ready:** nur `ioe` belegt
pub struct StamPlcAc<E: IoExpander> {
    bus: Option<E::Bus>,
    ioe: Option<E>,
}

impl<E: IoExpander> StamPlcAc<E> {
    /// Erstellt einen uninitialisierten Controller für den gegebenen Bus
    pub fn new(bus: E::Bus) -> Self {
        Self {
            bus: Some(bus),
            ioe: None,
        }
    }

    /// Initialisiert Expander und Pins
    ///
    /// Idempotent: ein zweiter Aufruf nach Erfolg konfiguriert nichts neu.
    /// Bei `false` bleibt der Controller uninitialisiert und kann erneut
    /// `begin()` versuchen.
    pub fn begin(&mut self) -> bool {
        if self.ioe.is_some() {
            ac_warn!("IOExpander already initialized");
            return true;
        }

        let Some(bus) = self.bus.take() else {
            ac_error!("IOExpander bus missing");
            return false;
        };

        let mut ioe = E::attach(bus);
        if let Err(e) = ioe.begin() {
            self.bus = Some(ioe.release());
            ac_error!("IOExpander initialization failed: {}", e);
            return false;
        }

        configure_relay_pin(&mut ioe);
        for pin in STATUS_LIGHT_PINS {
            configure_status_light_pin(&mut ioe, pin);
        }

        self.ioe = Some(ioe);
        ac_debug!("IOExpander ready");
        true
    }

    /// `true` nach erfolgreichem `begin()`
    pub fn is_ready(&self) -> bool {
        self.ioe.is_some()
    }

    /// Liest den zuletzt geschriebenen Relais-Zustand
    ///
    /// Gibt `false` zurück solange der Expander nicht initialisiert ist.
    pub fn read_relay(&mut self) -> bool {
        let Some(ioe) = self.ioe() else {
            return false;
        };

        match ioe.get_write_value(PIN_RELAY) {
            Ok(state) => state,
            Err(e) => {
                ac_error!("Failed to read relay: {}", e);
                false
            }
        }
    }

    /// Schaltet das AC-Relais (`true` = an)
    pub fn write_relay(&mut self, state: bool) {
        let Some(ioe) = self.ioe() else {
            return;
        };

        if let Err(e) = ioe.digital_write(PIN_RELAY, state) {
            ac_error!("Failed to write relay: {}", e);
        }
    }

    /// Setzt die Status-Leuchte
    ///
    /// Jeder Kanal ist binär: `0` = aus, jeder andere Wert = voll an.
    pub fn set_status_light(&mut self, r: u8, g: u8, b: u8) {
        let Some(ioe) = self.ioe() else {
            return;
        };

        for (pin, value) in STATUS_LIGHT_PINS.into_iter().zip([r, g, b]) {
            if let Err(e) = set_channel(ioe, pin, value) {
                ac_error!("Failed to set status light pin {}: {}", pin, e);
            }
        }
    }

    /// Setzt die Status-Leuchte aus einer RGB-Farbe
    pub fn set_status_color(&mut self, color: RGB8) {
        self.set_status_light(color.r, color.g, color.b);
    }

    // Guard vor jedem Expander-Zugriff
    fn ioe(&mut self) -> Option<&mut E> {
        if self.ioe.is_none() {
            ac_error!("IOExpander not initialized");
        }
        self.ioe.as_mut()
    }
}

fn set_channel<E: IoExpander>(ioe: &mut E, pin: u8, value: u8) -> Result<(), ExpanderError> {
    if value == 0 {
        ioe.set_high_impedance(pin, true)
    } else {
        ioe.set_high_impedance(pin, false)?;
        ioe.digital_write(pin, false)
    }
}

// Ausgang, kein Pull, Push-Pull
fn configure_relay_pin<E: IoExpander>(ioe: &mut E) {
    let steps = [
        ioe.set_direction(PIN_RELAY, PinDirection::Output),
        ioe.set_pull_mode(PIN_RELAY, PullMode::Disabled),
        ioe.set_high_impedance(PIN_RELAY, false),
    ];
    report_config_errors(PIN_RELAY, &steps);
}

// Ausgang, Pull-Up, Push-Pull, High = Kanal aus
fn configure_status_light_pin<E: IoExpander>(ioe: &mut E, pin: u8) {
    let steps = [
        ioe.set_direction(pin, PinDirection::Output),
        ioe.set_pull_mode(pin, PullMode::PullUp),
        ioe.set_high_impedance(pin, false),
        ioe.digital_write(pin, true),
    ];
    report_config_errors(pin, &steps);
}

// Kein Rollback: Fehler werden nur gemeldet
fn report_config_errors(pin: u8, steps: &[Result<(), ExpanderError>]) {
    for e in steps.iter().filter_map(|step| step.err()) {
        ac_warn!("Failed to configure pin {}: {}", pin, e);
    }
}
