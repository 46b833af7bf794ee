// Board Task - Besitzt den StamPLC AC Controller (Relais + Status-Leuchte)
use defmt::{info, warn};
use embassy_time::{Duration, Timer};
use rgb::RGB8;

use crate::config::{IOE_RETRY_DELAY_SECS, LAMP_TEST_STEP_MS};
use crate::hal::{BoardController, IoeBus};
use crate::{BoardCommandReceiver, IoExpander, StamPlcAc, apply_command, status_color};

/// Farbfolge für den Lampentest
const LAMP_TEST_COLORS: [RGB8; 3] = [
    RGB8 { r: 255, g: 0, b: 0 },
    RGB8 { r: 0, g: 255, b: 0 },
    RGB8 { r: 0, g: 0, b: 255 },
];

/// Board Logic - Business Logic über dem IoExpander-Trait
///
/// - Initialisiert den Expander, bei Fehler neuer Versuch nach
///   `IOE_RETRY_DELAY_SECS`
/// - Lampentest (Rot → Grün → Blau), danach Relais-Zustand anzeigen
/// - Führt BoardCommands aus dem Channel aus
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `E: IoExpander` ermöglicht neben dem
/// Pi4ioe5v6408 am ESP32-I2C auch andere Expander-Implementierungen.
pub async fn board_logic<E: IoExpander>(
    mut ac: StamPlcAc<E>,
    command_receiver: BoardCommandReceiver,
) {
    // Kein Retry im Controller selbst: jeder Versuch ist ein neues begin()
    while !ac.begin() {
        warn!(
            "IOExpander not available, retrying in {}s",
            IOE_RETRY_DELAY_SECS
        );
        Timer::after(Duration::from_secs(IOE_RETRY_DELAY_SECS)).await;
    }

    for color in LAMP_TEST_COLORS {
        ac.set_status_color(color);
        Timer::after(Duration::from_millis(LAMP_TEST_STEP_MS)).await;
    }

    let relay_on = ac.read_relay();
    ac.set_status_color(status_color(relay_on));
    info!("Board ready, relay {}", if relay_on { "on" } else { "off" });

    // Hauptschleife: wartet auf Kommandos
    loop {
        let command = command_receiver.receive().await;
        info!("Command received: {}", command);

        let relay_on = apply_command(&mut ac, command);
        info!("Relay {}", if relay_on { "on" } else { "off" });
    }
}

/// Board Task - Embassy Task für den Controller
///
/// # Parameter
/// - `i2c`: I2C-Bus zum Expander (siehe `hal::init_ioe_bus`)
/// - `command_receiver`: Channel Receiver für Board-Kommandos
#[embassy_executor::task]
pub async fn board_task(i2c: IoeBus, command_receiver: BoardCommandReceiver) {
    // Controller hält nur den Bus, der Expander entsteht erst in begin()
    let ac = BoardController::new(i2c);

    board_logic(ac, command_receiver).await;
}
