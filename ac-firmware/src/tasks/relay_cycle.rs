// Relay Cycle Task - Schaltet das Relais periodisch um (optional)
use defmt::info;
use embassy_time::{Duration, Timer};

use crate::config::relay_cycle_secs;
use crate::{BoardCommand, BoardCommandSender};

/// Relay Cycle Task
///
/// Schickt alle `RELAY_CYCLE_SECS` Sekunden ein `ToggleRelay` an den
/// Board-Task. Bei 0 beendet sich der Task sofort.
#[embassy_executor::task]
pub async fn relay_cycle_task(command_sender: BoardCommandSender) {
    let interval = relay_cycle_secs();
    if interval == 0 {
        info!("Relay cycling disabled");
        return;
    }

    info!("Relay cycling every {}s", interval);
    loop {
        Timer::after(Duration::from_secs(interval)).await;
        command_sender.send(BoardCommand::ToggleRelay).await;
    }
}
