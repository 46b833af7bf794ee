// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-S3 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use ac_core::config::{IOE_ADDRESS, IOE_BUS_FREQUENCY_HZ};
use stamplc_ac::BoardCommandChannel;
use stamplc_ac::config::{HEAP_SIZE, IOE_SCL_GPIO, IOE_SDA_GPIO};
use stamplc_ac::hal::init_ioe_bus;
use stamplc_ac::tasks::{board_task, relay_cycle_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware und I2C-Bus, startet Embassy Runtime und spawnt
/// Tasks. Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-S3 Konfiguration: CPU auf maximale Taktfrequenz (240 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap für esp-rtos
    esp_alloc::heap_allocator!(size: HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // I2C-Bus zum I/O-Expander (interner Bus des StamPLC)
    let i2c = init_ioe_bus(peripherals.I2C0, peripherals.GPIO13, peripherals.GPIO15)
        .expect("Failed to initialize I2C bus");
    info!(
        "I2C ready: SDA=GPIO{} SCL=GPIO{} {} Hz, expander at {:#x}",
        IOE_SDA_GPIO, IOE_SCL_GPIO, IOE_BUS_FREQUENCY_HZ, IOE_ADDRESS
    );

    // Board Command-Channel erstellen (beliebiger Task → Board Task)
    static COMMAND_CHANNEL: static_cell::StaticCell<BoardCommandChannel> =
        static_cell::StaticCell::new();
    let command_channel = COMMAND_CHANNEL.init(BoardCommandChannel::new());
    let command_sender = command_channel.sender();
    let command_receiver = command_channel.receiver();

    // Spawn Board Task (besitzt den Controller exklusiv)
    spawner.spawn(board_task(i2c, command_receiver)).unwrap();

    // Spawn Relay Cycle Task (optional, siehe RELAY_CYCLE_SECS)
    spawner.spawn(relay_cycle_task(command_sender)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
