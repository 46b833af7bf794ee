// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von ac-core
pub use ac_core::{BoardCommand, IoExpander, StamPlcAc, apply_command, status_color};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::BOARD_COMMAND_QUEUE_SIZE;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Der Controller lebt exklusiv im Board-Task. Andere Tasks erreichen ihn
// nur über diesen Channel.

/// Channel für Board-Kommandos (beliebiger Task → Board Task)
pub type BoardCommandChannel = Channel<NoopRawMutex, BoardCommand, BOARD_COMMAND_QUEUE_SIZE>;

/// Sender für Board-Kommandos
/// Erzeugt aus BoardCommandChannel
pub type BoardCommandSender = Sender<'static, NoopRawMutex, BoardCommand, BOARD_COMMAND_QUEUE_SIZE>;

/// Receiver für Board-Kommandos (Board Task empfängt)
pub type BoardCommandReceiver =
    Receiver<'static, NoopRawMutex, BoardCommand, BOARD_COMMAND_QUEUE_SIZE>;
