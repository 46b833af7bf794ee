// Task-Modul: Enthält alle Embassy Tasks
//
// Der Board-Task besitzt den Controller exklusiv.
// Andere Tasks schicken BoardCommands über den Channel.

pub mod board;
pub mod relay_cycle;

// Re-export Tasks für einfachen Import
pub use board::board_task;
pub use relay_cycle::relay_cycle_task;
