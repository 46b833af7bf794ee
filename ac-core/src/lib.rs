//! AC Core - StamPLC AC Board-Support
//!
//! Diese Crate enthält KEINE Plattform-Dependencies.
//! Sie definiert den Expander-Trait, den PI4IOE5V6408-Treiber über
//! embedded-hal und den Relais-/Status-Leuchten-Controller.

#![no_std]

mod logging;

pub mod config;
pub mod controller;
pub mod logic;
pub mod pi4ioe5v6408;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::StamPlcAc;
pub use logic::{apply_command, status_color};
pub use pi4ioe5v6408::Pi4ioe5v6408;
pub use traits::{ExpanderError, IoExpander, PinDirection, PullMode};
pub use types::BoardCommand;
