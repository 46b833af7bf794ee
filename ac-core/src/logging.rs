//! Logging-Makros für ac-core
//!
//! Leitet an `defmt` (Firmware) oder an die `log`-Fassade (Host) weiter.
//! Bei `log` wird `LOG_TAG` als Target gesetzt. Ohne Feature entfallen die
//! Ausgaben komplett, die Argumente werden trotzdem ausgewertet.

macro_rules! ac_warn {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($s $(, $x)*);
        #[cfg(feature = "log")]
        log::warn!(target: $crate::config::LOG_TAG, $s $(, $x)*);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        {
            $( let _ = &$x; )*
        }
    }};
}

macro_rules! ac_error {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::error!($s $(, $x)*);
        #[cfg(feature = "log")]
        log::error!(target: $crate::config::LOG_TAG, $s $(, $x)*);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        {
            $( let _ = &$x; )*
        }
    }};
}

macro_rules! ac_debug {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($s $(, $x)*);
        #[cfg(feature = "log")]
        log::debug!(target: $crate::config::LOG_TAG, $s $(, $x)*);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        {
            $( let _ = &$x; )*
        }
    }};
}

pub(crate) use ac_debug;
pub(crate) use ac_error;
pub(crate) use ac_warn;
