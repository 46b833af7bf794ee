// Hardware Abstraction Layer (HAL) Module
//
// Baut den I2C-Bus zum I/O-Expander auf. Der Expander selbst wird
// über den IoExpander-Trait aus ac-core angesprochen.

pub mod ioe_bus;

pub use ioe_bus::{BoardController, IoeBus, init_ioe_bus};
