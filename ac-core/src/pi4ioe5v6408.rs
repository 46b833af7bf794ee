//! PI4IOE5V6408 I/O-Expander Treiber
//!
//! 8-Bit I/O-Expander von Diodes/Pericom mit I2C-Interface.
//! Jeder Pin ist einzeln als Ein-/Ausgang, mit Pull-Up/-Down und
//! hochohmigem Ausgang konfigurierbar.

use embedded_hal::i2c::{Error as _, I2c};

use crate::config::IOE_ADDRESS;
use crate::traits::{ExpanderError, IoExpander, PinDirection, PullMode};

/// Anzahl der Pins des Expanders
pub const PIN_COUNT: u8 = 8;

/// Register-Adressen
pub mod registers {
    pub const DEVICE_ID_CTRL: u8 = 0x01;
    pub const IO_DIRECTION: u8 = 0x03;
    pub const OUTPUT_STATE: u8 = 0x05;
    pub const OUTPUT_HIGH_Z: u8 = 0x07;
    pub const INPUT_DEFAULT_STATE: u8 = 0x09;
    pub const PULL_ENABLE: u8 = 0x0B;
    pub const PULL_SELECT: u8 = 0x0D;
    pub const INPUT_STATUS: u8 = 0x0F;
    pub const INTERRUPT_MASK: u8 = 0x11;
    pub const INTERRUPT_STATUS: u8 = 0x13;
}

// Device ID & Control Register
const MANUFACTURER_ID_MASK: u8 = 0b1110_0000;
const MANUFACTURER_ID: u8 = 0b1010_0000;
const SW_RESET: u8 = 0b0000_0001;

/// PI4IOE5V6408 Treiber über blocking embedded-hal I2C
pub struct Pi4ioe5v6408<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Pi4ioe5v6408<I2C> {
    /// Erstellt einen Treiber für den Chip an `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Gibt den I2C-Bus zurück
    pub fn into_inner(self) -> I2C {
        self.i2c
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Prüft die Hersteller-Kennung im ID-Register
    ///
    /// Das Lesen des Registers setzt gleichzeitig das Power-On-Reset
    /// Interrupt-Flag des Chips zurück.
    pub fn verify_device_id(&mut self) -> Result<u8, ExpanderError> {
        let id = self.read_register(registers::DEVICE_ID_CTRL)?;
        if id & MANUFACTURER_ID_MASK != MANUFACTURER_ID {
            return Err(ExpanderError::DeviceIdMismatch(id));
        }
        Ok(id)
    }

    /// Software-Reset: alle Register auf Default-Werte
    pub fn reset(&mut self) -> Result<(), ExpanderError> {
        self.write_register(registers::DEVICE_ID_CTRL, SW_RESET)
    }

    /// Liest den aktuellen Eingangspegel eines Pins
    pub fn digital_read(&mut self, pin: u8) -> Result<bool, ExpanderError> {
        let mask = Self::pin_mask(pin)?;
        Ok(self.read_register(registers::INPUT_STATUS)? & mask != 0)
    }

    /// Liest alle acht Eingangspegel als Bitmaske
    pub fn read_inputs(&mut self) -> Result<u8, ExpanderError> {
        self.read_register(registers::INPUT_STATUS)
    }

    /// Liest und löscht das Interrupt-Status-Register
    pub fn take_interrupt_status(&mut self) -> Result<u8, ExpanderError> {
        self.read_register(registers::INTERRUPT_STATUS)
    }

    /// `true` maskiert den Interrupt des Pins
    pub fn set_interrupt_mask(&mut self, pin: u8, masked: bool) -> Result<(), ExpanderError> {
        self.update_bit(registers::INTERRUPT_MASK, pin, masked)
    }

    pub fn read_register(&mut self, reg: u8) -> Result<u8, ExpanderError> {
        let mut data = [0u8];
        self.i2c
            .write_read(self.address, &[reg], &mut data)
            .map_err(|e| ExpanderError::Bus(e.kind()))?;
        Ok(data[0])
    }

    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), ExpanderError> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(|e| ExpanderError::Bus(e.kind()))
    }

    // read-modify-write eines einzelnen Bits
    fn update_bit(&mut self, reg: u8, pin: u8, value: bool) -> Result<(), ExpanderError> {
        let mask = Self::pin_mask(pin)?;
        let current = self.read_register(reg)?;
        let updated = if value { current | mask } else { current & !mask };
        self.write_register(reg, updated)
    }

    fn pin_mask(pin: u8) -> Result<u8, ExpanderError> {
        if pin >= PIN_COUNT {
            return Err(ExpanderError::InvalidPin(pin));
        }
        Ok(1 << pin)
    }
}

impl<I2C: I2c> IoExpander for Pi4ioe5v6408<I2C> {
    type Bus = I2C;

    fn attach(bus: I2C) -> Self {
        Self::new(bus, IOE_ADDRESS)
    }

    fn release(self) -> I2C {
        self.into_inner()
    }

    fn begin(&mut self) -> Result<(), ExpanderError> {
        self.verify_device_id().map(|_| ())
    }

    fn set_direction(&mut self, pin: u8, direction: PinDirection) -> Result<(), ExpanderError> {
        self.update_bit(
            registers::IO_DIRECTION,
            pin,
            direction == PinDirection::Output,
        )
    }

    fn set_pull_mode(&mut self, pin: u8, mode: PullMode) -> Result<(), ExpanderError> {
        match mode {
            PullMode::Disabled => self.update_bit(registers::PULL_ENABLE, pin, false),
            PullMode::PullUp | PullMode::PullDown => {
                // Richtung zuerst wählen, dann aktivieren
                self.update_bit(registers::PULL_SELECT, pin, mode == PullMode::PullUp)?;
                self.update_bit(registers::PULL_ENABLE, pin, true)
            }
        }
    }

    fn set_high_impedance(&mut self, pin: u8, enable: bool) -> Result<(), ExpanderError> {
        self.update_bit(registers::OUTPUT_HIGH_Z, pin, enable)
    }

    fn digital_write(&mut self, pin: u8, level: bool) -> Result<(), ExpanderError> {
        self.update_bit(registers::OUTPUT_STATE, pin, level)
    }

    fn get_write_value(&mut self, pin: u8) -> Result<bool, ExpanderError> {
        let mask = Self::pin_mask(pin)?;
        Ok(self.read_register(registers::OUTPUT_STATE)? & mask != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    const REG_COUNT: usize = 0x14;

    /// Simuliert den Registersatz des Chips
    struct MockBus {
        registers: [u8; REG_COUNT],
        pointer: usize,
        transactions: usize,
        last_address: Option<u8>,
        nack: bool,
    }

    impl MockBus {
        fn new() -> Self {
            let mut regs = [0u8; REG_COUNT];
            // Power-On Defaults laut Datenblatt
            regs[registers::DEVICE_ID_CTRL as usize] = 0xA2;
            regs[registers::OUTPUT_HIGH_Z as usize] = 0xFF;
            Self {
                registers: regs,
                pointer: 0,
                transactions: 0,
                last_address: None,
                nack: false,
            }
        }

        fn reg(&self, reg: u8) -> u8 {
            self.registers[reg as usize]
        }
    }

    impl ErrorType for MockBus {
        type Error = ErrorKind;
    }

    impl I2c for MockBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            self.transactions += 1;
            self.last_address = Some(address);
            if self.nack {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if let Some((reg, data)) = bytes.split_first() {
                            self.pointer = *reg as usize;
                            for byte in data {
                                self.registers[self.pointer] = *byte;
                            }
                        }
                    }
                    Operation::Read(buf) => {
                        for byte in buf.iter_mut() {
                            *byte = self.registers[self.pointer];
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_begin_accepts_manufacturer_id() {
        let mut ioe = Pi4ioe5v6408::attach(MockBus::new());
        assert_eq!(ioe.begin(), Ok(()));
        assert_eq!(ioe.into_inner().last_address, Some(IOE_ADDRESS));
    }

    #[test]
    fn test_begin_rejects_foreign_device() {
        let mut bus = MockBus::new();
        bus.registers[registers::DEVICE_ID_CTRL as usize] = 0x42;
        let mut ioe = Pi4ioe5v6408::attach(bus);
        assert_eq!(ioe.begin(), Err(ExpanderError::DeviceIdMismatch(0x42)));
    }

    #[test]
    fn test_begin_reports_missing_device() {
        let mut bus = MockBus::new();
        bus.nack = true;
        let mut ioe = Pi4ioe5v6408::attach(bus);
        assert_eq!(
            ioe.begin(),
            Err(ExpanderError::Bus(ErrorKind::NoAcknowledge(
                NoAcknowledgeSource::Address
            )))
        );
    }

    #[test]
    fn test_direction_sets_single_bit() {
        let mut ioe = Pi4ioe5v6408::attach(MockBus::new());
        ioe.set_direction(2, PinDirection::Output).unwrap();
        ioe.set_direction(5, PinDirection::Output).unwrap();
        ioe.set_direction(2, PinDirection::Input).unwrap();
        assert_eq!(ioe.into_inner().reg(registers::IO_DIRECTION), 0b0010_0000);
    }

    #[test]
    fn test_pull_up_selects_and_enables() {
        let mut ioe = Pi4ioe5v6408::attach(MockBus::new());
        ioe.set_pull_mode(6, PullMode::PullUp).unwrap();
        let bus = ioe.into_inner();
        assert_eq!(bus.reg(registers::PULL_SELECT), 0b0100_0000);
        assert_eq!(bus.reg(registers::PULL_ENABLE), 0b0100_0000);
    }

    #[test]
    fn test_pull_disabled_keeps_select() {
        let mut ioe = Pi4ioe5v6408::attach(MockBus::new());
        ioe.set_pull_mode(6, PullMode::PullUp).unwrap();
        ioe.set_pull_mode(6, PullMode::Disabled).unwrap();
        let bus = ioe.into_inner();
        assert_eq!(bus.reg(registers::PULL_SELECT), 0b0100_0000);
        assert_eq!(bus.reg(registers::PULL_ENABLE), 0);
    }

    #[test]
    fn test_pull_down_clears_select() {
        let mut bus = MockBus::new();
        bus.registers[registers::PULL_SELECT as usize] = 0xFF;
        let mut ioe = Pi4ioe5v6408::attach(bus);
        ioe.set_pull_mode(0, PullMode::PullDown).unwrap();
        let bus = ioe.into_inner();
        assert_eq!(bus.reg(registers::PULL_SELECT), 0xFE);
        assert_eq!(bus.reg(registers::PULL_ENABLE), 0x01);
    }

    #[test]
    fn test_high_impedance_clears_default() {
        let mut ioe = Pi4ioe5v6408::attach(MockBus::new());
        ioe.set_high_impedance(7, false).unwrap();
        assert_eq!(ioe.into_inner().reg(registers::OUTPUT_HIGH_Z), 0x7F);
    }

    #[test]
    fn test_write_value_reads_output_register() {
        let mut bus = MockBus::new();
        // Eingang zeigt das Gegenteil, darf nicht gelesen werden
        bus.registers[registers::INPUT_STATUS as usize] = 0xFF;
        let mut ioe = Pi4ioe5v6408::attach(bus);

        assert_eq!(ioe.get_write_value(2), Ok(false));
        ioe.digital_write(2, true).unwrap();
        assert_eq!(ioe.get_write_value(2), Ok(true));
        assert_eq!(ioe.into_inner().reg(registers::OUTPUT_STATE), 0b0000_0100);
    }

    #[test]
    fn test_digital_read_uses_input_register() {
        let mut bus = MockBus::new();
        bus.registers[registers::INPUT_STATUS as usize] = 0b0000_1000;
        let mut ioe = Pi4ioe5v6408::attach(bus);
        assert_eq!(ioe.digital_read(3), Ok(true));
        assert_eq!(ioe.digital_read(4), Ok(false));
        assert_eq!(ioe.read_inputs(), Ok(0b0000_1000));
    }

    #[test]
    fn test_invalid_pin_has_no_bus_access() {
        let mut ioe = Pi4ioe5v6408::attach(MockBus::new());
        assert_eq!(ioe.digital_write(8, true), Err(ExpanderError::InvalidPin(8)));
        assert_eq!(ioe.get_write_value(9), Err(ExpanderError::InvalidPin(9)));
        assert_eq!(ioe.into_inner().transactions, 0);
    }

    #[test]
    fn test_reset_writes_reset_bit() {
        let mut bus = MockBus::new();
        bus.registers[registers::DEVICE_ID_CTRL as usize] = 0xA0;
        let mut ioe = Pi4ioe5v6408::new(bus, 0x43);
        ioe.reset().unwrap();
        let bus = ioe.into_inner();
        assert_eq!(bus.reg(registers::DEVICE_ID_CTRL), SW_RESET);
        assert_eq!(bus.last_address, Some(0x43));
    }

    #[test]
    fn test_interrupt_mask_and_status() {
        let mut bus = MockBus::new();
        bus.registers[registers::INTERRUPT_STATUS as usize] = 0b1000_0001;
        let mut ioe = Pi4ioe5v6408::attach(bus);
        ioe.set_interrupt_mask(1, true).unwrap();
        assert_eq!(ioe.take_interrupt_status(), Ok(0b1000_0001));
        assert_eq!(ioe.into_inner().reg(registers::INTERRUPT_MASK), 0b0000_0010);
    }
}
