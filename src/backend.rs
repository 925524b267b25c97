// SPDX-License-Identifier: MIT OR Apache-2.0

//! Abstraction over the I/O backend (Hardware Abstraction Layer (HAL)).
//!
//! Main exports:
//! - [`Backend`]
//! - [`MmioBackend`]
//! - [`InMemoryBackend`]

use crate::spec::registers::{SR, offsets};
use core::ptr::{read_volatile, write_volatile};

/// Memory-mapped I/O (MMIO) address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Hash)]
pub struct MmioAddress(pub(crate) *mut u8);

impl MmioAddress {
    /// Adds the offset onto the address.
    fn add_offset(self, offset: u8) -> Self {
        // SAFETY: We ensure on a higher level that the base address is valid
        // and that this will not wrap.
        let address = unsafe { self.0.add(usize::from(offset)) };
        Self(address)
    }
}

fn assert_offset(offset: u8) {
    assert!(
        offset < offsets::MAX,
        "the offset should be within the expected range: {offset}, expected: < {}",
        offsets::MAX
    );
}

/// Abstraction over the register block of a UART1 peripheral.
///
/// This acts as Hardware Abstraction Layer (HAL).
pub trait Backend {
    /// Reads one byte from the specified register.
    ///
    /// This needs a mutable reference as reads can have side effects on the
    /// device, depending on the register. For example, reading [`SR`] and
    /// then DR clears [`SR::IDLE`].
    ///
    /// # Arguments
    ///
    /// - `offset`: Offset regarding the base address.
    ///
    /// # Safety
    ///
    /// Callers must ensure that the provided address is valid and safe to read.
    unsafe fn read_register(&mut self, offset: u8) -> u8;

    /// Writes one byte to the specified register.
    ///
    /// Writes can have side effects on the device, depending on the register.
    ///
    /// # Arguments
    ///
    /// - `offset`: Offset regarding the base address.
    ///
    /// # Safety
    ///
    /// Callers must ensure that the provided address is valid and safe to write.
    unsafe fn write_register(&mut self, offset: u8, value: u8);
}

/// MMIO-mapped UART1, the only way the peripheral is wired on STM8S.
#[derive(Debug)]
pub struct MmioBackend(pub(crate) MmioAddress /* base address, non-null */);

impl Backend for MmioBackend {
    unsafe fn read_register(&mut self, offset: u8) -> u8 {
        assert_offset(offset);
        let address = self.0.add_offset(offset);

        // SAFETY: The caller ensured that the MMIO address is safe to use.
        unsafe { read_volatile(address.0) }
    }

    unsafe fn write_register(&mut self, offset: u8, value: u8) {
        assert_offset(offset);
        let address = self.0.add_offset(offset);
        // SAFETY: The caller ensured that the MMIO address is safe to use.
        unsafe { write_volatile(address.0, value) }
    }
}

/// In-memory stand-in for the UART1 register block.
///
/// Starts with the power-on values and mimics the register behavior the
/// driver depends on:
/// - [`SR`] ignores writes; the hardware side is driven via
///   [`InMemoryBackend::raise_status`].
/// - A read of DR that directly follows a read of [`SR`] clears
///   [`SR::CLEARED_BY_READ_SEQUENCE`]. Any read of DR clears [`SR::RXNE`].
///
/// Useful for tests and for host-side tooling that wants to inspect the
/// register image a configuration produces.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InMemoryBackend {
    registers: [u8; offsets::MAX as usize],
    status_read: bool,
}

impl InMemoryBackend {
    /// Creates a register block with the power-on values.
    #[must_use]
    pub const fn new() -> Self {
        let mut registers = [0; offsets::MAX as usize];
        registers[offsets::SR as usize] = SR::RESET.bits();
        Self {
            registers,
            status_read: false,
        }
    }

    /// Returns the raw value of a register without any read side effects.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not below [`offsets::MAX`].
    #[must_use]
    pub fn register(&self, offset: u8) -> u8 {
        assert_offset(offset);
        self.registers[usize::from(offset)]
    }

    /// Returns the complete register image.
    #[must_use]
    pub const fn registers(&self) -> &[u8; offsets::MAX as usize] {
        &self.registers
    }

    /// Sets status flags as the hardware would, e.g., when a frame arrives.
    pub fn raise_status(&mut self, flags: SR) {
        self.registers[usize::from(offsets::SR)] |= flags.bits();
    }

    /// Clears status flags as the hardware would, e.g., when a transmission
    /// starts.
    pub fn lower_status(&mut self, flags: SR) {
        self.registers[usize::from(offsets::SR)] &= !flags.bits();
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for InMemoryBackend {
    unsafe fn read_register(&mut self, offset: u8) -> u8 {
        assert_offset(offset);
        let value = self.registers[usize::from(offset)];

        match offset {
            offsets::SR => self.status_read = true,
            offsets::DR => {
                let mut cleared = SR::RXNE;
                if self.status_read {
                    cleared |= SR::CLEARED_BY_READ_SEQUENCE;
                }
                self.lower_status(cleared);
                self.status_read = false;
            }
            _ => {}
        }

        value
    }

    unsafe fn write_register(&mut self, offset: u8, value: u8) {
        assert_offset(offset);
        if offset == offsets::SR {
            return;
        }
        self.registers[usize::from(offset)] = value;
    }
}
