// SPDX-License-Identifier: MIT OR Apache-2.0

//! # stm8_uart
//!
//! Low-level driver for the UART1 peripheral of [STM8S] microcontrollers.
//! It programs the baud rate, frame format, parity, synchronous clock output
//! and transmit/receive enablement, and exposes primitive transmit and
//! status-flag operations. See [`Uart1`] to get started.
//!
//! ## Features
//!
//! - ✅ `no_std`-compatible and allocation-free
//! - ✅ Fractional baud rate divisor computed from any input clock, without
//!   floating point arithmetic
//! - ✅ Typed registers with named fields, derived from the reference manual
//! - ✅ MMIO access and an in-memory register block behind the same
//!   [`Backend`] interface
//! - ✅ Optional diagnostics via the `log` facade (`log` feature)
//!
//! ## Focus, Scope & Limitations
//!
//! This crate only configures the peripheral, writes single bytes, and reads
//! status flags. Nothing blocks: waiting for [`SR::TXE`] before the next
//! [`Uart1::send_byte`] is up to the caller. Receiving, interrupt-driven
//! buffering, DMA, and flow control are out of scope.
//!
//! The driver assumes exclusive access to the register block. Callers that
//! also touch the peripheral from an interrupt handler must wrap the driver
//! calls in their own critical section.
//!
//! [STM8S]: https://www.st.com/en/microcontrollers-microprocessors/stm8s-series.html

#![no_std]
#![deny(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::must_use_candidate,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]

#[cfg(test)]
extern crate std;

// Must come first so the logging macros are visible in all other modules.
mod fmt;

pub use crate::backend::{Backend, InMemoryBackend, MmioAddress, MmioBackend};
pub use crate::config::{BaudRate, ClockSource, Config, Mode};
pub use crate::error::*;
use crate::spec::registers::{
    BRR1_RESET, BRR2, CR1, CR2, CR3, CR4, CR5, GTR_RESET, PSCR_RESET, SR, offsets,
};
pub use crate::spec::registers::{
    ClockConfig, ClockPhase, ClockPolarity, Parity, StopBits, SyncMode, WordLength,
};
use crate::spec::{BASE_ADDRESS, Divisor, calc_divisor};

pub mod spec;

mod backend;
mod config;
mod error;

/// Driver for the UART1 peripheral, owning a handle to its register block.
///
/// All reads and writes involving device registers operate on the underlying
/// [`Backend`]. Every method takes `&mut self`, so one value has exclusive
/// access to the registers.
///
/// # Example
///
/// ```rust
/// # use stm8_uart::{Config, InMemoryBackend, Uart1};
/// # use stm8_uart::spec::registers::SR;
/// let mut uart = Uart1::new(InMemoryBackend::new());
/// //                        ^ on hardware: `unsafe { Uart1::new_mmio(..) }`
/// uart.deinit();
/// uart.init(&Config::default(), &16_000_000_u32);
/// uart.set_enabled(true);
///
/// for &byte in b"hello world!" {
///     while !uart.flag_status(SR::TXE) {}
///     uart.send_byte(byte);
/// }
/// ```
///
/// # Life Cycle
///
/// - [`Uart1::deinit`]: reset to power-on values
/// - [`Uart1::init`]: apply a [`Config`]
/// - [`Uart1::set_enabled`]: gate the whole peripheral, at any time
/// - [`Uart1::send_byte`] / [`Uart1::flag_status`]: transfer and poll
#[derive(Debug)]
pub struct Uart1<B: Backend> {
    backend: B,
}

impl Uart1<MmioBackend> {
    /// Creates a new [`Uart1`] backed by MMIO at the given base address,
    /// typically [`BASE_ADDRESS`].
    ///
    /// # Safety
    ///
    /// Callers must ensure that the address is valid and safe to use, and
    /// that no other value accesses the same register block.
    pub unsafe fn new_mmio(base_address: *mut u8) -> Result<Self, InvalidAddressError> {
        if base_address.is_null() {
            return Err(InvalidAddressError(MmioAddress(base_address)));
        }
        if (base_address as usize)
            .checked_add(usize::from(offsets::MAX))
            .is_none()
        {
            return Err(InvalidAddressError(MmioAddress(base_address)));
        }

        let backend = MmioBackend(MmioAddress(base_address));

        Ok(Self::new(backend))
    }

    /// Creates a new [`Uart1`] for the register block at [`BASE_ADDRESS`].
    ///
    /// # Safety
    ///
    /// Callers must ensure that the code runs on an STM8S device and that no
    /// other value accesses the UART1 register block.
    #[must_use]
    pub const unsafe fn new_default_mmio() -> Self {
        Self::new(MmioBackend(MmioAddress(BASE_ADDRESS as *mut u8)))
    }
}

impl<B: Backend> Uart1<B> {
    /// Creates a new [`Uart1`] on top of the given backend.
    ///
    /// The registers are not touched.
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns a reference to the underlying [`Backend`].
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns a mutable reference to the underlying [`Backend`].
    pub const fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consumes the driver and returns the underlying [`Backend`].
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    /* ----- Configuration -------------------------------------------------- */

    /// Resets the peripheral to its power-on state.
    ///
    /// First clears a latched [`SR::IDLE`] (and error flags) with the
    /// required read of SR followed by a read of DR, then writes the reset
    /// values to BRR2, BRR1, CR1 to CR5, GTR, and PSCR.
    pub fn deinit(&mut self) {
        trace!("uart1: deinit");

        // SAFETY: We operate on valid register addresses.
        unsafe {
            // This exact order clears IDLE.
            let _ = self.backend.read_register(offsets::SR);
            let _ = self.backend.read_register(offsets::DR);

            self.backend.write_register(offsets::BRR2, BRR2::empty().bits());
            self.backend.write_register(offsets::BRR1, BRR1_RESET);

            self.backend.write_register(offsets::CR1, CR1::RESET.bits());
            self.backend.write_register(offsets::CR2, CR2::RESET.bits());
            self.backend.write_register(offsets::CR3, CR3::RESET.bits());
            self.backend.write_register(offsets::CR4, CR4::RESET.bits());
            self.backend.write_register(offsets::CR5, CR5::RESET.bits());

            self.backend.write_register(offsets::GTR, GTR_RESET);
            self.backend.write_register(offsets::PSCR, PSCR_RESET);
        }
    }

    /// Applies the [`Config`], computing the baud rate divisor from the
    /// frequency reported by `clock`.
    ///
    /// Leaves [`CR1::UARTD`] and all interrupt enable bits untouched. Use
    /// [`Self::set_enabled`] afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the baud rate is zero, above [`MAX_BAUD_RATE`], or results in
    /// a divisor the registers can not hold at the given clock frequency.
    /// This is a programming error; use [`calc_divisor`] to validate
    /// a configuration up front.
    ///
    /// [`MAX_BAUD_RATE`]: spec::MAX_BAUD_RATE
    pub fn init<C: ClockSource + ?Sized>(&mut self, config: &Config, clock: &C) {
        let frequency = clock.clock_frequency_hz();
        let baud_rate = config.baud_rate.to_integer();
        let divisor = match calc_divisor(frequency, baud_rate) {
            Ok(divisor) => divisor,
            Err(e) => panic!("invalid UART1 configuration: {e}"),
        };
        debug!(
            "uart1: init baud_rate={} frequency={} mantissa={} fraction={}",
            baud_rate,
            frequency,
            divisor.mantissa(),
            divisor.fraction()
        );

        // Frame format.
        let cr1 = self.cr1().set_word_length(config.word_length);
        self.write_cr1(cr1);
        let cr3 = self.cr3().set_stop_bits(config.stop_bits);
        self.write_cr3(cr3);
        let cr1 = self.cr1().set_parity(config.parity);
        self.write_cr1(cr1);

        // Baud rate. BRR1 latches the divisor, so BRR2 goes first.
        // SAFETY: We operate on valid register addresses.
        unsafe {
            self.backend.write_register(offsets::BRR1, BRR1_RESET);
            self.backend.write_register(offsets::BRR2, BRR2::empty().bits());
            self.backend.write_register(offsets::BRR2, divisor.brr2().bits());
            self.backend.write_register(offsets::BRR1, divisor.brr1());
        }

        // Transmitter and receiver must be off while the clock bits change.
        let cr2 = self.cr2() - (CR2::TEN | CR2::REN);
        self.write_cr2(cr2);
        let cr3 = self.cr3().set_clock_bits(config.sync_mode);
        self.write_cr3(cr3);

        let mut cr2 = self.cr2();
        cr2.set(CR2::TEN, config.mode.contains(Mode::TRANSMIT));
        self.write_cr2(cr2);
        let mut cr2 = self.cr2();
        cr2.set(CR2::REN, config.mode.contains(Mode::RECEIVE));
        self.write_cr2(cr2);

        let mut cr3 = self.cr3();
        cr3.set(CR3::CKEN, config.sync_mode.is_clock_enabled());
        self.write_cr3(cr3);
    }

    /// Enables or disables the whole peripheral.
    ///
    /// This is a low-power gate ([`CR1::UARTD`]) independent of the
    /// transmitter and receiver enable bits set by [`Self::init`], and can be
    /// toggled at any time without reconfiguring the peripheral.
    pub fn set_enabled(&mut self, enabled: bool) {
        trace!("uart1: set_enabled({})", enabled);
        let mut cr1 = self.cr1();
        // The hardware bit is a *disable* bit.
        cr1.set(CR1::UARTD, !enabled);
        self.write_cr1(cr1);
    }

    /// Returns whether the peripheral is enabled, see [`Self::set_enabled`].
    pub fn is_enabled(&mut self) -> bool {
        !self.cr1().contains(CR1::UARTD)
    }

    /* ----- User I/O ------------------------------------------------------- */

    /// Writes a raw byte into the data register.
    ///
    /// This does not wait for [`SR::TXE`] and does not report completion:
    /// poll [`Self::flag_status`] before reusing the data register. Writing
    /// while the transmitter is disabled or busy has hardware-defined effects.
    pub fn send_byte(&mut self, byte: u8) {
        // SAFETY: We operate on valid register addresses.
        unsafe {
            self.backend.write_register(offsets::DR, byte);
        }
    }

    /// Returns whether any of the selected status flags is set.
    ///
    /// No flag is cleared by this query.
    pub fn flag_status(&mut self, flag: SR) -> bool {
        self.sr().intersects(flag)
    }

    /* ----- Typed Register Getters ----------------------------------------- */

    /// Fetches the current value from the [`SR`].
    pub fn sr(&mut self) -> SR {
        // SAFETY: We operate on valid register addresses.
        let val = unsafe { self.backend.read_register(offsets::SR) };
        SR::from_bits_retain(val)
    }

    /// Fetches the current value from the [`CR1`].
    pub fn cr1(&mut self) -> CR1 {
        // SAFETY: We operate on valid register addresses.
        let val = unsafe { self.backend.read_register(offsets::CR1) };
        CR1::from_bits_retain(val)
    }

    /// Fetches the current value from the [`CR2`].
    pub fn cr2(&mut self) -> CR2 {
        // SAFETY: We operate on valid register addresses.
        let val = unsafe { self.backend.read_register(offsets::CR2) };
        CR2::from_bits_retain(val)
    }

    /// Fetches the current value from the [`CR3`].
    pub fn cr3(&mut self) -> CR3 {
        // SAFETY: We operate on valid register addresses.
        let val = unsafe { self.backend.read_register(offsets::CR3) };
        CR3::from_bits_retain(val)
    }

    /// Fetches the currently programmed [`Divisor`] from BRR1 and BRR2.
    pub fn divisor(&mut self) -> Divisor {
        // SAFETY: We operate on valid register addresses.
        let (brr1, brr2) = unsafe {
            (
                self.backend.read_register(offsets::BRR1),
                self.backend.read_register(offsets::BRR2),
            )
        };
        Divisor::from_registers(brr1, BRR2::from_bits_retain(brr2))
    }

    fn write_cr1(&mut self, value: CR1) {
        // SAFETY: We operate on valid register addresses.
        unsafe { self.backend.write_register(offsets::CR1, value.bits()) }
    }

    fn write_cr2(&mut self, value: CR2) {
        // SAFETY: We operate on valid register addresses.
        unsafe { self.backend.write_register(offsets::CR2, value.bits()) }
    }

    fn write_cr3(&mut self, value: CR3) {
        // SAFETY: We operate on valid register addresses.
        unsafe { self.backend.write_register(offsets::CR3, value.bits()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{HSI_FREQUENCY_HZ, RESET_CLOCK_FREQUENCY_HZ};
    use std::vec::Vec;

    /// Register block that also records every write as `(offset, value)`.
    #[derive(Debug, Default)]
    struct WriteLog {
        registers: InMemoryBackend,
        writes: Vec<(u8, u8)>,
    }

    impl WriteLog {
        fn position(&self, predicate: impl Fn(u8, u8) -> bool) -> Option<usize> {
            self.writes
                .iter()
                .position(|&(offset, value)| predicate(offset, value))
        }

        fn values_of(&self, register: u8) -> Vec<u8> {
            self.writes
                .iter()
                .filter(|&&(offset, _)| offset == register)
                .map(|&(_, value)| value)
                .collect()
        }
    }

    impl Backend for WriteLog {
        unsafe fn read_register(&mut self, offset: u8) -> u8 {
            // SAFETY: Forwarded unchanged to the in-memory backend.
            unsafe { self.registers.read_register(offset) }
        }

        unsafe fn write_register(&mut self, offset: u8, value: u8) {
            self.writes.push((offset, value));
            // SAFETY: Forwarded unchanged to the in-memory backend.
            unsafe { self.registers.write_register(offset, value) }
        }
    }

    fn uart() -> Uart1<InMemoryBackend> {
        let mut uart = Uart1::new(InMemoryBackend::new());
        uart.deinit();
        uart
    }

    fn synchronous() -> SyncMode {
        SyncMode::ClockEnabled(ClockConfig {
            polarity: ClockPolarity::IdleHigh,
            phase: ClockPhase::SecondEdge,
            last_bit_pulse: true,
        })
    }

    #[test]
    fn test_deinit_resets_registers() {
        let mut uart = Uart1::new(InMemoryBackend::new());
        // SAFETY: The in-memory backend accepts every valid offset.
        unsafe {
            for offset in offsets::BRR1..offsets::MAX {
                uart.backend_mut().write_register(offset, 0xff);
            }
        }

        uart.deinit();

        let registers = uart.backend().registers();
        assert_eq!(registers[usize::from(offsets::SR)], SR::RESET.bits());
        assert!(registers[usize::from(offsets::BRR1)..].iter().all(|&r| r == 0));
    }

    #[test]
    fn test_deinit_clears_idle_line() {
        let mut uart = Uart1::new(InMemoryBackend::new());
        uart.backend_mut()
            .raise_status(SR::IDLE | SR::OR | SR::NF | SR::FE | SR::PE | SR::RXNE);

        uart.deinit();

        for flag in SR::all().iter() {
            let expected = SR::RESET.contains(flag);
            assert_eq!(uart.flag_status(flag), expected, "{flag:?}");
        }
    }

    #[test]
    fn test_init_default() {
        let mut uart = uart();
        uart.init(&Config::default(), &HSI_FREQUENCY_HZ);

        assert_eq!(uart.cr1(), CR1::empty());
        assert_eq!(uart.cr2(), CR2::TEN | CR2::REN);
        assert_eq!(uart.cr3(), CR3::empty());
        assert_eq!(uart.divisor(), calc_divisor(HSI_FREQUENCY_HZ, 115200).unwrap());
    }

    #[test]
    fn test_init_writes_divisor() {
        let mut uart = uart();
        let config = Config {
            baud_rate: BaudRate::Baud9600,
            ..Config::default()
        };
        uart.init(&config, &HSI_FREQUENCY_HZ);

        assert_eq!(uart.backend().register(offsets::BRR1), 104);
        assert_eq!(uart.backend().register(offsets::BRR2), 0x02);
        assert_eq!(uart.divisor().mantissa(), 104);
        assert_eq!(uart.divisor().fraction(), 2);
    }

    #[test]
    fn test_init_mode() {
        let mut uart = uart();

        let config = Config {
            mode: Mode::TRANSMIT,
            ..Config::default()
        };
        uart.init(&config, &HSI_FREQUENCY_HZ);
        assert!(uart.cr2().contains(CR2::TEN));
        assert!(!uart.cr2().contains(CR2::REN));

        let config = Config {
            mode: Mode::RECEIVE,
            ..Config::default()
        };
        uart.init(&config, &HSI_FREQUENCY_HZ);
        assert!(!uart.cr2().contains(CR2::TEN));
        assert!(uart.cr2().contains(CR2::REN));

        let config = Config {
            mode: Mode::empty(),
            ..Config::default()
        };
        uart.init(&config, &HSI_FREQUENCY_HZ);
        assert!(!uart.cr2().intersects(CR2::TEN | CR2::REN));
    }

    #[test]
    fn test_init_synchronous() {
        let mut uart = uart();
        let config = Config {
            sync_mode: synchronous(),
            ..Config::default()
        };
        uart.init(&config, &HSI_FREQUENCY_HZ);

        assert_eq!(
            uart.cr3(),
            CR3::CKEN | CR3::CPOL | CR3::CPHA | CR3::LBCL
        );
        assert_eq!(uart.cr3().sync_mode(), synchronous());
    }

    #[test]
    fn test_init_write_order() {
        let mut uart = Uart1::new(WriteLog::default());
        uart.deinit();
        uart.backend_mut().writes.clear();

        let config = Config {
            baud_rate: BaudRate::Baud9600,
            sync_mode: synchronous(),
            ..Config::default()
        };
        uart.init(&config, &HSI_FREQUENCY_HZ);
        let divisor = calc_divisor(HSI_FREQUENCY_HZ, 9600).unwrap();
        let log = uart.backend();

        // TEN and REN are off before the clock bits change.
        let cr2_off = log
            .position(|offset, value| {
                offset == offsets::CR2
                    && !CR2::from_bits_retain(value).intersects(CR2::TEN | CR2::REN)
            })
            .unwrap();
        let clock_bits = log
            .position(|offset, value| {
                offset == offsets::CR3 && CR3::from_bits_retain(value).contains(CR3::CLOCK_BITS)
            })
            .unwrap();
        assert!(cr2_off < clock_bits);

        // BRR1 latches the divisor, so BRR2 must already hold its part.
        let brr2 = log
            .position(|offset, value| offset == offsets::BRR2 && value == divisor.brr2().bits())
            .unwrap();
        let brr1 = log
            .position(|offset, value| offset == offsets::BRR1 && value == divisor.brr1())
            .unwrap();
        assert!(brr2 < brr1);
        assert_eq!(log.values_of(offsets::BRR2), [0, 0x02]);
        assert_eq!(log.values_of(offsets::BRR1), [0, 104]);

        // CKEN is only ever set by the final CR3 write.
        let cr3 = log.values_of(offsets::CR3);
        let (last, earlier) = cr3.split_last().unwrap();
        assert!(CR3::from_bits_retain(*last).contains(CR3::CKEN));
        assert!(
            earlier
                .iter()
                .all(|&value| !CR3::from_bits_retain(value).contains(CR3::CKEN))
        );
    }

    #[test]
    fn test_init_twice_leaves_no_residue() {
        let mut uart = uart();
        let first = Config {
            baud_rate: BaudRate::Baud9600,
            word_length: WordLength::NineBits,
            stop_bits: StopBits::OneAndHalf,
            parity: Parity::Odd,
            sync_mode: synchronous(),
            mode: Mode::TRANSMIT | Mode::RECEIVE,
        };
        let second = Config {
            baud_rate: BaudRate::Baud115200,
            word_length: WordLength::EightBits,
            stop_bits: StopBits::Two,
            parity: Parity::Even,
            sync_mode: SyncMode::ClockDisabled,
            mode: Mode::RECEIVE,
        };

        uart.init(&first, &HSI_FREQUENCY_HZ);
        uart.init(&second, &HSI_FREQUENCY_HZ);

        let cr1 = uart.cr1();
        assert_eq!(cr1.word_length(), WordLength::EightBits);
        assert_eq!(cr1.parity(), Parity::Even);
        assert_eq!(cr1, CR1::PCEN);

        let cr3 = uart.cr3();
        assert_eq!(cr3.stop_bits(), StopBits::Two);
        assert_eq!(cr3.sync_mode(), SyncMode::ClockDisabled);
        assert!(!cr3.intersects(CR3::CLOCK_BITS));
        assert_eq!(cr3, CR3::STOP1);

        assert_eq!(uart.cr2(), CR2::REN);
        assert_eq!(uart.divisor(), calc_divisor(HSI_FREQUENCY_HZ, 115200).unwrap());
    }

    #[test]
    fn test_init_keeps_unrelated_bits() {
        let mut uart = uart();
        uart.set_enabled(false);
        // SAFETY: The in-memory backend accepts every valid offset.
        unsafe {
            uart.backend_mut()
                .write_register(offsets::CR2, (CR2::TIEN | CR2::RIEN).bits());
        }

        uart.init(&Config::default(), &HSI_FREQUENCY_HZ);

        assert!(!uart.is_enabled());
        assert_eq!(uart.cr2(), CR2::TIEN | CR2::RIEN | CR2::TEN | CR2::REN);
    }

    #[test]
    #[should_panic(expected = "invalid UART1 configuration")]
    fn test_init_zero_baud_rate() {
        let mut uart = uart();
        let config = Config {
            baud_rate: BaudRate::Custom(0),
            ..Config::default()
        };
        uart.init(&config, &HSI_FREQUENCY_HZ);
    }

    #[test]
    #[should_panic(expected = "invalid UART1 configuration")]
    fn test_init_above_maximum_baud_rate() {
        let mut uart = uart();
        let config = Config {
            baud_rate: BaudRate::Custom(spec::MAX_BAUD_RATE + 1),
            ..Config::default()
        };
        uart.init(&config, &HSI_FREQUENCY_HZ);
    }

    #[test]
    #[should_panic(expected = "invalid UART1 configuration")]
    fn test_init_clock_too_slow() {
        let mut uart = uart();
        let config = Config {
            baud_rate: BaudRate::Custom(spec::MAX_BAUD_RATE),
            ..Config::default()
        };
        uart.init(&config, &RESET_CLOCK_FREQUENCY_HZ);
    }

    #[test]
    fn test_set_enabled_toggles_only_uartd() {
        let mut uart = uart();
        let config = Config {
            word_length: WordLength::NineBits,
            parity: Parity::Odd,
            sync_mode: synchronous(),
            ..Config::default()
        };
        uart.init(&config, &HSI_FREQUENCY_HZ);
        let before = *uart.backend().registers();

        uart.set_enabled(true);
        uart.set_enabled(false);
        assert!(!uart.is_enabled());
        assert!(uart.cr1().contains(CR1::UARTD));
        uart.set_enabled(true);

        assert!(uart.is_enabled());
        assert_eq!(*uart.backend().registers(), before);
    }

    #[test]
    fn test_send_byte_writes_only_data_register() {
        let mut uart = uart();
        uart.init(&Config::default(), &HSI_FREQUENCY_HZ);
        uart.set_enabled(true);
        let before = *uart.backend().registers();

        uart.send_byte(0xa5);

        let after = uart.backend().registers();
        assert_eq!(after[usize::from(offsets::DR)], 0xa5);
        for (offset, (old, new)) in before.iter().zip(after).enumerate() {
            if offset != usize::from(offsets::DR) {
                assert_eq!(old, new, "register at offset {offset} changed");
            }
        }
    }

    #[test]
    fn test_flag_status() {
        let mut uart = uart();
        assert!(uart.flag_status(SR::TXE));
        assert!(uart.flag_status(SR::TC));
        assert!(!uart.flag_status(SR::RXNE));

        uart.backend_mut().lower_status(SR::TXE);
        uart.backend_mut().raise_status(SR::FE);
        assert!(!uart.flag_status(SR::TXE));
        assert!(uart.flag_status(SR::FE));
        assert!(uart.flag_status(SR::TXE | SR::FE));
        assert!(!uart.flag_status(SR::OR | SR::NF | SR::PE));

        // Querying does not clear anything.
        assert!(uart.flag_status(SR::FE));
    }

    #[test]
    fn test_new_mmio_rejects_invalid_address() {
        // SAFETY: Construction fails before any register is accessed.
        let result = unsafe { Uart1::new_mmio(core::ptr::null_mut()) };
        assert!(result.is_err());

        // SAFETY: Construction fails before any register is accessed.
        let result = unsafe { Uart1::new_mmio(usize::MAX as *mut u8) };
        assert!(result.is_err());
    }
}
