// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for [`Uart1`].
//!
//! [`Uart1`]: crate::Uart1

use crate::spec::registers::{Parity, StopBits, SyncMode, WordLength};
use bitflags::bitflags;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// The speed of data transmission, measured in symbols per second (or bits, in
/// the case of simple UARTs).
///
/// This type is a convenient and non-ABI compatible abstraction. Use
/// [`calc_divisor`] to get the values for [`BRR1`] and [`BRR2`]. The
/// peripheral supports at most [`MAX_BAUD_RATE`].
///
/// [`calc_divisor`]: crate::spec::calc_divisor
/// [`BRR1`]: crate::spec::registers::BRR1
/// [`BRR2`]: crate::spec::registers::BRR2
/// [`MAX_BAUD_RATE`]: crate::spec::MAX_BAUD_RATE
///
/// Comparison, equality, and hashing go by the integer value, so
/// `Custom(9600)` and [`BaudRate::Baud9600`] are the same baud rate.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Default)]
pub enum BaudRate {
    // List of typical baud rates.
    Baud230400,
    #[default]
    Baud115200,
    Baud57600,
    Baud38400,
    Baud19200,
    Baud9600,
    Baud4800,
    Baud2400,
    Baud1200,
    Baud600,
    Baud300,
    Custom(u32),
}

impl BaudRate {
    /// Returns the value as corresponding integer.
    #[must_use]
    pub const fn to_integer(self) -> u32 {
        match self {
            Self::Baud230400 => 230400,
            Self::Baud115200 => 115200,
            Self::Baud57600 => 57600,
            Self::Baud38400 => 38400,
            Self::Baud19200 => 19200,
            Self::Baud9600 => 9600,
            Self::Baud4800 => 4800,
            Self::Baud2400 => 2400,
            Self::Baud1200 => 1200,
            Self::Baud600 => 600,
            Self::Baud300 => 300,
            Self::Custom(val) => val,
        }
    }

    /// Creates the type from an integer representation of the baud rate.
    #[must_use]
    pub const fn from_integer(value: u32) -> Self {
        match value {
            230400 => Self::Baud230400,
            115200 => Self::Baud115200,
            57600 => Self::Baud57600,
            38400 => Self::Baud38400,
            19200 => Self::Baud19200,
            9600 => Self::Baud9600,
            4800 => Self::Baud4800,
            2400 => Self::Baud2400,
            1200 => Self::Baud1200,
            600 => Self::Baud600,
            300 => Self::Baud300,
            baud_rate => Self::Custom(baud_rate),
        }
    }
}

impl PartialEq for BaudRate {
    fn eq(&self, other: &Self) -> bool {
        self.to_integer() == other.to_integer()
    }
}

impl Eq for BaudRate {}

impl Hash for BaudRate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_integer().hash(state);
    }
}

impl PartialOrd for BaudRate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BaudRate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_integer().cmp(&other.to_integer())
    }
}

bitflags! {
    /// Directions to enable, mapped onto [`CR2::TEN`] and [`CR2::REN`].
    ///
    /// Either, both, or neither may be set.
    ///
    /// [`CR2::TEN`]: crate::spec::registers::CR2::TEN
    /// [`CR2::REN`]: crate::spec::registers::CR2::REN
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Mode: u8 {
        /// Enable the transmitter.
        const TRANSMIT = 1 << 0;
        /// Enable the receiver.
        const RECEIVE = 1 << 1;
    }
}

/// Provides the input clock frequency of the peripheral (`f_MASTER`).
///
/// [`Uart1::init`] queries the source exactly once per call and does not
/// cache the result.
///
/// A plain `u32` acts as a fixed frequency in Hz.
///
/// [`Uart1::init`]: crate::Uart1::init
pub trait ClockSource {
    /// Returns the current input clock frequency in Hz.
    fn clock_frequency_hz(&self) -> u32;
}

impl ClockSource for u32 {
    fn clock_frequency_hz(&self) -> u32 {
        *self
    }
}

/// Configuration for [`Uart1`].
///
/// Please note that sender and receiver **must agree** on the transmission
/// settings, otherwise you receive garbage.
///
/// [`Uart1`]: crate::Uart1
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Config {
    // Transmission Config
    /// The baud rate to use.
    pub baud_rate: BaudRate,
    /// The length of each transmitted word.
    pub word_length: WordLength,
    /// The amount of stop bits.
    pub stop_bits: StopBits,
    /// Whether parity bits should be used.
    pub parity: Parity,

    // Device Config
    /// Whether SCLK is driven, and how.
    pub sync_mode: SyncMode,
    /// Which directions to enable.
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        // Default is 8-N-1, asynchronous, both directions.
        Self {
            baud_rate: BaudRate::Baud115200,
            word_length: WordLength::EightBits,
            stop_bits: StopBits::One,
            parity: Parity::Disabled,

            sync_mode: SyncMode::ClockDisabled,
            mode: Mode::TRANSMIT | Mode::RECEIVE,
        }
    }
}
