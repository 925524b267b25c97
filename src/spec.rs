// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Constants, Register Offsets, and Register Bits.
//!
//! Models the raw low-level details of the STM8S UART1 peripheral as of the
//! [reference manual] (RM0016, section "Universal asynchronous
//! receiver/transmitter (UART)"), and avoids too opinionated abstractions.
//!
//! [reference manual]: https://www.st.com/resource/en/reference_manual/rm0016-stm8s-series-and-stm8af-series-8bit-microcontrollers-stmicroelectronics.pdf

pub use crate::spec::errors::*;

/// Base address of the UART1 register block in the STM8S memory map.
pub const BASE_ADDRESS: usize = 0x5230;

/// Frequency of the internal high-speed RC oscillator (HSI).
pub const HSI_FREQUENCY_HZ: u32 = 16_000_000;

/// Master clock frequency after reset: the HSI divided by eight.
pub const RESET_CLOCK_FREQUENCY_HZ: u32 = HSI_FREQUENCY_HZ / 8;

/// Highest baud rate the peripheral supports.
pub const MAX_BAUD_RATE: u32 = 625_000;

/// Receiver oversampling factor. Every bit is sampled 16 times.
pub const OVERSAMPLING: u32 = 16;

/// Largest mantissa that fits into [`BRR1`] and the upper nibble of
/// [`BRR2`].
///
/// [`BRR1`]: registers::BRR1
/// [`BRR2`]: registers::BRR2
pub const MAX_MANTISSA: u16 = 0xfff;

mod errors {
    use core::error::Error;
    use core::fmt::{self, Display, Formatter};

    /// Error that is returned when [`calc_divisor`] can not derive a divisor
    /// for the requested baud rate.
    ///
    /// [`calc_divisor`]: crate::spec::calc_divisor
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Hash)]
    pub enum InvalidBaudRateError {
        /// A baud rate of zero was requested.
        Zero,
        /// The baud rate exceeds [`MAX_BAUD_RATE`].
        ///
        /// [`MAX_BAUD_RATE`]: crate::spec::MAX_BAUD_RATE
        AboveMaximum {
            /// The requested baud rate.
            baud_rate: u32,
        },
        /// The clock frequency and baud rate result in a mantissa of zero or
        /// one that exceeds [`MAX_MANTISSA`].
        ///
        /// [`MAX_MANTISSA`]: crate::spec::MAX_MANTISSA
        DivisorOutOfRange {
            /// The input clock frequency of the peripheral.
            frequency: u32,
            /// The requested baud rate.
            baud_rate: u32,
        },
    }

    impl Display for InvalidBaudRateError {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            match self {
                Self::Zero => write!(f, "baud rate must not be zero"),
                Self::AboveMaximum { baud_rate } => write!(
                    f,
                    "baud rate {baud_rate} exceeds the maximum of {}",
                    crate::spec::MAX_BAUD_RATE
                ),
                Self::DivisorOutOfRange {
                    frequency,
                    baud_rate,
                } => write!(
                    f,
                    "input values do not result in a representable divisor! frequency={frequency}, baud_rate={baud_rate}"
                ),
            }
        }
    }

    impl Error for InvalidBaudRateError {}
}

/// Baud rate divisor as programmed into [`BRR1`] and [`BRR2`].
///
/// The divisor is a fixed-point number with a 12-bit mantissa and a 4-bit
/// fraction, i.e., the peripheral divides its input clock by
/// `16 * (mantissa + fraction / 16)`.
///
/// [`BRR1`]: registers::BRR1
/// [`BRR2`]: registers::BRR2
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Divisor {
    mantissa: u16,
    fraction: u8,
}

impl Divisor {
    /// Reassembles the divisor from the raw register values.
    #[must_use]
    pub const fn from_registers(brr1: registers::BRR1, brr2: registers::BRR2) -> Self {
        let mantissa = ((brr2.mantissa_high() as u16) << 8) | brr1 as u16;
        Self {
            mantissa,
            fraction: brr2.fraction(),
        }
    }

    /// Returns the integer part (12 bits).
    #[must_use]
    pub const fn mantissa(self) -> u16 {
        self.mantissa
    }

    /// Returns the fractional part in sixteenths (4 bits).
    #[must_use]
    pub const fn fraction(self) -> u8 {
        self.fraction
    }

    /// Returns the 16-bit `UART_DIV` value, i.e., the ratio between the input
    /// clock and the resulting baud rate.
    #[must_use]
    pub const fn to_raw(self) -> u16 {
        (self.mantissa << 4) | self.fraction as u16
    }

    /// Returns the value for [`BRR1`]: the low byte of the mantissa.
    ///
    /// [`BRR1`]: registers::BRR1
    #[must_use]
    pub const fn brr1(self) -> registers::BRR1 {
        (self.mantissa & 0xff) as u8
    }

    /// Returns the value for [`BRR2`]: the high nibble of the mantissa and
    /// the fraction.
    ///
    /// [`BRR2`]: registers::BRR2
    #[must_use]
    pub fn brr2(self) -> registers::BRR2 {
        registers::BRR2::empty()
            .set_mantissa_high((self.mantissa >> 8) as u8)
            .set_fraction(self.fraction)
    }
}

/// Calculates the [`Divisor`] for the given input clock and baud rate.
///
/// The mantissa is `frequency / (16 * baud_rate)`. The fraction is recovered
/// from a second quotient scaled by 100, so that no fixed-point or floating
/// point division is needed. All divisions truncate, so the resulting divisor
/// never exceeds the exact one and the effective baud rate is never below the
/// requested one.
///
/// # Arguments
/// - `frequency`: The input clock of the peripheral (`f_MASTER`), for example
///   [`RESET_CLOCK_FREQUENCY_HZ`].
/// - `baud_rate`: The requested baud rate, at most [`MAX_BAUD_RATE`].
pub fn calc_divisor(frequency: u32, baud_rate: u32) -> Result<Divisor, InvalidBaudRateError> {
    if baud_rate == 0 {
        return Err(InvalidBaudRateError::Zero);
    }
    if baud_rate > MAX_BAUD_RATE {
        return Err(InvalidBaudRateError::AboveMaximum { baud_rate });
    }

    // 64 bit: `frequency * 100` overflows u32 above ~42.9 MHz.
    let frequency_wide = u64::from(frequency);
    let scale = u64::from(baud_rate) * u64::from(OVERSAMPLING);
    let mantissa = frequency_wide / scale;
    let mantissa_hundredths = (frequency_wide * 100) / scale;

    if mantissa == 0 || mantissa > u64::from(MAX_MANTISSA) {
        return Err(InvalidBaudRateError::DivisorOutOfRange {
            frequency,
            baud_rate,
        });
    }

    let fraction = ((mantissa_hundredths - mantissa * 100) * 16) / 100;

    Ok(Divisor {
        mantissa: mantissa as u16,
        fraction: (fraction & 0xf) as u8,
    })
}

/// Calculates the effective baud rate for the given input clock and divisor.
///
/// The result is truncated. Returns `None` for an all-zero divisor.
#[must_use]
pub fn calc_baud_rate(frequency: u32, divisor: Divisor) -> Option<u32> {
    frequency.checked_div(u32::from(divisor.to_raw()))
}

/// Exposes low-level information about the on-chip register layout and provides
/// types that model individual registers.
///
/// The getters and setters in this module operate exclusively on raw bit
/// representations within the local computing context. They are limited to
/// extracting or updating the corresponding fields and do not perform direct
/// hardware access. Every setter clears its field before setting it, so stale
/// values from a previous configuration never survive.
pub mod registers {
    use bitflags::bitflags;

    /// Provides the register offset from the base register.
    pub mod offsets {
        /// The maximum register offset, i.e., the amount of registers.
        ///
        /// This maximum index is therefore this value decremented by one.
        pub const MAX: u8 = 11;

        /// Status Register (SR).
        pub const SR: u8 = 0x0;

        /// Data Register (DR).
        ///
        /// Writes hand a byte to the transmitter, reads return the last
        /// received byte.
        pub const DR: u8 = 0x1;

        /// Baud Rate Register 1 (BRR1).
        pub const BRR1: u8 = 0x2;

        /// Baud Rate Register 2 (BRR2).
        pub const BRR2: u8 = 0x3;

        /// Control Register 1 (CR1).
        pub const CR1: u8 = 0x4;

        /// Control Register 2 (CR2).
        pub const CR2: u8 = 0x5;

        /// Control Register 3 (CR3).
        pub const CR3: u8 = 0x6;

        /// Control Register 4 (CR4).
        pub const CR4: u8 = 0x7;

        /// Control Register 5 (CR5).
        pub const CR5: u8 = 0x8;

        /// Guard Time Register (GTR).
        pub const GTR: u8 = 0x9;

        /// Prescaler Register (PSCR).
        pub const PSCR: u8 = 0xa;
    }

    /// Typing of the data register (DR).
    pub type DR = u8;

    bitflags! {
        /// Typing of the Status Register (SR).
        ///
        /// This is a **read-only** register from the driver's point of view.
        /// The bits also act as selectors for [`Uart1::flag_status`].
        ///
        /// [`Uart1::flag_status`]: crate::Uart1::flag_status
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct SR: u8 {
            /// Parity error.
            const PE = 1 << 0;
            /// Framing error: a stop bit was not recognized.
            const FE = 1 << 1;
            /// Noise was detected on a received frame.
            const NF = 1 << 2;
            /// Overrun error: a byte was received while [`Self::RXNE`] was
            /// still set.
            const OR = 1 << 3;
            /// Idle line detected.
            ///
            /// Cleared by a read of SR followed by a read of DR.
            const IDLE = 1 << 4;
            /// Read data register not empty.
            const RXNE = 1 << 5;
            /// Transmission complete: the last frame left the shift register.
            const TC = 1 << 6;
            /// Transmit data register empty: DR can take the next byte.
            const TXE = 1 << 7;
        }
    }

    impl SR {
        /// Value after reset. The transmitter is idle, so both transmit
        /// flags are set.
        pub const RESET: Self = Self::TXE.union(Self::TC);

        /// Error and idle flags that the SR-then-DR read sequence clears.
        pub const CLEARED_BY_READ_SEQUENCE: Self = Self::IDLE
            .union(Self::OR)
            .union(Self::NF)
            .union(Self::FE)
            .union(Self::PE);
    }

    /// Typing of Baud Rate Register 1 (BRR1): bits 11:4 of `UART_DIV`, which
    /// is the low byte of the mantissa.
    ///
    /// Writing BRR1 latches the complete divisor, so [`BRR2`] must be written
    /// first.
    pub type BRR1 = u8;

    /// Value of [`BRR1`] after reset.
    pub const BRR1_RESET: BRR1 = 0;

    bitflags! {
        /// Typing of Baud Rate Register 2 (BRR2).
        ///
        /// The low nibble holds bits 3:0 of `UART_DIV` (the fraction), the
        /// high nibble holds bits 15:12 (the high nibble of the mantissa).
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct BRR2: u8 {
            /// Fraction (bit 0).
            const DIV_F0 = 1 << 0;
            /// Fraction (bit 1).
            const DIV_F1 = 1 << 1;
            /// Fraction (bit 2).
            const DIV_F2 = 1 << 2;
            /// Fraction (bit 3).
            const DIV_F3 = 1 << 3;
            /// Mantissa (bit 8).
            const DIV_M8 = 1 << 4;
            /// Mantissa (bit 9).
            const DIV_M9 = 1 << 5;
            /// Mantissa (bit 10).
            const DIV_M10 = 1 << 6;
            /// Mantissa (bit 11).
            const DIV_M11 = 1 << 7;
        }
    }

    impl BRR2 {
        /// Mask of the fraction field.
        pub const FRACTION: Self = Self::from_bits_retain(0x0f);
        /// Mask of the mantissa field.
        pub const MANTISSA_HIGH: Self = Self::from_bits_retain(0xf0);

        /// Returns the fraction of the divisor.
        #[must_use]
        pub const fn fraction(self) -> u8 {
            self.bits() & 0xf
        }

        /// Sets the fraction of the divisor. Only the low nibble of `value` is
        /// used.
        #[must_use]
        pub fn set_fraction(self, value: u8) -> Self {
            (self - Self::FRACTION) | Self::from_bits_retain(value & 0xf)
        }

        /// Returns the high nibble of the mantissa.
        #[must_use]
        pub const fn mantissa_high(self) -> u8 {
            self.bits() >> 4
        }

        /// Sets the high nibble of the mantissa. Only the low nibble of `value`
        /// is used.
        #[must_use]
        pub fn set_mantissa_high(self, value: u8) -> Self {
            (self - Self::MANTISSA_HIGH) | Self::from_bits_retain((value & 0xf) << 4)
        }
    }

    bitflags! {
        /// Typing of Control Register 1 (CR1).
        ///
        /// Holds the frame format and the global disable bit.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct CR1: u8 {
            /// Parity interrupt enable.
            const PIEN = 1 << 0;
            /// Parity selection, see [`Parity`].
            const PS = 1 << 1;
            /// Parity control enable, see [`Parity`].
            const PCEN = 1 << 2;
            /// Wakeup method (idle line or address mark).
            const WAKE = 1 << 3;
            /// Word length, see [`WordLength`].
            const M = 1 << 4;
            /// UART disable.
            ///
            /// When set, the prescaler and outputs are stopped at the end of
            /// the current byte transfer to reduce power consumption.
            const UARTD = 1 << 5;
            /// Ninth bit to transmit in 9-bit mode.
            const T8 = 1 << 6;
            /// Ninth received bit in 9-bit mode.
            const R8 = 1 << 7;
        }
    }

    impl CR1 {
        /// Value after reset.
        pub const RESET: Self = Self::empty();

        /// Returns the [`WordLength`].
        #[must_use]
        pub const fn word_length(self) -> WordLength {
            WordLength::from_raw_bits(self.bits() >> 4)
        }

        /// Sets the [`WordLength`].
        #[must_use]
        pub fn set_word_length(self, value: WordLength) -> Self {
            (self - Self::M) | Self::from_bits_retain(value.to_raw_bits() << 4)
        }

        /// Returns the [`Parity`].
        #[must_use]
        pub const fn parity(self) -> Parity {
            Parity::from_raw_bits(self.bits() >> 1)
        }

        /// Sets the [`Parity`].
        #[must_use]
        pub fn set_parity(self, value: Parity) -> Self {
            (self - (Self::PCEN | Self::PS)) | Self::from_bits_retain(value.to_raw_bits() << 1)
        }
    }

    bitflags! {
        /// Typing of Control Register 2 (CR2).
        ///
        /// Enables the transmitter, the receiver, and the interrupt sources.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct CR2: u8 {
            /// Send break.
            const SBK = 1 << 0;
            /// Receiver wakeup (mute mode).
            const RWU = 1 << 1;
            /// Receiver enable.
            const REN = 1 << 2;
            /// Transmitter enable.
            const TEN = 1 << 3;
            /// Idle line interrupt enable.
            const ILIEN = 1 << 4;
            /// Receiver interrupt enable.
            const RIEN = 1 << 5;
            /// Transmission complete interrupt enable.
            const TCIEN = 1 << 6;
            /// Transmitter interrupt enable.
            const TIEN = 1 << 7;
        }
    }

    impl CR2 {
        /// Value after reset.
        pub const RESET: Self = Self::empty();
    }

    bitflags! {
        /// Typing of Control Register 3 (CR3).
        ///
        /// Holds the stop bits and the synchronous clock configuration.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct CR3: u8 {
            /// Last bit clock pulse: the clock pulse of the last data bit is
            /// output on SCLK.
            const LBCL = 1 << 0;
            /// Clock phase, see [`ClockPhase`].
            const CPHA = 1 << 1;
            /// Clock polarity, see [`ClockPolarity`].
            const CPOL = 1 << 2;
            /// Clock enable: SCLK is driven.
            const CKEN = 1 << 3;
            /// First bit of [`StopBits`].
            const STOP0 = 1 << 4;
            /// Second bit of [`StopBits`].
            const STOP1 = 1 << 5;
            /// LIN mode enable.
            const LINEN = 1 << 6;
            /// Reserved.
            const _RESERVED0 = 1 << 7;
        }
    }

    impl CR3 {
        /// Value after reset.
        pub const RESET: Self = Self::empty();

        /// Mask of the clock sub-flags that [`SyncMode`] controls besides
        /// [`Self::CKEN`].
        pub const CLOCK_BITS: Self = Self::CPOL.union(Self::CPHA).union(Self::LBCL);

        /// Returns the [`StopBits`].
        #[must_use]
        pub const fn stop_bits(self) -> StopBits {
            StopBits::from_raw_bits(self.bits() >> 4)
        }

        /// Sets the [`StopBits`].
        #[must_use]
        pub fn set_stop_bits(self, value: StopBits) -> Self {
            (self - (Self::STOP0 | Self::STOP1)) | Self::from_bits_retain(value.to_raw_bits() << 4)
        }

        /// Returns the [`SyncMode`].
        #[must_use]
        pub const fn sync_mode(self) -> SyncMode {
            if !self.contains(Self::CKEN) {
                return SyncMode::ClockDisabled;
            }
            SyncMode::ClockEnabled(ClockConfig {
                polarity: if self.contains(Self::CPOL) {
                    ClockPolarity::IdleHigh
                } else {
                    ClockPolarity::IdleLow
                },
                phase: if self.contains(Self::CPHA) {
                    ClockPhase::SecondEdge
                } else {
                    ClockPhase::FirstEdge
                },
                last_bit_pulse: self.contains(Self::LBCL),
            })
        }

        /// Sets the clock sub-flags ([`Self::CLOCK_BITS`]) of the
        /// [`SyncMode`] while leaving [`Self::CKEN`] untouched.
        ///
        /// The peripheral requires these bits to be configured while the
        /// transmitter and receiver are disabled.
        #[must_use]
        pub fn set_clock_bits(self, value: SyncMode) -> Self {
            (self - Self::CLOCK_BITS) | value.clock_bits()
        }
    }

    bitflags! {
        /// Typing of Control Register 4 (CR4).
        ///
        /// Node address and LIN break detection. Only reset by this driver.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct CR4: u8 {
            /// Address of the node (bit 0).
            const ADD0 = 1 << 0;
            /// Address of the node (bit 1).
            const ADD1 = 1 << 1;
            /// Address of the node (bit 2).
            const ADD2 = 1 << 2;
            /// Address of the node (bit 3).
            const ADD3 = 1 << 3;
            /// LIN break detection flag.
            const LBDF = 1 << 4;
            /// LIN break detection length.
            const LBDL = 1 << 5;
            /// LIN break detection interrupt enable.
            const LBDIEN = 1 << 6;
            /// Reserved.
            const _RESERVED0 = 1 << 7;
        }
    }

    impl CR4 {
        /// Value after reset.
        pub const RESET: Self = Self::empty();
    }

    bitflags! {
        /// Typing of Control Register 5 (CR5).
        ///
        /// IrDA, half-duplex and smartcard modes. Only reset by this driver.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct CR5: u8 {
            /// Reserved.
            const _RESERVED0 = 1 << 0;
            /// IrDA mode enable.
            const IREN = 1 << 1;
            /// IrDA low power.
            const IRLP = 1 << 2;
            /// Half-duplex selection.
            const HDSEL = 1 << 3;
            /// Smartcard NACK enable.
            const NACK = 1 << 4;
            /// Smartcard mode enable.
            const SCEN = 1 << 5;
            /// Reserved.
            const _RESERVED1 = 1 << 6;
            /// Reserved.
            const _RESERVED2 = 1 << 7;
        }
    }

    impl CR5 {
        /// Value after reset.
        pub const RESET: Self = Self::empty();
    }

    /// Typing of the Guard Time Register (GTR), used in smartcard mode.
    pub type GTR = u8;

    /// Value of [`GTR`] after reset.
    pub const GTR_RESET: GTR = 0;

    /// Typing of the Prescaler Register (PSCR), used in smartcard and IrDA
    /// low-power modes.
    pub type PSCR = u8;

    /// Value of [`PSCR`] after reset.
    pub const PSCR_RESET: PSCR = 0;

    /// The amount of data bits per frame, selected by [`CR1::M`].
    ///
    /// This type is a convenient and non-ABI compatible abstraction. ABI
    /// compatibility is given via [`WordLength::from_raw_bits`] and
    /// [`WordLength::to_raw_bits`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum WordLength {
        /// One start bit, eight data bits, n stop bits.
        ///
        /// # Recommendation
        /// This is the recommended default.
        #[default]
        EightBits,
        /// One start bit, nine data bits, n stop bits. The ninth bit lives in
        /// [`CR1::T8`] and [`CR1::R8`].
        NineBits,
    }

    impl WordLength {
        /// Translates the raw encoding into the corresponding value.
        ///
        /// This function operates on the value as-is and does not perform any
        /// shifting bits.
        #[must_use]
        pub const fn from_raw_bits(bits: u8) -> Self {
            match bits & 0b1 {
                0 => Self::EightBits,
                _ => Self::NineBits,
            }
        }

        /// Translates the value into the corresponding raw encoding.
        ///
        /// This function operates on the value as-is and does not perform any
        /// shifting bits.
        #[must_use]
        pub const fn to_raw_bits(self) -> u8 {
            match self {
                Self::EightBits => 0b0,
                Self::NineBits => 0b1,
            }
        }
    }

    /// The amount of stop bits per frame, selected by [`CR3::STOP0`] and
    /// [`CR3::STOP1`].
    ///
    /// This type is a convenient and non-ABI compatible abstraction. ABI
    /// compatibility is given via [`StopBits::from_raw_bits`] and
    /// [`StopBits::to_raw_bits`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum StopBits {
        /// One stop bit.
        #[default]
        One,
        /// Half a stop bit. Intended for smartcard reception.
        Half,
        /// Two stop bits.
        Two,
        /// One and a half stop bits. Intended for smartcard transmission.
        OneAndHalf,
    }

    impl StopBits {
        /// Translates the raw encoding into the corresponding value.
        ///
        /// This function operates on the value as-is and does not perform any
        /// shifting bits.
        #[must_use]
        pub const fn from_raw_bits(bits: u8) -> Self {
            match bits & 0b11 {
                0b00 => Self::One,
                0b01 => Self::Half,
                0b10 => Self::Two,
                0b11 => Self::OneAndHalf,
                _ => unreachable!(),
            }
        }

        /// Translates the value into the corresponding raw encoding.
        ///
        /// This function operates on the value as-is and does not perform any
        /// shifting bits.
        #[must_use]
        pub const fn to_raw_bits(self) -> u8 {
            match self {
                Self::One => 0b00,
                Self::Half => 0b01,
                Self::Two => 0b10,
                Self::OneAndHalf => 0b11,
            }
        }
    }

    /// Parity generation and checking, selected by [`CR1::PCEN`] and
    /// [`CR1::PS`].
    ///
    /// This type is a convenient and non-ABI compatible abstraction. ABI
    /// compatibility is given via [`Parity::from_raw_bits`] and
    /// [`Parity::to_raw_bits`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Parity {
        /// No parity bit is transmitted nor expected.
        #[default]
        Disabled,
        /// The number of set bits including the parity bit must be even.
        Even,
        /// The number of set bits including the parity bit must be odd.
        Odd,
    }

    impl Parity {
        /// Translates the raw encoding into the corresponding value.
        ///
        /// Bit 0 is `PS`, bit 1 is `PCEN`. This function operates on the value
        /// as-is and does not perform any shifting bits.
        #[must_use]
        pub const fn from_raw_bits(bits: u8) -> Self {
            let enabled = (bits & 0b10) != 0;
            if !enabled {
                return Self::Disabled;
            }
            match bits & 0b1 {
                0 => Self::Even,
                _ => Self::Odd,
            }
        }

        /// Translates the value into the corresponding raw encoding.
        ///
        /// This function operates on the value as-is and does not perform any
        /// shifting bits.
        #[must_use]
        pub const fn to_raw_bits(self) -> u8 {
            match self {
                Self::Disabled => 0b00,
                Self::Even => 0b10,
                Self::Odd => 0b11,
            }
        }
    }

    /// Idle level of SCLK outside of transmissions ([`CR3::CPOL`]).
    #[allow(missing_docs)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum ClockPolarity {
        #[default]
        IdleLow,
        IdleHigh,
    }

    /// Edge of SCLK on which data is captured ([`CR3::CPHA`]).
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum ClockPhase {
        /// The first clock transition is the first data capture edge.
        #[default]
        FirstEdge,
        /// The second clock transition is the first data capture edge.
        SecondEdge,
    }

    /// SCLK parameters in synchronous mode.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ClockConfig {
        /// Idle level of the clock line.
        pub polarity: ClockPolarity,
        /// Data capture edge.
        pub phase: ClockPhase,
        /// Whether the clock pulse of the last data bit (MSB) is output.
        pub last_bit_pulse: bool,
    }

    /// Whether and how the peripheral drives the SCLK pin alongside the data
    /// (synchronous mode).
    ///
    /// This type is a convenient and non-ABI compatible abstraction. The
    /// mapping onto [`CR3`] is given via [`SyncMode::clock_bits`] and
    /// [`CR3::sync_mode`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum SyncMode {
        /// Asynchronous operation; SCLK is not driven.
        #[default]
        ClockDisabled,
        /// Synchronous operation with the given clock parameters.
        ClockEnabled(ClockConfig),
    }

    impl SyncMode {
        /// Returns whether SCLK is driven ([`CR3::CKEN`]).
        #[must_use]
        pub const fn is_clock_enabled(self) -> bool {
            matches!(self, Self::ClockEnabled(_))
        }

        /// Returns the [`CR3::CLOCK_BITS`] that encode the clock parameters.
        ///
        /// Always empty for [`SyncMode::ClockDisabled`].
        #[must_use]
        pub fn clock_bits(self) -> CR3 {
            let Self::ClockEnabled(clock) = self else {
                return CR3::empty();
            };

            let mut bits = CR3::empty();
            bits.set(CR3::CPOL, clock.polarity == ClockPolarity::IdleHigh);
            bits.set(CR3::CPHA, clock.phase == ClockPhase::SecondEdge);
            bits.set(CR3::LBCL, clock.last_bit_pulse);
            bits
        }
    }
}
