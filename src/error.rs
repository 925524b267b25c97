// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors that can happen when working with [`Uart1`].

use crate::backend::MmioAddress;
use core::error::Error;
use core::fmt::Display;

pub use crate::spec::InvalidBaudRateError;

#[cfg(doc)]
use crate::Uart1;

/// The specified address is invalid because it is either null or doesn't offer
/// [`offsets::MAX`] subsequent addresses.
///
/// [`offsets::MAX`]: crate::spec::registers::offsets::MAX
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidAddressError(pub(crate) MmioAddress);

impl Display for InvalidAddressError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid register address: {:x?}", self.0.0)
    }
}

impl Error for InvalidAddressError {}
