//! Error types.

use crate::interface::DisplayError;
use crate::panel::Operation;

/// Failure of a vendor panel operation.
///
/// `E` is the error type of the wrapped RGB panel, kept as is when one of its
/// operations fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError<E> {
    /// Malformed configuration, detected before any side effect
    InvalidArgument,
    /// The RGB panel could not allocate its resources
    OutOfMemory,
    /// Unknown pixel format or colour element order
    NotSupported,
    /// Sending a command failed
    Channel(DisplayError),
    /// Configuring or driving the reset line failed
    Gpio,
    /// The command channel was released after the multiplexed bring-up
    ChannelReleased,
    /// The wrapped RGB panel failed during the given operation
    Rgb(Operation, E),
}

impl<E> From<DisplayError> for PanelError<E> {
    fn from(err: DisplayError) -> Self {
        PanelError::Channel(err)
    }
}

impl<E> From<crate::gpio::GpioError> for PanelError<E> {
    fn from(_: crate::gpio::GpioError) -> Self {
        PanelError::Gpio
    }
}

impl<E> PanelError<E> {
    /// The RGB panel error, when that is what failed.
    pub fn rgb_cause(&self) -> Option<&E> {
        match self {
            PanelError::Rgb(_, cause) => Some(cause),
            _ => None,
        }
    }
}
