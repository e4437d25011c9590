use core::fmt;

/// Direction of a pin, as seen by the user of this crate.
///
/// In direction masks a 1 bit means [`Direction::Output`] and a 0 bit means
/// [`Direction::Input`].  The chip's configuration register uses the opposite convention; the
/// driver takes care of the inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input,
    Output,
}

/// Chip variant.  The two variants only differ in their I2C base address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// `PCA9534`, base address `0x20`
    Pca9534,
    /// `PCA9534A`, base address `0x38`
    Pca9534a,
}

impl Variant {
    pub const fn base_address(self) -> u8 {
        match self {
            Variant::Pca9534 => 0x20,
            Variant::Pca9534a => 0x38,
        }
    }

    /// Resolve the 7-bit bus address for the given strapping of the A0..A2 pins.
    pub fn address(self, address_pins: u8) -> Result<u8, Parameter> {
        if address_pins > 7 {
            return Err(Parameter::AddressPins);
        }
        Ok(self.base_address() | address_pins)
    }
}

impl TryFrom<u8> for Variant {
    type Error = Parameter;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Variant::Pca9534),
            1 => Ok(Variant::Pca9534a),
            _ => Err(Parameter::Variant),
        }
    }
}

/// The argument which was rejected with [`Error::InvalidParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parameter {
    /// Unknown chip variant.
    Variant,
    /// Address pin strapping outside `0..=7`.
    AddressPins,
    /// Bit position outside `0..=7`.
    Position,
    /// The transport is missing its mandatory send or receive binding.
    Transport,
}

/// Errors returned by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The transport reported a failure.  Nothing is retried.
    Transport(E),
    /// An argument was out of range.  Detected before any bus traffic.
    InvalidParameter(Parameter),
}

impl<E> From<Parameter> for Error<E> {
    fn from(p: Parameter) -> Self {
        Error::InvalidParameter(p)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "transport failure: {:?}", e),
            Error::InvalidParameter(p) => write!(f, "invalid parameter: {:?}", p),
        }
    }
}

impl<E: fmt::Debug> embedded_hal::digital::Error for Error<E> {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Single-bit mask for `position`, rejecting positions outside the 8-bit port.
pub(crate) fn bit(position: u8) -> Result<u8, Parameter> {
    if position > 7 {
        return Err(Parameter::Position);
    }
    Ok(1 << position)
}

/// Pin Modes
pub mod mode {
    /// Trait for pin-modes which can be used to set a logic level.
    pub trait HasOutput {}
    /// Trait for pin-modes which can be used to read a logic level.
    pub trait HasInput {}

    /// Pin configured as an input.
    pub struct Input;
    impl HasInput for Input {}

    /// Pin configured as an output.
    ///
    /// The input register reflects the driven level, so outputs can be read back as well.
    pub struct Output;
    impl HasOutput for Output {}
    impl HasInput for Output {}
}
