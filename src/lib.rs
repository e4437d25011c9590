//! Driver for the `PCA9534` and `PCA9534A` "8-bit I2C-bus and SMBus low power I/O port with
//! interrupt".
//!
//! The driver talks to the chip through a [`Transport`], either an
//! [`embedded_hal::i2c::I2c`] bus wrapped in [`I2cTransport`] or a set of
//! platform function slots bound in a [`Platform`].
//!
//! ```
//! # use embedded_hal_mock::eh1::i2c as mock_i2c;
//! # let expectations = [
//! #     mock_i2c::Transaction::write(0x21, vec![0x01, 0xff]),
//! #     mock_i2c::Transaction::write(0x21, vec![0x02, 0x00]),
//! #     mock_i2c::Transaction::write(0x21, vec![0x03, 0xff]),
//! #     mock_i2c::Transaction::write(0x21, vec![0x03, 0xf0]),
//! #     mock_i2c::Transaction::write(0x21, vec![0x01, 0x05]),
//! # ];
//! # let mut i2c = mock_i2c::Mock::new(&expectations);
//! use pca9534::{I2cTransport, Pca9534, Variant};
//!
//! let mut pca = Pca9534::init(I2cTransport::new(i2c.clone()), Variant::Pca9534, 1).unwrap();
//! // low nibble as outputs, high nibble as inputs
//! pca.set_direction(0x0f).unwrap();
//! pca.write(0x05).unwrap();
//! # i2c.done();
//! ```
//!
//! Register values are never cached: every single-bit operation reads the register back from
//! the chip before writing it.  The read and the write are separate bus transactions, so a change
//! made by somebody else in between is overwritten.  All access to one chip must go through one
//! owner, for example an [`Expander`].
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod bus;
mod common;
mod driver;
mod expander;
mod multi;
mod mutex;
mod pin;

pub use bus::{BusFault, I2cTransport, InitDeinitFn, Platform, ReceiveFn, SendFn, Transport};
pub use common::mode;
pub use common::{Direction, Error, Parameter, Variant};
pub use driver::{Pca9534, Register};
pub use expander::{Expander, Parts};
pub use multi::{read_multiple, write_multiple};
pub use mutex::PortMutex;
pub use pin::Pin;

pub(crate) use bus::RegisterExt;
