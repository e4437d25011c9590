//! Support for the `PCA9534` and `PCA9534A` "8-bit I2C-bus and SMBus low power I/O port"
use crate::common::bit;
use crate::{Direction, Error, Parameter, RegisterExt, Transport, Variant};

/// Register addresses of the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Live level of every pin, read-only.
    InputPort = 0x00,
    /// Level driven on pins configured as outputs.
    OutputPort = 0x01,
    /// Inverts the input port bits, always 0 after init.
    PolarityInversion = 0x02,
    /// 1 = input, 0 = output.  Inverted with respect to [`Pca9534::set_direction()`].
    Configuration = 0x03,
}

impl From<Register> for u8 {
    fn from(r: Register) -> u8 {
        r as u8
    }
}

/// `PCA9534` / `PCA9534A` driver.
///
/// No register contents are cached.  The single-bit operations (`set_direction_one()`,
/// `write_one()`, `toggle()`, `toggle_one()`) read the register first and write the modified
/// value back in a second transaction.  The pair is not atomic: if anything else changes the
/// register in between, that change is lost.
#[derive(Debug)]
pub struct Pca9534<T> {
    transport: T,
    variant: Variant,
    address: u8,
}

impl<T: Transport> Pca9534<T> {
    /// Set up the chip.
    ///
    /// Validates `address_pins` (the A2..A0 strapping, `0..=7`) and the transport bindings, runs
    /// the transport's init hook and then resets the chip registers: all outputs HIGH, no
    /// polarity inversion and all pins as inputs.  Nothing after a failing step is executed.
    ///
    /// The transport is dropped when this fails.  To retry on the same bus, lend it instead of
    /// moving it: `I2cTransport::new(&mut i2c)`.
    pub fn init(transport: T, variant: Variant, address_pins: u8) -> Result<Self, Error<T::Error>> {
        let address = variant.address(address_pins)?;
        if !transport.is_bound() {
            return Err(Parameter::Transport.into());
        }

        let mut dev = Self {
            transport,
            variant,
            address,
        };
        dev.transport.init().map_err(Error::Transport)?;

        dev.write_register(Register::OutputPort, 0xff)?;
        dev.write_register(Register::PolarityInversion, 0x00)?;
        dev.write_register(Register::Configuration, 0xff)?;
        Ok(dev)
    }

    /// Run the transport's deinit hook.
    pub fn deinit(&mut self) -> Result<(), Error<T::Error>> {
        self.transport.deinit().map_err(Error::Transport)
    }

    /// Point this driver at another chip of the same variant.  No bus traffic.
    ///
    /// On error the current address is kept.
    pub fn set_address(&mut self, address_pins: u8) -> Result<(), Error<T::Error>> {
        self.address = self.variant.address(address_pins)?;
        Ok(())
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Destroy the driver and give back the transport.
    pub fn release(self) -> T {
        self.transport
    }

    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<T::Error>> {
        self.transport
            .write_reg(self.address, reg, value)
            .map_err(|e| self.fault(reg, e))
    }

    pub fn read_register(&mut self, reg: Register) -> Result<u8, Error<T::Error>> {
        self.transport
            .read_reg(self.address, reg)
            .map_err(|e| self.fault(reg, e))
    }

    fn fault(&self, _reg: Register, e: T::Error) -> Error<T::Error> {
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "pca9534@{=u8:#04x}: transfer of {} failed",
            self.address,
            _reg
        );
        Error::Transport(e)
    }

    /// Set the direction of all pins.  A 1 bit makes the pin an output, a 0 bit an input.
    pub fn set_direction(&mut self, mask: u8) -> Result<(), Error<T::Error>> {
        self.write_register(Register::Configuration, !mask)
    }

    /// Set the direction of the pin at `position`, keeping all other pins as they are.
    pub fn set_direction_one(
        &mut self,
        position: u8,
        dir: Direction,
    ) -> Result<(), Error<T::Error>> {
        let mask = bit(position)?;
        let mut outputs = self.direction()?;
        match dir {
            Direction::Output => outputs |= mask,
            Direction::Input => outputs &= !mask,
        }
        self.set_direction(outputs)
    }

    /// Current direction of all pins, 1 bits are outputs.
    pub fn direction(&mut self) -> Result<u8, Error<T::Error>> {
        Ok(!self.read_register(Register::Configuration)?)
    }

    /// Read the level of all pins.
    ///
    /// Pins configured as outputs report the level they are actually driven to.
    pub fn read(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_register(Register::InputPort)
    }

    /// Write the output register.  Only pins configured as outputs follow it.
    pub fn write(&mut self, value: u8) -> Result<(), Error<T::Error>> {
        self.write_register(Register::OutputPort, value)
    }

    /// Drive the pin at `position` HIGH (`true`) or LOW (`false`).
    pub fn write_one(&mut self, position: u8, high: bool) -> Result<(), Error<T::Error>> {
        let mask = bit(position)?;
        if high {
            self.update_output(mask, 0)
        } else {
            self.update_output(0, mask)
        }
    }

    /// Set all pins in `mask_high` HIGH and all pins in `mask_low` LOW with a single write.
    ///
    /// Pins in both masks end up LOW.
    pub fn update_output(&mut self, mask_high: u8, mask_low: u8) -> Result<(), Error<T::Error>> {
        let mut out = self.output_state()?;
        out |= mask_high;
        out &= !mask_low;
        self.write(out)
    }

    /// Invert the output level of all pins in `mask`.
    pub fn toggle(&mut self, mask: u8) -> Result<(), Error<T::Error>> {
        let out = self.output_state()?;
        self.write(out ^ mask)
    }

    pub fn toggle_one(&mut self, position: u8) -> Result<(), Error<T::Error>> {
        self.toggle(bit(position)?)
    }

    /// Read back the output register.
    pub fn output_state(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_register(Register::OutputPort)
    }
}
