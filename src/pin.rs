use core::marker::PhantomData;
use embedded_hal::digital::{self as hal_digital, ErrorType};

use crate::{Direction, Error, Pca9534, PortMutex, Transport};

/// Representation of a single expander pin.
///
/// `Pin` is not constructed directly, this type is created by wrapping a driver in an
/// [`Expander`][crate::Expander] and then getting access to all its pins using the `.split()`
/// method.
///
/// Every operation goes through the driver and re-reads the chip's registers, see
/// [`Pca9534`] for the implications.
pub struct Pin<'a, MODE, MUTEX> {
    position: u8,
    port_driver: &'a MUTEX,
    _m: PhantomData<MODE>,
}

impl<'a, MODE, MUTEX, T> Pin<'a, MODE, MUTEX>
where
    T: Transport,
    MUTEX: PortMutex<Port = Pca9534<T>>,
{
    pub(crate) fn new(position: u8, port_driver: &'a MUTEX) -> Self {
        assert!(position < 8);
        Self {
            position,
            port_driver,
            _m: PhantomData,
        }
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn pin_mask(&self) -> u8 {
        1 << self.position
    }

    pub(crate) fn port_driver(&self) -> &'a MUTEX {
        self.port_driver
    }

    fn into_mode<M>(self) -> Pin<'a, M, MUTEX> {
        Pin {
            position: self.position,
            port_driver: self.port_driver,
            _m: PhantomData,
        }
    }

    pub fn into_input(self) -> Result<Pin<'a, crate::mode::Input, MUTEX>, Error<T::Error>> {
        self.port_driver
            .lock(|drv| drv.set_direction_one(self.position, Direction::Input))?;
        Ok(self.into_mode())
    }

    /// Configure the pin as an output, driving whatever level is in the output register.
    ///
    /// After [`Pca9534::init()`] this is HIGH.
    pub fn into_output(self) -> Result<Pin<'a, crate::mode::Output, MUTEX>, Error<T::Error>> {
        self.port_driver
            .lock(|drv| drv.set_direction_one(self.position, Direction::Output))?;
        Ok(self.into_mode())
    }

    /// Configure the pin as an output and drive it HIGH.
    ///
    /// The level is written before the direction is switched so the pin never glitches.
    pub fn into_output_high(
        self,
    ) -> Result<Pin<'a, crate::mode::Output, MUTEX>, Error<T::Error>> {
        self.port_driver.lock(|drv| {
            drv.write_one(self.position, true)?;
            drv.set_direction_one(self.position, Direction::Output)
        })?;
        Ok(self.into_mode())
    }

    /// Configure the pin as an output and drive it LOW.
    pub fn into_output_low(self) -> Result<Pin<'a, crate::mode::Output, MUTEX>, Error<T::Error>> {
        self.port_driver.lock(|drv| {
            drv.write_one(self.position, false)?;
            drv.set_direction_one(self.position, Direction::Output)
        })?;
        Ok(self.into_mode())
    }
}

impl<'a, MODE: crate::mode::HasInput, MUTEX, T> Pin<'a, MODE, MUTEX>
where
    T: Transport,
    MUTEX: PortMutex<Port = Pca9534<T>>,
{
    pub fn is_high(&self) -> Result<bool, Error<T::Error>> {
        let mask = self.pin_mask();
        self.port_driver
            .lock(|drv| drv.read())
            .map(|v| v & mask != 0)
    }

    pub fn is_low(&self) -> Result<bool, Error<T::Error>> {
        self.is_high().map(|b| !b)
    }
}

impl<'a, MODE: crate::mode::HasOutput, MUTEX, T> Pin<'a, MODE, MUTEX>
where
    T: Transport,
    MUTEX: PortMutex<Port = Pca9534<T>>,
{
    pub fn set_high(&mut self) -> Result<(), Error<T::Error>> {
        self.port_driver
            .lock(|drv| drv.write_one(self.position, true))
    }

    pub fn set_low(&mut self) -> Result<(), Error<T::Error>> {
        self.port_driver
            .lock(|drv| drv.write_one(self.position, false))
    }

    /// Whether the output register has this pin set HIGH (read back from the chip).
    pub fn is_set_high(&self) -> Result<bool, Error<T::Error>> {
        let mask = self.pin_mask();
        self.port_driver
            .lock(|drv| drv.output_state())
            .map(|v| v & mask != 0)
    }

    pub fn is_set_low(&self) -> Result<bool, Error<T::Error>> {
        self.is_set_high().map(|b| !b)
    }

    pub fn toggle(&mut self) -> Result<(), Error<T::Error>> {
        self.port_driver.lock(|drv| drv.toggle_one(self.position))
    }
}

impl<'a, MODE, MUTEX, T> ErrorType for Pin<'a, MODE, MUTEX>
where
    T: Transport,
    T::Error: core::fmt::Debug,
    MUTEX: PortMutex<Port = Pca9534<T>>,
{
    type Error = Error<T::Error>;
}

impl<'a, MODE: crate::mode::HasInput, MUTEX, T> hal_digital::InputPin for Pin<'a, MODE, MUTEX>
where
    T: Transport,
    T::Error: core::fmt::Debug,
    MUTEX: PortMutex<Port = Pca9534<T>>,
{
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Pin::is_high(self)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Pin::is_low(self)
    }
}

impl<'a, MODE: crate::mode::HasOutput, MUTEX, T> hal_digital::OutputPin for Pin<'a, MODE, MUTEX>
where
    T: Transport,
    T::Error: core::fmt::Debug,
    MUTEX: PortMutex<Port = Pca9534<T>>,
{
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Pin::set_low(self)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Pin::set_high(self)
    }
}

impl<'a, MODE: crate::mode::HasOutput, MUTEX, T> hal_digital::StatefulOutputPin
    for Pin<'a, MODE, MUTEX>
where
    T: Transport,
    T::Error: core::fmt::Debug,
    MUTEX: PortMutex<Port = Pca9534<T>>,
{
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Pin::is_set_high(self)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Pin::is_set_low(self)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        Pin::toggle(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Expander, I2cTransport, Pca9534, Variant};
    use embedded_hal::digital::{InputPin, OutputPin, StatefulOutputPin};
    use embedded_hal_mock::eh1::i2c as mock_i2c;

    #[test]
    fn pca9534a_pins() {
        let expectations = [
            // init
            mock_i2c::Transaction::write(0x3c, vec![0x01, 0xff]),
            mock_i2c::Transaction::write(0x3c, vec![0x02, 0x00]),
            mock_i2c::Transaction::write(0x3c, vec![0x03, 0xff]),
            // pin setup io0
            mock_i2c::Transaction::write(0x3c, vec![0x03]),
            mock_i2c::Transaction::read(0x3c, vec![0xff]),
            mock_i2c::Transaction::write(0x3c, vec![0x03, 0xfe]),
            // pin setup io1 as output low
            mock_i2c::Transaction::write(0x3c, vec![0x01]),
            mock_i2c::Transaction::read(0x3c, vec![0xff]),
            mock_i2c::Transaction::write(0x3c, vec![0x01, 0xfd]),
            mock_i2c::Transaction::write(0x3c, vec![0x03]),
            mock_i2c::Transaction::read(0x3c, vec![0xfe]),
            mock_i2c::Transaction::write(0x3c, vec![0x03, 0xfc]),
            // pin setup io0 as input
            mock_i2c::Transaction::write(0x3c, vec![0x03]),
            mock_i2c::Transaction::read(0x3c, vec![0xfc]),
            mock_i2c::Transaction::write(0x3c, vec![0x03, 0xfd]),
            // io1 set_high
            mock_i2c::Transaction::write(0x3c, vec![0x01]),
            mock_i2c::Transaction::read(0x3c, vec![0xfd]),
            mock_i2c::Transaction::write(0x3c, vec![0x01, 0xff]),
            // io1 is_set_high
            mock_i2c::Transaction::write(0x3c, vec![0x01]),
            mock_i2c::Transaction::read(0x3c, vec![0xff]),
            // io1 toggle
            mock_i2c::Transaction::write(0x3c, vec![0x01]),
            mock_i2c::Transaction::read(0x3c, vec![0xff]),
            mock_i2c::Transaction::write(0x3c, vec![0x01, 0xfd]),
            // io0 reads
            mock_i2c::Transaction::write(0x3c, vec![0x00]),
            mock_i2c::Transaction::read(0x3c, vec![0x01]),
            mock_i2c::Transaction::write(0x3c, vec![0x00]),
            mock_i2c::Transaction::read(0x3c, vec![0x00]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let pca = Pca9534::init(I2cTransport::new(bus.clone()), Variant::Pca9534a, 4).unwrap();
        let mut expander = Expander::new(pca);
        let pins = expander.split();

        let io0 = pins.io0.into_output().unwrap();
        let mut io1 = pins.io1.into_output_low().unwrap();
        let mut io0 = io0.into_input().unwrap();

        OutputPin::set_high(&mut io1).unwrap();
        assert!(StatefulOutputPin::is_set_high(&mut io1).unwrap());
        StatefulOutputPin::toggle(&mut io1).unwrap();

        assert!(InputPin::is_high(&mut io0).unwrap());
        assert!(io0.is_low().unwrap());

        bus.done();
    }

    #[test]
    fn bus_error_reaches_pin() {
        let expectations = [
            mock_i2c::Transaction::write(0x20, vec![0x01, 0xff]),
            mock_i2c::Transaction::write(0x20, vec![0x02, 0x00]),
            mock_i2c::Transaction::write(0x20, vec![0x03, 0xff]),
            mock_i2c::Transaction::write(0x20, vec![0x00])
                .with_error(embedded_hal::i2c::ErrorKind::Other),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let pca = Pca9534::init(I2cTransport::new(bus.clone()), Variant::Pca9534, 0).unwrap();
        let mut expander = Expander::new(pca);
        let pins = expander.split();

        assert_eq!(
            pins.io6.is_high(),
            Err(crate::Error::Transport(embedded_hal::i2c::ErrorKind::Other))
        );

        bus.done();
    }
}
