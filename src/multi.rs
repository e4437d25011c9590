use crate::{Error, Pca9534, PortMutex, Transport};

/// Set multiple pins at the same time.
///
/// The usual method of setting multiple pins
///
/// ```no_run
/// # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
/// # let pca = pca9534::Pca9534::init(pca9534::I2cTransport::new(i2c), pca9534::Variant::Pca9534, 0).unwrap();
/// # let mut expander = pca9534::Expander::new(pca);
/// # let p = expander.split();
/// # let mut io0 = p.io0.into_output().unwrap();
/// # let mut io1 = p.io1.into_output().unwrap();
/// io0.set_high().unwrap();
/// io1.set_low().unwrap();
/// ```
///
/// costs two read-modify-write cycles and the pins change state one after the other.
/// `write_multiple()` updates all given pins with one read and one write of the output register.
///
/// ## Example
/// ```no_run
/// # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
/// # let pca = pca9534::Pca9534::init(pca9534::I2cTransport::new(i2c), pca9534::Variant::Pca9534, 0).unwrap();
/// # let mut expander = pca9534::Expander::new(pca);
/// # let p = expander.split();
/// # let mut io0 = p.io0.into_output().unwrap();
/// # let mut io1 = p.io1.into_output().unwrap();
/// pca9534::write_multiple(
///     [&mut io0, &mut io1],
///     [true, false],
/// ).unwrap();
/// ```
///
/// # Panics
///
/// If the pins do not all belong to the same [`Expander`][crate::Expander].  An empty set of
/// pins does nothing.
pub fn write_multiple<T, MUTEX, MODE: crate::mode::HasOutput, const N: usize>(
    pins: [&mut crate::Pin<'_, MODE, MUTEX>; N],
    states: [bool; N],
) -> Result<(), Error<T::Error>>
where
    T: Transport,
    MUTEX: PortMutex<Port = Pca9534<T>>,
{
    let mut mask_set_high = 0x00;
    let mut mask_set_low = 0x00;

    let Some(port_driver) = pins.first().map(|p| p.port_driver()) else {
        return Ok(());
    };
    for (pin, state) in pins.iter().zip(states.iter()) {
        assert!(core::ptr::eq(pin.port_driver(), port_driver));
        if *state {
            mask_set_high |= pin.pin_mask();
        } else {
            mask_set_low |= pin.pin_mask();
        }
    }

    port_driver.lock(|drv| drv.update_output(mask_set_high, mask_set_low))
}

/// Read multiple pins at the same time.
///
/// Checking pins one after the other costs one bus transaction each and can observe a
/// different input state for every pin.  `read_multiple()` samples all given pins with a single
/// read of the input register.
///
/// ## Example
/// ```no_run
/// # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
/// # let pca = pca9534::Pca9534::init(pca9534::I2cTransport::new(i2c), pca9534::Variant::Pca9534, 0).unwrap();
/// # let mut expander = pca9534::Expander::new(pca);
/// # let p = expander.split();
/// # let io0 = p.io0;
/// # let io1 = p.io1;
/// let values = pca9534::read_multiple([&io0, &io1]).unwrap();
/// if values[0] {
///     // ...
/// } else if values[1] {
///     // ...
/// }
/// ```
///
/// # Panics
///
/// If the pins do not all belong to the same [`Expander`][crate::Expander].  An empty set of
/// pins is not read from the bus.
pub fn read_multiple<T, MUTEX, MODE: crate::mode::HasInput, const N: usize>(
    pins: [&crate::Pin<'_, MODE, MUTEX>; N],
) -> Result<[bool; N], Error<T::Error>>
where
    T: Transport,
    MUTEX: PortMutex<Port = Pca9534<T>>,
{
    let Some(port_driver) = pins.first().map(|p| p.port_driver()) else {
        return Ok([false; N]);
    };
    let input = port_driver.lock(|drv| drv.read())?;

    let mut ret = [false; N];
    for (pin, state) in pins.iter().zip(ret.iter_mut()) {
        assert!(core::ptr::eq(pin.port_driver(), port_driver));
        *state = input & pin.pin_mask() != 0;
    }

    Ok(ret)
}
