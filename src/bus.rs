use embedded_hal::i2c::I2c;

/// Byte transport to an addressed peripheral.
///
/// `send` and `receive` are mandatory.  `init` and `deinit` are hooks which are called by
/// [`Pca9534::init()`][crate::Pca9534::init] and [`Pca9534::deinit()`][crate::Pca9534::deinit];
/// they do nothing by default.
///
/// The driver does no locking of its own: the transport (or the caller) must make sure nobody
/// else uses the bus while a single operation is running.
pub trait Transport {
    type Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Transmit `data` to the device at 7-bit `address`.
    fn send(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Fill `buffer` with bytes read from the device at 7-bit `address`.
    fn receive(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Whether the mandatory capabilities are available.
    fn is_bound(&self) -> bool {
        true
    }
}

/// [`Transport`] over an `embedded-hal` I2C bus.
///
/// A send is a plain I2C write and a receive a plain I2C read, so a register read shows up as
/// two separate transactions on the bus.
#[derive(Debug)]
pub struct I2cTransport<I2C>(I2C);

impl<I2C> I2cTransport<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self(i2c)
    }

    /// Give back the underlying bus.
    pub fn release(self) -> I2C {
        self.0
    }
}

impl<I2C: I2c> Transport for I2cTransport<I2C> {
    type Error = I2C::Error;

    fn send(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }

    fn receive(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.0.read(address, buffer)
    }
}

/// Initialize or de-initialize the platform layer.  Returns 0 on success, negative on failure.
pub type InitDeinitFn = fn() -> i8;
/// Send bytes to a device.  Returns a status code, see [`BusFault::check()`].
pub type SendFn = fn(address: u8, data: &[u8]) -> i8;
/// Receive bytes from a device.  Returns a status code, see [`BusFault::check()`].
pub type ReceiveFn = fn(address: u8, buffer: &mut [u8]) -> i8;

/// Failure reported by a [`Platform`] function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusFault {
    /// Generic failure (`-1`, or any other unknown negative status).
    Failed,
    /// The bus is busy (`-2`).
    Busy,
    /// The device did not acknowledge the transfer (`-3`).
    NoAcknowledge,
}

impl BusFault {
    /// Interpret a platform status code: 0 and above is success.
    pub fn check(status: i8) -> Result<(), BusFault> {
        match status {
            s if s >= 0 => Ok(()),
            -2 => Err(BusFault::Busy),
            -3 => Err(BusFault::NoAcknowledge),
            _ => Err(BusFault::Failed),
        }
    }
}

/// [`Transport`] built from plain function slots, for platforms without an `embedded-hal`
/// implementation.
///
/// `init` and `deinit` are optional, `send` and `receive` must be linked before the driver is
/// initialized.
///
/// ```
/// fn send(_address: u8, _data: &[u8]) -> i8 {
///     0
/// }
///
/// fn receive(_address: u8, buffer: &mut [u8]) -> i8 {
///     buffer.fill(0xff);
///     0
/// }
///
/// let platform = pca9534::Platform::new().link_send(send).link_receive(receive);
/// # use pca9534::Transport;
/// assert!(platform.is_bound());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Platform {
    pub init: Option<InitDeinitFn>,
    pub deinit: Option<InitDeinitFn>,
    pub send: Option<SendFn>,
    pub receive: Option<ReceiveFn>,
}

impl Platform {
    pub const fn new() -> Self {
        Self {
            init: None,
            deinit: None,
            send: None,
            receive: None,
        }
    }

    pub const fn link_init(mut self, f: InitDeinitFn) -> Self {
        self.init = Some(f);
        self
    }

    pub const fn link_deinit(mut self, f: InitDeinitFn) -> Self {
        self.deinit = Some(f);
        self
    }

    pub const fn link_send(mut self, f: SendFn) -> Self {
        self.send = Some(f);
        self
    }

    pub const fn link_receive(mut self, f: ReceiveFn) -> Self {
        self.receive = Some(f);
        self
    }
}

impl Transport for Platform {
    type Error = BusFault;

    fn init(&mut self) -> Result<(), Self::Error> {
        match self.init {
            Some(f) => BusFault::check(f()),
            None => Ok(()),
        }
    }

    fn deinit(&mut self) -> Result<(), Self::Error> {
        match self.deinit {
            Some(f) => BusFault::check(f()),
            None => Ok(()),
        }
    }

    fn send(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        // unbound slots are rejected by `Pca9534::init()`, this is only reachable through misuse
        let f = self.send.ok_or(BusFault::Failed)?;
        BusFault::check(f(address, data))
    }

    fn receive(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        let f = self.receive.ok_or(BusFault::Failed)?;
        BusFault::check(f(address, buffer))
    }

    fn is_bound(&self) -> bool {
        self.send.is_some() && self.receive.is_some()
    }
}

/// Register access on top of a [`Transport`].
pub(crate) trait RegisterExt {
    type Error;

    fn write_reg<R: Into<u8>>(&mut self, addr: u8, reg: R, value: u8) -> Result<(), Self::Error>;
    fn read_reg<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u8, Self::Error>;
}

impl<T: Transport> RegisterExt for T {
    type Error = T::Error;

    fn write_reg<R: Into<u8>>(&mut self, addr: u8, reg: R, value: u8) -> Result<(), Self::Error> {
        let reg = reg.into();
        #[cfg(feature = "defmt")]
        defmt::trace!("pca9534@{=u8:#04x}: write {=u8:#04x} <- {=u8:#04x}", addr, reg, value);
        self.send(addr, &[reg, value])
    }

    fn read_reg<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u8, Self::Error> {
        let mut buf = [0x00];
        self.send(addr, &[reg.into()])?;
        self.receive(addr, &mut buf)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("pca9534@{=u8:#04x}: read -> {=u8:#04x}", addr, buf[0]);
        Ok(buf[0])
    }
}
