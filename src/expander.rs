use core::cell::RefCell;

use crate::{Pca9534, PortMutex, Transport};

/// An initialized [`Pca9534`] shared between its eight [`Pin`][crate::Pin]s.
pub struct Expander<M>(M);

impl<T: Transport> Expander<RefCell<Pca9534<T>>> {
    pub fn new(driver: Pca9534<T>) -> Self {
        Self::with_mutex(driver)
    }
}

impl<T, M> Expander<M>
where
    T: Transport,
    M: PortMutex<Port = Pca9534<T>>,
{
    /// Wrap the driver in a mutex of type `M`, see [`PortMutex`].
    pub fn with_mutex(driver: Pca9534<T>) -> Self {
        Self(PortMutex::create(driver))
    }

    /// Run `f` with exclusive access to the driver, e.g. for whole-port operations.
    pub fn lock<R, F: FnOnce(&mut Pca9534<T>) -> R>(&self, f: F) -> R {
        self.0.lock(f)
    }

    pub fn split(&mut self) -> Parts<'_, M> {
        Parts {
            io0: crate::Pin::new(0, &self.0),
            io1: crate::Pin::new(1, &self.0),
            io2: crate::Pin::new(2, &self.0),
            io3: crate::Pin::new(3, &self.0),
            io4: crate::Pin::new(4, &self.0),
            io5: crate::Pin::new(5, &self.0),
            io6: crate::Pin::new(6, &self.0),
            io7: crate::Pin::new(7, &self.0),
        }
    }
}

/// The pins of one chip.  They start out as inputs, which is how [`Pca9534::init()`] leaves them.
pub struct Parts<'a, M> {
    pub io0: crate::Pin<'a, crate::mode::Input, M>,
    pub io1: crate::Pin<'a, crate::mode::Input, M>,
    pub io2: crate::Pin<'a, crate::mode::Input, M>,
    pub io3: crate::Pin<'a, crate::mode::Input, M>,
    pub io4: crate::Pin<'a, crate::mode::Input, M>,
    pub io5: crate::Pin<'a, crate::mode::Input, M>,
    pub io6: crate::Pin<'a, crate::mode::Input, M>,
    pub io7: crate::Pin<'a, crate::mode::Input, M>,
}
