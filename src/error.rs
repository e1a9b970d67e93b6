//! Error handling primitives for the LIS3DH driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
///
/// Out-of-range logical inputs (unknown data rate, unknown scale, over-range
/// durations) are not errors; they follow the documented fallback and
/// saturation rules of the setters that accept them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Interface(_) => defmt::write!(f, "Error::Interface"),
        }
    }
}
