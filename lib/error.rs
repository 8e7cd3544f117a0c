use core::fmt;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // Conversion requested while one is in flight
    Busy,
    // Raw reading above the converter full scale
    InvalidSample(u16),
    // Completion event without a pending conversion
    Spurious,
    // Pending conversion never completed
    Stalled,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Busy => write!(f, "conversion busy"),
            Error::InvalidSample(raw) => write!(f, "invalid sample {}", raw),
            Error::Spurious => write!(f, "spurious completion"),
            Error::Stalled => write!(f, "conversion stalled"),
        }
    }
}
