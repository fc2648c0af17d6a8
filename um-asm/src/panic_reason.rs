use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
#[repr(u8)]
#[non_exhaustive]
/// Runtime trap representation for the interpreter.
///
/// The machine leaves these situations undefined; this implementation stops
/// and reports the offending platter.
pub enum PanicReason {
    /// The divisor of a division instruction was zero.
    DivisionByZero = 0x01,
    /// An array was indexed at or past its length.
    ArrayOverflow = 0x02,
    /// An identifier did not name an active array, or named one that must
    /// not be abandoned.
    InactiveIdentifier = 0x03,
}

impl fmt::Display for PanicReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ArrayOverflow => write!(f, "array indexed past its length"),
            Self::InactiveIdentifier => write!(f, "identifier names no active array"),
        }
    }
}

impl std::error::Error for PanicReason {}
