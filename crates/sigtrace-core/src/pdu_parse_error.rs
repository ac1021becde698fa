#[derive(Debug, PartialEq, Eq)]
pub enum PduParseErr {
    BufferEnded { field: Option<&'static str> },
    InvalidValue { field: &'static str, value: u64 },
    InconsistentLength { expected: usize, found: usize },
    Inconsistency { field: &'static str, reason: &'static str },
}

impl PduParseErr {
    /// Short tag naming the offending field, as used in message annotations
    /// such as "FAILED SANITY CHECKS (MI_LEN)"
    pub fn field_tag(&self) -> &'static str {
        match self {
            PduParseErr::BufferEnded { field } => field.unwrap_or("LEN"),
            PduParseErr::InvalidValue { field, .. } => field,
            PduParseErr::InconsistentLength { .. } => "LEN",
            PduParseErr::Inconsistency { field, .. } => field,
        }
    }
}

impl core::fmt::Display for PduParseErr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PduParseErr::BufferEnded { field } => write!(f, "buffer ended while reading {}", field.unwrap_or("?")),
            PduParseErr::InvalidValue { field, value } => write!(f, "invalid value {} for {}", value, field),
            PduParseErr::InconsistentLength { expected, found } => write!(f, "inconsistent length {}, expected {}", found, expected),
            PduParseErr::Inconsistency { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for PduParseErr {}

/// Checks whether a value matches an expected value. If not, returns PduParseErr::InvalidValue
#[macro_export]
macro_rules! expect_value {
    ($value:ident, $expected:expr) => {
        $crate::expect_value!(@inner $value, $expected, stringify!($value))
    };
    ($value:expr, $expected:expr, $field:expr) => {
        $crate::expect_value!(@inner $value, $expected, $field)
    };

    (@inner $value:expr, $expected:expr, $field:expr) => {{
        let val = $value;
        if val == $expected {
            Ok(())
        } else {
            Err($crate::PduParseErr::InvalidValue {
                field: $field,
                value: val.into(),
            })
        }
    }};
}

/// Reads one octet from a ByteReader into a local of the same name
#[macro_export]
macro_rules! let_octet {
    ($buf:expr, $ident:ident, $tag:expr) => {
        let $ident = $buf.read_u8($tag)?;
    };
}
