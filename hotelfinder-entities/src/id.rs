use std::fmt;

/// Portable public identifier of a hotel with a string representation.
///
/// The data service hands out both numeric and textual identifiers,
/// both are kept as text.
#[derive(Default, Debug, Clone, Eq, PartialEq, Hash)]
pub struct HotelId(String);

impl HotelId {
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for HotelId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for HotelId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for HotelId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<u64> for HotelId {
    fn from(from: u64) -> Self {
        from.to_string().into()
    }
}

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}
