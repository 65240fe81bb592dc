use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGeometry {
    /// A measurement endpoint sits on the origin, or the endpoint vectors produce an undefined
    /// angle, so no field of view can be computed
    DegenerateMeasurement,
}

impl Display for InvalidGeometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for InvalidGeometry {}
