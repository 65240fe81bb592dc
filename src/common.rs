mod angles;

pub use angles::{clamped_acos, length2, unsigned_angle};
