//! Various unsorted geometrical operators.

pub use self::center::center;
pub use self::triangle_area::triangle_area;

mod center;
mod triangle_area;
