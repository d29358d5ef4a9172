pub mod geo;
pub mod interval;
pub mod place;
pub mod weekday;

pub use geo::*;
pub use interval::*;
pub use place::*;
pub use weekday::*;
