pub mod reader;
pub mod tags;

pub use reader::read_gps_tags;
pub use tags::{GpsTag, GpsTags, TagValue};
