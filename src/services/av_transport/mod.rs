pub mod types;

pub use types::{PositionInfo, TrackInfo};
