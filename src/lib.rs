pub mod browse;
pub mod didl;
pub mod error;
pub mod models;
pub mod play_uri;
pub mod services;
pub mod util;
pub mod xml_decode;

// Re-export key types for easier access
pub use browse::{
    browsable_id, resolve_play_target, ContentDirectory, MediaBrowser, MediaEntry, ObjectFilter,
    MEDIA_CONTENT_ID_SEP, ROOT_OBJECT_ID,
};
pub use error::{RaumfeldError, Result};
pub use models::{BrowseFlag, PlayMode, PlaybackState, RepeatMode, UpnpClass};
pub use play_uri::DeviceRegistry;
pub use services::av_transport::{PositionInfo, TrackInfo};
