//! Decoding of AV-transport position info into consumer track metadata.

use log::warn;
use serde::Deserialize;

use crate::didl::DidlLite;
use crate::util::time::timespan_secs;

/// Out-arguments of the UPnP `GetPositionInfo` action, as handed over by
/// the external transport client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionInfo {
    #[serde(rename = "Track", default)]
    pub track: u32,
    #[serde(rename = "TrackDuration", default)]
    pub track_duration: String,
    /// DIDL-Lite blob describing the current track, usually entity-encoded.
    #[serde(rename = "TrackMetaData", default)]
    pub track_metadata: Option<String>,
    #[serde(rename = "TrackURI", default)]
    pub track_uri: String,
    #[serde(rename = "AbsTime", default)]
    pub abs_time: String,
}

/// Current-track metadata in consumer form. Every field the renderer does
/// not report stays `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackInfo {
    pub number: u32,
    pub duration: Option<u64>,
    pub position: Option<u64>,
    pub uri: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub image_uri: Option<String>,
}

impl TrackInfo {
    /// Decode a position-info record. Duration and elapsed time are
    /// colon-separated timespans; the embedded metadata blob is decoded
    /// when present and quietly skipped when the renderer sends none or
    /// sends something unparseable.
    pub fn from_position_info(info: &PositionInfo) -> Self {
        let mut track_info = TrackInfo {
            number: info.track,
            duration: timespan_secs(&info.track_duration),
            position: timespan_secs(&info.abs_time),
            uri: info.track_uri.clone(),
            ..TrackInfo::default()
        };

        let metadata_xml = match info.track_metadata.as_deref() {
            Some(xml) if !xml.is_empty() && xml != "NOT_IMPLEMENTED" => xml,
            _ => return track_info,
        };

        match DidlLite::parse_nested(metadata_xml) {
            Ok(didl) => {
                if let Some(item) = didl.items.first() {
                    track_info.title = item.title.as_ref().and_then(|v| v.value.clone());
                    track_info.artist = item.artist.as_ref().and_then(|v| v.value.clone());
                    track_info.album = item.album.as_ref().and_then(|v| v.value.clone());
                    track_info.image_uri =
                        item.album_art_uri.as_ref().and_then(|v| v.value.clone());
                }
            }
            Err(e) => warn!("discarding unparseable track metadata: {}", e),
        }

        track_info
    }
}
