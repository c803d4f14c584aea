//! Walking the content-directory tree and turning DIDL-Lite listings into
//! playable browse entries.

pub mod filter;

use log::{debug, info, warn};

use crate::didl::DidlLite;
use crate::error::{RaumfeldError, Result};
use crate::models::{BrowseFlag, UpnpClass};
use crate::play_uri::{self, DeviceRegistry};

pub use filter::ObjectFilter;

/// Root of the Raumfeld catalog.
pub const ROOT_OBJECT_ID: &str = "0";

/// Private token joining an object id with its play URI in content ids.
pub const MEDIA_CONTENT_ID_SEP: &str = "[:sep:]";

/// Placeholder emitted when a listing entry carries no title. Kept verbatim
/// from the vendor integration so consumers can match on it.
pub const TITLE_UNKNOWN: &str = "Unkown title (Teufel Raumfeld)";

/// Content-type string for generic audio handed to play-request resolution.
pub const MEDIA_TYPE_MUSIC: &str = "music";

const MEDIA_CLASS_MUSIC: &str = "music";

/// Seam to the external content-directory client. The registry supertrait
/// supplies device locations for line-in URI synthesis.
pub trait ContentDirectory: DeviceRegistry {
    /// Raw DIDL-Lite XML for an object, either its own metadata or its
    /// direct children.
    fn browse(&self, object_id: &str, flag: BrowseFlag) -> Result<String>;

    /// UDN of the content-directory server.
    fn server_udn(&self) -> &str;
}

/// One entry of a browse listing.
#[derive(Debug, Clone)]
pub struct MediaEntry {
    pub title: String,
    /// Always `music`; the catalog serves nothing else.
    pub media_class: String,
    /// Object id with the play URI appended behind [`MEDIA_CONTENT_ID_SEP`],
    /// or the bare id when no URI could be synthesized.
    pub content_id: String,
    /// Raw UPnP class string of the entry.
    pub content_type: String,
    pub can_play: bool,
    pub can_expand: bool,
    pub thumbnail: Option<String>,
    /// Filled by [`MediaBrowser::browse`], empty in plain child listings.
    pub children: Vec<MediaEntry>,
}

/// Browses a content directory and augments listings with play URIs.
pub struct MediaBrowser<C> {
    directory: C,
    filter: ObjectFilter,
}

impl<C: ContentDirectory> MediaBrowser<C> {
    pub fn new(directory: C) -> Self {
        Self::with_filter(directory, ObjectFilter::default())
    }

    pub fn with_filter(directory: C, filter: ObjectFilter) -> Self {
        Self { directory, filter }
    }

    /// Metadata of an object together with its child listing.
    pub fn browse(&self, object_id: &str) -> Result<MediaEntry> {
        let mut entry = self
            .listing(object_id, BrowseFlag::Metadata)?
            .into_iter()
            .next()
            .ok_or_else(|| RaumfeldError::NoMetadata(object_id.to_string()))?;
        entry.children = self.listing(object_id, BrowseFlag::Children)?;
        Ok(entry)
    }

    /// Child listing of an object.
    pub fn browse_children(&self, object_id: &str) -> Result<Vec<MediaEntry>> {
        self.listing(object_id, BrowseFlag::Children)
    }

    fn listing(&self, object_id: &str, flag: BrowseFlag) -> Result<Vec<MediaEntry>> {
        let browsable_oid = browsable_id(object_id);
        debug!("browsing '{}' with {}", browsable_oid, flag.as_str());

        let didl_xml = self.directory.browse(browsable_oid, flag)?;
        let didl = DidlLite::parse(&didl_xml)?;

        let mut entries = Vec::new();
        let mut track_number: u32 = 0;

        for object in didl.objects() {
            let object_id = object.id.as_str();

            if !self.filter.is_supported(object_id) {
                info!("unsupported object id: {}", object_id);
                continue;
            }

            let title = match object.title.as_ref().and_then(|t| t.as_deref()) {
                Some(title) => title.to_string(),
                None => {
                    warn!("object id '{}' carries no title", object_id);
                    TITLE_UNKNOWN.to_string()
                }
            };

            let class_str = object
                .class
                .as_ref()
                .and_then(|c| c.as_deref())
                .unwrap_or_default();
            let class = UpnpClass::from_str(class_str);
            let can_expand = !class.is_audio_item();

            let thumbnail = object
                .album_art_uri
                .as_ref()
                .and_then(|a| a.as_deref())
                .map(str::to_string);

            let play_uri = play_uri::build(
                self.directory.server_udn(),
                &class,
                object_id,
                track_number,
                &self.directory,
            );
            let content_id = match play_uri {
                Some(uri) => format!("{}{}{}", object_id, MEDIA_CONTENT_ID_SEP, uri),
                None => object_id.to_string(),
            };
            track_number += 1;

            entries.push(MediaEntry {
                title,
                media_class: MEDIA_CLASS_MUSIC.to_string(),
                content_id,
                content_type: class.as_str().to_string(),
                can_play: false,
                can_expand,
                thumbnail,
                children: Vec::new(),
            });
        }

        Ok(entries)
    }
}

/// Strip an appended play URI from a content id, recovering the id the
/// directory can browse.
pub fn browsable_id(content_id: &str) -> &str {
    match content_id.split_once(MEDIA_CONTENT_ID_SEP) {
        Some((oid, _)) => oid,
        None => content_id,
    }
}

/// Resolve a play request to the URI handed to the AV transport.
///
/// Content ids of the vendor classes round-trip through browse listings
/// with their play URI embedded; generic `music` requests must already be
/// HTTP URLs.
pub fn resolve_play_target(media_type: &str, media_id: &str) -> Result<String> {
    if media_type == MEDIA_TYPE_MUSIC {
        if media_id.starts_with("http") {
            return Ok(media_id.to_string());
        }
        return Err(RaumfeldError::NoPlayableUri(media_id.to_string()));
    }

    let class = UpnpClass::from_str(media_type);
    if !class.is_playable() {
        return Err(RaumfeldError::UnsupportedMediaType(media_type.to_string()));
    }

    match media_id.split_once(MEDIA_CONTENT_ID_SEP) {
        Some((_, uri)) => Ok(uri.to_string()),
        None => Ok(media_id.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browsable_id_round_trip() {
        let id = "0/My Music/Albums/Blue Train";
        let augmented = format!("{}{}dlna-playcontainer://x?cid=y", id, MEDIA_CONTENT_ID_SEP);
        assert_eq!(browsable_id(&augmented), id);
        assert_eq!(browsable_id(id), id);
    }

    #[test]
    fn test_resolve_play_target_splits_content_id() {
        let media_id = format!(
            "0/Albums/A{}dlna-playcontainer://udn?cid=0%2FAlbums%2FA&md=0",
            MEDIA_CONTENT_ID_SEP
        );
        let uri = resolve_play_target("object.container.album.musicAlbum", &media_id).unwrap();
        assert_eq!(uri, "dlna-playcontainer://udn?cid=0%2FAlbums%2FA&md=0");
    }

    #[test]
    fn test_resolve_play_target_without_separator() {
        let uri = resolve_play_target("object.item.audioItem.musicTrack", "0/Albums/A/1").unwrap();
        assert_eq!(uri, "0/Albums/A/1");
    }

    #[test]
    fn test_resolve_play_target_music_needs_http() {
        assert!(resolve_play_target("music", "http://host/stream.mp3").is_ok());
        assert!(matches!(
            resolve_play_target("music", "0/Albums/A"),
            Err(RaumfeldError::NoPlayableUri(_))
        ));
    }

    #[test]
    fn test_resolve_play_target_rejects_unknown_types() {
        assert!(matches!(
            resolve_play_target("object.container.genre.musicGenre", "0/Genres/Jazz"),
            Err(RaumfeldError::UnsupportedMediaType(_))
        ));
    }
}
