//! Serde model for the DIDL-Lite documents the content directory returns.
//!
//! Namespaces are stripped by `xml_decode` before deserialization, so
//! `dc:title` arrives as `title`, `upnp:class` as `class`, and so on.

use serde::Deserialize;

use crate::error::Result;
use crate::xml_decode;

/// A leaf element that may carry attributes next to its text value, e.g.
/// `<albumArtURI dlna:profileID="JPEG_TN">http://…</albumArtURI>`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DidlValue {
    #[serde(rename = "$text")]
    pub value: Option<String>,
}

impl DidlValue {
    pub fn as_deref(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// One `container` or `item` element of a DIDL-Lite listing.
#[derive(Debug, Clone, Deserialize)]
pub struct DidlObject {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@childCount", default)]
    pub child_count: Option<u32>,
    #[serde(default)]
    pub title: Option<DidlValue>,
    #[serde(rename = "class", default)]
    pub class: Option<DidlValue>,
    #[serde(rename = "albumArtURI", default)]
    pub album_art_uri: Option<DidlValue>,
    #[serde(default)]
    pub artist: Option<DidlValue>,
    #[serde(default)]
    pub album: Option<DidlValue>,
}

/// A DIDL-Lite document. `container` and `item` children always
/// deserialize into sequences, singleton or not.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DidlLite {
    #[serde(rename = "container", default)]
    pub containers: Vec<DidlObject>,
    #[serde(rename = "item", default)]
    pub items: Vec<DidlObject>,
}

impl DidlLite {
    pub fn parse(xml: &str) -> Result<Self> {
        xml_decode::parse(xml)
    }

    /// Parse a DIDL-Lite blob that was entity-encoded into another
    /// document's text content.
    pub fn parse_nested(encoded: &str) -> Result<Self> {
        xml_decode::parse_nested(encoded)
    }

    /// All objects in source order, containers before items.
    pub fn objects(&self) -> impl Iterator<Item = &DidlObject> {
        self.containers.iter().chain(self.items.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <DIDL-Lite xmlns="urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/"
                   xmlns:dc="http://purl.org/dc/elements/1.1/"
                   xmlns:upnp="urn:schemas-upnp-org:metadata-1-0/upnp/">
            <container id="0/My Music/Albums" childCount="12">
                <dc:title>Albums</dc:title>
                <upnp:class>object.container</upnp:class>
            </container>
            <item id="0/My Music/Albums/X/1">
                <dc:title>Intro</dc:title>
                <upnp:class>object.item.audioItem.musicTrack</upnp:class>
                <upnp:albumArtURI>http://host/art.jpg</upnp:albumArtURI>
            </item>
        </DIDL-Lite>"#;

    #[test]
    fn test_containers_then_items_in_source_order() {
        let didl = DidlLite::parse(LISTING).unwrap();
        let ids: Vec<&str> = didl.objects().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["0/My Music/Albums", "0/My Music/Albums/X/1"]);
    }

    #[test]
    fn test_singleton_container_becomes_sequence() {
        let xml = r#"
            <DIDL-Lite xmlns:dc="http://purl.org/dc/elements/1.1/">
                <container id="0/Zones"><dc:title>Zones</dc:title></container>
            </DIDL-Lite>"#;
        let didl = DidlLite::parse(xml).unwrap();
        assert_eq!(didl.containers.len(), 1);
        assert!(didl.items.is_empty());
    }

    #[test]
    fn test_child_count_and_art_uri() {
        let didl = DidlLite::parse(LISTING).unwrap();
        assert_eq!(didl.containers[0].child_count, Some(12));
        assert_eq!(
            didl.items[0].album_art_uri.as_ref().unwrap().as_deref(),
            Some("http://host/art.jpg")
        );
    }

    #[test]
    fn test_missing_title_tolerated() {
        let xml = r#"<DIDL-Lite><item id="0/x"></item></DIDL-Lite>"#;
        let didl = DidlLite::parse(xml).unwrap();
        assert!(didl.items[0].title.is_none());
    }

    #[test]
    fn test_empty_listing() {
        let didl = DidlLite::parse("<DIDL-Lite></DIDL-Lite>").unwrap();
        assert_eq!(didl.objects().count(), 0);
    }
}
