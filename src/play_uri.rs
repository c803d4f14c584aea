//! Synthesis of URIs the Raumfeld renderer accepts on its AV transport.
//!
//! Containers and tracks are addressed with `dlna-playcontainer://`,
//! broadcasts with `dlna-playsingle://`, and line-in sources with a plain
//! HTTP stream endpoint on the originating device.

use log::{debug, error, info};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::UpnpClass;

/// Service id of the content directory addressed in play URIs.
pub const URN_CONTENT_DIRECTORY: &str = "urn:upnp-org:serviceId:ContentDirectory";

/// Catalog branch holding line-in sources.
pub const OBJECT_ID_LINE_IN: &str = "0/Line In";

/// Port of the line-in stream endpoint on Raumfeld devices.
pub const PORT_LINE_IN: u16 = 8888;

/// Escape everything outside the unreserved set, including `/`.
const QUOTE_STRICT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Escape like `QUOTE_STRICT` but keep `/` literal.
const QUOTE_PATH: &AsciiSet = &QUOTE_STRICT.remove(b'/');

/// Resolves a device UDN to the device's description URL. Implemented by
/// the external host client, which tracks device locations.
pub trait DeviceRegistry {
    fn device_url(&self, udn: &str) -> Option<String>;
}

/// Build a URI playable by the Raumfeld renderer for the given catalog
/// object.
///
/// Track and podcast-episode objects address their parent container and
/// pass the object itself as file id plus the per-listing `track_number`.
/// Returns `None` only when a line-in id is malformed or its device cannot
/// be resolved; classes without URI synthesis yield the object id itself.
pub fn build<R>(
    server_udn: &str,
    class: &UpnpClass,
    object_id: &str,
    track_number: u32,
    devices: &R,
) -> Option<String>
where
    R: DeviceRegistry + ?Sized,
{
    match class {
        UpnpClass::Album | UpnpClass::PlaylistContainer | UpnpClass::Track | UpnpClass::PodcastEpisode => {
            let mut play_uri = format!(
                "dlna-playcontainer://{}?sid={}&cid=",
                utf8_percent_encode(server_udn, QUOTE_PATH),
                utf8_percent_encode(URN_CONTENT_DIRECTORY, QUOTE_PATH),
            );

            let container_id = match class {
                UpnpClass::Track | UpnpClass::PodcastEpisode => parent_object_id(object_id),
                _ => object_id,
            };
            play_uri.push_str(&utf8_percent_encode(container_id, QUOTE_STRICT).to_string());
            play_uri.push_str("&md=0");

            if matches!(class, UpnpClass::Track | UpnpClass::PodcastEpisode) {
                play_uri.push_str(&format!(
                    "&fid={}&fii={}",
                    utf8_percent_encode(object_id, QUOTE_STRICT),
                    track_number,
                ));
            }

            debug!("play URI for '{}': {}", object_id, play_uri);
            Some(play_uri)
        }
        UpnpClass::Radio => {
            let play_uri = format!(
                "dlna-playsingle://{}?sid={}&iid={}",
                utf8_percent_encode(server_udn, QUOTE_PATH),
                utf8_percent_encode(URN_CONTENT_DIRECTORY, QUOTE_PATH),
                utf8_percent_encode(object_id, QUOTE_STRICT),
            );
            Some(play_uri)
        }
        UpnpClass::LineIn => line_in_uri(object_id, devices),
        UpnpClass::Other(class) => {
            info!(
                "building of playable URI for media type '{}' not needed or not implemented",
                class
            );
            Some(object_id.to_string())
        }
    }
}

/// The object id with its last `/`-separated segment removed. Ids without
/// a separator are returned unchanged.
fn parent_object_id(object_id: &str) -> &str {
    match object_id.rsplit_once('/') {
        Some((parent, _)) => parent,
        None => object_id,
    }
}

/// Line-in objects embed the originating device's UDN as their last path
/// segment. The stream itself is served by that device on a fixed port.
fn line_in_uri<R>(object_id: &str, devices: &R) -> Option<String>
where
    R: DeviceRegistry + ?Sized,
{
    if !object_id.starts_with(OBJECT_ID_LINE_IN) {
        error!("object id '{}' is not a line-in source", object_id);
        return None;
    }

    let udn_segment = match object_id.rsplit_once('/') {
        Some((_, segment)) => segment,
        None => {
            error!("object id '{}' carries no device UDN", object_id);
            return None;
        }
    };

    let udn = match percent_decode_str(udn_segment).decode_utf8() {
        Ok(udn) => udn,
        Err(e) => {
            error!("device UDN in '{}' is not valid UTF-8: {}", object_id, e);
            return None;
        }
    };

    match devices.device_url(&udn) {
        Some(url) => {
            let host = host_of(&url)?;
            Some(format!("http://{}:{}/stream.flac", host, PORT_LINE_IN))
        }
        None => {
            error!("no device location known for UDN '{}'", udn);
            None
        }
    }
}

/// Host part of a device URL, without scheme, port or path. Bracketed
/// IPv6 hosts keep their brackets so they can be re-embedded in a URL.
fn host_of(url: &str) -> Option<&str> {
    let rest = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };
    let host_port = rest.split('/').next()?;
    let host = if host_port.starts_with('[') {
        match host_port.find(']') {
            Some(end) => &host_port[..=end],
            None => {
                error!("device URL '{}' has an unterminated IPv6 host", url);
                return None;
            }
        }
    } else {
        host_port.split(':').next()?
    };
    if host.is_empty() {
        error!("device URL '{}' has no host", url);
        None
    } else {
        Some(host)
    }
}
