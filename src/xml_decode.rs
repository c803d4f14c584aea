//! Decoding helpers for the XML dialects UPnP devices actually emit:
//! namespace-prefixed DIDL-Lite and entity-encoded nested blobs.

use std::io::Cursor;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use serde::Deserialize;

use crate::error::{RaumfeldError, Result};

/// Parse XML into `T` after stripping namespaces.
pub fn parse<T>(xml: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let cleaned_xml = clean_xml(xml)?;
    quick_xml::de::from_str(&cleaned_xml).map_err(RaumfeldError::from)
}

/// Parse an entity-encoded nested XML blob into `T`.
///
/// Used for metadata documents embedded as text inside another response,
/// e.g. `TrackMetaData` in position info.
pub fn parse_nested<T>(encoded: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let decoded = decode_entities(encoded);
    parse(&decoded)
}

/// Decode HTML entities until a fixed point is reached. Devices are known
/// to double- and triple-encode nested documents.
pub fn decode_entities(s: &str) -> String {
    let mut result = s.to_string();

    loop {
        let decoded = html_escape::decode_html_entities(&result).into_owned();
        if decoded == result {
            break;
        }
        result = decoded;
    }

    result
}

/// Strip all XML namespaces: element and attribute names are reduced to
/// their local parts and `xmlns` declarations are dropped.
fn clean_xml(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let mut elem = BytesStart::new(local_name_str(e.local_name().as_ref())?.to_string());
                copy_non_namespace_attributes(&e, &mut elem)?;
                writer.write_event(Event::Start(elem)).map_err(|e| RaumfeldError::Parse(e.to_string()))?;
            }
            Ok(Event::End(e)) => {
                let elem = BytesEnd::new(local_name_str(e.local_name().as_ref())?.to_string());
                writer.write_event(Event::End(elem)).map_err(|e| RaumfeldError::Parse(e.to_string()))?;
            }
            Ok(Event::Empty(e)) => {
                let mut elem = BytesStart::new(local_name_str(e.local_name().as_ref())?.to_string());
                copy_non_namespace_attributes(&e, &mut elem)?;
                writer.write_event(Event::Empty(elem)).map_err(|e| RaumfeldError::Parse(e.to_string()))?;
            }
            Ok(Event::Eof) => break,
            Ok(event) => writer
                .write_event(event)
                .map_err(|e| RaumfeldError::Parse(e.to_string()))?,
            Err(e) => return Err(RaumfeldError::Parse(e.to_string())),
        }
        buf.clear();
    }

    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| RaumfeldError::Parse(e.to_string()))
}

fn local_name_str(name: &[u8]) -> Result<&str> {
    std::str::from_utf8(name).map_err(|e| RaumfeldError::Parse(e.to_string()))
}

fn copy_non_namespace_attributes(source: &BytesStart, target: &mut BytesStart) -> Result<()> {
    for attr in source.attributes() {
        let attr = attr.map_err(|e| RaumfeldError::Parse(e.to_string()))?;
        if attr.key.as_ref() == b"xmlns" || attr.key.as_ref().starts_with(b"xmlns:") {
            continue;
        }

        let key_str = local_name_str(attr.key.local_name().as_ref())?.to_string();
        let value_str = std::str::from_utf8(attr.value.as_ref())
            .map_err(|e| RaumfeldError::Parse(e.to_string()))?
            .to_string();
        target.push_attribute((key_str.as_str(), value_str.as_str()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        title: Option<String>,
    }

    #[test]
    fn test_namespace_prefixes_are_stripped() {
        let xml = r#"<item xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:title>Blue Train</dc:title></item>"#;
        let item: Item = parse(xml).unwrap();
        assert_eq!(item.title, Some("Blue Train".to_string()));
    }

    #[test]
    fn test_entity_decode_fixed_point() {
        assert_eq!(decode_entities("&amp;amp;lt;"), "<");
        assert_eq!(decode_entities("Simon &amp; Garfunkel"), "Simon & Garfunkel");
        assert_eq!(decode_entities("plain"), "plain");
    }

    #[test]
    fn test_parse_nested_encoded_blob() {
        let blob = "&lt;item&gt;&lt;title&gt;Africa&lt;/title&gt;&lt;/item&gt;";
        let item: Item = parse_nested(blob).unwrap();
        assert_eq!(item.title, Some("Africa".to_string()));
    }

    #[test]
    fn test_invalid_xml_is_an_error() {
        assert!(parse::<Item>("<item><title>oops</item>").is_err());
    }
}
