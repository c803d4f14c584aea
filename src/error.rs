use thiserror::Error;

/// Errors surfaced by browse, URI synthesis and metadata decoding.
#[derive(Debug, Error)]
pub enum RaumfeldError {
    /// The content directory returned something that is not valid DIDL-Lite,
    /// or an embedded metadata blob could not be decoded.
    #[error("XML parse error: {0}")]
    Parse(String),

    /// The external content-directory client failed to answer a browse call.
    #[error("content directory error: {0}")]
    ContentDirectory(String),

    /// A metadata browse returned an empty listing for the object.
    #[error("no metadata for object '{0}'")]
    NoMetadata(String),

    /// Playback was requested for a content type the renderer cannot handle.
    #[error("unsupported media type '{0}'")]
    UnsupportedMediaType(String),

    /// No playable URI could be derived from the given content id.
    #[error("no playable URI for '{0}'")]
    NoPlayableUri(String),

    /// The renderer reported a transport state outside the UPnP vocabulary.
    #[error("unknown transport state '{0}'")]
    UnknownTransportState(String),
}

pub type Result<T> = std::result::Result<T, RaumfeldError>;

impl From<quick_xml::DeError> for RaumfeldError {
    fn from(e: quick_xml::DeError) -> Self {
        RaumfeldError::Parse(e.to_string())
    }
}

impl From<quick_xml::Error> for RaumfeldError {
    fn from(e: quick_xml::Error) -> Self {
        RaumfeldError::Parse(e.to_string())
    }
}
