use crate::error::{RaumfeldError, Result};

const CLASS_ALBUM: &str = "object.container.album.musicAlbum";
const CLASS_TRACK: &str = "object.item.audioItem.musicTrack";
const CLASS_RADIO: &str = "object.item.audioItem.audioBroadcast.radio";
const CLASS_PLAYLIST_CONTAINER: &str = "object.container.playlistContainer";
const CLASS_PODCAST_EPISODE: &str = "object.item.audioItem.podcastEpisode";
const CLASS_LINE_IN: &str = "object.item.audioItem.audioBroadcast.lineIn";

/// Prefix shared by all playable leaf classes in the Raumfeld catalog.
const CLASS_AUDIO_ITEM: &str = "object.item.audioItem";

/// UPnP content classes the Raumfeld renderer distinguishes.
///
/// Any class string outside the vendor vocabulary is carried through
/// unchanged in `Other` so browse results stay lossless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpnpClass {
    Album,
    Track,
    Radio,
    PlaylistContainer,
    PodcastEpisode,
    LineIn,
    Other(String),
}

impl UpnpClass {
    pub fn from_str(class: &str) -> Self {
        match class {
            CLASS_ALBUM => UpnpClass::Album,
            CLASS_TRACK => UpnpClass::Track,
            CLASS_RADIO => UpnpClass::Radio,
            CLASS_PLAYLIST_CONTAINER => UpnpClass::PlaylistContainer,
            CLASS_PODCAST_EPISODE => UpnpClass::PodcastEpisode,
            CLASS_LINE_IN => UpnpClass::LineIn,
            other => UpnpClass::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            UpnpClass::Album => CLASS_ALBUM,
            UpnpClass::Track => CLASS_TRACK,
            UpnpClass::Radio => CLASS_RADIO,
            UpnpClass::PlaylistContainer => CLASS_PLAYLIST_CONTAINER,
            UpnpClass::PodcastEpisode => CLASS_PODCAST_EPISODE,
            UpnpClass::LineIn => CLASS_LINE_IN,
            UpnpClass::Other(s) => s,
        }
    }

    /// Leaf audio items are never expandable in a browse tree, regardless
    /// of any child count the directory reports.
    pub fn is_audio_item(&self) -> bool {
        self.as_str().starts_with(CLASS_AUDIO_ITEM)
    }

    /// Classes for which a playable URI can be synthesized.
    pub fn is_playable(&self) -> bool {
        !matches!(self, UpnpClass::Other(_))
    }
}

/// UPnP Browse action flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseFlag {
    Metadata,
    Children,
}

impl BrowseFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowseFlag::Metadata => "BrowseMetadata",
            BrowseFlag::Children => "BrowseDirectChildren",
        }
    }
}

/// Playback state as consumers see it, folded down from the transport
/// state vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
    Transitioning,
}

impl PlaybackState {
    /// Map a `CurrentTransportState` wire value. `STOPPED` and
    /// `NO_MEDIA_PRESENT` both fold to `Idle`.
    pub fn from_transport_state(state: &str) -> Result<Self> {
        match state {
            "STOPPED" | "NO_MEDIA_PRESENT" => Ok(PlaybackState::Idle),
            "PLAYING" => Ok(PlaybackState::Playing),
            "PAUSED_PLAYBACK" => Ok(PlaybackState::Paused),
            "TRANSITIONING" => Ok(PlaybackState::Transitioning),
            other => Err(RaumfeldError::UnknownTransportState(other.to_string())),
        }
    }
}

/// Repeat setting exposed to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMode {
    Off,
    One,
    All,
}

/// AV-transport play mode. The renderer collapses shuffle and repeat into
/// a single mode, so both settings are reconciled through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    Normal,
    Shuffle,
    RepeatOne,
    RepeatAll,
    Random,
}

impl PlayMode {
    pub fn from_str(mode: &str) -> Result<Self> {
        match mode {
            "NORMAL" => Ok(PlayMode::Normal),
            "SHUFFLE" => Ok(PlayMode::Shuffle),
            "REPEAT_ONE" => Ok(PlayMode::RepeatOne),
            "REPEAT_ALL" => Ok(PlayMode::RepeatAll),
            "RANDOM" => Ok(PlayMode::Random),
            other => Err(RaumfeldError::Parse(format!("unrecognized play mode '{}'", other))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayMode::Normal => "NORMAL",
            PlayMode::Shuffle => "SHUFFLE",
            PlayMode::RepeatOne => "REPEAT_ONE",
            PlayMode::RepeatAll => "REPEAT_ALL",
            PlayMode::Random => "RANDOM",
        }
    }

    /// Split the combined mode into its shuffle and repeat components.
    pub fn decompose(&self) -> (bool, RepeatMode) {
        match self {
            PlayMode::Normal => (false, RepeatMode::Off),
            PlayMode::Shuffle => (true, RepeatMode::Off),
            PlayMode::RepeatOne => (false, RepeatMode::One),
            PlayMode::RepeatAll => (false, RepeatMode::All),
            PlayMode::Random => (true, RepeatMode::All),
        }
    }

    /// Mode to request when the consumer toggles shuffle while the renderer
    /// is in `self`. `None` when no transition applies (shuffle was already
    /// off).
    pub fn with_shuffle(&self, shuffle: bool) -> Option<PlayMode> {
        if shuffle {
            let (_, repeat) = self.decompose();
            if repeat != RepeatMode::Off {
                Some(PlayMode::Random)
            } else {
                Some(PlayMode::Shuffle)
            }
        } else {
            match self {
                PlayMode::Shuffle => Some(PlayMode::Normal),
                PlayMode::Random => Some(PlayMode::RepeatAll),
                _ => None,
            }
        }
    }

    /// Mode to request when the consumer selects a repeat setting while the
    /// renderer is in `self`.
    pub fn with_repeat(&self, repeat: RepeatMode) -> PlayMode {
        let (shuffle, _) = self.decompose();
        match repeat {
            RepeatMode::All => {
                if shuffle {
                    PlayMode::Random
                } else {
                    PlayMode::RepeatAll
                }
            }
            RepeatMode::One => PlayMode::RepeatOne,
            RepeatMode::Off => {
                if shuffle {
                    PlayMode::Shuffle
                } else {
                    PlayMode::Normal
                }
            }
        }
    }
}
