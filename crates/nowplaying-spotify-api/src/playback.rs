use serde::Deserialize;
use serde::Serialize;

use crate::track::Track;

/// What the user is listening to right now. The player's transient
/// `actions` and `context` fields are stripped here; they never leave
/// this crate. Every field is optional on the wire, so a snapshot that
/// decodes with nothing in it counts as "nothing playing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_playing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currently_playing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Track>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
}

impl PlaybackSnapshot {
    /// True when no usable field remains after stripping.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The device playing, when the player endpoint includes one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub is_active: bool,
    pub is_private_session: bool,
    pub is_restricted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_percent: Option<u8>,
}
