//! Story media supplied by the host.

use crate::error::MediaError;

/// Playback settings for video stories.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoPlayback {
    pub rate: f32,
    pub muted: bool,
    pub looping: bool,
    pub autoplay: bool,
}

impl Default for VideoPlayback {
    fn default() -> Self {
        Self {
            rate: 1.0,
            muted: false,
            looping: true,
            autoplay: true,
        }
    }
}

/// The surface to mount under the viewer's transform. Either kind fills the
/// viewer with cover scaling.
#[derive(Clone, Debug, PartialEq)]
pub enum MediaSource {
    Image { uri: String },
    Video { uri: String, playback: VideoPlayback },
}

impl MediaSource {
    pub fn uri(&self) -> &str {
        match self {
            MediaSource::Image { uri } | MediaSource::Video { uri, .. } => uri,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaSource::Video { .. })
    }
}

/// A single story. The id doubles as the shared-element key linking the
/// list thumbnail to the full-screen view.
#[derive(Clone, Debug, PartialEq)]
pub struct StoryMedia {
    pub id: String,
    pub source: MediaSource,
}

impl StoryMedia {
    pub fn image(id: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: MediaSource::Image { uri: uri.into() },
        }
    }

    pub fn video(id: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: MediaSource::Video {
                uri: uri.into(),
                playback: VideoPlayback::default(),
            },
        }
    }

    /// Build a story from optional image and video URIs, exactly one of
    /// which must be present.
    pub fn from_sources(
        id: impl Into<String>,
        image: Option<&str>,
        video: Option<&str>,
    ) -> Result<Self, MediaError> {
        let id = id.into();
        match (image, video) {
            (Some(uri), None) => Ok(Self::image(id, uri)),
            (None, Some(uri)) => Ok(Self::video(id, uri)),
            (None, None) => Err(MediaError::MissingSource { id }),
            (Some(_), Some(_)) => Err(MediaError::ConflictingSources { id }),
        }
    }

    pub fn with_playback(mut self, playback: VideoPlayback) -> Self {
        if let MediaSource::Video { playback: current, .. } = &mut self.source {
            *current = playback;
        }
        self
    }
}
