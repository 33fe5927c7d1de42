//! Audio Track Registry - named looping tracks that can be switched on and off.
//!
//! Decoding and fetching audio is the host's business. The registry starts in
//! [`LoadState::Loading`], the host installs each decoded track, and
//! [`TrackRegistry::finish_loading`] flips it to [`LoadState::Ready`]. The
//! engine checks readiness on every toggle and never waits for it.

use std::collections::HashMap;
use thiserror::Error;

/// Track names the standard map refers to.
pub const STANDARD_TRACKS: [&str; 3] = ["metronome1", "metronome2", "zoldath2"];

/// Errors from the track registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("tracks are still loading")]
    NotLoaded,

    #[error("unknown track \"{0}\"")]
    UnknownTrack(String),

    #[error("tracks never installed: {0:?}")]
    MissingTracks(Vec<String>),
}

/// A looping track that is always running and is made audible or silent.
pub trait AudioTrack: std::fmt::Debug + Send {
    fn play(&mut self);
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// A track modelled as a gain switch: 1.0 while playing, 0.0 while stopped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GainTrack {
    gain: f32,
    playing: bool,
}

impl GainTrack {
    /// Create a silent track.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }
}

impl AudioTrack for GainTrack {
    fn play(&mut self) {
        self.gain = 1.0;
        self.playing = true;
    }

    fn stop(&mut self) {
        self.gain = 0.0;
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

/// Loading lifecycle of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// Named tracks plus their loading state.
#[derive(Debug)]
pub struct TrackRegistry {
    state: LoadState,
    expected: Vec<String>,
    tracks: HashMap<String, Box<dyn AudioTrack>>,
}

impl TrackRegistry {
    /// Create a registry waiting for the given track names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: LoadState::Loading,
            expected: names.into_iter().map(Into::into).collect(),
            tracks: HashMap::new(),
        }
    }

    /// Create a registry waiting for [`STANDARD_TRACKS`].
    pub fn standard() -> Self {
        Self::new(STANDARD_TRACKS)
    }

    /// Create a ready registry with a silent [`GainTrack`] per name.
    pub fn with_gain_tracks<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new(names);
        for name in registry.expected.clone() {
            registry.install(name, Box::new(GainTrack::new()));
        }
        registry.state = LoadState::Ready;
        registry
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Ready
    }

    /// Register a decoded track under `name`.
    pub fn install(&mut self, name: impl Into<String>, track: Box<dyn AudioTrack>) {
        self.tracks.insert(name.into(), track);
    }

    /// Mark loading complete. Fails, and stays loading, if any expected track is missing.
    pub fn finish_loading(&mut self) -> Result<(), AudioError> {
        let missing: Vec<String> = self
            .expected
            .iter()
            .filter(|name| !self.tracks.contains_key(name.as_str()))
            .cloned()
            .collect();

        if !missing.is_empty() {
            return Err(AudioError::MissingTracks(missing));
        }

        self.state = LoadState::Ready;
        Ok(())
    }

    /// Whether a track is currently audible.
    pub fn is_playing(&self, name: &str) -> Option<bool> {
        self.tracks.get(name).map(|track| track.is_playing())
    }

    /// Switch a track on if it is off, off if it is on. Returns the new state.
    pub fn toggle(&mut self, name: &str) -> Result<bool, AudioError> {
        if !self.is_loaded() {
            return Err(AudioError::NotLoaded);
        }

        let track = self
            .tracks
            .get_mut(name)
            .ok_or_else(|| AudioError::UnknownTrack(name.to_string()))?;

        if track.is_playing() {
            track.stop();
        } else {
            track.play();
        }

        Ok(track.is_playing())
    }
}
