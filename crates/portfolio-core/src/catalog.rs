//! The fixed track catalog shipped with the page.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub source: &'static str,
    /// Length printed in the playlist row before metadata is known.
    pub display_duration: &'static str,
}

pub const DEFAULT_TRACKS: &[Track] = &[
    Track {
        title: "Say Slatt Say Ski",
        artist: "Lucki",
        source: "./music/sayslattsayskiLucki.mp3",
        display_duration: "3:09",
    },
    Track {
        title: "Limerence",
        artist: "Lucki",
        source: "./music/limerenceLucki.mp3",
        display_duration: "2:46",
    },
    Track {
        title: "Go Hard 2.0",
        artist: "Juice WRLD",
        source: "./music/gohardJuiceWRLD.mp3",
        display_duration: "3:34",
    },
];

/// Ordered, non-empty list of tracks. Indices are stable for the session.
#[derive(Clone, Debug)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// `None` for an empty list.
    pub fn new(tracks: Vec<Track>) -> Option<Self> {
        (!tracks.is_empty()).then_some(Self { tracks })
    }

    pub fn builtin() -> Self {
        Self {
            tracks: DEFAULT_TRACKS.to_vec(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Index after `current`, wrapping. From nothing loaded: the first track.
    pub fn next_index(&self, current: Option<usize>) -> usize {
        match current {
            Some(i) => (i + 1) % self.len(),
            None => 0,
        }
    }

    /// Index before `current`, wrapping. From nothing loaded: the last track.
    pub fn prev_index(&self, current: Option<usize>) -> usize {
        match current {
            Some(0) | None => self.len() - 1,
            Some(i) => (i - 1).min(self.len() - 1),
        }
    }
}

/// The catalog the page ships with.
pub fn default_catalog() -> Catalog {
    Catalog::builtin()
}
