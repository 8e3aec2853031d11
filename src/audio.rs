//! Sound Effects
//!
//! Fire-and-forget cues. Playback is never awaited and never affects game
//! state. Without the `audio` feature, or when the clips are missing, every
//! cue is silently dropped.

use std::path::{Path, PathBuf};

/// Clip formats tried in order for each cue
pub const CLIP_EXTENSIONS: [&str; 3] = ["mp3", "wav", "ogg"];

/// Sound played in response to a game event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Correct,
    Wrong,
    Win,
    Lose,
}

impl SoundCue {
    pub const ALL: [SoundCue; 4] = [
        SoundCue::Correct,
        SoundCue::Wrong,
        SoundCue::Win,
        SoundCue::Lose,
    ];

    /// Clip file name inside the sounds directory, without extension
    pub fn file_stem(self) -> &'static str {
        match self {
            SoundCue::Correct => "correct",
            SoundCue::Wrong => "wrong",
            SoundCue::Win => "win",
            SoundCue::Lose => "lose",
        }
    }

    /// First clip for this cue present in `sounds_dir`, e.g. `sounds/win.mp3`
    pub fn find_clip(self, sounds_dir: &Path) -> Option<PathBuf> {
        CLIP_EXTENSIONS
            .iter()
            .map(|ext| sounds_dir.join(self.file_stem()).with_extension(ext))
            .find(|path| path.is_file())
    }
}

pub trait SoundPlayer {
    fn play(&mut self, cue: SoundCue);
}

/// Drops every cue
#[derive(Debug, Default)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&mut self, cue: SoundCue) {
        log::trace!("(silent) {:?}", cue);
    }
}

/// Opens the best available sound player for `sounds_dir`
#[cfg(feature = "audio")]
pub fn open_sounds(sdl: &sdl2::Sdl, sounds_dir: &Path) -> Box<dyn SoundPlayer> {
    match mixer::MixerSounds::open(sdl, sounds_dir) {
        Ok(sounds) => Box::new(sounds),
        Err(e) => {
            log::warn!("Sound disabled: {}", e);
            Box::new(Silent)
        }
    }
}

/// Opens the best available sound player for `sounds_dir`
#[cfg(not(feature = "audio"))]
pub fn open_sounds(_sdl: &sdl2::Sdl, sounds_dir: &Path) -> Box<dyn SoundPlayer> {
    log::info!(
        "Built without the audio feature; ignoring sounds in {}",
        sounds_dir.display()
    );
    Box::new(Silent)
}

#[cfg(feature = "audio")]
mod mixer {
    use super::{SoundCue, SoundPlayer};
    use crate::error::GameError;
    use sdl2::mixer::{
        AUDIO_S16LSB, Channel, Chunk, DEFAULT_CHANNELS, InitFlag, Sdl2MixerContext,
    };
    use std::collections::HashMap;
    use std::path::Path;

    pub struct MixerSounds {
        chunks: HashMap<SoundCue, Chunk>,
        _mixer: Sdl2MixerContext,
        _audio: sdl2::AudioSubsystem,
    }

    impl MixerSounds {
        pub fn open(sdl: &sdl2::Sdl, sounds_dir: &Path) -> Result<Self, GameError> {
            let audio = sdl.audio()?;
            sdl2::mixer::open_audio(44_100, AUDIO_S16LSB, DEFAULT_CHANNELS, 1_024)?;
            // MP3 decoding is optional in SDL2_mixer builds
            let mixer = sdl2::mixer::init(InitFlag::MP3).or_else(|e| {
                log::debug!("MP3 support unavailable: {}", e);
                sdl2::mixer::init(InitFlag::empty())
            })?;
            sdl2::mixer::allocate_channels(8);

            let mut chunks = HashMap::new();
            for cue in SoundCue::ALL {
                let Some(path) = cue.find_clip(sounds_dir) else {
                    log::warn!(
                        "Missing sound {} in {}",
                        cue.file_stem(),
                        sounds_dir.display()
                    );
                    continue;
                };
                match Chunk::from_file(&path) {
                    Ok(chunk) => {
                        chunks.insert(cue, chunk);
                    }
                    Err(e) => log::warn!("Could not load sound {}: {}", path.display(), e),
                }
            }

            Ok(MixerSounds {
                chunks,
                _mixer: mixer,
                _audio: audio,
            })
        }
    }

    impl SoundPlayer for MixerSounds {
        fn play(&mut self, cue: SoundCue) {
            if let Some(chunk) = self.chunks.get(&cue) {
                if let Err(e) = Channel::all().play(chunk, 0) {
                    log::debug!("Could not play {:?}: {}", cue, e);
                }
            }
        }
    }

    impl Drop for MixerSounds {
        fn drop(&mut self) {
            sdl2::mixer::close_audio();
        }
    }
}
