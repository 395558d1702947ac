//! Playback command driver
//!
//! Owns the serial link and the device profile, clamps human-facing
//! arguments, and turns each call into exactly one frame write followed by
//! the gap the module needs between commands. The module never reports
//! back, so every operation is fire-and-forget: commands issued before
//! `init`, commands without a wire form on the active revision, and
//! transport failures are all dropped silently (logged, never surfaced).

use crate::commands::encoder::CommandEncoder;
use crate::commands::profile::DeviceProfile;
use crate::commands::types::{Command, EqualizerMode, PlayMode, StorageSource};
use crate::config::{limits, timing};
use crate::player::traits::DelayProvider;
use crate::serial::traits::{SerialConfig, SerialPort};
use log::{debug, warn};

/// Driver for one serial-attached MP3 module.
///
/// Starts unconfigured; no frame leaves the port until [`init`] has run.
///
/// [`init`]: Mp3Player::init
pub struct Mp3Player<S: SerialPort, D: DelayProvider> {
    serial: S,
    delay: D,
    profile: DeviceProfile,
    encoder: CommandEncoder,
    config: SerialConfig,
    initialised: bool,
    paused: bool,
}

impl<S: SerialPort, D: DelayProvider> Mp3Player<S, D> {
    /// Create a driver in the unconfigured state.
    pub fn new(serial: S, delay: D, profile: DeviceProfile) -> Self {
        Self {
            serial,
            delay,
            profile,
            encoder: CommandEncoder::new(),
            config: SerialConfig::default(),
            initialised: false,
            paused: false,
        }
    }

    /// Configure the serial link and wake the module.
    ///
    /// Applies the pin/baud settings, waits out the power-up quiescence,
    /// then selects the microSD medium. Safe to call again with different
    /// settings; the new configuration replaces the old one.
    pub async fn init(&mut self, config: SerialConfig) {
        if let Err(e) = self.serial.apply_config(&config).await {
            warn!("serial reconfiguration failed: {:?}", e);
            return;
        }

        self.config = config;
        self.initialised = true;
        self.delay.delay_ms(timing::INIT_SETTLE_MS).await;

        self.select_source(StorageSource::MicroSd).await;
    }

    /// Select the storage medium tracks are read from.
    ///
    /// The module needs quiescence after switching media before it accepts
    /// further commands.
    pub async fn select_source(&mut self, source: StorageSource) {
        if self.send(Command::SelectSource { source }).await {
            self.delay.delay_ms(timing::SOURCE_SETTLE_MS).await;
        }
    }

    /// Set the output volume.
    ///
    /// Out-of-range levels are clamped to the revision's supported range.
    pub async fn set_volume(&mut self, level: i16) {
        let level = level.clamp(0, self.profile.max_volume as i16) as u8;
        self.send(Command::SetVolume { level }).await;
    }

    /// Play a track by its index in storage order.
    pub async fn play_index(&mut self, index: u32) {
        let index = clamp_index(index, self.profile.max_track_index);
        if self.send(Command::PlayIndex { index }).await {
            self.paused = false;
        }
    }

    /// Play a track from the `MP3/` folder by its four-digit file name.
    pub async fn play_mp3_folder(&mut self, index: u32) {
        let index = clamp_index(index, self.profile.max_track_index);
        if self.send(Command::PlayMp3Folder { index }).await {
            self.paused = false;
        }
    }

    /// Play a numbered track from a numbered folder (`01/001xxx.mp3`).
    pub async fn play_folder_track(&mut self, folder: u16, track: u16) {
        let folder = clamp_folder(folder);
        let track = track.clamp(
            limits::FOLDER_TRACK_MIN as u16,
            limits::FOLDER_TRACK_MAX as u16,
        ) as u8;
        if self.send(Command::PlayFolderTrack { folder, track }).await {
            self.paused = false;
        }
    }

    /// Stop playback.
    pub async fn stop(&mut self) {
        if self.send(Command::Stop).await {
            self.paused = false;
        }
    }

    /// Skip to the next track.
    pub async fn next(&mut self) {
        if self.send(Command::Next).await {
            self.paused = false;
        }
    }

    /// Skip to the previous track.
    pub async fn previous(&mut self) {
        if self.send(Command::Previous).await {
            self.paused = false;
        }
    }

    /// Pause, keeping the current position.
    pub async fn pause(&mut self) {
        if self.send(Command::Pause).await {
            self.paused = true;
        }
    }

    /// Resume from the paused position.
    pub async fn resume(&mut self) {
        if self.send(Command::Resume).await {
            self.paused = false;
        }
    }

    /// Toggle between pause and resume.
    ///
    /// The module has no native toggle, so the driver tracks the paused
    /// state locally and emits the matching opcode. The flag only flips
    /// when a frame actually went out.
    pub async fn pause_resume(&mut self) {
        if self.paused {
            self.resume().await;
        } else {
            self.pause().await;
        }
    }

    /// Select an equalizer preset.
    pub async fn set_equalizer(&mut self, mode: EqualizerMode) {
        self.send(Command::SetEqualizer { mode }).await;
    }

    /// Select the track sequencing behaviour.
    pub async fn set_play_mode(&mut self, mode: PlayMode) {
        self.send(Command::SetPlayMode { mode }).await;
    }

    /// Loop over every track in one folder.
    pub async fn loop_folder(&mut self, folder: u16) {
        let folder = clamp_folder(folder);
        self.send(Command::LoopFolder { folder }).await;
    }

    /// Play one folder's tracks in random order.
    pub async fn shuffle_folder(&mut self, folder: u16) {
        let folder = clamp_folder(folder);
        self.send(Command::ShuffleFolder { folder }).await;
    }

    /// Whether `init` has completed.
    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    /// Whether the driver believes playback is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The active serial configuration.
    pub fn config(&self) -> &SerialConfig {
        &self.config
    }

    /// The active device profile.
    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    /// Encode and write one command frame, then wait the inter-command
    /// gap. Returns whether a frame actually went out.
    async fn send(&mut self, command: Command) -> bool {
        if !self.initialised {
            debug!("dropping {:?}: serial link not configured", command);
            return false;
        }

        let frame = match self.encoder.encode(&self.profile, &command) {
            Some(frame) => frame,
            None => {
                debug!("dropping {:?}: no wire form on this revision", command);
                return false;
            }
        };

        if let Err(e) = self.serial.write(&frame).await {
            warn!("write failed for {:?}: {:?}", command, e);
            return false;
        }
        if let Err(e) = self.serial.flush().await {
            warn!("flush failed for {:?}: {:?}", command, e);
        }

        self.delay.delay_ms(timing::COMMAND_GAP_MS).await;
        true
    }
}

/// Clamp a human-facing track index to the revision's addressable range
fn clamp_index(index: u32, max: u16) -> u16 {
    index.clamp(limits::TRACK_INDEX_MIN as u32, max as u32) as u16
}

/// Clamp a human-facing folder number to the family's directory range
fn clamp_folder(folder: u16) -> u8 {
    folder.clamp(limits::FOLDER_MIN as u16, limits::FOLDER_MAX as u16) as u8
}
