//! Command encoder
//!
//! Maps a [`Command`] onto the opcode table of the active device revision
//! and builds the matching wire frame.

use crate::commands::profile::DeviceProfile;
use crate::commands::types::{Command, PlayMode};
use crate::config::protocol::MAX_FRAME_LEN;
use crate::protocol::framing::{build_checksummed_frame, build_simple_frame, FrameVariant};
use heapless::Vec;

/// Opcodes of the checksummed-frame revisions (KT403A, YX5200)
mod checksummed_op {
    pub const NEXT: u8 = 0x01;
    pub const PREVIOUS: u8 = 0x02;
    pub const PLAY_INDEX: u8 = 0x03;
    pub const SET_VOLUME: u8 = 0x06;
    pub const SET_EQUALIZER: u8 = 0x07;
    pub const SELECT_SOURCE: u8 = 0x09;
    pub const RESUME: u8 = 0x0D;
    pub const PAUSE: u8 = 0x0E;
    pub const PLAY_FOLDER_TRACK: u8 = 0x0F;
    pub const REPEAT_ALL: u8 = 0x11;
    pub const PLAY_MP3_FOLDER: u8 = 0x12;
    pub const STOP: u8 = 0x16;
    pub const LOOP_FOLDER: u8 = 0x17;
    pub const SHUFFLE: u8 = 0x18;
    pub const REPEAT_CURRENT: u8 = 0x19;
    pub const SHUFFLE_FOLDER: u8 = 0x28;
}

/// Opcodes of the simple-frame revision (WT5001)
mod simple_op {
    pub const PLAY_INDEX: u8 = 0xA0;
    pub const RESUME: u8 = 0xA2;
    pub const PAUSE: u8 = 0xA3;
    pub const STOP: u8 = 0xA4;
    pub const NEXT: u8 = 0xA5;
    pub const PREVIOUS: u8 = 0xA6;
    pub const SET_VOLUME: u8 = 0xA7;
    pub const SET_PLAY_MODE: u8 = 0xA9;
}

/// Stateless encoder from commands to wire frames
pub struct CommandEncoder;

impl CommandEncoder {
    /// Create a new command encoder
    pub fn new() -> Self {
        Self
    }

    /// Encode a command for the given device revision.
    ///
    /// Returns `None` when the revision has no wire counterpart for the
    /// command; the caller treats that as a no-op.
    pub fn encode(
        &self,
        profile: &DeviceProfile,
        command: &Command,
    ) -> Option<Vec<u8, MAX_FRAME_LEN>> {
        match profile.variant {
            FrameVariant::Checksummed => Some(self.encode_checksummed(command)),
            FrameVariant::Simple => self.encode_simple(command),
        }
    }

    /// Encode for the checksummed layout. Every command has a wire form on
    /// these revisions.
    fn encode_checksummed(&self, command: &Command) -> Vec<u8, MAX_FRAME_LEN> {
        use checksummed_op as op;

        let (cmd, data_high, data_low) = match command {
            Command::SelectSource { source } => (op::SELECT_SOURCE, 0, *source as u8),
            Command::SetVolume { level } => (op::SET_VOLUME, 0, *level),
            Command::PlayIndex { index } => (op::PLAY_INDEX, (index >> 8) as u8, *index as u8),
            Command::PlayMp3Folder { index } => {
                (op::PLAY_MP3_FOLDER, (index >> 8) as u8, *index as u8)
            }
            Command::PlayFolderTrack { folder, track } => (op::PLAY_FOLDER_TRACK, *folder, *track),
            Command::Stop => (op::STOP, 0, 0),
            Command::Pause => (op::PAUSE, 0, 0),
            Command::Resume => (op::RESUME, 0, 0),
            Command::Next => (op::NEXT, 0, 0),
            Command::Previous => (op::PREVIOUS, 0, 0),
            Command::SetEqualizer { mode } => (op::SET_EQUALIZER, 0, *mode as u8),
            Command::SetPlayMode { mode } => checksummed_play_mode(mode),
            Command::LoopFolder { folder } => (op::LOOP_FOLDER, 0, *folder),
            Command::ShuffleFolder { folder } => (op::SHUFFLE_FOLDER, 0, *folder),
        };

        let frame = build_checksummed_frame(cmd, data_high, data_low);

        let mut out: Vec<u8, MAX_FRAME_LEN> = Vec::new();
        let _ = out.extend_from_slice(&frame);
        out
    }

    /// Encode for the simple layout. Folder addressing, the equalizer and
    /// explicit medium selection have no wire form on this revision.
    fn encode_simple(&self, command: &Command) -> Option<Vec<u8, MAX_FRAME_LEN>> {
        use simple_op as op;

        let frame = match command {
            Command::SetVolume { level } => build_simple_frame(op::SET_VOLUME, &[*level]),
            Command::PlayIndex { index } => build_simple_frame(op::PLAY_INDEX, &index.to_be_bytes()),
            Command::Stop => build_simple_frame(op::STOP, &[]),
            Command::Pause => build_simple_frame(op::PAUSE, &[]),
            Command::Resume => build_simple_frame(op::RESUME, &[]),
            Command::Next => build_simple_frame(op::NEXT, &[]),
            Command::Previous => build_simple_frame(op::PREVIOUS, &[]),
            Command::SetPlayMode { mode } => {
                build_simple_frame(op::SET_PLAY_MODE, &[simple_play_mode(mode)])
            }
            Command::SelectSource { .. }
            | Command::PlayMp3Folder { .. }
            | Command::PlayFolderTrack { .. }
            | Command::SetEqualizer { .. }
            | Command::LoopFolder { .. }
            | Command::ShuffleFolder { .. } => return None,
        };

        Some(frame)
    }
}

impl Default for CommandEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequencing dispatch for the checksummed revisions: each behaviour is a
/// distinct opcode, with 0x11 doubling as loop-all on/off.
fn checksummed_play_mode(mode: &PlayMode) -> (u8, u8, u8) {
    use checksummed_op as op;

    match mode {
        PlayMode::Normal => (op::REPEAT_ALL, 0, 0x00),
        PlayMode::RepeatCurrent => (op::REPEAT_CURRENT, 0, 0x00),
        PlayMode::RepeatAll => (op::REPEAT_ALL, 0, 0x01),
        PlayMode::Shuffle => (op::SHUFFLE, 0, 0x00),
    }
}

/// WT5001 packs all four sequencing behaviours into one opcode parameter
fn simple_play_mode(mode: &PlayMode) -> u8 {
    match mode {
        PlayMode::Normal => 0x00,
        PlayMode::RepeatCurrent => 0x01,
        PlayMode::RepeatAll => 0x02,
        PlayMode::Shuffle => 0x03,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::{EqualizerMode, StorageSource};

    #[test]
    fn test_checksummed_select_source() {
        let encoder = CommandEncoder::new();
        let frame = encoder
            .encode(
                &DeviceProfile::KT403A,
                &Command::SelectSource {
                    source: StorageSource::MicroSd,
                },
            )
            .expect("Should encode");

        // 0xFFFF - (0xFF + 0x06 + 0x09 + 0x02) = 0xFEEF
        assert_eq!(
            frame.as_slice(),
            &[0x7E, 0xFF, 0x06, 0x09, 0x00, 0x00, 0x02, 0xFE, 0xEF, 0xEF]
        );
    }

    #[test]
    fn test_checksummed_play_index_splits_big_endian() {
        let encoder = CommandEncoder::new();
        let frame = encoder
            .encode(&DeviceProfile::KT403A, &Command::PlayIndex { index: 0x012C })
            .expect("Should encode");

        assert_eq!(frame[3], 0x03);
        assert_eq!(frame[5], 0x01);
        assert_eq!(frame[6], 0x2C);
    }

    #[test]
    fn test_checksummed_equalizer() {
        let encoder = CommandEncoder::new();
        let frame = encoder
            .encode(
                &DeviceProfile::YX5200,
                &Command::SetEqualizer {
                    mode: EqualizerMode::Jazz,
                },
            )
            .expect("Should encode");

        assert_eq!(frame[3], 0x07);
        assert_eq!(frame[6], 0x03);
    }

    #[test]
    fn test_checksummed_play_mode_dispatch() {
        let encoder = CommandEncoder::new();
        let profile = DeviceProfile::KT403A;

        let opcode = |mode| {
            let frame = encoder
                .encode(&profile, &Command::SetPlayMode { mode })
                .expect("Should encode");
            (frame[3], frame[6])
        };

        assert_eq!(opcode(PlayMode::Normal), (0x11, 0x00));
        assert_eq!(opcode(PlayMode::RepeatCurrent), (0x19, 0x00));
        assert_eq!(opcode(PlayMode::RepeatAll), (0x11, 0x01));
        assert_eq!(opcode(PlayMode::Shuffle), (0x18, 0x00));
    }

    #[test]
    fn test_simple_play_mode_single_opcode() {
        let encoder = CommandEncoder::new();
        let profile = DeviceProfile::WT5001;

        for (mode, param) in [
            (PlayMode::Normal, 0x00),
            (PlayMode::RepeatCurrent, 0x01),
            (PlayMode::RepeatAll, 0x02),
            (PlayMode::Shuffle, 0x03),
        ] {
            let frame = encoder
                .encode(&profile, &Command::SetPlayMode { mode })
                .expect("Should encode");
            assert_eq!(frame.as_slice(), &[0x7E, 0x03, 0xA9, param, 0x7E]);
        }
    }

    #[test]
    fn test_simple_volume() {
        let encoder = CommandEncoder::new();
        let frame = encoder
            .encode(&DeviceProfile::WT5001, &Command::SetVolume { level: 31 })
            .expect("Should encode");

        assert_eq!(frame.as_slice(), &[0x7E, 0x03, 0xA7, 0x1F, 0x7E]);
    }

    #[test]
    fn test_simple_unsupported_commands() {
        let encoder = CommandEncoder::new();
        let profile = DeviceProfile::WT5001;

        let unsupported = [
            Command::SelectSource {
                source: StorageSource::MicroSd,
            },
            Command::PlayMp3Folder { index: 1 },
            Command::PlayFolderTrack {
                folder: 1,
                track: 1,
            },
            Command::SetEqualizer {
                mode: EqualizerMode::Bass,
            },
            Command::LoopFolder { folder: 1 },
            Command::ShuffleFolder { folder: 1 },
        ];

        for command in unsupported {
            assert_eq!(encoder.encode(&profile, &command), None);
        }
    }

    #[test]
    fn test_zero_parameter_controls() {
        let encoder = CommandEncoder::new();

        for (command, opcode) in [
            (Command::Stop, 0x16u8),
            (Command::Pause, 0x0E),
            (Command::Resume, 0x0D),
            (Command::Next, 0x01),
            (Command::Previous, 0x02),
        ] {
            let frame = encoder
                .encode(&DeviceProfile::KT403A, &command)
                .expect("Should encode");
            assert_eq!(frame[3], opcode);
            assert_eq!(&frame[5..7], &[0x00, 0x00]);
        }
    }
}
