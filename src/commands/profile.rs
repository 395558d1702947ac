//! Device revision profiles
//!
//! The module family disagrees on wire layout and on human-facing numeric
//! ranges. A profile captures both so a driver instance can be pointed at
//! any supported revision at construction time.

use crate::protocol::framing::FrameVariant;

/// Capabilities and limits of one device revision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Wire layout the revision expects
    pub variant: FrameVariant,
    /// Highest accepted volume level
    pub max_volume: u8,
    /// Highest addressable track index
    pub max_track_index: u16,
}

impl DeviceProfile {
    /// KT403A (Grove MP3 v2): checksummed frames, volume 0-30, 2999 tracks
    pub const KT403A: Self = Self {
        variant: FrameVariant::Checksummed,
        max_volume: 30,
        max_track_index: 2999,
    };

    /// YX5200 (DFPlayer Mini): checksummed frames, volume 0-30, 3000 tracks
    pub const YX5200: Self = Self {
        variant: FrameVariant::Checksummed,
        max_volume: 30,
        max_track_index: 3000,
    };

    /// WT5001 (Grove MP3 v1): simple frames, volume 0-31, full 16-bit index
    pub const WT5001: Self = Self {
        variant: FrameVariant::Simple,
        max_volume: 31,
        max_track_index: u16::MAX,
    };
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::KT403A
    }
}
