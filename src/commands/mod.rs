pub mod encoder;
pub mod profile;
pub mod types;

pub use encoder::CommandEncoder;
pub use profile::DeviceProfile;
pub use types::{Command, EqualizerMode, PlayMode, StorageSource};
