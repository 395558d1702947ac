pub mod framing;

pub use framing::{build_checksummed_frame, build_simple_frame, FrameVariant};
