pub mod frame_type;
pub mod sapi;
