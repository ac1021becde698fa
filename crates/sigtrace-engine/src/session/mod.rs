pub mod assignment;
pub mod frame_count;
pub mod lookback;
pub mod padding_history;
pub mod state;
pub mod store;

pub use assignment::Assignment;
pub use frame_count::FrameCount;
pub use lookback::{LOOKBACK_LEN, Lookback};
pub use padding_history::{PaddingCategory, PaddingHistories, PaddingHistory};
pub use state::{LastMessage, Session, fn_or_max};
pub use store::SessionStore;
