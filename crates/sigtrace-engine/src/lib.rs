//! Layer 3 reassembly, dispatch and session tracking for captured cellular signalling.
//!
//! Frames enter through `Engine::handle_radio_msg`. Dedicated and associated channel frames
//! are reassembled per channel, direction and SAPI; complete L3 messages are checked for
//! cross-technology duplicates and dispatched on their protocol discriminator, updating the
//! caller's `SessionStore`. Annotated messages and finished sessions leave through a
//! `MessageSink`.

pub mod collab;
pub mod engine;
pub mod envelope;
pub mod l3;
pub mod lapdm;
pub mod session;
pub mod stats;

pub use collab::*;
pub use engine::Engine;
pub use envelope::{new_l2, new_l3};
pub use session::{Session, SessionStore};
