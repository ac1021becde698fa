//! Seams to the rest of the analysis pipeline. The engine only depends on these traits;
//! each comes with a null implementation.

pub mod address;
pub mod assignment;
pub mod cell;
pub mod higher_layers;
pub mod sink;

pub use address::{AddressDecoder, BcdAddressDecoder};
pub use assignment::{AssignmentParser, ChannelDescriptionParser, NullAssignmentParser};
pub use cell::{CellObserver, CellTally, NullCellObserver};
pub use higher_layers::{HigherLayerOutput, HigherLayers, NullHigherLayers};
pub use sink::{MessageSink, NullSink};
