//! Pipeline graphs and the editing operations a frontend drives
//! them with.
//!
//! The model here is deliberately frontend-agnostic: a renderer draws
//! snapshots of a [`PipelineGraph`] and forwards user gestures to an
//! [`EditorController`]; everything that must stay consistent (edge
//! validity, boundary nodes, id uniqueness) is enforced on this side
//! of that line.

pub mod errors;
pub mod labels;

mod graph;
mod interaction;
mod json;
mod node;
mod runstatus;

pub use graph::{Edge, PipelineGraph, DEFAULT_SLOT_TYPE, INPUT_NODE_ID, OUTPUT_NODE_ID};
pub use interaction::{ConnectState, DragState, EditorController, PaletteItem};
pub use json::{EdgeDescription, NodeDescription, PipelineDescription};
pub use node::{Node, NodeData, NodeKind, Position, Slot, FIXED_VALUE_OUTPUT_HANDLE};
pub use runstatus::{RunStatus, COMPLETION_HOLD, STEP, TICK_INTERVAL};
