//! Nodes and their kind-specific data

use patchbay_catalog::NodeTypeDescriptor;
use serde::{Deserialize, Serialize};
use smartstring::{LazyCompact, SmartString};
use std::fmt::Display;

use crate::labels::{HandleName, NodeId};

/// The source handle every fixed-value node provides
pub const FIXED_VALUE_OUTPUT_HANDLE: &str = "output";

/// A position on the editor canvas, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// The four kinds of node a pipeline may contain
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum NodeKind {
	/// The singleton boundary node that feeds data into the pipeline
	Input,

	/// The singleton boundary node that collects the pipeline's results
	Output,

	/// A node that provides a constant value
	FixedValue,

	/// A model-backed operation, created from a catalog descriptor
	Operation,
}

impl NodeKind {
	/// Is this one of the two pre-seeded boundary kinds?
	pub fn is_boundary(&self) -> bool {
		matches!(self, Self::Input | Self::Output)
	}
}

impl Display for NodeKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Input => write!(f, "Input"),
			Self::Output => write!(f, "Output"),
			Self::FixedValue => write!(f, "FixedValue"),
			Self::Operation => write!(f, "Operation"),
		}
	}
}

/// One typed connection slot on a boundary node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
	/// This slot's handle name.
	///
	/// Generated from a per-node counter and never reused, so removing
	/// a slot cannot silently rebind an edge connected to a later slot.
	pub handle: HandleName,

	/// Free-text type tag, e.g. "string" or "dataframe"
	pub type_tag: SmartString<LazyCompact>,
}

/// Kind-specific node payload.
///
/// This is both the in-memory representation and the `data` object of
/// the wire format; there are no rendering-only fields to strip.
///
/// Deserialization tolerates unknown keys: render layers attach their
/// own fields (icons, selection flags) to node objects, and this type
/// is deserialized through `flatten`, where serde cannot enforce
/// `deny_unknown_fields` anyway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum NodeData {
	/// Pipeline input. Slots are *source* handles.
	Input { slots: Vec<Slot> },

	/// Pipeline output. Slots are *target* handles.
	Output { slots: Vec<Slot> },

	/// A constant, typed inline into the pipeline
	FixedValue {
		value_type: SmartString<LazyCompact>,
		value: SmartString<LazyCompact>,
	},

	/// A model-backed operation
	Operation {
		/// The catalog id this node was created from
		type_id: SmartString<LazyCompact>,

		/// Human-readable name, copied from the descriptor
		label: String,

		/// Target handles, one per argument.
		/// Copied from the descriptor at creation; later catalog
		/// changes never affect existing nodes.
		arguments: Vec<HandleName>,

		/// Source handles, one per output
		outputs: Vec<HandleName>,

		/// Candidate backing models, copied from the descriptor
		models: Vec<String>,

		/// The chosen backing model.
		/// Defaults to the first candidate; `None` only when the
		/// descriptor lists no models at all.
		selected_model: Option<String>,
	},
}

/// One node in a pipeline graph.
///
/// Nodes are only ever mutated through [`PipelineGraph`](crate::PipelineGraph)
/// operations; the render layer reads them as snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
	pub id: NodeId,
	pub position: Position,
	pub data: NodeData,

	/// Next boundary slot index. Monotonic, never decremented.
	pub(crate) slot_counter: usize,
}

impl Node {
	pub(crate) fn new_input(id: NodeId, position: Position) -> Self {
		Self {
			id,
			position,
			data: NodeData::Input { slots: Vec::new() },
			slot_counter: 0,
		}
	}

	pub(crate) fn new_output(id: NodeId, position: Position) -> Self {
		Self {
			id,
			position,
			data: NodeData::Output { slots: Vec::new() },
			slot_counter: 0,
		}
	}

	pub(crate) fn new_fixed_value(id: NodeId, position: Position) -> Self {
		Self {
			id,
			position,
			data: NodeData::FixedValue {
				value_type: "string".into(),
				value: "".into(),
			},
			slot_counter: 0,
		}
	}

	pub(crate) fn new_operation(
		id: NodeId,
		position: Position,
		descriptor: &NodeTypeDescriptor,
	) -> Self {
		Self {
			id,
			position,
			data: NodeData::Operation {
				type_id: descriptor.id.clone(),
				label: descriptor.display_name.clone(),
				arguments: descriptor.arguments.iter().map(HandleName::from).collect(),
				outputs: descriptor.outputs.iter().map(HandleName::from).collect(),
				models: descriptor.models.clone(),
				selected_model: descriptor.models.first().cloned(),
			},
			slot_counter: 0,
		}
	}

	pub fn kind(&self) -> NodeKind {
		match &self.data {
			NodeData::Input { .. } => NodeKind::Input,
			NodeData::Output { .. } => NodeKind::Output,
			NodeData::FixedValue { .. } => NodeKind::FixedValue,
			NodeData::Operation { .. } => NodeKind::Operation,
		}
	}

	pub fn is_boundary(&self) -> bool {
		self.kind().is_boundary()
	}

	/// This node's source handles (outgoing connection points)
	pub fn source_handles(&self) -> Vec<HandleName> {
		match &self.data {
			NodeData::Input { slots } => slots.iter().map(|s| s.handle.clone()).collect(),
			NodeData::Output { .. } => Vec::new(),
			NodeData::FixedValue { .. } => vec![HandleName::new(FIXED_VALUE_OUTPUT_HANDLE)],
			NodeData::Operation { outputs, .. } => outputs.clone(),
		}
	}

	/// This node's target handles (incoming connection points)
	pub fn target_handles(&self) -> Vec<HandleName> {
		match &self.data {
			NodeData::Input { .. } => Vec::new(),
			NodeData::Output { slots } => slots.iter().map(|s| s.handle.clone()).collect(),
			NodeData::FixedValue { .. } => Vec::new(),
			NodeData::Operation { arguments, .. } => arguments.clone(),
		}
	}

	pub fn has_source_handle(&self, handle: &HandleName) -> bool {
		match &self.data {
			NodeData::Input { slots } => slots.iter().any(|s| &s.handle == handle),
			NodeData::Output { .. } => false,
			NodeData::FixedValue { .. } => handle.as_str() == FIXED_VALUE_OUTPUT_HANDLE,
			NodeData::Operation { outputs, .. } => outputs.contains(handle),
		}
	}

	pub fn has_target_handle(&self, handle: &HandleName) -> bool {
		match &self.data {
			NodeData::Input { .. } => false,
			NodeData::Output { slots } => slots.iter().any(|s| &s.handle == handle),
			NodeData::FixedValue { .. } => false,
			NodeData::Operation { arguments, .. } => arguments.contains(handle),
		}
	}

	/// Append a slot to a boundary node.
	/// Returns the new slot's handle, or [`None`] if this isn't a
	/// boundary node.
	pub(crate) fn push_slot(&mut self, type_tag: &str) -> Option<HandleName> {
		let index = self.slot_counter;
		let handle: HandleName = match &mut self.data {
			NodeData::Input { slots } => {
				let handle: HandleName = format!("out-{index}").into();
				slots.push(Slot {
					handle: handle.clone(),
					type_tag: type_tag.into(),
				});
				handle
			}
			NodeData::Output { slots } => {
				let handle: HandleName = format!("in-{index}").into();
				slots.push(Slot {
					handle: handle.clone(),
					type_tag: type_tag.into(),
				});
				handle
			}
			_ => return None,
		};

		self.slot_counter += 1;
		Some(handle)
	}

	/// This node's boundary slots, if it has any
	pub fn slots(&self) -> Option<&[Slot]> {
		match &self.data {
			NodeData::Input { slots } | NodeData::Output { slots } => Some(slots),
			_ => None,
		}
	}
}
