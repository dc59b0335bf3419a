//! The editing session a frontend drives.
//!
//! An [`EditorController`] owns one graph and one catalog and tracks
//! the two transient gestures an editor has: dragging a palette item
//! toward the canvas, and pulling a connection from a source handle.
//! Both are small state machines that always return to idle, whether
//! the gesture lands or not.

use std::mem;

use patchbay_catalog::NodeCatalog;
use smartstring::{LazyCompact, SmartString};
use tracing::debug;

use crate::{
	errors::PipelineError,
	graph::PipelineGraph,
	json::PipelineDescription,
	labels::{EdgeId, HandleName, NodeId},
	node::Position,
};

/// Something that can be dragged off the palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteItem {
	/// An operation node of the given catalog type
	Operation(SmartString<LazyCompact>),

	/// A fixed-value node
	FixedValue,
}

/// The palette drag gesture
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
	#[default]
	Idle,

	/// An item has been picked up and not yet dropped
	Dragging(PaletteItem),
}

/// The connection gesture
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectState {
	#[default]
	Idle,

	/// A connection has been pulled from a source handle and not yet
	/// dropped on a target
	ConnectingFrom { node: NodeId, handle: HandleName },
}

/// One editing session: the graph, the catalog it draws node types
/// from, gesture state, and the current selection.
#[derive(Debug, Clone)]
pub struct EditorController {
	catalog: NodeCatalog,
	graph: PipelineGraph,

	drag: DragState,
	connect: ConnectState,

	selected_nodes: Vec<NodeId>,
	selected_edges: Vec<EdgeId>,
}

impl EditorController {
	/// Start a session with a fresh pipeline
	pub fn new(catalog: NodeCatalog) -> Self {
		Self {
			catalog,
			graph: PipelineGraph::new(),
			drag: DragState::Idle,
			connect: ConnectState::Idle,
			selected_nodes: Vec::new(),
			selected_edges: Vec::new(),
		}
	}

	/// Start a session from a saved pipeline
	pub fn load(
		catalog: NodeCatalog,
		description: &PipelineDescription,
	) -> Result<Self, PipelineError> {
		let graph = PipelineGraph::from_description(&catalog, description)?;
		Ok(Self {
			catalog,
			graph,
			drag: DragState::Idle,
			connect: ConnectState::Idle,
			selected_nodes: Vec::new(),
			selected_edges: Vec::new(),
		})
	}

	pub fn graph(&self) -> &PipelineGraph {
		&self.graph
	}

	pub fn catalog(&self) -> &NodeCatalog {
		&self.catalog
	}

	pub fn drag_state(&self) -> &DragState {
		&self.drag
	}

	pub fn connect_state(&self) -> &ConnectState {
		&self.connect
	}

	pub fn selected_nodes(&self) -> &[NodeId] {
		&self.selected_nodes
	}

	pub fn selected_edges(&self) -> &[EdgeId] {
		&self.selected_edges
	}

	/// Serialize the current graph
	pub fn description(&self) -> PipelineDescription {
		self.graph.to_description()
	}

	/// Pick a palette item up.
	/// Replaces any drag already in progress.
	pub fn begin_drag(&mut self, item: PaletteItem) {
		self.drag = DragState::Dragging(item);
	}

	/// Drop the drag without creating anything
	pub fn cancel_drag(&mut self) {
		self.drag = DragState::Idle;
	}

	/// Drop the dragged item at a canvas position, creating a node.
	///
	/// Returns `Ok(None)` when no drag was in progress; drop events
	/// without a matching pick-up are a frontend reality, not an error.
	/// The drag ends either way, even when node creation fails.
	pub fn drop_on_canvas(&mut self, position: Position) -> Result<Option<NodeId>, PipelineError> {
		match mem::take(&mut self.drag) {
			DragState::Idle => Ok(None),
			DragState::Dragging(PaletteItem::Operation(type_id)) => {
				let id = self.graph.add_operation(&self.catalog, &type_id, position)?;
				Ok(Some(id))
			}
			DragState::Dragging(PaletteItem::FixedValue) => {
				Ok(Some(self.graph.add_fixed_value(position)))
			}
		}
	}

	/// Start pulling a connection from a source handle.
	/// The handle must exist, so a gesture can't start from nowhere.
	pub fn begin_connection(
		&mut self,
		node: &NodeId,
		handle: &HandleName,
	) -> Result<(), PipelineError> {
		let n = self
			.graph
			.node(node)
			.ok_or(PipelineError::NoSuchNode { node: node.clone() })?;
		if !n.has_source_handle(handle) {
			return Err(PipelineError::NoSuchOutput {
				node: node.clone(),
				handle: handle.clone(),
			});
		}

		self.connect = ConnectState::ConnectingFrom {
			node: node.clone(),
			handle: handle.clone(),
		};
		Ok(())
	}

	/// Drop the connection gesture without creating an edge
	pub fn abort_connection(&mut self) {
		self.connect = ConnectState::Idle;
	}

	/// Drop the pulled connection on a target handle.
	///
	/// Returns `Ok(None)` when no connection was in progress. The
	/// gesture ends either way: a rejected drop (occupied handle, bad
	/// target) leaves the controller idle, not mid-gesture.
	pub fn complete_connection(
		&mut self,
		target: &NodeId,
		target_handle: &HandleName,
	) -> Result<Option<EdgeId>, PipelineError> {
		match mem::take(&mut self.connect) {
			ConnectState::Idle => Ok(None),
			ConnectState::ConnectingFrom { node, handle } => {
				let id = self.graph.connect(&node, &handle, target, target_handle)?;
				Ok(Some(id))
			}
		}
	}

	/// Replace the selection
	pub fn set_selection(&mut self, nodes: Vec<NodeId>, edges: Vec<EdgeId>) {
		self.selected_nodes = nodes;
		self.selected_edges = edges;
	}

	pub fn clear_selection(&mut self) {
		self.selected_nodes.clear();
		self.selected_edges.clear();
	}

	/// Delete everything selected.
	///
	/// Selected edges are disconnected first, then selected nodes are
	/// deleted with their edge cascade. Boundary nodes in the selection
	/// are skipped, as always. The selection is cleared afterwards,
	/// including any ids that no longer exist.
	pub fn delete_selected(&mut self) {
		let edges = mem::take(&mut self.selected_edges);
		for edge in &edges {
			self.graph.disconnect(edge);
		}

		let nodes = mem::take(&mut self.selected_nodes);
		self.graph.delete_nodes(&nodes);

		debug!(
			nodes = nodes.len(),
			edges = edges.len(),
			"deleted selection"
		);
	}

	pub fn set_position(&mut self, node: &NodeId, position: Position) -> Result<(), PipelineError> {
		self.graph.set_position(node, position)
	}

	pub fn add_slot(&mut self, node: &NodeId, type_tag: &str) -> Result<HandleName, PipelineError> {
		self.graph.add_slot(node, type_tag)
	}

	pub fn remove_slot(&mut self, node: &NodeId, index: usize) -> Result<(), PipelineError> {
		self.graph.remove_slot(node, index)
	}

	pub fn set_slot_type(
		&mut self,
		node: &NodeId,
		index: usize,
		type_tag: &str,
	) -> Result<(), PipelineError> {
		self.graph.set_slot_type(node, index, type_tag)
	}

	pub fn set_fixed_value(
		&mut self,
		node: &NodeId,
		value_type: &str,
		value: &str,
	) -> Result<(), PipelineError> {
		self.graph.set_fixed_value(node, value_type, value)
	}

	pub fn select_model(&mut self, node: &NodeId, model: &str) -> Result<(), PipelineError> {
		self.graph.select_model(node, model)
	}

	pub fn disconnect(&mut self, edge: &EdgeId) {
		self.graph.disconnect(edge)
	}
}
