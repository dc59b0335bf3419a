//! The mutable graph behind one editing session.
//!
//! All mutations are synchronous and atomic: a failed operation
//! returns an error and leaves the graph untouched. There is exactly
//! one [`PipelineGraph`] per editing session, owned by the
//! [`EditorController`](crate::EditorController).

use itertools::Itertools;
use patchbay_catalog::NodeCatalog;
use tracing::{debug, warn};

use crate::{
	errors::PipelineError,
	json::PipelineDescription,
	labels::{EdgeId, HandleName, NodeId},
	node::{Node, NodeData, Position},
};

/// The id of the pre-seeded pipeline input node
pub const INPUT_NODE_ID: &str = "input-node";

/// The id of the pre-seeded pipeline output node
pub const OUTPUT_NODE_ID: &str = "output-node";

/// The type tag a fresh boundary slot starts with
pub const DEFAULT_SLOT_TYPE: &str = "string";

/// A directed connection from one node's source handle to another
/// node's target handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
	pub id: EdgeId,
	pub source: NodeId,
	pub source_handle: HandleName,
	pub target: NodeId,
	pub target_handle: HandleName,
}

/// A pipeline under construction: nodes, edges, and the two
/// boundary nodes every pipeline carries.
#[derive(Debug, Clone)]
pub struct PipelineGraph {
	/// Nodes, in creation order
	pub(crate) nodes: Vec<Node>,

	/// Edges, in creation order
	pub(crate) edges: Vec<Edge>,

	/// Next node id. Session-scoped; only uniqueness matters.
	pub(crate) node_counter: usize,

	/// Next edge id
	pub(crate) edge_counter: usize,
}

impl PipelineGraph {
	/// A graph with no nodes at all.
	/// Only the description loader may use this; every user-visible
	/// graph has its boundary nodes.
	pub(crate) fn empty() -> Self {
		Self {
			nodes: Vec::new(),
			edges: Vec::new(),
			node_counter: 0,
			edge_counter: 0,
		}
	}

	/// Create a new pipeline: the two boundary nodes with one
	/// string-typed slot each, and nothing else.
	pub fn new() -> Self {
		let mut graph = Self::empty();

		let mut input = Node::new_input(NodeId::new(INPUT_NODE_ID), Position::new(50.0, 100.0));
		input.push_slot(DEFAULT_SLOT_TYPE);
		graph.nodes.push(input);

		let mut output =
			Node::new_output(NodeId::new(OUTPUT_NODE_ID), Position::new(800.0, 100.0));
		output.push_slot(DEFAULT_SLOT_TYPE);
		graph.nodes.push(output);

		graph
	}

	pub fn input_node_id(&self) -> NodeId {
		NodeId::new(INPUT_NODE_ID)
	}

	pub fn output_node_id(&self) -> NodeId {
		NodeId::new(OUTPUT_NODE_ID)
	}

	/// Get a node by id
	pub fn node(&self, id: &NodeId) -> Option<&Node> {
		self.nodes.iter().find(|n| &n.id == id)
	}

	fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
		self.nodes.iter_mut().find(|n| &n.id == id)
	}

	/// Get an edge by id
	pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
		self.edges.iter().find(|e| &e.id == id)
	}

	/// Iterate over all nodes, in creation order
	pub fn iter_nodes(&self) -> impl Iterator<Item = &Node> {
		self.nodes.iter()
	}

	/// Iterate over all edges, in creation order
	pub fn iter_edges(&self) -> impl Iterator<Item = &Edge> {
		self.edges.iter()
	}

	pub fn len_nodes(&self) -> usize {
		self.nodes.len()
	}

	pub fn len_edges(&self) -> usize {
		self.edges.len()
	}

	pub(crate) fn next_node_id(&mut self) -> NodeId {
		let id = format!("node-{}", self.node_counter);
		self.node_counter += 1;
		id.into()
	}

	fn next_edge_id(&mut self) -> EdgeId {
		let id = format!("edge-{}", self.edge_counter);
		self.edge_counter += 1;
		id.into()
	}

	/// Create an operation node from a catalog descriptor.
	///
	/// The descriptor's arguments, outputs, and models are copied
	/// into the node, so later catalog changes never affect it.
	pub fn add_operation(
		&mut self,
		catalog: &NodeCatalog,
		type_id: &str,
		position: Position,
	) -> Result<NodeId, PipelineError> {
		let descriptor = catalog
			.get(type_id)
			.ok_or_else(|| PipelineError::UnknownNodeType {
				type_id: type_id.into(),
			})?;

		let id = self.next_node_id();
		debug!(node = %id, node_type = type_id, "adding operation node");
		self.nodes
			.push(Node::new_operation(id.clone(), position, descriptor));
		Ok(id)
	}

	/// Create a fixed-value node
	pub fn add_fixed_value(&mut self, position: Position) -> NodeId {
		let id = self.next_node_id();
		debug!(node = %id, "adding fixed-value node");
		self.nodes.push(Node::new_fixed_value(id.clone(), position));
		id
	}

	/// Connect a source handle to a target handle.
	///
	/// A target handle accepts at most one incoming edge; connecting
	/// to an occupied handle is rejected with
	/// [`PipelineError::DuplicateConnection`] and the existing edge is
	/// kept. Repeating an identical request is rejected the same way,
	/// so no call sequence can produce duplicate edges. Fan-out from a
	/// source handle is unlimited, and self-loops are not rejected.
	pub fn connect(
		&mut self,
		source: &NodeId,
		source_handle: &HandleName,
		target: &NodeId,
		target_handle: &HandleName,
	) -> Result<EdgeId, PipelineError> {
		let source_node = self.node(source).ok_or(PipelineError::NoSuchNode {
			node: source.clone(),
		})?;
		if !source_node.has_source_handle(source_handle) {
			return Err(PipelineError::NoSuchOutput {
				node: source.clone(),
				handle: source_handle.clone(),
			});
		}

		let target_node = self.node(target).ok_or(PipelineError::NoSuchNode {
			node: target.clone(),
		})?;
		if !target_node.has_target_handle(target_handle) {
			return Err(PipelineError::NoSuchInput {
				node: target.clone(),
				handle: target_handle.clone(),
			});
		}

		let occupied = self
			.edges
			.iter()
			.any(|e| &e.target == target && &e.target_handle == target_handle);
		if occupied {
			warn!(
				node = %target,
				handle = %target_handle,
				"rejecting connection, input handle is already connected"
			);
			return Err(PipelineError::DuplicateConnection {
				node: target.clone(),
				handle: target_handle.clone(),
			});
		}

		let id = self.next_edge_id();
		debug!(
			edge = %id,
			source = %source,
			target = %target,
			"adding edge"
		);
		self.edges.push(Edge {
			id: id.clone(),
			source: source.clone(),
			source_handle: source_handle.clone(),
			target: target.clone(),
			target_handle: target_handle.clone(),
		});
		Ok(id)
	}

	/// Remove one edge.
	/// A no-op if the id is absent, so double-disconnect is safe.
	pub fn disconnect(&mut self, edge: &EdgeId) {
		let before = self.edges.len();
		self.edges.retain(|e| &e.id != edge);
		if self.edges.len() == before {
			debug!(edge = %edge, "disconnect of an unknown edge, ignoring");
		}
	}

	/// Delete every listed node that isn't a boundary node.
	///
	/// The input and output boundary nodes are skipped even when
	/// explicitly listed. Every edge touching a deleted node, on
	/// either end, is removed with it.
	pub fn delete_nodes(&mut self, ids: &[NodeId]) {
		let removed: Vec<NodeId> = ids
			.iter()
			.unique()
			.filter(|id| self.node(id).is_some_and(|n| !n.is_boundary()))
			.cloned()
			.collect();
		if removed.is_empty() {
			return;
		}

		self.nodes.retain(|n| !removed.contains(&n.id));
		self.edges
			.retain(|e| !removed.contains(&e.source) && !removed.contains(&e.target));
		debug!(count = removed.len(), "deleted nodes");
	}

	/// Move a node on the canvas
	pub fn set_position(&mut self, node: &NodeId, position: Position) -> Result<(), PipelineError> {
		let n = self
			.node_mut(node)
			.ok_or(PipelineError::NoSuchNode { node: node.clone() })?;
		n.position = position;
		Ok(())
	}

	/// Append a typed slot to a boundary node.
	/// Returns the new slot's handle name.
	pub fn add_slot(&mut self, node: &NodeId, type_tag: &str) -> Result<HandleName, PipelineError> {
		let n = self
			.node_mut(node)
			.ok_or(PipelineError::NoSuchNode { node: node.clone() })?;
		n.push_slot(type_tag)
			.ok_or(PipelineError::NotABoundaryNode { node: node.clone() })
	}

	/// Remove a boundary node's slot by index.
	/// An edge connected to the removed slot is removed with it;
	/// edges on other slots are untouched.
	pub fn remove_slot(&mut self, node: &NodeId, index: usize) -> Result<(), PipelineError> {
		let n = self
			.node_mut(node)
			.ok_or(PipelineError::NoSuchNode { node: node.clone() })?;

		let slots = match &mut n.data {
			NodeData::Input { slots } | NodeData::Output { slots } => slots,
			_ => return Err(PipelineError::NotABoundaryNode { node: node.clone() }),
		};
		if index >= slots.len() {
			return Err(PipelineError::NoSuchSlot {
				node: node.clone(),
				index,
			});
		}

		let handle = slots.remove(index).handle;
		self.edges.retain(|e| {
			!(&e.source == node && e.source_handle == handle)
				&& !(&e.target == node && e.target_handle == handle)
		});
		Ok(())
	}

	/// Change the type tag of a boundary node's slot
	pub fn set_slot_type(
		&mut self,
		node: &NodeId,
		index: usize,
		type_tag: &str,
	) -> Result<(), PipelineError> {
		let n = self
			.node_mut(node)
			.ok_or(PipelineError::NoSuchNode { node: node.clone() })?;

		let slots = match &mut n.data {
			NodeData::Input { slots } | NodeData::Output { slots } => slots,
			_ => return Err(PipelineError::NotABoundaryNode { node: node.clone() }),
		};
		match slots.get_mut(index) {
			Some(slot) => {
				slot.type_tag = type_tag.into();
				Ok(())
			}
			None => Err(PipelineError::NoSuchSlot {
				node: node.clone(),
				index,
			}),
		}
	}

	/// Edit a fixed-value node's type tag and value
	pub fn set_fixed_value(
		&mut self,
		node: &NodeId,
		value_type: &str,
		value: &str,
	) -> Result<(), PipelineError> {
		let n = self
			.node_mut(node)
			.ok_or(PipelineError::NoSuchNode { node: node.clone() })?;

		match &mut n.data {
			NodeData::FixedValue {
				value_type: t,
				value: v,
			} => {
				*t = value_type.into();
				*v = value.into();
				Ok(())
			}
			_ => Err(PipelineError::NotAFixedValueNode { node: node.clone() }),
		}
	}

	/// Choose the model backing an operation node.
	/// Must be one of the node's candidate models.
	pub fn select_model(&mut self, node: &NodeId, model: &str) -> Result<(), PipelineError> {
		let n = self
			.node_mut(node)
			.ok_or(PipelineError::NoSuchNode { node: node.clone() })?;

		match &mut n.data {
			NodeData::Operation {
				models,
				selected_model,
				..
			} => {
				if !models.iter().any(|m| m == model) {
					return Err(PipelineError::NoSuchModel {
						node: node.clone(),
						model: model.into(),
					});
				}
				*selected_model = Some(model.into());
				Ok(())
			}
			_ => Err(PipelineError::NotAnOperationNode { node: node.clone() }),
		}
	}

	/// Project this graph into its wire format.
	/// Pure: calling this twice on an unchanged graph yields
	/// structurally identical output.
	pub fn to_description(&self) -> PipelineDescription {
		PipelineDescription::from_graph(self)
	}
}

impl Default for PipelineGraph {
	fn default() -> Self {
		Self::new()
	}
}

/// Extract the numeric suffix of a generated id like `node-7` or
/// `out-2`. Used when loading a description to fast-forward the
/// corresponding counter past every id already in use.
pub(crate) fn index_suffix(s: &str) -> Option<usize> {
	let (_, suffix) = s.rsplit_once('-')?;
	suffix.parse().ok()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::node::NodeKind;
	use std::collections::BTreeSet;

	fn catalog() -> NodeCatalog {
		NodeCatalog::with_builtin_types()
	}

	fn handle(s: &str) -> HandleName {
		HandleName::new(s)
	}

	#[test]
	fn node_ids_are_unique() {
		let catalog = catalog();
		let mut graph = PipelineGraph::new();

		let mut ids = BTreeSet::new();
		for i in 0..100 {
			let id = if i % 2 == 0 {
				graph
					.add_operation(&catalog, "Summarization", Position::new(0.0, 0.0))
					.unwrap()
			} else {
				graph.add_fixed_value(Position::new(0.0, 0.0))
			};
			assert!(ids.insert(id), "duplicate node id");
		}

		// ...even after deleting everything and starting over
		let all: Vec<NodeId> = ids.iter().cloned().collect();
		graph.delete_nodes(&all);
		let id = graph.add_fixed_value(Position::new(0.0, 0.0));
		assert!(ids.insert(id), "node id reused after delete");
	}

	#[test]
	fn unknown_node_type_is_rejected() {
		let catalog = catalog();
		let mut graph = PipelineGraph::new();

		let result = graph.add_operation(&catalog, "NotARealNodeType", Position::new(0.0, 0.0));
		assert!(matches!(
			result,
			Err(PipelineError::UnknownNodeType { .. })
		));

		// Nothing but the boundary nodes
		assert_eq!(graph.len_nodes(), 2);
	}

	#[test]
	fn operation_copies_descriptor() {
		let catalog = catalog();
		let mut graph = PipelineGraph::new();

		let id = graph
			.add_operation(&catalog, "TextClassification", Position::new(10.0, 20.0))
			.unwrap();
		let node = graph.node(&id).unwrap();

		assert_eq!(node.kind(), NodeKind::Operation);
		assert_eq!(node.target_handles(), vec![handle("text")]);
		assert_eq!(node.source_handles(), vec![handle("label")]);

		match &node.data {
			NodeData::Operation { selected_model, .. } => {
				// Defaults to the first candidate model
				assert_eq!(selected_model.as_deref(), Some("BERT"));
			}
			_ => unreachable!(),
		}
	}

	#[test]
	fn connect_two_operations() {
		let catalog = catalog();
		let mut graph = PipelineGraph::new();

		let a = graph
			.add_operation(&catalog, "TextClassification", Position::new(0.0, 0.0))
			.unwrap();
		let b = graph
			.add_operation(&catalog, "Summarization", Position::new(0.0, 0.0))
			.unwrap();

		graph
			.connect(&a, &handle("label"), &b, &handle("text"))
			.unwrap();

		let desc = graph.to_description();
		assert_eq!(desc.edges.len(), 1);
		assert_eq!(desc.edges[0].source, a);
		assert_eq!(desc.edges[0].source_handle.as_ref(), Some(&handle("label")));
		assert_eq!(desc.edges[0].target, b);
		assert_eq!(desc.edges[0].target_handle.as_ref(), Some(&handle("text")));
	}

	#[test]
	fn occupied_handle_rejects_second_edge() {
		let catalog = catalog();
		let mut graph = PipelineGraph::new();

		let a = graph
			.add_operation(&catalog, "TextClassification", Position::new(0.0, 0.0))
			.unwrap();
		let b = graph
			.add_operation(&catalog, "Summarization", Position::new(0.0, 0.0))
			.unwrap();
		let c = graph
			.add_operation(&catalog, "TextGeneration", Position::new(0.0, 0.0))
			.unwrap();

		let first = graph
			.connect(&a, &handle("label"), &b, &handle("text"))
			.unwrap();

		// From a third node...
		assert!(matches!(
			graph.connect(&c, &handle("generated_text"), &b, &handle("text")),
			Err(PipelineError::DuplicateConnection { .. })
		));
		// ...and an identical repeat of the first request.
		assert!(matches!(
			graph.connect(&a, &handle("label"), &b, &handle("text")),
			Err(PipelineError::DuplicateConnection { .. })
		));

		// The edge set is unchanged: still exactly the first edge.
		assert_eq!(graph.len_edges(), 1);
		assert!(graph.edge(&first).is_some());
	}

	#[test]
	fn fan_out_is_unlimited() {
		let catalog = catalog();
		let mut graph = PipelineGraph::new();

		let a = graph
			.add_operation(&catalog, "TextClassification", Position::new(0.0, 0.0))
			.unwrap();
		let b = graph
			.add_operation(&catalog, "Summarization", Position::new(0.0, 0.0))
			.unwrap();
		let c = graph
			.add_operation(&catalog, "HumanizeText", Position::new(0.0, 0.0))
			.unwrap();

		// One output may feed any number of targets.
		graph
			.connect(&a, &handle("label"), &b, &handle("text"))
			.unwrap();
		graph
			.connect(&a, &handle("label"), &c, &handle("text"))
			.unwrap();
		assert_eq!(graph.len_edges(), 2);
	}

	#[test]
	fn connect_validates_nodes_and_handles() {
		let catalog = catalog();
		let mut graph = PipelineGraph::new();

		let a = graph
			.add_operation(&catalog, "TextClassification", Position::new(0.0, 0.0))
			.unwrap();
		let ghost = NodeId::new("node-9999");

		assert!(matches!(
			graph.connect(&ghost, &handle("label"), &a, &handle("text")),
			Err(PipelineError::NoSuchNode { .. })
		));
		assert!(matches!(
			graph.connect(&a, &handle("nope"), &a, &handle("text")),
			Err(PipelineError::NoSuchOutput { .. })
		));
		assert!(matches!(
			graph.connect(&a, &handle("label"), &a, &handle("nope")),
			Err(PipelineError::NoSuchInput { .. })
		));
		assert_eq!(graph.len_edges(), 0);
	}

	#[test]
	fn delete_cascade_is_precise() {
		let catalog = catalog();
		let mut graph = PipelineGraph::new();

		let a = graph
			.add_operation(&catalog, "TextClassification", Position::new(0.0, 0.0))
			.unwrap();
		let b = graph
			.add_operation(&catalog, "Summarization", Position::new(0.0, 0.0))
			.unwrap();

		let input = graph.input_node_id();
		let output = graph.output_node_id();
		graph
			.connect(&input, &handle("out-0"), &a, &handle("text"))
			.unwrap();
		graph
			.connect(&a, &handle("label"), &b, &handle("text"))
			.unwrap();
		let kept = graph
			.connect(&b, &handle("summary"), &output, &handle("in-0"))
			.unwrap();
		assert_eq!(graph.len_edges(), 3);

		graph.delete_nodes(&[a.clone()]);

		// Exactly the two edges touching `a` are gone.
		assert!(graph.node(&a).is_none());
		assert_eq!(graph.len_edges(), 1);
		assert!(graph.edge(&kept).is_some());

		// `b` survives with its input now unconnected.
		let b_node = graph.node(&b).unwrap();
		assert!(b_node.has_target_handle(&handle("text")));
		assert!(!graph.iter_edges().any(|e| e.target == b));
	}

	#[test]
	fn boundary_nodes_cannot_be_deleted() {
		let catalog = catalog();
		let mut graph = PipelineGraph::new();

		let a = graph
			.add_operation(&catalog, "Summarization", Position::new(0.0, 0.0))
			.unwrap();

		// Explicitly listing the boundary nodes must not delete them.
		graph.delete_nodes(&[graph.input_node_id(), graph.output_node_id(), a.clone()]);

		assert!(graph.node(&graph.input_node_id()).is_some());
		assert!(graph.node(&graph.output_node_id()).is_some());
		assert!(graph.node(&a).is_none());
	}

	#[test]
	fn slots_only_on_boundary_nodes() {
		let catalog = catalog();
		let mut graph = PipelineGraph::new();

		let a = graph
			.add_operation(&catalog, "Summarization", Position::new(0.0, 0.0))
			.unwrap();
		assert!(matches!(
			graph.add_slot(&a, "string"),
			Err(PipelineError::NotABoundaryNode { .. })
		));
		assert!(matches!(
			graph.remove_slot(&a, 0),
			Err(PipelineError::NotABoundaryNode { .. })
		));
	}

	#[test]
	fn remove_slot_cascades_and_keeps_later_slots_stable() {
		let catalog = catalog();
		let mut graph = PipelineGraph::new();
		let output = graph.output_node_id();

		// Three slots total: the seeded one plus two more.
		let second = graph.add_slot(&output, "string").unwrap();
		let third = graph.add_slot(&output, "dataframe").unwrap();

		let a = graph
			.add_operation(&catalog, "Summarization", Position::new(0.0, 0.0))
			.unwrap();
		graph
			.connect(&a, &handle("summary"), &output, &handle("in-0"))
			.unwrap();
		let survivor = graph.connect(&a, &handle("summary"), &output, &second).unwrap();

		// Remove the first slot. Its edge goes with it.
		graph.remove_slot(&output, 0).unwrap();

		let slots = graph.node(&output).unwrap().slots().unwrap().to_vec();
		assert_eq!(slots.len(), 2);
		assert_eq!(slots[0].handle, second);
		assert_eq!(slots[1].handle, third);

		assert_eq!(graph.len_edges(), 1);
		assert!(graph.edge(&survivor).is_some());

		// Handle names never shift: a new slot continues the count.
		let fourth = graph.add_slot(&output, "string").unwrap();
		assert_eq!(fourth, handle("in-3"));
	}

	#[test]
	fn remove_slot_bad_index() {
		let mut graph = PipelineGraph::new();
		let input = graph.input_node_id();

		assert!(matches!(
			graph.remove_slot(&input, 5),
			Err(PipelineError::NoSuchSlot { index: 5, .. })
		));
	}

	#[test]
	fn select_model_checks_candidates() {
		let catalog = catalog();
		let mut graph = PipelineGraph::new();

		let a = graph
			.add_operation(&catalog, "Summarization", Position::new(0.0, 0.0))
			.unwrap();

		graph.select_model(&a, "Pegasus").unwrap();
		match &graph.node(&a).unwrap().data {
			NodeData::Operation { selected_model, .. } => {
				assert_eq!(selected_model.as_deref(), Some("Pegasus"));
			}
			_ => unreachable!(),
		}

		assert!(matches!(
			graph.select_model(&a, "NotAModel"),
			Err(PipelineError::NoSuchModel { .. })
		));
		assert!(matches!(
			graph.select_model(&graph.input_node_id(), "Pegasus"),
			Err(PipelineError::NotAnOperationNode { .. })
		));
	}

	#[test]
	fn double_disconnect_is_a_noop() {
		let catalog = catalog();
		let mut graph = PipelineGraph::new();

		let a = graph
			.add_operation(&catalog, "TextClassification", Position::new(0.0, 0.0))
			.unwrap();
		let b = graph
			.add_operation(&catalog, "Summarization", Position::new(0.0, 0.0))
			.unwrap();
		let edge = graph
			.connect(&a, &handle("label"), &b, &handle("text"))
			.unwrap();

		graph.disconnect(&edge);
		assert_eq!(graph.len_edges(), 0);
		graph.disconnect(&edge);
		assert_eq!(graph.len_edges(), 0);

		// The handle is free again.
		graph
			.connect(&a, &handle("label"), &b, &handle("text"))
			.unwrap();
	}

	#[test]
	fn self_loops_are_not_rejected() {
		let catalog = catalog();
		let mut graph = PipelineGraph::new();

		let a = graph
			.add_operation(&catalog, "AnyToAny", Position::new(0.0, 0.0))
			.unwrap();
		graph
			.connect(&a, &handle("output"), &a, &handle("input"))
			.unwrap();
		assert_eq!(graph.len_edges(), 1);
	}
}
