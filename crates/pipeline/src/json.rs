//! The pipeline wire format.
//!
//! A [`PipelineDescription`] is the JSON shape a pipeline is saved and
//! shared as. It contains everything needed to rebuild the graph and
//! nothing else: no selection state, no interaction state, no ids for
//! edges (those are regenerated on load).

use patchbay_catalog::NodeCatalog;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
	errors::PipelineError,
	graph::{index_suffix, Edge, PipelineGraph},
	labels::{HandleName, NodeId},
	node::{Node, NodeData, NodeKind, Position},
};

/// One node, as serialized.
///
/// The kind-specific payload is flattened in, so a node serializes as
/// `{"id": ..., "position": ..., "type": ..., "data": ...}`.
///
/// Node objects are lenient about unknown keys, since render layers
/// attach fields of their own; the document itself and edge objects
/// are strict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescription {
	pub id: NodeId,
	pub position: Position,

	#[serde(flatten)]
	pub data: NodeData,
}

/// One edge, as serialized.
///
/// Handles are optional on the wire so that half-formed edges from
/// other producers parse instead of failing in serde; the loader
/// rejects them with a proper error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeDescription {
	pub source: NodeId,
	pub target: NodeId,

	#[serde(rename = "sourceHandle")]
	pub source_handle: Option<HandleName>,

	#[serde(rename = "targetHandle")]
	pub target_handle: Option<HandleName>,
}

/// A complete pipeline, as serialized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineDescription {
	pub nodes: Vec<NodeDescription>,
	pub edges: Vec<EdgeDescription>,
}

impl From<&Node> for NodeDescription {
	fn from(node: &Node) -> Self {
		Self {
			id: node.id.clone(),
			position: node.position,
			data: node.data.clone(),
		}
	}
}

impl From<&Edge> for EdgeDescription {
	fn from(edge: &Edge) -> Self {
		Self {
			source: edge.source.clone(),
			target: edge.target.clone(),
			source_handle: Some(edge.source_handle.clone()),
			target_handle: Some(edge.target_handle.clone()),
		}
	}
}

impl PipelineDescription {
	pub(crate) fn from_graph(graph: &PipelineGraph) -> Self {
		Self {
			nodes: graph.iter_nodes().map(NodeDescription::from).collect(),
			edges: graph.iter_edges().map(EdgeDescription::from).collect(),
		}
	}
}

impl PipelineGraph {
	/// Rebuild a graph from its wire format.
	///
	/// Descriptions come from files a user may have edited by hand, so
	/// nothing is trusted: node types must exist in the catalog, model
	/// selections must be candidates, exactly one boundary node of each
	/// kind must be present, and every edge goes through the same
	/// validation as an interactive connection.
	///
	/// Id counters are fast-forwarded past every id in use, so nodes,
	/// edges, and slots created after a load never collide with loaded
	/// ones.
	pub fn from_description(
		catalog: &NodeCatalog,
		description: &PipelineDescription,
	) -> Result<Self, PipelineError> {
		let mut graph = Self::empty();

		let mut have_input = false;
		let mut have_output = false;

		for desc in &description.nodes {
			if graph.node(&desc.id).is_some() {
				return Err(PipelineError::DuplicateNodeId {
					node: desc.id.clone(),
				});
			}

			match &desc.data {
				NodeData::Input { .. } => {
					if have_input {
						return Err(PipelineError::DuplicateBoundaryNode {
							kind: NodeKind::Input,
						});
					}
					have_input = true;
				}
				NodeData::Output { .. } => {
					if have_output {
						return Err(PipelineError::DuplicateBoundaryNode {
							kind: NodeKind::Output,
						});
					}
					have_output = true;
				}
				NodeData::FixedValue { .. } => {}
				NodeData::Operation {
					type_id,
					models,
					selected_model,
					..
				} => {
					if catalog.get(type_id).is_none() {
						return Err(PipelineError::UnknownNodeType {
							type_id: type_id.clone(),
						});
					}
					if let Some(m) = selected_model {
						if !models.contains(m) {
							return Err(PipelineError::NoSuchModel {
								node: desc.id.clone(),
								model: m.clone(),
							});
						}
					}
				}
			}

			// Slot handles are never renumbered, so the next slot index
			// must start past the highest one on the wire.
			let slot_counter = match &desc.data {
				NodeData::Input { slots } | NodeData::Output { slots } => slots
					.iter()
					.filter_map(|s| index_suffix(s.handle.as_str()))
					.map(|i| i + 1)
					.max()
					.unwrap_or(0),
				_ => 0,
			};

			graph.nodes.push(Node {
				id: desc.id.clone(),
				position: desc.position,
				data: desc.data.clone(),
				slot_counter,
			});

			if let Some(i) = index_suffix(desc.id.as_str()) {
				graph.node_counter = graph.node_counter.max(i + 1);
			}
		}

		if !have_input {
			return Err(PipelineError::MissingBoundaryNode {
				kind: NodeKind::Input,
			});
		}
		if !have_output {
			return Err(PipelineError::MissingBoundaryNode {
				kind: NodeKind::Output,
			});
		}

		for edge in &description.edges {
			let source_handle =
				edge.source_handle
					.as_ref()
					.ok_or_else(|| PipelineError::MissingHandle {
						source: edge.source.clone(),
						target: edge.target.clone(),
					})?;
			let target_handle =
				edge.target_handle
					.as_ref()
					.ok_or_else(|| PipelineError::MissingHandle {
						source: edge.source.clone(),
						target: edge.target.clone(),
					})?;

			graph.connect(&edge.source, source_handle, &edge.target, target_handle)?;
		}

		debug!(
			nodes = graph.len_nodes(),
			edges = graph.len_edges(),
			"loaded pipeline description"
		);
		Ok(graph)
	}
}
