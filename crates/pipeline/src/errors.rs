//! Errors we may encounter while editing or loading a pipeline

use smartstring::{LazyCompact, SmartString};
use std::{error::Error, fmt::Display};

use crate::{
	labels::{HandleName, NodeId},
	node::NodeKind,
};

/// An error we encounter when a graph mutation or a loaded
/// description is invalid.
///
/// Every mutation that returns one of these leaves the graph
/// exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
	/// We tried to create a node from a type id the catalog
	/// doesn't know.
	UnknownNodeType {
		/// The type id that missed
		type_id: SmartString<LazyCompact>,
	},

	/// We tried to connect to a target handle that already has an
	/// incoming edge. The existing edge is kept; the caller must
	/// disconnect it first.
	DuplicateConnection {
		/// The node whose handle is occupied
		node: NodeId,
		/// The occupied target handle
		handle: HandleName,
	},

	/// There is no node with this id in the pipeline
	NoSuchNode {
		/// The id that missed
		node: NodeId,
	},

	/// `node` has no target handle named `handle`
	NoSuchInput {
		node: NodeId,
		handle: HandleName,
	},

	/// `node` has no source handle named `handle`
	NoSuchOutput {
		node: NodeId,
		handle: HandleName,
	},

	/// We tried to address a boundary slot index that doesn't exist
	NoSuchSlot {
		node: NodeId,
		index: usize,
	},

	/// We tried a slot operation on a node that isn't an
	/// input or output boundary node
	NotABoundaryNode {
		node: NodeId,
	},

	/// We tried a fixed-value edit on a node of another kind
	NotAFixedValueNode {
		node: NodeId,
	},

	/// We tried to select a model on a node of another kind
	NotAnOperationNode {
		node: NodeId,
	},

	/// We tried to select a model that isn't one of the node's
	/// candidate models
	NoSuchModel {
		node: NodeId,
		model: String,
	},

	/// A loaded description contains two nodes with the same id
	DuplicateNodeId {
		node: NodeId,
	},

	/// A loaded description contains an edge without a handle name
	MissingHandle {
		source: NodeId,
		target: NodeId,
	},

	/// A loaded description contains more than one boundary node
	/// of the given kind
	DuplicateBoundaryNode {
		kind: NodeKind,
	},

	/// A loaded description is missing a boundary node
	MissingBoundaryNode {
		kind: NodeKind,
	},
}

impl Display for PipelineError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::UnknownNodeType { type_id } => {
				write!(f, "unknown node type `{type_id}`")
			}
			Self::DuplicateConnection { node, handle } => {
				write!(
					f,
					"input handle `{handle}` of node `{node}` already has a connection"
				)
			}
			Self::NoSuchNode { node } => {
				write!(f, "no node with id `{node}`")
			}
			Self::NoSuchInput { node, handle } => {
				write!(f, "node `{node}` has no input handle `{handle}`")
			}
			Self::NoSuchOutput { node, handle } => {
				write!(f, "node `{node}` has no output handle `{handle}`")
			}
			Self::NoSuchSlot { node, index } => {
				write!(f, "node `{node}` has no slot at index {index}")
			}
			Self::NotABoundaryNode { node } => {
				write!(f, "node `{node}` is not a boundary node")
			}
			Self::NotAFixedValueNode { node } => {
				write!(f, "node `{node}` is not a fixed-value node")
			}
			Self::NotAnOperationNode { node } => {
				write!(f, "node `{node}` is not an operation node")
			}
			Self::NoSuchModel { node, model } => {
				write!(f, "`{model}` is not a candidate model of node `{node}`")
			}
			Self::DuplicateNodeId { node } => {
				write!(f, "description has more than one node with id `{node}`")
			}
			Self::MissingHandle { source, target } => {
				write!(
					f,
					"edge from `{source}` to `{target}` is missing a handle name"
				)
			}
			Self::DuplicateBoundaryNode { kind } => {
				write!(f, "description has more than one `{kind}` node")
			}
			Self::MissingBoundaryNode { kind } => {
				write!(f, "description has no `{kind}` node")
			}
		}
	}
}

impl Error for PipelineError {}
