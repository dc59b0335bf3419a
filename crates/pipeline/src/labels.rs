//! Lightweight names for nodes, edges, and handles

use serde::{Deserialize, Serialize};
use smartstring::{LazyCompact, SmartString};
use std::fmt::Display;

/// A node's unique id within one pipeline, e.g. `node-3`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId {
	name: SmartString<LazyCompact>,
}

impl NodeId {
	pub fn new(name: &str) -> Self {
		Self { name: name.into() }
	}

	pub fn as_str(&self) -> &str {
		&self.name
	}
}

impl Display for NodeId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.name.fmt(f)
	}
}

impl From<&str> for NodeId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for NodeId {
	fn from(value: String) -> Self {
		Self { name: value.into() }
	}
}

/// An edge's unique id within one pipeline, e.g. `edge-7`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId {
	name: SmartString<LazyCompact>,
}

impl EdgeId {
	pub fn new(name: &str) -> Self {
		Self { name: name.into() }
	}

	pub fn as_str(&self) -> &str {
		&self.name
	}
}

impl Display for EdgeId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.name.fmt(f)
	}
}

impl From<&str> for EdgeId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for EdgeId {
	fn from(value: String) -> Self {
		Self { name: value.into() }
	}
}

/// The name of one connection point on a node.
///
/// Operation nodes name their handles after arguments and outputs
/// (`text`, `summary`); boundary nodes use generated names (`out-0`,
/// `in-2`) that stay stable for the node's whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandleName {
	name: SmartString<LazyCompact>,
}

impl HandleName {
	pub fn new(name: &str) -> Self {
		Self { name: name.into() }
	}

	pub fn as_str(&self) -> &str {
		&self.name
	}
}

impl Display for HandleName {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.name.fmt(f)
	}
}

impl From<&str> for HandleName {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for HandleName {
	fn from(value: String) -> Self {
		Self { name: value.into() }
	}
}

impl From<&SmartString<LazyCompact>> for HandleName {
	fn from(value: &SmartString<LazyCompact>) -> Self {
		Self {
			name: value.clone(),
		}
	}
}
