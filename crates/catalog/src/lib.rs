//! A registry of the node types a pipeline may contain.
//!
//! The catalog is built once when the editor starts and is never
//! mutated afterwards. Nodes copy descriptor data at creation time,
//! so a catalog outlives nothing and owns nothing but its table.

mod builtin;

pub use builtin::{BuiltinNodeType, BUILTIN_NODE_TYPES};

use serde::{Deserialize, Serialize};
use smartstring::{LazyCompact, SmartString};
use std::{
	collections::BTreeMap,
	error::Error,
	fmt::Display,
};

/// Everything the editor needs to know about one kind of operation node:
/// what to call it, which inputs it takes, which outputs it produces,
/// and which models may back it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTypeDescriptor {
	/// This type's unique identifier
	pub id: SmartString<LazyCompact>,

	/// Human-readable name, shown in the palette
	pub display_name: String,

	/// Names of this node's input arguments, in display order
	pub arguments: Vec<SmartString<LazyCompact>>,

	/// Names of this node's outputs, in display order
	pub outputs: Vec<SmartString<LazyCompact>>,

	/// Models that may back this operation.
	/// The first entry is the default selection.
	pub models: Vec<String>,
}

impl From<&BuiltinNodeType> for NodeTypeDescriptor {
	fn from(value: &BuiltinNodeType) -> Self {
		Self {
			id: value.id.into(),
			display_name: value.display_name.into(),
			arguments: value.arguments.iter().map(|x| (*x).into()).collect(),
			outputs: value.outputs.iter().map(|x| (*x).into()).collect(),
			models: value.models.iter().map(|x| (*x).into()).collect(),
		}
	}
}

/// An error we encounter when trying to register a node type
#[derive(Debug)]
pub enum RegisterNodeError {
	/// We tried to register a node type with an id that is already used
	AlreadyExists,
}

impl Display for RegisterNodeError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::AlreadyExists => write!(f, "a node type with this id already exists"),
		}
	}
}

impl Error for RegisterNodeError {}

/// A lookup table of [`NodeTypeDescriptor`]s, keyed by type id.
#[derive(Debug, Clone)]
pub struct NodeCatalog {
	types: BTreeMap<SmartString<LazyCompact>, NodeTypeDescriptor>,
}

impl NodeCatalog {
	/// Create an empty catalog
	pub fn new() -> Self {
		Self {
			types: BTreeMap::new(),
		}
	}

	/// Create a catalog containing every builtin node type
	pub fn with_builtin_types() -> Self {
		let mut catalog = Self::new();
		for t in BUILTIN_NODE_TYPES {
			// The builtin table has unique ids, so this never fails.
			catalog.register(t.into()).unwrap();
		}
		catalog
	}

	/// Register a new node type.
	/// Fails if a type with the same id has already been registered.
	pub fn register(&mut self, descriptor: NodeTypeDescriptor) -> Result<(), RegisterNodeError> {
		if self.types.contains_key(&descriptor.id) {
			return Err(RegisterNodeError::AlreadyExists);
		}

		self.types.insert(descriptor.id.clone(), descriptor);
		Ok(())
	}

	/// Look up a node type by id
	pub fn get(&self, type_id: &str) -> Option<&NodeTypeDescriptor> {
		self.types.get(type_id)
	}

	/// Iterate over all registered types, in id order
	pub fn iter(&self) -> impl Iterator<Item = &NodeTypeDescriptor> {
		self.types.values()
	}

	/// The number of registered types
	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}

impl Default for NodeCatalog {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_lookup() {
		let catalog = NodeCatalog::with_builtin_types();

		let summarization = catalog.get("Summarization").unwrap();
		assert_eq!(summarization.display_name, "Summarization");
		assert_eq!(summarization.arguments.len(), 1);
		assert_eq!(&*summarization.arguments[0], "text");
		assert_eq!(&*summarization.outputs[0], "summary");
		assert_eq!(summarization.models[0], "BART");

		assert!(catalog.get("NotARealNodeType").is_none());
	}

	#[test]
	fn register_duplicate_fails() {
		let mut catalog = NodeCatalog::with_builtin_types();
		let before = catalog.len();

		let dup: NodeTypeDescriptor = (&BUILTIN_NODE_TYPES[0]).into();
		assert!(matches!(
			catalog.register(dup),
			Err(RegisterNodeError::AlreadyExists)
		));
		assert_eq!(catalog.len(), before);
	}

	#[test]
	fn builtin_table_is_consistent() {
		let catalog = NodeCatalog::with_builtin_types();
		assert_eq!(catalog.len(), BUILTIN_NODE_TYPES.len());

		// Every builtin operation must have at least one output and
		// at least one candidate model. Arguments may be empty
		// (e.g. unconditional generation).
		for t in catalog.iter() {
			assert!(!t.outputs.is_empty(), "`{}` has no outputs", t.id);
			assert!(!t.models.is_empty(), "`{}` has no models", t.id);
		}
	}
}
