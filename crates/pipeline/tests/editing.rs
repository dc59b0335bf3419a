//! A full editing session, end to end: build a small text pipeline
//! through the controller, then check what survives deletion and what
//! the saved description looks like.

use patchbay_catalog::NodeCatalog;
use patchbay_pipeline::{
	errors::PipelineError,
	labels::{HandleName, NodeId},
	EditorController, NodeData, PaletteItem, PipelineGraph, Position,
};

fn handle(s: &str) -> HandleName {
	HandleName::new(s)
}

fn drop_operation(editor: &mut EditorController, type_id: &str, x: f64, y: f64) -> NodeId {
	editor.begin_drag(PaletteItem::Operation(type_id.into()));
	editor
		.drop_on_canvas(Position::new(x, y))
		.unwrap()
		.unwrap()
}

fn connect(
	editor: &mut EditorController,
	source: &NodeId,
	source_handle: &str,
	target: &NodeId,
	target_handle: &str,
) -> Result<(), PipelineError> {
	editor.begin_connection(source, &handle(source_handle))?;
	editor
		.complete_connection(target, &handle(target_handle))
		.map(|_| ())
}

#[test]
fn text_pipeline_session() {
	let mut editor = EditorController::new(NodeCatalog::with_builtin_types());
	let input = editor.graph().input_node_id();
	let output = editor.graph().output_node_id();

	// input -> classify -> summarize -> output
	let classify = drop_operation(&mut editor, "TextClassification", 250.0, 100.0);
	let summarize = drop_operation(&mut editor, "Summarization", 500.0, 100.0);

	connect(&mut editor, &input, "out-0", &classify, "text").unwrap();
	connect(&mut editor, &classify, "label", &summarize, "text").unwrap();
	connect(&mut editor, &summarize, "summary", &output, "in-0").unwrap();
	assert_eq!(editor.graph().len_edges(), 3);

	// A third node can't steal summarize's occupied input...
	let generate = drop_operation(&mut editor, "TextGeneration", 250.0, 300.0);
	assert!(matches!(
		connect(&mut editor, &generate, "generated_text", &summarize, "text"),
		Err(PipelineError::DuplicateConnection { .. })
	));
	assert_eq!(editor.graph().len_edges(), 3);

	// ...but fan-out from the input node is fine.
	connect(&mut editor, &input, "out-0", &generate, "text_prompt").unwrap();
	assert_eq!(editor.graph().len_edges(), 4);

	// Deleting classify takes exactly its two edges with it.
	editor.set_selection(vec![classify.clone()], Vec::new());
	editor.delete_selected();
	assert!(editor.graph().node(&classify).is_none());
	assert_eq!(editor.graph().len_edges(), 2);
	assert!(!editor
		.graph()
		.iter_edges()
		.any(|e| e.source == classify || e.target == classify));

	// Grow the output node, wire the new slot, then remove the old
	// one; the new slot's edge must survive under its original name.
	let second = editor.add_slot(&output, "string").unwrap();
	assert_eq!(second, handle("in-1"));
	connect(&mut editor, &generate, "generated_text", &output, "in-1").unwrap();

	editor.remove_slot(&output, 0).unwrap();
	let slots = editor.graph().node(&output).unwrap().slots().unwrap();
	assert_eq!(slots.len(), 1);
	assert_eq!(slots[0].handle, second);
	assert!(editor
		.graph()
		.iter_edges()
		.any(|e| e.target == output && e.target_handle == second));

	// summarize lost its downstream edge with slot in-0.
	assert_eq!(editor.graph().len_edges(), 2);

	// Save, reload, and make sure the graph survives the trip.
	let description = editor.description();
	let text = serde_json::to_string_pretty(&description).unwrap();
	let parsed = serde_json::from_str(&text).unwrap();
	let reloaded =
		PipelineGraph::from_description(editor.catalog(), &parsed).unwrap();
	assert_eq!(reloaded.to_description(), description);

	// The saved operation nodes carry their chosen models.
	for node in description.nodes {
		if let NodeData::Operation {
			models,
			selected_model,
			..
		} = node.data
		{
			assert_eq!(selected_model.as_deref(), models.first().map(|m| m.as_str()));
		}
	}
}
