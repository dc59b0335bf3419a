use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use std::{
	path::{Path, PathBuf},
	thread,
};
use tracing::debug;

use patchbay_catalog::NodeCatalog;
use patchbay_pipeline::{
	labels::HandleName, EditorController, PaletteItem, PipelineDescription, PipelineGraph,
	Position, RunStatus, COMPLETION_HOLD, TICK_INTERVAL,
};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
	/// List every node type in the catalog
	Nodes,

	/// Build a small pipeline through the editing api and print it
	Demo,

	/// Validate a saved pipeline
	Check { file: PathBuf },

	/// Validate a saved pipeline, then simulate a run
	Run { file: PathBuf },
}

fn load_pipeline(catalog: &NodeCatalog, file: &Path) -> Result<PipelineGraph> {
	let text = std::fs::read_to_string(file)
		.with_context(|| format!("could not read `{}`", file.display()))?;
	let description: PipelineDescription = serde_json::from_str(&text)
		.with_context(|| format!("could not parse `{}`", file.display()))?;
	let graph = PipelineGraph::from_description(catalog, &description)
		.with_context(|| format!("invalid pipeline in `{}`", file.display()))?;
	debug!(file = %file.display(), "loaded pipeline");
	Ok(graph)
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.without_time()
		.with_ansi(true)
		.init();

	let cli = Args::parse();
	let catalog = NodeCatalog::with_builtin_types();

	match cli.command {
		Commands::Nodes => {
			for t in catalog.iter() {
				let arguments = t
					.arguments
					.iter()
					.map(|a| a.as_str())
					.collect::<Vec<_>>()
					.join(", ");
				let outputs = t
					.outputs
					.iter()
					.map(|o| o.as_str())
					.collect::<Vec<_>>()
					.join(", ");

				println!(
					"{} ({arguments}) -> ({outputs}) {}",
					format!("{:<30}", t.id).cyan(),
					format!("default: {}", t.models.first().map(|m| m.as_str()).unwrap_or("-"))
						.dark_grey()
						.italic(),
				);
			}
		}

		Commands::Demo => {
			let mut editor = EditorController::new(catalog);
			let input = editor.graph().input_node_id();
			let output = editor.graph().output_node_id();

			editor.begin_drag(PaletteItem::Operation("TextClassification".into()));
			let classify = editor
				.drop_on_canvas(Position::new(250.0, 100.0))?
				.context("drop landed without a drag")?;

			editor.begin_drag(PaletteItem::Operation("Summarization".into()));
			let summarize = editor
				.drop_on_canvas(Position::new(500.0, 100.0))?
				.context("drop landed without a drag")?;

			editor.begin_connection(&input, &HandleName::new("out-0"))?;
			editor.complete_connection(&classify, &HandleName::new("text"))?;

			editor.begin_connection(&classify, &HandleName::new("label"))?;
			editor.complete_connection(&summarize, &HandleName::new("text"))?;

			editor.begin_connection(&summarize, &HandleName::new("summary"))?;
			editor.complete_connection(&output, &HandleName::new("in-0"))?;

			println!("{}", serde_json::to_string_pretty(&editor.description())?);
		}

		Commands::Check { file } => {
			let graph = load_pipeline(&catalog, &file)?;
			println!(
				"{} {} ({} nodes, {} edges)",
				"ok:".green(),
				file.display(),
				graph.len_nodes(),
				graph.len_edges()
			);
		}

		Commands::Run { file } => {
			let graph = load_pipeline(&catalog, &file)?;
			println!(
				"{} {} ({} nodes, {} edges)",
				"Running".green(),
				file.display(),
				graph.len_nodes(),
				graph.len_edges()
			);

			let bar_style = ProgressStyle::with_template("{bar:30.cyan} {msg:>4}")
				.unwrap()
				.progress_chars("⣿⣷⣶⣦⣤⣄⣀");
			let bar = ProgressBar::new(100).with_style(bar_style);

			let mut status = RunStatus::new();
			status.start();
			while let Some(percent) = status.percent() {
				bar.set_position(u64::from(percent));
				bar.set_message(format!("{percent}%"));
				if percent >= 100 {
					thread::sleep(COMPLETION_HOLD);
				} else {
					thread::sleep(TICK_INTERVAL);
				}
				status.tick();
			}
			bar.finish();
			println!("{}", "Done".green());
		}
	}

	Ok(())
}
