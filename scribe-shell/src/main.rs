//! # scribe-shell
//!
//! Headless driver for the rich-text editor. Opens a document, applies
//! `--command`s in order, optionally saves, then prints the toolbar and
//! context-menu layouts and the final toolbar state as JSON.
//!
//! ```text
//! scribe-shell notes.rtf --select 0:5 -c bold -c size=14 --save out.rtf
//! ```

mod cli;
mod script;

use clap::Parser;
use cli::CliArgs;
use log::info;
use scribe_text::FontCatalog;
use scribe_toolbar::{Command, EditorEvent, RichTextEditor, Surface, ToolbarConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = CliArgs::parse();

    info!("Starting Scribe shell...");

    let config = match &args.config {
        Some(path) => ToolbarConfig::from_path(path)?,
        None => ToolbarConfig::default(),
    };
    let catalog = FontCatalog::discover();
    let mut editor = RichTextEditor::with_config(config, catalog);

    if let Some(path) = &args.file {
        editor.execute(Command::Open(path.clone()))?;
    }
    if let Some(selection) = args.select {
        editor.execute(Command::Select(selection))?;
    }
    report(editor.pump());

    for command in args.commands {
        editor.execute(command)?;
        report(editor.pump());
    }

    if let Some(path) = args.save {
        editor.execute(Command::Save(path.clone()))?;
        info!("Saved {}", path.display());
    }

    let mut output = serde_json::json!({
        "toolbar": editor.layout(Surface::Toolbar),
        "context_menu": editor.layout(Surface::ContextMenu),
        "state": editor.toolbar(),
        "selection": editor.document().selection(),
        "modified": editor.document().is_modified(),
    });
    if args.catalog {
        output["fonts"] = serde_json::json!(editor.catalog().families());
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Surface events a GUI would act on.
fn report(events: Vec<EditorEvent>) {
    for event in events {
        match event {
            EditorEvent::Notify(message) => eprintln!("{message}"),
            EditorEvent::LinkClicked(url) => eprintln!("link: {url}"),
            EditorEvent::SelectionChanged(selection) => {
                log::debug!("selection now {}:{}", selection.start, selection.length)
            }
            EditorEvent::ContentChanged => log::debug!("content changed"),
        }
    }
}
