use crate::script::{parse_command, parse_selection};
use clap::Parser;
use scribe_core::Selection;
use scribe_toolbar::Command;
use std::path::PathBuf;

/// Scribe rich-text editor shell: apply editing commands to a document and
/// print the resulting toolbar.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Document to open (`.rtf` is rich text, anything else plain text)
    pub file: Option<PathBuf>,

    /// Toolbar configuration (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial selection as START:LEN
    #[arg(long, value_parser = parse_selection)]
    pub select: Option<Selection>,

    /// Editing command, repeatable: bold, italic, underline, strikeout, left,
    /// center, right, font=NAME, size=TEXT, color=#RRGGBB, insert=TEXT,
    /// select=START:LEN, select-all, undo, redo, cut, copy, paste, click=POS
    #[arg(long = "command", short = 'c', value_parser = parse_command)]
    pub commands: Vec<Command>,

    /// Save the document here afterwards
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Also list the installed font families
    #[arg(long, default_value_t = false)]
    pub catalog: bool,
}
