// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Directory holding notes and settings (overrides the config file)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a note
    New {
        /// Note title
        #[arg(value_name = "TITLE")]
        title: Option<String>,

        /// Note content (markup allowed)
        #[arg(long)]
        content: Option<String>,

        /// Tag, may be repeated
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Folder, defaults to the configured default folder
        #[arg(short, long)]
        folder: Option<String>,

        /// Short description
        #[arg(long)]
        description: Option<String>,
    },

    /// Change fields of an existing note
    Edit {
        /// Note ID to edit
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// Replace all tags; may be repeated
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Option<Vec<String>>,

        #[arg(short, long)]
        folder: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Toggle the bookmark flag of a note
    Bookmark {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Toggle the shared flag of a note
    Share {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// List notes with ID, flags, folder, title and a preview
    List {
        /// Optional search term matched against title and content
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Only notes in this folder
        #[arg(short, long)]
        folder: Option<String>,

        /// Only notes carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only bookmarked notes
        #[arg(long)]
        bookmarked: bool,

        /// Only shared notes
        #[arg(long)]
        shared: bool,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a note
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Output note as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Open the note in the browser
        #[arg(long)]
        html: bool,
    },

    /// Show folders with note counts
    Folders,

    /// Import local text files as notes
    Upload {
        /// Files or directories to import
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Descend into directories recursively
        #[arg(short, long)]
        recursive: bool,

        /// Also store each file on the remote drive
        #[arg(long)]
        drive: bool,
    },

    /// Export notes as plain-text documents
    Download {
        /// Note IDs to export
        #[arg(value_name = "NOTE_ID", required_unless_present = "all")]
        note_ids: Vec<String>,

        /// Export every note
        #[arg(long, conflicts_with = "note_ids")]
        all: bool,

        /// Output directory; existing files are never overwritten
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        out: PathBuf,
    },

    /// Show or change display preferences
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Work with the remote drive
    Drive {
        #[command(subcommand)]
        action: DriveAction,
    },

    /// Write a config file with default values
    InitConfig {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SettingsAction {
    /// Print current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one or more settings
    Set {
        /// Font size (12-24)
        #[arg(long)]
        font_size: Option<u8>,

        /// Font family, e.g. "Georgia" or "courier-new"
        #[arg(long)]
        font_family: Option<String>,

        /// light, dark or auto
        #[arg(long)]
        theme: Option<String>,

        /// Background color as #rrggbb
        #[arg(long)]
        background_color: Option<String>,

        #[arg(long)]
        distraction_free: Option<bool>,

        #[arg(long)]
        auto_save: Option<bool>,

        #[arg(long)]
        show_word_count: Option<bool>,
    },

    /// Restore default settings
    Reset,
}

#[derive(Subcommand, Debug, Clone)]
pub enum DriveAction {
    /// List remote files
    List,

    /// Print the content of a remote file
    Get {
        #[arg(value_name = "FILE_ID")]
        file_id: String,
    },

    /// Delete a remote file
    Delete {
        #[arg(value_name = "FILE_ID")]
        file_id: String,
    },
}
