// src/lib.rs
pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::application::{
    collect_files, DriveSession, NoteDeleter, NoteEditor, NoteExporter, NoteFilter, NoteLister,
    NoteUploader, NoteViewer, RemoteStorage, SettingsStore, UploadOutcome, UploadStatus,
};
use crate::cli::args::{Args, Command, DriveAction, SettingsAction};
use crate::config::AppConfig;
use crate::constants::SUGGESTED_FOLDERS;
use crate::domain::{FontFamily, NewNote, NotePatch, SettingsPatch, Theme};
use crate::infrastructure::{BrowserPreview, DriveStub, FileKeyValueStorage, JsonNoteRepository};
use crate::ports::{HtmlPresenter, PlainTextPresenter};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notebox with arguments");

    let config_path = args.config.clone().or_else(AppConfig::default_path);
    if let Command::InitConfig { force } = args.command {
        let path = config_path.context("No config directory found, pass --config")?;
        AppConfig::init(&path, force)?;
        println!("{}", path.display());
        return Ok(());
    }
    let config = AppConfig::load_or_default(config_path.as_deref())?;
    let data_dir = resolve_data_dir(args.data_dir.as_deref(), &config);
    debug!(data_dir = %data_dir.display(), "Using data directory");

    // Initialize infrastructure
    let mut repository = JsonNoteRepository::open(&data_dir)?;
    let presenter = PlainTextPresenter::new();
    let cancel = cancel_on_ctrl_c();

    match args.command {
        Command::New {
            title,
            content,
            tags,
            folder,
            description,
        } => {
            let mut new = NewNote::default()
                .with_tags(tags)
                .in_folder(folder.unwrap_or_else(|| config.notes.default_folder.clone()));
            if let Some(title) = title {
                new.title = title;
            }
            if let Some(content) = content {
                new.content = content;
            }
            new.description = description;

            let note = NoteEditor::new(&mut repository).create_note(new)?;
            info!(note_id = %note.id, "Created note");
            println!("{}", note.id);
        }
        Command::Edit {
            note_id,
            title,
            content,
            tags,
            folder,
            description,
        } => {
            let patch = NotePatch {
                title,
                content,
                tags,
                folder,
                description,
                ..Default::default()
            };
            if patch.is_empty() {
                bail!("Nothing to change for note {note_id}");
            }
            let note = NoteEditor::new(&mut repository).edit_note(&note_id, patch)?;
            println!("{}", presenter.render_list_line(&note));
        }
        Command::Bookmark { note_id } => {
            let note = NoteEditor::new(&mut repository).toggle_bookmark(&note_id)?;
            let state = if note.is_bookmarked { "bookmarked" } else { "unbookmarked" };
            println!("{} {state}", note.id);
        }
        Command::Share { note_id } => {
            let note = NoteEditor::new(&mut repository).toggle_share(&note_id)?;
            let state = if note.is_shared { "shared" } else { "unshared" };
            println!("{} {state}", note.id);
        }
        Command::Delete { note_id } => {
            match NoteDeleter::new(&mut repository).delete_note(&note_id)? {
                Some(note) => println!("Deleted note {} ({})", note.id, note.title),
                None => warn!(%note_id, "Note not found, nothing deleted"),
            }
        }
        Command::List {
            search,
            folder,
            tag,
            bookmarked,
            shared,
            json,
        } => {
            let filter = NoteFilter {
                search,
                folder,
                tag,
                bookmarked_only: bookmarked,
                shared_only: shared,
            };
            let notes = NoteLister::new(&mut repository).list_notes(&filter)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else {
                for note in &notes {
                    println!("{}", presenter.render_list_line(note));
                }
            }
        }
        Command::View {
            note_id,
            json,
            html,
        } => {
            let note = NoteViewer::new(&mut repository).view_note(&note_id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&note)?);
                return Ok(());
            }

            let settings = SettingsStore::load(FileKeyValueStorage::new(&data_dir))?
                .current()
                .clone();
            if html {
                let page = HtmlPresenter::new(settings).render(&note);
                let mut preview = BrowserPreview::new();
                let path = preview.write_page(&page)?;
                preview.open(&path).await?;
            } else {
                print!("{}", presenter.render_detail(&note, &settings));
            }
        }
        Command::Folders => {
            for folder in NoteLister::new(&mut repository).folders(&SUGGESTED_FOLDERS)? {
                println!("{}\t{}", folder.name, folder.count);
            }
        }
        Command::Upload {
            paths,
            recursive,
            drive,
        } => {
            let files = collect_files(&paths, recursive);
            if files.is_empty() {
                bail!("No files found to upload");
            }

            let stub = DriveStub::new(config.drive.to_stub_config());
            let mut session = DriveSession::new();
            if drive {
                let user = session.sign_in(&stub, &cancel).await?;
                info!(user = %user.email, "Signed in to drive");
            }
            let remote: Option<&dyn RemoteStorage> = if session.is_authenticated() {
                Some(&stub)
            } else {
                None
            };

            let outcomes = NoteUploader::new(&mut repository)
                .upload_files(&files, remote, &cancel)
                .await;
            for outcome in &outcomes {
                match &outcome.status {
                    UploadStatus::Success { note_id } => {
                        println!("{}\t{}", note_id, outcome.path.display())
                    }
                    UploadStatus::Failed { reason } => {
                        eprintln!("Failed: {}: {reason}", outcome.path.display())
                    }
                }
            }
            session.sign_out();
            upload_result(&outcomes, files.len())?;
        }
        Command::Download {
            note_ids,
            all,
            out,
        } => {
            let selected: &[String] = if all { &[] } else { &note_ids };
            let exported = NoteExporter::new(&mut repository).export(selected, &out)?;
            for file in &exported {
                println!("{}\t{}", file.note_id, file.path.display());
            }
        }
        Command::Settings { action } => {
            let mut store = SettingsStore::load(FileKeyValueStorage::new(&data_dir))?;
            match action {
                SettingsAction::Show { json } => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(store.current())?);
                    } else {
                        println!("{}", presenter.render_settings(store.current()));
                    }
                }
                SettingsAction::Set {
                    font_size,
                    font_family,
                    theme,
                    background_color,
                    distraction_free,
                    auto_save,
                    show_word_count,
                } => {
                    let patch = SettingsPatch {
                        font_size,
                        font_family: font_family
                            .map(|name| name.parse::<FontFamily>())
                            .transpose()?,
                        theme: theme.map(|name| name.parse::<Theme>()).transpose()?,
                        background_color,
                        distraction_free,
                        auto_save,
                        show_word_count,
                    };
                    if patch.is_empty() {
                        bail!("No setting given to change");
                    }
                    let settings = store.update(patch)?;
                    println!("{}", presenter.render_settings(settings));
                }
                SettingsAction::Reset => {
                    let settings = store.reset()?;
                    println!("{}", presenter.render_settings(settings));
                }
            }
        }
        Command::Drive { action } => {
            let stub = DriveStub::new(config.drive.to_stub_config());
            let mut session = DriveSession::new();
            session.sign_in(&stub, &cancel).await?;

            match action {
                DriveAction::List => {
                    for file in stub.list(&cancel).await? {
                        println!(
                            "{}\t{}\t{}\t{}",
                            file.id, file.mime_type, file.size, file.name
                        );
                    }
                }
                DriveAction::Get { file_id } => {
                    println!("{}", stub.get(&file_id, &cancel).await?);
                }
                DriveAction::Delete { file_id } => {
                    stub.delete(&file_id, &cancel).await?;
                    println!("Deleted remote file {file_id}");
                }
            }
            session.sign_out();
        }
        // Handled before the config is loaded
        Command::InitConfig { .. } => {}
    }

    Ok(())
}

/// A cut-short batch or any failed file makes the upload command fail
fn upload_result(outcomes: &[UploadOutcome], total: usize) -> Result<()> {
    if outcomes.len() < total {
        bail!("Upload cancelled after {} of {total} file(s)", outcomes.len());
    }
    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    if failed > 0 {
        bail!("{failed} of {total} file(s) failed to upload");
    }
    Ok(())
}

/// Command line wins over the config file
pub fn resolve_data_dir(cli_dir: Option<&Path>, config: &AppConfig) -> PathBuf {
    cli_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.storage.data_dir.clone())
}

fn cancel_on_ctrl_c() -> CancellationToken {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling");
            trigger.cancel();
        }
    });
    cancel
}
