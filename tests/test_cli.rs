use clap::Parser;
use notebox::cli::args::{Args, Command, DriveAction, SettingsAction};
use std::path::PathBuf;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["notebox", "n-1"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_view_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notebox", "view", "n-1"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::View {
            note_id,
            json,
            html,
        } => {
            assert_eq!(note_id, "n-1");
            assert!(!json);
            assert!(!html);
        }
        _ => panic!("Expected View command"),
    }
    assert_eq!(parsed.data_dir, None);
    assert_eq!(parsed.config, None);
}

#[test]
fn given_json_and_html_flags_when_parsing_view_then_fails() {
    let args = vec!["notebox", "view", "--json", "--html", "n-1"];

    let result = Args::try_parse_from(args);

    assert!(result.is_err());
}

#[test]
fn given_new_command_with_repeated_tags_when_parsing_then_collects_all() {
    // Arrange
    let args = vec![
        "notebox", "new", "Todo", "--content", "Buy milk", "-t", "errand", "-t", "home", "-f",
        "Work",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::New {
            title,
            content,
            tags,
            folder,
            description,
        } => {
            assert_eq!(title.as_deref(), Some("Todo"));
            assert_eq!(content.as_deref(), Some("Buy milk"));
            assert_eq!(tags, vec!["errand", "home"]);
            assert_eq!(folder.as_deref(), Some("Work"));
            assert_eq!(description, None);
        }
        _ => panic!("Expected New command"),
    }
}

#[test]
fn given_edit_without_tags_when_parsing_then_leaves_tags_untouched() {
    let args = vec!["notebox", "edit", "n-1", "--title", "Renamed"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Edit { title, tags, .. } => {
            assert_eq!(title.as_deref(), Some("Renamed"));
            assert_eq!(tags, None);
        }
        _ => panic!("Expected Edit command"),
    }
}

#[test]
fn given_global_data_dir_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec!["notebox", "delete", "-d", "/tmp/notes", "n-1"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { note_id } => assert_eq!(note_id, "n-1"),
        _ => panic!("Expected Delete command"),
    }
    assert_eq!(parsed.data_dir, Some(PathBuf::from("/tmp/notes")));
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    // Arrange
    let args = vec!["notebox", "-vv", "folders"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_list_filters_when_parsing_then_sets_all_fields() {
    let args = vec![
        "notebox",
        "list",
        "milk",
        "--folder",
        "Personal",
        "--tag",
        "errand",
        "--bookmarked",
        "--json",
    ];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::List {
            search,
            folder,
            tag,
            bookmarked,
            shared,
            json,
        } => {
            assert_eq!(search.as_deref(), Some("milk"));
            assert_eq!(folder.as_deref(), Some("Personal"));
            assert_eq!(tag.as_deref(), Some("errand"));
            assert!(bookmarked);
            assert!(!shared);
            assert!(json);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_upload_with_flags_when_parsing_then_succeeds() {
    let args = vec!["notebox", "upload", "-r", "--drive", "docs", "plan.txt"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Upload {
            paths,
            recursive,
            drive,
        } => {
            assert_eq!(paths, vec![PathBuf::from("docs"), PathBuf::from("plan.txt")]);
            assert!(recursive);
            assert!(drive);
        }
        _ => panic!("Expected Upload command"),
    }
}

#[test]
fn given_upload_without_paths_when_parsing_then_fails() {
    let result = Args::try_parse_from(vec!["notebox", "upload"]);

    assert!(result.is_err());
}

#[test]
fn given_download_all_when_parsing_then_needs_no_ids() {
    let args = vec!["notebox", "download", "--all", "--out", "exports"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Download {
            note_ids,
            all,
            out,
        } => {
            assert!(note_ids.is_empty());
            assert!(all);
            assert_eq!(out, PathBuf::from("exports"));
        }
        _ => panic!("Expected Download command"),
    }
}

#[test]
fn given_download_without_ids_or_all_when_parsing_then_fails() {
    let result = Args::try_parse_from(vec!["notebox", "download"]);

    assert!(result.is_err());
}

#[test]
fn given_settings_set_when_parsing_then_reads_typed_values() {
    let args = vec![
        "notebox",
        "settings",
        "set",
        "--font-size",
        "20",
        "--theme",
        "dark",
        "--show-word-count",
        "false",
    ];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Settings {
            action:
                SettingsAction::Set {
                    font_size,
                    theme,
                    show_word_count,
                    font_family,
                    ..
                },
        } => {
            assert_eq!(font_size, Some(20));
            assert_eq!(theme.as_deref(), Some("dark"));
            assert_eq!(show_word_count, Some(false));
            assert_eq!(font_family, None);
        }
        _ => panic!("Expected Settings Set command"),
    }
}

#[test]
fn given_drive_get_when_parsing_then_succeeds() {
    let parsed = Args::try_parse_from(vec!["notebox", "drive", "get", "1"]).unwrap();

    match parsed.command {
        Command::Drive {
            action: DriveAction::Get { file_id },
        } => assert_eq!(file_id, "1"),
        _ => panic!("Expected Drive Get command"),
    }
}

#[test]
fn given_init_config_with_force_when_parsing_then_sets_flag() {
    // Arrange
    let args = vec!["notebox", "--config", "/tmp/notebox.toml", "init-config", "--force"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(matches!(parsed.command, Command::InitConfig { force: true }));
    assert_eq!(parsed.config, Some(PathBuf::from("/tmp/notebox.toml")));
}
