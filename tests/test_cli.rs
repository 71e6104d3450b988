use clap::Parser;
use storyboard::cli::args::{Args, Command};

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["storyboard", "title1"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_title_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["storyboard", "title", "title1"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Title { title } => assert_eq!(title, "title1"),
        _ => panic!("Expected Title command"),
    }
    assert_eq!(parsed.seed, None);
    assert!(!parsed.json);
}

#[test]
fn given_delete_command_with_tags_when_parsing_then_collects_tags_in_order() {
    // Arrange
    let args = vec!["storyboard", "delete", "title1", "text", "t1", "t2", "t3"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { title, text, tags } => {
            assert_eq!(title, "title1");
            assert_eq!(text, "text");
            assert_eq!(tags, ["t1", "t2", "t3"]);
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_delete_command_without_tags_when_parsing_then_tags_empty() {
    let parsed = Args::try_parse_from(["storyboard", "delete", "a", "b"]).unwrap();

    match parsed.command {
        Command::Delete { tags, .. } => assert!(tags.is_empty()),
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_global_seed_flag_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec!["storyboard", "tag", "t1", "--seed", "/path/to/seed.toml", "--json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Tag { tag } => assert_eq!(tag, "t1"),
        _ => panic!("Expected Tag command"),
    }
    assert_eq!(parsed.seed, Some(std::path::PathBuf::from("/path/to/seed.toml")));
    assert!(parsed.json);
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    // Arrange
    let args = vec!["storyboard", "-vv", "demo"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 2);
    assert!(matches!(parsed.command, Command::Demo));
}

#[test]
fn given_empty_text_fragment_when_parsing_then_accepted() {
    let parsed = Args::try_parse_from(["storyboard", "text", ""]).unwrap();

    match parsed.command {
        Command::Text { fragment } => assert!(fragment.is_empty()),
        _ => panic!("Expected Text command"),
    }
}
