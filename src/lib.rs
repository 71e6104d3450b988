// src/lib.rs
pub mod api;
pub mod application;
pub mod cli;
pub mod domain;
pub mod ffi;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::Result;
use api::StoryBoard;
use application::{NoteDeleter, NoteFinder, NoteRepository};
use domain::{Note, SearchQuery};
use infrastructure::SeedFile;
use ports::TextPresenter;
use serde_json::json;
use tracing::{debug, info};

use crate::cli::args::{Args, Command};

/// Canned queries of the `demo` subcommand.
fn demo_queries() -> [SearchQuery; 5] {
    [
        SearchQuery::title("title1"),
        SearchQuery::text("text"),
        SearchQuery::text("hola"),
        SearchQuery::tag("t1"),
        SearchQuery::tag("t4"),
    ]
}

pub fn run(args: Args) -> Result<()> {
    let output = execute(&args)?;
    print!("{output}");
    Ok(())
}

/// Run the command described by `args` and return what should be printed.
pub fn execute(args: &Args) -> Result<String> {
    debug!(?args, "Starting storyboard with arguments");

    let seed = match &args.seed {
        Some(path) => SeedFile::load(path)?,
        None => {
            debug!("No seed file given, using demo notes");
            SeedFile::demo()
        }
    };
    let board = load_board(&seed)?;
    info!(notes = seed.notes.len(), "Board loaded");

    let output = match &args.command {
        Command::Title { title } => {
            let notes = find(board, SearchQuery::title(title.as_str()))?;
            render_matches(&notes, args.json)?
        }
        Command::Text { fragment } => {
            let notes = find(board, SearchQuery::text(fragment.as_str()))?;
            render_matches(&notes, args.json)?
        }
        Command::Tag { tag } => {
            let notes = find(board, SearchQuery::tag(tag.as_str()))?;
            render_matches(&notes, args.json)?
        }
        Command::Delete { title, text, tags } => {
            let mut deleter = NoteDeleter::new(board);
            let removed = deleter.delete_note(&Note::new(title.as_str(), text.as_str(), tags.clone()))?;
            let remaining = deleter.remaining()?;
            if args.json {
                let report = json!({ "deleted": removed, "remaining": remaining });
                format!("{}\n", serde_json::to_string_pretty(&report)?)
            } else {
                format!("Deleted {removed} note(s), {remaining} remaining\n")
            }
        }
        Command::Demo => run_demo(board, seed.notes.last(), args.json)?,
    };
    Ok(output)
}

/// Fill a fresh boundary-backed board with the seed notes.
pub fn load_board(seed: &SeedFile) -> Result<StoryBoard> {
    let mut board = StoryBoard::new()?;
    for note in &seed.notes {
        NoteRepository::add_note(&mut board, note)?;
    }
    Ok(board)
}

fn find(board: StoryBoard, query: SearchQuery) -> Result<Vec<Note>> {
    Ok(NoteFinder::new(board).find(&query)?)
}

fn render_matches(notes: &[Note], json: bool) -> Result<String> {
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(notes)?))
    } else {
        Ok(TextPresenter::new().render_all(notes))
    }
}

/// Walk the tags of `note` through the boundary tag callback.
fn note_tags(note: &Note) -> Result<Vec<String>> {
    let wrapped = api::Note::try_from(note)?;
    Ok(wrapped.tags()?)
}

fn run_demo(board: StoryBoard, tagged: Option<&Note>, json: bool) -> Result<String> {
    let finder = NoteFinder::new(board);
    let presenter = TextPresenter::new();
    let mut text = String::new();
    let mut reports = Vec::new();

    let tag_report = match tagged {
        Some(note) => {
            let tags = note_tags(note)?;
            text.push_str(&format!("QUERY NOTE {} FOR TAGS\n", note.title));
            text.push_str(&presenter.render_tags(&tags));
            text.push('\n');
            json!({ "title": note.title, "tags": tags })
        }
        None => serde_json::Value::Null,
    };

    for query in demo_queries() {
        let notes = finder.find(&query)?;
        if json {
            reports.push(json!({ "by": query.field(), "query": query.value(), "notes": notes }));
        } else {
            text.push_str(&format!(
                "QUERY A BOARD BY {} -> {}\n",
                query.field().to_uppercase(),
                query.value()
            ));
            text.push_str(&presenter.render_all(&notes));
            text.push('\n');
        }
    }

    if json {
        let report = json!({ "note_tags": tag_report, "queries": reports });
        Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
    } else {
        Ok(text)
    }
}
