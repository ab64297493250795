//! Integration tests for the prompt loop over scripted input

use bookcat::{prompt, CatalogError, PromptConfig, Session};
use std::io::Cursor;

const SCRIPT: &str = "\
:add: :id: 1 :title: The Left Hand of Darkness :author: Ursula K. Le Guin :publisher: Ace Books :date: 1969-03
:add: :id: 2 :title: Dune :author: Frank Herbert :publisher: Chilton Books :date: 1965-08-01
:add: :id: 3 :title: Dune Messiah :author: Frank Herbert :publisher: Putnam :date: 1969-10-15
:search: 1 :author: herbert :date: 1969
:delete: 1
:list:
";

fn run_script(script: &str, config: &PromptConfig) -> (String, prompt::PromptStats) {
    let mut session = Session::new(Vec::new());
    let stats = prompt::run(Cursor::new(script), &mut session, config).unwrap();
    (String::from_utf8(session.into_output()).unwrap(), stats)
}

fn quiet() -> PromptConfig {
    PromptConfig {
        prompt: String::new(),
        default_limit: None,
    }
}

#[test]
fn test_add_search_delete_list() {
    let (output, stats) = run_script(SCRIPT, &quiet());
    assert_eq!(stats.executed, 6);
    assert_eq!(stats.rejected, 0);

    let lines: Vec<_> = output.lines().collect();
    assert_eq!(
        lines,
        [
            "added: 1\tThe Left Hand of Darkness\t| Ursula K. Le Guin\t| Ace Books\t| 1969-03",
            "added: 2\tDune\t| Frank Herbert\t| Chilton Books\t| 1965-08-01",
            "added: 3\tDune Messiah\t| Frank Herbert\t| Putnam\t| 1969-10-15",
            "[2] 3\tDune Messiah\t| Frank Herbert\t| Putnam\t| 1969-10-15",
            "deleted: 1\tThe Left Hand of Darkness\t| Ursula K. Le Guin\t| Ace Books\t| 1969-03",
            "2\tDune\t| Frank Herbert\t| Chilton Books\t| 1965-08-01",
            "3\tDune Messiah\t| Frank Herbert\t| Putnam\t| 1969-10-15",
        ]
    );
}

#[test]
fn test_malformed_lines_are_reported_and_skipped() {
    let script = "\
:add: :id: 1 :title: Dune :author: Frank Herbert :publisher: Chilton :date: 1965
:add: :id: 1 :title: Dune :author: Frank Herbert :publisher: Chilton :date: 1965
:add: :id: 2 :title: Dune Messiah :author: Frank Herbert
:search:
:delete: 99
:list:
";
    let (output, stats) = run_script(script, &quiet());
    assert_eq!(stats.executed, 2);
    assert_eq!(stats.rejected, 4);

    let errors: Vec<_> = output.lines().filter(|l| l.starts_with("error: ")).collect();
    assert_eq!(
        errors,
        [
            "error: Duplicate id: a book with id 1 is already cataloged",
            "error: Invalid argument: book publisher is missing",
            "error: Invalid argument: :search: needs at least one book tag",
            "error: Not found: no book with id 99",
        ]
    );
    assert!(output.ends_with("1\tDune\t| Frank Herbert\t| Chilton\t| 1965\n"));
}

#[test]
fn test_default_limit_from_config() {
    let config = PromptConfig {
        prompt: String::new(),
        default_limit: Some(1),
    };
    let (output, _) = run_script(&format!("{SCRIPT}:title: dune\n"), &config);
    let hits: Vec<_> = output.lines().filter(|l| l.starts_with('[')).collect();
    assert_eq!(hits.len(), 2);
    assert!(hits[1].starts_with("[1] 2\tDune"));
}

#[test]
fn test_export_is_json() {
    let (output, _) = run_script(
        ":add: :id: 7 :title: Solaris :author: Stanisław Lem :publisher: MON :date: 1961\n:export:\n",
        &quiet(),
    );
    let json = output.split_once('\n').unwrap().1;
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value[0]["id"], "7");
    assert_eq!(value[0]["author"], "Stanisław Lem");
}

#[test]
fn test_strict_run_returns_first_error() {
    let mut session = Session::new(Vec::new());
    let err = prompt::run_strict(Cursor::new(":help:\n:frobnicate:\n:list:\n"), &mut session)
        .unwrap_err();
    assert!(matches!(err, CatalogError::UnknownTag(name) if name == "frobnicate"));
}
