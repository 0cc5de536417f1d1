//! Navigation state machine tests
//!
//! Exercises the three-view machine against the built-in catalog: initial
//! state, descending into lists and details, and ascending back out.

use hexa::catalog::{Catalog, Difficulty, ScriptId};
use hexa::ui::navigator::{Navigator, Page};

#[test]
fn test_starts_on_main() {
    let nav = Navigator::new();
    assert_eq!(nav.page(), Page::Main);
    assert_eq!(nav.active_category(), "");
    assert!(nav.selected().is_none());
}

#[test]
fn test_category_round_trip() {
    let mut nav = Navigator::new();

    nav.select_category("gtps");
    assert_eq!(nav.page(), Page::List);
    assert_eq!(nav.active_category(), "gtps");

    nav.back();
    assert_eq!(nav.page(), Page::Main);
    assert_eq!(nav.active_category(), "");
}

#[test]
fn test_script_round_trip() {
    let catalog = Catalog::builtin();
    let mut nav = Navigator::new();

    nav.select_category("gtps");
    let first = ScriptId {
        category: "gtps".to_string(),
        index: 0,
    };
    nav.select_script(first.clone());
    assert_eq!(nav.page(), Page::Detail);

    let script = catalog.script(&first).expect("first gtps script");
    assert_eq!(script.name, "Auto Farm GTPS");

    nav.back();
    assert_eq!(nav.page(), Page::List);
    assert_eq!(nav.active_category(), "gtps");
    assert!(nav.selected().is_none());
}

#[test]
fn test_unknown_category_renders_empty() {
    let catalog = Catalog::builtin();
    let mut nav = Navigator::new();

    // Permissive contract: any string is accepted, unknown keys just show
    // an empty list.
    nav.select_category("ufo");
    assert_eq!(nav.page(), Page::List);
    assert!(catalog.scripts_in(nav.active_category()).is_empty());
}

#[test]
fn test_stale_selection_is_absence() {
    let catalog = Catalog::builtin();
    let mut nav = Navigator::new();

    nav.select_category("gtps");
    nav.select_script(ScriptId {
        category: "gtps".to_string(),
        index: 42,
    });
    assert_eq!(nav.page(), Page::Detail);

    // The id does not resolve; the detail view degrades to empty.
    let selected = nav.selected().expect("id is held");
    assert!(catalog.script(selected).is_none());
}

#[test]
fn test_end_to_end_rgt_scenario() {
    let catalog = Catalog::builtin();
    let mut nav = Navigator::new();

    nav.select_category("rgt");
    assert_eq!(nav.page(), Page::List);

    let scripts = catalog.scripts_in("rgt");
    let names: Vec<&str> = scripts.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Speed Enhancement", "Auto Complete System"]);

    nav.select_script(ScriptId {
        category: "rgt".to_string(),
        index: 0,
    });
    assert_eq!(nav.page(), Page::Detail);

    let script = catalog
        .script(nav.selected().expect("script selected"))
        .expect("script resolves");
    assert_eq!(script.name, "Speed Enhancement");
    assert_eq!(script.difficulty, Difficulty::Advanced);
    assert_eq!(script.tags, vec!["speed", "anti-detection", "gradual"]);

    nav.back();
    assert_eq!(nav.page(), Page::List);
    assert_eq!(nav.active_category(), "rgt");
}
