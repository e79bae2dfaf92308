//! Selection list behaviour as seen through the session.

use crate::common::{ScriptedSurface, quiet_session};
use pdfmerger::selection::{RowRef, SelectionList};
use pdfmerger::session::Command;
use pdfmerger::Result;
use std::path::PathBuf;

fn names(list: &SelectionList) -> Vec<&str> {
    list.iter().map(|f| f.display_name.as_str()).collect()
}

#[test]
fn test_batches_append_in_pick_order() -> Result<()> {
    let mut surface = ScriptedSurface::default();
    surface.picks.extend([
        vec![PathBuf::from("/docs/a.pdf"), PathBuf::from("/docs/b.pdf")],
        vec![PathBuf::from("/other/c.pdf")],
    ]);
    let mut session = quiet_session();

    assert_eq!(session.add(&mut surface)?, 2);
    assert_eq!(session.add(&mut surface)?, 1);
    assert_eq!(session.add(&mut surface)?, 0, "cancelled picker adds nothing");

    assert_eq!(names(session.selection()), vec!["a.pdf", "b.pdf", "c.pdf"]);
    assert_eq!(surface.rows, vec![2, 3]);
    assert_eq!(surface.messages(), vec!["No PDF found"]);
    Ok(())
}

#[test]
fn test_row_removal_takes_exactly_the_chosen_rows() {
    let mut surface = ScriptedSurface::default();
    let mut session = quiet_session();
    session.add_paths(
        vec![
            PathBuf::from("/x/report.pdf"),
            PathBuf::from("/y/report.pdf"),
            PathBuf::from("/z/cover.pdf"),
        ],
        &mut surface,
    );

    let removed = session.remove(&[RowRef::Row(1)], &mut surface);

    assert_eq!(removed, 1);
    let paths = session.selection().paths();
    assert_eq!(
        paths,
        vec![PathBuf::from("/x/report.pdf"), PathBuf::from("/z/cover.pdf")]
    );
}

#[test]
fn test_name_removal_takes_every_duplicate() {
    let mut surface = ScriptedSurface::default();
    let mut session = quiet_session();
    session.add_paths(
        vec![
            PathBuf::from("/x/report.pdf"),
            PathBuf::from("/z/cover.pdf"),
            PathBuf::from("/y/report.pdf"),
        ],
        &mut surface,
    );

    let removed = session.remove(&[RowRef::name("report.pdf")], &mut surface);

    assert_eq!(removed, 2);
    assert_eq!(names(session.selection()), vec!["cover.pdf"]);
}

#[test]
fn test_reset_empties_and_allows_new_selection() -> Result<()> {
    let mut surface = ScriptedSurface::default();
    let mut session = quiet_session();
    session.add_paths(vec![PathBuf::from("/a.pdf"), PathBuf::from("/b.pdf")], &mut surface);

    session.dispatch(Command::Reset, &mut surface)?;
    assert!(session.selection().is_empty());

    session.add_paths(vec![PathBuf::from("/c.pdf")], &mut surface);
    assert_eq!(names(session.selection()), vec!["c.pdf"]);
    assert_eq!(surface.rows, vec![2, 0, 1]);
    Ok(())
}

#[test]
fn test_parsed_commands_drive_the_selection() -> Result<()> {
    let mut surface = ScriptedSurface::default();
    let mut session = quiet_session();
    session.add_paths(
        vec![
            PathBuf::from("/a.pdf"),
            PathBuf::from("/b.pdf"),
            PathBuf::from("/c.pdf"),
            PathBuf::from("/d.pdf"),
        ],
        &mut surface,
    );

    for line in ["move 4 1", "rm 2 3", "ls"] {
        session.dispatch(line.parse()?, &mut surface)?;
    }

    assert_eq!(names(session.selection()), vec!["d.pdf", "c.pdf"]);
    Ok(())
}

#[test]
fn test_out_of_range_move_leaves_selection_alone() {
    let mut surface = ScriptedSurface::default();
    let mut session = quiet_session();
    session.add_paths(vec![PathBuf::from("/a.pdf"), PathBuf::from("/b.pdf")], &mut surface);

    assert!(!session.move_entry(0, 5, &mut surface));

    assert_eq!(names(session.selection()), vec!["a.pdf", "b.pdf"]);
    assert!(surface.messages()[0].starts_with("Row out of range"));
}
