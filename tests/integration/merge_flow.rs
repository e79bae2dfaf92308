//! End-to-end merges through the session with real PDF files.

use crate::common::{
    ScriptedSurface, create_locked_pdf, create_test_pdf, dir_len, page_widths, quiet_session,
};
use lopdf::Document;
use pdfmerger::merge::MergeState;
use pdfmerger::output::MessageLevel;
use pdfmerger::{MergeError, PdfMergerError, Result};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_two_inputs_concatenate_in_selection_order() -> Result<()> {
    let dir = tempdir()?;
    let first = dir.path().join("first.pdf");
    let second = dir.path().join("second.pdf");
    let output = dir.path().join("merged.pdf");
    create_test_pdf(&first, 2, 100.0)?;
    create_test_pdf(&second, 1, 300.0)?;

    let mut surface = ScriptedSurface::saving_to(&output);
    let mut session = quiet_session();
    session.add_paths(vec![first, second], &mut surface);

    let report = session.merge(&mut surface, None)?;

    assert_eq!(report.total_pages, 3);
    assert_eq!(page_widths(&output), vec![100.0, 100.0, 300.0]);
    assert_eq!(surface.notices.last().map(|n| n.level), Some(MessageLevel::Success));
    assert_eq!(session.merge_state(), MergeState::Idle);
    assert_eq!(session.selection().len(), 2, "selection survives a merge");
    Ok(())
}

#[test]
fn test_same_file_twice_is_merged_twice() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("repeat.pdf");
    let output = dir.path().join("twice.pdf");
    create_test_pdf(&input, 3, 150.0)?;

    let mut surface = ScriptedSurface::default();
    let mut session = quiet_session();
    session.add_paths(vec![input.clone(), input], &mut surface);

    session.merge(&mut surface, Some(output.clone()))?;

    assert_eq!(page_widths(&output).len(), 6);
    Ok(())
}

#[test]
fn test_reordered_selection_changes_page_order() -> Result<()> {
    let dir = tempdir()?;
    let paths: Vec<PathBuf> = [100.0, 200.0, 300.0]
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let path = dir.path().join(format!("doc_{i}.pdf"));
            create_test_pdf(&path, 1, *width).map(|_| path)
        })
        .collect::<Result<_>>()?;
    let output = dir.path().join("out.pdf");

    let mut surface = ScriptedSurface::saving_to(&output);
    let mut session = quiet_session();
    session.add_paths(paths, &mut surface);
    assert!(session.move_entry(2, 0, &mut surface));

    session.merge(&mut surface, None)?;

    assert_eq!(page_widths(&output), vec![300.0, 100.0, 200.0]);
    Ok(())
}

#[test]
fn test_too_few_inputs_write_nothing() -> Result<()> {
    let dir = tempdir()?;
    let only = dir.path().join("only.pdf");
    let output = dir.path().join("merged.pdf");
    create_test_pdf(&only, 1, 100.0)?;

    let mut surface = ScriptedSurface::saving_to(&output);
    let mut session = quiet_session();

    let empty = session.merge(&mut surface, None);
    session.add_paths(vec![only], &mut surface);
    let single = session.merge(&mut surface, None);

    assert!(matches!(
        empty,
        Err(PdfMergerError::Merge(MergeError::InsufficientInputs { count: 0 }))
    ));
    assert!(matches!(
        single,
        Err(PdfMergerError::Merge(MergeError::InsufficientInputs { count: 1 }))
    ));
    assert!(!output.exists());
    assert_eq!(surface.saves.len(), 1, "save dialog must not open");
    Ok(())
}

#[test]
fn test_cancelled_save_writes_nothing() -> Result<()> {
    let dir = tempdir()?;
    let a = dir.path().join("a.pdf");
    let b = dir.path().join("b.pdf");
    create_test_pdf(&a, 1, 100.0)?;
    create_test_pdf(&b, 1, 200.0)?;

    let mut surface = ScriptedSurface::default();
    let mut session = quiet_session();
    session.add_paths(vec![a, b], &mut surface);

    let result = session.merge(&mut surface, None);

    assert!(matches!(
        result,
        Err(PdfMergerError::Merge(MergeError::OutputNotSelected))
    ));
    assert_eq!(dir_len(dir.path()), 2);
    assert!(surface.messages().iter().any(|m| m.contains("cancelled")));
    Ok(())
}

#[test]
fn test_invalid_input_fails_without_touching_output() -> Result<()> {
    let dir = tempdir()?;
    let good = dir.path().join("good.pdf");
    let bad = dir.path().join("bad.pdf");
    let output = dir.path().join("merged.pdf");
    create_test_pdf(&good, 1, 100.0)?;
    std::fs::write(&bad, b"not a pdf at all")?;
    std::fs::write(&output, b"previous contents")?;

    let mut surface = ScriptedSurface::saving_to(&output);
    let mut session = quiet_session();
    session.add_paths(vec![good, bad], &mut surface);

    let result = session.merge(&mut surface, None);

    match result {
        Err(PdfMergerError::Merge(MergeError::MergeFailed { reason })) => {
            assert!(reason.contains("bad.pdf"), "reason should name the input: {reason}");
        }
        other => panic!("expected MergeFailed, got {other:?}"),
    }
    assert_eq!(std::fs::read(&output)?, b"previous contents");
    assert_eq!(dir_len(dir.path()), 3, "no temporary files left behind");
    assert_eq!(session.last_merge_outcome(), Some(MergeState::Failed));
    assert_eq!(session.merge_state(), MergeState::Idle);
    Ok(())
}

#[test]
fn test_missing_input_fails() -> Result<()> {
    let dir = tempdir()?;
    let good = dir.path().join("good.pdf");
    let output = dir.path().join("merged.pdf");
    create_test_pdf(&good, 1, 100.0)?;

    let mut surface = ScriptedSurface::default();
    let mut session = quiet_session();
    session.add_paths(vec![good, dir.path().join("gone.pdf")], &mut surface);

    let result = session.merge(&mut surface, Some(output.clone()));

    assert!(matches!(
        result,
        Err(PdfMergerError::Merge(MergeError::MergeFailed { .. }))
    ));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_failed_merge_can_be_retried() -> Result<()> {
    let dir = tempdir()?;
    let a = dir.path().join("a.pdf");
    let b = dir.path().join("b.pdf");
    let output = dir.path().join("merged.pdf");
    create_test_pdf(&a, 1, 100.0)?;
    create_test_pdf(&b, 2, 200.0)?;

    let mut surface = ScriptedSurface::default();
    surface.saves.extend([None, Some(output.clone())]);
    let mut session = quiet_session();
    session.add_paths(vec![a, b], &mut surface);

    assert!(session.merge(&mut surface, None).is_err());
    let report = session.merge(&mut surface, None)?;

    assert_eq!(report.total_pages, 3);
    assert_eq!(session.last_merge_outcome(), Some(MergeState::Succeeded));
    Ok(())
}

#[test]
fn test_merged_pages_hang_off_a_single_page_tree() -> Result<()> {
    let dir = tempdir()?;
    let a = dir.path().join("a.pdf");
    let b = dir.path().join("b.pdf");
    let output = dir.path().join("merged.pdf");
    create_test_pdf(&a, 1, 100.0)?;
    create_test_pdf(&b, 2, 200.0)?;

    let mut surface = ScriptedSurface::default();
    let mut session = quiet_session();
    session.add_paths(vec![a, b], &mut surface);
    session.merge(&mut surface, Some(output.clone()))?;

    let doc = Document::load(&output)?;
    let root = doc.catalog()?.get(b"Pages")?.as_reference()?;
    for (number, id) in doc.get_pages() {
        let parent = doc.get_object(id)?.as_dict()?.get(b"Parent")?.as_reference()?;
        assert_eq!(parent, root, "page {number} hangs off a stale node");
    }
    let catalogs = doc
        .objects
        .values()
        .filter(|o| o.type_name().is_ok_and(|t| t == b"Catalog"))
        .count();
    assert_eq!(catalogs, 1);
    Ok(())
}

#[test]
fn test_password_protected_input_is_reported_as_encrypted() -> Result<()> {
    let dir = tempdir()?;
    let open = dir.path().join("open.pdf");
    let locked = dir.path().join("locked.pdf");
    let output = dir.path().join("merged.pdf");
    create_test_pdf(&open, 1, 100.0)?;
    create_locked_pdf(&locked, 2, "secret")?;

    let mut surface = ScriptedSurface::default();
    let mut session = quiet_session();
    session.add_paths(vec![open, locked], &mut surface);

    let result = session.merge(&mut surface, Some(output.clone()));

    match result {
        Err(PdfMergerError::Merge(MergeError::MergeFailed { reason })) => {
            assert!(reason.contains("encrypted"), "unexpected reason: {reason}");
            assert!(reason.contains("locked.pdf"));
        }
        other => panic!("expected MergeFailed, got {other:?}"),
    }
    assert!(!output.exists());
    Ok(())
}
