//! Shared helpers for the integration tests.
//!
//! PDFs are generated on the fly with `lopdf`; every page of a generated
//! document carries the same MediaBox width, so a merged document's page
//! widths reveal which input each page came from.

#![allow(dead_code)]

use lopdf::{
    Document, EncryptionState, EncryptionVersion, Object, Permissions, Stream, StringFormat,
    dictionary,
};
use pdfmerger::Config;
use pdfmerger::Result;
use pdfmerger::selection::SelectedFile;
use pdfmerger::session::Session;
use pdfmerger::surface::{InteractionSurface, Notice};
use std::collections::VecDeque;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

fn build_test_pdf(pages: u32, width: f32) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids = Vec::new();

    for _ in 0..pages {
        let content_id = doc.add_object(Stream::new(dictionary! {}, vec![]));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), Object::Real(width), Object::Real(842.0)],
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn save(mut doc: Document, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    doc.save_to(&mut file)?;
    file.flush()?;
    Ok(())
}

/// Write a minimal PDF with `pages` empty pages `width` points wide.
pub fn create_test_pdf(path: &Path, pages: u32, width: f32) -> Result<()> {
    save(build_test_pdf(pages, width), path)
}

/// Write a PDF that only opens with `user_password`.
pub fn create_locked_pdf(path: &Path, pages: u32, user_password: &str) -> Result<()> {
    let mut doc = build_test_pdf(pages, 595.0);
    let file_id = b"pdfmerger-locked".to_vec();
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(file_id.clone(), StringFormat::Literal),
            Object::String(file_id, StringFormat::Literal),
        ]),
    );

    let state = EncryptionState::try_from(EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    })?;
    doc.encrypt(&state)?;
    save(doc, path)
}

/// MediaBox widths of every page of the PDF at `path`, in page order.
pub fn page_widths(path: &Path) -> Vec<f32> {
    let doc = Document::load(path).expect("output should be a readable PDF");
    doc.get_pages()
        .into_values()
        .map(|id| {
            let page = doc
                .get_object(id)
                .and_then(|o| o.as_dict())
                .expect("page dictionary");
            let mediabox = page
                .get(b"MediaBox")
                .and_then(|o| o.as_array())
                .expect("page MediaBox");
            mediabox[2].as_float().expect("numeric width")
        })
        .collect()
}

/// Number of entries in a directory.
pub fn dir_len(dir: &Path) -> usize {
    std::fs::read_dir(dir).expect("readable dir").count()
}

/// Session that prints nothing but warnings and errors.
pub fn quiet_session() -> Session {
    Session::new(&Config {
        quiet: true,
        ..Default::default()
    })
}

/// Interaction surface driven by queued answers.
#[derive(Debug, Default)]
pub struct ScriptedSurface {
    /// Answers for successive file picker calls; exhausted means cancelled.
    pub picks: VecDeque<Vec<PathBuf>>,
    /// Answers for successive save dialogs; exhausted means cancelled.
    pub saves: VecDeque<Option<PathBuf>>,
    /// Every notice received.
    pub notices: Vec<Notice>,
    /// Row count of every selection shown.
    pub rows: Vec<usize>,
}

impl ScriptedSurface {
    /// Surface whose next save dialog returns `path`.
    pub fn saving_to(path: impl Into<PathBuf>) -> Self {
        Self {
            saves: VecDeque::from([Some(path.into())]),
            ..Default::default()
        }
    }

    /// Messages of the notices received so far.
    pub fn messages(&self) -> Vec<&str> {
        self.notices.iter().map(|n| n.message.as_str()).collect()
    }
}

impl InteractionSurface for ScriptedSurface {
    fn pick_files(&mut self) -> Result<Vec<PathBuf>> {
        Ok(self.picks.pop_front().unwrap_or_default())
    }

    fn pick_save_path(&mut self) -> Result<Option<PathBuf>> {
        Ok(self.saves.pop_front().flatten())
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn show_selection(&mut self, files: &[SelectedFile]) {
        self.rows.push(files.len());
    }
}
