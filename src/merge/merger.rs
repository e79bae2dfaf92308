use lopdf::{Document, Object, ObjectId};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{MergeError, PdfMergerError, Result};
use crate::io::{LoadedPdf, PdfReader, PdfWriter, WriteOptions};
use crate::output::OutputFormatter;
use crate::selection::SelectionList;

/// Minimum number of inputs a merge accepts.
pub const MIN_INPUTS: usize = 2;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_PAGE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Where a merge request currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MergeState {
    /// No merge is running.
    #[default]
    Idle,
    /// Checking input count and output path.
    Validating,
    /// Loading inputs and writing the output.
    Merging,
    /// The last merge wrote its output.
    Succeeded,
    /// The last merge failed.
    Failed,
}

/// Summary of a successful merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeReport {
    /// Inputs in the order they were merged.
    pub inputs: Vec<PathBuf>,
    /// Pages in the written document.
    pub total_pages: usize,
    /// Where the document was written.
    pub output: PathBuf,
    /// Size of the written file in bytes.
    pub file_size: u64,
}

/// Concatenates the documents of a [`SelectionList`] into one output file.
///
/// The executor is synchronous: `merge` blocks until every input is loaded
/// and the output is written, and the executor is `Idle` again when it
/// returns.
#[derive(Debug)]
pub struct MergeExecutor {
    reader: PdfReader,
    writer: PdfWriter,
    formatter: OutputFormatter,
    state: MergeState,
    last_outcome: Option<MergeState>,
}

impl Default for MergeExecutor {
    fn default() -> Self {
        Self::new(WriteOptions::default(), OutputFormatter::quiet())
    }
}

impl MergeExecutor {
    /// Create an executor writing with `options` and logging through `formatter`.
    pub fn new(options: WriteOptions, formatter: OutputFormatter) -> Self {
        Self {
            reader: PdfReader::new(),
            writer: PdfWriter::with_options(options),
            formatter,
            state: MergeState::Idle,
            last_outcome: None,
        }
    }

    /// Current state. Always `Idle` between calls to [`merge`](Self::merge).
    pub fn state(&self) -> MergeState {
        self.state
    }

    /// Terminal state of the most recent merge, if any ran.
    pub fn last_outcome(&self) -> Option<MergeState> {
        self.last_outcome
    }

    /// Merge the documents in `list`, in list order, into `output`.
    ///
    /// `output` of `None` or an empty path means the save dialog was
    /// cancelled. Nothing is written unless every input loads.
    ///
    /// # Errors
    ///
    /// - [`MergeError::InsufficientInputs`] with fewer than two entries
    /// - [`MergeError::OutputNotSelected`] without an output path
    /// - [`MergeError::MergeFailed`] when loading or writing fails
    pub fn merge(
        &mut self,
        list: &SelectionList,
        output: Option<&Path>,
    ) -> std::result::Result<MergeReport, MergeError> {
        self.transition(MergeState::Validating);
        let result = Self::validate(list, output).and_then(|output| {
            self.transition(MergeState::Merging);
            self.execute(&list.paths(), output)
                .map_err(|err| MergeError::merge_failed(err.to_string()))
        });

        let outcome = match result {
            Ok(_) => MergeState::Succeeded,
            Err(_) => MergeState::Failed,
        };
        self.transition(outcome);
        self.last_outcome = Some(outcome);
        self.transition(MergeState::Idle);

        result
    }

    fn validate<'a>(
        list: &SelectionList,
        output: Option<&'a Path>,
    ) -> std::result::Result<&'a Path, MergeError> {
        if list.len() < MIN_INPUTS {
            return Err(MergeError::InsufficientInputs { count: list.len() });
        }
        match output {
            Some(path) if !path.as_os_str().is_empty() => Ok(path),
            _ => Err(MergeError::OutputNotSelected),
        }
    }

    fn execute(&self, paths: &[PathBuf], output: &Path) -> Result<MergeReport> {
        let mut documents = Vec::with_capacity(paths.len());

        self.formatter.section("Loading input files...");
        for (idx, path) in paths.iter().enumerate() {
            let loaded = self.reader.load(path)?;
            self.formatter.info(&format!(
                "  [{}/{}] {} ({} pages)",
                idx + 1,
                paths.len(),
                path.display(),
                loaded.page_count
            ));
            self.print_pdf_info(&loaded);
            documents.push(loaded.document);
        }

        let mut merged = Self::concatenate(documents)?;
        let total_pages = merged.get_pages().len();
        self.formatter.info(&format!("  Total pages: {total_pages}"));

        self.formatter.info(&format!("\nWriting to: {}", output.display()));
        let stats = self.writer.save(&mut merged, output)?;
        self.formatter.debug(&format!(
            "Wrote {} bytes in {:.2}s",
            stats.file_size,
            stats.write_time.as_secs_f64()
        ));

        Ok(MergeReport {
            inputs: paths.to_vec(),
            total_pages,
            output: stats.output_path,
            file_size: stats.file_size,
        })
    }

    /// Fold `documents` into the first one, keeping page order.
    pub(crate) fn concatenate(documents: Vec<Document>) -> Result<Document> {
        let mut documents = documents.into_iter();
        let mut merged = documents
            .next()
            .ok_or_else(|| PdfMergerError::other("nothing to concatenate"))?;

        let mut max_id = merged.max_id;

        for mut doc in documents {
            // Avoid object id collisions by renumbering the incoming document
            doc.renumber_objects_with(max_id + 1);
            max_id = doc.max_id;

            let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();

            merged.objects.extend(doc.objects);
            merged.max_id = max_id;

            Self::append_pages_to_page_tree(&mut merged, page_ids)?;
        }

        // Catalogs and page tree nodes of later inputs are unreachable now.
        merged.prune_objects();
        merged.renumber_objects();
        Ok(merged)
    }

    /// Re-parents the given pages under the root Pages dictionary and
    /// appends them to its `Kids`.
    fn append_pages_to_page_tree(merged: &mut Document, page_ids: Vec<ObjectId>) -> Result<()> {
        let pages_id = merged.catalog()?.get(b"Pages")?.as_reference()?;

        for &page_id in &page_ids {
            let inherited = Self::inherited_attributes(merged, page_id)?;
            let page = merged.get_object_mut(page_id)?.as_dict_mut()?;
            for (key, value) in inherited {
                page.set(key, value);
            }
            page.set("Parent", Object::Reference(pages_id));
        }

        let pages_dict = merged.get_object_mut(pages_id)?.as_dict_mut()?;

        let page_count = page_ids.len() as i64;
        let kids = pages_dict.get_mut(b"Kids")?.as_array_mut()?;
        kids.extend(page_ids.into_iter().map(Object::Reference));

        let current_count = pages_dict.get(b"Count")?.as_i64()?;
        pages_dict.set("Count", Object::Integer(current_count + page_count));

        Ok(())
    }

    /// Inheritable attributes the page lacks, taken from its nearest
    /// ancestor that defines them.
    fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Result<Vec<(Vec<u8>, Object)>> {
        let page = doc.get_object(page_id)?.as_dict()?;
        let mut found: Vec<(Vec<u8>, Object)> = Vec::new();
        let mut visited = HashSet::new();
        let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

        while let Some(node_id) = parent {
            if !visited.insert(node_id) {
                break;
            }
            let Ok(node) = doc.get_object(node_id).and_then(Object::as_dict) else {
                break;
            };
            for key in INHERITABLE_PAGE_KEYS {
                if page.has(key) || found.iter().any(|(k, _)| k.as_slice() == key) {
                    continue;
                }
                if let Ok(value) = node.get(key) {
                    found.push((key.to_vec(), value.clone()));
                }
            }
            parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        }

        Ok(found)
    }

    fn print_pdf_info(&self, loaded: &LoadedPdf) {
        if !self.formatter.is_verbose() {
            return;
        }

        let doc = &loaded.document;
        self.formatter.detail("Version", &doc.version);

        if let Some((_, page_id)) = doc.get_pages().into_iter().next()
            && let Ok(page_dict) = doc.get_object(page_id).and_then(|o| o.as_dict())
            && let Ok(mediabox) = page_dict.get(b"MediaBox").and_then(|o| o.as_array())
            && mediabox.len() >= 4
            && let (Ok(w), Ok(h)) = (mediabox[2].as_float(), mediabox[3].as_float())
        {
            self.formatter.detail("Page size", &format!("{w:.1} x {h:.1} pts"));
        }

        self.formatter.detail("Objects", &doc.objects.len().to_string());
        self.formatter.detail(
            "Load time",
            &format!("{:.2}ms", loaded.load_time.as_secs_f64() * 1000.0),
        );
    }

    fn transition(&mut self, next: MergeState) {
        self.formatter.debug(&format!("merge state: {:?} -> {:?}", self.state, next));
        self.state = next;
    }
}
