//! Page-level PDF assembly on top of lopdf.
//!
//! A [`DocumentAssembler`] builds one output document from pages taken out
//! of any number of source documents:
//! - Deep object copying with cycle detection
//! - Page ranges, with inherited page attributes made explicit
//! - A flat page tree in append order

mod error;

pub use error::ComposerError;

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use std::collections::HashMap;
use std::ops::Range;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Copies objects from one source document into the target, once each.
struct ObjectCopier<'a> {
    source_doc: &'a Document,
    target_doc: &'a mut Document,
    id_map: HashMap<ObjectId, ObjectId>,
}

impl<'a> ObjectCopier<'a> {
    fn new(source_doc: &'a Document, target_doc: &'a mut Document) -> Self {
        Self { source_doc, target_doc, id_map: HashMap::new() }
    }

    /// Reserves a target id for a source object that will be written later.
    fn reserve(&mut self, source_id: ObjectId) -> ObjectId {
        let new_id = self.target_doc.add_object(Object::Null);
        self.id_map.insert(source_id, new_id);
        new_id
    }

    /// Deep copies an object and everything it references.
    ///
    /// Page and page-tree nodes that were not reserved up front are not
    /// copied; references to them become null. This keeps a page range from
    /// dragging the rest of the source document along through `/Parent`
    /// links or link annotations.
    fn copy_object(&mut self, source_id: ObjectId) -> Result<Option<ObjectId>, lopdf::Error> {
        if let Some(target_id) = self.id_map.get(&source_id) {
            return Ok(Some(*target_id));
        }

        let obj = self.source_doc.get_object(source_id)?;
        if is_page_tree_node(obj) {
            return Ok(None);
        }
        let obj = obj.clone();

        // Map before recursing so reference cycles terminate.
        let new_id = self.reserve(source_id);
        let new_obj = self.remap_references(obj)?;
        self.write(new_id, new_obj)?;
        Ok(Some(new_id))
    }

    fn write(&mut self, id: ObjectId, obj: Object) -> Result<(), lopdf::Error> {
        match self.target_doc.objects.get_mut(&id) {
            Some(slot) => {
                *slot = obj;
                Ok(())
            }
            None => Err(lopdf::Error::ObjectNotFound(id)),
        }
    }

    fn remap_references(&mut self, obj: Object) -> Result<Object, lopdf::Error> {
        match obj {
            Object::Reference(id) => Ok(match self.copy_object(id)? {
                Some(new_id) => Object::Reference(new_id),
                None => Object::Null,
            }),
            Object::Array(arr) => {
                let new_arr = arr
                    .into_iter()
                    .map(|o| self.remap_references(o))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Object::Array(new_arr))
            }
            Object::Dictionary(dict) => Ok(Object::Dictionary(self.remap_dictionary(dict)?)),
            Object::Stream(mut stream) => {
                stream.dict = self.remap_dictionary(stream.dict)?;
                Ok(Object::Stream(stream))
            }
            _ => Ok(obj),
        }
    }

    fn remap_dictionary(&mut self, mut dict: Dictionary) -> Result<Dictionary, lopdf::Error> {
        for (_, value) in dict.iter_mut() {
            let taken = std::mem::replace(value, Object::Null);
            *value = self.remap_references(taken)?;
        }
        Ok(dict)
    }
}

fn is_page_tree_node(obj: &Object) -> bool {
    let dict = match obj {
        Object::Dictionary(dict) => dict,
        _ => return false,
    };
    matches!(
        dict.get(b"Type").and_then(Object::as_name),
        Ok(b"Page") | Ok(b"Pages")
    )
}

/// Returns a copy of a page dictionary with inherited attributes resolved
/// from its ancestors and `/Parent` removed.
fn flatten_page(source: &Document, page_id: ObjectId) -> Result<Dictionary, ComposerError> {
    let mut page = source.get_dictionary(page_id)?.clone();

    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut depth = 0;
    while let Some(node_id) = parent {
        depth += 1;
        if depth > 64 {
            return Err(ComposerError::Malformed(format!(
                "page {:?} has a page tree deeper than 64 levels",
                page_id
            )));
        }
        let node = source.get_dictionary(node_id)?;
        for key in INHERITABLE {
            if !page.has(key) {
                if let Ok(value) = node.get(key) {
                    page.set(key, value.clone());
                }
            }
        }
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    page.remove(b"Parent");
    Ok(page)
}

/// Builds one document out of pages copied from other documents.
///
/// Pages land in the order they are appended. Every page of the result is a
/// direct child of a single page-tree root.
pub struct DocumentAssembler {
    document: Document,
    pages_id: ObjectId,
    kids: Vec<ObjectId>,
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAssembler {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        Self { document, pages_id, kids: Vec::new() }
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Appends every page of `source`. Returns the number of pages added.
    pub fn append_document(&mut self, source: &Document) -> Result<usize, ComposerError> {
        let total = source.get_pages().len();
        self.append_page_range(source, 0..total)
    }

    /// Appends the zero-based, end-exclusive `range` of `source` pages.
    ///
    /// Shared objects such as fonts and images are copied once per call.
    /// Returns the number of pages added.
    pub fn append_page_range(
        &mut self,
        source: &Document,
        range: Range<usize>,
    ) -> Result<usize, ComposerError> {
        let pages = source.get_pages();
        let available = pages.len();
        if range.start > range.end || range.end > available {
            return Err(ComposerError::InvalidRange {
                start: range.start,
                end: range.end,
                available,
            });
        }

        // get_pages is keyed by 1-based page number, already in order.
        let selected: Vec<ObjectId> = pages
            .values()
            .skip(range.start)
            .take(range.len())
            .copied()
            .collect();

        let mut copier = ObjectCopier::new(source, &mut self.document);
        let reserved: Vec<(ObjectId, ObjectId)> = selected
            .iter()
            .map(|&page_id| (page_id, copier.reserve(page_id)))
            .collect();

        for &(source_id, target_id) in &reserved {
            let page = flatten_page(source, source_id)?;
            let mut page = copier.remap_dictionary(page)?;
            page.set("Parent", Object::Reference(self.pages_id));
            copier.write(target_id, Object::Dictionary(page))?;
        }

        self.kids.extend(reserved.iter().map(|&(_, target_id)| target_id));
        log::debug!(
            "Appended pages {}..{} of {}; assembled document now has {} pages",
            range.start,
            range.end,
            available,
            self.kids.len()
        );
        Ok(reserved.len())
    }

    /// Writes the page tree and catalog and returns the finished document.
    pub fn finish(mut self) -> Document {
        let kids: Vec<Object> = self.kids.iter().map(|&id| Object::Reference(id)).collect();
        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => self.kids.len() as i64,
            }),
        );
        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);
        self.document
    }

    /// Finishes the document and serializes it.
    pub fn into_bytes(self) -> Result<Vec<u8>, ComposerError> {
        let mut document = self.finish();
        let mut buffer = Vec::new();
        document.save_to(&mut buffer)?;
        Ok(buffer)
    }
}
