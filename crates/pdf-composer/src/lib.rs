//! Page import for template backgrounds.
//!
//! A blank form supplied as a PDF is reused by turning one of its pages into
//! a Form XObject inside the document being generated:
//! - Deep object copying with cycle detection
//! - Resolution of inherited page attributes (`Resources`, `MediaBox`)

mod error;

pub use error::ComposerError;

use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::collections::HashMap;

/// Page tree depth beyond which attribute inheritance is assumed to be cyclic.
const MAX_TREE_DEPTH: usize = 64;

/// A page copied into a target document as a Form XObject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportedForm {
    pub id: ObjectId,
    /// `[llx, lly, urx, ury]` of the source page.
    pub bbox: [f32; 4],
}

impl ImportedForm {
    pub fn width(&self) -> f32 {
        self.bbox[2] - self.bbox[0]
    }

    pub fn height(&self) -> f32 {
        self.bbox[3] - self.bbox[1]
    }
}

/// A helper struct to manage the state of copying objects between documents.
struct ObjectCopier<'a> {
    source_doc: &'a Document,
    target_doc: &'a mut Document,
    id_map: HashMap<ObjectId, ObjectId>,
}

impl<'a> ObjectCopier<'a> {
    fn new(source_doc: &'a Document, target_doc: &'a mut Document) -> Self {
        Self {
            source_doc,
            target_doc,
            id_map: HashMap::new(),
        }
    }

    /// Deep copies an object and everything it references into the target.
    ///
    /// Each source object is copied once; the id is reserved before recursing
    /// so reference cycles terminate.
    fn copy_object(&mut self, source_id: ObjectId) -> Result<ObjectId, lopdf::Error> {
        if let Some(target_id) = self.id_map.get(&source_id) {
            return Ok(*target_id);
        }

        let new_id = self.target_doc.add_object(Object::Null);
        self.id_map.insert(source_id, new_id);

        let obj = self.source_doc.get_object(source_id)?.clone();
        let new_obj = self.remap_references(obj)?;

        match self.target_doc.objects.get_mut(&new_id) {
            Some(target_obj) => *target_obj = new_obj,
            None => return Err(lopdf::Error::ObjectNotFound(new_id)),
        }
        Ok(new_id)
    }

    fn remap_references(&mut self, obj: Object) -> Result<Object, lopdf::Error> {
        match obj {
            Object::Reference(id) => Ok(Object::Reference(self.copy_object(id)?)),
            Object::Array(arr) => {
                let new_arr = arr
                    .into_iter()
                    .map(|o| self.remap_references(o))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Object::Array(new_arr))
            }
            Object::Dictionary(mut dict) => {
                for (_, value) in dict.iter_mut() {
                    *value = self.remap_references(value.clone())?;
                }
                Ok(Object::Dictionary(dict))
            }
            Object::Stream(mut stream) => {
                for (_, value) in stream.dict.iter_mut() {
                    *value = self.remap_references(value.clone())?;
                }
                Ok(Object::Stream(stream))
            }
            _ => Ok(obj),
        }
    }
}

/// Looks up a page attribute, walking up the page tree if the page inherits it.
fn inherited_attribute(
    doc: &Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<Object>, ComposerError> {
    let mut current = Some(page_id);
    let mut depth = 0;
    while let Some(id) = current {
        let dict = doc.get_dictionary(id)?;
        if let Ok(value) = dict.get(key) {
            return Ok(Some(value.clone()));
        }
        depth += 1;
        if depth > MAX_TREE_DEPTH {
            return Err(ComposerError::Other(format!(
                "Page tree deeper than {} levels while resolving /{}",
                MAX_TREE_DEPTH,
                String::from_utf8_lossy(key)
            )));
        }
        current = dict.get(b"Parent").and_then(Object::as_reference).ok();
    }
    Ok(None)
}

fn resolve<'d>(doc: &'d Document, obj: &'d Object) -> Result<&'d Object, lopdf::Error> {
    match obj {
        Object::Reference(id) => doc.get_object(*id),
        other => Ok(other),
    }
}

fn media_box(doc: &Document, page_id: ObjectId) -> Result<[f32; 4], ComposerError> {
    let Some(raw) = inherited_attribute(doc, page_id, b"MediaBox")? else {
        return Err(ComposerError::Other(format!(
            "Page {:?} has no /MediaBox",
            page_id
        )));
    };
    let values = resolve(doc, &raw)?.as_array()?;
    if values.len() != 4 {
        return Err(ComposerError::Other(format!(
            "/MediaBox must have 4 numbers, found {}",
            values.len()
        )));
    }
    let mut bbox = [0.0f32; 4];
    for (slot, value) in bbox.iter_mut().zip(values) {
        *slot = resolve(doc, value)?.as_float()?;
    }
    Ok(bbox)
}

/// Copies page `page_number` (1-based) of `source` into `target` as a Form XObject.
///
/// The page's content streams are concatenated and its resources, inherited
/// or not, are deep-copied so the form is self-contained.
pub fn import_page_as_form(
    target: &mut Document,
    source: &Document,
    page_number: u32,
) -> Result<ImportedForm, ComposerError> {
    let page_id = *source
        .get_pages()
        .get(&page_number)
        .ok_or(ComposerError::PageNotFound(page_number))?;

    let bbox = media_box(source, page_id)?;
    let content = source.get_page_content(page_id)?;

    let mut copier = ObjectCopier::new(source, target);
    let resources = match inherited_attribute(source, page_id, b"Resources")? {
        Some(raw) => copier.remap_references(raw)?,
        None => Object::Dictionary(Dictionary::new()),
    };
    let copied = copier.id_map.len();

    let form = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "FormType" => 1i64,
            "BBox" => bbox.iter().map(|v| Object::Real(*v)).collect::<Vec<Object>>(),
            "Resources" => resources,
        },
        content,
    );
    let id = target.add_object(form);
    log::debug!(
        "Imported page {} as form {:?} ({} dependent objects)",
        page_number,
        id,
        copied
    );

    Ok(ImportedForm { id, bbox })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, StringFormat, dictionary};

    /// A blank form with `num_pages` pages, each printing "<prefix> N".
    ///
    /// With `inherit` the resources and media box sit on the page tree root.
    fn create_blank_form(num_pages: u32, text_prefix: &str, inherit: bool) -> Document {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut page_ids = vec![];
        for i in 1..=num_pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![100.into(), 700.into()]),
                    Operation::new(
                        "Tj",
                        vec![Object::String(
                            format!("{} {}", text_prefix, i).into_bytes(),
                            StringFormat::Literal,
                        )],
                    ),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let mut page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            };
            if !inherit {
                page.set("MediaBox", vec![0.into(), 0.into(), 595.into(), 842.into()]);
                page.set("Resources", resources_id);
            }
            page_ids.push(doc.add_object(page).into());
        }

        let mut pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => num_pages as i64,
        };
        if inherit {
            pages_dict.set("MediaBox", vec![0.into(), 0.into(), 595.into(), 842.into()]);
            pages_dict.set("Resources", resources_id);
        }
        doc.objects.insert(pages_id, pages_dict.into());

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    fn form_stream(doc: &Document, id: ObjectId) -> &Stream {
        doc.get_object(id).unwrap().as_stream().unwrap()
    }

    #[test]
    fn test_import_page_as_form() {
        let source = create_blank_form(2, "Blank", false);
        let mut target = Document::with_version("1.7");

        let form = import_page_as_form(&mut target, &source, 2).unwrap();
        assert_eq!(form.bbox, [0.0, 0.0, 595.0, 842.0]);
        assert_eq!(form.width(), 595.0);
        assert_eq!(form.height(), 842.0);

        let stream = form_stream(&target, form.id);
        assert_eq!(stream.dict.get(b"Subtype").unwrap().as_name().unwrap(), b"Form");
        assert!(String::from_utf8_lossy(&stream.content).contains("Blank 2"));
    }

    #[test]
    fn test_resources_are_deep_copied() {
        let source = create_blank_form(1, "Blank", false);
        let mut target = Document::with_version("1.7");

        let form = import_page_as_form(&mut target, &source, 1).unwrap();
        let stream = form_stream(&target, form.id);
        let resources_id = stream.dict.get(b"Resources").unwrap().as_reference().unwrap();
        let resources = target.get_dictionary(resources_id).unwrap();
        let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();
        let font_id = fonts.get(b"F1").unwrap().as_reference().unwrap();
        let font = target.get_dictionary(font_id).unwrap();
        assert_eq!(font.get(b"BaseFont").unwrap().as_name().unwrap(), b"Helvetica");
    }

    #[test]
    fn test_inherited_attributes() {
        let source = create_blank_form(1, "Inherited", true);
        let mut target = Document::with_version("1.7");

        let form = import_page_as_form(&mut target, &source, 1).unwrap();
        assert_eq!(form.bbox, [0.0, 0.0, 595.0, 842.0]);
        let stream = form_stream(&target, form.id);
        assert!(stream.dict.get(b"Resources").is_ok());
    }

    #[test]
    fn test_missing_page() {
        let source = create_blank_form(1, "Blank", false);
        let mut target = Document::with_version("1.7");
        assert!(matches!(
            import_page_as_form(&mut target, &source, 3),
            Err(ComposerError::PageNotFound(3))
        ));
    }

    #[test]
    fn test_shared_objects_copied_once() {
        let source = create_blank_form(1, "Blank", false);
        let mut target = Document::with_version("1.7");
        let mut copier = ObjectCopier::new(&source, &mut target);

        // (2, 0) is the font dictionary, which references nothing.
        let font_ref = Object::Reference((2, 0));
        let twice = Object::Array(vec![font_ref.clone(), font_ref]);
        let copied = copier.remap_references(twice).unwrap();
        let ids: Vec<ObjectId> = copied
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o.as_reference().unwrap())
            .collect();
        assert_eq!(ids[0], ids[1]);
        assert_eq!(copier.id_map.len(), 1);
    }
}
