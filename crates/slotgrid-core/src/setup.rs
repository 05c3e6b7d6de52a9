//! Page-level bootstrap: one editor per marked field.

use crate::config::EditorConfig;
use crate::controller::EditorController;
use crate::grid::{DataFieldBox, GridRendererBox, EDITOR_FIELD_CLASS};

/// Create an independent editor for every field carrying the editor class.
///
/// `renderer_for` is called once per selected field with the field's name and
/// must return a fresh grid. Fields without the class are left untouched.
pub fn create_editors<F>(
    config: &EditorConfig,
    fields: Vec<DataFieldBox>,
    mut renderer_for: F,
) -> Vec<EditorController>
where
    F: FnMut(&str) -> GridRendererBox,
{
    let editors: Vec<EditorController> = fields
        .into_iter()
        .filter(|field| field.has_class(EDITOR_FIELD_CLASS))
        .map(|field| {
            let renderer = renderer_for(&field.name());
            EditorController::new(config, field, renderer)
        })
        .collect();

    log::info!("Created {} availability editor(s)", editors.len());
    editors
}
