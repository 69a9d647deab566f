//! Template manager implementation using minijinja.

use crate::{
    engine::TemplateEngine,
    error::{Result, TemplateError},
};
use serde::Serialize;
use std::path::Path;

/// Built-in document skeletons shipped with the crate.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "requirements.j2",
        include_str!("../templates/requirements.j2"),
    ),
    ("design.j2", include_str!("../templates/design.j2")),
    ("tasks.j2", include_str!("../templates/tasks.j2")),
];

/// Manager for loading and rendering workflow document templates.
///
/// `TemplateManager` wraps the minijinja template engine. It can be built
/// from the embedded default skeletons or from a user-supplied directory of
/// `.j2` files, in which case the directory contents replace the defaults.
///
/// # Examples
///
/// ```
/// use specflow_doc::{TemplateManager, TemplateEngine, DocContext};
///
/// let manager = TemplateManager::builtin()?;
///
/// let context = DocContext::new("my-feature");
/// let document = manager.render("requirements", &context)?;
/// # Ok::<(), specflow_doc::TemplateError>(())
/// ```
#[derive(Debug)]
pub struct TemplateManager {
    /// Minijinja environment holding the loaded templates.
    env: minijinja::Environment<'static>,
}

impl TemplateManager {
    /// Creates a `TemplateManager` from the embedded default templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to parse.
    pub fn builtin() -> Result<Self> {
        let mut env = minijinja::Environment::new();
        for (name, source) in BUILTIN_TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| TemplateError::TemplateParseError(format!("{name}: {e}")))?;
        }
        Ok(Self { env })
    }

    /// Creates a `TemplateManager` from a directory of `.j2` files.
    ///
    /// All `.j2` files in the directory are loaded eagerly so that syntax
    /// errors surface at construction time rather than on first render.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist, cannot be listed,
    /// or contains a template that fails to read or parse.
    pub fn from_dir(templates_dir: impl AsRef<Path>) -> Result<Self> {
        let templates_dir = templates_dir.as_ref();
        if !templates_dir.is_dir() {
            return Err(TemplateError::TemplateDirectoryNotFound(
                templates_dir.to_path_buf(),
            ));
        }

        let entries =
            std::fs::read_dir(templates_dir).map_err(|source| TemplateError::TemplateListError {
                path: templates_dir.to_path_buf(),
                source,
            })?;

        let mut env = minijinja::Environment::new();
        for entry in entries {
            let entry = entry.map_err(|source| TemplateError::TemplateListError {
                path: templates_dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            // Only load .j2 files
            if path.is_file()
                && let Some(ext) = path.extension()
                && ext == "j2"
                && let Some(name) = path.file_name()
                && let Some(name_str) = name.to_str()
            {
                let source = std::fs::read_to_string(&path).map_err(|source| {
                    TemplateError::TemplateLoadError {
                        path: path.clone(),
                        source,
                    }
                })?;
                env.add_template_owned(name_str.to_string(), source)
                    .map_err(|e| TemplateError::TemplateParseError(format!("{name_str}: {e}")))?;
            }
        }

        Ok(Self { env })
    }

    /// Loads a template by name.
    ///
    /// Templates are stored with a `.j2` extension.
    fn load_template(&self, name: &str) -> Result<minijinja::Template<'_, '_>> {
        let template_name = format!("{name}.j2");
        self.env
            .get_template(&template_name)
            .map_err(|e| TemplateError::TemplateNotFound(format!("{name}: {e}")))
    }
}

impl TemplateEngine for TemplateManager {
    fn render<T: Serialize>(&self, template: &str, ctx: &T) -> Result<String> {
        let tmpl = self.load_template(template)?;
        tmpl.render(ctx)
            .map_err(|e| TemplateError::TemplateRenderError(format!("{template}: {e}")))
    }

    fn list_templates(&self) -> Vec<String> {
        let mut templates: Vec<String> = self
            .env
            .templates()
            .filter_map(|(name, _)| name.strip_suffix(".j2"))
            .map(|name| name.to_string())
            .collect();
        templates.sort();
        templates
    }
}
