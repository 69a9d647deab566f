//! Core template engine trait definition.

use crate::error::Result;
use serde::Serialize;

/// Trait for rendering document templates with dynamic context.
///
/// Implementations handle loading and rendering of the workflow document
/// skeletons using a template engine like minijinja.
///
/// # Examples
///
/// ```
/// use specflow_doc::{TemplateEngine, TemplateManager, DocContext};
///
/// fn render_example(engine: &TemplateManager) -> Result<(), Box<dyn std::error::Error>> {
///     let context = DocContext::new("my-feature");
///     let rendered = engine.render("requirements", &context)?;
///     println!("Generated document:\n{}", rendered);
///     Ok(())
/// }
/// ```
pub trait TemplateEngine {
    /// Renders a template with the provided context.
    ///
    /// # Arguments
    ///
    /// * `template` - Name of the template to render (without extension)
    /// * `ctx` - Context data to use for rendering
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The template does not exist
    /// - The context cannot be serialized
    /// - Template rendering fails
    fn render<T: Serialize>(&self, template: &str, ctx: &T) -> Result<String>;

    /// Lists all available template names (without extensions), sorted.
    fn list_templates(&self) -> Vec<String>;
}
