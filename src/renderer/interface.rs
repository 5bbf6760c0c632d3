use crate::{error::Result, types::SubstitutionData};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given substitution data.
    ///
    /// Rendering is pure: no I/O, and identical inputs always produce
    /// identical output.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `data` - Values available to placeholders
    /// * `template_name` - Optional name for the template (used in error messages)
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(
        &self,
        template: &str,
        data: &SubstitutionData,
        template_name: Option<&str>,
    ) -> Result<String>;
}
