use crate::{
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
    types::SubstitutionData,
};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer configured for source files: output
    /// is never escaped, the final newline is preserved and unknown
    /// placeholders are errors.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        data: &SubstitutionData,
        template_name: Option<&str>,
    ) -> Result<String> {
        let name = template_name.unwrap_or("temp");
        log::trace!("Rendering template '{name}'");
        self.env.render_named_str(name, template, data).map_err(|source| {
            Error::TemplateSyntaxError { name: name.to_string(), source }
        })
    }
}
