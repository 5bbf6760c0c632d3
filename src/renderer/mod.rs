//! Template rendering engine for genst
//!
//! The module is structured as:
//! - `interface`: Core trait definition for template rendering
//! - `minijinja`: MiniJinja-based implementation of the template renderer

pub mod interface;
pub mod minijinja;

// Re-export the main types and traits for convenience
pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;

/// Convenience function to create the default template renderer
pub fn new_renderer() -> impl TemplateRenderer {
    MiniJinjaRenderer::new()
}
