use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;
use serde::Serialize;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
}

impl HandlerContext {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format.into());
        renderer.render(view_model)
    }
}
