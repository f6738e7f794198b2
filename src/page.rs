//! Menu page rendering.
//!
//! DESIGN
//! ======
//! The page chrome (header, info box, footer, styles) lives in a single
//! embedded template. Rendering only injects the populated cells, so both
//! layouts share one document and differ by a CSS class and column count.
//! Auto-escaping is on for `.html` templates; concession names never reach
//! the markup unescaped. Link targets are emitted raw: the name part is
//! percent-encoded and config rejects base URLs with markup characters.

use minijinja::Environment;
use serde::{Deserialize, Serialize};

use crate::grid::Cell;

const MENU_TEMPLATE_NAME: &str = "menu.html";
const MENU_TEMPLATE: &str = include_str!("../templates/menu.html");

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Which page variant to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Flowing card grid, no reserved cells.
    #[default]
    Cards,
    /// Fixed rows × columns matrix padded with reserved cells.
    Matrix,
}

/// Everything the template needs for one render.
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub layout: Layout,
    pub cells: &'a [Cell],
    /// Number of real concessions, shown in the info box.
    pub active_count: usize,
    /// Column count for the matrix layout; ignored for cards.
    pub columns: u32,
}

impl<'a> PageView<'a> {
    #[must_use]
    pub fn new(layout: Layout, cells: &'a [Cell], columns: u32) -> Self {
        let active_count = cells.iter().filter(|c| c.is_active()).count();
        Self { layout, cells, active_count, columns }
    }
}

/// Compiled menu template, shared across requests.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compile the embedded template.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if the template fails to parse.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(MENU_TEMPLATE_NAME, MENU_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render the full HTML document for `view`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] on evaluation failure.
    pub fn render(&self, view: &PageView<'_>) -> Result<String, RenderError> {
        let template = self.env.get_template(MENU_TEMPLATE_NAME)?;
        Ok(template.render(view)?)
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
