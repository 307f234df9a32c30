//! Items flow - Preview the normalized item set

use anyhow::Result;
use std::path::Path;

use super::{emit, load_items, FlowOptions};
use crate::core::render::Renderer;

/// Load items and emit them in normalized order
pub fn run_items(input: &Path, options: &FlowOptions) -> Result<()> {
    let items = load_items(input, options)?;
    let rendered = Renderer::with_config(options.render).render_items(&items);
    emit(&rendered, options)
}
