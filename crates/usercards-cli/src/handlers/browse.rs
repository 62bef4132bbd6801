use std::time::Duration;

use anyhow::Result;
use usercards_types::Directory;

use crate::presentation::TuiRenderer;

pub fn handle(directory: Directory, debounce: Duration) -> Result<()> {
    tracing::debug!(
        records = directory.len(),
        debounce_ms = debounce.as_millis() as u64,
        "starting browse"
    );
    TuiRenderer::new(directory, debounce).run()
}
