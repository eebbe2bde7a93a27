use std::str::FromStr;
use std::time::Duration;

use bytescope_core::render::RenderMode;

use super::CommandResult;
use crate::tui::app::App;

pub fn run(url: &str, source: &str, mode: &str, count: usize, interval_ms: u64) -> CommandResult {
    let mode = RenderMode::from_str(mode)?;
    let mut app = App::new(url, source, mode, count, Duration::from_millis(interval_ms));
    app.run()?;
    Ok(())
}
