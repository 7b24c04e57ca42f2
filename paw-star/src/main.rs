//! Paw Star: neighborhood cat stories, browsed in the terminal.

mod app;
mod components;
mod pages;

use crate::app::build_navigator;
use rat_trail::Application;

fn main() -> anyhow::Result<()> {
    // Optional start path, the terminal analog of the initial location.
    let start = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());

    let app = Application::new();

    app.run(move |cx| {
        cx.set_navigator(build_navigator(&start))?;
        Ok(())
    })
}
