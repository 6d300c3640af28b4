pub mod controller;
pub mod error;
pub mod filters;
pub mod params;
pub mod pipeline;

pub use controller::{Render, render, render_with};
pub use error::{FilterError, Result};
pub use filters::Upload;
pub use params::FilterParams;
pub use pipeline::{DebugConfig, Pipeline, PipelineContext, PipelineData, PipelineStep};

#[cfg(feature = "gui")]
pub mod gui;

/// Initializes the logger.
///
/// Lines carry the level, file name, line number and message. `RUST_LOG`
/// overrides the default filter, which is `debug` when verbose and `info`
/// otherwise. Renderer crates are capped at `warn`.
pub fn init_logger(verbose: bool) {
    use std::io::Write;

    let default_filter = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("wgpu_hal", log::LevelFilter::Warn)
        .filter_module("naga", log::LevelFilter::Warn)
        .filter_module("cosmic_text", log::LevelFilter::Warn)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{style}{}{style:#} {} {}] {}",
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
