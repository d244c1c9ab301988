use anyhow::Result;
use winit::dpi::LogicalSize;

use spincube_engine::device::GpuInit;
use spincube_engine::logging::{init_logging, LoggingConfig};
use spincube_engine::window::{Runtime, RuntimeConfig};

mod app;

use app::CubeApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "spincube".to_string(),
        initial_size: LogicalSize::new(512.0, 512.0),
    };

    log::info!(
        "spincube viewer starting ({}x{})",
        config.initial_size.width,
        config.initial_size.height
    );

    Runtime::run(config, GpuInit::default(), CubeApp::new())
}
