mod animation;
mod app;
mod config;
mod shapes;

use std::io::{self, Write};
use std::process::ExitCode;

use shapes3d_engine::error::InitError;
use shapes3d_engine::logging::{init_logging, LoggingConfig};
use shapes3d_engine::window::{RunStats, Runtime, WinitPlatform};

use crate::app::ShapesApp;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let config = config::runtime_config();
    let mut platform = WinitPlatform::new();
    let mut app = ShapesApp::new();

    let result = Runtime::run(&mut platform, &config, &mut app);
    report(result, &mut io::stderr().lock())
}

/// Maps the run outcome to the process exit code.
///
/// Init errors are written to `diag` directly, so a `RUST_LOG` filter can never
/// swallow them.
fn report(result: Result<RunStats, InitError>, diag: &mut impl Write) -> ExitCode {
    match result {
        Ok(stats) => {
            log::info!("exiting after {} frames", stats.frames);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            // Nothing else to do if stderr itself is gone.
            let _ = writeln!(diag, "{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use shapes3d_engine::error::InitStage;

    use super::*;

    #[test]
    fn init_error_is_written_and_fails() {
        let err = InitError::new(InitStage::Subsystem, anyhow!("DISPLAY is not set"));
        let mut diag = Vec::new();

        let code = report(Err(err), &mut diag);

        assert_eq!(code, ExitCode::FAILURE);
        let text = String::from_utf8(diag).unwrap();
        assert_eq!(
            text,
            "windowing subsystem initialization failed: DISPLAY is not set\n"
        );
    }

    #[test]
    fn clean_quit_writes_nothing() {
        let mut diag = Vec::new();

        let code = report(Ok(RunStats { frames: 12 }), &mut diag);

        assert_eq!(code, ExitCode::SUCCESS);
        assert!(diag.is_empty());
    }
}
