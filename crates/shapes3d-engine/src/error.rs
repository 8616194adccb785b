use std::fmt;

/// Initialization step that failed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InitStage {
    /// Windowing subsystem / event loop.
    Subsystem,
    /// Window creation.
    Window,
    /// Rendering surface bound to the window.
    Context,
    /// Adapter + device acquisition (the graphics API loader).
    Loader,
}

impl fmt::Display for InitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InitStage::Subsystem => "windowing subsystem",
            InitStage::Window => "window",
            InitStage::Context => "rendering context",
            InitStage::Loader => "graphics loader",
        };
        f.write_str(s)
    }
}

/// Fatal startup error.
///
/// Every initialization step is fail-fast; there is no recovery path. The
/// wrapped error carries the underlying platform message.
#[derive(Debug)]
pub struct InitError {
    stage: InitStage,
    source: anyhow::Error,
}

impl InitError {
    pub fn new(stage: InitStage, source: impl Into<anyhow::Error>) -> Self {
        Self {
            stage,
            source: source.into(),
        }
    }

    pub fn stage(&self) -> InitStage {
        self.stage
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} initialization failed: {:#}", self.stage, self.source)
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn display_names_stage_and_platform_message() {
        let err = InitError::new(InitStage::Window, anyhow!("No available video device"));
        assert_eq!(
            err.to_string(),
            "window initialization failed: No available video device"
        );
        assert_eq!(err.stage(), InitStage::Window);
    }

    #[test]
    fn display_includes_context_chain() {
        let inner = anyhow!("adapter lost").context("failed to create device");
        let err = InitError::new(InitStage::Loader, inner);
        assert_eq!(
            err.to_string(),
            "graphics loader initialization failed: failed to create device: adapter lost"
        );
    }

    #[test]
    fn source_is_exposed() {
        let err = InitError::new(InitStage::Subsystem, anyhow!("no display"));
        let src = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(src.as_deref(), Some("no display"));
    }
}
