use std::sync::Once;

use log::LevelFilter;

/// Targets that are noisy at info level while a device is being set up.
const GPU_TARGETS: &[&str] = &["wgpu_core", "wgpu_hal", "naga"];

/// Logger configuration.
///
/// Filter precedence: `filter`, then `RUST_LOG`, then `level` with the GPU
/// stack capped at warn. Filters use the `env_logger` syntax
/// (e.g. "shapes3d_engine=debug,wgpu_core=warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the directive string handed to `env_logger`.
    fn directives(&self, rust_log: Option<String>) -> String {
        if let Some(filter) = &self.filter {
            return filter.clone();
        }
        if let Some(filter) = rust_log.filter(|f| !f.trim().is_empty()) {
            return filter;
        }

        let level = self.level.to_string().to_lowercase();
        let gpu_level = self.level.min(LevelFilter::Warn).to_string().to_lowercase();
        let mut out = level;
        for target in GPU_TARGETS {
            out.push_str(&format!(",{target}={gpu_level}"));
        }
        out
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` backend. Only the first call has effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let directives = config.directives(std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&directives);
        builder.write_style(config.write_style);

        // A test harness may already own the logger.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized ({directives})");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_caps_gpu_targets_at_warn() {
        let d = LoggingConfig::default().directives(None);
        assert_eq!(d, "info,wgpu_core=warn,wgpu_hal=warn,naga=warn");
    }

    #[test]
    fn quieter_level_is_not_raised_for_gpu_targets() {
        let cfg = LoggingConfig {
            level: LevelFilter::Error,
            ..LoggingConfig::default()
        };
        assert_eq!(
            cfg.directives(None),
            "error,wgpu_core=error,wgpu_hal=error,naga=error"
        );
    }

    #[test]
    fn rust_log_overrides_default() {
        let d = LoggingConfig::default().directives(Some("wgpu_core=debug".into()));
        assert_eq!(d, "wgpu_core=debug");
    }

    #[test]
    fn blank_rust_log_is_ignored() {
        let d = LoggingConfig::default().directives(Some("  ".into()));
        assert!(d.starts_with("info,"));
    }

    #[test]
    fn explicit_filter_wins() {
        let cfg = LoggingConfig {
            filter: Some("warn".into()),
            ..LoggingConfig::default()
        };
        assert_eq!(cfg.directives(Some("trace".into())), "warn");
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig {
            filter: Some("warn".to_string()),
            ..LoggingConfig::default()
        });
        init_logging(LoggingConfig::default());
    }
}
