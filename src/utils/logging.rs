// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring

use colored::*;
use std::io::IsTerminal;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Colour is only emitted when requested, `NO_COLOR` is unset and stdout is a
/// terminal, so piped reports stay byte-exact.
pub fn resolve_color(requested: bool) -> bool {
    color_enabled(
        requested,
        std::env::var_os("NO_COLOR").is_some(),
        std::io::stdout().is_terminal(),
    )
}

fn color_enabled(requested: bool, no_color: bool, is_terminal: bool) -> bool {
    requested && !no_color && is_terminal
}

/// Logs go to stderr; `colored_output` should come from [`resolve_color`].
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_ansi(colored_output && std::io::stderr().is_terminal());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    if !colored_output {
        colored::control::set_override(false);
    }
}

pub fn format_path(path: &Path, colored_output: bool) -> String {
    if colored_output {
        format!("{}", path.display().to_string().yellow())
    } else {
        path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_requires_terminal() {
        assert!(color_enabled(true, false, true));
        assert!(!color_enabled(true, false, false));
    }

    #[test]
    fn test_color_respects_flag_and_no_color() {
        assert!(!color_enabled(false, false, true));
        assert!(!color_enabled(true, true, true));
    }

    #[test]
    fn test_plain_path_has_no_escapes() {
        let rendered = format_path(Path::new("/tmp/samples/out.csv"), false);
        assert_eq!(rendered, "/tmp/samples/out.csv");
    }
}
