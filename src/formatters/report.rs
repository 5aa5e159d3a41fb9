use crate::types::Statistics;
use std::io::IsTerminal;

/// Renders the human-readable report for a processed file.
pub fn format(path: &str, stats: &Statistics) -> String {
    use std::fmt::Write as _;

    let colors = Colors::enabled();
    let mut out = String::new();

    let _ = writeln!(out, "\n✅ Archivo procesado exitosamente: {path}");
    let _ = writeln!(
        out,
        "📊 El número total de palabras es: {}",
        colors.paint(&stats.total_words.to_string(), "36") // cyan
    );

    if stats.is_empty {
        let _ = writeln!(out, "⚠️  El archivo está vacío o no contiene palabras.");
        return out;
    }

    let _ = writeln!(out, "\n🔝 Las 10 palabras más frecuentes son:");
    for (i, entry) in stats.top_words.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:2}. '{}' - {} veces",
            i + 1,
            colors.paint(&entry.word, "32"), // green
            entry.count
        );
    }
    out
}

struct Colors {
    enabled: bool,
}

impl Colors {
    fn enabled() -> Self {
        let force = std::env::var("CLICOLOR_FORCE")
            .ok()
            .filter(|v| v != "0")
            .is_some();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let clicolor_zero = std::env::var("CLICOLOR")
            .ok()
            .map(|v| v == "0")
            .unwrap_or(false);
        let term = std::io::stdout().is_terminal();
        let enabled = if force {
            true
        } else if no_color || clicolor_zero {
            false
        } else {
            term
        };
        Colors { enabled }
    }

    fn paint(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, s)
        } else {
            s.to_string()
        }
    }
}
