use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

/// Extension the tool expects; compared case-insensitively.
pub const TEXT_EXTENSION: &str = ".txt";

/// Why a requested path cannot be processed.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("❌ Error: Debe ingresar una ruta de archivo.")]
    EmptyPath,

    /// Carries the full diagnostic built by `not_found_message`.
    #[error("{0}")]
    NotFound(String),

    #[error("❌ Error: '{0}' es una carpeta, no un archivo.")]
    NotAFile(String),
}

/// Checks that `path` names an existing regular file.
///
/// # Errors
/// Returns `EmptyPath` for blank input, `NotFound` (with a diagnostic that
/// inspects the parent directory) for missing paths, and `NotAFile` when the
/// path exists but is a directory.
pub fn validate(path: &str) -> Result<(), ValidationError> {
    if path.trim().is_empty() {
        return Err(ValidationError::EmptyPath);
    }
    let p = Path::new(path);
    if !p.exists() {
        return Err(ValidationError::NotFound(not_found_message(path)));
    }
    if !p.is_file() {
        return Err(ValidationError::NotAFile(path.to_string()));
    }
    Ok(())
}

/// Returns `true` when the path ends in the recognized text extension.
pub fn has_text_extension(path: &str) -> bool {
    path.to_lowercase().ends_with(TEXT_EXTENSION)
}

/// Lists entries of `parent` whose names look like `name`.
///
/// A candidate matches when its lowercase form contains the lowercase search
/// name, is contained by it, or starts with the search name's prefix (the
/// part before the first dot). Unreadable or missing directories yield an
/// empty list, never an error. Order is directory-listing order.
pub fn find_similar(name: &str, parent: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(parent) else {
        return Vec::new();
    };
    let target = name.to_lowercase();
    let prefix = target.split('.').next().unwrap_or(&target).to_owned();

    let mut matches = Vec::new();
    for entry in entries.flatten() {
        let candidate = entry.file_name().to_string_lossy().into_owned();
        let lower = candidate.to_lowercase();
        if lower.contains(&target) || target.contains(&lower) || lower.starts_with(&prefix) {
            matches.push(candidate);
        }
    }
    matches
}

fn list_entry_names(parent: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(parent)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Builds the multi-line not-found diagnostic.
fn not_found_message(path: &str) -> String {
    use std::fmt::Write as _;

    let mut msg = format!("❌ Error: No se encontró '{path}'\n");

    let p = Path::new(path);
    let parent = p.parent().unwrap_or_else(|| Path::new(""));
    let file_name = p
        .file_name()
        .map_or_else(|| path.to_string(), |n| n.to_string_lossy().into_owned());

    if !parent.as_os_str().is_empty() && parent.exists() {
        let _ = writeln!(msg, "   📁 La carpeta '{}' SÍ existe", parent.display());
        let _ = writeln!(
            msg,
            "   📄 Pero el archivo '{file_name}' NO se encuentra en esa carpeta"
        );

        match list_entry_names(parent) {
            Ok(names) => {
                let similar = find_similar(&file_name, parent);
                if !similar.is_empty() {
                    let _ = writeln!(
                        msg,
                        "   🔍 Archivos con nombres similares a '{file_name}':"
                    );
                    for name in &similar {
                        let _ = writeln!(msg, "      - {name}");
                    }
                }

                let txt: Vec<&String> = names
                    .iter()
                    .filter(|n| n.to_lowercase().ends_with(TEXT_EXTENSION))
                    .collect();
                if txt.is_empty() {
                    let _ = writeln!(
                        msg,
                        "   📋 No hay archivos .txt en '{}'",
                        parent.display()
                    );
                    let shown: Vec<&str> = names.iter().take(5).map(String::as_str).collect();
                    let _ = writeln!(msg, "   📋 Archivos disponibles: {}", shown.join(", "));
                    if names.len() > 5 {
                        let _ = writeln!(msg, "      ... y {} archivos más", names.len() - 5);
                    }
                } else {
                    let _ = writeln!(
                        msg,
                        "   📋 Archivos .txt disponibles en '{}':",
                        parent.display()
                    );
                    for name in &txt {
                        let _ = writeln!(msg, "      - {name}");
                    }
                }
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                let _ = writeln!(
                    msg,
                    "   ⚠️  No se puede acceder al contenido de '{}'",
                    parent.display()
                );
            }
            // Listing is a courtesy; other failures just skip it.
            Err(_) => {}
        }
    } else {
        let _ = writeln!(msg, "   📁 La carpeta '{}' NO existe", parent.display());
        msg.push_str("   💡 Sugerencias:\n");
        msg.push_str("      - Verifique que escribió la ruta correctamente\n");
        msg.push_str("      - Use rutas absolutas como: /ruta/completa/al/archivo.txt\n");
        msg.push_str("      - O rutas relativas como: ./archivo.txt\n");
    }

    msg
}
