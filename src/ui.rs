use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::counter::WordCounter;
use crate::formatters;
use crate::validator;

const EXIT_TOKENS: [&str; 4] = ["salir", "quit", "exit", "q"];
const YES_TOKENS: [&str; 5] = ["s", "si", "sí", "y", "yes"];

/// Returns `true` when `input` asks to leave the program.
pub fn is_exit_token(input: &str) -> bool {
    EXIT_TOKENS.contains(&input.to_lowercase().as_str())
}

/// Returns `true` for any accepted yes answer.
pub fn is_affirmative(input: &str) -> bool {
    YES_TOKENS.contains(&input.to_lowercase().as_str())
}

/// One interactive run of the word counter.
///
/// Generic over its reader and writer so sessions can be driven from tests
/// with in-memory buffers instead of a terminal.
pub struct Session<R, W> {
    input: R,
    output: W,
    counter: WordCounter,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session {
            input,
            output,
            counter: WordCounter::new(),
        }
    }

    /// Runs the prompt loop until an exit token, a refused continue prompt
    /// or end of input.
    ///
    /// # Errors
    /// Only console I/O failures abort the session; per-file errors are
    /// printed and the loop keeps going.
    pub fn run(&mut self) -> Result<()> {
        self.show_welcome()?;
        loop {
            let path = self.prompt("\nIngrese la ruta del archivo de texto: ")?;
            if is_exit_token(&path) {
                break;
            }

            self.process_file(&path)?;

            let again = self.prompt("\n¿Desea procesar otro archivo? (s/n): ")?;
            if !is_affirmative(&again) {
                break;
            }
        }
        self.show_farewell()
    }

    /// Validates, confirms and counts a single file.
    ///
    /// Returns `Ok(true)` when a report was printed, `Ok(false)` when the
    /// attempt was abandoned (validation failure, refused extension
    /// confirmation or counting failure).
    pub fn process_file(&mut self, path: &str) -> Result<bool> {
        if let Err(err) = validator::validate(path) {
            writeln!(self.output, "{err}")?;
            return Ok(false);
        }

        if !self.confirm_extension(path)? {
            return Ok(false);
        }

        if let Err(err) = self.counter.process(Path::new(path)) {
            writeln!(self.output, "{err}")?;
            return Ok(false);
        }

        let stats = self.counter.statistics();
        write!(self.output, "{}", formatters::report::format(path, &stats))?;
        Ok(true)
    }

    /// Paths without the `.txt` extension need an explicit yes.
    fn confirm_extension(&mut self, path: &str) -> Result<bool> {
        if validator::has_text_extension(path) {
            return Ok(true);
        }
        let answer = self.prompt(&format!(
            "⚠️  El archivo '{path}' no tiene extensión .txt. ¿Continuar? (s/n): "
        ))?;
        Ok(is_affirmative(&answer))
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn show_welcome(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== CONTADOR DE PALABRAS ===")?;
        writeln!(self.output, "El programa acepta archivos de texto (.txt)")?;
        writeln!(self.output, "Ejemplos de rutas válidas:")?;
        writeln!(self.output, "- /home/usuario/Documentos/mi_archivo.txt")?;
        writeln!(self.output, "- ./archivo.txt")?;
        writeln!(self.output, "- archivo.txt (si está en la misma carpeta)")?;
        writeln!(
            self.output,
            "\n💡 Escriba 'salir' o 'quit' para terminar el programa"
        )?;
        Ok(())
    }

    fn show_farewell(&mut self) -> Result<()> {
        writeln!(self.output, "\n👋 ¡Gracias por usar el contador de palabras!")?;
        Ok(())
    }
}
