use std::io;
use std::path::Path;

use anyhow::{Result, bail};

use crate::counter::WordCounter;
use crate::formatters;
use crate::ui::Session;
use crate::validator;

use super::Args;

pub fn run_with_args(args: &Args) -> Result<()> {
    match &args.path {
        Some(path) => run_single(args, path),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(stdin.lock(), stdout.lock()).run()
        }
    }
}

/// Non-interactive mode: one file in, one report out.
fn run_single(args: &Args, path: &Path) -> Result<()> {
    let display = path.display().to_string();
    if args.verbose > 0 {
        eprintln!("Procesando archivo: {display}");
    }

    if let Err(err) = validator::validate(&display) {
        eprintln!("{err}");
        bail!("no se pudo validar '{display}'");
    }

    // No prompting outside the interactive session; require --yes instead.
    if !validator::has_text_extension(&display) && !args.yes {
        bail!("'{display}' no tiene extensión .txt (use --yes para procesarlo igualmente)");
    }

    let mut counter = WordCounter::new();
    if let Err(err) = counter.process(path) {
        eprintln!("{err}");
        bail!("no se pudo procesar '{display}'");
    }

    let stats = counter.statistics();
    if args.verbose > 1 {
        eprintln!(
            "Palabras: total={}, distintas={}",
            counter.total_words(),
            counter.distinct_words()
        );
    }

    if args.json {
        let s = serde_json::to_string_pretty(&stats)?;
        println!("{}", s);
        return Ok(());
    }
    if args.csv {
        print!("{}", formatters::csv::format(&stats));
        return Ok(());
    }

    print!("{}", formatters::report::format(&display, &stats));
    Ok(())
}
