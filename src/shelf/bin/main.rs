use std::io;
use std::io::{BufRead, Write};
use tracing::error;
use bookshelf::core::domain::Configuration;
use bookshelf::core::shelf::{ShelfError, ShelfResult};
use bookshelf::shelf::controller::{FormController, FormEvent, FormField};
use bookshelf::shelf::factory::{create_bookshelf, Bookshelf};
use bookshelf::utils::logs::setup_tracing;

// Terminal front end: each prompt cycle fills the three inputs and submits.
// `:json` dumps the shelf, `:quit` (or end of input) exits.

fn main() -> Result<(), ShelfError> {
    let config = Configuration::from_env("local");
    setup_tracing(&config);

    let shelf = create_bookshelf(&config)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    'session: loop {
        for field in FormField::ALL {
            write!(out, "{}> ", field)?;
            out.flush()?;
            let Some(line) = lines.next() else {
                break 'session;
            };
            let line = line?;
            match line.trim() {
                ":quit" => break 'session,
                ":json" => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&shelf.store.books())?)?;
                    continue 'session;
                }
                _ => {}
            }
            shelf.form.handle(FormEvent::Input(field, line))?;
            shelf.form.handle(FormEvent::Blur(field))?;
        }

        if let Err(err) = submit(&shelf, &mut out) {
            error!("submission failed: {}", err);
        }
    }
    Ok(())
}

fn submit(shelf: &Bookshelf, out: &mut impl Write) -> ShelfResult<()> {
    if shelf.form.handle(FormEvent::Submit)? {
        write!(out, "{}", shelf.render_text())?;
    } else {
        for field in FormField::ALL {
            let message = shelf.form.error_text(field)?;
            if !message.is_empty() {
                writeln!(out, "{} ({})", message, FormController::input_id(field))?;
            }
        }
    }
    Ok(())
}
