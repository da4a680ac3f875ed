use std::io::{self, Write};
use std::process::ExitCode;

use dictionary::Dictionary;
use render::Renderer;
use tracing::debug;

mod logging;
mod render;

const USAGE: &str = "dic

Usage: dic <query>";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    logging::init_tracing()?;

    let phrase = query_from_args(std::env::args());
    let mut stdout = io::stdout().lock();
    let succeeded = run(
        &Dictionary::new(),
        &Renderer::for_stdout(),
        phrase.as_deref(),
        &mut stdout,
    )
    .await?;
    stdout.flush()?;
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Looks up `phrase` and writes either the entries or the failure message to `out`,
/// returning whether the process should exit successfully. Without a phrase only
/// the usage text is written.
async fn run<W: Write>(
    dict: &Dictionary,
    renderer: &Renderer,
    phrase: Option<&str>,
    out: &mut W,
) -> io::Result<bool> {
    let Some(phrase) = phrase else {
        write!(out, "{USAGE}")?;
        return Ok(true);
    };

    match dict.lookup(phrase).await {
        Ok(entries) => {
            renderer.render(out, &entries)?;
            Ok(true)
        }
        Err(error) => {
            debug!(%error, phrase, "lookup failed");
            writeln!(out, "{error}")?;
            Ok(false)
        }
    }
}

/// The first argument after the program name, taken as-is. The rest are ignored.
fn query_from_args(args: impl IntoIterator<Item = String>) -> Option<String> {
    args.into_iter().nth(1)
}
