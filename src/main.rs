use anyhow::{bail, Context, Result};
use code_deck::{page, Deck, Presentation, RenderOptions};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: code-deck <data.json> [--scene N] [--edit] [--out PATH]";

#[derive(Debug, Default)]
struct CliArgs {
    data: PathBuf,
    scene: Option<usize>,
    edit: bool,
    out: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut data = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--edit" | "-e" => cli.edit = true,
            "--scene" | "-s" => {
                let value = iter.next().context("--scene needs an index")?;
                let index = value
                    .parse()
                    .with_context(|| format!("invalid scene index '{}'", value))?;
                cli.scene = Some(index);
            }
            "--out" | "-o" => {
                let value = iter.next().context("--out needs a path")?;
                cli.out = Some(PathBuf::from(value));
            }
            flag if flag.starts_with('-') => bail!("unknown option '{}'\n{}", flag, USAGE),
            path => {
                if data.replace(PathBuf::from(path)).is_some() {
                    bail!("more than one data file given\n{}", USAGE);
                }
            }
        }
    }

    cli.data = data.with_context(|| USAGE.to_string())?;
    Ok(cli)
}

fn emit(out: Option<&PathBuf>, markup: &str) -> Result<()> {
    match out {
        Some(path) => fs::write(path, markup)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(markup.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }
    let cli = parse_args(&args)?;

    // Load failures still produce a page, so the viewer sees why.
    let presentation = match Presentation::load(&cli.data) {
        Ok(p) => p,
        Err(err) => {
            error!(error = %err, "failed to load presentation");
            emit(cli.out.as_ref(), &page::render_error_page(&err))?;
            return Err(err).context("loading presentation");
        }
    };

    let mut deck = Deck::from_presentation(&presentation);
    let opts = RenderOptions {
        edit_mode: cli.edit,
        ..RenderOptions::default()
    };

    let markup = match cli.scene {
        Some(index) => {
            deck.go_to(index)?;
            info!(scene = index, "rendering single scene");
            deck.render_current(&opts).unwrap_or_default()
        }
        None => {
            info!(scenes = deck.len(), "rendering deck");
            page::render_document(&deck, &opts)
        }
    };

    emit(cli.out.as_ref(), &markup)
}
