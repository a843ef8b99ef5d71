// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vitrine::app::{Showcase, ShowcaseContext, ShowcaseEvent};
use vitrine::application::query::Direction;
use vitrine::catalog_loader::CatalogFile;
use vitrine::config::{self, Config};
use vitrine::error::{Error, Result};
use vitrine::i18n::I18n;
use vitrine::ui::text_view::TextView;

const HELP: &str = "\
vitrine - drive the catalog tabs and carousels from the command line

USAGE:
  vitrine [OPTIONS] <CATALOG_FILE> [ACTION]...

OPTIONS:
  --lang <LANG>         Interface language (en-US, fr)
  --config <PATH>       Settings file (defaults to the user config directory)
  --container <WIDTH>   Initial carousel width in pixels
  -h, --help            Print this help

ACTIONS:
  tab:<catalog>:<category>   Select a category tab
  next:<catalog>             Scroll one card forward
  prev:<catalog>             Scroll one card backward
  resize:<catalog>:<width>   Change the carousel width
";

struct Flags {
    lang: Option<String>,
    config_path: Option<PathBuf>,
    container_width: Option<f32>,
    catalog_path: PathBuf,
    actions: Vec<String>,
}

fn parse_flags() -> std::result::Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_path = args.opt_value_from_str("--config")?;
    let container_width = args.opt_value_from_str("--container")?;
    let catalog_path = args.free_from_str()?;
    let actions = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect();

    Ok(Some(Flags {
        lang,
        config_path,
        container_width,
        catalog_path,
        actions,
    }))
}

fn parse_action(action: &str) -> Option<ShowcaseEvent> {
    let mut parts = action.splitn(3, ':');
    let verb = parts.next()?;
    let catalog = parts.next()?.to_string();
    let argument = parts.next();

    match (verb, argument) {
        ("tab", Some(category)) => Some(ShowcaseEvent::TabSelected {
            catalog,
            category: category.into(),
        }),
        ("next", None) => Some(ShowcaseEvent::Arrow {
            catalog,
            direction: Direction::Forward,
        }),
        ("prev", None) => Some(ShowcaseEvent::Arrow {
            catalog,
            direction: Direction::Backward,
        }),
        ("resize", Some(width)) => width
            .parse()
            .ok()
            .map(|container_width| ShowcaseEvent::Resized {
                catalog,
                container_width,
            }),
        _ => None,
    }
}

fn run(flags: Flags) -> Result<()> {
    let mut config = match &flags.config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not read settings, using defaults");
            Config::default()
        }),
    };
    if let Some(width) = flags.container_width {
        config.carousel.container_width = Some(width);
    }

    let i18n = I18n::new(flags.lang, &config);
    let catalogs = CatalogFile::load(&flags.catalog_path)?;

    let stdout = std::io::stdout();
    let view = TextView::new(stdout.lock(), &i18n);
    let mut showcase = Showcase::new(ShowcaseContext::from_config(&config), view);

    for event in catalogs.into_events() {
        showcase.handle(event)?;
    }

    for action in &flags.actions {
        let event = parse_action(action)
            .ok_or_else(|| Error::Config(format!("unrecognized action '{action}'")))?;
        if let Err(err) = showcase.handle(event) {
            eprintln!("{}", i18n.tr_error(&err));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "vitrine failed");
            ExitCode::FAILURE
        }
    }
}
