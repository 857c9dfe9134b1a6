use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::{Catalog, Clock};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCategory { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCategory { raw } => write!(f, "unknown category: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    catalog: Arc<Catalog>,
    clock: Clock,
    start_category: Option<String>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn clock(&self) -> Clock {
        self.clock
    }

    fn start_category(&self) -> Option<String> {
        self.start_category.clone()
    }
}

struct Args {
    start_category: Option<String>,
}

fn print_usage(catalog: &Catalog) {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--category <name>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --category <name>   skip selection and start the named category");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRIVIA_CATEGORY");
    eprintln!();
    let names: Vec<&str> = catalog
        .categories()
        .iter()
        .map(|category| category.name().as_str())
        .collect();
    eprintln!("Categories: {}", names.join(", "));
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        catalog: &Catalog,
    ) -> Result<Self, ArgsError> {
        let mut start_category = std::env::var("TRIVIA_CATEGORY").ok();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--category" => {
                    start_category = Some(require_value(args, "--category")?);
                }
                "--help" | "-h" => {
                    print_usage(catalog);
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        // Validate up front so a typo fails at launch, not mid-session.
        if let Some(raw) = &start_category {
            let category = catalog
                .category(raw)
                .ok_or_else(|| ArgsError::UnknownCategory { raw: raw.clone() })?;
            start_category = Some(category.name().as_str().to_owned());
        }

        Ok(Self { start_category })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Arc::new(Catalog::builtin());

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, &catalog).map_err(|e| {
        eprintln!("{e}");
        print_usage(&catalog);
        e
    })?;

    let app = DesktopApp {
        catalog,
        clock: Clock::default_clock(),
        start_category: parsed.start_category,
    };

    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    // Explicitly disable always-on-top so the app doesn't behave like a
    // modal window in dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trivia")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
