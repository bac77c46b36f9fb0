use anyhow::Context;
use clap::Parser;
use pizzeria_menu::placeholder::{ensure_placeholder, PlaceholderOutcome};
use pizzeria_menu::render::render_menu;
use pizzeria_menu::{Image, Menu};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Item artwork lives here, next to wherever the tool is run from
const IMAGES_DIR: &str = "images";

#[derive(Parser, Debug)]
#[command(name = "pizzeria-menu")]
#[command(about = "Render the house menu of Pizzeria La Repubblica to a styled A4 PDF")]
struct Args {
    /// Where to write the menu document
    #[arg(default_value = "menu_pizzeria.pdf")]
    output: PathBuf,

    /// Also log placeholder generation and font resolution
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pizzeria_menu=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pizzeria_menu=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let menu = Menu::house();
    let images_dir = Path::new(IMAGES_DIR);

    // make sure every referenced piece of artwork exists, then decode it
    let mut art = Vec::new();
    for item in &menu.food {
        let Some(filename) = &item.image else {
            continue;
        };
        let path = images_dir.join(filename);
        match ensure_placeholder(&path, &item.name)
            .with_context(|| format!("generating placeholder artwork for {}", item.name))?
        {
            PlaceholderOutcome::Created => {
                tracing::info!(path = %path.display(), "generated placeholder artwork");
            }
            PlaceholderOutcome::AlreadyPresent => {
                tracing::debug!(path = %path.display(), "artwork already present");
            }
        }

        let image = Image::new_from_disk(&path)
            .with_context(|| format!("reading artwork {}", path.display()))?;
        art.push((filename.clone(), image));
    }

    let doc = render_menu(&menu, art);
    let pages = doc.page_count();

    let out = std::fs::File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    doc.write(out).context("writing menu document")?;
    tracing::info!(pages, path = %args.output.display(), "wrote menu");

    Ok(())
}
