use std::path::PathBuf;

use clap::Parser;
use htmlmin::{Minifier, MinifyError, Options};
use tracing_subscriber::EnvFilter;

mod templates {
    pub const WELCOME: &str = include_str!("../templates/welcome.blade.php");
    pub const EDITOR: &str = include_str!("../templates/editor.blade.php");
}

/// Minify Blade/PHP templates, or the bundled ones when no paths are given.
#[derive(Parser, Debug)]
#[command(long_about = None)]
struct Args {
    /// Minify even when the template looks unsafe to touch.
    #[arg(long)]
    force: bool,

    /// Templates to minify.
    paths: Vec<PathBuf>,
}

fn main() -> Result<(), MinifyError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let minifier = Minifier::new(Options { force: args.force });

    if args.paths.is_empty() {
        println!("{}", minifier.render(templates::WELCOME));
        println!("{}", minifier.render(templates::EDITOR));
    }

    for path in &args.paths {
        println!("{}", minifier.render_file(path)?);
    }
    Ok(())
}
