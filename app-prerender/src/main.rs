use std::{fs, io::Write, path::PathBuf};

use clap::Parser;
use sycamore::web::SsrNode;
use tracing_subscriber::EnvFilter;

/// Prerenders the application into its HTML shell.
#[derive(Debug, Parser)]
struct Args {
    /// HTML shell to render into, defaults to the bundled `index.html`.
    #[clap(short, long)]
    template: Option<PathBuf>,

    /// Anchor the application is mounted on.
    #[clap(long, default_value = app::MOUNT_SELECTOR)]
    target: String,

    /// Output file, prints to stdout if omitted.
    #[clap(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let html = run(&args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &html)?;
            tracing::info!("wrote {} bytes to {}", html.len(), path.display());
        }
        None => std::io::stdout().write_all(html.as_bytes())?,
    }

    Ok(())
}

fn run(args: &Args) -> anyhow::Result<String> {
    let mut shell = match &args.template {
        Some(path) => app::Shell::new(fs::read_to_string(path)?),
        None => app::Shell::index(),
    };

    Ok(app::bootstrap(&mut shell, app::root::<SsrNode>, &args.target)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("app-prerender").chain(args.iter().copied()))
    }

    #[test]
    pub fn bundled_index() {
        let html = run(&parse(&[])).unwrap();

        assert!(html.contains(r#"<div id="app">"#));
        assert!(html.contains("Hello from the root component"));
    }

    #[test]
    pub fn custom_template_and_target() {
        let path = std::env::temp_dir().join(format!("app-prerender-{}.html", std::process::id()));
        fs::write(&path, "<section><!-- %root% --></section>").unwrap();

        let r = run(&parse(&[
            "--template",
            path.to_str().unwrap(),
            "--target",
            "#root",
        ]));
        fs::remove_file(&path).unwrap();

        let html = r.unwrap();
        assert!(html.starts_with("<section>"));
        assert!(html.contains("Hello from the root component"));
        assert!(html.ends_with("</section>"));
    }

    #[test]
    pub fn unsupported_target() {
        let err = run(&parse(&["--target", ".x"])).unwrap_err();

        assert_eq!(err.to_string(), "mount target `.x` is not an id selector");
    }

    #[test]
    pub fn missing_template() {
        let r = run(&parse(&["--template", "/nonexistent/index.html"]));

        assert!(r.is_err());
    }
}
