use std::path::PathBuf;

use clap::Parser;

use mdsite::Config;
use mdsite::fs::DiskFs;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Generate a static HTML site from a tree of Markdown files")]
struct Cli {
    /// Prefix for root-relative links (defaults to the configured basepath)
    basepath: Option<String>,

    /// Site config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Markdown content directory
    #[arg(long)]
    content: Option<PathBuf>,

    /// Static assets directory
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Output directory (wiped on every run)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long)]
    template: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::load(&self.config);
        let site = &mut config.site;
        if let Some(basepath) = self.basepath {
            site.basepath = basepath;
        }
        if let Some(content) = self.content {
            site.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            site.static_dir = static_dir;
        }
        if let Some(output) = self.output {
            site.output_dir = output;
        }
        if let Some(template) = self.template {
            site.template = template;
        }
        config
    }
}

fn build_site(config: &Config) -> mdsite::Result<Vec<PathBuf>> {
    let site = &config.site;
    mdsite::initialize_output(&DiskFs, &site.static_dir, &site.output_dir)?;
    mdsite::generate_pages_recursive(
        &DiskFs,
        &site.content_dir,
        &site.template,
        &site.output_dir,
        &site.basepath,
    )
}

fn main() {
    env_logger::init();

    let config = Cli::parse().into_config();

    let pages = match build_site(&config) {
        Ok(pages) => pages,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Generated {} pages in {}",
        pages.len(),
        config.site.output_dir.display()
    );
}
