//! CLI for md2page - Markdown to HTML static page generator

use clap::{Args, Parser, Subcommand};
use md2page::site::{build_site, SiteOptions};
use md2page::{ConvertOptions, ListMarkerStrip, MarkdownToHtml};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Defaults to `build` with default locations
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Copy static files and generate a page for every Markdown file
    Build(BuildArgs),
    /// Print the HTML fragment for a single Markdown file
    Render {
        /// Input Markdown file path
        input: PathBuf,

        /// Always strip three characters from ordered list items
        #[arg(long)]
        fixed_width_markers: bool,
    },
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Prefix for root-relative links in generated pages
    #[arg(default_value = "/")]
    base_path: String,

    /// Directory copied verbatim into the output
    #[arg(long, default_value = "./static")]
    static_dir: PathBuf,

    /// Directory of Markdown pages
    #[arg(long, default_value = "./content")]
    content_dir: PathBuf,

    /// Page template with {{ Title }} and {{ Content }} markers
    #[arg(long, default_value = "./template.html")]
    template: PathBuf,

    /// Output directory (deleted and recreated)
    #[arg(long, default_value = "./docs")]
    output: PathBuf,
}

impl Default for BuildArgs {
    fn default() -> Self {
        let defaults = SiteOptions::default();
        Self {
            base_path: defaults.base_path,
            static_dir: defaults.static_dir,
            content_dir: defaults.content_dir,
            template: defaults.template_path,
            output: defaults.output_dir,
        }
    }
}

impl From<BuildArgs> for SiteOptions {
    fn from(args: BuildArgs) -> Self {
        Self {
            base_path: args.base_path,
            static_dir: args.static_dir,
            content_dir: args.content_dir,
            template_path: args.template,
            output_dir: args.output,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Command::Build(BuildArgs::default())) {
        Command::Build(args) => match build_site(&args.into()) {
            Ok(summary) => {
                println!(
                    "Copied {} static files and generated {} pages",
                    summary.static_files, summary.pages
                );
            }
            Err(e) => {
                eprintln!("Error building site: {}", e);
                std::process::exit(1);
            }
        },
        Command::Render {
            input,
            fixed_width_markers,
        } => {
            let markdown = match std::fs::read_to_string(&input) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading {}: {}", input.display(), e);
                    std::process::exit(1);
                }
            };

            let options = ConvertOptions {
                list_markers: if fixed_width_markers {
                    ListMarkerStrip::FixedWidth
                } else {
                    ListMarkerStrip::Exact
                },
            };

            match MarkdownToHtml::new(options).render(&markdown) {
                Ok(html) => println!("{}", html),
                Err(e) => {
                    eprintln!("Error converting {}: {}", input.display(), e);
                    std::process::exit(1);
                }
            }
        }
    }
}
