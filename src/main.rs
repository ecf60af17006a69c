use blog_chrome::page::{self, PageContext};
use blog_chrome::{config, footer, locale, output, theme::Theme};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Shared flags for commands that render a page.
#[derive(clap::Args, Clone)]
struct RenderArgs {
    /// JSON array of post records
    #[arg(long, default_value = "posts.json")]
    posts: PathBuf,

    /// Render with the dark theme
    #[arg(long)]
    dark: bool,

    /// Write the page here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "blog-chrome")]
#[command(about = "Render blog header, navigation, post cards and footer")]
#[command(long_about = "\
Render blog header, navigation, post cards and footer

Site configuration is read from blog.toml in the site directory. Every key
is optional; run 'blog-chrome gen-config' for a documented template.

Posts are a JSON array of records:

  [{ \"id\": \"1\", \"slug\": \"hello\", \"title\": \"Hello\",
     \"summary\": \"First post\", \"date\": \"2024-03-05\", \"tags\": [\"rust\"] }]

Logging goes to stderr and is controlled with RUST_LOG
(default: blog_chrome=info).")]
#[command(version)]
struct Cli {
    /// Site directory containing blog.toml
    #[arg(long, default_value = ".", global = true)]
    site: PathBuf,

    /// Locale table (TOML); English when omitted
    #[arg(long, global = true)]
    locale: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the landing page: home header, post list, footer
    Home(RenderArgs),
    /// Render a single post page
    Post {
        #[command(flatten)]
        render: RenderArgs,
        /// Slug of the post to render
        #[arg(long)]
        slug: String,
    },
    /// Validate blog.toml and the locale, and print the resolved navigation
    Check,
    /// Print a stock blog.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Home(args) => {
            let site_config = config::load_config(&cli.site)?;
            let site_locale = load_locale(cli.locale.as_deref())?;
            let posts = page::load_posts(&args.posts)?;
            let ctx = page_context(&site_config, &site_locale, &args);
            let html = page::render_home_page(ctx, &posts);
            emit("Home", args.output.as_deref(), &html.into_string(), posts.len())?;
        }
        Command::Post { render, slug } => {
            let site_config = config::load_config(&cli.site)?;
            let site_locale = load_locale(cli.locale.as_deref())?;
            let posts = page::load_posts(&render.posts)?;
            let post = page::find_post(&posts, &slug)?;
            let ctx = page_context(&site_config, &site_locale, &render);
            let html = page::render_post_page(ctx, post);
            emit("Post", render.output.as_deref(), &html.into_string(), 1)?;
        }
        Command::Check => {
            println!("==> Checking {}", cli.site.join(config::CONFIG_FILE).display());
            let site_config = config::load_config(&cli.site)?;
            let site_locale = load_locale(cli.locale.as_deref())?;
            output::print_check_output(&site_config, &site_locale);
            println!("==> Configuration is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Logs go to stderr so rendered HTML on stdout stays clean.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "blog_chrome=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_locale(path: Option<&Path>) -> Result<locale::Locale, locale::LocaleError> {
    match path {
        Some(path) => locale::load_locale(path),
        None => Ok(locale::Locale::default()),
    }
}

fn page_context<'a>(
    site_config: &'a config::SiteConfig,
    site_locale: &'a locale::Locale,
    args: &RenderArgs,
) -> PageContext<'a> {
    PageContext {
        config: site_config,
        locale: site_locale,
        theme: Theme { dark: args.dark },
        year: footer::current_year(),
    }
}

/// Write the page to `destination`, or to stdout when none is given.
fn emit(label: &str, destination: Option<&Path>, html: &str, posts: usize) -> std::io::Result<()> {
    match destination {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, html)?;
            println!("{}", output::format_render_output(label, Some(path), posts));
        }
        None => {
            print!("{html}");
            tracing::info!("{}", output::format_render_output(label, None, posts));
        }
    }
    Ok(())
}
