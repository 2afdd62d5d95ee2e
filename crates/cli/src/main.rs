mod config;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use copilot::comparison::ComparisonSession;
use copilot::{BriefExporter, Language, ProfileStore, StrategyGenerator, TranslationCache};
use copilot_core::budget::{compare_options, compute_cost, compute_roi, recommend_budget_options};
use copilot_core::domain::{AnimationStyle, FunnelStage, UserContext, UserInput, VideoType};
use copilot_core::{CoreError, ProductionConfig};
use indicatif::{ProgressBar, ProgressStyle};
use server::{create_router, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CopilotConfig;

#[derive(Parser)]
#[command(name = "video-copilot")]
#[command(about = "Video strategy copilot and budget estimator", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding config.toml and the saved profile.
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config.toml.
    Init,
    /// Run the HTTP API and generation proxy.
    Serve {
        #[arg(short, long)]
        port: Option<u16>,

        /// Open Swagger UI once the server is up.
        #[arg(long)]
        open: bool,
    },
    /// Estimate production cost.
    Cost {
        #[command(flatten)]
        production: ProductionArgs,

        #[arg(long)]
        json: bool,
    },
    /// Project return on a production.
    Roi {
        #[command(flatten)]
        production: ProductionArgs,

        #[command(flatten)]
        context: ContextArgs,

        #[arg(long)]
        json: bool,
    },
    /// Rank several productions, e.g. `--option whiteboard:60 --option 3dAnimation:90`.
    Compare {
        #[arg(long = "option", value_name = "STYLE[:SECONDS]", required = true, value_parser = parse_option)]
        options: Vec<ProductionConfig>,

        #[command(flatten)]
        context: ContextArgs,

        #[arg(long)]
        json: bool,
    },
    /// Compare the three starter budget options.
    Recommend {
        #[command(flatten)]
        context: ContextArgs,

        #[arg(long)]
        json: bool,
    },
    /// Generate a video strategy from a product brief.
    Strategy(StrategyArgs),
    /// Inspect or change the saved profile.
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Print the last saved form input.
    Show,
    /// Set the interface language (en, es, fr, de).
    Language { code: String },
    /// Print where the profile is stored.
    Path,
}

#[derive(Args)]
struct ProductionArgs {
    /// Style key or label, e.g. `whiteboard` or "2D Character".
    #[arg(short, long, value_parser = parse_style)]
    style: AnimationStyle,

    #[arg(short, long, default_value_t = 60)]
    duration: u32,

    #[arg(long, value_parser = VideoType::parse)]
    video_type: Option<VideoType>,

    #[arg(short, long, default_value_t = 1)]
    quantity: u32,

    #[arg(long)]
    expedited: bool,

    /// Number of additional language versions.
    #[arg(long, default_value_t = 0)]
    languages: u32,

    #[arg(long)]
    social_cuts: bool,
}

impl ProductionArgs {
    fn to_config(&self) -> ProductionConfig {
        ProductionConfig::new(self.style, self.duration)
            .with_video_type(self.video_type.unwrap_or_default())
            .with_quantity(self.quantity)
            .with_expedited(self.expedited)
            .with_languages(self.languages)
            .with_social_cuts(self.social_cuts)
    }
}

#[derive(Args)]
struct ContextArgs {
    #[arg(long, default_value = "SaaS")]
    industry: String,

    #[arg(long, default_value = "Series A")]
    stage: String,
}

impl ContextArgs {
    fn to_context(&self) -> UserContext {
        UserContext::new(&self.industry, &self.stage)
    }
}

#[derive(Args)]
struct StrategyArgs {
    /// What the product does.
    #[arg(short, long)]
    description: Option<String>,

    #[arg(long)]
    industry: Option<String>,

    #[arg(long)]
    stage: Option<String>,

    #[arg(long, value_parser = FunnelStage::parse)]
    funnel: Option<FunnelStage>,

    #[arg(long)]
    goal: Option<String>,

    /// Target duration in seconds.
    #[arg(long)]
    duration: Option<u32>,

    /// Preferred style label; repeatable.
    #[arg(long = "style")]
    styles: Vec<String>,

    /// Start from the last saved profile.
    #[arg(long)]
    use_profile: bool,

    /// Ask for a three-stage funnel plan.
    #[arg(long)]
    funnel_mode: bool,

    /// Show the top recommendations side by side.
    #[arg(long)]
    compare: bool,

    /// Write the brief (and comparison) as Markdown.
    #[arg(long)]
    export: bool,

    /// Open the exported brief.
    #[arg(long, requires = "export")]
    open: bool,

    #[arg(long)]
    lang: Option<String>,

    /// Overrides the proxy URL from config.toml.
    #[arg(long)]
    proxy_url: Option<String>,

    #[arg(long)]
    json: bool,
}

impl StrategyArgs {
    fn apply(&self, mut input: UserInput) -> UserInput {
        if let Some(description) = &self.description {
            input.description = description.clone();
        }
        if let Some(industry) = &self.industry {
            input.industry = industry.clone();
        }
        if let Some(stage) = &self.stage {
            input.stage = stage.clone();
        }
        if let Some(funnel) = self.funnel {
            input.funnel = funnel;
        }
        if let Some(goal) = &self.goal {
            input.goal = goal.clone();
        }
        if let Some(duration) = self.duration {
            input.duration = duration;
        }
        if !self.styles.is_empty() {
            input.styles = self.styles.clone();
        }
        input
    }
}

fn parse_style(value: &str) -> std::result::Result<AnimationStyle, String> {
    AnimationStyle::parse(value)
        .ok()
        .or_else(|| AnimationStyle::from_label(value))
        .ok_or_else(|| CoreError::UnknownStyle(value.to_string()).to_string())
}

fn parse_option(value: &str) -> std::result::Result<ProductionConfig, String> {
    let (style, duration) = match value.split_once(':') {
        Some((style, secs)) => {
            let secs = secs
                .parse::<u32>()
                .map_err(|_| format!("invalid duration in {value:?}"))?;
            (style, secs)
        }
        None => (value, 60),
    };
    Ok(ProductionConfig::new(parse_style(style)?, duration).with_name(value))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = cli.config_dir.unwrap_or_else(CopilotConfig::default_dir);

    match cli.command {
        Commands::Init => init_config(&config_dir),
        Commands::Serve { port, open } => {
            let config = CopilotConfig::load(&config_dir)?;
            serve(port.unwrap_or(config.server.port), open).await
        }
        Commands::Cost { production, json } => {
            init_tracing("warn");
            let config = production.to_config();
            let breakdown = compute_cost(&config);
            if json {
                print_json(&breakdown)
            } else {
                render::cost(&config.display_name(), &breakdown);
                Ok(())
            }
        }
        Commands::Roi {
            production,
            context,
            json,
        } => {
            init_tracing("warn");
            let projection = compute_roi(&production.to_config(), &context.to_context());
            if json {
                print_json(&projection)
            } else {
                render::roi(&projection);
                Ok(())
            }
        }
        Commands::Compare {
            options,
            context,
            json,
        } => {
            init_tracing("warn");
            let results = compare_options(&options, &context.to_context());
            if json {
                print_json(&results)
            } else {
                render::comparison_results("Option comparison", &results);
                Ok(())
            }
        }
        Commands::Recommend { context, json } => {
            init_tracing("warn");
            let results = recommend_budget_options(&context.to_context());
            if json {
                print_json(&results)
            } else {
                render::comparison_results("Recommended budget options", &results);
                Ok(())
            }
        }
        Commands::Strategy(args) => {
            init_tracing("warn");
            let config = CopilotConfig::load(&config_dir)?;
            strategy(args, &config, &config_dir).await
        }
        Commands::Profile { command } => profile(command, &config_dir),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_config(config_dir: &Path) -> Result<()> {
    if config_dir.join(config::CONFIG_FILE).exists() {
        println!("Config already exists at {}", config_dir.display());
        return Ok(());
    }

    let path = CopilotConfig::default().save(config_dir)?;
    println!("Created {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Run 'video-copilot serve' with GEMINI_API_KEY set");
    println!(
        "  2. Set [proxy] url = \"http://localhost:{}/api/generate\" in the config",
        config::DEFAULT_PORT
    );
    Ok(())
}

async fn serve(port: u16, open_browser: bool) -> Result<()> {
    init_tracing("video_copilot=info,server=info,copilot=info,tower_http=info");

    let proxy_config = server::config::ProxyConfig::from_env()?;
    let model = proxy_config.model.clone();
    let app = create_router(AppState::new(proxy_config));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    println!();
    println!("Video Copilot - {}", model);
    println!("════════════════════════════════════════");
    println!();
    println!("  API Server:  http://localhost:{}", port);
    println!("  Proxy:       http://localhost:{}/api/generate", port);
    println!("  Swagger UI:  http://localhost:{}/swagger-ui", port);
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    if open_browser {
        let swagger_url = format!("http://localhost:{}/swagger-ui", port);
        tokio::spawn(async move {
            tokio::time::sleep(tokio::time::Duration::from_millis(500)).await;
            if let Err(e) = open::that(&swagger_url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        });
    }

    axum::serve(listener, app).await?;

    Ok(())
}

fn translations(config: &CopilotConfig) -> TranslationCache {
    match &config.export.translations_dir {
        Some(dir) => TranslationCache::new(dir),
        None => TranslationCache::builtin(),
    }
}

async fn strategy(args: StrategyArgs, config: &CopilotConfig, config_dir: &Path) -> Result<()> {
    let store = ProfileStore::with_dir(config_dir);
    let mut t = translations(config);

    let language = match &args.lang {
        Some(code) => {
            let Some(language) = Language::parse(code) else {
                bail!("Unsupported language {code:?}");
            };
            if let Err(e) = store.save_language(language) {
                tracing::warn!("Failed to save language: {}", e);
            }
            language
        }
        None => store.load_language().unwrap_or_default(),
    };
    t.set_language(language.code());

    let base = if args.use_profile {
        match store.load_profile() {
            Some(profile) => {
                println!("{}", t.t("notifications.profileLoaded").dimmed());
                profile
            }
            None => UserInput::default(),
        }
    } else {
        UserInput::default()
    };
    let input = args.apply(base);

    if input.description.trim().is_empty() {
        bail!(t.t("notifications.formIncomplete"));
    }

    match store.save_profile(&input) {
        Ok(()) => tracing::debug!("{}", t.t("notifications.profileSaved")),
        Err(e) => tracing::warn!("Failed to save profile: {}", e),
    }

    let endpoint = args.proxy_url.as_deref().or(config.proxy_url());
    let generator = StrategyGenerator::from_endpoint(endpoint, config.proxy_timeout());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Generating strategy...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    let outcome = generator.generate(&input, args.funnel_mode).await;
    spinner.finish_and_clear();

    if args.json {
        print_json(outcome.result())?;
    } else {
        render::strategy(&outcome, &t);
    }

    let result = outcome.result();

    if args.compare {
        let mut session = ComparisonSession::new();
        let options = session.enable(&result.recommendations, &input);
        if args.json {
            print_json(&session.export())?;
        } else {
            render::comparison_options(options, &t);
        }
    }

    if args.export {
        let exporter = BriefExporter::new(&config.export.dir).with_translations(t.clone());
        match exporter.export_brief(result, &input) {
            Ok(path) => {
                println!("{} {}", t.t("export.exportSuccess").green(), path.display());
                if args.open {
                    if let Err(e) = open::that(&path) {
                        tracing::warn!("Failed to open {}: {}", path.display(), e);
                    }
                }
            }
            Err(e) => println!(
                "{} {}: {}",
                "warning:".yellow().bold(),
                t.t("export.exportError"),
                e
            ),
        }

        if args.compare {
            match exporter.export_comparison(&result.recommendations, &input) {
                Ok(path) => println!("{} {}", t.t("export.exportSuccess").green(), path.display()),
                Err(e) => println!(
                    "{} {}: {}",
                    "warning:".yellow().bold(),
                    t.t("export.exportError"),
                    e
                ),
            }
        }
    }

    Ok(())
}

fn profile(command: ProfileCommand, config_dir: &Path) -> Result<()> {
    let store = ProfileStore::with_dir(config_dir);

    match command {
        ProfileCommand::Show => match store.load_profile() {
            Some(input) => print_json(&input)?,
            None => println!("No saved profile."),
        },
        ProfileCommand::Language { code } => {
            let Some(language) = Language::parse(&code) else {
                let supported: Vec<String> = TranslationCache::supported_languages()
                    .into_iter()
                    .map(|(code, name)| format!("{code} ({name})"))
                    .collect();
                bail!("Unsupported language {code:?}. Supported: {}", supported.join(", "));
            };
            store
                .save_language(language)
                .context("Failed to save language")?;
            println!("Language set to {}", language.name());
        }
        ProfileCommand::Path => println!("{}", store.path().display()),
    }

    Ok(())
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}
