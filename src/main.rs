mod gateway;

use babel_channels::discord::DiscordChannel;
use babel_core::{config, traits::Translator};
use babel_providers::OpenAiTranslator;
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "babel",
    version,
    about = "Babel: react with a flag, get a translation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to Discord and translate flagged messages.
    Start,
    /// Translate text once through the configured service.
    Translate {
        /// Target language name, e.g. "Spanish".
        language: String,
        /// The text to translate.
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// List the supported flag emoji.
    Flags,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load(&cli.config)?;
    cfg.apply_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.babel.log_level)),
        )
        .init();

    match cli.command {
        Commands::Start => {
            cfg.validate()?;

            let translator = OpenAiTranslator::from_config(&cfg.translator)?;
            let channel = DiscordChannel::connect(&cfg.discord).await?;
            let flags = Arc::new(cfg.flag_table());

            let gw = gateway::Gateway::new(Arc::new(channel), Arc::new(translator), flags);
            Arc::new(gw).run().await?;
        }
        Commands::Translate { language, text } => {
            if text.is_empty() {
                anyhow::bail!("no text provided. Usage: babel translate <language> <text>");
            }
            cfg.validate_translator()?;

            let translator = OpenAiTranslator::from_config(&cfg.translator)?;
            let translation = translator.translate(&text.join(" "), &language).await?;
            println!("{translation}");
        }
        Commands::Flags => {
            for (emoji, language) in cfg.flag_table().sorted() {
                println!("{emoji}  {language}");
            }
        }
    }

    Ok(())
}
