use anyhow::Context;
use clap::Parser as ClapParser;
use std::path::PathBuf;
use strand::config::{ConfigLoader, ProbeConfig};
use strand::probe::{self, ProbeRequest, State};
use strand::step::build_chain;
use strand_core::Selection;
use strand_webdriver::WebDriverSession;
use tracing::info;

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Chain steps applied in order: css=<sel> xpath=<expr> link=<text> label=<text> at=<n> all
    #[arg(required = true)]
    steps: Vec<String>,

    /// Config file. Defaults to ./strand.yaml, then ~/.strand/config.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// URL of the WebDriver server (overrides the config file)
    #[arg(short, long, env = "STRAND_WEBDRIVER_URL")]
    webdriver_url: Option<String>,

    /// Page to open before resolving
    #[arg(short, long)]
    url: Option<String>,

    /// Read the text of the single selected element
    #[arg(long)]
    text: bool,

    /// Read an attribute of the single selected element
    #[arg(long)]
    attribute: Option<String>,

    /// Read a computed CSS property of the single selected element
    #[arg(long)]
    css_property: Option<String>,

    /// Check whether every selected element is in this state
    #[arg(long, value_enum)]
    state: Option<State>,

    /// Click the single selected element
    #[arg(long)]
    click: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

async fn load_config(args: &Args) -> anyhow::Result<ProbeConfig> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => ConfigLoader::load_default().await?,
    };
    if let Some(url) = &args.webdriver_url {
        config.webdriver_url = url.clone();
    }
    config.output.pretty |= args.pretty;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over --verbose
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if args.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let chain = build_chain(args.steps.as_slice())?;
    let config = load_config(&args).await?;
    let request = ProbeRequest {
        text: args.text,
        attribute: args.attribute.clone(),
        css_property: args.css_property.clone(),
        state: args.state,
        click: args.click,
    };

    if let Some(page) = &args.url {
        url::Url::parse(page).with_context(|| format!("invalid page URL '{}'", page))?;
    }

    let capabilities = (!config.capabilities.is_empty()).then(|| config.capabilities.clone());
    let session = WebDriverSession::connect(&config.webdriver_url, capabilities).await?;
    info!("Session ready.");

    // Everything after connect must reach close, failures included
    let outcome = async {
        if let Some(page) = &args.url {
            session.goto(page).await?;
        }
        let selection = Selection::with_chain(session.root(), chain);
        Ok::<_, anyhow::Error>(probe::run(&selection, &request).await?)
    }
    .await;
    let report = probe::close_after(outcome, session.close()).await?;

    let rendered = if config.output.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", rendered);
    Ok(())
}
