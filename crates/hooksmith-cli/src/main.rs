use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use hooksmith_ai::GeminiProvider;
use hooksmith_core::form::{COPIED_NOTICE, LOADING_LABEL};
use hooksmith_core::{Clipboard, HookConfig, HookForm, HookService, HttpHookClient};
use hooksmith_server::HookServer;
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the hook generation server
    Serve {
        /// Address to bind (overrides HOOKSMITH_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides HOOKSMITH_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Gemini model (overrides GEMINI_MODEL)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Request hooks from a running server
    Generate {
        /// Product or service description
        #[arg(long)]
        product: String,

        /// Target audience description
        #[arg(long)]
        audience: String,

        /// Server base URL (overrides HOOKSMITH_URL)
        #[arg(long)]
        server: Option<String>,

        /// Copy hook N (1-based) without its angle label
        #[arg(long)]
        copy: Option<usize>,
    },
}

/// Clipboard for terminals: the copied text goes to the writer on its own
/// line, ready to pipe into a system clipboard tool.
struct TerminalClipboard<W: Write>(W);

impl<W: Write> Clipboard for TerminalClipboard<W> {
    fn write_text(&mut self, text: &str) -> hooksmith_core::Result<()> {
        writeln!(self.0, "{}", text)?;
        self.0.flush()?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenv().ok();

    // Logs go to stderr so stdout only carries hooks
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = HookConfig::from_env();

    match cli.command {
        Commands::Serve { host, port, model } => {
            let mut config = config;
            if let Some(host) = host {
                config = config.with_host(host);
            }
            if let Some(port) = port {
                config = config.with_port(port);
            }
            serve(config, model).await
        }
        Commands::Generate { product, audience, server, copy } => {
            let url = server.unwrap_or(config.server_url);
            generate(&url, product, audience, copy).await
        }
    }
}

async fn serve(config: HookConfig, model: Option<String>) -> Result<()> {
    let provider = match model {
        Some(model) => hooksmith_ai::gemini(&model),
        None => GeminiProvider::from_env(),
    }
    .context("Failed to initialize Gemini provider")?;
    info!("Initialized Gemini provider with model {}", provider.model());

    let addr = config.bind_addr();
    HookServer::new(HookService::new(provider))
        .start(&addr)
        .await
        .with_context(|| format!("Hook server on {} stopped", addr))
}

async fn generate(url: &str, product: String, audience: String, copy: Option<usize>) -> Result<()> {
    let mut form = HookForm {
        product_description: product,
        target_audience: audience,
        ..HookForm::default()
    };

    if !form.can_submit() {
        bail!("Both a product description and a target audience are required");
    }

    eprintln!("{}", LOADING_LABEL);
    let client = HttpHookClient::new(url);
    form.submit(&client).await;

    if !form.error.is_empty() {
        bail!("{}", form.error);
    }

    let Some(n) = copy else {
        for (i, hook) in form.hooks.iter().enumerate() {
            println!("{}. {}", i + 1, hook);
        }
        return Ok(());
    };

    for (i, hook) in form.hooks.iter().enumerate() {
        eprintln!("{}. {}", i + 1, hook);
    }

    let mut clipboard = TerminalClipboard(std::io::stdout().lock());
    match n.checked_sub(1).map(|index| form.copy(index, &mut clipboard)) {
        Some(Ok(Some(_))) => {
            eprintln!("{}", COPIED_NOTICE);
            Ok(())
        }
        Some(Err(e)) => Err(anyhow::Error::new(e).context("Failed to copy hook")),
        _ => bail!("No hook number {} (got {} hooks)", n, form.hooks.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_clipboard_writes_line() {
        let mut clipboard = TerminalClipboard(Vec::new());
        clipboard.write_text("Did you know this?").unwrap();
        assert_eq!(clipboard.0, b"Did you know this?\n");
    }

    #[test]
    fn test_form_copy_through_terminal_clipboard() {
        let form = HookForm {
            hooks: vec!["(Curiosity): Did you know this?".into()],
            ..HookForm::default()
        };
        let mut clipboard = TerminalClipboard(Vec::new());

        assert_eq!(form.copy(0, &mut clipboard).unwrap(), Some("Did you know this?"));
        assert_eq!(String::from_utf8(clipboard.0).unwrap(), "Did you know this?\n");
    }

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::parse_from([
            "hooksmith",
            "generate",
            "--product",
            "An online sourdough baking course",
            "--audience",
            "busy moms",
            "--copy",
            "2",
        ]);

        match cli.command {
            Commands::Generate { product, audience, server, copy } => {
                assert_eq!(product, "An online sourdough baking course");
                assert_eq!(audience, "busy moms");
                assert!(server.is_none());
                assert_eq!(copy, Some(2));
            }
            Commands::Serve { .. } => panic!("expected generate"),
        }
    }
}
