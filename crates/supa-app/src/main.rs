mod cli;
mod terminal;

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use supa_ai::{run_conversation, ChatSurface, OpenAiClient, OpenAiConfig, ReplyMode, Session};
use supa_common::{ConfigError, SupaError};
use supa_config::{require_secret, toml_loader, ConfigOverrides, SecretChain, SupaConfig};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::terminal::TerminalSurface;

const DEFAULT_LOG_DIRECTIVE: &str = "supa=warn";

fn init_logging(directive: Option<&str>) {
    let directive = directive.unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let directive = directive.parse().unwrap_or_else(|_| {
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .expect("default log directive is valid")
    });

    // Logs go to stderr so they never interleave with the transcript
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file with command-line overrides applied.
fn load_config(args: &Args) -> Result<SupaConfig, ConfigError> {
    let overrides = ConfigOverrides {
        model: args.model.clone(),
        stream: args.no_stream.then_some(false),
    };
    supa_config::load_config(args.config.as_deref().map(Path::new), &overrides)
}

fn missing_token_message(config: &SupaConfig) -> String {
    let file = config
        .secrets
        .file
        .clone()
        .or_else(|| toml_loader::default_secrets_path().ok());
    match file {
        Some(path) => format!(
            "API token not configured. Set {name} or add {name} = \"...\" to {}",
            path.display(),
            name = config.secrets.name,
        ),
        None => format!("API token not configured. Set {}", config.secrets.name),
    }
}

/// 0 disables a timeout.
fn timeout_from_secs(secs: u32) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs.into()))
}

fn build_session(config: &SupaConfig) -> Session {
    let session = Session::new(config.endpoint.model.clone())
        .with_idle_timeout(timeout_from_secs(config.endpoint.idle_timeout_secs))
        .with_request_timeout(timeout_from_secs(config.endpoint.request_timeout_secs));
    match config.chat.system_prompt {
        Some(ref prompt) => session.with_system_prompt(prompt.clone()),
        None => session,
    }
}

async fn run(args: Args) -> Result<(), SupaError> {
    let config = load_config(&args)?;

    let mut surface = TerminalSurface::stdio(config.chat.placeholder.clone());
    surface.show_header(&config.chat.title);

    // Hard stop: without a token the session never accepts input
    let secrets = SecretChain::from_config(&config);
    let token = match require_secret(&secrets, &config.secrets.name) {
        Ok(token) => token,
        Err(e) => {
            surface.display_error(&missing_token_message(&config));
            return Err(e.into());
        }
    };

    let client_config = OpenAiConfig::new(token)
        .with_base_url(config.endpoint.base_url.clone())
        .with_connect_timeout(Duration::from_secs(
            config.endpoint.connect_timeout_secs.into(),
        ));
    tracing::debug!(?client_config, "completion client configured");
    let client = OpenAiClient::new(client_config).map_err(|e| SupaError::Ai(e.to_string()))?;

    let mode = if config.endpoint.stream {
        ReplyMode::Streaming
    } else {
        ReplyMode::Blocking
    };

    let mut session = build_session(&config);
    run_conversation(&mut session, &client, &mut surface, mode).await;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::info!("SUPA Chat v{} starting...", env!("CARGO_PKG_VERSION"));

    match run(args).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        // Already shown on the surface
        Err(SupaError::Config(ConfigError::ConfigurationMissing(_))) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("supa-chat: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn overrides_apply_on_top_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[endpoint]\nmodel = \"from-file\"\n").unwrap();

        let args = Args::try_parse_from([
            "supa-chat",
            "--config",
            path.to_str().unwrap(),
            "--model",
            "from-cli",
            "--no-stream",
        ])
        .unwrap();

        let config = load_config(&args).unwrap();
        assert_eq!(config.endpoint.model, "from-cli");
        assert!(!config.endpoint.stream);
    }

    #[test]
    fn blank_model_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let args = Args::try_parse_from([
            "supa-chat",
            "--config",
            path.to_str().unwrap(),
            "--model",
            " ",
        ])
        .unwrap();

        assert!(matches!(
            load_config(&args),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn session_follows_config() {
        let mut config = SupaConfig::default();
        config.chat.system_prompt = Some("Be brief.".into());
        let session = build_session(&config);
        assert_eq!(session.model(), "qwen3:0.6b");
        assert!(session.turns().is_empty());
    }

    #[test]
    fn zero_timeout_disables() {
        assert_eq!(timeout_from_secs(0), None);
        assert_eq!(timeout_from_secs(120), Some(Duration::from_secs(120)));
    }

    #[test]
    fn missing_token_message_names_secret_and_file() {
        let mut config = SupaConfig::default();
        config.secrets.file = Some("/etc/supa/secrets.toml".into());
        let message = missing_token_message(&config);
        assert!(message.contains("SUPA_API_TOKEN"));
        assert!(message.contains("/etc/supa/secrets.toml"));
    }
}
