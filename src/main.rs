use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing::info;

use aymara_language_server::catalog::Catalog;
use aymara_language_server::logging::init_logger;
use aymara_language_server::lsp::backend::AymaraBackend;

/// Completion server for the aym teaching language
#[derive(Debug, Parser)]
#[command(name = "aymara-language-server", version, about)]
struct Args {
    /// Communicate over stdin/stdout. Accepted for editor compatibility;
    /// stdio is the only transport and is used whether or not this is given.
    #[arg(long)]
    stdio: bool,

    /// Log filter for stderr, e.g. "debug" or "aymara_language_server=trace".
    /// Falls back to RUST_LOG, then "info".
    #[arg(long)]
    log_level: Option<String>,

    /// Disable ANSI colors in stderr output
    #[arg(long)]
    no_color: bool,

    /// Do not write a session log to the user cache directory
    #[arg(long)]
    no_file_logging: bool,

    /// Process ID of the editor that launched the server
    #[arg(long)]
    client_process_id: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = init_logger(args.no_color, args.log_level.as_deref(), !args.no_file_logging)?;

    info!(
        "Starting {} v{} (transport=stdio, --stdio given: {}, client_process_id={:?})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        args.stdio,
        args.client_process_id
    );

    let catalog = Catalog::shared();
    let client_process_id = args.client_process_id;
    let (service, socket) =
        LspService::new(move |client| AymaraBackend::new(client, catalog, client_process_id));

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();
    Server::new(stdin, stdout, socket).serve(service).await;

    info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdio_flag_is_optional() {
        let args = Args::try_parse_from(["aymara-language-server"]).unwrap();
        assert!(!args.stdio);

        let args = Args::try_parse_from(["aymara-language-server", "--stdio"]).unwrap();
        assert!(args.stdio);
    }

    #[test]
    fn test_logging_and_pid_flags() {
        let args = Args::try_parse_from([
            "aymara-language-server",
            "--log-level",
            "debug",
            "--no-color",
            "--no-file-logging",
            "--client-process-id",
            "77",
        ])
        .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.no_color);
        assert!(args.no_file_logging);
        assert_eq!(args.client_process_id, Some(77));
    }
}
