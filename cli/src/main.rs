use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use flow::config::{API_KEY_VAR, IDENTITY_URL_VAR, VERIFY_URL_VAR};
use flow::{ClientConfig, Credentials};
use login_cli::{CliError, run_login, run_token};

#[derive(Parser, Debug)]
#[command(name = "login-cli", about = "Sign in with the identity provider and verify the token with the backend")]
struct Cli {
    #[arg(long, env = API_KEY_VAR, hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = IDENTITY_URL_VAR)]
    identity_url: Option<String>,

    #[arg(long, env = VERIFY_URL_VAR)]
    verify_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full login: sign in, fetch the ID token, verify with the backend.
    Login(CredentialArgs),
    /// Sign in and print the ID token.
    Token(CredentialArgs),
}

#[derive(Args, Debug)]
struct CredentialArgs {
    #[arg(long)]
    email: String,

    #[arg(long, env = "LOGIN_PASSWORD", hide_env_values = true)]
    password: String,
}

impl CredentialArgs {
    fn credentials(&self) -> Credentials {
        Credentials::new(self.email.trim(), self.password.clone())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::from_lookup(|key| match key {
        API_KEY_VAR => cli.api_key.clone(),
        IDENTITY_URL_VAR => cli.identity_url.clone(),
        VERIFY_URL_VAR => cli.verify_url.clone(),
        _ => None,
    })?;

    match cli.command {
        Command::Login(args) => {
            let user = run_login(&config, &args.credentials()).await?;
            println!("ok {} {}", user.uid, user.email);
        }
        Command::Token(args) => {
            let token = run_token(&config, &args.credentials()).await?;
            println!("{}", token.as_str());
        }
    }
    Ok(())
}
