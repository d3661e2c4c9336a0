use clap::Parser;
use sapkey_form::{
    render_form, render_session, ClientConfig, Field, FormData, FormSession, HttpKeyClient,
    DEFAULT_API_URL,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Fill in the credit memo form and fetch a VBELN
#[derive(Debug, Parser)]
#[command(name = "sapkey-form", version)]
struct Cli {
    /// Sales Document Type
    #[arg(long, default_value = "")]
    auart: String,
    /// Sales Organization
    #[arg(long, default_value = "")]
    vkorg: String,
    /// Distribution Channel
    #[arg(long, default_value = "")]
    vtweg: String,
    /// Division
    #[arg(long, default_value = "")]
    spart: String,
    /// Material
    #[arg(long, default_value = "")]
    matnr: String,
    /// Order Quantity
    #[arg(long, default_value = "")]
    zmeng: String,

    /// Retrieval endpoint URL
    #[arg(long, env = "SAPKEY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

impl Cli {
    fn form_data(&self) -> FormData {
        FormData::new()
            .with(Field::Auart, &self.auart)
            .with(Field::Vkorg, &self.vkorg)
            .with(Field::Vtweg, &self.vtweg)
            .with(Field::Spart, &self.spart)
            .with(Field::Matnr, &self.matnr)
            .with(Field::Zmeng, &self.zmeng)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::new().with_api_url(cli.api_url.clone());
    let client = HttpKeyClient::new(&config)?;

    let mut session = FormSession::with_data(cli.form_data());
    let succeeded = session.submit(&client).await.is_ok();

    if succeeded {
        print!("{}", render_session(&session));
        Ok(ExitCode::SUCCESS)
    } else {
        print!("{}", render_form(&session));
        Ok(ExitCode::FAILURE)
    }
}
