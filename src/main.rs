use clap::{Parser, Subcommand};
use cosmic_numerology::{BirthDate, generate_profile, generate_report};
use cosmic_render_lopdf::RenderingConfig;
use cosmic_report::{
    DocumentComposer, HttpDocumentSource, LoggingHook, ProviderError, ReportError, ReportRequest,
    ReportService, ServiceConfig,
};
use cosmic_resource::FilesystemResourceProvider;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "cosmic-report", version, about = "Numerology reports with branded PDFs")]
struct Cli {
    /// JSON service configuration. Environment variables override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the numerology report and extended profile as JSON.
    Numerology {
        #[arg(long)]
        name: String,
        /// Date of birth, DD-MM-YYYY.
        #[arg(long)]
        dob: String,
        #[arg(long, default_value = "Other")]
        gender: String,
        #[arg(long, default_value = "English")]
        language: String,
    },
    /// Wrap an existing body document in cover and closing pages.
    Compose {
        #[arg(long)]
        url: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        dob: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run the whole flow: provider, compose and store.
    Generate {
        #[arg(long)]
        name: String,
        #[arg(long)]
        dob: String,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, default_value = "English")]
        language: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), ReportError> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ServiceConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Numerology {
            name,
            dob,
            gender,
            language,
        } => {
            let report = generate_report(&name, &gender, &dob, &language)?;
            let profile = generate_profile(&name, &dob)?;
            let output = json!({ "report": report, "profile": profile });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Compose {
            url,
            name,
            dob,
            out,
        } => {
            let date = BirthDate::parse(&dob)?;
            let resources = Arc::new(FilesystemResourceProvider::new(&config.assets_dir));
            let rendering = Arc::new(RenderingConfig::resolve(&config.assets, resources));
            let source = HttpDocumentSource::new(config.fetch_timeout()).map_err(ProviderError::from)?;
            let composer = DocumentComposer::new(rendering, Arc::new(source))
                .with_trailing_pages(config.trailing_pages);

            let document = composer.compose(&url, &name, &date).await?;
            std::fs::write(&out, document.bytes())?;
            println!(
                "Wrote {} pages ({} from the body) to {}",
                document.page_count(),
                document.body_pages(),
                out.display()
            );
        }
        Command::Generate {
            name,
            dob,
            gender,
            email,
            language,
        } => {
            let service = ReportService::from_config(&config)?.with_hook(Arc::new(LoggingHook));
            let request = ReportRequest {
                name,
                gender,
                dob,
                email,
                language,
            };
            let outcome = service.generate(&request).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            service.wait_for_hooks().await;
        }
    }
    Ok(())
}
