//! College portal client
//!
//! Command line entry point

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use college_portal::{
    catalog::{self, programs},
    config::Settings,
    models::{GalleryUploadForm, LoginForm, PartnershipForm, RegistrationForm},
    services::{gallery::DeleteOutcome, ServiceFactory},
    state::ItemKind,
    utils::{helpers, logging},
    validation::Attachment,
    PortalError, SessionState,
};

#[derive(Parser, Debug)]
#[command(name = "college-portal", version, about = "College website client: forms, admin dashboard and gallery")]
struct Cli {
    /// Settings file; `config.toml` in the working directory is used when present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the settings file
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend is reachable
    Health,
    /// Print the effective settings as TOML
    Config,
    /// List the choices offered by the forms and the gallery
    Options,
    /// List the programme catalogue
    Programs {
        #[arg(long, default_value = catalog::ALL_CATEGORIES)]
        category: String,
    },
    /// Submit an admissions registration
    Register(RegisterArgs),
    /// Submit a partnership application
    Partner(PartnerArgs),
    /// Log in as an admin and store the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "PORTAL_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the stored admin session
    Logout,
    /// Show who the stored session belongs to
    Whoami,
    /// Show dashboard totals and recent activity
    Dashboard,
    /// List registrations; `--expand ID` shows full details for that record
    Registrations {
        #[arg(long)]
        expand: Vec<String>,
    },
    /// List partnership applications; `--expand ID` shows full details
    Partnerships {
        #[arg(long)]
        expand: Vec<String>,
    },
    /// Browse or manage the gallery
    Gallery(GalleryCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    full_name: String,
    #[arg(long)]
    date_of_birth: String,
    #[arg(long)]
    gender: String,
    #[arg(long)]
    address: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    education: String,
    #[arg(long)]
    program: String,
    #[arg(long)]
    study_mode: String,
}

#[derive(Args, Debug)]
struct PartnerArgs {
    #[arg(long)]
    organization: String,
    #[arg(long)]
    contact: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long = "type")]
    partnership_type: String,
    #[arg(long)]
    message: String,
    /// Supporting document (PDF, Word or image)
    #[arg(long)]
    document: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GalleryCommand {
    #[command(subcommand)]
    command: GallerySubcommand,
}

#[derive(Subcommand, Debug)]
enum GallerySubcommand {
    /// List gallery images
    List {
        #[arg(long, default_value = catalog::ALL_CATEGORIES)]
        category: String,
    },
    /// Upload an image (admin)
    Upload {
        path: PathBuf,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value = college_portal::models::gallery::DEFAULT_UPLOAD_CATEGORY)]
        category: String,
    },
    /// Delete an image after confirmation (admin)
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::new()?,
    };
    if let Some(base_url) = cli.base_url.clone() {
        settings.api.base_url = base_url;
    }
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;
    debug!("{} starting against {}", college_portal::info(), settings.api.base_url);

    let services = ServiceFactory::from_settings(&settings)?;
    let result = run(cli.command, &settings, &services).await;
    services.shutdown();

    if let Some(error) = result.as_ref().err().and_then(|e| e.downcast_ref::<PortalError>()) {
        debug!(severity = %error.severity(), recoverable = error.is_recoverable(), "Command failed");
        if let PortalError::Validation(errors) = error {
            for field in errors.iter() {
                eprintln!("  {}: {}", field.field, field.message);
            }
            bail!("form is incomplete");
        }
    }
    result
}

async fn run(command: Command, settings: &Settings, services: &ServiceFactory) -> anyhow::Result<()> {
    match command {
        Command::Health => {
            let health = services.health_check().await?;
            println!("{} ({})", health.status, health.service.as_deref().unwrap_or("unknown service"));
            if !health.is_healthy() {
                bail!("backend reports {}", health.status);
            }
        }
        Command::Config => {
            print!("{}", toml::to_string_pretty(settings).context("serializing settings")?);
        }
        Command::Options => {
            print_choices("Programs", programs::ADMISSION_PROGRAMS);
            print_choices("Study modes", programs::STUDY_MODES);
            print_choices("Partnership types", programs::PARTNERSHIP_TYPES);
            print_choices("Gallery upload categories", catalog::UPLOAD_CATEGORIES);
            let program_filters: Vec<&str> = programs::PROGRAM_CATEGORIES.iter().map(|(id, _)| *id).collect();
            print_choices("Program filters", &program_filters);
            let gallery_filters: Vec<&str> = catalog::GALLERY_CATEGORIES.iter().map(|(id, _)| *id).collect();
            print_choices("Gallery filters", &gallery_filters);
        }
        Command::Programs { category } => {
            for program in catalog::filter_by_category(programs::PROGRAMS, &category) {
                println!("{} [{}] {}", program.title, program.duration, program.modes.join(", "));
                println!("    {}", program.description);
            }
        }
        Command::Register(args) => {
            let mut form = RegistrationForm {
                full_name: args.full_name,
                date_of_birth: args.date_of_birth,
                gender: args.gender,
                address: args.address,
                email: args.email,
                phone_number: args.phone,
                educational_background: args.education,
                program_applied: args.program,
                study_mode: args.study_mode,
            };
            let receipt = services.forms.submit_registration(&mut form).await?;
            println!("{}", receipt.message);
        }
        Command::Partner(args) => {
            let document = match &args.document {
                Some(path) => Some(Attachment::from_path(path, settings.uploads.max_file_size_bytes).await?),
                None => None,
            };
            let mut form = PartnershipForm {
                organization_name: args.organization,
                contact_person: args.contact,
                email: args.email,
                phone_number: args.phone,
                partnership_type: args.partnership_type,
                message: args.message,
                document,
            };
            let receipt = services.forms.submit_partnership(&mut form).await?;
            println!("{}", receipt.message);
        }
        Command::Login { username, password } => {
            let mut form = LoginForm::new(username, password);
            let session = services.session.login(&mut form).await?;
            println!("Logged in as {} ({})", session.admin_info.username, session.admin_info.role);
        }
        Command::Logout => {
            services.session.logout();
            println!("Logged out");
        }
        Command::Whoami => match services.session.restore().await {
            SessionState::Authenticated(session) => {
                println!("{} ({})", session.admin_info.username, session.admin_info.role)
            }
            _ => println!("Not logged in"),
        },
        Command::Dashboard => {
            require_admin(services).await?;
            services.dashboard.load().await?;
            let Some(data) = services.dashboard.summary() else {
                bail!("dashboard data unavailable");
            };
            println!("Registrations: {}", data.stats.total_registrations);
            println!("Partnerships:  {}", data.stats.total_partnerships);
            println!("Gallery:       {}", data.stats.total_gallery);
            println!();
            println!("Recent registrations:");
            for registration in &data.recent_registrations {
                println!("  {} - {}", registration.full_name, registration.program_applied);
            }
            println!("Recent partnerships:");
            for partnership in &data.recent_partnerships {
                println!("  {} - {}", partnership.organization_name, partnership.partnership_type);
            }
        }
        Command::Registrations { expand } => {
            require_admin(services).await?;
            let dashboard = &services.dashboard;
            for id in &expand {
                dashboard.toggle_expanded(ItemKind::Registration, id);
            }
            dashboard.load().await?;
            for r in dashboard.registrations() {
                println!("[{}] {} <{}> {} ({})", r.id, r.full_name, r.email, r.program_applied, r.study_mode);
                if dashboard.is_expanded(ItemKind::Registration, &r.id) {
                    println!("    Phone: {}", r.phone_number);
                    println!("    Date of birth: {}  Gender: {}", r.date_of_birth, r.gender);
                    println!("    Address: {}", r.address);
                    println!("    Education: {}", r.educational_background);
                    if let Some(filename) = &r.document_filename {
                        println!("    Document: {}", dashboard.document_url(filename));
                    }
                    println!("    Submitted: {}", helpers::format_created_at(r.created_at.as_deref()));
                }
            }
        }
        Command::Partnerships { expand } => {
            require_admin(services).await?;
            let dashboard = &services.dashboard;
            for id in &expand {
                dashboard.toggle_expanded(ItemKind::Partnership, id);
            }
            dashboard.load().await?;
            for p in dashboard.partnerships() {
                println!("[{}] {} - {} ({})", p.id, p.organization_name, p.contact_person, p.partnership_type);
                if dashboard.is_expanded(ItemKind::Partnership, &p.id) {
                    println!("    Email: {}  Phone: {}", p.email, p.phone_number);
                    println!("    {}", p.message);
                    if let Some(filename) = &p.document_filename {
                        println!("    Document: {}", dashboard.document_url(filename));
                    }
                    println!("    Submitted: {}", helpers::format_created_at(p.created_at.as_deref()));
                } else {
                    println!("    {}", helpers::truncate_text(&p.message, 80));
                }
            }
        }
        Command::Gallery(gallery) => run_gallery(gallery.command, settings, services).await?,
    }
    Ok(())
}

async fn run_gallery(command: GallerySubcommand, settings: &Settings, services: &ServiceFactory) -> anyhow::Result<()> {
    let gallery = &services.gallery;
    match command {
        GallerySubcommand::List { category } => {
            gallery.refresh().await?;
            for image in gallery.filtered(&category) {
                println!("[{}] {} ({})", image.id, image.title, image.category);
                println!("    {}", gallery.image_url(&image));
            }
        }
        GallerySubcommand::Upload { path, title, description, category } => {
            require_admin(services).await?;
            let image = Attachment::from_path(&path, settings.uploads.max_file_size_bytes).await?;
            info!(file = %path.display(), size = %helpers::format_file_size(image.size()), "Uploading gallery image");
            let mut form = GalleryUploadForm { title, description, category, image: Some(image) };
            let created = gallery.upload(&mut form).await?;
            println!("Uploaded [{}] {}", created.id, created.title);
        }
        GallerySubcommand::Delete { id, yes } => {
            require_admin(services).await?;
            let images = gallery.refresh().await?;
            let Some(image) = images.into_iter().find(|i| i.id == id) else {
                bail!("no gallery image with id {id}");
            };
            let outcome = if yes {
                gallery.delete(&image, &|_: &str| true).await?
            } else {
                gallery.delete(&image, &confirm_on_stdin).await?
            };
            match outcome {
                DeleteOutcome::Declined => println!("Cancelled"),
                DeleteOutcome::Deleted { remaining: Some(remaining) } => {
                    println!("Deleted; {} images remain", remaining.len())
                }
                DeleteOutcome::Deleted { remaining: None } => println!("Deleted; gallery could not be reloaded"),
            }
        }
    }
    Ok(())
}

fn print_choices(heading: &str, choices: &[&str]) {
    println!("{heading}:");
    for choice in choices {
        println!("  {choice}");
    }
}

async fn require_admin(services: &ServiceFactory) -> anyhow::Result<()> {
    if !services.session.restore().await.is_authenticated() {
        bail!("not logged in; run `college-portal login` first");
    }
    Ok(())
}

fn confirm_on_stdin(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
