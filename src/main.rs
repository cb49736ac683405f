//! Labdesk
//!
//! Main application entry point: loads configuration, initializes logging,
//! opens the persisted session and dispatches the subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use labdesk::commands::{self, error_banner};
use labdesk::config::Settings;
use labdesk::models::{EventCategory, NoticeCategory, ProjectStatus, Role};
use labdesk::session::SessionStore;
use labdesk::utils::logging;
use labdesk::ApiClient;

#[derive(Parser)]
#[command(name = "labdesk", version, about = "Client for the Realistic Multimedia Lab management site")]
struct Cli {
    /// Override the API base URL from configuration
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lab profile and recent activity
    Home,
    /// Sign in and store the session
    Login {
        #[arg(long)]
        id: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the stored session
    Logout,
    /// Own profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Member listing and administration
    Members {
        #[command(subcommand)]
        command: MemberCommand,
    },
    /// Notices
    Notices {
        #[command(subcommand)]
        command: ContentCommand,
    },
    /// Laboratory news
    News {
        #[command(subcommand)]
        command: ContentCommand,
    },
    /// Resources
    Resources {
        #[command(subcommand)]
        command: ContentCommand,
    },
    /// Projects
    Projects {
        #[command(subcommand)]
        command: ProjectCommand,
    },
    /// Calendar and events
    Calendar {
        #[command(subcommand)]
        command: CalendarCommand,
    },
    /// Attendance check-in/out and statistics
    Attendance {
        #[command(subcommand)]
        command: AttendanceCommand,
    },
    /// Upload a file, printing its stored URL
    Upload { path: PathBuf },
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Show own record
    Show,
    /// Update profile fields; omitted fields stay unchanged
    Update {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        degree: Option<String>,
        /// Photo file to upload and link
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// Change own password
    Password {
        #[arg(long)]
        old: String,
        #[arg(long)]
        new: String,
    },
}

#[derive(Subcommand)]
enum MemberCommand {
    /// Current members (or alumni with --alumni)
    List {
        #[arg(long)]
        alumni: bool,
    },
    /// Add a member (admin)
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        login_id: String,
        #[arg(long)]
        password: String,
        #[arg(long, value_enum, default_value_t = RoleArg::Member)]
        role: RoleArg,
        #[arg(long)]
        admin: bool,
        #[arg(long)]
        degree: Option<String>,
    },
    /// Edit a member (admin)
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_enum)]
        role: Option<RoleArg>,
        #[arg(long)]
        admin: Option<bool>,
        #[arg(long)]
        degree: Option<String>,
        #[arg(long)]
        graduation_year: Option<i32>,
    },
    /// Reset a member's password (admin)
    SetPassword {
        id: i64,
        #[arg(long)]
        new: String,
    },
    /// Remove a member (admin)
    Remove { id: i64 },
    /// Persist a new display order as the full ordered id list (admin)
    SaveOrder {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
}

#[derive(Subcommand)]
enum ContentCommand {
    /// List entries
    List {
        #[arg(long, default_value_t = 0)]
        page: i64,
        #[arg(long, default_value_t = 10)]
        size: i64,
    },
    /// Show one entry with its inline attachments
    Show { id: i64 },
    /// Create an entry; images/files are uploaded and embedded
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long)]
        image: Vec<PathBuf>,
        #[arg(long)]
        file: Vec<PathBuf>,
    },
    /// Edit an entry's title and content
    Edit {
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Delete an entry
    Delete { id: i64 },
    /// Pin or unpin an entry
    Pin {
        id: i64,
        #[arg(long)]
        unpin: bool,
    },
    /// Upload attachment files onto an entry
    Attach {
        id: i64,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ProjectCommand {
    List {
        #[arg(long, default_value_t = 0)]
        page: i64,
        #[arg(long, default_value_t = 10)]
        size: i64,
    },
    Show { id: i64 },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        summary: Option<String>,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, value_enum, default_value_t = StatusArg::Planning)]
        status: StatusArg,
        #[arg(long)]
        members: Option<String>,
        #[arg(long)]
        image: Vec<PathBuf>,
        #[arg(long)]
        file: Vec<PathBuf>,
    },
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        summary: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[arg(long)]
        members: Option<String>,
        /// Inline image URL to strip from the description
        #[arg(long)]
        remove_image: Vec<String>,
        /// Inline file URL to strip from the description
        #[arg(long)]
        remove_file: Vec<String>,
    },
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum CalendarCommand {
    /// Render the month grid (defaults to the current month)
    Show {
        /// Month as YYYY-MM
        #[arg(long)]
        month: Option<String>,
        #[arg(long, value_enum, default_value_t = CategoryArg::Laboratory)]
        category: CategoryArg,
    },
    /// Add an event
    Add {
        #[arg(long)]
        title: String,
        /// Start time as YYYY-MM-DDTHH:MM
        #[arg(long)]
        start: String,
        /// End time as YYYY-MM-DDTHH:MM
        #[arg(long)]
        end: String,
        #[arg(long, value_enum, default_value_t = CategoryArg::Laboratory)]
        category: CategoryArg,
    },
    /// Edit an event; omitted fields stay unchanged
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },
    /// Delete an event
    Remove { id: i64 },
}

#[derive(Subcommand)]
enum AttendanceCommand {
    CheckIn,
    CheckOut,
    /// Monthly statistics (admin)
    Stats {
        /// Month as YYYY-MM, defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq)]
enum RoleArg {
    None,
    Professor,
    LabLead,
    Member,
    Alumni,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::None => Role::None,
            RoleArg::Professor => Role::Professor,
            RoleArg::LabLead => Role::LabLead,
            RoleArg::Member => Role::Member,
            RoleArg::Alumni => Role::Alumni,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq)]
enum StatusArg {
    Planning,
    Ongoing,
    Completed,
}

impl From<StatusArg> for ProjectStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Planning => ProjectStatus::Planning,
            StatusArg::Ongoing => ProjectStatus::Ongoing,
            StatusArg::Completed => ProjectStatus::Completed,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq)]
enum CategoryArg {
    Laboratory,
    Personal,
}

impl From<CategoryArg> for EventCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Laboratory => EventCategory::Laboratory,
            CategoryArg::Personal => EventCategory::Personal,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::new()?;
    if let Some(base_url) = cli.base_url {
        settings.api.base_url = base_url;
    }
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;
    debug!("{} starting", labdesk::info());

    // Open the persisted session and build the client
    let session = SessionStore::open(&settings.session)?;
    let client = ApiClient::new(&settings, session)?;

    let result = run(&client, cli.command).await;
    if let Err(error) = result {
        error_banner(&error);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(client: &ApiClient, command: Command) -> labdesk::Result<()> {
    match command {
        Command::Home => commands::home::handle_home(client).await,
        Command::Login { id, password } => {
            commands::auth::handle_login(client, &id, &password).await
        }
        Command::Logout => commands::auth::handle_logout(client).await,
        Command::Profile { command } => match command {
            ProfileCommand::Show => commands::profile::handle_show(client).await,
            ProfileCommand::Update { email, phone, degree, photo } => {
                commands::profile::handle_update(client, email, phone, degree, photo).await
            }
            ProfileCommand::Password { old, new } => {
                commands::profile::handle_password(client, &old, &new).await
            }
        },
        Command::Members { command } => match command {
            MemberCommand::List { alumni } => {
                commands::members::handle_list(client, alumni).await
            }
            MemberCommand::Add { name, login_id, password, role, admin, degree } => {
                commands::members::handle_add(
                    client, name, login_id, password, role.into(), admin, degree,
                )
                .await
            }
            MemberCommand::Edit { id, name, role, admin, degree, graduation_year } => {
                commands::members::handle_edit(
                    client,
                    id,
                    name,
                    role.map(Into::into),
                    admin,
                    degree,
                    graduation_year,
                )
                .await
            }
            MemberCommand::SetPassword { id, new } => {
                commands::members::handle_set_password(client, id, &new).await
            }
            MemberCommand::Remove { id } => commands::members::handle_remove(client, id).await,
            MemberCommand::SaveOrder { ids } => {
                commands::members::handle_save_order(client, ids).await
            }
        },
        Command::Notices { command } => {
            run_content(client, NoticeCategory::Notice, command).await
        }
        Command::News { command } => run_content(client, NoticeCategory::News, command).await,
        Command::Resources { command } => {
            run_content(client, NoticeCategory::Resource, command).await
        }
        Command::Projects { command } => match command {
            ProjectCommand::List { page, size } => {
                commands::projects::handle_list(client, Some(page), Some(size)).await
            }
            ProjectCommand::Show { id } => commands::projects::handle_show(client, id).await,
            ProjectCommand::Create {
                title,
                summary,
                description,
                status,
                members,
                image,
                file,
            } => {
                commands::projects::handle_create(
                    client,
                    title,
                    summary,
                    description,
                    status.into(),
                    members,
                    image,
                    file,
                )
                .await
            }
            ProjectCommand::Edit {
                id,
                title,
                summary,
                description,
                status,
                members,
                remove_image,
                remove_file,
            } => {
                commands::projects::handle_edit(
                    client,
                    id,
                    title,
                    summary,
                    description,
                    status.map(Into::into),
                    members,
                    remove_image,
                    remove_file,
                )
                .await
            }
            ProjectCommand::Delete { id } => {
                commands::projects::handle_delete(client, id).await
            }
        },
        Command::Calendar { command } => match command {
            CalendarCommand::Show { month, category } => {
                commands::calendar::handle_show(client, month, category.into()).await
            }
            CalendarCommand::Add { title, start, end, category } => {
                commands::calendar::handle_add_event(client, title, &start, &end, category.into())
                    .await
            }
            CalendarCommand::Edit { id, title, start, end, category } => {
                commands::calendar::handle_edit_event(
                    client,
                    id,
                    title,
                    start,
                    end,
                    category.map(Into::into),
                )
                .await
            }
            CalendarCommand::Remove { id } => {
                commands::calendar::handle_delete_event(client, id).await
            }
        },
        Command::Attendance { command } => match command {
            AttendanceCommand::CheckIn => commands::attendance::handle_check_in(client).await,
            AttendanceCommand::CheckOut => commands::attendance::handle_check_out(client).await,
            AttendanceCommand::Stats { month } => {
                commands::attendance::handle_stats(client, month).await
            }
        },
        Command::Upload { path } => {
            commands::require_session(client)?;
            let bytes = tokio::fs::read(&path).await?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "file".to_string());
            let response = client.upload(&name, bytes).await?;
            println!("{}", response.url);
            Ok(())
        }
    }
}

async fn run_content(
    client: &ApiClient,
    category: NoticeCategory,
    command: ContentCommand,
) -> labdesk::Result<()> {
    match command {
        ContentCommand::List { page, size } => {
            commands::notices::handle_list(client, category, Some(page), Some(size)).await
        }
        ContentCommand::Show { id } => commands::notices::handle_show(client, id).await,
        ContentCommand::Create { title, content, image, file } => {
            commands::notices::handle_create(client, category, title, content, image, file).await
        }
        ContentCommand::Edit { id, title, content } => {
            commands::notices::handle_edit(client, id, title, content).await
        }
        ContentCommand::Delete { id } => {
            commands::notices::handle_delete(client, category, id).await
        }
        ContentCommand::Pin { id, unpin } => {
            commands::notices::handle_pin(client, id, !unpin).await
        }
        ContentCommand::Attach { id, files } => {
            commands::notices::handle_attach(client, id, files).await
        }
    }
}
