use clap::{Parser, Subcommand};

/// Command-line interface definition for CampusHub
/// CLI campus portal: events, complaints, and feedback over SQLite
#[derive(Parser)]
#[command(
    name = "campushub",
    version = env!("CARGO_PKG_VERSION"),
    about = "A campus community portal CLI: browse events, file complaints, and share feedback",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user id for one invocation, without touching the stored session
    #[arg(global = true, long = "as", value_name = "USER_ID")]
    pub acting_user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for invalid fields")]
        check: bool,
    },

    /// Sign in as a user (stores the identity in the config file)
    Login {
        /// Opaque user id, e.g. "u-7f3a" or a campus email
        user_id: String,

        #[arg(long = "name", help = "Display name to greet you with")]
        name: Option<String>,
    },

    /// Sign out (clears the stored identity)
    Logout,

    /// Show the signed-in identity
    Whoami,

    /// Show campus stats and the next upcoming events
    Dashboard,

    /// Browse or create campus events and notices
    Events {
        #[command(subcommand)]
        action: EventsAction,
    },

    /// Submit and track your complaints
    Complaints {
        #[command(subcommand)]
        action: ComplaintsAction,
    },

    /// Share feedback and suggestions
    Feedback {
        #[command(subcommand)]
        action: FeedbackAction,
    },

    /// Print rows from the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum EventsAction {
    /// List events, soonest first
    List {
        #[arg(
            long,
            help = "Filter by category: general, academics, clubs, hostel, or all"
        )]
        category: Option<String>,

        #[arg(long, help = "Emit the list as JSON")]
        json: bool,
    },

    /// Create a new event (requires being signed in)
    Add {
        #[arg(long, help = "Event title")]
        title: String,

        #[arg(long, help = "Optional longer description")]
        description: Option<String>,

        #[arg(long, help = "Category: general, academics, clubs, hostel")]
        category: Option<String>,

        /// When the event happens (YYYY-MM-DD HH:MM)
        #[arg(long = "date", value_name = "DATE")]
        event_date: String,
    },
}

#[derive(Subcommand)]
pub enum ComplaintsAction {
    /// List your complaints, newest first
    List {
        #[arg(long, help = "Emit the list as JSON")]
        json: bool,
    },

    /// File a new complaint (requires being signed in)
    Add {
        #[arg(long, help = "Complaint title")]
        title: String,

        #[arg(long, help = "What happened")]
        description: String,

        #[arg(long, help = "Category: hostel, academics, other")]
        category: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum FeedbackAction {
    /// List your feedback, newest first
    List {
        #[arg(long, help = "Emit the list as JSON")]
        json: bool,
    },

    /// Share new feedback (requires being signed in)
    Add {
        #[arg(long, help = "Feedback title")]
        title: String,

        #[arg(long, help = "Your suggestion or comment")]
        message: String,
    },
}
