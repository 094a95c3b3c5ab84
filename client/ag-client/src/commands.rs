use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Must match --password
        #[arg(long)]
        confirm_password: String,
    },

    /// Log in and persist the session
    Login {
        /// Defaults to the remembered email
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: String,
        /// Remember this email for the next login
        #[arg(long)]
        remember_me: bool,
    },

    /// Clear the persisted session
    Logout,

    /// Show the current session
    Whoami {
        /// Ask the server to verify the token
        #[arg(long)]
        verify: bool,
    },

    /// Navigate to a route through the auth gate and print where you end up
    Open { path: String },

    /// User management
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users
    List,

    /// Update a user's name, email, or password
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },

    /// Delete a user
    Delete { id: Uuid },
}
