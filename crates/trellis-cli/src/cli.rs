use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "A command-line client for Trellis kanban servers", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Server API base URL (or set TRELLIS_SERVER)
    #[arg(long, value_name = "URL", env = "TRELLIS_SERVER", global = true)]
    pub server: Option<String>,

    /// Path to the credentials file (or set TRELLIS_CREDENTIALS)
    #[arg(long, value_name = "FILE", env = "TRELLIS_CREDENTIALS", global = true)]
    pub credentials: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Account and session operations
    Auth(AuthCommand),
    /// Board operations
    Board(BoardCommand),
    /// List operations
    List(ListCommand),
    /// Card operations
    Card(CardCommand),
    /// Board sharing operations
    Invite(InviteCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Auth commands
#[derive(Args)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub action: AuthAction,
}

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in to the server
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and drop stored credentials
    Logout,
    /// Show whether a session is stored
    Status,
    /// Request a password reset email
    RequestPasswordReset {
        #[arg(long)]
        email: String,
    },
    /// Set a new password with an emailed reset token
    ResetPassword {
        #[arg(long)]
        token: String,
        #[arg(long)]
        password: String,
    },
    /// Confirm an email address with an emailed token
    VerifyEmail {
        #[arg(long)]
        token: String,
    },
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Create a new board
    Create {
        #[arg(long)]
        name: String,
        /// Make the board visible to its members only
        #[arg(long)]
        private: bool,
    },
    /// List all boards
    List,
    /// Get a board record
    Get {
        #[arg(long)]
        id: Uuid,
    },
    /// Show a board with its lists and cards
    Show {
        #[arg(long)]
        id: Uuid,
    },
    /// Update a board
    Update(BoardUpdateArgs),
    /// Delete a board
    Delete {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
pub struct BoardUpdateArgs {
    #[arg(long)]
    pub id: Uuid,
    #[arg(long)]
    pub name: Option<String>,
    /// Change visibility: true for private, false for public
    #[arg(long)]
    pub private: Option<bool>,
}

// List commands
#[derive(Args)]
pub struct ListCommand {
    #[command(subcommand)]
    pub action: ListAction,
}

#[derive(Subcommand)]
pub enum ListAction {
    /// Create a new list on a board
    Create {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        color: Option<String>,
    },
    /// List the lists of a board
    List {
        #[arg(long)]
        board_id: Uuid,
    },
    /// Get a specific list
    Get {
        #[arg(long)]
        id: Uuid,
    },
    /// Update a list
    Update(ListUpdateArgs),
    /// Delete a list
    Delete {
        #[arg(long)]
        id: Uuid,
    },
    /// Move a list to a new position on its board
    Reorder {
        #[arg(long)]
        id: Uuid,
        /// Target position, 1-based
        #[arg(long)]
        position: usize,
    },
}

#[derive(Args)]
pub struct ListUpdateArgs {
    #[arg(long)]
    pub id: Uuid,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
    /// Remove the list's color
    #[arg(long)]
    pub clear_color: bool,
}

// Card commands
#[derive(Args)]
pub struct CardCommand {
    #[command(subcommand)]
    pub action: CardAction,
}

#[derive(Subcommand)]
pub enum CardAction {
    /// Create a new card at the tail of a list
    Create(CardCreateArgs),
    /// List all cards of a board
    List {
        #[arg(long)]
        board_id: Uuid,
    },
    /// Get a specific card
    Get {
        #[arg(long)]
        id: Uuid,
    },
    /// Update a card
    Update(CardUpdateArgs),
    /// Move a card to a list and position
    Move {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        list_id: Uuid,
        /// Target position, 1-based; appended when omitted
        #[arg(long)]
        position: Option<usize>,
    },
    /// Delete a card
    Delete {
        #[arg(long)]
        id: Uuid,
    },
    /// Add a comment to a card
    AddComment {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        text: String,
    },
    /// Remove a comment from a card
    DeleteComment {
        #[arg(long)]
        card_id: Uuid,
        #[arg(long)]
        comment_id: Uuid,
    },
}

#[derive(Args)]
pub struct CardCreateArgs {
    #[arg(long)]
    pub list_id: Uuid,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct CardUpdateArgs {
    #[arg(long)]
    pub id: Uuid,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Clear the card's description
    #[arg(long)]
    pub clear_description: bool,
}

// Invitation commands
#[derive(Args)]
pub struct InviteCommand {
    #[command(subcommand)]
    pub action: InviteAction,
}

#[derive(Subcommand)]
pub enum InviteAction {
    /// Invite a user to a board by email
    Send {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        email: String,
    },
    /// List invitations addressed to you
    List,
    /// Accept an invitation
    Accept {
        #[arg(long)]
        id: Uuid,
    },
    /// Decline an invitation
    Decline {
        #[arg(long)]
        id: Uuid,
    },
}
