//! Honeyshop CLI - Inventory seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the inventory from the bundled catalog (idempotent)
//! hs-cli seed
//!
//! # Inventory management
//! hs-cli inventory list
//! hs-cli inventory set-quantity -i h1 -q 12
//! hs-cli inventory add -n "Heather Honey" -p 14.50 -c raw-honey -q 6
//! hs-cli inventory remove -i h1
//! hs-cli inventory feature -i h1
//!
//! # User management
//! hs-cli user create -e admin@example.com -p <password> --admin
//! hs-cli user list
//! hs-cli user set-admin -i <user-id>
//! ```
//!
//! The data directory is taken from `HONEYSHOP_DATA_DIR` (default `./data`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hs-cli")]
#[command(author, version, about = "Honeyshop CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the inventory from the bundled catalog
    Seed,
    /// Manage inventory items
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum InventoryAction {
    /// List all items with stock counts
    List,
    /// Overwrite an item's stock count
    SetQuantity {
        /// Item id
        #[arg(short, long)]
        id: String,

        /// New stock count (negative values are rejected)
        #[arg(short, long, allow_hyphen_values = true)]
        quantity: i64,
    },
    /// Add a new item with a freshly generated id
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Display description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Unit price, e.g. 12.50
        #[arg(short, long)]
        price: String,

        /// Image reference
        #[arg(short, long, default_value = "")]
        image: String,

        /// Category id
        #[arg(short, long)]
        category: String,

        /// Initial stock count
        #[arg(short, long, default_value_t = 0)]
        quantity: u32,

        /// Feature the item immediately
        #[arg(long)]
        featured: bool,
    },
    /// Remove an item
    Remove {
        /// Item id
        #[arg(short, long)]
        id: String,
    },
    /// Set the featured flag (clears it with --off)
    Feature {
        /// Item id
        #[arg(short, long)]
        id: String,

        /// Clear the flag instead of setting it
        #[arg(long)]
        off: bool,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (min 8 characters)
        #[arg(short, long)]
        password: String,

        /// Create the user with admin privileges
        #[arg(long)]
        admin: bool,
    },
    /// List all users
    List,
    /// Set the admin flag (clears it with --off)
    SetAdmin {
        /// User id
        #[arg(short, long)]
        id: String,

        /// Clear the flag instead of setting it
        #[arg(long)]
        off: bool,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => commands::seed::run()?,
        Commands::Inventory { action } => match action {
            InventoryAction::List => commands::inventory::list()?,
            InventoryAction::SetQuantity { id, quantity } => {
                commands::inventory::set_quantity(&id, quantity)?;
            }
            InventoryAction::Add {
                name,
                description,
                price,
                image,
                category,
                quantity,
                featured,
            } => {
                commands::inventory::add(
                    &name,
                    &description,
                    &price,
                    &image,
                    &category,
                    quantity,
                    featured,
                )?;
            }
            InventoryAction::Remove { id } => commands::inventory::remove(&id)?,
            InventoryAction::Feature { id, off } => commands::inventory::feature(&id, !off)?,
        },
        Commands::User { action } => match action {
            UserAction::Create {
                email,
                password,
                admin,
            } => commands::user::create(&email, &password, admin)?,
            UserAction::List => commands::user::list()?,
            UserAction::SetAdmin { id, off } => commands::user::set_admin(&id, !off)?,
        },
    }
    Ok(())
}
