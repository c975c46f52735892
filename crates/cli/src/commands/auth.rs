//! Session commands: register, login, logout, whoami.

use clap::Subcommand;

use verdant_tracker::AppError;
use verdant_tracker::services::AuthService;

use super::Context;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Create an account and log in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Profile photo URL
        #[arg(long)]
        photo_url: Option<String>,

        /// Password (validated, never stored)
        #[arg(short, long)]
        password: String,
    },
    /// Log in with a registered email
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,
    },
    /// Log out
    Logout,
    /// Show the current session
    Whoami,
}

pub fn run(action: AuthAction) -> Result<(), AppError> {
    let ctx = Context::load()?;
    let auth = AuthService::new(&ctx.backend);

    match action {
        AuthAction::Register {
            name,
            email,
            photo_url,
            password,
        } => {
            let user = auth.register(&name, &email, photo_url.as_deref(), &password)?;
            println!("Account created successfully!");
            println!("Logged in as {} <{}>", user.name, user.email);
        }
        AuthAction::Login { email } => {
            let user = auth.login(&email)?;
            println!("Welcome back!");
            println!("Logged in as {} <{}>", user.name, user.email);
        }
        AuthAction::Logout => {
            auth.logout()?;
            println!("Logged out.");
        }
        AuthAction::Whoami => match auth.current_user()? {
            Some(user) => println!("{} <{}>", user.name, user.email),
            None => println!("Not logged in."),
        },
    }

    Ok(())
}
