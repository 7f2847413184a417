//! CLI Commands
//!
//! Each command drives the same flows the pages do: forms for sign-in,
//! sign-up and reset, the navigator for opening a path.
//!
//! Passwords come from `--password`, `HUB_PASSWORD`, or a hidden prompt,
//! in that order. The prompt keeps the secret out of process listings.

use anyhow::{Context, bail};
use auth::presentation::forms::{self, LoginForm, RegistrationForm, ResetPasswordForm};
use auth::presentation::layout::{LayoutShell, MenuAction};
use auth::presentation::routes::SITEMAP;
use auth::presentation::{Navigator, Screen};
use auth::{MockIdentityProvider, SessionStore, StoredIdentityRepository};
use clap::Subcommand;
use dialoguer::Password;
use platform::storage::FileStorage;

pub type Store = SessionStore<MockIdentityProvider, StoredIdentityRepository<FileStorage>>;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and persist the session
    Login {
        email: String,
        #[arg(long, env = "HUB_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Create an account and sign in
    Register {
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long, env = "HUB_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Defaults to the password when it was given up front
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Forget the persisted session
    Logout,
    /// Request password reset instructions
    ResetPassword { email: String },
    /// Show the signed-in identity
    Whoami,
    /// Render a path through the route guard
    Open { path: String },
    /// List every page
    Sitemap,
}

pub async fn run(command: Command, store: &Store) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => {
            let password = password_or_prompt(password, "Password")?;
            let mut navigator = Navigator::new("/login");
            let mut form = LoginForm::new(email, password);
            if !form.submit(store, &mut navigator).await {
                bail!(form.error.unwrap_or_default());
            }
            print_identity(store);
            println!("Now at {}", navigator.current());
        }
        Command::Register {
            email,
            name,
            confirm_password,
            password,
        } => {
            let (password, confirm_password) = match password {
                Some(password) => {
                    let confirm = confirm_password.unwrap_or_else(|| password.clone());
                    (password, confirm)
                }
                None => (
                    password_or_prompt(None, "Password")?,
                    password_or_prompt(confirm_password, "Confirm password")?,
                ),
            };
            let mut navigator = Navigator::new("/register");
            let mut form = RegistrationForm::new(name, email, password, confirm_password);
            if !form.submit(store, &mut navigator).await {
                bail!(form.error.unwrap_or_default());
            }
            print_identity(store);
            println!("Now at {}", navigator.current());
        }
        Command::Logout => {
            let mut navigator = Navigator::new("/dashboard");
            forms::logout(store, &mut navigator);
            println!("Signed out. Now at {}", navigator.current());
        }
        Command::ResetPassword { email } => {
            let mut form = ResetPasswordForm::new(email);
            if !form.submit(store).await {
                bail!(form.error.unwrap_or_default());
            }
            println!("Check your email for reset instructions.");
        }
        Command::Whoami => print_identity(store),
        Command::Open { path } => {
            let mut navigator = Navigator::new(path);
            let screen = navigator.render(&store.snapshot());
            print_screen(&screen);
            println!("History: {}", navigator.history().join(" -> "));
        }
        Command::Sitemap => {
            for group in SITEMAP {
                println!("{}", group.title);
                for link in group.links {
                    println!("  {:<20} {}", link.label, link.path);
                }
            }
        }
    }
    Ok(())
}

fn password_or_prompt(given: Option<String>, prompt: &str) -> anyhow::Result<String> {
    match given {
        Some(password) => Ok(password),
        None => Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .context("prompt failed"),
    }
}

fn print_identity(store: &Store) {
    match store.snapshot().identity() {
        Some(identity) => {
            println!("{} <{}>", identity.name, identity.email);
            println!("  id:     {}", identity.id);
            println!("  avatar: {}", identity.avatar_url);
        }
        None => println!("Not signed in"),
    }
}

fn print_screen(screen: &Screen) {
    match screen {
        Screen::Loading => println!("Loading..."),
        Screen::Public(route) => println!("{} ({})", route.title(), route.path()),
        Screen::Protected { route, shell } => {
            println!("{} ({})", route.title(), route.path());
            print_shell(shell);
        }
    }
}

fn print_shell(shell: &LayoutShell) {
    println!("[{}] {} <{}>", shell.brand, shell.user.name, shell.user.email);
    for entry in &shell.sidebar {
        let marker = if entry.active { '*' } else { ' ' };
        println!(" {marker} {}", entry.link.label);
    }
    let menu: Vec<_> = shell
        .header_menu
        .iter()
        .map(|item| match item.action {
            MenuAction::Navigate(path) => format!("{} ({path})", item.label),
            MenuAction::Logout => item.label.to_string(),
        })
        .collect();
    println!("Menu: {}", menu.join(" | "));
}
