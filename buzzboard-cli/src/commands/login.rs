//! The login stub: client-side validation only, then a fixed-delay
//! "redirect" to the matching dashboard. No credential is checked against
//! anything and no session is established.

use std::time::Duration;

use anyhow::Result;
use buzzboard_core::validate::{validate_admin_login, validate_student_login};
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::utils::tui;

const REDIRECT_DELAY: Duration = Duration::from_millis(700);

pub async fn student(roll_number: Option<String>, remember_me: bool) -> Result<()> {
    let roll_number = match roll_number {
        Some(roll) => roll,
        None => Input::<String>::new()
            .with_prompt("  Roll number")
            .interact_text()?,
    };
    let password = rpassword::prompt_password("  Password: ")?;

    if let Err(e) = validate_student_login(&roll_number, &password) {
        eprintln!("  {}", e.to_string().red());
        std::process::exit(1);
    }

    println!("  {}", "✓ Login successful! Redirecting...".green());
    redirect("student dashboard", remember_me).await;
    Ok(())
}

pub async fn admin(
    email: Option<String>,
    club_code: Option<String>,
    remember_me: bool,
) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("  Email")
            .interact_text()?,
    };
    let password = rpassword::prompt_password("  Password: ")?;
    let club_code = match club_code {
        Some(code) => code,
        None => Input::<String>::new()
            .with_prompt("  Club code")
            .interact_text()?,
    };

    if let Err(e) = validate_admin_login(&email, &password, &club_code) {
        eprintln!("  {}", e.to_string().red());
        std::process::exit(1);
    }

    println!("  {}", "✓ Admin login successful! Redirecting...".green());
    redirect("admin panel", remember_me).await;
    Ok(())
}

async fn redirect(destination: &str, remember_me: bool) {
    let spinner = tui::create_spinner("  Redirecting");
    tokio::time::sleep(REDIRECT_DELAY).await;
    spinner.finish_and_clear();

    println!("  Welcome to the {destination}.");
    if remember_me {
        println!("  {}", "You'll stay signed in on this device.".dimmed());
    }
}
