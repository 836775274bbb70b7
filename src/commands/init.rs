//! Application configuration initialization command.
//!
//! First-run setup: an interactive wizard for the configuration file,
//! plus marking the onboarding flag in the persisted state.

use crate::{
    libs::{config::Config, messages::Message, state::AppState},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Reset configuration to defaults instead of running the wizard
    #[arg(short, long)]
    reset: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.reset {
        Config::default().save()?;
        msg_success!(Message::ConfigSaved);
        return Ok(());
    }

    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);

    let mut state = AppState::read()?;
    if !state.has_seen_onboarding {
        state.has_seen_onboarding = true;
        state.save()?;
        msg_success!(Message::OnboardingCompleted);
    }

    Ok(())
}
