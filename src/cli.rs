//! Command-line surface.
//!
//! Without a subcommand the terminal UI starts. Each subcommand runs one
//! intent through the same coordinator and store the UI uses, then prints
//! the outcome.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::effects::{EffectCoordinator, ItemIntent};
use crate::model::{ItemId, ItemPatch, NewItem};
use crate::store::{ItemAction, ItemOutcome, ItemStore};

#[derive(Parser, Debug)]
#[command(name = "itemdesk", version)]
#[command(about = "Browse and edit items of a REST backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file to read instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides config and environment
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Screen to open the terminal UI on (/, /create, /:id, /:id/edit)
    #[arg(long, default_value = "/", value_name = "PATH")]
    pub path: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List all items
    #[command(alias = "ls")]
    List,

    /// Show one item
    Show { id: ItemId },

    /// Create an item
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// Change the name and/or description of an item
    Update {
        id: ItemId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an item
    #[command(alias = "rm")]
    Delete { id: ItemId },
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Nothing to update: pass --name and/or --description")]
    NothingToUpdate,

    /// The request failed; carries the store's error message.
    #[error("{0}")]
    Failed(String),

    #[error("Request was never completed")]
    Interrupted,

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

impl Cli {
    /// Load the config from `--config` (or the default path), apply the
    /// environment, then `--base-url`.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_with_env(&path, |key| std::env::var(key).ok())?;
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
            config.validate()?;
        }
        Ok(config)
    }
}

impl Command {
    pub fn into_intent(self) -> Result<ItemIntent, CommandError> {
        match self {
            Command::List => Ok(ItemIntent::Fetch),
            Command::Show { id } => Ok(ItemIntent::GetOne(id)),
            Command::Create { name, description } => {
                if name.trim().is_empty() {
                    return Err(CommandError::EmptyName);
                }
                Ok(ItemIntent::Add(NewItem { name, description }))
            }
            Command::Update {
                id,
                name,
                description,
            } => {
                if name.as_deref().is_some_and(|n| n.trim().is_empty()) {
                    return Err(CommandError::EmptyName);
                }
                let patch = ItemPatch { name, description };
                if patch.is_empty() {
                    return Err(CommandError::NothingToUpdate);
                }
                Ok(ItemIntent::Update { id, patch })
            }
            Command::Delete { id } => Ok(ItemIntent::Delete(id)),
        }
    }
}

/// Run one command to completion and return the text to print.
pub async fn execute(
    command: Command,
    effects: &EffectCoordinator,
    store: &mut ItemStore,
) -> Result<String, CommandError> {
    let intent = command.into_intent()?;
    // The terminal action is queued before the task finishes.
    if let Err(err) = effects.dispatch(intent).await {
        tracing::error!(error = %err, "Request task aborted");
        return Err(CommandError::Interrupted);
    }

    match store.recv_terminal().await {
        Some(action) => render_outcome(action),
        None => Err(CommandError::Interrupted),
    }
}

/// Text for a terminal action: JSON for reads, the success message (plus
/// the item, when there is one) for mutations.
pub fn render_outcome(action: ItemAction) -> Result<String, CommandError> {
    let outcome = match action {
        ItemAction::Succeeded(outcome) => outcome,
        ItemAction::Failed { message, .. } => return Err(CommandError::Failed(message)),
        ItemAction::Started(_) => return Err(CommandError::Interrupted),
    };

    let message = outcome.success_message();
    let text = match outcome {
        ItemOutcome::Listed(items) => serde_json::to_string_pretty(&items)?,
        ItemOutcome::Fetched(item) => serde_json::to_string_pretty(&item)?,
        ItemOutcome::Added(item) | ItemOutcome::Updated(item) => format!(
            "{}\n{}",
            message.unwrap_or_default(),
            serde_json::to_string_pretty(&item)?
        ),
        ItemOutcome::Deleted(_) => message.unwrap_or_default().to_string(),
    };
    Ok(text)
}
