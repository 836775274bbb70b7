use crate::{
    db::categories::Categories,
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    command: CategoryCommand,
}

#[derive(Debug, Subcommand)]
enum CategoryCommand {
    /// Create a new category
    Create {
        /// Category title
        title: String,
    },
    /// List all categories
    List,
    /// Rename a category
    Rename {
        /// Category title or id to rename
        category: String,
        /// New title
        new_title: String,
    },
    /// Delete an empty category
    Delete {
        /// Category title or id to delete
        category: String,
    },
}

pub fn cmd(args: CategoryArgs) -> Result<()> {
    match args.command {
        CategoryCommand::Create { title } => handle_create(title),
        CategoryCommand::List => handle_list(),
        CategoryCommand::Rename { category, new_title } => handle_rename(category, new_title),
        CategoryCommand::Delete { category } => handle_delete(category),
    }
}

fn resolve(categories: &mut Categories, identifier: &str) -> Result<Option<crate::db::categories::Category>> {
    if let Ok(id) = identifier.parse::<i64>() {
        return categories.get_by_id(id);
    }
    categories.get_by_title(identifier)
}

fn handle_create(title: String) -> Result<()> {
    let mut categories = Categories::new()?;

    if categories.get_by_title(&title)?.is_some() {
        msg_error!(Message::CategoryExists(title));
        return Ok(());
    }

    categories.fetch_or_create(&title)?;
    msg_success!(Message::CategoryCreated(title));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut categories = Categories::new()?;
    let all = categories.list()?;

    if all.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }

    msg_print!(Message::CategoryListHeader, true);
    View::categories(&all)?;
    Ok(())
}

fn handle_rename(identifier: String, new_title: String) -> Result<()> {
    let mut categories = Categories::new()?;

    let category = match resolve(&mut categories, &identifier)? {
        Some(category) => category,
        None => {
            msg_error!(Message::CategoryNotFound(identifier));
            return Ok(());
        }
    };
    if category.is_pinned {
        msg_error!(Message::PinnedCategoryImmutable);
        return Ok(());
    }
    if categories.get_by_title(&new_title)?.is_some() {
        msg_error!(Message::CategoryExists(new_title));
        return Ok(());
    }

    categories.rename(category.id.unwrap_or_default(), &new_title)?;
    msg_success!(Message::CategoryRenamed(category.title, new_title));
    Ok(())
}

fn handle_delete(identifier: String) -> Result<()> {
    let mut categories = Categories::new()?;

    let category = match resolve(&mut categories, &identifier)? {
        Some(category) => category,
        None => {
            msg_error!(Message::CategoryNotFound(identifier));
            return Ok(());
        }
    };
    if category.is_pinned {
        msg_error!(Message::PinnedCategoryImmutable);
        return Ok(());
    }

    // Orphan cascade is not handled; a category must be emptied first.
    let tracker_count = categories.tracker_count(category.id.unwrap_or_default())?;
    if tracker_count > 0 {
        msg_error!(Message::CategoryNotEmpty(category.title, tracker_count));
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteCategory(category.title.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        categories.delete(category.id.unwrap_or_default())?;
        msg_success!(Message::CategoryDeleted(category.title));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}
