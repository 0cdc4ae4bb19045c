use super::Kitchen;
use crate::cli::output::Output;
use crate::errors::Result;
use crate::stack::RemoveOutcome;
use crate::utils::path_validation::normalize_cake_name;
use tracing::debug;

/// Which cakes `cake remove` deletes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveTarget {
    /// A cake by name; asked for when not given
    Named(Option<String>),
    /// The current cake
    Current,
    /// Every cake in the bakery, after confirmation
    All,
}

impl RemoveTarget {
    pub fn from_args(name: Option<String>, all: bool, current: bool) -> Self {
        if all {
            RemoveTarget::All
        } else if current {
            RemoveTarget::Current
        } else {
            RemoveTarget::Named(name)
        }
    }
}

/// Resolve a cake name from the argument or the prompt. `None` means the user cancelled.
fn resolve_name(kitchen: &Kitchen, name: Option<String>) -> Result<Option<String>> {
    let raw = match name {
        Some(name) => name,
        None => match kitchen.input().text("Cake name")? {
            Some(name) => name,
            None => return Ok(None),
        },
    };
    normalize_cake_name(&raw).map(Some)
}

/// Switch to another cake, creating it empty if it does not exist yet
pub fn set(kitchen: &mut Kitchen, name: Option<String>) -> Result<()> {
    let Some(name) = resolve_name(kitchen, name)? else {
        Output::error("Cancelled.");
        return Ok(());
    };

    kitchen.set_current(name.clone())?;
    kitchen.bakery().ensure_cake(&name)?;
    debug!("Current cake is now '{}'", name);

    Output::success(format!("Set the cake to \"{name}\"."));
    kitchen.show_current()
}

/// List every cake in the bakery, marking the current one
pub fn list(kitchen: &Kitchen) -> Result<()> {
    let cakes = kitchen.bakery().list_cakes()?;

    if cakes.is_empty() {
        Output::error("No cakes in the bakery.");
        return Ok(());
    }

    Output::cakes(&cakes, kitchen.current_cake());
    if !cakes.iter().any(|cake| cake == kitchen.current_cake()) {
        Output::warning(format!(
            "Current cake \"{}\" has no file yet; pushing to or clearing it will create one.",
            kitchen.current_cake()
        ));
    }
    Ok(())
}

/// Remove one cake, the current cake or every cake.
///
/// The current-cake setting is left alone even when its cake is removed; the
/// cake simply reads as empty until something is pushed onto it again.
pub fn remove(kitchen: &Kitchen, target: RemoveTarget) -> Result<()> {
    match target {
        RemoveTarget::All => remove_all(kitchen),
        RemoveTarget::Current => {
            let name = kitchen.current_cake();
            match kitchen.bakery().remove_cake(name)? {
                RemoveOutcome::Removed => Output::success(format!("Removed \"{name}\" cake.")),
                RemoveOutcome::Missing => {
                    Output::error(format!("The cake \"{name}\" does not exist."))
                }
            }
            Ok(())
        }
        RemoveTarget::Named(name) => {
            let Some(name) = resolve_name(kitchen, name)? else {
                Output::error("Cancelled.");
                return Ok(());
            };
            match kitchen.bakery().remove_cake(&name)? {
                RemoveOutcome::Removed => {
                    Output::success(format!("Removed the cake \"{name}\"."));
                    kitchen.show_current()
                }
                RemoveOutcome::Missing => {
                    Output::error(format!("The cake \"{name}\" does not exist."));
                    Ok(())
                }
            }
        }
    }
}

fn remove_all(kitchen: &Kitchen) -> Result<()> {
    let count = kitchen.bakery().list_cakes()?.len();
    if count == 0 {
        Output::error("No cakes in the bakery.");
        return Ok(());
    }

    let noun = if count == 1 { "cake" } else { "cakes" };
    if !kitchen
        .input()
        .confirm(&format!("Remove all {count} {noun}?"))?
    {
        Output::error("Cancelled.");
        return Ok(());
    }

    let removed = kitchen.bakery().remove_all()?;
    debug!("Removed {} of {} cakes", removed, count);
    Output::success("Removed all cakes.");
    Ok(())
}
