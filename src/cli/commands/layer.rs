use super::Kitchen;
use crate::cli::output::Output;
use crate::errors::Result;
use tracing::debug;

/// Show the current cake
pub fn list(kitchen: &Kitchen) -> Result<()> {
    kitchen.show_current()
}

/// Put a layer on top of the current cake, asking for it when not given
pub fn push(kitchen: &Kitchen, layer: Option<String>) -> Result<()> {
    let mut cake = kitchen.load_current()?;

    let layer = match layer {
        Some(layer) => layer,
        None => match kitchen.input().text("Item name")? {
            Some(layer) => layer,
            None => {
                Output::error("Cancelled.");
                Output::cake(kitchen.current_cake(), &cake);
                return Ok(());
            }
        },
    };

    cake.push(layer.as_str());
    kitchen.save_current(&cake)?;
    debug!("Pushed onto '{}', {} layers", kitchen.current_cake(), cake.len());

    Output::success(format!("Pushed \"{layer}\"."));
    Output::cake(kitchen.current_cake(), &cake);
    Ok(())
}

/// Take the top layer off the current cake
pub fn pop(kitchen: &Kitchen) -> Result<()> {
    let mut cake = kitchen.load_current()?;

    match cake.pop() {
        Some(layer) => {
            kitchen.save_current(&cake)?;
            Output::success(format!("Popped \"{layer}\"."));
        }
        None => debug!("Nothing to pop from '{}'", kitchen.current_cake()),
    }

    Output::cake(kitchen.current_cake(), &cake);
    Ok(())
}

/// Eat the whole cake
pub fn clear(kitchen: &Kitchen) -> Result<()> {
    let mut cake = kitchen.load_current()?;
    let eaten = cake.len();
    cake.clear();
    kitchen.save_current(&cake)?;
    debug!("Cleared {} layers from '{}'", eaten, kitchen.current_cake());

    Output::success("No more layers in the cake.");
    Ok(())
}
