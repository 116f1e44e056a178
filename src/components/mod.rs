//! Module comportant les composants

mod misc;
pub use misc::*;
mod help;
pub use help::*;
mod modo;
pub use modo::*;

// Fonctions utiles pour les composants
pub mod utils;

use crate::component::{CommandTable, TableError};

/// Construit la table des commandes du bot.
///
/// L'aide est enregistrée en dernier pour lister toutes les autres commandes.
pub fn command_table(prefix: char) -> Result<CommandTable, TableError> {
    let mut table = CommandTable::new();
    table
        .register(Ping)?
        .register(ServerInfo)?
        .register(Avatar)?
        .register(Dado)?
        .register(Morte)?
        .register(Clear)?;
    let help = Help::new(prefix, table.infos());
    table.register(help)?;
    Ok(table)
}
