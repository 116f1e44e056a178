//! Commandes de modération.

use std::time::Duration;
use serenity::{async_trait, model::Permissions};
use crate::component::{Category, Command, CommandContext, CommandError, Message, NO_PERMISSION, command_parser};

pub const CLEAR_OUT_OF_RANGE: &str = "⚠️ Por favor, escolha um número entre 1 e 100!";
pub const CLEAR_INVALID_NUMBER: &str = "❌ Por favor, forneça um número válido!";

/// Nombre de messages supprimés par défaut.
pub const DEFAULT_AMOUNT: i64 = 5;
pub const MAX_AMOUNT: i64 = 100;
/// Délai avant suppression de la confirmation.
pub const CONFIRMATION_LIFETIME: Duration = Duration::from_secs(3);

/// Supprime les derniers messages du salon.
///
/// Le message de commande est supprimé avec les autres mais n'est pas compté dans la
/// confirmation.
pub struct Clear;

#[async_trait]
impl Command for Clear {
    fn name(&self) -> &'static str {
        "clear"
    }
    fn usage(&self) -> Option<&'static str> {
        Some("[quantidade]")
    }
    fn description(&self) -> &'static str {
        "Limpa mensagens (requer permissão)"
    }
    fn category(&self) -> Category {
        Category::Moderation
    }
    fn required_permissions(&self) -> Permissions {
        Permissions::MANAGE_MESSAGES
    }
    async fn execute(&self, ctx: &dyn CommandContext, args: &[&str]) -> Result<Message, CommandError> {
        let amount = command_parser::int_argument(args.first().copied(), DEFAULT_AMOUNT)?;
        if !(1..=MAX_AMOUNT).contains(&amount) {
            return Ok(Message::text(CLEAR_OUT_OF_RANGE));
        }
        let deleted = ctx.purge(amount as u64 + 1).await?;
        Ok(Message::text(format!("🧹 {} mensagens foram deletadas!", deleted.saturating_sub(1)))
            .delete_after(CONFIRMATION_LIFETIME))
    }
    fn on_error(&self, error: &CommandError) -> Option<Message> {
        match error {
            CommandError::MissingPermissions(_) => Some(Message::text(NO_PERMISSION)),
            CommandError::BadArgument(_) => Some(Message::text(CLEAR_INVALID_NUMBER)),
            _ => None,
        }
    }
}
