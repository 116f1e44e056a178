use super::{command_parser, Command, CommandContext, CommandError, CommandTable, Message};

pub const NO_PERMISSION: &str = "❌ Você não tem permissão para usar este comando!";
pub const INVALID_ARGUMENT: &str = "❌ Argumento inválido!";
pub const GUILD_ONLY: &str = "❌ Este comando só pode ser usado em um servidor!";
pub const UNEXPECTED_ERROR: &str = "❌ Ocorreu um erro inesperado ao executar o comando.";

/// Dispatcher des commandes textuelles.
///
/// Reconnaît les messages commençant par le préfixe, retrouve la commande dans la table,
/// vérifie ses permissions puis l'exécute. Les erreurs passent d'abord par le traitement de
/// la commande ([`Command::on_error`]) puis, à défaut, par le traitement commun.
pub struct Framework {
    prefix: char,
    commands: CommandTable,
}

impl Framework {
    pub fn new(prefix: char, commands: CommandTable) -> Framework {
        Framework {
            prefix,
            commands,
        }
    }
    /// Traite le contenu d'un message.
    ///
    /// Retourne la réponse à envoyer, ou `None` si le message n'est pas une commande connue.
    pub async fn dispatch(&self, ctx: &dyn CommandContext, content: &str) -> Option<Message> {
        let invocation = command_parser::parse_invocation(self.prefix, content)?;
        let command = match self.commands.get(invocation.name) {
            Some(cmd) => cmd,
            None => {
                log_debug!("Commande inconnue: {}", invocation.name);
                return None;
            }
        };
        let result = match Self::check_permissions(command.as_ref(), ctx).await {
            Ok(()) => command.execute(ctx, &invocation.args).await,
            Err(e) => Err(e),
        };
        Some(match result {
            Ok(reply) => reply,
            Err(e) => command.on_error(&e).unwrap_or_else(|| Self::default_error(command.name(), e)),
        })
    }
    async fn check_permissions(command: &dyn Command, ctx: &dyn CommandContext) -> Result<(), CommandError> {
        let required = command.required_permissions();
        if required.is_empty() {
            return Ok(());
        }
        let granted = ctx.author_permissions().await?;
        if granted.contains(required) {
            Ok(())
        } else {
            Err(CommandError::MissingPermissions(required - granted))
        }
    }
    /// Traitement commun des erreurs de commande.
    fn default_error(name: &str, error: CommandError) -> Message {
        match error {
            CommandError::MissingPermissions(_) => Message::text(NO_PERMISSION),
            CommandError::BadArgument(what) => {
                log_debug!("{}: {}", name, what);
                Message::text(INVALID_ARGUMENT)
            }
            CommandError::GuildOnly => Message::text(GUILD_ONLY),
            CommandError::Serenity(e) => {
                log_error!("{}: {}", name, e);
                Message::text(UNEXPECTED_ERROR)
            }
        }
    }
}
