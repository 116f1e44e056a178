//! Core de l'application.
//! L'initialisation du bot et la connexion à Discord se font dans ce module.

use serenity::{Client, gateway::GatewayError, prelude::GatewayIntents};
use crate::{
    component::{Framework, TableError},
    components,
    config::Config,
    event::{Handler, ShardManagerContainer},
};

/// Erreur fatale au démarrage du bot
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("token refusé par Discord")]
    InvalidToken,
    #[error("table des commandes invalide: {0}")]
    Commands(#[from] TableError),
    #[error(transparent)]
    Client(serenity::Error),
}

impl From<serenity::Error> for StartupError {
    fn from(e: serenity::Error) -> Self {
        if is_authentication_error(&e) {
            StartupError::InvalidToken
        } else {
            StartupError::Client(e)
        }
    }
}

impl StartupError {
    /// Message affiché à l'opérateur avant l'arrêt du processus.
    pub fn operator_message(&self) -> String {
        match self {
            StartupError::InvalidToken => "❌ ERRO: Token inválido! Verifique seu token no Discord Developer Portal".to_string(),
            e => format!("❌ ERRO ao iniciar o bot: {}", e),
        }
    }
}

/// Vrai si Discord a refusé le token, à la connexion HTTP ou à la passerelle.
fn is_authentication_error(e: &serenity::Error) -> bool {
    match e {
        serenity::Error::Gateway(GatewayError::InvalidAuthentication) => true,
        serenity::Error::Http(e) => e.status_code().map(|s| s.as_u16()) == Some(401),
        _ => false,
    }
}

/// Intents nécessaires : messages avec leur contenu et arrivée des membres.
pub fn intents() -> GatewayIntents {
    GatewayIntents::non_privileged() | GatewayIntents::GUILD_MEMBERS | GatewayIntents::MESSAGE_CONTENT
}

/// Structure du bot.
///
/// Elle possède le client serenity. La table des commandes est construite une fois ici puis
/// confiée au [`Handler`] ; le gestionnaire de shards, nécessaire à la commande `ping`, est
/// placé dans les données partagées du client.
pub struct Bot {
    client: Client,
}

impl Bot {
    /// Crée un nouveau bot et l'initialise.
    pub async fn new(config: &Config) -> Result<Bot, StartupError> {
        serenity::utils::validate_token(&config.token).map_err(|_| StartupError::InvalidToken)?;
        let commands = components::command_table(config.prefix)?;
        log_debug!("{} commande(s) enregistrée(s)", commands.len());
        let framework = Framework::new(config.prefix, commands);
        let client = Client::builder(&config.token, intents())
            .event_handler(Handler::new(framework))
            .await?;
        {
            let mut data = client.data.write().await;
            data.insert::<ShardManagerContainer>(client.shard_manager.clone());
        }
        Ok(Bot { client })
    }
    /// Lance le bot. Ne rend la main qu'en cas d'erreur ou d'arrêt de la connexion.
    pub async fn start(&mut self) -> Result<(), StartupError> {
        self.client.start().await.map_err(StartupError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_rejection_is_an_invalid_token() {
        let e = StartupError::from(serenity::Error::Gateway(GatewayError::InvalidAuthentication));
        assert!(matches!(e, StartupError::InvalidToken));
        assert_eq!(e.operator_message(), "❌ ERRO: Token inválido! Verifique seu token no Discord Developer Portal");
    }

    #[test]
    fn other_errors_are_generic() {
        let e = StartupError::from(serenity::Error::Other("boom"));
        assert!(matches!(e, StartupError::Client(_)));
        assert_eq!(e.operator_message(), "❌ ERRO ao iniciar o bot: boom");
    }

    #[test]
    fn intents_include_members_and_content() {
        let intents = intents();
        assert!(intents.contains(GatewayIntents::GUILD_MEMBERS));
        assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
        assert!(intents.contains(GatewayIntents::GUILD_MESSAGES));
    }

    #[test]
    fn malformed_token_is_rejected_before_connecting() {
        assert!(serenity::utils::validate_token("pas-un-token").is_err());
    }
}
