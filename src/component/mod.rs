//! Socle des commandes du bot.
//!
//! Chaque commande implémente [`Command`] et est enregistrée une seule fois dans une
//! [`CommandTable`] au démarrage. La table est ensuite figée et partagée par le
//! [`Framework`], qui reconnaît les messages préfixés, vérifie les permissions déclarées et
//! transforme les erreurs en réponses.
//!
//! Les commandes n'accèdent à Discord qu'à travers [`CommandContext`], ce qui permet de les
//! tester sans passerelle.

use std::{collections::HashMap, sync::Arc, time::Duration};
use serenity::{async_trait, model::{Permissions, Timestamp}};

pub mod command_parser;
pub mod context;
mod framework;
pub mod message;

pub use framework::{Framework, GUILD_ONLY, INVALID_ARGUMENT, NO_PERMISSION, UNEXPECTED_ERROR};
pub use message::{Embed, Message};

/// Erreur d'exécution d'une commande
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("permissions manquantes : {0}")]
    MissingPermissions(Permissions),
    #[error("argument invalide : {0}")]
    BadArgument(String),
    #[error("commande utilisable uniquement sur un serveur")]
    GuildOnly,
    #[error(transparent)]
    Serenity(#[from] serenity::Error),
}

/// Catégorie d'affichage dans l'aide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    General,
    Moderation,
}

/// Utilisateur tel que vu par une commande
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub avatar_url: String,
}

/// Informations d'un serveur lues par `serverinfo`
#[derive(Debug, Clone)]
pub struct GuildInfo {
    pub name: String,
    pub owner_mention: String,
    pub member_count: u64,
    pub created_at: Timestamp,
    pub icon_url: Option<String>,
}

/// Accès à Discord depuis une commande.
///
/// L'implémentation réelle est [`context::SerenityContext`] ; les tests utilisent un double.
#[async_trait]
pub trait CommandContext: Send + Sync {
    /// Auteur du message de commande
    fn author(&self) -> UserProfile;
    /// Latence de la connexion à la passerelle, si elle a déjà été mesurée.
    async fn latency(&self) -> Option<Duration>;
    /// Serveur dans lequel la commande a été lancée.
    async fn guild(&self) -> Result<GuildInfo, CommandError>;
    /// Résout un argument (mention, identifiant, nom ou surnom) en membre du serveur.
    async fn resolve_member(&self, arg: &str) -> Result<Option<UserProfile>, CommandError>;
    /// Permissions de l'auteur dans le salon de la commande.
    async fn author_permissions(&self) -> Result<Permissions, CommandError>;
    /// Supprime jusqu'à `limit` messages parmi les plus récents du salon, message de
    /// commande compris. Retourne le nombre de messages supprimés.
    async fn purge(&self, limit: u64) -> Result<usize, CommandError>;
}

/// Une commande textuelle
#[async_trait]
pub trait Command: Sync + Send {
    fn name(&self) -> &'static str;
    /// Forme des arguments pour l'aide, par exemple `[lados]`.
    fn usage(&self) -> Option<&'static str> {
        None
    }
    fn description(&self) -> &'static str;
    fn category(&self) -> Category {
        Category::General
    }
    /// Permissions exigées de l'auteur, vérifiées avant [`Command::execute`].
    fn required_permissions(&self) -> Permissions {
        Permissions::empty()
    }
    async fn execute(&self, ctx: &dyn CommandContext, args: &[&str]) -> Result<Message, CommandError>;
    /// Traitement d'erreur propre à la commande. `None` laisse la main au traitement commun.
    fn on_error(&self, _error: &CommandError) -> Option<Message> {
        None
    }
}

/// Description d'une commande enregistrée, utilisée par l'aide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: Option<&'static str>,
    pub description: &'static str,
    pub category: Category,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableError {
    #[error("la commande {0} est déjà enregistrée")]
    Duplicate(&'static str),
}

/// Table des commandes, construite au démarrage puis figée.
#[derive(Default)]
pub struct CommandTable {
    commands: HashMap<&'static str, Arc<dyn Command>>,
    /// Ordre d'enregistrement, pour un affichage stable dans l'aide.
    order: Vec<&'static str>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }
    /// Enregistre une commande. Deux commandes ne peuvent pas partager le même nom.
    pub fn register<C: 'static + Command>(&mut self, command: C) -> Result<&mut Self, TableError> {
        let name = command.name();
        if self.commands.contains_key(name) {
            return Err(TableError::Duplicate(name));
        }
        self.commands.insert(name, Arc::new(command));
        self.order.push(name);
        Ok(self)
    }
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(name)
    }
    pub fn len(&self) -> usize {
        self.order.len()
    }
    /// Descriptions des commandes dans l'ordre d'enregistrement.
    pub fn infos(&self) -> Vec<CommandInfo> {
        self.order.iter()
            .filter_map(|name| self.commands.get(name))
            .map(|cmd| CommandInfo {
                name: cmd.name(),
                usage: cmd.usage(),
                description: cmd.description(),
                category: cmd.category(),
            })
            .collect()
    }
}
