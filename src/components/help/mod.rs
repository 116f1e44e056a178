//! Le composant help affiche la liste des commandes du bot.
//! La liste est construite à partir des descriptions de la table de commandes, regroupées par
//! catégorie.

use serenity::{async_trait, utils::Colour};
use crate::component::{Category, Command, CommandContext, CommandError, CommandInfo, Embed, Message};

pub struct Help {
    prefix: char,
    commands: Vec<CommandInfo>,
}

impl Help {
    /// `commands` : les commandes à lister, dans l'ordre d'affichage.
    pub fn new(prefix: char, commands: Vec<CommandInfo>) -> Self {
        Self { prefix, commands }
    }
    fn listing(&self, category: Category) -> String {
        self.commands.iter()
            .filter(|info| info.category == category)
            .map(|info| match info.usage {
                Some(usage) => format!("`{}{} {}` - {}", self.prefix, info.name, usage, info.description),
                None => format!("`{}{}` - {}", self.prefix, info.name, info.description),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
    pub fn embed(&self) -> Embed {
        let mut embed = Embed::new("🎭 Comandos do Monokuma Bot")
            .description("Aqui estão todos os comandos disponíveis:")
            .colour(Colour::RED);
        for (category, title) in [
            (Category::General, "📌 Comandos Gerais"),
            (Category::Moderation, "🛡️ Comandos de Moderação"),
        ] {
            let listing = self.listing(category);
            if !listing.is_empty() {
                embed = embed.field(title, listing, false);
            }
        }
        embed.footer(format!("Use {} antes de cada comando", self.prefix))
    }
}

#[async_trait]
impl Command for Help {
    fn name(&self) -> &'static str {
        "ajuda"
    }
    fn description(&self) -> &'static str {
        "Mostra todos os comandos disponíveis"
    }
    async fn execute(&self, _: &dyn CommandContext, _: &[&str]) -> Result<Message, CommandError> {
        Ok(Message::embed(self.embed()))
    }
}
