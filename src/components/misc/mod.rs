//! Commandes générales : latence, informations du serveur, avatar, dé et l'annonce de Monokuma.
//!
//! Aucune de ces commandes n'enregistre de donnée ni ne modifie le serveur.

use rand::Rng;
use serenity::{async_trait, utils::Colour};
use crate::component::{Command, CommandContext, CommandError, Embed, Message, command_parser};

pub const DICE_TOO_FEW_SIDES: &str = "⚠️ O dado precisa ter pelo menos 2 lados!";
pub const MORTE_TEXT: &str = "🔔 **UM CORPO FOI DESCOBERTO!** 🔔\n\
    🐻 Upupupu! Parece que temos um assassinato!\n\
    https://www.youtube.com/watch?v=awTC4GIjGEo";

/// Nombre de faces par défaut de `dado`.
pub const DEFAULT_SIDES: i64 = 6;

/// Arrondit une latence en millisecondes entières, les demi-millisecondes vers le pair.
pub fn latency_millis(latency: std::time::Duration) -> u128 {
    let micros = latency.as_micros();
    let (millis, rest) = (micros / 1000, micros % 1000);
    if rest > 500 || (rest == 500 && millis % 2 == 1) {
        millis + 1
    } else {
        millis
    }
}

pub struct Ping;

#[async_trait]
impl Command for Ping {
    fn name(&self) -> &'static str {
        "ping"
    }
    fn description(&self) -> &'static str {
        "Verifica a latência do bot"
    }
    async fn execute(&self, ctx: &dyn CommandContext, _: &[&str]) -> Result<Message, CommandError> {
        Ok(match ctx.latency().await {
            Some(latency) => Message::text(format!("🏓 Pong! Latência: {}ms", latency_millis(latency))),
            None => Message::text("🏓 Pong! Latência: ainda não medida"),
        })
    }
}

pub struct ServerInfo;

#[async_trait]
impl Command for ServerInfo {
    fn name(&self) -> &'static str {
        "serverinfo"
    }
    fn description(&self) -> &'static str {
        "Informações do servidor"
    }
    async fn execute(&self, ctx: &dyn CommandContext, _: &[&str]) -> Result<Message, CommandError> {
        let guild = ctx.guild().await?;
        let created_at = chrono::DateTime::<chrono::Utc>::from_timestamp(guild.created_at.unix_timestamp(), 0)
            .map(|date| date.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "?".to_string());
        let embed = Embed::new(format!("📊 Informações de {}", guild.name))
            .colour(Colour::PURPLE)
            .field("👑 Dono", guild.owner_mention, true)
            .field("👥 Membros", guild.member_count, true)
            .field("📅 Criado em", created_at, true)
            .thumbnail(guild.icon_url);
        Ok(Message::embed(embed))
    }
}

pub struct Avatar;

#[async_trait]
impl Command for Avatar {
    fn name(&self) -> &'static str {
        "avatar"
    }
    fn usage(&self) -> Option<&'static str> {
        Some("[@usuário]")
    }
    fn description(&self) -> &'static str {
        "Mostra o avatar"
    }
    async fn execute(&self, ctx: &dyn CommandContext, args: &[&str]) -> Result<Message, CommandError> {
        let target = match args.first() {
            None => ctx.author(),
            Some(arg) => ctx.resolve_member(arg).await?
                .ok_or_else(|| CommandError::BadArgument(format!("membre \"{}\" introuvable", arg)))?,
        };
        let embed = Embed::new(format!("Avatar de {}", target.name))
            .colour(Colour::BLUE)
            .image(target.avatar_url);
        Ok(Message::embed(embed))
    }
}

/// Lance un dé à `sides` faces. `None` si le dé a moins de deux faces.
pub fn roll<R: Rng + ?Sized>(sides: i64, rng: &mut R) -> Option<i64> {
    if sides < 2 {
        return None;
    }
    Some(rng.gen_range(1..=sides))
}

pub struct Dado;

#[async_trait]
impl Command for Dado {
    fn name(&self) -> &'static str {
        "dado"
    }
    fn usage(&self) -> Option<&'static str> {
        Some("[lados]")
    }
    fn description(&self) -> &'static str {
        "Rola um dado"
    }
    async fn execute(&self, _: &dyn CommandContext, args: &[&str]) -> Result<Message, CommandError> {
        let sides = command_parser::int_argument(args.first().copied(), DEFAULT_SIDES)?;
        let result = roll(sides, &mut rand::thread_rng());
        Ok(match result {
            Some(result) => Message::text(format!("🎲 Você rolou um dado de {} lados e tirou: **{}**", sides, result)),
            None => Message::text(DICE_TOO_FEW_SIDES),
        })
    }
}

pub struct Morte;

#[async_trait]
impl Command for Morte {
    fn name(&self) -> &'static str {
        "morte"
    }
    fn description(&self) -> &'static str {
        "🔔 Anuncia descoberta de corpo"
    }
    async fn execute(&self, _: &dyn CommandContext, _: &[&str]) -> Result<Message, CommandError> {
        Ok(Message::text(MORTE_TEXT))
    }
}
