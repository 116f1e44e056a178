use serenity::{client::Context, model::{guild::Member, id::ChannelId}, prelude::Mentionable};
use crate::components::utils::send;

pub fn welcome_text(mention: &str) -> String {
    format!("🎭 Bem-vindo(a) ao jogo, {}! Upupupu!", mention)
}

/// Salon et texte de bienvenue, ou `None` sans salon système.
pub fn welcome(system_channel: Option<ChannelId>, mention: &str) -> Option<(ChannelId, String)> {
    system_channel.map(|channel_id| (channel_id, welcome_text(mention)))
}

/// Souhaite la bienvenue au nouveau membre dans le salon système du serveur.
/// Ne fait rien si le serveur n'a pas de salon système.
pub async fn on_member_join(ctx: &Context, member: &Member) {
    let guild_id = member.guild_id;
    let system_channel = match guild_id.to_guild_cached(&ctx.cache) {
        Some(guild) => guild.system_channel_id,
        None => match guild_id.to_partial_guild(ctx).await {
            Ok(guild) => guild.system_channel_id,
            Err(e) => {
                log_error!("Serveur {} introuvable pour l'accueil de {}: {}", guild_id, member.user.name, e);
                return;
            }
        },
    };
    let (channel_id, text) = match welcome(system_channel, &member.mention().to_string()) {
        Some(v) => v,
        None => return,
    };
    if let Err(e) = send::text(ctx, channel_id, text).await {
        log_error!("Message de bienvenue non envoyé dans {}: {}", channel_id, e);
    }
}
