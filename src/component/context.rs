//! Implémentation de [`CommandContext`] au-dessus de serenity.

use std::{sync::Arc, time::Duration};
use serenity::{
    async_trait,
    client::{Context, bridge::gateway::{ShardId, ShardManager}},
    model::{
        channel::{ChannelType, Message as DiscordMessage},
        guild::Member,
        id::{ChannelId, MessageId},
        user::User,
        ModelError,
        Permissions,
    },
    prelude::{Mentionable, Mutex},
};
use super::{command_parser, CommandContext, CommandError, GuildInfo, UserProfile};

/// Discord refuse la suppression groupée des messages plus vieux que 14 jours.
pub const BULK_DELETE_MAX_AGE: i64 = 14 * 24 * 60 * 60;
/// Nombre maximum de messages par requête de lecture ou de suppression groupée.
pub const MESSAGES_PER_REQUEST: u64 = 100;

pub type SharedShardManager = Arc<Mutex<ShardManager>>;

/// Contexte d'un message de commande reçu par la passerelle.
pub struct SerenityContext<'a> {
    ctx: &'a Context,
    msg: &'a DiscordMessage,
    shard_manager: Option<&'a SharedShardManager>,
}

impl<'a> SerenityContext<'a> {
    pub fn new(ctx: &'a Context, msg: &'a DiscordMessage, shard_manager: Option<&'a SharedShardManager>) -> Self {
        Self { ctx, msg, shard_manager }
    }
}

fn user_profile(user: &User) -> UserProfile {
    UserProfile {
        name: user.name.clone(),
        avatar_url: user.face(),
    }
}

fn member_profile(member: &Member) -> UserProfile {
    UserProfile {
        name: member.user.name.clone(),
        avatar_url: member.face(),
    }
}

/// Sépare les messages supprimables en groupe de ceux à supprimer un par un.
/// `messages` associe chaque identifiant à la date d'envoi (secondes Unix).
pub fn split_by_age(messages: &[(MessageId, i64)], now: i64) -> (Vec<MessageId>, Vec<MessageId>) {
    let (recent, old): (Vec<(MessageId, i64)>, Vec<(MessageId, i64)>) = messages.iter()
        .copied()
        .partition(|&(_, sent_at)| now - sent_at < BULK_DELETE_MAX_AGE);
    (
        recent.into_iter().map(|(id, _)| id).collect(),
        old.into_iter().map(|(id, _)| id).collect(),
    )
}

/// Salon dont les permissions s'appliquent : un fil hérite de celles de son salon parent.
pub fn permission_channel(kind: ChannelType, channel_id: ChannelId, parent_id: Option<ChannelId>) -> ChannelId {
    match (kind, parent_id) {
        (ChannelType::PublicThread | ChannelType::PrivateThread | ChannelType::NewsThread, Some(parent)) => parent,
        _ => channel_id,
    }
}

#[async_trait]
impl<'a> CommandContext for SerenityContext<'a> {
    fn author(&self) -> UserProfile {
        user_profile(&self.msg.author)
    }

    async fn latency(&self) -> Option<Duration> {
        let manager = self.shard_manager?.lock().await;
        let runners = manager.runners.lock().await;
        runners.get(&ShardId(self.ctx.shard_id)).and_then(|runner| runner.latency)
    }

    async fn guild(&self) -> Result<GuildInfo, CommandError> {
        let guild_id = self.msg.guild_id.ok_or(CommandError::GuildOnly)?;
        if let Some(guild) = guild_id.to_guild_cached(&self.ctx.cache) {
            return Ok(GuildInfo {
                name: guild.name.clone(),
                owner_mention: guild.owner_id.mention().to_string(),
                member_count: guild.member_count,
                created_at: guild_id.created_at(),
                icon_url: guild.icon_url(),
            });
        }
        log_debug!("Serveur {} absent du cache, lecture via HTTP", guild_id);
        let guild = guild_id.to_partial_guild_with_counts(self.ctx).await?;
        Ok(GuildInfo {
            name: guild.name.clone(),
            owner_mention: guild.owner_id.mention().to_string(),
            member_count: guild.approximate_member_count.unwrap_or_default(),
            created_at: guild_id.created_at(),
            icon_url: guild.icon_url(),
        })
    }

    async fn resolve_member(&self, arg: &str) -> Result<Option<UserProfile>, CommandError> {
        let guild_id = match self.msg.guild_id {
            Some(v) => v,
            None => return Ok(None),
        };
        let user_id = match command_parser::user_id_argument(arg) {
            Some(v) => v,
            None => {
                // Ni mention ni identifiant : nom ou surnom parmi les membres en cache.
                return Ok(guild_id.to_guild_cached(&self.ctx.cache)
                    .and_then(|guild| guild.member_named(arg).map(member_profile)));
            }
        };
        match guild_id.member(self.ctx, user_id).await {
            Ok(member) => Ok(Some(member_profile(&member))),
            Err(serenity::Error::Http(e)) if matches!(e.status_code().map(|s| s.as_u16()), Some(400) | Some(404)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn author_permissions(&self) -> Result<Permissions, CommandError> {
        let guild_id = self.msg.guild_id.ok_or(CommandError::GuildOnly)?;
        let mut channel = self.msg.channel_id.to_channel(self.ctx).await?
            .guild()
            .ok_or(CommandError::GuildOnly)?;
        let source = permission_channel(channel.kind, channel.id, channel.parent_id);
        if source != channel.id {
            channel = source.to_channel(self.ctx).await?
                .guild()
                .ok_or(CommandError::GuildOnly)?;
        }
        let member = self.msg.member(self.ctx).await?;
        let guild = guild_id.to_guild_cached(&self.ctx.cache)
            .ok_or(serenity::Error::Model(ModelError::GuildNotFound))?;
        Ok(guild.user_permissions_in(&channel, &member)?)
    }

    async fn purge(&self, limit: u64) -> Result<usize, CommandError> {
        let channel_id = self.msg.channel_id;
        let mut fetched: Vec<(MessageId, i64)> = Vec::new();
        let mut before: Option<MessageId> = None;
        while (fetched.len() as u64) < limit {
            let page_size = (limit - fetched.len() as u64).min(MESSAGES_PER_REQUEST);
            let page = channel_id.messages(self.ctx, |r| {
                r.limit(page_size);
                if let Some(id) = before {
                    r.before(id);
                }
                r
            }).await?;
            let exhausted = (page.len() as u64) < page_size;
            before = page.last().map(|m| m.id);
            fetched.extend(page.iter().map(|m| (m.id, m.timestamp.unix_timestamp())));
            if exhausted || before.is_none() {
                break;
            }
        }

        let (recent, old) = split_by_age(&fetched, chrono::Utc::now().timestamp());
        for chunk in recent.chunks(MESSAGES_PER_REQUEST as usize) {
            channel_id.delete_messages(self.ctx, chunk).await?;
        }
        for id in &old {
            channel_id.delete_message(self.ctx, *id).await?;
        }
        log_info!("{} message(s) supprimé(s) dans le salon {}", recent.len() + old.len(), channel_id);
        Ok(recent.len() + old.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn old_messages_are_deleted_one_by_one() {
        let now = 2_000_000_000;
        let messages = [
            (MessageId(3), now - 10),
            (MessageId(2), now - BULK_DELETE_MAX_AGE + 1),
            (MessageId(1), now - BULK_DELETE_MAX_AGE),
        ];
        let (recent, old) = split_by_age(&messages, now);
        assert_eq!(recent, vec![MessageId(3), MessageId(2)]);
        assert_eq!(old, vec![MessageId(1)]);
    }

    #[test]
    fn threads_use_parent_permissions() {
        let (thread, parent) = (ChannelId(20), ChannelId(10));
        for kind in [ChannelType::PublicThread, ChannelType::PrivateThread, ChannelType::NewsThread] {
            assert_eq!(permission_channel(kind, thread, Some(parent)), parent);
        }
        // Un salon textuel dans une catégorie garde ses propres permissions.
        assert_eq!(permission_channel(ChannelType::Text, thread, Some(parent)), thread);
        assert_eq!(permission_channel(ChannelType::Text, thread, None), thread);
    }
}
