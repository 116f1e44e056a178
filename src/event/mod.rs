//! Réception des événements de la passerelle.
//!
//! [`Handler`] reçoit les événements de serenity et les redirige : connexion, arrivée d'un
//! membre et messages, ces derniers passant par le [`Framework`] de commandes.

pub mod bot_start;
pub mod welcome;

use serenity::{
    async_trait,
    client::{Context, EventHandler},
    model::{channel::Message, guild::Member, prelude::Ready},
    prelude::TypeMapKey,
};
use crate::component::{Framework, context::{SerenityContext, SharedShardManager}};
use crate::components::utils::send;

/// Clé du gestionnaire de shards dans les données partagées du client.
/// Il n'existe qu'une fois le client construit, d'où son passage par le `TypeMap`.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = SharedShardManager;
}

pub struct Handler {
    framework: Framework,
}

impl Handler {
    pub fn new(framework: Framework) -> Self {
        Self { framework }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _: Context, ready: Ready) {
        bot_start::on_ready(&ready);
    }

    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        welcome::on_member_join(&ctx, &new_member).await;
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let shard_manager = {
            let data = ctx.data.read().await;
            data.get::<ShardManagerContainer>().cloned()
        };
        let reply = {
            let cmd_ctx = SerenityContext::new(&ctx, &msg, shard_manager.as_ref());
            self.framework.dispatch(&cmd_ctx, &msg.content).await
        };
        if let Some(reply) = reply {
            if let Err(e) = send::reply(&ctx, msg.channel_id, reply).await {
                log_error!("Réponse non envoyée dans {}: {}", msg.channel_id, e);
            }
        }
    }
}
