use serenity::{client::Context, model::id::ChannelId};
use crate::component::Message;

/// Envoie une réponse de commande dans le salon.
///
/// Si la réponse a un délai de suppression, une tâche se charge de la supprimer une fois le
/// délai écoulé ; l'échec de cette suppression est seulement journalisé.
pub async fn reply(ctx: &Context, channel_id: ChannelId, msg: Message) -> serenity::Result<()> {
    let delete_after = msg.delete_after;
    let sent = channel_id.send_message(&ctx.http, |m| msg.apply(m)).await?;
    if let Some(delay) = delete_after {
        let http = ctx.http.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = sent.channel_id.delete_message(&http, sent.id).await {
                log_warn!("Suppression différée du message {} impossible: {}", sent.id, e);
            }
        });
    }
    Ok(())
}

/// Envoie un simple texte dans le salon.
pub async fn text<S: ToString>(ctx: &Context, channel_id: ChannelId, content: S) -> serenity::Result<()> {
    reply(ctx, channel_id, Message::text(content)).await
}
