//! Réponses produites par les commandes.
//!
//! Une commande ne parle jamais directement à Discord : elle retourne un [`Message`] que la
//! couche événementielle convertit en [`CreateMessage`] puis envoie.

use std::time::Duration;
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::utils::Colour;

/// Champ d'un embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Contenu riche d'un message (titre, champs, images...)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub colour: Option<Colour>,
    pub fields: Vec<EmbedField>,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    pub footer: Option<String>,
}

impl Embed {
    pub fn new<S: ToString>(title: S) -> Self {
        Embed {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }
    pub fn description<S: ToString>(mut self, description: S) -> Self {
        self.description = Some(description.to_string());
        self
    }
    pub fn colour<C: Into<Colour>>(mut self, colour: C) -> Self {
        self.colour = Some(colour.into());
        self
    }
    pub fn field<S1: ToString, S2: ToString>(mut self, name: S1, value: S2, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.to_string(),
            value: value.to_string(),
            inline,
        });
        self
    }
    /// Une valeur absente laisse l'embed sans miniature.
    pub fn thumbnail(mut self, url: Option<String>) -> Self {
        self.thumbnail = url;
        self
    }
    pub fn image<S: ToString>(mut self, url: S) -> Self {
        self.image = Some(url.to_string());
        self
    }
    pub fn footer<S: ToString>(mut self, text: S) -> Self {
        self.footer = Some(text.to_string());
        self
    }
    /// Recopie l'embed dans le builder de serenity.
    pub fn apply(self, e: &mut CreateEmbed) -> &mut CreateEmbed {
        if let Some(title) = self.title {
            e.title(title);
        }
        if let Some(description) = self.description {
            e.description(description);
        }
        if let Some(colour) = self.colour {
            e.colour(colour);
        }
        for field in self.fields {
            e.field(field.name, field.value, field.inline);
        }
        if let Some(url) = self.thumbnail {
            e.thumbnail(url);
        }
        if let Some(url) = self.image {
            e.image(url);
        }
        if let Some(text) = self.footer {
            e.footer(|f| f.text(text));
        }
        e
    }
}

/// Réponse d'une commande
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    pub content: Option<String>,
    pub embed: Option<Embed>,
    /// Si présent, le message est supprimé après ce délai.
    pub delete_after: Option<Duration>,
}

impl Message {
    pub fn text<S: ToString>(content: S) -> Self {
        Message {
            content: Some(content.to_string()),
            ..Default::default()
        }
    }
    pub fn embed(embed: Embed) -> Self {
        Message {
            embed: Some(embed),
            ..Default::default()
        }
    }
    pub fn delete_after(mut self, delay: Duration) -> Self {
        self.delete_after = Some(delay);
        self
    }
    /// Remplit le builder de message de serenity.
    pub fn apply<'a, 'b>(self, m: &'b mut CreateMessage<'a>) -> &'b mut CreateMessage<'a> {
        if let Some(content) = self.content {
            m.content(content);
        }
        if let Some(embed) = self.embed {
            m.embed(|e| embed.apply(e));
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_fields_in_order() {
        let embed = Embed::new("titre")
            .field("a", 1, true)
            .field("b", "deux", false)
            .thumbnail(None);
        assert_eq!(embed.fields.len(), 2);
        assert_eq!(embed.fields[0], EmbedField { name: "a".into(), value: "1".into(), inline: true });
        assert!(!embed.fields[1].inline);
        assert!(embed.thumbnail.is_none());
    }

    #[test]
    fn text_message_has_no_delay() {
        let msg = Message::text("salut");
        assert_eq!(msg.content.as_deref(), Some("salut"));
        assert!(msg.delete_after.is_none());
        let msg = msg.delete_after(Duration::from_secs(3));
        assert_eq!(msg.delete_after, Some(Duration::from_secs(3)));
    }
}
