//! Parseur de commande
//!
//! Une commande textuelle a la forme `<préfixe><commande> [arguments...]`. Le nom de commande
//! est sensible à la casse ; les arguments sont séparés par des espaces, sauf lorsqu'ils sont
//! entre guillemets (`!cmd "un seul argument"`).

use serenity::model::id::UserId;
use super::CommandError;

/// Commande reconnue dans le contenu d'un message
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

/// Convertit une chaine de caractère en groupe d'arguments
pub fn split_shell(txt: &str) -> Vec<&str> {
    let mut quoted = false;
    txt.split(|c: char| {
        match (quoted, c) {
            (_, '"') => {
                quoted = !quoted;
                true
            }
            (false, c) if c.is_whitespace() => true,
            _ => false
        }
    })
    .filter(|s| !s.is_empty())
    .collect()
}

/// Découpe un message en commande si celui-ci commence par le préfixe.
///
/// Retourne `None` si le préfixe est absent ou s'il n'est suivi d'aucun nom de commande.
/// Le nom doit suivre immédiatement le préfixe : `! ping` n'est pas une commande.
pub fn parse_invocation(prefix: char, content: &str) -> Option<Invocation<'_>> {
    let body = content.strip_prefix(prefix)?;
    if body.starts_with(char::is_whitespace) {
        return None;
    }
    let mut parts = split_shell(body).into_iter();
    let name = parts.next()?;
    Some(Invocation {
        name,
        args: parts.collect(),
    })
}

/// Lit un argument entier optionnel. Un argument absent vaut `default`.
pub fn int_argument(arg: Option<&str>, default: i64) -> Result<i64, CommandError> {
    match arg {
        None => Ok(default),
        Some(v) => v.parse::<i64>()
            .map_err(|_| CommandError::BadArgument(format!("\"{}\" n'est pas un nombre entier", v))),
    }
}

/// Extrait l'identifiant d'une mention (`<@123>`, `<@!123>`) ou d'un identifiant brut.
pub fn user_id_argument(arg: &str) -> Option<UserId> {
    let raw = arg.strip_prefix("<@")
        .and_then(|v| v.strip_suffix('>'))
        .map(|v| v.strip_prefix('!').unwrap_or(v))
        .unwrap_or(arg);
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(id) => Some(UserId(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_cmd() {
        let args = split_shell(r#"avatar  "nom avec espaces"	42"#);
        assert_eq!(args, vec!["avatar", "nom avec espaces", "42"]);
    }

    #[test]
    fn invocation_requires_prefix_and_name() {
        assert_eq!(parse_invocation('!', "!clear 10"), Some(Invocation { name: "clear", args: vec!["10"] }));
        assert_eq!(parse_invocation('!', "!ping"), Some(Invocation { name: "ping", args: vec![] }));
        assert_eq!(parse_invocation('!', "ping"), None);
        assert_eq!(parse_invocation('!', "!"), None);
        assert_eq!(parse_invocation('!', "! ping"), None);
    }

    #[test]
    fn command_name_is_case_sensitive() {
        let inv = parse_invocation('!', "!PING").unwrap();
        assert_eq!(inv.name, "PING");
    }

    #[test]
    fn integer_arguments() {
        assert_eq!(int_argument(None, 5).unwrap(), 5);
        assert_eq!(int_argument(Some("-3"), 5).unwrap(), -3);
        assert!(matches!(int_argument(Some("cinq"), 5), Err(CommandError::BadArgument(_))));
        assert!(matches!(int_argument(Some("99999999999999999999"), 5), Err(CommandError::BadArgument(_))));
    }

    #[test]
    fn user_mentions() {
        assert_eq!(user_id_argument("<@42>"), Some(UserId(42)));
        assert_eq!(user_id_argument("<@!42>"), Some(UserId(42)));
        assert_eq!(user_id_argument("42"), Some(UserId(42)));
        assert_eq!(user_id_argument("<@&42>"), None);
        assert_eq!(user_id_argument("<#42>"), None);
        assert_eq!(user_id_argument("monokuma"), None);
        assert_eq!(user_id_argument("0"), None);
    }
}
