//! Configuration de l'application.
//!
//! Le bot ne lit qu'une seule valeur obligatoire, le token Discord, depuis l'environnement.
//! Un fichier `.env` est chargé au préalable s'il existe.

/// Variable d'environnement contenant le token du bot.
pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
/// Préfixe des commandes textuelles.
pub const DEFAULT_PREFIX: char = '!';

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("la variable {0} est absente ou vide")]
    MissingToken(&'static str),
}

impl ConfigError {
    /// Lignes affichées à l'opérateur avant l'arrêt du processus.
    pub fn operator_message(&self) -> [String; 2] {
        match self {
            ConfigError::MissingToken(var) => [
                "❌ ERRO: Token do Discord não encontrado!".to_string(),
                format!("Certifique-se de que o arquivo .env existe e contém {}=seu_token_aqui", var),
            ],
        }
    }
}

/// Configuration du bot
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub prefix: char,
}

impl Config {
    /// Charge `.env` puis lit la configuration depuis l'environnement du processus.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    /// Construit la configuration à partir d'une fonction de recherche de variables.
    ///
    /// Un token vide ou composé uniquement d'espaces est considéré comme absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken(TOKEN_VAR))?;
        Ok(Config {
            token,
            prefix: DEFAULT_PREFIX,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_token() {
        assert_eq!(Config::from_lookup(|_| None).unwrap_err(), ConfigError::MissingToken(TOKEN_VAR));
        assert_eq!(Config::from_lookup(|_| Some("   ".to_string())).unwrap_err(), ConfigError::MissingToken(TOKEN_VAR));
    }

    #[test]
    fn missing_token_message() {
        let [first, second] = ConfigError::MissingToken(TOKEN_VAR).operator_message();
        assert_eq!(first, "❌ ERRO: Token do Discord não encontrado!");
        assert_eq!(second, "Certifique-se de que o arquivo .env existe e contém DISCORD_TOKEN=seu_token_aqui");
    }

    #[test]
    fn token_is_trimmed() {
        let config = Config::from_lookup(|key| (key == TOKEN_VAR).then(|| " abc.def.ghi\n".to_string())).unwrap();
        assert_eq!(config.token, "abc.def.ghi");
        assert_eq!(config.prefix, '!');
    }
}
