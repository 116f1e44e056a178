use serenity::model::{id::UserId, prelude::Ready};

/// Lignes affichées lorsque la connexion à la passerelle est établie.
pub fn announcement(name: &str, id: UserId) -> [String; 4] {
    [
        "🐻 Monokuma está online!".to_string(),
        format!("Logado como: {}", name),
        format!("ID: {}", id),
        "------".to_string(),
    ]
}

pub fn on_ready(ready: &Ready) {
    for line in announcement(&ready.user.name, ready.user.id) {
        println!("{}", line);
    }
    log_info!("Connecté à {} serveur(s)", ready.guilds.len());
}
