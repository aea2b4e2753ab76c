// src/bin/client.rs
//
// Client terminal : `client [config.json]`
// Une expression par ligne ; "#" (ou fin d’entrée) termine la session.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use calculatrice_infixe::config::Config;
    use calculatrice_infixe::journal::init_journal;
    use calculatrice_infixe::noyau::format::message_affichage;
    use calculatrice_infixe::reseau::protocole::STOP;
    use calculatrice_infixe::reseau::Client;
    use std::io::Write;
    use std::path::PathBuf;
    use tokio::io::{AsyncBufReadExt, BufReader};

    let chemin = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::charger(chemin.as_deref())?;
    init_journal(&config.niveau_journal);

    let adresse = config.adresse_complete();
    let mut client = Client::connecter(&adresse)
        .await
        .with_context(|| format!("connexion impossible à {adresse}"))?;
    println!("Connecté");

    let mut lignes = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("Expression : ");
        std::io::stdout().flush()?;

        let ligne = match lignes.next_line().await? {
            Some(l) => l,
            None => break,
        };
        let ligne = ligne.trim();

        if ligne == STOP {
            break;
        }
        if ligne.is_empty() {
            continue;
        }

        let reponse = client.demander(ligne).await?;
        println!("Réponse du serveur : {}", message_affichage(&reponse));
    }

    client.terminer().await?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Pas de client TCP dans un navigateur.
}
