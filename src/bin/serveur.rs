// src/bin/serveur.rs
//
// Serveur de calcul : `serveur [config.json]`
// Surcharges : CALC_ADRESSE, CALC_PORT, CALC_ARRONDI, RUST_LOG.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use calculatrice_infixe::config::Config;
    use calculatrice_infixe::journal::init_journal;
    use calculatrice_infixe::reseau::Serveur;
    use std::path::PathBuf;

    let chemin = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::charger(chemin.as_deref())?;
    init_journal(&config.niveau_journal);

    match config.arrondi {
        Some(d) => log::info!("réponses arrondies à {d} décimale(s)"),
        None => log::info!("réponses en pleine précision"),
    }

    let adresse = config.adresse_complete();
    let serveur = Serveur::lier(&adresse, config.options())
        .await
        .with_context(|| format!("écoute impossible sur {adresse}"))?;

    serveur.servir().await?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Pas de serveur TCP dans un navigateur.
}
