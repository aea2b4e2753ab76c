// src/reseau/client.rs
//
// Client du service : une connexion persistante, une réponse par requête.

use std::io;

use tokio::net::TcpStream;

use super::protocole::{ecrire_message, lire_message, STOP};

pub struct Client {
    flux: TcpStream,
}

impl Client {
    pub async fn connecter(adresse: &str) -> io::Result<Self> {
        let flux = TcpStream::connect(adresse).await?;
        log::info!("connecté à {}", flux.peer_addr()?);
        Ok(Self { flux })
    }

    /// Envoie une expression et attend la réponse texte (éventuellement "NaN").
    pub async fn demander(&mut self, expression: &str) -> io::Result<String> {
        if expression == STOP {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "\"#\" termine la session : utiliser terminer()",
            ));
        }

        ecrire_message(&mut self.flux, expression).await?;
        lire_message(&mut self.flux).await?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "serveur déconnecté")
        })
    }

    /// Envoie "#" (pas de réponse attendue) puis ferme la connexion.
    pub async fn terminer(mut self) -> io::Result<()> {
        ecrire_message(&mut self.flux, STOP).await?;
        log::info!("session terminée");
        Ok(())
    }
}
