// src/reseau/serveur.rs
//
// Service TCP centralisé :
// - une tâche tokio par client (sessions concurrentes)
// - requêtes traitées séquentiellement dans une session
// - "#" termine la session (sans réponse)
// - échec d’évaluation => sentinelle "NaN" sur le fil, jamais d’arrêt du processus

use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Local;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpListener;

use super::protocole::{ecrire_message, lire_message, STOP};
use crate::noyau::format::format_reponse;
use crate::noyau::{evaluate, Options};

/// Évalue une requête et produit le texte de réponse (seul point qui émet la sentinelle).
pub fn repondre(expression: &str, options: &Options) -> String {
    let r = evaluate(expression, options);
    if let Err(e) = &r {
        log::warn!("évaluation impossible pour {expression:?}: {e}");
    }
    format_reponse(&r)
}

/// Boucle de session : lit, évalue, répond, jusqu’à "#" ou fin de flux.
/// Retourne le nombre de requêtes servies.
pub async fn session<S>(flux: &mut S, id: usize, options: Options) -> io::Result<usize>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut servies = 0usize;

    while let Some(expression) = lire_message(flux).await? {
        if expression == STOP {
            log::debug!("client {id} : fin de session demandée");
            break;
        }

        log::info!("client {id} demande : {expression}");
        let reponse = repondre(&expression, &options);
        ecrire_message(flux, &reponse).await?;
        servies += 1;
    }

    Ok(servies)
}

/// Pause après un accept en échec (ex. EMFILE) : doublée à chaque échec, bornée.
const PAUSE_ACCEPT_MIN: Duration = Duration::from_millis(10);
const PAUSE_ACCEPT_MAX: Duration = Duration::from_secs(1);

fn pause_accept(echecs: u32) -> Duration {
    PAUSE_ACCEPT_MIN
        .saturating_mul(1u32 << echecs.min(10))
        .min(PAUSE_ACCEPT_MAX)
}

pub struct Serveur {
    ecoute: TcpListener,
    options: Options,
    prochain_id: Arc<AtomicUsize>,
}

impl Serveur {
    /// Ouvre l’écoute sur `adresse` ("hôte:port" ; port 0 = port libre).
    pub async fn lier(adresse: &str, options: Options) -> io::Result<Self> {
        let ecoute = TcpListener::bind(adresse).await?;
        log::info!("serveur démarré sur {}", ecoute.local_addr()?);
        Ok(Self {
            ecoute,
            options,
            prochain_id: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn adresse_locale(&self) -> io::Result<SocketAddr> {
        self.ecoute.local_addr()
    }

    /// Accepte les clients indéfiniment ; une erreur d’accept n’arrête pas le service.
    pub async fn servir(self) -> io::Result<()> {
        log::info!("en attente de clients…");
        let mut echecs = 0u32;

        loop {
            let (mut flux, pair) = match self.ecoute.accept().await {
                Ok(c) => {
                    echecs = 0;
                    c
                }
                Err(e) => {
                    let pause = pause_accept(echecs);
                    log::error!("accept: {e} (nouvel essai dans {pause:?})");
                    echecs = echecs.saturating_add(1);
                    tokio::time::sleep(pause).await;
                    continue;
                }
            };

            let id = self.prochain_id.fetch_add(1, Ordering::Relaxed) + 1;
            let options = self.options;

            tokio::spawn(async move {
                let debut = Instant::now();
                log::info!(
                    "client {id} connecté depuis {pair} à {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S")
                );

                match session(&mut flux, id, options).await {
                    Ok(n) => log::info!(
                        "client {id} déconnecté à {} ({n} requêtes, {:.1?})",
                        Local::now().format("%Y-%m-%d %H:%M:%S"),
                        debut.elapsed()
                    ),
                    Err(e) => log::error!("client {id} : session interrompue : {e}"),
                }
            });
        }
    }
}
