// src/reseau/protocole.rs
//
// Trame du fil : longueur u16 big-endian, puis les octets UTF-8.
// (même cadrage que DataOutputStream.writeUTF côté JVM, pour les textes usuels)

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Port d’écoute par défaut.
pub const PORT_DEFAUT: u16 = 5000;

/// Message de fin de session : jamais transmis au noyau, jamais de réponse.
pub const STOP: &str = "#";

/// Taille maximale d’un message (limite du préfixe u16).
pub const TAILLE_MAX: usize = u16::MAX as usize;

/// Lit un message complet.
/// - Ok(None) : fin de flux propre (avant tout préfixe)
/// - Err(UnexpectedEof) : flux coupé au milieu d’un message
/// - Err(InvalidData) : octets non UTF-8
pub async fn lire_message<R>(r: &mut R) -> io::Result<Option<String>>
where
    R: AsyncRead + Unpin,
{
    let mut prefixe = [0u8; 2];
    let lus = r.read(&mut prefixe[..1]).await?;
    if lus == 0 {
        return Ok(None);
    }
    r.read_exact(&mut prefixe[1..]).await?;

    let n = u16::from_be_bytes(prefixe) as usize;
    let mut octets = vec![0u8; n];
    r.read_exact(&mut octets).await?;

    String::from_utf8(octets)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Écrit un message (préfixe + octets) puis vide le tampon.
pub async fn ecrire_message<W>(w: &mut W, texte: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let octets = texte.as_bytes();
    let n = u16::try_from(octets.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("message trop long: {} octets (max {TAILLE_MAX})", octets.len()),
        )
    })?;

    w.write_all(&n.to_be_bytes()).await?;
    w.write_all(octets).await?;
    w.flush().await
}
