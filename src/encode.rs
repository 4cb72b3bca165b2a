//! encode.rs — Encodage des octets en littéraux hexadécimaux
//!
//! Produit le corps textuel du tableau C++ : chaque octet devient un littéral
//! `0xNN` (minuscules), séparé par des virgules, sans virgule finale, avec au
//! plus [`LITERALS_PER_LINE`] littéraux par ligne visuelle. La virgule reste
//! en fin de ligne ; le retour à la ligne est suivi de l'indentation fixe
//! [`INDENT`], qui ouvre aussi le texte.
//!
//! Une entrée vide produit le texte réduit à l'indentation (aucune erreur).
//! L'ordre des octets est préservé exactement. Le texte encodé est accumulé
//! en mémoire : les ressources embarquées sont supposées petites.

use std::fmt::Write as _;
use std::io::{self, Read};

/// Nombre maximal de littéraux par ligne visuelle.
pub const LITERALS_PER_LINE: usize = 13;

/// Indentation fixe ouvrant le texte et chaque ligne suivante.
pub const INDENT: &str = "  ";

/// Encode une tranche d'octets en liste de littéraux `0xNN`.
pub fn encode_bytes(bytes: &[u8]) -> String {
    // Estimation large : 5 chars par littéral + retours à la ligne.
    let mut out = String::with_capacity(INDENT.len() + bytes.len() * 5 + bytes.len() / LITERALS_PER_LINE * 3);
    out.push_str(INDENT);
    let mut on_line = 0usize;
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if on_line == LITERALS_PER_LINE {
            out.push('\n');
            out.push_str(INDENT);
            on_line = 0;
        }
        let _ = write!(out, "0x{b:02x}");
        on_line += 1;
    }
    out
}

/// Encode depuis une source lisible, octet par octet (comportement de
/// référence). Même sortie que [`encode_bytes`] ; seule la consommation
/// diffère. Les erreurs de lecture remontent telles quelles.
pub fn encode_reader<R: Read>(reader: R) -> io::Result<String> {
    let mut out = String::from(INDENT);
    let mut on_line = 0usize;
    let mut first = true;
    for byte in reader.bytes() {
        let b = byte?;
        if !first {
            out.push(',');
        }
        if on_line == LITERALS_PER_LINE {
            out.push('\n');
            out.push_str(INDENT);
            on_line = 0;
        }
        let _ = write!(out, "0x{b:02x}");
        first = false;
        on_line += 1;
    }
    Ok(out)
}

/* ───────────────────────────── Tests ───────────────────────────── */
