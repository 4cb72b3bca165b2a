//! render.rs — Remplissage des gabarits .h / .cpp
//!
//! Fonctions pures : (nom d'origine, identifiant, texte encodé) → deux blobs
//! texte immuables. Aucun état global ; les gabarits sont fixes et remplis
//! par substitution.
//!
//! Invariant : les deux blobs référencent le même identifiant, et l'accesseur
//! de taille est un `sizeof` sur le tableau même que renvoie l'accesseur de
//! buffer — déclaration et définition sont donc toujours d'accord sur le
//! nombre d'octets.

/// Extension du fichier de déclarations généré.
pub const HEADER_EXT: &str = "h";

/// Extension du fichier de définitions généré.
pub const SOURCE_EXT: &str = "cpp";

/// Bandeau commun aux deux fichiers générés.
const BANNER: &str = "\
/************************************************************************/
/*  This file is generated automatically by res2code utility. Do not    */
/*  change it manually.                                                 */
/************************************************************************/";

/// Paire d'artefacts générés : déclarations (`.h`) et définitions (`.cpp`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPair {
    /// Texte du fichier de déclarations.
    pub header: String,
    /// Texte du fichier de définitions.
    pub source: String,
}

/// Remplit les deux gabarits.
///
/// - `original_name` : nom du fichier d'entrée (commentaire de traçabilité).
/// - `func_name` : fragment d'identifiant issu de [`crate::name::function_name`].
/// - `encoded` : liste de littéraux issue de [`crate::encode::encode_bytes`].
pub fn render_pair(original_name: &str, func_name: &str, encoded: &str) -> ArtifactPair {
    ArtifactPair {
        header: render_header(original_name, func_name),
        source: render_source(original_name, func_name, encoded),
    }
}

fn render_header(original_name: &str, func_name: &str) -> String {
    format!(
        r#"
{BANNER}
// Original filename: {original_name}

#pragma once

size_t Get_{func_name}_Size();
const void* Get_{func_name}_Buffer();

namespace tools {{
class ByteArray;
}} // namespace tools

tools::ByteArray Get_{func_name}_Array();

"#
    )
}

fn render_source(original_name: &str, func_name: &str, encoded: &str) -> String {
    format!(
        r#"
{BANNER}
// Original filename: {original_name}

#include "byteArray.h"

namespace {{
static const unsigned char data_{func_name}[] = {{
{encoded}
}};
}} // namespace

size_t Get_{func_name}_Size() {{
  return sizeof(data_{func_name});
}}

const void* Get_{func_name}_Buffer() {{
  return data_{func_name};
}}

tools::ByteArray Get_{func_name}_Array() {{
  return tools::ByteArray(Get_{func_name}_Buffer(), Get_{func_name}_Size());
}}

"#
    )
}

/* ───────────────────────────── Tests ───────────────────────────── */
