//! name.rs — Dérivation des identifiants depuis le nom de fichier
//!
//! Deux transformations pures et déterministes sur le *nom* du fichier
//! d'entrée (jamais le chemin complet) :
//! - [`function_name`] : fragment d'identifiant C++ (`my-icon.png` → `My_Icon_Png`).
//! - [`output_base_name`] : nom de base des fichiers générés
//!   (`My-Icon.PNG` → `my_icon_png`).
//!
//! Aucune des deux ne dépend du contenu du fichier ; toute chaîne d'entrée
//! (y compris vide) produit une sortie déterministe, éventuellement vide.

/// Caractères traités comme séparateurs dans les noms de ressources.
pub const SEPARATORS: [char; 3] = ['-', '.', '_'];

fn is_separator(ch: char) -> bool {
    SEPARATORS.contains(&ch)
}

/// Forme « nom de fonction » : chaque séparateur devient `_`, la première
/// lettre du nom et celle qui suit chaque séparateur passent en majuscule,
/// tout le reste est conservé tel quel (casse incluse).
pub fn function_name(file_name: &str) -> String {
    let mut result = String::with_capacity(file_name.len());
    let mut upper_next = true;
    for ch in file_name.chars() {
        if is_separator(ch) {
            result.push('_');
            upper_next = true;
        } else if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}

/// Forme « nom de sortie » : chaque séparateur devient `_`, puis le tout
/// passe en minuscules.
pub fn output_base_name(file_name: &str) -> String {
    file_name
        .chars()
        .flat_map(|ch| {
            if is_separator(ch) {
                '_'.to_lowercase()
            } else {
                ch.to_lowercase()
            }
        })
        .collect()
}

/* ───────────────────────────── Tests ───────────────────────────── */
