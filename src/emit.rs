//! emit.rs — Plan d'émission des artefacts générés
//!
//! À partir d'un chemin d'entrée (+ options), produire et écrire proprement
//! la paire `.h` / `.cpp` :
//! - résolution des chemins de sortie (base dérivée du nom d'entrée, ou
//!   base explicite, ou répertoire préfixé) ;
//! - contrôle de fraîcheur par mtimes : si les deux sorties existent et sont
//!   plus récentes que l'entrée, on ne réécrit rien ;
//! - création du répertoire de sortie (« existe déjà » = succès) ;
//! - écriture inconditionnelle des deux fichiers sinon.
//!
//! Le prédicat de fraîcheur [`should_regenerate`] est pur (testable sans
//! système de fichiers) ; la lecture des mtimes est isolée dans [`mtime`].
//!
//! Usage typique :
//! ```no_run
//! use camino::Utf8PathBuf;
//! use res2code::emit::{EmitPlan, EmitOutcome};
//!
//! let plan = EmitPlan::for_input(Utf8PathBuf::from("res/icon-32.png"))
//!     .with_out_dir(Utf8PathBuf::from("generated"));
//! match plan.emit().expect("emit") {
//!     EmitOutcome::Skipped { .. } => eprintln!("à jour"),
//!     EmitOutcome::Written(arts) => eprintln!("{} artefact(s)", arts.len()),
//! }
//! ```

use std::fs;
use std::io::{self, Write};
use std::time::SystemTime;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

use crate::encode::encode_bytes;
use crate::name::{function_name, output_base_name};
use crate::render::{render_pair, HEADER_EXT, SOURCE_EXT};

/* ───────────────────────────── Erreurs ───────────────────────────── */

/// Erreurs d'émission. Pas de reprise interne : transformation one-shot,
/// l'appelant relance en cas d'échec (une sortie tronquée peut subsister).
#[derive(Debug, Error)]
pub enum EmitError {
    /// Le fichier d'entrée n'existe pas (ou son nom est inutilisable).
    #[error("fichier d'entrée introuvable: {0}")]
    InputNotFound(Utf8PathBuf),

    /// Le fichier d'entrée existe mais sa lecture a échoué.
    #[error("lecture de l'entrée impossible: {path}")]
    InputUnreadable {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    /// Création du répertoire de sortie refusée pour une autre raison
    /// que « existe déjà ».
    #[error("création du répertoire de sortie échouée: {path}")]
    OutputDirCreate {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    /// Écriture d'un artefact échouée.
    #[error("écriture de l'artefact échouée: {path}")]
    WriteFailed {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

/* ───────────────────────────── Types publics ───────────────────────────── */

/// Artefact écrit (pour logs/tests).
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Type logique ("header", "source").
    pub kind: &'static str,
    /// Chemin de sortie.
    pub path: Utf8PathBuf,
    /// Taille en octets (UTF-8).
    pub size: usize,
}

/// Résultat d'une émission.
#[derive(Debug)]
pub enum EmitOutcome {
    /// Sorties plus récentes que l'entrée : rien n'a été touché.
    Skipped {
        header: Utf8PathBuf,
        source: Utf8PathBuf,
    },
    /// Les deux artefacts ont été (ré)écrits.
    Written(Vec<Artifact>),
}

/// Chemins de sortie résolus pour une invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Base commune (sans extension).
    pub base: Utf8PathBuf,
    /// Fichier de déclarations (`<base>.h`).
    pub header: Utf8PathBuf,
    /// Fichier de définitions (`<base>.cpp`).
    pub source: Utf8PathBuf,
}

/// Plan complet d'émission pour une ressource.
#[derive(Debug, Clone)]
pub struct EmitPlan {
    /// Chemin du fichier binaire d'entrée.
    input: Utf8PathBuf,
    /// Base de sortie explicite (sans extension). Sinon dérivée du nom
    /// d'entrée via [`output_base_name`].
    out_base: Option<Utf8PathBuf>,
    /// Répertoire préfixé à la base résolue.
    out_dir: Option<Utf8PathBuf>,
    /// Ignore le contrôle de fraîcheur.
    force: bool,
}

impl EmitPlan {
    /// Plan de base dérivé d'un chemin d'entrée.
    pub fn for_input(input: Utf8PathBuf) -> Self {
        Self { input, out_base: None, out_dir: None, force: false }
    }

    /// Définit la base de sortie (sans extension).
    pub fn with_out_base(mut self, base: impl Into<Utf8PathBuf>) -> Self {
        self.out_base = Some(base.into());
        self
    }

    /// Définit le répertoire de sortie commun.
    pub fn with_out_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    /// Force la régénération même si les sorties sont fraîches.
    pub fn with_force(mut self, yes: bool) -> Self {
        self.force = yes;
        self
    }

    /// Nom du fichier d'entrée (jamais le chemin complet).
    fn input_file_name(&self) -> Result<&str, EmitError> {
        self.input
            .file_name()
            .ok_or_else(|| EmitError::InputNotFound(self.input.clone()))
    }

    /// Résolution des chemins de sortie. Pur (aucun accès disque).
    ///
    /// - Base : `out_base` si fournie, sinon `output_base_name(nom d'entrée)`.
    /// - Si `out_dir` est fourni, il préfixe la base.
    /// - Cibles : `<base>.h` et `<base>.cpp`.
    pub fn resolve_paths(&self) -> Result<ResolvedPaths, EmitError> {
        let base = match &self.out_base {
            Some(b) => b.clone(),
            None => Utf8PathBuf::from(output_base_name(self.input_file_name()?)),
        };
        let base = match &self.out_dir {
            Some(dir) => dir.join(base),
            None => base,
        };
        let header = Utf8PathBuf::from(format!("{base}.{HEADER_EXT}"));
        let source = Utf8PathBuf::from(format!("{base}.{SOURCE_EXT}"));
        Ok(ResolvedPaths { base, header, source })
    }

    /// Vrai si une régénération aurait lieu (entrée plus récente qu'une des
    /// sorties, sortie manquante, ou `force`). Probe les mtimes réels.
    pub fn is_stale(&self) -> Result<bool, EmitError> {
        if self.force {
            return Ok(true);
        }
        let paths = self.resolve_paths()?;
        let input_mtime =
            mtime(&self.input).ok_or_else(|| EmitError::InputNotFound(self.input.clone()))?;
        Ok(should_regenerate(
            input_mtime,
            mtime(&paths.header),
            mtime(&paths.source),
        ))
    }

    /// Émet la paire `.h` / `.cpp` (ou s'abstient si tout est frais).
    pub fn emit(&self) -> Result<EmitOutcome, EmitError> {
        let paths = self.resolve_paths()?;
        let input_mtime =
            mtime(&self.input).ok_or_else(|| EmitError::InputNotFound(self.input.clone()))?;

        if !self.force
            && !should_regenerate(input_mtime, mtime(&paths.header), mtime(&paths.source))
        {
            return Ok(EmitOutcome::Skipped { header: paths.header, source: paths.source });
        }

        let bytes = fs::read(&self.input).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                EmitError::InputNotFound(self.input.clone())
            } else {
                EmitError::InputUnreadable { path: self.input.clone(), source: e }
            }
        })?;

        let original_name = self.input_file_name()?;
        let pair = render_pair(original_name, &function_name(original_name), &encode_bytes(&bytes));

        if let Some(parent) = paths.base.parent() {
            if !parent.as_str().is_empty() {
                ensure_dir(parent)?;
            }
        }
        write_text(&paths.header, &pair.header)?;
        write_text(&paths.source, &pair.source)?;

        Ok(EmitOutcome::Written(vec![
            Artifact { kind: "header", path: paths.header, size: pair.header.len() },
            Artifact { kind: "source", path: paths.source, size: pair.source.len() },
        ]))
    }
}

/* ───────────────────────────── Fraîcheur ───────────────────────────── */

/// Prédicat de régénération, pur : vrai si une des sorties manque, ou si
/// l'entrée est strictement plus récente que l'une d'elles. Des mtimes
/// égaux comptent comme frais (pas de réécriture).
pub fn should_regenerate(
    input: SystemTime,
    header: Option<SystemTime>,
    source: Option<SystemTime>,
) -> bool {
    match (header, source) {
        (Some(h), Some(s)) => input > h || input > s,
        _ => true,
    }
}

/// Mtime d'un chemin, `None` si le fichier manque ou n'est pas consultable.
pub fn mtime(path: &Utf8Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/* ───────────────────────────── Helpers fichiers ───────────────────────────── */

/// Crée le répertoire (et ses parents). « Existe déjà » est un succès ;
/// toute autre erreur remonte.
pub fn ensure_dir(path: &Utf8Path) -> Result<(), EmitError> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(EmitError::OutputDirCreate { path: path.to_owned(), source: e }),
    }
}

fn write_text(path: &Utf8Path, text: &str) -> Result<(), EmitError> {
    let mut f = fs::File::create(path)
        .map_err(|e| EmitError::WriteFailed { path: path.to_owned(), source: e })?;
    f.write_all(text.as_bytes())
        .map_err(|e| EmitError::WriteFailed { path: path.to_owned(), source: e })
}

/* ───────────────────────────── Tests ───────────────────────────── */
