//! res2code — Générateur de ressources embarquées
//!
//! Transforme un fichier binaire quelconque en une paire de sources C++
//! compilables : un `.h` (déclarations des accesseurs) et un `.cpp`
//! (tableau d'octets + corps des accesseurs). La ressource est ainsi
//! embarquée dans le binaire final au lieu d'être lue sur disque.
//!
//! ## Modules
//! - `name`   : dérivation des identifiants à partir du nom de fichier.
//! - `encode` : encodage des octets en littéraux hexadécimaux (13 par ligne).
//! - `render` : remplissage des gabarits .h / .cpp (fonctions pures).
//! - `emit`   : plan d'émission, fraîcheur (mtimes), écriture des artefacts.
//!
//! ## Usage typique
//! ```no_run
//! use camino::Utf8PathBuf;
//! use res2code::emit::EmitPlan;
//!
//! let plan = EmitPlan::for_input(Utf8PathBuf::from("res/icon-32.png"))
//!     .with_out_dir(Utf8PathBuf::from("generated"));
//! let outcome = plan.emit().expect("emit");
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, unused_must_use)]

pub mod emit;
pub mod encode;
pub mod name;
pub mod render;

// ---------- Reexports de confort ----------
pub use emit::{Artifact, EmitError, EmitOutcome, EmitPlan};
pub use encode::{encode_bytes, encode_reader};
pub use name::{function_name, output_base_name};
pub use render::{render_pair, ArtifactPair};

// ---------- Version ----------
/// Version du crate (lisible, via Cargo).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Renvoie une jolie bannière de version (utile pour logs/outils).
pub fn version() -> String {
    format!("res2code {VERSION}")
}
