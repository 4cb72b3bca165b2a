//! src/main.rs — CLI res2code
//!
//! Exemples :
//!   res2code -i res/icon-32.png
//!   res2code -i res/icon-32.png -o icons/icon32 -d generated
//!   res2code -i res/icon-32.png --check
//!
//! Notes :
//! - Sans -o/--output, la base de sortie est dérivée du nom d'entrée
//!   (`icon-32.png` → `icon_32_png`), donnant `icon_32_png.h` / `.cpp`.
//! - Si les deux sorties sont plus récentes que l'entrée, rien n'est réécrit
//!   (sauf --force).
//! - `--check` n'écrit rien ; il rapporte ce qui serait (ré)généré.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use camino::Utf8PathBuf;
use clap::Parser;

use res2code::emit::{EmitOutcome, EmitPlan};

#[derive(Parser, Debug)]
#[command(name = "res2code", version, about = "Ressource binaire -> sources C++ embarquables (.h/.cpp)")]
struct Cli {
    /// Fichier binaire d'entrée à encoder
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: PathBuf,

    /// Base de sortie, sans extension. Par défaut : dérivée du nom d'entrée
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Répertoire préfixé à la base de sortie
    #[arg(short = 'd', long = "output_directory", value_name = "DIR")]
    output_directory: Option<PathBuf>,

    /// Régénère même si les sorties sont plus récentes que l'entrée
    #[arg(long, default_value_t = false)]
    force: bool,

    /// Ne rien écrire ; rapporte ce qui serait (ré)généré (dry-run)
    #[arg(long, default_value_t = false)]
    check: bool,
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("❌ {err:#}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    color_eyre::install().ok();
    let cli = Cli::parse();

    let mut plan = EmitPlan::for_input(utf8(cli.input)?).with_force(cli.force);
    if let Some(base) = cli.output {
        plan = plan.with_out_base(utf8(base)?);
    }
    if let Some(dir) = cli.output_directory {
        plan = plan.with_out_dir(utf8(dir)?);
    }

    if cli.check {
        let paths = plan.resolve_paths()?;
        if plan.is_stale()? {
            eprintln!("🛠️  À régénérer : {} + {}", paths.header, paths.source);
        } else {
            eprintln!("⏭️  À jour : {} + {}", paths.header, paths.source);
        }
        return Ok(());
    }

    match plan.emit()? {
        EmitOutcome::Skipped { header, source } => {
            eprintln!("⏭️  À jour, rien à faire : {header} + {source}");
        }
        EmitOutcome::Written(artifacts) => {
            for a in &artifacts {
                eprintln!("📝 {} -> {} ({} octets)", a.kind, a.path, a.size);
            }
            eprintln!("✅ OK");
        }
    }
    Ok(())
}

fn utf8(p: PathBuf) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(p).map_err(|p| anyhow!("chemin non-UTF8: {}", p.display()))
}
