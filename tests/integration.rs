//! tests/integration.rs — batteries d'intégration pour res2code
//!
//! Pipeline complet sur système de fichiers réel (tempdir) :
//! génération, round-trip des littéraux, idempotence (fraîcheur),
//! régénération sur entrée modifiée, entrée vide.

use std::fs;
use std::thread::sleep;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use pretty_assertions::assert_eq;

use res2code::emit::{EmitOutcome, EmitPlan};

// -----------------------------------------------------------------------------
// Helpers de test
// -----------------------------------------------------------------------------

fn utf8(p: &std::path::Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(p.to_path_buf()).expect("chemin temp UTF-8")
}

fn write_input(dir: &Utf8Path, name: &str, bytes: &[u8]) -> Utf8PathBuf {
    let p = dir.join(name);
    fs::write(&p, bytes).expect("écriture entrée");
    p
}

/// Extrait les octets du tableau généré dans le `.cpp`.
fn bytes_from_source(source_text: &str) -> Vec<u8> {
    let start = source_text.find("[] = {").expect("ouverture du tableau") + "[] = {".len();
    let end = source_text[start..].find("};").expect("fermeture du tableau") + start;
    source_text[start..end]
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|lit| u8::from_str_radix(lit.trim_start_matches("0x"), 16).expect("littéral hex"))
        .collect()
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[test]
fn generate_then_parse_back_roundtrip() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = utf8(tmp.path());
    let payload: Vec<u8> = (0u8..=255).chain(0u8..44).collect();
    let input = write_input(&dir, "sprite_sheet.bin", &payload);

    let outcome = EmitPlan::for_input(input)
        .with_out_dir(dir.join("generated"))
        .emit()
        .expect("emit ok");

    let arts = match outcome {
        EmitOutcome::Written(a) => a,
        other => panic!("attendu Written, got {other:?}"),
    };
    assert_eq!(arts.len(), 2);
    assert_eq!(arts[0].kind, "header");
    assert_eq!(arts[1].kind, "source");

    let header = fs::read_to_string(&arts[0].path).unwrap();
    let source = fs::read_to_string(&arts[1].path).unwrap();

    // Les deux artefacts référencent le même identifiant.
    assert!(header.contains("size_t Get_Sprite_Sheet_Bin_Size();"));
    assert!(source.contains("return sizeof(data_Sprite_Sheet_Bin);"));

    // Round-trip : le tableau relit exactement les octets d'entrée.
    assert_eq!(bytes_from_source(&source), payload);
}

#[test]
fn literal_scenario_icon_32() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = utf8(tmp.path());
    let input = write_input(&dir, "icon-32.png", &[0x01, 0x02]);

    EmitPlan::for_input(input)
        .with_out_dir(dir.clone())
        .emit()
        .expect("emit ok");

    // Base de sortie dérivée du nom d'entrée.
    let header = fs::read_to_string(dir.join("icon_32_png.h")).unwrap();
    let source = fs::read_to_string(dir.join("icon_32_png.cpp")).unwrap();

    assert!(header.contains("// Original filename: icon-32.png"));
    assert!(header.contains("tools::ByteArray Get_Icon_32_Png_Array();"));
    assert!(source.contains("  0x01,0x02"));
    assert_eq!(bytes_from_source(&source), vec![0x01, 0x02]);
}

#[test]
fn explicit_base_is_respected() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = utf8(tmp.path());
    let input = write_input(&dir, "logo.bmp", &[0xff]);

    EmitPlan::for_input(input)
        .with_out_base(dir.join("assets/logo_res"))
        .emit()
        .expect("emit ok");

    // Le répertoire intermédiaire est créé au passage.
    assert!(dir.join("assets/logo_res.h").is_file());
    assert!(dir.join("assets/logo_res.cpp").is_file());
}

#[test]
fn empty_input_yields_empty_array() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = utf8(tmp.path());
    let input = write_input(&dir, "empty.dat", &[]);

    EmitPlan::for_input(input)
        .with_out_dir(dir.clone())
        .emit()
        .expect("emit ok");

    let source = fs::read_to_string(dir.join("empty_dat.cpp")).unwrap();
    assert!(source.contains("static const unsigned char data_Empty_Dat[] = {"));
    assert_eq!(bytes_from_source(&source), Vec::<u8>::new());
}

#[test]
fn second_run_skips_and_leaves_outputs_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = utf8(tmp.path());
    let input = write_input(&dir, "cursor.png", &[9, 8, 7]);

    let plan = EmitPlan::for_input(input).with_out_dir(dir.clone());
    plan.emit().expect("premier emit");

    let header_path = dir.join("cursor_png.h");
    let source_path = dir.join("cursor_png.cpp");
    let before_h = fs::metadata(&header_path).unwrap().modified().unwrap();
    let before_cpp = fs::read_to_string(&source_path).unwrap();

    match plan.emit().expect("second emit") {
        EmitOutcome::Skipped { header, source } => {
            assert_eq!(header, header_path);
            assert_eq!(source, source_path);
        }
        other => panic!("attendu Skipped, got {other:?}"),
    }

    assert_eq!(fs::metadata(&header_path).unwrap().modified().unwrap(), before_h);
    assert_eq!(fs::read_to_string(&source_path).unwrap(), before_cpp);
}

#[test]
fn modified_input_triggers_rewrite_of_both_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = utf8(tmp.path());
    let input = write_input(&dir, "theme.cfg", &[0x10, 0x20]);

    let plan = EmitPlan::for_input(input.clone()).with_out_dir(dir.clone());
    plan.emit().expect("premier emit");

    // Dépasse la granularité mtime des systèmes de fichiers lents (1 s).
    sleep(Duration::from_millis(1100));
    fs::write(&input, [0xde, 0xad, 0xbe, 0xef]).unwrap();

    match plan.emit().expect("second emit") {
        EmitOutcome::Written(arts) => assert_eq!(arts.len(), 2),
        other => panic!("attendu Written, got {other:?}"),
    }

    let source = fs::read_to_string(dir.join("theme_cfg.cpp")).unwrap();
    assert_eq!(bytes_from_source(&source), vec![0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn force_regenerates_even_when_fresh() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = utf8(tmp.path());
    let input = write_input(&dir, "beep.wav", &[1]);

    let plan = EmitPlan::for_input(input).with_out_dir(dir.clone());
    plan.emit().expect("premier emit");

    match plan.clone().with_force(true).emit().expect("emit forcé") {
        EmitOutcome::Written(arts) => assert_eq!(arts.len(), 2),
        other => panic!("attendu Written, got {other:?}"),
    }
}

#[test]
fn is_stale_reports_without_writing() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = utf8(tmp.path());
    let input = write_input(&dir, "font.ttf", &[3, 3]);

    let plan = EmitPlan::for_input(input).with_out_dir(dir.clone());
    assert!(plan.is_stale().unwrap());
    // Rien n'a été écrit par le contrôle.
    assert!(!dir.join("font_ttf.h").exists());

    plan.emit().expect("emit ok");
    assert!(!plan.is_stale().unwrap());
}
