// src/main.rs
//
// Somme intelligente — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS/mobile) : eframe::run_native + NativeOptions
// - WEB  (wasm32)                      : eframe::WebRunner + WebOptions + <canvas>
// - Polices : recherche d’une police capable d’afficher le séparateur ٬ (U+066C)
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// Côté NATIF : journal sur stderr, filtre via RUST_LOG (défaut: warn).

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use std::path::{Path, PathBuf};

use eframe::egui;

mod app;
mod config;
mod noyau;

use app::{AppSomme, HistoriqueStore};
use config::Config;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Somme intelligente";

/// Polices candidates, essayées après celles de la configuration.
const POLICES_CANDIDATES: &[&str] = &[
    "arabic_font.ttf",
    "fonts/arabic_font.ttf",
    "assets/arabic_font.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansArabic-Regular.ttf",
    "/system/fonts/NotoNaskhArabic-Regular.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/* ------------------------ Polices (natif) ------------------------ */

/// Première police lisible parmi la configuration puis les candidates.
fn trouver_police(config: &Config) -> Option<(PathBuf, Vec<u8>)> {
    let candidates = config
        .affichage
        .polices
        .iter()
        .cloned()
        .chain(POLICES_CANDIDATES.iter().map(PathBuf::from));

    for chemin in candidates {
        match std::fs::read(&chemin) {
            Ok(octets) => return Some((chemin, octets)),
            Err(e) => log::debug!("police indisponible ({}): {e}", chemin.display()),
        }
    }
    None
}

fn installer_polices(ctx: &egui::Context, police: Option<(PathBuf, Vec<u8>)>) {
    use egui::{FontData, FontDefinitions, FontFamily};

    let Some((chemin, octets)) = police else {
        log::warn!("aucune police arabe trouvée : police par défaut (٬ peut s’afficher mal)");
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert("police_arabe".to_string(), FontData::from_owned(octets).into());

    // En secours : les polices egui restent prioritaires, la nôtre couvre les glyphes manquants.
    for famille in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(famille)
            .or_default()
            .push("police_arabe".to_string());
    }

    ctx.set_fonts(fonts);
    log::info!("police installée: {}", nom_police(&chemin));
}

fn nom_police(chemin: &Path) -> String {
    chemin
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| chemin.display().to_string())
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = config::charger_config();
    let historique = HistoriqueStore::charger(config.chemin_historique());
    let police = trouver_police(&config);
    let delai = config.delai_felicitations();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([340.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |cc| {
            // Contexte egui prêt => polices avant la première frame.
            installer_polices(&cc.egui_ctx, police);
            Ok(Box::new(AppSomme::new(historique, delai)))
        }),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
    // On laisse main() vide pour rester clair.
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppSomme, Config, HistoriqueStore, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus (historique en mémoire seulement)
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        // 1) window/document
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        // 2) element by id
        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        // 3) cast -> HtmlCanvasElement
        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        // 4) run web
        let web_options = eframe::WebOptions::default();
        let delai = Config::default().delai_felicitations();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |_cc| {
                    Ok(Box::new(AppSomme::new(HistoriqueStore::en_memoire(), delai)))
                }),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
