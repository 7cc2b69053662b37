#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // скрыть консоль только в release
// Минимальная точка входа: логгер, настройки, локаль и запуск окна.
// Остальное в модуле app (src/app.rs).

use eframe::{egui, egui_wgpu::WgpuConfiguration, wgpu::PresentMode};

mod app;
mod dnd;
mod localization;
mod logger;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    app::settings::load_settings_from_disk();

    // Язык из настроек, иначе системная локаль
    let preferred_lang = { app::settings::APP_SETTINGS.read().unwrap().language };
    if let Err(e) = localization::initialize_localization(preferred_lang) {
        log::error!("Localization initialization failed: {e}");
    }

    // Wgpu без vsync: меньше задержка ввода при перетаскивании, возможен tearing
    let wgpu_options = WgpuConfiguration {
        present_mode: PresentMode::AutoNoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        vsync: false,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1140.0, 820.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        localization::translate("app-window-title").as_str(),
        native_options,
        Box::new(|cc| {
            // Светлая тема: карточки рисуются поверх общего серого фона
            let mut visuals = egui::Visuals::light();
            visuals.panel_fill = ui_constants::APPLE_GRAY;
            cc.egui_ctx.set_visuals(visuals);
            Box::new(app::CardSortApp::default())
        }),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
