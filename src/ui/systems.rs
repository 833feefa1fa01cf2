use crate::simulation::resources::{Parameters, SeaSimulation};
use crate::ui::logic::{compass_rotation_deg, needle_tips};
use crate::ui::{COMPASS_SIZE, HELP_TEXT};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use seasim::ParameterStore;
use seasim::camera::CameraMode;
use seasim::color::Rgb;
use seasim::params::*;
use seasim::weather::WeatherMode;

pub fn render_control_panel(
    mut contexts: EguiContexts,
    mut params: ResMut<Parameters>,
    simulation: Res<SeaSimulation>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let params = &mut params.0;

    egui::SidePanel::right("control_panel")
        .default_width(300.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Ocean Controls");
                ui.add_space(10.0);

                ui.collapsing("Weather & Environment", |ui| render_weather_section(ui, params));
                ui.collapsing("Time", |ui| {
                    render_time_section(ui, params, simulation.environment().progress)
                });
                ui.collapsing("Ship", |ui| render_ship_section(ui, params, &simulation));
                ui.collapsing("Camera", |ui| render_camera_section(ui, params));
                ui.collapsing("Sky & Space", |ui| render_sky_section(ui, params));
                ui.collapsing("Effects", |ui| render_effects_section(ui, params));
            });
        });

    params.clamp_to_ranges();
}

fn render_weather_section(ui: &mut egui::Ui, params: &mut ParameterStore) {
    egui::ComboBox::from_label("Weather")
        .selected_text(params.weather_mode.label())
        .show_ui(ui, |ui| {
            for mode in WeatherMode::ALL {
                ui.selectable_value(&mut params.weather_mode, mode, mode.label());
            }
        });

    let mut waves = params.wave_intensity;
    if ui
        .add(egui::Slider::new(&mut waves, WAVE_INTENSITY_RANGE).text("Wave Intensity"))
        .changed()
    {
        params.set_wave_intensity(waves);
    }

    ui.checkbox(&mut params.fog_enabled, "Fog");
    ui.add_enabled(
        params.fog_enabled,
        egui::Slider::new(&mut params.fog_density, FOG_DENSITY_RANGE)
            .step_by(0.001)
            .text("Fog Density"),
    );
    color_row(ui, "Water Color", &mut params.water_color);
}

fn render_time_section(ui: &mut egui::Ui, params: &mut ParameterStore, progress: f32) {
    ui.add(egui::Slider::new(&mut params.day_night_speed, DAY_NIGHT_SPEED_RANGE).text("Day/Night Speed"));
    ui.checkbox(&mut params.pause_day_night, "Pause Day/Night");
    ui.add(
        egui::Slider::new(&mut params.ambient_light_intensity, AMBIENT_LIGHT_RANGE)
            .text("Ambient Light"),
    );
    ui.label(format!("Time of day: {:.0}%", progress * 100.0));
}

fn render_ship_section(ui: &mut egui::Ui, params: &mut ParameterStore, simulation: &SeaSimulation) {
    if let Some(reason) = &simulation.vehicle().load_error {
        ui.colored_label(egui::Color32::LIGHT_RED, format!("Ship unavailable: {reason}"));
    }
    ui.add(egui::Slider::new(&mut params.ship_speed, SHIP_SPEED_RANGE).text("Speed"));
    ui.add(egui::Slider::new(&mut params.ship_roll_intensity, ROLL_PITCH_RANGE).text("Roll"));
    ui.add(egui::Slider::new(&mut params.ship_pitch_intensity, ROLL_PITCH_RANGE).text("Pitch"));
    ui.checkbox(&mut params.ship_wake_enabled, "Wake");
    color_row(ui, "Ship Color", &mut params.ship_color);
}

fn render_camera_section(ui: &mut egui::Ui, params: &mut ParameterStore) {
    egui::ComboBox::from_label("Mode")
        .selected_text(params.camera_mode.label())
        .show_ui(ui, |ui| {
            for mode in CameraMode::ALL {
                ui.selectable_value(&mut params.camera_mode, mode, mode.label());
            }
        });
}

fn render_sky_section(ui: &mut egui::Ui, params: &mut ParameterStore) {
    ui.add(egui::Slider::new(&mut params.moon_size, MOON_SIZE_RANGE).text("Moon Size"));
    ui.add(
        egui::Slider::new(&mut params.star_density, STAR_DENSITY_RANGE)
            .step_by(STAR_DENSITY_STEP as f64)
            .text("Star Density"),
    );
}

fn render_effects_section(ui: &mut egui::Ui, params: &mut ParameterStore) {
    ui.checkbox(&mut params.enable_particles, "Sea Spray");
    ui.checkbox(&mut params.enable_seagulls, "Seagulls");
    ui.checkbox(&mut params.enable_compass, "Show Compass");
    ui.checkbox(&mut params.enable_auto_sail, "Auto-Sail");
}

fn color_row(ui: &mut egui::Ui, label: &str, color: &mut Rgb) {
    ui.horizontal(|ui| {
        let mut rgb = color.to_array();
        if ui.color_edit_button_rgb(&mut rgb).changed() {
            *color = Rgb::from_array(rgb);
        }
        ui.label(label);
    });
}

pub fn render_compass(mut contexts: EguiContexts, params: Res<Parameters>, simulation: Res<SeaSimulation>) {
    let Some(rotation) = compass_rotation_deg(params.enable_compass, simulation.vehicle()) else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("compass"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(20.0, 20.0))
        .interactable(false)
        .show(ctx, |ui| {
            let (rect, _) = ui.allocate_exact_size(egui::Vec2::splat(COMPASS_SIZE), egui::Sense::hover());
            let painter = ui.painter();
            let center = rect.center();
            let radius = COMPASS_SIZE / 2.0;
            let face = egui::Color32::from_rgba_unmultiplied(255, 255, 255, 204);

            painter.circle(center, radius, face, egui::Stroke::new(2.0, egui::Color32::DARK_GRAY));
            let [north, south] = needle_tips(center, radius * 0.8, rotation);
            painter.line_segment([center, north], egui::Stroke::new(3.0, egui::Color32::RED));
            painter.line_segment([center, south], egui::Stroke::new(3.0, egui::Color32::DARK_GRAY));
            painter.text(
                north,
                egui::Align2::CENTER_CENTER,
                "N",
                egui::FontId::proportional(14.0),
                egui::Color32::BLACK,
            );
        });
}

pub fn render_help(mut contexts: EguiContexts) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("help"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(20.0, -20.0))
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(HELP_TEXT).color(egui::Color32::WHITE).strong());
        });
}
