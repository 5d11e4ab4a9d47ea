use crate::about;
use crate::session::{Session, MENU_SUBTITLE, MENU_TITLE, SUBMENU_TITLE};
use crate::state::State;
use crate::util::{format_issued_at, icon_label};
use crate::{ToggleApp, INITIAL_WIDTH, PROGRAM_TITLE};
use eframe::egui::{self, Color32, RichText, Ui};

const CONNECTED_COLOR: Color32 = Color32::from_rgb(0, 180, 90);

// --- UI Drawing Functions ---

pub fn draw_about_screen(app: &mut ToggleApp, ui: &mut Ui) {
    ui.set_width(INITIAL_WIDTH);
    ui.vertical_centered(|ui| {
        ui.heading(format!("About {}", PROGRAM_TITLE));
        ui.separator();
        for line in about::about() {
            ui.label(line);
        }
        ui.separator();
        if ui.button("OK").clicked() {
            app.state = State::Running;
        }
    });
}

pub fn draw_running_state(app: &mut ToggleApp, ui: &mut Ui) {
    let Some(session) = app.session.as_mut() else {
        ui.label("Not enabled.");
        return;
    };

    draw_header(session, ui);
    ui.separator();
    draw_toggle(session, ui);
    draw_country_menu(session, ui);
    ui.separator();
    draw_status(session, ui);

    ui.add_space(8.0);
    if ui.button("About").clicked() {
        app.state = State::About;
    }
}

fn draw_header(session: &Session, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label(format!("[{}]", icon_label(session.header_icon())));
        ui.heading(MENU_TITLE);
    });
    ui.label(MENU_SUBTITLE);
}

fn draw_toggle(session: &mut Session, ui: &mut Ui) {
    let mut checked = session.controller.is_connected();
    // toggle_value flips `checked` on click; pass the requested value on
    if ui.toggle_value(&mut checked, MENU_TITLE).clicked() {
        session.controller.toggle(checked);
    }
}

fn draw_country_menu(session: &mut Session, ui: &mut Ui) {
    let mut selected = None;
    let title = format!("[{}] {}", icon_label(session.submenu_icon()), SUBMENU_TITLE);

    ui.menu_button(title, |ui| {
        if session.menu_items.is_empty() {
            ui.label("No countries available");
        }
        egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
            for (i, item) in session.menu_items.iter().enumerate() {
                if ui.button(item.label.as_str()).clicked() {
                    selected = Some(i);
                    ui.close_menu();
                }
            }
        });
    });

    if let Some(index) = selected {
        session.activate_item(index);
    }
}

fn draw_status(session: &Session, ui: &mut Ui) {
    let indicator = session.indicator();
    ui.horizontal(|ui| {
        ui.label("Indicator:");
        if indicator.visible {
            ui.label(RichText::new(icon_label(&indicator.icon)).color(CONNECTED_COLOR));
        } else {
            ui.weak("hidden");
        }
    });

    ui.label(format!("State: {}", session.controller.state()));
    if let Some(last) = session.controller.last_command() {
        ui.weak(format!(
            "Last command ({}): {}",
            format_issued_at(&last.issued_at),
            last.command_line
        ));
    }
}
