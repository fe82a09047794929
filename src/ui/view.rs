//! Rendering a panel's contents into an egui `Ui`

use eframe::egui;
use image::RgbaImage;

use super::input::{ViewContext, translate};
use crate::dock::{BrowserContent, Panel};
use crate::geometry::Size;
use crate::input::{InputEvent, PointerKind};

/// Per-panel GPU texture cache
#[derive(Default)]
pub struct PanelView {
    texture: Option<egui::TextureHandle>,
    /// Display revision the texture was uploaded from
    uploaded: Option<u64>,
    address_id: Option<egui::Id>,
}

impl PanelView {
    /// Address field on top, browser view filling the rest.
    ///
    /// Sampling is driven by the host, not by painting.
    pub fn show(&mut self, ui: &mut egui::Ui, panel: &mut Panel) {
        self.render_address_bar(ui, panel);

        let min = match panel.content() {
            BrowserContent::Texture(texture) => texture.display().min_size(),
            BrowserContent::Direct(_) => Size::ZERO,
        };
        let desired = ui.available_size().max(egui::vec2(min.width, min.height));
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click_and_drag());
        panel.resize_view(Size::new(rect.width(), rect.height()));

        self.paint(ui, panel, rect);
        self.forward_input(ui, panel, rect, &response);
    }

    /// Widget id of the address field, once laid out
    pub fn address_id(&self) -> Option<egui::Id> {
        self.address_id
    }

    fn render_address_bar(&mut self, ui: &mut egui::Ui, panel: &mut Panel) {
        let hint = panel.address().placeholder().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(panel.address_mut().text_mut())
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        );
        self.address_id = Some(response.id);

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            if let Err(e) = panel.submit_address() {
                log::debug!("Address submit ignored: {}", e);
            }
        }
    }

    fn paint(&mut self, ui: &mut egui::Ui, panel: &mut Panel, rect: egui::Rect) {
        let painter = ui.painter_at(rect);

        match panel.content_mut() {
            BrowserContent::Texture(texture) => {
                let display = texture.display();
                match display.pixmap() {
                    Some(pixmap) => {
                        if self.uploaded != Some(display.revision()) {
                            self.upload(ui.ctx(), pixmap);
                            self.uploaded = Some(display.revision());
                        }
                        if let Some(handle) = &self.texture {
                            // Centred; the sampler already kept the aspect ratio
                            let size = egui::vec2(pixmap.width() as f32, pixmap.height() as f32);
                            let image_rect = egui::Rect::from_center_size(rect.center(), size);
                            painter.image(handle.id(), image_rect, full_uv(), egui::Color32::WHITE);
                        }
                    }
                    None => {
                        painter.text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            display.placeholder(),
                            egui::FontId::proportional(14.0),
                            ui.visuals().weak_text_color(),
                        );
                    }
                }
            }
            BrowserContent::Direct(direct) => {
                if let Some(frame) = direct.frame() {
                    self.upload(ui.ctx(), frame.image());
                    self.uploaded = None;
                    if let Some(handle) = &self.texture {
                        painter.image(handle.id(), rect, full_uv(), egui::Color32::WHITE);
                    }
                }
            }
        }
    }

    fn upload(&mut self, ctx: &egui::Context, image: &RgbaImage) {
        let size = [image.width() as usize, image.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());

        match &mut self.texture {
            Some(handle) => handle.set(color_image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture(
                    "browser-dock-frame",
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }
    }

    fn forward_input(
        &self,
        ui: &mut egui::Ui,
        panel: &mut Panel,
        rect: egui::Rect,
        response: &egui::Response,
    ) {
        let has_focus = response.has_focus();
        if let BrowserContent::Texture(texture) = panel.content_mut() {
            texture.display_mut().set_focus(has_focus);
        }

        let events = ui.input(|i| {
            let view = ViewContext::new(i, rect, response.is_pointer_button_down_on(), has_focus);
            translate(&i.events, &view)
        });

        let mut pressed = false;
        for event in &events {
            if let InputEvent::Pointer(e) = event {
                pressed |= e.kind == PointerKind::Press;
            }
            if let Err(e) = panel.handle_input(event) {
                log::debug!("Input dropped: {}", e);
                break;
            }
        }

        let wants_focus = match panel.content() {
            BrowserContent::Texture(texture) => texture.display().has_focus(),
            BrowserContent::Direct(_) => pressed,
        };
        if wants_focus && !has_focus {
            response.request_focus();
        }
    }
}

fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}
