//! Native window showing a rendered figure

use crate::renderer::RenderedImage;
use eframe::egui;
use hplot_common::{HPlotError, Result};
use tracing::info;

/// Single-texture app that shows the figure until the window is closed
struct FigureViewer {
    image: egui::ColorImage,
    texture: Option<egui::TextureHandle>,
}

impl FigureViewer {
    fn new(image: egui::ColorImage) -> Self {
        Self {
            image,
            texture: None,
        }
    }
}

impl eframe::App for FigureViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let image = &self.image;
        let texture = self
            .texture
            .get_or_insert_with(|| ctx.load_texture("figure", image.clone(), egui::TextureOptions::LINEAR));

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Image::new(&*texture).shrink_to_fit());
                });
            });
    }
}

/// Open a window titled `title` showing `image`; blocks until it is closed
pub fn show_image(title: &str, image: RenderedImage) -> Result<()> {
    let size = [image.width as f32, image.height as f32];
    let color_image = egui::ColorImage::from_rgb(
        [image.width as usize, image.height as usize],
        &image.pixels,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(size),
        ..Default::default()
    };

    info!("Showing figure, close the window to exit");
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(FigureViewer::new(color_image)))),
    )
    .map_err(|e| HPlotError::display(e.to_string()))
}
