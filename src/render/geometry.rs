use kurbo::{Point, Rect};

use crate::foundation::config::SlideConfig;
use crate::foundation::date::ImageSide;
use crate::layout::fit::{FactLayout, TitleLayout};

/// Where each element of a slide goes, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideGeometry {
    pub side: ImageSide,
    /// Bounds of the (already shrunk) decorative image.
    pub image: Rect,
    /// Left edge shared by the title, underline and fact lines.
    pub text_x: f64,
    /// Top-left of the title.
    pub title: Point,
    pub underline: Rect,
    /// Top of the first fact line.
    pub fact_top: f64,
    pub line_advance: f64,
}

impl SlideGeometry {
    /// Horizontal extent reserved for text: `text_x .. text_x + text_width`.
    pub fn text_column(&self, cfg: &SlideConfig) -> (f64, f64) {
        (self.text_x, self.text_x + cfg.text_width as f64)
    }

    /// Top-left of each fact line, in order.
    pub fn fact_line_origins(&self, line_count: usize) -> impl Iterator<Item = Point> + use<> {
        let (x, top, step) = (self.text_x, self.fact_top, self.line_advance);
        (0..line_count).map(move |i| Point::new(x, top + step * i as f64))
    }
}

/// Place the image on `side` and the text column on the other half.
///
/// The image is vertically centered; the fact block is vertically centered using its own
/// `total_height`.
pub fn slide_geometry(
    cfg: &SlideConfig,
    side: ImageSide,
    image_size: (u32, u32),
    title: &TitleLayout,
    fact: &FactLayout,
) -> SlideGeometry {
    let canvas_w = cfg.canvas_width as f64;
    let canvas_h = cfg.canvas_height as f64;
    let margin = cfg.margin as f64;
    let (img_w, img_h) = (image_size.0 as f64, image_size.1 as f64);

    let image_x = match side {
        ImageSide::Left => margin,
        ImageSide::Right => canvas_w - img_w - margin,
    };
    let image_y = ((canvas_h - img_h) / 2.0).floor();

    let text_x = match side {
        ImageSide::Left => canvas_w - cfg.image_box as f64 - margin,
        ImageSide::Right => margin,
    };

    let title_y = cfg.title_y as f64;
    let underline_y = title_y + title.height as f64 + cfg.underline_gap as f64;
    let half = cfg.underline_thickness as f64 / 2.0;

    SlideGeometry {
        side,
        image: Rect::new(image_x, image_y, image_x + img_w, image_y + img_h),
        text_x,
        title: Point::new(text_x, title_y),
        underline: Rect::new(
            text_x,
            underline_y - half,
            text_x + title.width as f64,
            underline_y + half,
        ),
        fact_top: ((canvas_h - fact.total_height as f64) / 2.0).floor(),
        line_advance: fact.line_advance as f64,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
