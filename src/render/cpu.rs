use std::sync::Arc;

use kurbo::{Point, Rect};

use crate::assets::font::{FontAsset, TextBrushRgba8};
use crate::assets::images::DecorativeImage;
use crate::foundation::config::SlideConfig;
use crate::foundation::date::ImageSide;
use crate::foundation::error::{FodError, FodResult};
use crate::layout::fit::{FactLayout, TitleLayout};
use crate::render::geometry::{SlideGeometry, slide_geometry};

/// A composed slide as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct SlideFrame {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Everything drawn on a slide, already chosen and laid out.
#[derive(Clone, Copy, Debug)]
pub struct SlideContent<'a> {
    pub background: [u8; 3],
    pub image: &'a DecorativeImage,
    pub side: ImageSide,
    pub title: &'a TitleLayout,
    pub fact: &'a FactLayout,
}

/// Rasterize a slide: background, decorative image, title, underline, then fact lines.
#[tracing::instrument(skip_all, fields(side = ?content.side, font_size = content.fact.font_size))]
pub fn compose_slide(
    content: &SlideContent<'_>,
    font: &mut FontAsset,
    cfg: &SlideConfig,
) -> FodResult<SlideFrame> {
    let width: u16 = cfg
        .canvas_width
        .try_into()
        .map_err(|_| FodError::render("canvas width exceeds u16"))?;
    let height: u16 = cfg
        .canvas_height
        .try_into()
        .map_err(|_| FodError::render("canvas height exceeds u16"))?;

    let geometry = slide_geometry(
        cfg,
        content.side,
        (content.image.width, content.image.height),
        content.title,
        content.fact,
    );

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    let [r, g, b] = content.background;
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, 255));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        width as f64,
        height as f64,
    ));

    draw_image(&mut ctx, content.image, &geometry)?;

    draw_text(
        &mut ctx,
        font,
        &content.title.text,
        content.title.font_size,
        geometry.title,
    );
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(white());
    ctx.fill_rect(&rect_to_cpu(geometry.underline));

    for (line, origin) in content
        .fact
        .lines
        .iter()
        .zip(geometry.fact_line_origins(content.fact.lines.len()))
    {
        draw_text(&mut ctx, font, line, content.fact.font_size, origin);
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    Ok(SlideFrame {
        width: cfg.canvas_width,
        height: cfg.canvas_height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn draw_image(
    ctx: &mut vello_cpu::RenderContext,
    image: &DecorativeImage,
    geometry: &SlideGeometry,
) -> FodResult<()> {
    let pixmap = pixmap_from_premul_bytes(&image.rgba8_premul, image.width, image.height)?;
    let paint = vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    };
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        geometry.image.x0,
        geometry.image.y0,
    )));
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        image.width as f64,
        image.height as f64,
    ));
    Ok(())
}

/// Draw one line of white text with its layout box's top-left at `origin`.
fn draw_text(
    ctx: &mut vello_cpu::RenderContext,
    font: &mut FontAsset,
    text: &str,
    size_px: f32,
    origin: Point,
) {
    let layout = font.layout_line(text, size_px, TextBrushRgba8::WHITE);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font.font_data())
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

fn white() -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> FodResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| FodError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| FodError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(FodError::render("pixmap byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| {
            vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]])
        })
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

/// Convert premultiplied RGBA8 to straight RGB8, dropping alpha.
pub fn premul_rgba_to_rgb(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() / 4 * 3);
    for px in data.chunks_exact(4) {
        let a = px[3] as u16;
        if a == 0 {
            out.extend_from_slice(&[0, 0, 0]);
            continue;
        }
        for &c in &px[..3] {
            out.push(((c as u16 * 255 + a / 2) / a).min(255) as u8);
        }
    }
    out
}
