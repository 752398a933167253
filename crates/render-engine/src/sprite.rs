//! Watermark sprite rasterization.
//!
//! The watermark is rendered into a small transparent RGBA layer (the
//! sprite) that the compositor then overlays onto the frame. Layer order
//! matches the on-screen stack: blurred drop shadow, text fill, then the
//! dashed drag affordance. Rotation happens last, about the sprite
//! center, into an expanded canvas so nothing is clipped. The sprite
//! center is always the watermark center, which keeps anchor math in the
//! compositor a plain subtraction.

use ab_glyph::{Font, Glyph, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use imprint_compose_core::{measure_text, FontStore};
use imprint_editor_model::watermark::{Color, WatermarkConfig};

/// Fixed drop shadow: black at 0.8 alpha, blurred, offset down-right.
const SHADOW_ALPHA: f32 = 0.8;
const SHADOW_SIGMA: f32 = 2.0;
const SHADOW_OFFSET: f32 = 2.0;

/// Drag affordance box: semi-transparent white, dashed.
const BOX_ALPHA: f32 = 0.3;
const BOX_MARGIN: f32 = 10.0;
const BOX_LINE_WIDTH: f32 = 2.0;
const BOX_DASH: f32 = 5.0;

/// Transparent margin reserved around the text box. Wide enough for the
/// shadow spread and the dashed box at any supported scale factor.
const SPRITE_MARGIN: f32 = 16.0;

/// Rasterize the watermark into a transparent RGBA sprite.
///
/// `scale` is the device-pixel multiplier: 1.0 for export, the device
/// pixel ratio for previews. All pixel-denominated styling (font size,
/// shadow offset, dash lengths) scales with it so previews stay sharp on
/// high-density displays. The configured opacity multiplies every layer,
/// shadow and affordance included.
pub fn render_sprite(
    fonts: &FontStore,
    watermark: &WatermarkConfig,
    scale: f32,
    show_drag_box: bool,
) -> RgbaImage {
    let font_px = watermark.font_size * scale;
    let metrics = measure_text(fonts, &watermark.text, font_px);

    let margin = (SPRITE_MARGIN * scale).ceil();
    let width = (metrics.width.ceil() as f32 + 2.0 * margin).max(1.0) as u32;
    let height = (font_px.ceil() + 2.0 * margin).max(1.0) as u32;

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let text_left = center_x - metrics.width as f32 / 2.0;
    let text_top = center_y - font_px / 2.0;

    let scaled = fonts.font().as_scaled(PxScale::from(font_px));
    let baseline_y = text_top + scaled.ascent();

    let mut sprite = RgbaImage::new(width, height);

    if watermark.shadow {
        let mut shadow = RgbaImage::new(width, height);
        draw_text_layer(
            &mut shadow,
            fonts,
            &watermark.text,
            font_px,
            text_left + SHADOW_OFFSET * scale,
            baseline_y + SHADOW_OFFSET * scale,
            Color::black(),
            SHADOW_ALPHA,
        );
        let shadow = image::imageops::blur(&shadow, SHADOW_SIGMA * scale);
        image::imageops::overlay(&mut sprite, &shadow, 0, 0);
    }

    draw_text_layer(
        &mut sprite,
        fonts,
        &watermark.text,
        font_px,
        text_left,
        baseline_y,
        watermark.color,
        1.0,
    );

    // Opacity applies to shadow and fill only. The drag affordance keeps
    // its fixed alpha, so it stays visible even at opacity 0.
    apply_opacity(&mut sprite, watermark.opacity);

    if show_drag_box {
        let mut affordance = RgbaImage::new(width, height);
        draw_dashed_rect(
            &mut affordance,
            text_left - BOX_MARGIN * scale,
            text_top - BOX_MARGIN * scale,
            metrics.width as f32 + 2.0 * BOX_MARGIN * scale,
            font_px + 2.0 * BOX_MARGIN * scale,
            BOX_LINE_WIDTH * scale,
            BOX_DASH * scale,
        );
        image::imageops::overlay(&mut sprite, &affordance, 0, 0);
    }

    if watermark.rotation_degrees != 0.0 {
        rotate_expanded(&sprite, watermark.rotation_radians())
    } else {
        sprite
    }
}

/// Draw `text` into `layer` with per-pixel coverage blending.
#[allow(clippy::too_many_arguments)]
fn draw_text_layer(
    layer: &mut RgbaImage,
    fonts: &FontStore,
    text: &str,
    font_px: f32,
    origin_x: f32,
    baseline_y: f32,
    color: Color,
    alpha: f32,
) {
    let font = fonts.font();
    let scaled = font.as_scaled(PxScale::from(font_px));

    let mut caret = origin_x;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled.glyph_id(c);
        if let Some(prev) = prev_glyph {
            caret += scaled.kern(prev, glyph_id);
        }

        let glyph: Glyph = glyph_id.with_scale_and_position(
            PxScale::from(font_px),
            ab_glyph::point(caret, baseline_y),
        );

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                if x < 0 || y < 0 || x >= layer.width() as i32 || y >= layer.height() as i32 {
                    return;
                }
                let pixel = layer.get_pixel_mut(x as u32, y as u32);
                blend_pixel(pixel, color, coverage * alpha);
            });
        }

        caret += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }
}

/// Source-over blend of a solid color at the given alpha onto one pixel.
fn blend_pixel(pixel: &mut Rgba<u8>, color: Color, alpha: f32) {
    let sa = alpha.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }

    let da = pixel[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return;
    }

    let blend = |src: u8, dst: u8| {
        let s = src as f32 / 255.0;
        let d = dst as f32 / 255.0;
        (((s * sa + d * da * (1.0 - sa)) / out_a) * 255.0).round() as u8
    };

    *pixel = Rgba([
        blend(color.r, pixel[0]),
        blend(color.g, pixel[1]),
        blend(color.b, pixel[2]),
        (out_a * 255.0).round() as u8,
    ]);
}

/// Draw a dashed hollow rectangle in semi-transparent white.
fn draw_dashed_rect(
    layer: &mut RgbaImage,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    line_width: f32,
    dash: f32,
) {
    let stroke = Rgba([255, 255, 255, (BOX_ALPHA * 255.0).round() as u8]);
    let lw = line_width.max(1.0).round() as u32;
    let dash = dash.max(1.0);

    let mut dash_rect = |x: f32, y: f32, w: f32, h: f32| {
        let w = w.round().max(1.0) as u32;
        let h = h.round().max(1.0) as u32;
        draw_filled_rect_mut(
            layer,
            Rect::at(x.round() as i32, y.round() as i32).of_size(w, h),
            stroke,
        );
    };

    // Horizontal edges: dashes march left to right, pattern on/off.
    let mut t = 0.0;
    while t < width {
        let len = dash.min(width - t);
        if (t / dash) as u32 % 2 == 0 {
            dash_rect(left + t, top, len, lw as f32);
            dash_rect(left + t, top + height - lw as f32, len, lw as f32);
        }
        t += dash;
    }

    // Vertical edges.
    let mut t = 0.0;
    while t < height {
        let len = dash.min(height - t);
        if (t / dash) as u32 % 2 == 0 {
            dash_rect(left, top + t, lw as f32, len);
            dash_rect(left + width - lw as f32, top + t, lw as f32, len);
        }
        t += dash;
    }
}

/// Rotate a sprite about its center into an expanded canvas.
///
/// Inverse mapping with bilinear sampling; pixels sampled outside the
/// source are transparent. The output is sized to the rotated bounding
/// box so the content is never clipped, and the center is preserved.
fn rotate_expanded(src: &RgbaImage, radians: f32) -> RgbaImage {
    let (w, h) = (src.width() as f32, src.height() as f32);
    let (sin, cos) = radians.sin_cos();

    let out_w = (w * cos.abs() + h * sin.abs()).ceil().max(1.0) as u32;
    let out_h = (w * sin.abs() + h * cos.abs()).ceil().max(1.0) as u32;

    let src_cx = w / 2.0;
    let src_cy = h / 2.0;
    let out_cx = out_w as f32 / 2.0;
    let out_cy = out_h as f32 / 2.0;

    let mut out = RgbaImage::new(out_w, out_h);

    for y in 0..out_h {
        for x in 0..out_w {
            let dx = x as f32 + 0.5 - out_cx;
            let dy = y as f32 + 0.5 - out_cy;

            // Rotate backwards into source space.
            let sx = dx * cos + dy * sin + src_cx - 0.5;
            let sy = -dx * sin + dy * cos + src_cy - 0.5;

            let sampled = sample_bilinear(src, sx, sy);
            if sampled[3] > 0 {
                out.put_pixel(x, y, sampled);
            }
        }
    }

    out
}

/// Bilinear sample with transparent out-of-bounds.
fn sample_bilinear(src: &RgbaImage, x: f32, y: f32) -> Rgba<u8> {
    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let fetch = |px: i64, py: i64| -> [f32; 4] {
        if px < 0 || py < 0 || px >= src.width() as i64 || py >= src.height() as i64 {
            [0.0; 4]
        } else {
            let p = src.get_pixel(px as u32, py as u32);
            [p[0] as f32, p[1] as f32, p[2] as f32, p[3] as f32]
        }
    };

    let p00 = fetch(x0, y0);
    let p10 = fetch(x0 + 1, y0);
    let p01 = fetch(x0, y0 + 1);
    let p11 = fetch(x0 + 1, y0 + 1);

    let mut out = [0u8; 4];
    for (i, slot) in out.iter_mut().enumerate() {
        let top = p00[i] * (1.0 - fx) + p10[i] * fx;
        let bottom = p01[i] * (1.0 - fx) + p11[i] * fx;
        *slot = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8;
    }
    Rgba(out)
}

/// Scale every pixel's alpha by the configured opacity.
fn apply_opacity(sprite: &mut RgbaImage, opacity: f32) {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity >= 1.0 {
        return;
    }
    for pixel in sprite.pixels_mut() {
        pixel[3] = (pixel[3] as f32 * opacity).round() as u8;
    }
}
