//! Top-down PNG rendering of placement results and shared example setup.
use std::path::Path;

use glam::{Vec2, Vec3};
use image::{Rgb, RgbImage};
use object_placer::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Maps the XZ plane onto an image; +X is right, +Z is up.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    /// World-space XZ extent shown in the image.
    pub view_extent: Vec2,
    /// World-space XZ point at the image center.
    pub view_center: Vec2,
    pub background: [u8; 3],
    pub point_color: [u8; 3],
    pub point_radius: i32,
    pub outline_color: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), view_extent: Vec2) -> Self {
        Self {
            image_size,
            view_extent,
            view_center: Vec2::ZERO,
            background: [26, 26, 26],
            point_color: [235, 235, 235],
            point_radius: 3,
            outline_color: [220, 60, 60],
        }
    }

    pub fn with_view_center(mut self, center: Vec2) -> Self {
        self.view_center = center;
        self
    }

    pub fn with_background(mut self, rgb: [u8; 3]) -> Self {
        self.background = rgb;
        self
    }

    pub fn with_point_style(mut self, rgb: [u8; 3], radius: i32) -> Self {
        self.point_color = rgb;
        self.point_radius = radius;
        self
    }

    fn to_pixel(&self, p: Vec3) -> (f32, f32) {
        let (w, h) = (self.image_size.0 as f32, self.image_size.1 as f32);
        let min = self.view_center - self.view_extent * 0.5;
        let u = (p.x - min.x) / self.view_extent.x;
        let v = (p.z - min.y) / self.view_extent.y;
        (u * w, (1.0 - v) * h)
    }
}

/// Draw `outline` and the world positions of `nodes`, then write a PNG to `path`.
pub fn render_top_down_png(
    nodes: &[SceneNode],
    outline: &[LineSegment],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    for segment in outline {
        draw_line(&mut img, config, segment.start, segment.end);
    }
    for node in nodes {
        let (x, y) = config.to_pixel(node.world_transform().position);
        draw_disc(&mut img, x as i32, y as i32, config.point_radius, config.point_color);
    }

    img.save(path.as_ref())?;
    tracing::info!("Wrote {}", path.as_ref().display());
    Ok(())
}

fn put(img: &mut RgbImage, x: i32, y: i32, rgb: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(rgb));
    }
}

fn draw_line(img: &mut RgbImage, config: &RenderConfig, a: Vec3, b: Vec3) {
    let (x0, y0) = config.to_pixel(a);
    let (x1, y1) = config.to_pixel(b);
    let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as i32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = x0 + (x1 - x0) * t;
        let y = y0 + (y1 - y0) * t;
        put(img, x as i32, y as i32, config.outline_color);
    }
}

fn draw_disc(img: &mut RgbImage, cx: i32, cy: i32, radius: i32, rgb: [u8; 3]) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put(img, cx + dx, cy + dy, rgb);
            }
        }
    }
}
