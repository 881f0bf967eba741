use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use constants::placement::DIE_FACES;
use constants::render_settings::{
    DIE_FACE_RGBA, DIE_FACE_TEXTURE_SIZE, DIE_PIP_RADIUS, DIE_PIP_RGBA, RETICLE_RGBA,
    RETICLE_TEXTURE_SIZE,
};

const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

// Reticle radii as fractions of the half size
const RETICLE_DOT: f32 = 0.12;
const RETICLE_RING_INNER: f32 = 0.78;
const RETICLE_RING_OUTER: f32 = 0.95;

/// Pip centres in face-local coordinates (0..1, origin top-left).
pub fn pip_centres(value: u32) -> &'static [(f32, f32)] {
    const L: f32 = 0.27;
    const M: f32 = 0.5;
    const H: f32 = 0.73;
    match value {
        1 => &[(M, M)],
        2 => &[(L, L), (H, H)],
        3 => &[(L, L), (M, M), (H, H)],
        4 => &[(L, L), (H, L), (L, H), (H, H)],
        5 => &[(L, L), (H, L), (M, M), (L, H), (H, H)],
        6 => &[(L, L), (H, L), (L, M), (H, M), (L, H), (H, H)],
        _ => &[],
    }
}

/// RGBA8 texels of the pip atlas: one square cell per face value, left to right.
pub fn die_atlas_pixels(cell: u32) -> Vec<u8> {
    let width = cell * DIE_FACES;
    let mut pixels = Vec::with_capacity((width * cell * 4) as usize);
    for y in 0..cell {
        for x in 0..width {
            let value = x / cell + 1;
            let u = ((x % cell) as f32 + 0.5) / cell as f32;
            let v = (y as f32 + 0.5) / cell as f32;
            let on_pip = pip_centres(value)
                .iter()
                .any(|&(px, py)| Vec2::new(u - px, v - py).length() <= DIE_PIP_RADIUS);
            pixels.extend_from_slice(if on_pip { &DIE_PIP_RGBA } else { &DIE_FACE_RGBA });
        }
    }
    pixels
}

/// RGBA8 texels of the surface reticle: centre dot inside a ring, clear elsewhere.
pub fn reticle_pixels(size: u32) -> Vec<u8> {
    let half = size as f32 * 0.5;
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let offset = Vec2::new(x as f32 + 0.5 - half, y as f32 + 0.5 - half);
            let r = offset.length() / half;
            let lit = r <= RETICLE_DOT || (RETICLE_RING_INNER..=RETICLE_RING_OUTER).contains(&r);
            pixels.extend_from_slice(if lit { &RETICLE_RGBA } else { &TRANSPARENT });
        }
    }
    pixels
}

fn rgba_image(width: u32, height: u32, pixels: Vec<u8>) -> Image {
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        pixels,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

pub fn die_atlas_image() -> Image {
    rgba_image(
        DIE_FACE_TEXTURE_SIZE * DIE_FACES,
        DIE_FACE_TEXTURE_SIZE,
        die_atlas_pixels(DIE_FACE_TEXTURE_SIZE),
    )
}

pub fn reticle_image() -> Image {
    rgba_image(
        RETICLE_TEXTURE_SIZE,
        RETICLE_TEXTURE_SIZE,
        reticle_pixels(RETICLE_TEXTURE_SIZE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: u32 = 32;

    fn texel(pixels: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * width + x) * 4) as usize;
        [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
    }

    fn atlas_texel(pixels: &[u8], value: u32, u: f32, v: f32) -> [u8; 4] {
        let x = (value - 1) * CELL + (u * CELL as f32) as u32;
        let y = (v * CELL as f32) as u32;
        texel(pixels, CELL * DIE_FACES, x, y)
    }

    #[test]
    fn each_face_shows_its_pips() {
        let pixels = die_atlas_pixels(CELL);
        assert_eq!(pixels.len(), (CELL * DIE_FACES * CELL * 4) as usize);

        for value in 1..=DIE_FACES {
            let centres = pip_centres(value);
            assert_eq!(centres.len(), value as usize);
            for &(u, v) in centres {
                assert_eq!(atlas_texel(&pixels, value, u, v), DIE_PIP_RGBA);
            }
            assert_eq!(atlas_texel(&pixels, value, 0.02, 0.02), DIE_FACE_RGBA);
        }
    }

    #[test]
    fn centre_pip_only_on_odd_faces() {
        let pixels = die_atlas_pixels(CELL);

        for value in 1..=DIE_FACES {
            let expected = if value % 2 == 1 { DIE_PIP_RGBA } else { DIE_FACE_RGBA };
            assert_eq!(atlas_texel(&pixels, value, 0.5, 0.5), expected, "face {value}");
        }
    }

    #[test]
    fn reticle_has_dot_ring_and_clear_gaps() {
        let size = 64;
        let pixels = reticle_pixels(size);
        let centre = size / 2;

        assert_eq!(texel(&pixels, size, centre, centre), RETICLE_RGBA);
        // Between dot and ring.
        assert_eq!(texel(&pixels, size, centre + size / 4, centre), TRANSPARENT);
        // On the ring, ~0.86 of the half size out.
        assert_eq!(texel(&pixels, size, centre + 27, centre), RETICLE_RGBA);
        assert_eq!(texel(&pixels, size, 0, 0), TRANSPARENT);
    }
}
