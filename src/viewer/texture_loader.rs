use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::content::Experience;

// --- Load the image of every experience, keeping slots aligned with the slider ---
pub fn load_experience_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    experiences: &[Experience],
) -> Vec<Option<Texture2D>> {
    experiences
        .iter()
        .map(|experience| {
            let path = experience.image.as_deref()?;
            match load_texture_with_exif_rotation(rl, thread, path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    // The slide is still shown, just without its picture
                    warn!(
                        company = %experience.company,
                        path = %path.display(),
                        error = %e,
                        "skipping experience image"
                    );
                    None
                }
            }
        })
        .collect()
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> anyhow::Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only reliable for JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(&file_bytes, image_path)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("failed to decode {}: {e}", image_path.display()))?;

    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; flips are ignored
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    debug!(path = %image_path.display(), orientation, "experience image decoded");

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {e}", image_path.display()))?;

    Ok(texture)
}

fn read_orientation(file_bytes: &[u8], image_path: &Path) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            debug!(path = %image_path.display(), error = %e, "no EXIF data, keeping orientation");
            1
        }
    }
}
