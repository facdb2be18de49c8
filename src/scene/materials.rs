//! Material construction for celestial bodies.
//!
//! Textures are optional; a body whose texture file is absent degrades to
//! its flat catalog color instead of aborting.

use bevy::prelude::*;
use std::path::Path;

/// Error probing a body's texture.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("texture file not found in assets directory: {path}")]
    Missing { path: String },
}

/// Whether a texture path points at an existing file in the assets
/// directory.
///
/// The asset server reports missing files asynchronously, after the scene
/// is built, so the fallback decision needs a synchronous probe.
pub fn texture_available(path: &str) -> bool {
    Path::new("assets").join(path).is_file()
}

/// Resolve a texture path to an image handle, or report it missing.
pub fn resolve_texture(
    asset_server: &AssetServer,
    path: &str,
) -> Result<Handle<Image>, TextureError> {
    if !texture_available(path) {
        return Err(TextureError::Missing {
            path: path.to_string(),
        });
    }
    Ok(asset_server.load(path.to_owned()))
}

/// Build the material for an orbiting body.
///
/// The flat color is always set, so the body renders sensibly while its
/// texture loads — and permanently if the texture is missing.
pub fn body_material(
    asset_server: &AssetServer,
    color: Color,
    texture: Option<&str>,
) -> StandardMaterial {
    let texture_handle = texture.and_then(|path| match resolve_texture(asset_server, path) {
        Ok(handle) => Some(handle),
        Err(err) => {
            warn!("Using flat color: {err}");
            None
        }
    });

    StandardMaterial {
        base_color: color,
        base_color_texture: texture_handle,
        ..default()
    }
}

/// Build the sun's material: emissive so it glows despite sitting at the
/// light source.
pub fn sun_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        emissive: color.to_linear() * 2.0,
        ..default()
    }
}
