//! 2D textures decoded through the `image` crate.
//!
//! The tutorials bind the same image with different sampling setups, so the
//! wrap mode, filters, mipmap generation and vertical flip are caller
//! choices collected in [`TextureSettings`].

use std::path::Path;
use std::sync::Arc;

use glow::HasContext;
use image::{DynamicImage, GenericImageView};

/// Sampling and upload options for a [`Texture`].
#[derive(Clone, Copy, Debug)]
pub struct TextureSettings {
    /// Wrap mode for both S and T (`glow::REPEAT`, `CLAMP_TO_EDGE`, ...).
    pub wrap: u32,
    pub min_filter: u32,
    pub mag_filter: u32,
    pub mipmaps: bool,
    /// Flip rows on upload. Image files store the top row first while GL
    /// texture coordinates start at the bottom.
    pub flip_vertical: bool,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            wrap: glow::REPEAT,
            min_filter: glow::LINEAR,
            mag_filter: glow::LINEAR,
            mipmaps: true,
            flip_vertical: true,
        }
    }
}

/// A texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
}

impl Texture {
    /// Decodes an image file and uploads it. Returns the decode or GL error
    /// as a string; the tutorials treat that as fatal.
    pub fn open<P: AsRef<Path>>(
        gl: &Arc<glow::Context>,
        path: P,
        settings: TextureSettings,
    ) -> Result<Self, String> {
        let image = image::open(path.as_ref()).map_err(|e| e.to_string())?;
        Self::from_image(gl, &image, settings)
    }

    /// Uploads an already decoded image as RGBA8.
    pub fn from_image(
        gl: &Arc<glow::Context>,
        image: &DynamicImage,
        settings: TextureSettings,
    ) -> Result<Self, String> {
        let (width, height) = image.dimensions();
        let image = if settings.flip_vertical {
            image.flipv()
        } else {
            image.clone()
        };
        let data = image.to_rgba8().into_raw();

        unsafe {
            let texture = gl.create_texture().map_err(|e| e.to_string())?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data.as_slice())),
            );
            if settings.mipmaps {
                gl.generate_mipmap(glow::TEXTURE_2D);
            }
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, settings.wrap as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, settings.wrap as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                settings.min_filter as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                settings.mag_filter as i32,
            );
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
            })
        }
    }

    /// Binds the texture to the given texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}
