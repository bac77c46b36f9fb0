use crate::error::RenderError;
use crate::refs::{ObjectReferences, RefType};
use image::{ColorType, DynamicImage};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::{Path, PathBuf};

/// A raster image to be placed on one or more pages. RGB JPEGs are embedded
/// into the PDF byte-for-byte; everything else is re-encoded as Flate-compressed
/// RGB samples, with a separate soft mask when the source has an alpha channel.
pub enum ImageData {
    DirectlyEmbeddableJpeg(PathBuf),
    Raster(DynamicImage),
}

pub struct Image {
    pub data: ImageData,
    /// Pixel width of the source
    pub width: u32,
    /// Pixel height of the source
    pub height: u32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Load an image from disk, sniffing the format from the file contents
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> Result<Image, RenderError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;

        let format = image::guess_format(&data)?;
        let image = image::load_from_memory_with_format(&data, format)?;

        match (format, image.color()) {
            (image::ImageFormat::Jpeg, ColorType::Rgb8) => {
                // no transcoding needed, the reader decodes DCT itself
                let width = image.width();
                let height = image.height();

                Ok(Image {
                    data: ImageData::DirectlyEmbeddableJpeg(path.to_owned()),
                    width,
                    height,
                })
            }
            _ => Ok(Self::new_raster(image)),
        }
    }

    /// Wrap an already-decoded image
    pub fn new_raster(image: DynamicImage) -> Image {
        let width = image.width();
        let height = image.height();
        Image {
            data: ImageData::Raster(image),
            width,
            height,
        }
    }

    fn encode(&self) -> Result<EncodeOutput, RenderError> {
        match &self.data {
            ImageData::DirectlyEmbeddableJpeg(path) => {
                let bytes = std::fs::read(path)?;
                Ok(EncodeOutput {
                    filter: Filter::DctDecode,
                    bytes,
                    mask: None,
                })
            }
            ImageData::Raster(image) => {
                use image::GenericImageView;
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<_> = image.pixels().map(|p| (p.2).0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                Ok(EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes,
                    mask,
                })
            }
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        image_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), RenderError> {
        let id = refs.gen(RefType::Image(image_index));

        let encoded = self.encode()?;

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));
        if let Some(mask_id) = &mask_id {
            image.s_mask(*mask_id);
        }

        image.finish();

        if let Some(mask_id) = mask_id {
            let mut s_mask = writer.image_xobject(mask_id, encoded.mask.as_ref().unwrap().as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }

        Ok(())
    }
}
