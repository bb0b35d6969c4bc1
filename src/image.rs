use crate::refs::{ObjectReferences, RefType};
use crate::LabelError;
use image::{ColorType, DynamicImage, GenericImageView, ImageFormat};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::Path;

/// How the pixels of an image end up in the PDF
pub enum ImageData {
    /// Baseline RGB JPEGs can be embedded byte-for-byte
    Jpeg(Vec<u8>),
    /// Anything else is decoded and re-compressed
    Decoded(DynamicImage),
}

/// A raster image (logo, QR code, photo) that can be drawn onto labels. Images are
/// stored once per document and can be drawn any number of times.
pub struct Image {
    pub data: ImageData,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Load an image from disk, guessing its format from its contents
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Image, LabelError> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes(data)
    }

    /// Load an image from encoded bytes (PNG, JPEG, GIF, ...)
    pub fn from_bytes(data: Vec<u8>) -> Result<Image, LabelError> {
        let format = image::guess_format(&data)?;
        let image = image::load_from_memory_with_format(&data, format)?;

        match (format, image.color()) {
            (ImageFormat::Jpeg, ColorType::Rgb8) => {
                // we can embed it directly!
                let (width, height) = image.dimensions();
                Ok(Image {
                    data: ImageData::Jpeg(data),
                    width,
                    height,
                })
            }
            _ => Ok(Self::from_image(image)),
        }
    }

    /// Wrap an already decoded image, i.e. one generated in memory
    pub fn from_image(image: DynamicImage) -> Image {
        let (width, height) = image.dimensions();
        Image {
            data: ImageData::Decoded(image),
            width,
            height,
        }
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    fn encode(&self) -> EncodeOutput {
        match &self.data {
            ImageData::Jpeg(bytes) => EncodeOutput {
                filter: Filter::DctDecode,
                bytes: bytes.clone(),
                mask: None,
            },
            ImageData::Decoded(image) => {
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<u8> = image.pixels().map(|p| (p.2).0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes,
                    mask,
                }
            }
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}
