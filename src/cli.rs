//! Definition of command line arguments

pub use clap::Parser;

pub use clap_verbosity_flag::Verbosity;

use crate::{
    render::Sampling,
    scenes::{CameraKind, SceneType},
};

/// Parses the commandline arguments into an [Arguments] struct
pub fn parse_args() -> Arguments {
    Arguments::parse()
}

/// Argument definitions for [clap::Parser]
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Arguments {
    /// The path to the file to write the resulting image into
    #[clap(
        short,
        long,
        value_parser = valid_image_file,
        default_value = "output.png",
        value_name = "FILE"
    )]
    pub output: std::path::PathBuf,

    /// The width of the generated image
    #[clap(
        short = 'w',
        long = "width",
        value_parser = valid_count::<u32>,
        default_value_t = 800,
        value_name = "NUM"
    )]
    pub image_width: u32,

    /// The height of the generated image
    #[clap(
        short = 'H',
        long = "height",
        value_parser = valid_count::<u32>,
        default_value_t = 600,
        value_name = "NUM"
    )]
    pub image_height: u32,

    /// number of reflection bounces
    ///
    /// 0 disables reflections, transparency is followed regardless
    #[clap(short, long = "bounces", default_value_t = 1, value_name = "NUM")]
    pub bounce_depth: u16,

    /// How many primary rays are sent through each pixel
    #[clap(long, value_enum, default_value_t = Sampling::Grid3x3)]
    pub sampling: Sampling,

    /// The projection used by the camera
    #[clap(short, long, value_enum, default_value_t = CameraKind::Perspective)]
    pub camera: CameraKind,

    /// The hardcoded scene to use
    #[clap(short, long, value_enum, default_value_t = SceneType::Showcase)]
    pub scene: SceneType,

    /// Image mapped onto the textured surfaces of the scene
    #[clap(short, long, value_name = "FILE")]
    pub texture: Option<std::path::PathBuf>,

    /// The seed used for psuedorandom number generation
    #[clap(long)]
    pub seed: Option<u64>,

    /// Disables distance falloff of every light
    #[clap(long)]
    pub no_attenuation: bool,

    #[clap(flatten)]
    pub verbosity: self::Verbosity,
}

/// Checks whether the given integer value is greater than 0
fn valid_count<T>(s: &str) -> Result<T, String>
where
    T: num_traits::PrimInt + std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Display,
{
    match s.parse::<T>() {
        Ok(count) if count > T::zero() => Ok(count),
        Ok(_) => Err("count must be greater than 0".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Checks whether the given output file has an image format this build can write
fn valid_image_file(s: &str) -> Result<std::path::PathBuf, String> {
    let path = std::path::PathBuf::from(s);
    match image::ImageFormat::from_path(&path).and_then(valid_image_format) {
        Ok(()) => Ok(path),
        Err(e) => Err(e.to_string()),
    }
}

/// Rejects formats whose encoder was not compiled in
///
/// [image::ImageOutputFormat] only carries variants for the enabled image features.
fn valid_image_format(format: image::ImageFormat) -> image::ImageResult<()> {
    use image::{error, ImageOutputFormat};
    match ImageOutputFormat::from(format) {
        ImageOutputFormat::Unsupported(_) => Err(error::ImageError::Unsupported(
            error::UnsupportedError::from(error::ImageFormatHint::from(format)),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn check_cli() {
        Arguments::command().debug_assert()
    }

    #[test]
    fn valid_output_file() {
        // text files are not valid image files
        let res = Arguments::command().try_get_matches_from(["glint", "--output", "bad.txt"]);

        assert!(res.is_err(), "Expected an error during argument parsing");

        assert_eq!(
            res.as_ref().unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation,
            "Expected an unrecognized image format error"
        );
    }

    #[test]
    fn zero_width_rejected() {
        let res = Arguments::try_parse_from(["glint", "--width", "0"]);
        assert_eq!(res.unwrap_err().kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn defaults() {
        let args = Arguments::try_parse_from(["glint"]).unwrap();
        assert_eq!(args.bounce_depth, 1);
        assert_eq!(args.sampling, Sampling::Grid3x3);
        assert_eq!(args.camera, CameraKind::Perspective);
        assert_eq!(args.scene, SceneType::Showcase);
        assert!(!args.no_attenuation);
        assert!(args.texture.is_none());
    }

    #[test]
    fn full_command_line() {
        let args = Arguments::try_parse_from([
            "glint",
            "-o",
            "frame.ppm",
            "-w",
            "64",
            "-H",
            "48",
            "--bounces",
            "0",
            "--sampling",
            "single",
            "--camera",
            "orthographic",
            "--scene",
            "ellipsoids",
            "--no-attenuation",
        ])
        .unwrap();
        assert_eq!(args.output, std::path::PathBuf::from("frame.ppm"));
        assert_eq!((args.image_width, args.image_height), (64, 48));
        assert_eq!(args.bounce_depth, 0);
        assert_eq!(args.sampling, Sampling::Single);
        assert_eq!(args.camera, CameraKind::Orthographic);
        assert_eq!(args.scene, SceneType::Ellipsoids);
        assert!(args.no_attenuation);
    }
}
