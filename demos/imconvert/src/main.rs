use argh::FromArgs;
use std::path::PathBuf;

use imgio::io::{functional as F, use_backend, ColorMode, EncodeParam};

#[derive(FromArgs)]
/// Read an image with the chosen backend and write it to another format
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path of the output image, the extension selects the format
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// decode backend: native-codec or fast-jpeg
    #[argh(option, default = "String::from(\"native-codec\")")]
    backend: String,

    /// color mode: color, grayscale or unchanged
    #[argh(option, default = "ColorMode::Color")]
    mode: ColorMode,

    /// jpeg quality of the output, 0 to 100
    #[argh(option)]
    quality: Option<u8>,

    /// do not create the output directory
    #[argh(switch)]
    no_mkdir: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    use_backend(&args.backend)?;

    let image = F::imread(&args.input, args.mode)?;
    let [height, width, channels] = image.shape();
    log::info!(
        "read {} ({}x{}x{}, {:?})",
        args.input.display(),
        width,
        height,
        channels,
        image.dtype()
    );

    let params = args
        .quality
        .map(EncodeParam::JpegQuality)
        .into_iter()
        .collect::<Vec<_>>();

    F::imwrite(&image, &args.output, &params, !args.no_mkdir)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}
