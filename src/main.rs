use std::{process::ExitCode, sync::Arc};

use rand::SeedableRng;

use glint::{
    cli::{Arguments, Parser},
    framebuffer::ImageFile,
    render::Tracer,
    scenes::{self, SceneOptions},
    textures::{ImageMap, Texture},
};

fn main() -> ExitCode {
    // Parsing cli args
    let cli_args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(cli_args.verbosity.log_level_filter())
        .init();

    // set up enviroment
    let mut rng = if let Some(seed) = cli_args.seed {
        // use user-provided seed if available
        rand::rngs::SmallRng::seed_from_u64(seed)
    } else if cfg!(debug_assertions) {
        // if debugging, use deterministic seed
        rand::rngs::SmallRng::seed_from_u64(0)
    } else {
        // otherwise real psuedo-randomness
        rand::rngs::SmallRng::from_entropy()
    };

    let texture = cli_args
        .texture
        .as_ref()
        .and_then(|path| match ImageMap::open(path) {
            Ok(map) => Some(Arc::new(map) as Arc<dyn Texture>),
            Err(why) => {
                log::warn!("Could not load texture {:?}, using a checkerboard: {}", path, why);
                None
            }
        });

    // Get scene
    let options = SceneOptions {
        camera: cli_args.camera,
        texture,
        attenuation: !cli_args.no_attenuation,
    };
    let mut scene = scenes::get_scene(cli_args.scene, &options, &mut rng);
    log::debug!("{:?} scene with {} shapes", cli_args.scene, scene.shapes.len());

    let tracer = Tracer::new(cli_args.bounce_depth, cli_args.sampling);
    let mut output = ImageFile::new(cli_args.image_width, cli_args.image_height, &cli_args.output);

    match tracer.render(&mut scene, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            log::error!("Failed to write {:?}: {}", cli_args.output, why);
            ExitCode::FAILURE
        }
    }
}
