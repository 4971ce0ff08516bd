use frameforge_frame::FrameRegistry;

use crate::cmd::{deck, FramesArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_frames, OutputFormat};

pub fn run(args: FramesArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = FrameRegistry::new();
    deck::build(&args.deck, &registry);
    print_frames(&registry.frames(), format);
    Ok(SUCCESS)
}
