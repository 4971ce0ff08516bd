use frameforge_frame::FrameRegistry;
use frameforge_nav::{resolve, CursorPolicy};

use crate::cmd::{deck, RenderArgs};
use crate::exit::{nav_error, CliError, CliResult, INTERNAL, SUCCESS};
use crate::output::print_raw;

pub fn run(args: RenderArgs) -> CliResult<i32> {
    let registry = FrameRegistry::new();
    let count = deck::build(&args.deck, &registry);

    let policy = if args.strict {
        CursorPolicy::Strict
    } else {
        CursorPolicy::Permissive
    };
    let nav = resolve(args.index.as_deref(), count, policy)
        .map_err(|err| nav_error("render failed", err))?;

    let frame = registry
        .get(nav.current)
        .ok_or_else(|| CliError::new(INTERNAL, format!("frame {} vanished", nav.current)))?;
    tracing::info!(
        current = nav.current,
        total = nav.total,
        prev = nav.prev,
        next = nav.next,
        "rendering frame"
    );
    print_raw(&frame.body());
    println!();

    Ok(SUCCESS)
}
