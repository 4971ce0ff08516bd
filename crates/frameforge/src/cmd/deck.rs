use frameforge_frame::FrameRegistry;
use frameforge_templates::Templates;

use crate::cmd::DeckArgs;

/// Register the frames requested by `args` and return the frame count.
pub fn build(args: &DeckArgs, registry: &FrameRegistry) -> usize {
    let templates = Templates::new(registry, &args.api_url);

    if !args.no_landing {
        templates.landing(
            &args.logo,
            &args.heading,
            args.github.as_deref().unwrap_or_default(),
            args.x.as_deref().unwrap_or_default(),
        );
    }
    if let Some(path) = &args.readme {
        templates.readme(path);
    }
    if let Some(dir) = &args.slides {
        templates.slides(dir);
    }
    if args.keyboard {
        templates.keyboard();
    }

    let count = registry.count();
    tracing::debug!(frames = count, api_url = templates.api_url(), "deck built");
    count
}
