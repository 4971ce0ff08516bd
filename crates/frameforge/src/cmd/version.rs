use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("frameforge {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: frameforge");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("FRAMEFORGE_BUILD_TARGET").unwrap_or("unknown")
    );
    println!(
        "profile: {}",
        option_env!("FRAMEFORGE_BUILD_PROFILE").unwrap_or("unknown")
    );
    println!(
        "rustc: {}",
        option_env!("FRAMEFORGE_RUSTC_VERSION").unwrap_or("unknown")
    );
    println!(
        "features: nav={}, templates={}, cli=true",
        cfg!(feature = "nav"),
        cfg!(feature = "templates")
    );

    Ok(SUCCESS)
}
