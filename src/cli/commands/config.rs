//! ccimport config - Show the effective configuration

use clap::Args;

use crate::app::AppContext;
use crate::cli::output;
use crate::config::Config;
use crate::error::{CcError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the config file path and exit
    #[arg(long)]
    pub path: bool,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    if args.path {
        let path = ctx
            .config_path
            .clone()
            .or_else(Config::global_path)
            .ok_or_else(|| CcError::MissingConfig("config directory".to_string()))?;
        if ctx.robot_mode() {
            return output::emit_robot(&output::robot_ok(serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
            })));
        }
        println!("{}", path.display());
        return Ok(());
    }

    emit_config(ctx)
}

fn emit_config(ctx: &AppContext) -> Result<()> {
    if ctx.robot_mode() {
        return output::emit_robot(&output::robot_ok(&ctx.config));
    }

    let rendered = toml::to_string_pretty(&ctx.config)
        .map_err(|err| CcError::Config(format!("render config: {err}")))?;
    print!("{rendered}");
    Ok(())
}
