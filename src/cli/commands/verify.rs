use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::report::seal;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    let Commands::Verify { file } = cmd else {
        return Ok(());
    };

    seal::verify(Path::new(file))?;
    success(format!("Seal intact: {}", file));
    Ok(())
}
