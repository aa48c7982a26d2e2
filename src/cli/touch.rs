//! Touch target size command.

use clap::Args;
use tracing::info;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::services::accessibility::check_touch_target;

/// Check that an interactive element is large enough to tap
#[derive(Args, Debug)]
pub struct TouchArgs {
    /// Target width in px
    #[arg(value_name = "WIDTH")]
    width: u32,

    /// Target height in px
    #[arg(value_name = "HEIGHT")]
    height: u32,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl TouchArgs {
    /// Execute the touch command
    pub fn execute(&self) -> CliResult<()> {
        let result = check_touch_target(self.width, self.height);
        info!(width = self.width, height = self.height, passes = result.passes, "touch target check");

        if self.json {
            print_json(&result)?;
        } else {
            println!("{}", result.message());
        }

        if result.passes {
            Ok(())
        } else {
            Err(CliError::validation(format!(
                "Touch target is smaller than {}x{}px",
                result.min_required, result.min_required
            )))
        }
    }
}
