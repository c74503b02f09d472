mod app;
mod entry;
mod system;

use iprotate::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
