mod app;
mod entry;
mod system;

use zonebench::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
