mod app;

use anyhow::Context;

const DEFAULT_PAGE_COUNT: usize = 5;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    let _ = env_logger::try_init();

    let page_count = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("page count must be a non-negative integer, got {arg:?}"))?,
        None => DEFAULT_PAGE_COUNT,
    };

    app::run(page_count);
    Ok(())
}
