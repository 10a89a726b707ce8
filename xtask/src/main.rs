use std::env;

use common::settings::TracingSettings;
use common::tracing;
use xtask::tasks::ci::ci;
use xtask::tasks::frontend::frontend;
use xtask::tasks::test::xtest;

fn main() -> Result<(), anyhow::Error> {
    tracing::init_tracing(TracingSettings::dev());
    try_main()
}

fn try_main() -> Result<(), anyhow::Error> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("ci") => ci(),
        Some("test") => xtest(),
        Some("frontend") => frontend(),
        _ => print_help(),
    }
}

fn print_help() -> anyhow::Result<()> {
    eprintln!(
        r#"
Usage: cargo xtask <task>

Tasks:
  test            runs unit and integration tests (uses nextest if installed)
  ci              runs all necessary checks to avoid CI errors when git pushed
  frontend        builds the registration frontend with trunk
"#
    );

    Ok(())
}
