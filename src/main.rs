use openrouter_catalog::{ReportSettings, Result, run};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = ReportSettings::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run(&settings, &mut out)?;
    Ok(())
}
