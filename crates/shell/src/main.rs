use qchaos_inventory::ObjectRegistry;
use qchaos_shell::{Session, ShellConfig};

fn main() -> anyhow::Result<()> {
    let config = ShellConfig::from_env();
    qchaos_observability::init(config.log_format);

    for warning in config.warnings() {
        tracing::warn!("{warning}");
    }

    let mut registry = ObjectRegistry::new();
    if config.seed_demo {
        registry.seed_demo()?;
        tracing::info!(objects = registry.len(), "seeded demo inventory");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), registry);
    session.run()
}
