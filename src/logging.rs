/// Info-level logging by default; `RUST_LOG` overrides the filter as usual.
pub fn setup_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();
}
