use crate::core::domain::{Configuration, LogFormat};

pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // logs go to stderr so they never interleave with the rendered shelf.
        .with_writer(std::io::stderr);

    // a subscriber may already be installed (e.g. by an embedding host); keep it.
    let _ = match config.log_format {
        LogFormat::Json => builder.with_ansi(false).without_time().json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{Configuration, LogFormat};
    use crate::utils::logs::setup_tracing;

    #[tokio::test]
    async fn test_should_tolerate_repeated_setup() {
        let mut config = Configuration::new("test");
        setup_tracing(&config);
        config.log_format = LogFormat::Json;
        setup_tracing(&config);
        tracing::info!("still logging");
    }
}
