//! Minimal embedding example for dnsprovider-core
//!
//! This example demonstrates building a provider through the registry and
//! walking a zone's record set lifecycle. The provider lifecycle is fully
//! managed by the application.
//!
//! ## Configuration
//!
//! - `DNSPROVIDER_CONFIG`: Path to a JSON provider configuration
//!   (default: stub provider seeded with `example.com`)
//! - `DNSPROVIDER_LOG_LEVEL`: trace, debug, info, warn, error (default: info)
//!
//! ## Example
//!
//! ```bash
//! cat > /tmp/provider.json <<'JSON'
//! { "type": "stub", "zones": [ { "name": "example.com" } ] }
//! JSON
//!
//! DNSPROVIDER_CONFIG=/tmp/provider.json cargo run --bin embedded_usage
//! ```

use anyhow::{Context, Result};
use dnsprovider_core::config::ZoneConfig;
use dnsprovider_core::{
    DnsProvider, Error, ProviderConfig, ProviderRegistry, ResourceRecordSet, RrsType, conformance,
};
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
#[derive(Debug, Clone, Copy)]
enum DemoExitCode {
    /// Every step behaved as the contract requires
    Success = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// A provider call failed or broke the contract
    RuntimeError = 2,
}

impl From<DemoExitCode> for ExitCode {
    fn from(code: DemoExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application settings read from the environment
struct Settings {
    config_path: Option<String>,
    log_level: String,
}

impl Settings {
    /// Load settings from environment variables
    fn from_env() -> Self {
        Self {
            config_path: env::var("DNSPROVIDER_CONFIG").ok(),
            log_level: env::var("DNSPROVIDER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    fn max_level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => anyhow::bail!(
                "DNSPROVIDER_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                other
            ),
        }
    }

    /// Load the provider configuration
    fn provider_config(&self) -> Result<ProviderConfig> {
        let config = match &self.config_path {
            Some(path) => ProviderConfig::from_file(path)
                .with_context(|| format!("Failed to load DNSPROVIDER_CONFIG {}", path))?,
            None => ProviderConfig::Stub {
                zones: vec![ZoneConfig::new("example.com")],
            },
        };

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let settings = Settings::from_env();

    let log_level = match settings.max_level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return DemoExitCode::ConfigError.into();
        }
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return DemoExitCode::ConfigError.into();
    }

    let config = match settings.provider_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            return DemoExitCode::ConfigError.into();
        }
    };

    // Register built-in providers
    let registry = ProviderRegistry::new();
    dnsprovider_stub::register(&registry);
    info!("Registered providers: {:?}", registry.list_providers());

    let provider = match registry.create_provider(&config) {
        Ok(provider) => provider,
        Err(e) => {
            error!("Failed to create {} provider: {}", config.type_name(), e);
            return DemoExitCode::ConfigError.into();
        }
    };

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return DemoExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        if let Err(e) = run_demo(provider.as_ref()).await {
            error!("Demo failed: {:#}", e);
            DemoExitCode::RuntimeError
        } else {
            DemoExitCode::Success
        }
    });

    result.into()
}

/// Walk the record set lifecycle, then run the conformance checks
async fn run_demo(provider: &dyn DnsProvider) -> Result<()> {
    info!("Using provider: {}", provider.provider_name());

    let zone = conformance::first_zone(provider).await?;
    info!("Working in zone {} ({})", zone.name(), zone.id());

    let sets = zone.require_resource_record_sets()?;

    let rrset = sets.new_record_set(
        &format!("www11.{}", zone.name()),
        vec!["10.10.10.10".to_string(), "169.20.20.20".to_string()],
        180,
        RrsType::A,
    );

    let added = sets.add(rrset.clone()).await?;
    info!("Added record set: {}", added);
    log_record_sets(&sets.list().await?);

    match sets.add(rrset.clone()).await {
        Err(Error::DuplicateRecord(msg)) => info!("Duplicate add rejected: {}", msg),
        Err(e) => return Err(e.into()),
        Ok(_) => anyhow::bail!("duplicate add of {} was accepted", rrset.key()),
    }

    sets.remove(&rrset).await?;
    info!("Removed record set: {}", rrset.key());

    match sets.remove(&rrset).await {
        Err(Error::NotFound(msg)) => info!("Second removal rejected: {}", msg),
        Err(e) => return Err(e.into()),
        Ok(()) => anyhow::bail!("second removal of {} succeeded", rrset.key()),
    }

    let unchecked = ResourceRecordSet::new(
        format!("www12.{}", zone.name()),
        ["rubbish", "rubbish"],
        180,
        RrsType::A,
    );
    sets.add(unchecked.clone()).await?;
    warn!("Stored record set with unvalidated data: {}", unchecked);
    sets.remove(&unchecked).await?;

    let report = conformance::run(provider).await?;
    info!(
        "Provider {} passed {} conformance checks in zone {}",
        report.provider,
        report.passed.len(),
        report.zone
    );
    info!("Report: {}", serde_json::json!({ "passed": report.passed }));

    Ok(())
}

fn log_record_sets(list: &[ResourceRecordSet]) {
    info!("Zone holds {} record set(s)", list.len());
    for rrset in list {
        match serde_json::to_string(rrset) {
            Ok(json) => info!("  {}", json),
            Err(e) => warn!("  {} (unserializable: {})", rrset, e),
        }
    }
}
