use std::path::Path;

use anyhow::{Context, Result, ensure};
use azclient_grpc::{AzConfig, AzOption, with_endpoint};
use figment::Figment;
use figment::providers::{Env, Format, Yaml};

/// Prefix of environment overrides, e.g. `AZCHECK__PDP_ENDPOINT__PORT=9094`.
pub const ENV_PREFIX: &str = "AZCHECK__";

/// Loads the client configuration: defaults, then the YAML file (if any),
/// then `AZCHECK__` environment variables.
pub fn load(path: Option<&Path>) -> Result<AzConfig> {
    let mut figment = Figment::new();
    if let Some(path) = path {
        ensure!(path.is_file(), "config file {} not found", path.display());
        figment = figment.merge(Yaml::file(path));
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("invalid azcheck configuration")
}

/// Option function for `--host`/`--port`; unset flags keep the loaded value.
pub fn endpoint_override(
    config: &AzConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Option<AzOption> {
    if host.is_none() && port.is_none() {
        return None;
    }
    let host = host.unwrap_or_else(|| config.pdp_endpoint.endpoint.clone());
    let port = port.unwrap_or(config.pdp_endpoint.port);
    Some(with_endpoint(host, port))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use figment::Jail;

    fn load_in(jail: &Jail, path: Option<&str>) -> figment::error::Result<AzConfig> {
        let path = path.map(|p| jail.directory().join(p));
        load(path.as_deref()).map_err(|e| format!("{e:#}").into())
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file("azcheck.yaml", "pdp_endpoint:\n  endpoint: pdp.internal\n")?;

            let config = load_in(jail, Some("azcheck.yaml"))?;

            assert_eq!(config.pdp_endpoint.endpoint, "pdp.internal");
            assert_eq!(config.pdp_endpoint.port, 9094);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_yaml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "azcheck.yaml",
                "pdp_endpoint:\n  endpoint: pdp.internal\n  port: 9094\n",
            )?;
            jail.set_env("AZCHECK__PDP_ENDPOINT__PORT", "9095");

            let config = load_in(jail, Some("azcheck.yaml"))?;

            assert_eq!(config.pdp_endpoint.endpoint, "pdp.internal");
            assert_eq!(config.pdp_endpoint.port, 9095);
            Ok(())
        });
    }

    #[test]
    fn environment_alone_configures_endpoint() {
        Jail::expect_with(|jail| {
            jail.set_env("AZCHECK__PDP_ENDPOINT__ENDPOINT", "10.0.0.7");

            let config = load_in(jail, None)?;

            assert_eq!(config.pdp_endpoint.target(), "http://10.0.0.7:9094");
            Ok(())
        });
    }

    #[test]
    fn missing_config_file_is_an_error() {
        Jail::expect_with(|jail| {
            let err = load_in(jail, Some("does/not/exist.yaml")).unwrap_err();

            assert!(err.to_string().contains("not found"));
            Ok(())
        });
    }

    #[test]
    fn unknown_keys_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("azcheck.yaml", "pdp_endpoint:\n  tls: true\n")?;

            assert!(load_in(jail, Some("azcheck.yaml")).is_err());
            Ok(())
        });
    }

    #[test]
    fn flags_override_only_what_they_set() {
        let mut config = AzConfig::default();
        config.pdp_endpoint.endpoint = "pdp.internal".to_owned();

        assert!(endpoint_override(&config, None, None).is_none());

        let opt = endpoint_override(&config, None, Some(50051));
        config.apply(opt);

        assert_eq!(config.pdp_endpoint.target(), "http://pdp.internal:50051");
    }
}
