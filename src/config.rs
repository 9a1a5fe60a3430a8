use std::fmt;

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;

use crate::sinks::SinkKind;

const DEFAULT_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_KOPOKOPO_URL: &str = "https://api.kopokopo.com";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DiagnosticsSettings {
    pub sink: SinkKind,
}

/// Gateway credentials and the URL Kopokopo calls back once a payment settles.
#[derive(Deserialize, Clone)]
pub struct KopokopoSettings {
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub till_number: String,
    pub callback_url: String,
}

impl fmt::Debug for KopokopoSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KopokopoSettings")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"******")
            .field("till_number", &self.till_number)
            .field("callback_url", &self.callback_url)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub diagnostics: DiagnosticsSettings,
    pub kopokopo: KopokopoSettings,
}

impl ServerConfig {
    /// Defaults, then an optional `config` file, then `LUCIE_PAY__*` env vars.
    pub fn load() -> anyhow::Result<Self> {
        let settings = defaults()?
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("LUCIE_PAY")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<ServerConfig>()?;

        Ok(settings)
    }
}

fn defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("server.addr", DEFAULT_ADDR)?
        .set_default("diagnostics.sink", "console")?
        .set_default("kopokopo.base_url", DEFAULT_KOPOKOPO_URL)?
        .set_default("kopokopo.client_id", "")?
        .set_default("kopokopo.client_secret", "")?
        .set_default("kopokopo.till_number", "")?
        .set_default("kopokopo.callback_url", "")?)
}
