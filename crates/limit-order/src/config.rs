use {
    alloy::primitives::Address,
    anyhow::{Context, anyhow},
    contracts::alloy::networks,
    serde::{Deserialize, Serialize},
    std::path::Path,
    url::Url,
};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Configuration {
    /// Networks the client knows about. Replaces the built-in list when
    /// given.
    #[serde(default = "default_networks")]
    pub networks: Vec<Network>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Network {
    pub chain_id: u64,
    pub name: String,
    /// Block explorer that serves transactions under `/tx/<hash>`.
    pub explorer_url: Url,
    /// Limit order contract on this network, used when none is passed on the
    /// command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<Address>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            networks: default_networks(),
        }
    }
}

fn default_networks() -> Vec<Network> {
    [
        (networks::SEPOLIA, "Sepolia", "https://sepolia.etherscan.io"),
        (
            networks::AVALANCHE_FUJI,
            "Avalanche Fuji",
            "https://testnet.snowtrace.io",
        ),
    ]
    .into_iter()
    .filter_map(|(chain_id, name, explorer)| {
        Some(Network {
            chain_id,
            name: name.to_string(),
            explorer_url: explorer.parse().ok()?,
            contract_address: None,
        })
    })
    .collect()
}

impl Configuration {
    pub async fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read config at {}", path.as_ref().display()))?;
        match toml::from_str(&content) {
            Ok(self_) => Ok(self_),
            Err(err) => Err(anyhow!(
                "failed to parse TOML config at {}: {err}",
                path.as_ref().display()
            )),
        }
    }

    pub fn network(&self, chain_id: u64) -> Option<&Network> {
        self.networks
            .iter()
            .find(|network| network.chain_id == chain_id)
    }
}
