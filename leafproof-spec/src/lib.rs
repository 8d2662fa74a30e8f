use leafproof_merkle::{BuildOptions, DEFAULT_PARALLEL_THRESHOLD};
use serde::{Serialize, Deserialize};

/// Addresses used by the `demo` command.
pub const DEMO_ADDRESSES: [&str; 5] = [
    "0x123456789abcdef123456789abcdef123456789a",
    "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd",
    "0x789abcdef789abcdef789abcdef789abcdef789ab",
    "0xfedcbafedcbafedcbafedcbafedcbafedcbafedc",
    "0xabcdef123456789abcdef123456789abcdef1234",
];

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct BuildParams {
    /// Levels with at least this many nodes hash in parallel
    pub parallel_threshold: Option<usize>,
}

/// An ordered batch of leaf records plus build parameters
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Batch {
    pub records: Vec<String>,
    #[serde(default)]
    pub build: BuildParams,
}

impl Batch {
    pub fn demo() -> Self {
        Self { records: DEMO_ADDRESSES.iter().map(|s| s.to_string()).collect(), build: BuildParams::default() }
    }
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            parallel_threshold: self.build.parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
        }
    }
}

/// Parse a batch from TOML text
pub fn load_batch_toml(input: &str) -> Result<Batch, toml::de::Error> {
    toml::from_str::<Batch>(input)
}
