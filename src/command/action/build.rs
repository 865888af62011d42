use serde::Deserialize;

use clap::Args;

#[derive(Clone, Debug, Default, Deserialize, Args)]
pub struct ConfigOption {
    #[clap(name = "filename")]
    pub filename: Option<String>,

    /// 대상 바이트코드 버전입니다. (2.0.0 또는 2.1.0)
    #[clap(long = "target", default_value = "2.0.0")]
    pub target: String,
}

#[derive(Clone, Debug, Args)]
#[clap(name = "build")]
pub struct Action {
    #[clap(flatten)]
    pub value: ConfigOption,
}
