use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_TRANSACTIONS_PATH: &str = "../transactions.json";
pub const TRANSACTIONS_FILE_ENV: &str = "TRANSACTIONS_FILE";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub transactions_path: PathBuf,
    /// Enables the per-client rows of the report.
    pub client_full_name: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Config::resolve(env::args_os().skip(1), env::var_os(TRANSACTIONS_FILE_ENV))
    }

    /// Path: first argument, then the env variable, then the default.
    /// Client: second argument.
    pub fn resolve<I>(args: I, env_path: Option<OsString>) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();

        let transactions_path = args
            .next()
            .or(env_path)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSACTIONS_PATH));

        let client_full_name = args.next().map(|c| c.to_string_lossy().into_owned());

        Config {
            transactions_path,
            client_full_name,
        }
    }
}
