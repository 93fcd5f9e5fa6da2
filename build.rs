use std::env;
use std::fs;
use std::path::Path;

/// Keys `config.rs` reads through `option_env!`
const CONFIG_KEYS: [&str; 8] = [
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "CACHE_TTL_SECONDS",
    "SESSION_STORAGE_KEY",
    "NOTIFICATION_TIMEOUT_MS",
];

/// `KEY=VALUE` pairs from a dotenv file; comments, blanks and quotes dropped
fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().trim_matches('"').to_string()))
        .collect()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found, using built-in defaults. Copy .env.example to .env to point the console at another backend.");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=.env exists but could not be read");
        return;
    };
    for (key, value) in parse_dotenv(&contents) {
        // Real environment wins over .env
        if env::var(&key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
