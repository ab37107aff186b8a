/// Bundled config for builds shipped without a `.env` (web/mobile)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // A local .env wins during desktop development
    if dotenvy::dotenv().is_ok() {
        return;
    }

    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for line in BUNDLED_CONFIG.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            // Real environment takes precedence over the bundled defaults
            if std::env::var(key).is_err() {
                // SAFETY: set_var runs at startup before any threads exist
                unsafe {
                    std::env::set_var(key, value);
                }
            }
        }
    }
}

fn main() {
    load_dotenv();
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt::init();
    dioxus::launch(viongozi::ui::App);
}
