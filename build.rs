use std::env;
use std::fs;
use std::path::Path;

// Solo se reenvían las claves del overlay (NUI_*), el resto del .env se ignora
const ENV_PREFIX: &str = "NUI_";

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, comillas opcionales alrededor del valor
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !key.starts_with(ENV_PREFIX) {
                        continue;
                    }

                    // Las variables ya definidas en el entorno tienen prioridad
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in ["NUI_DEFAULT_ACCENT", "NUI_RESOURCE_NAME", "NUI_ENABLE_LOGGING", "NUI_LOG_LEVEL"] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
