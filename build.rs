use std::env;
use std::fs;

// Vuelca las variables de .env como variables de entorno de compilación,
// para que el código las lea con option_env!. Las variables ya definidas
// en el entorno tienen prioridad sobre el archivo.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=.env.example");

    let contents = match fs::read_to_string(".env") {
        Ok(contents) => contents,
        Err(_) => {
            println!(
                "cargo:warning=No se encontró .env, se usan valores por defecto. \
                 Copia .env.example a .env para configurar BACKEND_URL."
            );
            return;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value.trim());
        }
    }
}
