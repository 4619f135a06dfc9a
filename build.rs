use std::path::Path;
use std::{env, fs};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let target_dir = Path::new(&out_dir).ancestors().nth(3).unwrap();

    let profile = env::var("PROFILE").unwrap();
    let source_file = format!("scoreboard.{}.toml", profile);

    // The per-profile config is optional; the app falls back to built-in
    // defaults when no config file is present next to the binary.
    if Path::new(&source_file).is_file() {
        fs::create_dir_all(target_dir).expect("Failed to create target directory");
        fs::copy(&source_file, target_dir.join("scoreboard.toml"))
            .unwrap_or_else(|e| panic!("Failed to copy {}: {}", source_file, e));
    }

    println!("cargo:rerun-if-changed={}", source_file);
}
