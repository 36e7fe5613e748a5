use std::fs;
use std::io;
use std::process::Command;

const WASM_MANIFEST_PATH: &str = "./wasm/Cargo.toml";
const WASM_FILE_NAME: &str = "wasm_careergap.wasm";
const COMPILATION_PATH: &str = "target-wasm";
const PKG_PATH: &str = "public/static/pkg";

fn main() {
    println!("cargo::rerun-if-changed=wasm/src");
    println!("cargo::rerun-if-changed=wasm/Cargo.toml");
    println!("cargo::rerun-if-changed=dto/src");
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_owned());
    let profile = profile.as_str();
    let wasm_file_path =
        format!("{COMPILATION_PATH}/wasm32-unknown-unknown/{profile}/{WASM_FILE_NAME}");

    if let Err(message) = compile_wasm(profile).and_then(|_| generate_bindings(&wasm_file_path)) {
        println!("cargo::warning=Frontend was not built: {message}");
    }
}

fn compile_wasm(profile: &str) -> Result<(), String> {
    let target_dir = format!("--target-dir={COMPILATION_PATH}");
    let manifest_path = format!("--manifest-path={WASM_MANIFEST_PATH}");
    let mut build_args = vec![
        "build",
        "--target=wasm32-unknown-unknown",
        target_dir.as_str(),
        manifest_path.as_str(),
    ];
    if profile == "release" {
        build_args.push("--release");
    }
    let output = Command::new(std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_owned()))
        .args(build_args)
        .output()
        .map_err(|error| format!("can't run cargo ({error})"))?;

    if !output.status.success() {
        return Err(format!(
            "wasm compilation failed, is the wasm32-unknown-unknown target installed?\n{}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(())
}

/// Generate JS & TS bindings
fn generate_bindings(wasm_file_path: &str) -> Result<(), String> {
    delete_entity(PKG_PATH).map_err(|error| format!("can't clean {PKG_PATH} ({error})"))?;
    let out_dir_param = format!("--out-dir={PKG_PATH}");
    let wasm_bindgen_args = ["--target=web", out_dir_param.as_str(), wasm_file_path];
    let output = Command::new("wasm-bindgen")
        .args(wasm_bindgen_args)
        .output()
        .map_err(|error| format!("can't run wasm-bindgen, is wasm-bindgen-cli installed? ({error})"))?;

    if !output.status.success() {
        return Err(format!(
            "wasm-bindgen failed\n{}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(())
}

fn delete_entity(path: &str) -> io::Result<()> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(_) => Ok(()),
    }
}
