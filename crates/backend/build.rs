use std::env;
use std::fs;
use std::path::Path;

/// Files copied from the workspace root next to the built binary
const RUNTIME_FILES: &[&str] = &["config.toml", "seed.json"];

fn main() {
    for file in RUNTIME_FILES {
        println!("cargo:rerun-if-changed=../../{}", file);
    }

    // OUT_DIR: target/<profile>/build/backend-xxx/out
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    for file in RUNTIME_FILES {
        let source = workspace_root.join(file);
        if !source.exists() {
            // seed.json is optional, config.toml falls back to the embedded default
            continue;
        }
        let dest = target_dir.join(file);
        fs::copy(&source, &dest).unwrap_or_else(|e| panic!("Failed to copy {}: {}", file, e));
        println!("cargo:warning=Copied {} to {:?}", file, dest);
    }
}
