// Assembles the static site: mirrors `static/` into `dist/`.
use std::{fs, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let mut options = fs_extra::dir::CopyOptions::new();
        options.overwrite = true;
        options.content_only = true;
        if let Err(err) = fs_extra::dir::copy(static_dir, out_dir, &options) {
            println!("cargo:warning=static copy failed: {err}");
        }
    }
}
