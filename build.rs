use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUTPUT_DIR: &str = "assets/dist";
const CSS_OUTPUT: &str = "assets/dist/bundle.css";

/// Resolve @imports from `entry`, minify, and return the CSS text
fn bundle_stylesheet(entry: &Path) -> Result<String, String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(entry)
        .map_err(|e| format!("bundle {}: {}", entry.display(), e))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minify: {}", e))?;

    let output = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("print: {}", e))?;

    Ok(output.code)
}

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all(CSS_OUTPUT_DIR).expect("Failed to create assets/dist directory");

    let css = match bundle_stylesheet(Path::new(CSS_ENTRY)) {
        Ok(css) => css,
        Err(e) => panic!("Failed to build stylesheet: {}", e),
    };

    fs::write(CSS_OUTPUT, css).expect("Failed to write bundle.css");
}
