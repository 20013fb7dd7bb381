//! Build script for portier-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates access.toml and compiles it into the firmware

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Characters a badge reader can produce
const TAG_ALPHABET: &str = "0123456789ABCDEF";
/// Characters in one badge identifier
const TAG_LEN: usize = 10;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));

    setup_linker(&out_dir);

    let tags = load_access_list();
    check_access_list(&tags);
    write_access_list(&out_dir, &tags);
}

/// Set up linker search paths and scripts
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).expect("create memory.x");
    f.write_all(memory_x).expect("write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read access.toml and pull out `[access] tags`
fn load_access_list() -> Vec<String> {
    println!("cargo:rerun-if-changed=access.toml");

    let path = Path::new("access.toml");

    if !path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: access.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware compiles its badge allow-list from access.toml     ║\n\
            ║  in the portier-firmware directory. Create one with:             ║\n\
            ║                                                                  ║\n\
            ║      [access]                                                    ║\n\
            ║      tags = [\"1A2B3C4D5E\"]                                       ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read access.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in access.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let mut errors = Vec::new();
    let mut tags = Vec::new();

    match config.get("access") {
        Some(toml::Value::Table(access)) => match access.get("tags") {
            Some(toml::Value::Array(entries)) => {
                for (i, entry) in entries.iter().enumerate() {
                    match entry {
                        toml::Value::String(tag) => tags.push(tag.clone()),
                        other => errors.push(format!(
                            "[access] tags[{}] must be a string, found {}",
                            i,
                            other.type_str()
                        )),
                    }
                }
            }
            Some(_) => errors.push("[access] tags must be an array of strings".to_string()),
            None => errors.push("[access] missing 'tags'".to_string()),
        },
        Some(_) => errors.push("[access] must be a table".to_string()),
        None => errors.push("Missing [access] section".to_string()),
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid access configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    tags
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Warn about entries that are legal but suspicious
///
/// Nothing here fails the build: an unmatchable entry only wastes a slot.
fn check_access_list(tags: &[String]) {
    if tags.is_empty() {
        println!("cargo:warning=access.toml lists no tags; every badge will be refused");
    }

    for (i, tag) in tags.iter().enumerate() {
        if !is_reachable(tag) {
            println!(
                "cargo:warning=access.toml tag '{}' can never match a badge \
                 (needs exactly {} characters from {})",
                tag, TAG_LEN, TAG_ALPHABET
            );
        }

        if tags[..i].contains(tag) {
            println!(
                "cargo:warning=access.toml lists tag '{}' more than once",
                tag
            );
        }
    }

    println!(
        "cargo:warning=access.toml validated successfully ({} tags)",
        tags.len()
    );
}

fn is_reachable(tag: &str) -> bool {
    tag.len() == TAG_LEN && tag.chars().all(|c| TAG_ALPHABET.contains(c))
}

/// Emit `$OUT_DIR/access_list.rs` for `include!`
fn write_access_list(out_dir: &Path, tags: &[String]) {
    let mut source =
        String::from("/// Badge identifiers allowed to open the door, in match order\n");
    source.push_str("pub static AUTHORIZED_TAGS: &[&str] = &[\n");
    for tag in tags {
        source.push_str(&format!("    {:?},\n", tag));
    }
    source.push_str("];\n");

    fs::write(out_dir.join("access_list.rs"), source).expect("write access_list.rs");
}
