//! Build script for badge-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates the bundled assets at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use embedded_graphics::geometry::OriginDimensions;
use embedded_graphics::pixelcolor::Rgb888;
use tinybmp::Bmp;

const ASSET_DIR: &str = "assets";
const BITMAP: &str = "smile.bmp";
const CONTACT: &str = "contact.txt";
const BITCOIN: &str = "bitcoin.txt";

/// Characters shown either side of the address ellipsis
const ADDRESS_AFFIX_LEN: usize = 6;

/// Canvas size in the landscape orientation the firmware uses
const CANVAS: (u32, u32) = (296, 128);
const BITMAP_ORIGIN_X: u32 = 180;

fn main() {
    setup_linker();
    validate_assets();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).expect("create memory.x");
    f.write_all(memory_x).expect("write memory.x");

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Check every bundled asset
///
/// A missing asset fails the build, since `include_bytes!` would anyway.
/// A malformed one only warns: the firmware skips what it cannot draw.
fn validate_assets() {
    println!("cargo:rerun-if-changed={}", ASSET_DIR);

    let mut warnings = Vec::new();

    let bitmap = read_asset(BITMAP);
    check_bitmap(&bitmap, &mut warnings);

    let contact = read_asset(CONTACT);
    check_contact(&contact, &mut warnings);

    let bitcoin = read_asset(BITCOIN);
    check_bitcoin(&bitcoin, &mut warnings);

    if warnings.is_empty() {
        println!("cargo:warning=assets validated successfully");
    }
    for warning in warnings {
        println!("cargo:warning={}", warning);
    }
}

fn read_asset(name: &str) -> Vec<u8> {
    let path = Path::new(ASSET_DIR).join(name);
    println!("cargo:rerun-if-changed={}", path.display());

    match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: asset not found                                          ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&format!("{}: {}", path.display(), e))
        ),
    }
}

fn check_bitmap(bytes: &[u8], warnings: &mut Vec<String>) {
    match Bmp::<Rgb888>::from_slice(bytes) {
        Ok(bmp) => {
            let size = bmp.size();
            if BITMAP_ORIGIN_X + size.width > CANVAS.0 || size.height > CANVAS.1 {
                warnings.push(format!(
                    "{} is {}x{}, it will be clipped at the canvas edge",
                    BITMAP, size.width, size.height
                ));
            }
        }
        Err(e) => warnings.push(format!("{} is not a readable BMP: {:?}", BITMAP, e)),
    }
}

fn check_contact(bytes: &[u8], warnings: &mut Vec<String>) {
    let Some(text) = utf8(CONTACT, bytes, warnings) else {
        return;
    };
    let lines = text.split('\n').count();
    if lines < 3 {
        warnings.push(format!(
            "{} has {} line(s); name, title and an extra line are expected",
            CONTACT, lines
        ));
    }
}

fn check_bitcoin(bytes: &[u8], warnings: &mut Vec<String>) {
    let Some(text) = utf8(BITCOIN, bytes, warnings) else {
        return;
    };

    for (i, line) in text.split('\n').take(2).enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match line.find(' ') {
            None => warnings.push(format!(
                "{} line {} has no space between address and comment",
                BITCOIN,
                i + 1
            )),
            Some(0) => warnings.push(format!("{} line {} has an empty address", BITCOIN, i + 1)),
            Some(end) if line[..end].chars().count() < ADDRESS_AFFIX_LEN => warnings.push(format!(
                "{} line {} address is shorter than {} characters",
                BITCOIN,
                i + 1,
                ADDRESS_AFFIX_LEN
            )),
            Some(_) => {}
        }
    }
    if text.split('\n').count() < 2 {
        warnings.push(format!("{} needs a second line for the alternate view", BITCOIN));
    }
}

fn utf8<'a>(name: &str, bytes: &'a [u8], warnings: &mut Vec<String>) -> Option<&'a str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            warnings.push(format!("{} is not valid UTF-8: {}", name, e));
            None
        }
    }
}

/// Width of the text column inside the error box, in characters
const BOX_WIDTH: usize = 64;

/// Format error message lines with box drawing
///
/// Lines are cut on character boundaries; io errors can carry non-ASCII
/// paths.
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| format!("║  {:<width$} ║", fit_line(line), width = BOX_WIDTH))
        .collect::<Vec<_>>()
        .join("\n")
}

fn fit_line(line: &str) -> String {
    match line.char_indices().nth(BOX_WIDTH) {
        None => line.to_string(),
        Some(_) => {
            let cut = line
                .char_indices()
                .nth(BOX_WIDTH - 3)
                .map_or(line.len(), |(i, _)| i);
            format!("{}...", &line[..cut])
        }
    }
}
