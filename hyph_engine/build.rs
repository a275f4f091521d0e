use std::fs::File;
use std::io::Write;
use std::path::Path;

#[path = "src/hyphen/notation.rs"]
#[allow(dead_code)]
mod notation;

static SUFFIXES: &str = include_str!("src/resources/suffixes.txt");

fn main() {
    println!("cargo:rerun-if-changed=src/resources/suffixes.txt");
    println!("cargo:rerun-if-changed=src/hyphen/notation.rs");

    let entries = match notation::parse(SUFFIXES) {
        Ok(e) => e,
        Err((line, msg)) => panic!("src/resources/suffixes.txt, line {}: {}", line, msg),
    };
    let (index, bytes) = notation::pack(&entries).unwrap();

    let path = Path::new(&std::env::var("OUT_DIR").unwrap()).join("suffixes.rs");
    let mut file = std::io::BufWriter::new(File::create(path).unwrap());
    writeln!(&mut file, "/// Offset of every letter's entry list in [`SUFFIX_BYTES`]; `0`: none.").unwrap();
    writeln!(&mut file, "static SUFFIX_INDEX: [u16;26] = {:?};", index).unwrap();
    writeln!(&mut file, "/// The packed entries of the standard suffix table ({} entries).", entries.len()).unwrap();
    writeln!(&mut file, "static SUFFIX_BYTES: [u8;{}] = [", bytes.len()).unwrap();
    for chunk in bytes.chunks(16) {
        let line = chunk.iter().map(|b| format!("0x{:02x}", b)).collect::<Vec<_>>().join(",");
        writeln!(&mut file, "    {},", line).unwrap();
    }
    writeln!(&mut file, "];").unwrap();
}
