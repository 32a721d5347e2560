use std::time::Instant;
use clap::{arg,crate_version,Command};
use lzhuff::{compress,decompress,dump,huffman,lz,Error,Params};

/// Read a file, mapping any I/O failure through `lzhuff::Error::Io` so the
/// crate's own error type — not just the binary's `Box<dyn Error>` — is
/// what actually reports a failing read.
fn read_file(path: &str) -> Result<Vec<u8>,Error> {
    std::fs::read(path).map_err(Error::Io)
}

/// Write a file, mapping any I/O failure through `lzhuff::Error::Io`.
fn write_file(path: &str, data: &[u8]) -> Result<(),Error> {
    std::fs::write(path,data).map_err(Error::Io)
}

const RCH: &str = "unreachable was reached";

fn main() -> Result<(),Box<dyn std::error::Error>> {
    let long_help =
"Examples:
---------
Compress:      `lzhuff compress -i my_file -o my_file.lzh`
Expand:        `lzhuff expand -i my_file.lzh -o my_file`";

    let mut main_cmd = Command::new("lzhuff")
        .about("LZ77 + static Huffman file compression")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(Command::new("compress")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(-o --output <PATH> "output path").required(true))
        .arg(arg!(--"min-match" <N> "minimum admissible match length").default_value("3"))
        .arg(arg!(--"max-match" <N> "cap on any single back-reference length").default_value("255"))
        .arg(arg!(--"search-window" <N> "maximum distance of any back-reference").default_value("4096"))
        .arg(arg!(--"dump-tree" <PATH> "write the Huffman tree in Graphviz form").required(false))
        .arg(arg!(--"dump-tokens" <PATH> "write the LZ77 token stream as text").required(false))
        .arg(arg!(-v --verbose "log elapsed time and compression ratio"))
        .about("compress a file"));

    main_cmd = main_cmd.subcommand(Command::new("expand")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(-o --output <PATH> "output path").required(true))
        .arg(arg!(-v --verbose "log elapsed time"))
        .about("expand a file"));

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("compress") {
        if cmd.get_flag("verbose") {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        }
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let min_match: u8 = cmd.get_one::<String>("min-match").expect(RCH).parse()?;
        let max_match: u8 = cmd.get_one::<String>("max-match").expect(RCH).parse()?;
        let search_window: u16 = cmd.get_one::<String>("search-window").expect(RCH).parse()?;
        let params = Params::new(min_match,max_match,search_window)?;

        let dat = read_file(path_in)?;
        let start = Instant::now();

        if cmd.get_one::<String>("dump-tree").is_some() || cmd.get_one::<String>("dump-tokens").is_some() {
            let tokens = lz::encode(&dat,params.min_match,params.max_match,params.search_window);
            if let Some(path) = cmd.get_one::<String>("dump-tokens") {
                write_file(path,dump::token_dump(&tokens).as_bytes())?;
            }
            if let Some(path) = cmd.get_one::<String>("dump-tree") {
                let freq = huffman::accumulate(&tokens);
                if let Some(root) = huffman::build(&freq) {
                    write_file(path,dump::graphviz(&root).as_bytes())?;
                }
            }
        }

        let compressed = compress(&dat,&params)?;
        write_file(path_out,&compressed)?;

        if cmd.get_flag("verbose") {
            let ratio = compressed.len() as f64 / dat.len() as f64;
            log::info!("compressed {} bytes into {} bytes (ratio {:.3}) in {:?}",
                dat.len(),compressed.len(),ratio,start.elapsed());
        }
    }

    if let Some(cmd) = matches.subcommand_matches("expand") {
        if cmd.get_flag("verbose") {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        }
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let dat = read_file(path_in)?;
        let start = Instant::now();
        let expanded = decompress(&dat)?;
        write_file(path_out,&expanded)?;
        if cmd.get_flag("verbose") {
            log::info!("expanded {} bytes into {} bytes in {:?}",dat.len(),expanded.len(),start.elapsed());
        }
    }

    Ok(())
}
