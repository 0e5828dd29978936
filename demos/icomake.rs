use clap::{App, Arg, ArgMatches, SubCommand};
use icopack::{FrameSpec, IconEncoder, SourceImage};
use std::path::PathBuf;
use std::process;

//===========================================================================//

fn main() {
    let matches = App::new("icomake")
        .version("0.1")
        .about("Makes ICO files out of ordinary images")
        .subcommand(
            SubCommand::with_name("create")
                .about("Creates an ICO file from an image file")
                .arg(
                    Arg::with_name("output")
                        .takes_value(true)
                        .value_name("PATH")
                        .short("o")
                        .long("output")
                        .help("Sets output path"),
                )
                .arg(
                    Arg::with_name("sizes")
                        .takes_value(true)
                        .value_name("LIST")
                        .short("s")
                        .long("sizes")
                        .help("Comma-separated frame sizes, e.g. 16,32,48x32"),
                )
                .arg(
                    Arg::with_name("flip-horizontal")
                        .long("flip-horizontal")
                        .help("Flips the image left-to-right first"),
                )
                .arg(
                    Arg::with_name("flip-vertical")
                        .long("flip-vertical")
                        .help("Flips the image top-to-bottom first"),
                )
                .arg(
                    Arg::with_name("rotate")
                        .long("rotate")
                        .help("Rotates the image 90 degrees clockwise first"),
                )
                .arg(
                    Arg::with_name("grayscale")
                        .long("grayscale")
                        .help("Converts the image to grayscale first"),
                )
                .arg(Arg::with_name("image").required(true)),
        )
        .subcommand(
            SubCommand::with_name("info")
                .about("Shows the size, format, and color mode of an image file")
                .arg(Arg::with_name("image").required(true)),
        )
        .get_matches();
    let result = if let Some(submatches) = matches.subcommand_matches("create")
    {
        create(submatches)
    } else if let Some(submatches) = matches.subcommand_matches("info") {
        info(submatches)
    } else {
        Err(matches.usage().to_string())
    };
    if let Err(message) = result {
        eprintln!("error: {}", message);
        process::exit(1);
    }
}

fn create(submatches: &ArgMatches) -> Result<(), String> {
    let in_path = submatches.value_of("image").unwrap_or_default();
    let mut image = image::open(in_path)
        .map_err(|error| format!("{}: {}", in_path, error))?;
    if submatches.is_present("flip-horizontal") {
        image = image.fliph();
    }
    if submatches.is_present("flip-vertical") {
        image = image.flipv();
    }
    if submatches.is_present("rotate") {
        image = image.rotate90();
    }
    if submatches.is_present("grayscale") {
        image = image.grayscale();
    }
    let source =
        SourceImage::from_dynamic_image(image).map_err(|e| e.to_string())?;
    let specs = match submatches.value_of("sizes") {
        Some(list) => list
            .split(',')
            .map(|size| size.parse::<FrameSpec>())
            .collect::<Result<Vec<_>, _>>()?,
        None => FrameSpec::defaults(),
    };
    let out_path = if let Some(path) = submatches.value_of("output") {
        PathBuf::from(path)
    } else {
        let mut path = PathBuf::from("out.ico");
        let mut index: i32 = 0;
        while path.exists() {
            index += 1;
            path = PathBuf::from(format!("out{}.ico", index));
        }
        path
    };
    let icon = IconEncoder::new()
        .encode(&source, &specs)
        .map_err(|error| error.to_string())?;
    icon.save(&out_path)
        .map_err(|error| format!("{}: {}", out_path.display(), error))?;
    for (index, entry) in icon.entries().iter().enumerate() {
        println!(
            "{:5}: {}x{} PNG, {} bytes at offset {}",
            index,
            entry.width(),
            entry.height(),
            entry.data_size(),
            entry.data_offset()
        );
    }
    println!("Wrote {:?} ({} bytes)", out_path, icon.len());
    Ok(())
}

fn info(submatches: &ArgMatches) -> Result<(), String> {
    let path = submatches.value_of("image").unwrap_or_default();
    let format = image::io::Reader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|error| format!("{}: {}", path, error))?
        .format();
    let source = SourceImage::open(path).map_err(|e| e.to_string())?;
    println!("Size: {} x {} px", source.width(), source.height());
    match format {
        Some(format) => println!("Format: {:?}", format),
        None => println!("Format: unknown"),
    }
    println!("Color mode: {:?}", source.color_mode());
    Ok(())
}

//===========================================================================//
