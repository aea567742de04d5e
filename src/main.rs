// Thai national ID card field extraction from OCR text

use clap::Parser;
use log::{error, info};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use thai_id_ocr::{
    models::ApiResponse, ExtractionError, IdCardExtractor, RecognitionConfig, RecognitionParams,
};

#[derive(Debug, Parser)]
#[command(name = "thai-id-ocr", version, about = "Extract fields from Thai ID card OCR text")]
struct Args {
    /// File holding the OCR text, or `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Recognition language (tha, eng, tha+eng)
    #[arg(long)]
    lang: Option<String>,

    /// OCR engine mode (0-3)
    #[arg(long, allow_negative_numbers = true)]
    oem: Option<i64>,

    /// Page segmentation mode (0-13)
    #[arg(long, allow_negative_numbers = true)]
    psm: Option<i64>,

    /// Resolution hint; only 300 is honoured
    #[arg(long)]
    dpi: Option<i64>,

    /// Reject out-of-range recognition parameters instead of using defaults
    #[arg(long)]
    strict: bool,

    /// Wrap the result in a status/message envelope
    #[arg(long)]
    envelope: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn read_input(path: &Path) -> Result<String, ExtractionError> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, ExtractionError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn run(args: Args) -> Result<(), ExtractionError> {
    let params = RecognitionParams {
        lang: args.lang,
        oem: args.oem,
        psm: args.psm,
        dpi: args.dpi,
    };

    let config = if args.strict {
        match RecognitionConfig::try_from(params) {
            Ok(config) => config,
            Err(e) if args.envelope => {
                let response: ApiResponse<()> = ApiResponse::bad_request(vec![e.to_string()]);
                println!("{}", to_json(&response, args.pretty)?);
                return Err(e);
            }
            Err(e) => return Err(e),
        }
    } else {
        RecognitionConfig::resolve(&params)
    };
    let extractor = IdCardExtractor::with_config(config);
    info!("Recognition config: {:?}", extractor.config());

    let text = read_input(&args.input)?;
    let identity = extractor.extract(&text);

    let output = if args.envelope {
        to_json(&ApiResponse::success("Success", identity), args.pretty)?
    } else {
        to_json(&identity, args.pretty)?
    };
    println!("{}", output);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
