use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use maxcube_codec::logging::init_logger_with_level;
use maxcube_codec::util::logging::log_frame_hex;
use maxcube_codec::{
    decode_date_time, decode_hex_value, encode_date_time_bytes, encode_hex, encode_hex_values,
    init_logger, log_info, widen_byte, DecodedTimestamp,
};
use serde_json::json;

#[derive(Parser)]
#[command(name = "maxcube-codec")]
#[command(about = "CLI tool for MAX!Cube packed telemetry fields")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a packed date word and packed time byte, both given in hex
    DecodeDateTime {
        date: String,
        time: String,
        /// Reject values that are not a real calendar instant
        #[arg(long)]
        strict: bool,
    },
    /// Pack a timestamp into its three wire bytes
    EncodeDateTime {
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
    },
    /// Render integers in 0-255 as two-digit uppercase hex
    HexEncode {
        #[arg(allow_negative_numbers = true, required = true)]
        values: Vec<i64>,
    },
    /// Parse a hex number into its integer value
    HexDecode { hex: String },
    /// Reinterpret a signed byte as its unsigned bit pattern
    Widen {
        #[arg(allow_negative_numbers = true)]
        value: i8,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        init_logger_with_level(LevelFilter::Debug);
    } else {
        init_logger();
    }

    match cli.command {
        Commands::DecodeDateTime { date, time, strict } => {
            let date = decode_hex_value(&date).context("invalid packed date")?;
            let date = u16::try_from(date)
                .with_context(|| format!("packed date 0x{date:X} is wider than 16 bits"))?;
            let time = decode_hex_value(&time).context("invalid packed time")?;
            let time = u8::try_from(time)
                .with_context(|| format!("packed time 0x{time:X} is wider than 8 bits"))?;

            let [high, low] = date.to_be_bytes();
            log_frame_hex("Packed date/time", &[high, low, time]);

            let timestamp = decode_date_time(date, time);
            if strict {
                timestamp
                    .to_naive_date_time()
                    .context("decoded fields failed calendar validation")?;
            }
            print_timestamp(&timestamp, cli.json)?;
        }
        Commands::EncodeDateTime {
            year,
            month,
            day,
            hour,
            minute,
        } => {
            let timestamp = DecodedTimestamp::new(year, month, day, hour, minute);
            let bytes = encode_date_time_bytes(&timestamp)
                .with_context(|| format!("cannot pack {timestamp}"))?;
            let hex = encode_hex(&bytes);
            log_info(&format!("Packed {timestamp} as {hex}"));
            print_value(json!({ "hex": hex }), hex, cli.json)?;
        }
        Commands::HexEncode { values } => {
            let hex = encode_hex_values(values).context("cannot hex-encode values")?;
            print_value(json!({ "hex": hex }), hex, cli.json)?;
        }
        Commands::HexDecode { hex } => {
            let value = decode_hex_value(&hex).with_context(|| format!("cannot decode {hex:?}"))?;
            print_value(json!({ "value": value }), value.to_string(), cli.json)?;
        }
        Commands::Widen { value } => {
            let widened = widen_byte(value);
            print_value(json!({ "value": widened }), widened.to_string(), cli.json)?;
        }
    }

    Ok(())
}

fn print_timestamp(timestamp: &DecodedTimestamp, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string(timestamp)?);
    } else {
        println!("{timestamp}");
    }
    Ok(())
}

fn print_value(json_value: serde_json::Value, plain: String, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string(&json_value)?);
    } else {
        println!("{plain}");
    }
    Ok(())
}
